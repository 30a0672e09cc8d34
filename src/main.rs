//! DropNote Search - command-line entry point.
//!
//! Loads the note collection from the configured JSON store, builds the
//! in-memory index and runs a single query from the command line, printing
//! ranked results with previews.

use anyhow::Result;
use dropnote_search::{Config, JsonNoteStore, NoteSearchService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only; stdout is for results)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using notes file: {}", config.notes_path.display());

    let store = JsonNoteStore::new(&config.notes_path);
    let service = NoteSearchService::new();
    service.rebuild_from_store(&store);

    info!("Indexed {} notes", service.index_len());

    let query: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let results = service.search(&query, config.search_limit);

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>2}. {} (score {:.1}{})",
            rank + 1,
            result.note.title,
            result.score,
            if result.matched_in_title {
                ", title match"
            } else {
                ""
            }
        );
        if !result.preview.is_empty() {
            println!("    {}", result.preview);
        }
    }

    Ok(())
}
