//! Query evaluation: scoring, ranking, previews and highlight ranges.
//!
//! All functions here read an index snapshot and produce fresh results per
//! call; nothing is cached or mutated. "Now" is an explicit parameter so the
//! recency bonus is deterministic under test.

use crate::search::index::IndexedNote;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::ops::Range;

/// Preview target length when a query matched
const MATCHED_PREVIEW_LENGTH: usize = 100;

/// Preview target length for the no-query recency listing
const RECENT_PREVIEW_LENGTH: usize = 80;

/// Characters of context shown before the first match in a preview
const PREVIEW_CONTEXT_BEFORE: usize = 20;

/// Score for an exact title match
const TITLE_EXACT_SCORE: f64 = 1000.0;

/// Score for a title prefix match
const TITLE_PREFIX_SCORE: f64 = 500.0;

/// Score for a title match starting at a word boundary
const TITLE_WORD_SCORE: f64 = 400.0;

/// Score for any other title substring match
const TITLE_CONTAINS_SCORE: f64 = 300.0;

/// Flat score for a body match at the very start of the text
const TEXT_PREFIX_SCORE: f64 = 200.0;

/// Score per non-overlapping body occurrence
const TEXT_OCCURRENCE_SCORE: f64 = 50.0;

/// Days over which the recency bonus decays to zero
const RECENCY_WINDOW_DAYS: f64 = 100.0;

/// Weight applied to the recency bonus
const RECENCY_WEIGHT: f64 = 0.5;

/// A single ranked search result.
///
/// Results are ephemeral: constructed per query, never cached across calls.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Identifier of the matched note
    pub id: String,

    /// The matched index entry
    pub note: IndexedNote,

    /// Relevance score (higher is more relevant; 0 for recency listings)
    pub score: f64,

    /// Whether the query matched in the title
    pub matched_in_title: bool,

    /// Bounded excerpt of the note body, centered on the first match
    pub preview: String,

    /// Byte ranges within `preview` marking matched substrings
    pub highlight_ranges: Vec<Range<usize>>,
}

/// Search an index snapshot for a free-text query.
///
/// An empty or whitespace-only query returns the most recently modified
/// notes with score 0. Otherwise every note containing the query in its
/// title or body is scored, ranked and capped at `limit`.
pub fn search_index(
    index: &[IndexedNote],
    query: &str,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<SearchResult> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return recent_notes(index, limit);
    }

    let query_lowercased = trimmed.to_lowercase();

    let mut scored: Vec<(&IndexedNote, f64)> = index
        .iter()
        .filter_map(|note| {
            let score = score_note(note, &query_lowercased, now);
            (score > 0.0).then_some((note, score))
        })
        .collect();

    // Score descending; ties broken by recency then id so ranking is
    // deterministic for a given input.
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.0.last_modified.cmp(&a.0.last_modified))
            .then_with(|| a.0.id.cmp(&b.0.id))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(note, score)| {
            let preview = get_preview(&note.text, &query_lowercased, MATCHED_PREVIEW_LENGTH);
            let highlight_ranges = find_highlight_ranges(&preview, &query_lowercased);

            SearchResult {
                id: note.id.clone(),
                note: note.clone(),
                score,
                matched_in_title: note.title_lowercased.contains(&query_lowercased),
                preview,
                highlight_ranges,
            }
        })
        .collect()
}

/// Most recently modified notes, for the empty-query listing.
fn recent_notes(index: &[IndexedNote], limit: usize) -> Vec<SearchResult> {
    let mut notes: Vec<&IndexedNote> = index.iter().collect();
    notes.sort_by(|a, b| {
        b.last_modified
            .cmp(&a.last_modified)
            .then_with(|| a.id.cmp(&b.id))
    });

    notes
        .into_iter()
        .take(limit)
        .map(|note| SearchResult {
            id: note.id.clone(),
            note: note.clone(),
            score: 0.0,
            matched_in_title: false,
            preview: get_preview(&note.text, "", RECENT_PREVIEW_LENGTH),
            highlight_ranges: Vec::new(),
        })
        .collect()
}

/// Score a note against an already-lowercased query.
///
/// Returns 0 when the query occurs in neither title nor body; such notes are
/// excluded from results regardless of recency.
fn score_note(note: &IndexedNote, query: &str, now: DateTime<Utc>) -> f64 {
    let mut score = 0.0;

    // Title tiers, most specific first
    if note.title_lowercased.contains(query) {
        if note.title_lowercased == query {
            score += TITLE_EXACT_SCORE;
        } else if note.title_lowercased.starts_with(query) {
            score += TITLE_PREFIX_SCORE;
        } else if note.title_lowercased.contains(&format!(" {query}")) {
            score += TITLE_WORD_SCORE;
        } else {
            score += TITLE_CONTAINS_SCORE;
        }
    }

    // Body: flat score at the start, otherwise occurrence-weighted
    if note.text_lowercased.contains(query) {
        if note.text_lowercased.starts_with(query) {
            score += TEXT_PREFIX_SCORE;
        } else {
            let occurrences = note.text_lowercased.matches(query).count();
            score += occurrences as f64 * TEXT_OCCURRENCE_SCORE;
        }
    }

    if score == 0.0 {
        return 0.0;
    }

    // Recency bonus decays linearly to zero over the window
    let days_since_modified =
        (now - note.last_modified).num_milliseconds() as f64 / 86_400_000.0;
    score += (RECENCY_WINDOW_DAYS - days_since_modified).max(0.0) * RECENCY_WEIGHT;

    score
}

/// Extract a bounded preview of `text`, centered on the first occurrence of
/// `query` when present.
///
/// Window arithmetic is in character coordinates: the window opens
/// [`PREVIEW_CONTEXT_BEFORE`] characters before the match (clamped to the
/// text start) and extends `match + query + max_length − context` characters
/// (clamped to the text end). `"..."` marks a window that does not touch the
/// corresponding edge of the text.
pub fn get_preview(text: &str, query: &str, max_length: usize) -> String {
    let clean_text = text.trim();

    if clean_text.is_empty() {
        return String::new();
    }

    if !query.is_empty() {
        let text_lowercased = clean_text.to_lowercase();
        if let Some(byte_pos) = text_lowercased.find(query) {
            let match_start = text_lowercased[..byte_pos].chars().count();
            let query_chars = query.chars().count();
            let total_chars = clean_text.chars().count();

            let context_start = match_start.saturating_sub(PREVIEW_CONTEXT_BEFORE);
            let context_end = (match_start + query_chars + max_length)
                .saturating_sub(PREVIEW_CONTEXT_BEFORE)
                .min(total_chars)
                .max(context_start);

            let mut preview: String = clean_text
                .chars()
                .skip(context_start)
                .take(context_end - context_start)
                .collect();
            if context_start > 0 {
                preview = format!("...{preview}");
            }
            if context_end < total_chars {
                preview.push_str("...");
            }
            return preview;
        }
    }

    // No query or no match: show the beginning
    if clean_text.chars().count() > max_length {
        let head: String = clean_text.chars().take(max_length).collect();
        return format!("{head}...");
    }

    clean_text.to_string()
}

/// Find every non-overlapping occurrence of `query` in `preview`,
/// case-insensitively, left to right.
///
/// Ranges are byte offsets into the lowercased preview; for text where
/// lowercasing preserves byte length (the common case) they index the
/// displayed preview directly.
pub fn find_highlight_ranges(preview: &str, query: &str) -> Vec<Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }

    let preview_lowercased = preview.to_lowercase();
    let mut ranges = Vec::new();
    let mut search_from = 0;

    while let Some(pos) = preview_lowercased[search_from..].find(query) {
        let start = search_from + pos;
        let end = start + query.len();
        ranges.push(start..end);
        search_from = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;
    use crate::search::index::build_index;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn note_at(id: &str, title: &str, text: &str, modified: DateTime<Utc>) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            is_pinned: false,
            is_locked: false,
            last_modified: Some(modified),
        }
    }

    fn index_of(notes: &[Note]) -> Vec<IndexedNote> {
        build_index(notes, fixed_now())
    }

    #[test]
    fn test_title_score_tiers() {
        let now = fixed_now();
        let notes = vec![
            note_at("exact", "budget", "x", now),
            note_at("prefix", "budget review", "x", now),
            note_at("word", "annual budget", "x", now),
            note_at("contains", "overbudgeting", "x", now),
        ];
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 10, now);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].id, "exact");
        assert_eq!(results[1].id, "prefix");
        assert_eq!(results[2].id, "word");
        assert_eq!(results[3].id, "contains");
        assert!(results.iter().all(|r| r.matched_in_title));

        // All notes share "now" as last_modified, so the recency bonus is a
        // constant 50 on top of each tier.
        assert_eq!(results[0].score, 1050.0);
        assert_eq!(results[1].score, 550.0);
        assert_eq!(results[2].score, 450.0);
        assert_eq!(results[3].score, 350.0);
    }

    #[test]
    fn test_body_prefix_scores_flat_200() {
        let now = fixed_now();
        let notes = vec![note_at("1", "x", "budget budget budget", now)];
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 10, now);

        // Match at offset 0 scores a flat 200 even with repeats.
        assert_eq!(results[0].score, 200.0 + 50.0);
        assert!(!results[0].matched_in_title);
    }

    #[test]
    fn test_body_occurrences_score_50_each() {
        let now = fixed_now();
        let notes = vec![note_at("1", "x", "the budget and the budget again", now)];
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 10, now);

        assert_eq!(results[0].score, 2.0 * 50.0 + 50.0);
    }

    #[test]
    fn test_exact_title_outranks_body_only_match() {
        let now = fixed_now();
        let notes = vec![
            note_at("body", "misc", "the Budget is due", now),
            note_at("title", "Budget", "unrelated text", now),
        ];
        let index = index_of(&notes);
        let results = search_index(&index, "Budget", 10, now);

        assert_eq!(results[0].id, "title");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_no_match_excluded_regardless_of_recency() {
        let now = fixed_now();
        let notes = vec![
            note_at("fresh", "shopping", "milk and eggs", now),
            note_at("old", "budget", "numbers", now - Duration::days(400)),
        ];
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 10, now);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "old");
    }

    #[test]
    fn test_recency_bonus_decays_linearly_and_clamps() {
        let now = fixed_now();
        let notes = vec![
            note_at("today", "budget", "x", now),
            note_at("mid", "budget", "x", now - Duration::days(50)),
            note_at("stale", "budget", "x", now - Duration::days(200)),
        ];
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 10, now);

        let score_of = |id: &str| results.iter().find(|r| r.id == id).unwrap().score;
        assert_eq!(score_of("today"), 1000.0 + 50.0);
        assert_eq!(score_of("mid"), 1000.0 + 25.0);
        // Past the window the bonus is zero, never negative.
        assert_eq!(score_of("stale"), 1000.0);
    }

    #[test]
    fn test_case_insensitive_queries_identical() {
        let now = fixed_now();
        let notes = vec![
            note_at("1", "Budget", "Budget numbers", now),
            note_at("2", "misc", "over budget again", now),
        ];
        let index = index_of(&notes);

        let upper = search_index(&index, "BUDGET", 10, now);
        let lower = search_index(&index, "budget", 10, now);

        assert_eq!(upper.len(), lower.len());
        for (a, b) in upper.iter().zip(lower.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.score, b.score);
            assert_eq!(a.preview, b.preview);
            assert_eq!(a.highlight_ranges, b.highlight_ranges);
        }
    }

    #[test]
    fn test_empty_query_returns_recency_order() {
        let now = fixed_now();
        let notes = vec![
            note_at("t1", "oldest", "a", now - Duration::days(3)),
            note_at("t3", "newest", "c", now - Duration::days(1)),
            note_at("t2", "middle", "b", now - Duration::days(2)),
        ];
        let index = index_of(&notes);
        let results = search_index(&index, "", 10, now);

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t2", "t1"]);
        assert!(results.iter().all(|r| r.score == 0.0));
        assert!(results.iter().all(|r| !r.matched_in_title));
        assert!(results.iter().all(|r| r.highlight_ranges.is_empty()));
    }

    #[test]
    fn test_whitespace_query_behaves_as_empty() {
        let now = fixed_now();
        let notes = vec![note_at("1", "a", "b", now)];
        let index = index_of(&notes);

        let blank = search_index(&index, "   \n\t ", 10, now);
        assert_eq!(blank.len(), 1);
        assert_eq!(blank[0].score, 0.0);
    }

    #[test]
    fn test_limit_respected_and_top_scored_kept() {
        let now = fixed_now();
        let mut notes: Vec<Note> = (0..20)
            .map(|i| {
                // Higher i gets more occurrences, hence a higher score
                let body = format!("x {}", "budget ".repeat(i + 1));
                note_at(&format!("n{i:02}"), "misc", &body, now)
            })
            .collect();
        notes.reverse();
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 5, now);

        assert_eq!(results.len(), 5);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["n19", "n18", "n17", "n16", "n15"]);
    }

    #[test]
    fn test_limit_zero_yields_empty() {
        let now = fixed_now();
        let notes = vec![note_at("1", "budget", "b", now)];
        let index = index_of(&notes);

        assert!(search_index(&index, "budget", 0, now).is_empty());
        assert!(search_index(&index, "", 0, now).is_empty());
    }

    #[test]
    fn test_empty_index_yields_empty() {
        let now = fixed_now();
        assert!(search_index(&[], "budget", 10, now).is_empty());
        assert!(search_index(&[], "", 10, now).is_empty());
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let now = fixed_now();
        // Identical scores and timestamps; id ascending breaks the tie.
        let notes = vec![
            note_at("b", "budget", "x", now),
            note_at("a", "budget", "x", now),
        ];
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 10, now);
        assert_eq!(results[0].id, "a");
        assert_eq!(results[1].id, "b");
    }

    #[test]
    fn test_preview_window_arithmetic() {
        // match_start = 11, query = 5 chars, max_length = 20:
        // window = [max(0, 11-20), min(27, 11+5+20-20)) = [0, 16)
        let text = "aaaaaaaaaa MATCH bbbbbbbbbb";
        let preview = get_preview(text, "match", 20);
        assert_eq!(preview, "aaaaaaaaaa MATCH...");
        assert!(preview.contains("MATCH"));
        assert!(!preview.starts_with("..."));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_prefix_ellipsis_for_deep_match() {
        let text = format!("{} MATCH tail", "a".repeat(40));
        let preview = get_preview(&text, "match", 20);
        assert!(preview.starts_with("..."));
        assert!(preview.contains("MATCH"));
    }

    #[test]
    fn test_preview_no_match_truncates_to_max_length() {
        let text = "a".repeat(120);
        let preview = get_preview(&text, "missing", 100);
        assert_eq!(preview, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_preview_short_text_returned_verbatim() {
        assert_eq!(get_preview("  short note  ", "", 80), "short note");
    }

    #[test]
    fn test_preview_empty_text() {
        assert_eq!(get_preview("   \n  ", "query", 80), "");
    }

    #[test]
    fn test_highlight_ranges_cover_all_occurrences() {
        let ranges = find_highlight_ranges("cat cat cat", "cat");
        assert_eq!(ranges, vec![0..3, 4..7, 8..11]);
        let preview = "cat cat cat";
        for range in &ranges {
            assert_eq!(&preview[range.clone()], "cat");
        }
    }

    #[test]
    fn test_highlight_ranges_case_insensitive() {
        let ranges = find_highlight_ranges("Cat CAT cat", "cat");
        assert_eq!(ranges.len(), 3);
    }

    #[test]
    fn test_highlight_ranges_non_overlapping() {
        // "aaaa" contains "aa" at 0 and 2 only once each when advancing
        // past each match.
        let ranges = find_highlight_ranges("aaaa", "aa");
        assert_eq!(ranges, vec![0..2, 2..4]);
    }

    #[test]
    fn test_highlight_ranges_empty_query() {
        assert!(find_highlight_ranges("anything", "").is_empty());
    }

    #[test]
    fn test_result_previews_highlight_in_preview_coordinates() {
        let now = fixed_now();
        let notes = vec![note_at(
            "1",
            "misc",
            &format!("{} budget sits here in the middle {}", "x".repeat(60), "y".repeat(60)),
            now,
        )];
        let index = index_of(&notes);
        let results = search_index(&index, "budget", 10, now);

        let result = &results[0];
        assert!(result.preview.starts_with("..."));
        for range in &result.highlight_ranges {
            assert_eq!(&result.preview[range.clone()].to_lowercase(), "budget");
        }
    }
}
