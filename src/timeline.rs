//! Timeline construction from evidence items.

use crate::dates::extract_dates;
use crate::types::{EvidenceItem, TimelineEntry};
use std::collections::HashSet;

/// Most entries a timeline carries after sorting.
pub const MAX_ENTRIES: usize = 10;

/// Event text is the item title capped at this many characters.
pub const EVENT_TEXT_MAX: usize = 100;

/// Build an ordered, deduplicated, size-bounded timeline from evidence.
///
/// Each item's title and snippet are scanned together; every parsed date
/// yields one entry carrying the item's (truncated) title and url. Entries
/// sort newest-first by lexicographic comparison on the normalized
/// `YYYY-MM-DD` string, then the list is cut to [`MAX_ENTRIES`]. Items with
/// no recognizable dates contribute nothing. The result is deterministic and
/// must be treated as frozen by callers.
pub fn build_timeline(items: &[EvidenceItem]) -> Vec<TimelineEntry> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for item in items {
        let text = format!("{} {}", item.title, item.snippet);
        for m in extract_dates(&text) {
            let entry = TimelineEntry {
                raw_date_text: m.raw.clone(),
                normalized_date: m.normalized(),
                event_text: truncate_chars(&item.title, EVENT_TEXT_MAX),
                source_url: item.url.clone(),
            };
            // Identical matches from overlapping date patterns collapse here.
            let key = (
                entry.raw_date_text.clone(),
                entry.normalized_date.clone(),
                entry.event_text.clone(),
                entry.source_url.clone(),
            );
            if seen.insert(key) {
                entries.push(entry);
            }
        }
    }

    // Unparsed raw-text keys may interleave oddly with real dates under
    // string comparison; accepted behavior.
    entries.sort_by(|a, b| b.normalized_date.cmp(&a.normalized_date));
    entries.truncate(MAX_ENTRIES);

    tracing::debug!(entries = entries.len(), "timeline built");
    entries
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
