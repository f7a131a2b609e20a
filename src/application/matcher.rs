// src/application/matcher.rs
//! Title heuristics for locating meetings in an already-fetched document set.
use crate::constants::ONE_ON_ONE_MARKERS;
use crate::domain::Document;
use crate::util::text::{contains_ignore_case, parse_timestamp};

/// Documents whose displayed title contains `query`, ignoring case, in input order.
///
/// Untitled documents match against "Untitled", the title `list` prints for them.
pub fn search(documents: Vec<Document>, query: &str) -> Vec<Document> {
    documents
        .into_iter()
        .filter(|doc| contains_ignore_case(doc.display_title(), query))
        .collect()
}

/// True when the title names `person` and carries a 1:1 marker.
pub fn is_one_on_one_with(doc: &Document, person: &str) -> bool {
    let Some(title) = doc.title.as_deref() else {
        return false;
    };
    let title = title.to_lowercase();
    title.contains(&person.to_lowercase())
        && ONE_ON_ONE_MARKERS.iter().any(|marker| title.contains(*marker))
}

/// The most recently created 1:1 with `person`.
///
/// Documents with unparseable `created_at` rank oldest. Exact-timestamp ties
/// keep fetch order, which the service does not guarantee to be stable.
pub fn find_latest_meeting_with(documents: Vec<Document>, person: &str) -> Option<Document> {
    let mut matches: Vec<_> = documents
        .into_iter()
        .filter(|doc| is_one_on_one_with(doc, person))
        .map(|doc| (parse_timestamp(&doc.created_at), doc))
        .collect();

    // stable: ties stay in fetch order
    matches.sort_by(|(a, _), (b, _)| b.cmp(a));
    matches.into_iter().next().map(|(_, doc)| doc)
}
