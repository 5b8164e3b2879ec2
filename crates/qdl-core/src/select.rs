//! Snippet disambiguation.
//!
//! Given the candidates of a page and an optional 1-based index, decide which
//! single frame to save. Pure; the caller turns outcomes into errors.

use crate::document::Candidate;
use std::fmt;

/// Preview length, in characters, shown when listing candidates.
pub const PREVIEW_CHARS: usize = 60;

/// Outcome of [`select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Position of the chosen candidate in document order.
    Unique(usize),
    NotFound,
    /// More than one labeled candidate and no index given.
    Ambiguous,
}

/// Picks the candidate to save.
///
/// `index >= 1` selects by 1-based position (out of range is `NotFound`).
/// `index == 0` keeps only candidates that carry a label element; exactly one
/// must remain.
pub fn select(candidates: &[Candidate], index: u32) -> Selection {
    if index >= 1 {
        let pos = (index - 1) as usize;
        return if pos < candidates.len() {
            Selection::Unique(pos)
        } else {
            Selection::NotFound
        };
    }

    let mut labeled = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.has_label)
        .map(|(i, _)| i);
    match (labeled.next(), labeled.next()) {
        (None, _) => Selection::NotFound,
        (Some(i), None) => Selection::Unique(i),
        (Some(_), Some(_)) => Selection::Ambiguous,
    }
}

/// One line of the listing printed when the choice is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// 1-based, usable with `-n`.
    pub index: usize,
    pub label: String,
    pub preview: String,
}

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}\t{}", self.index, self.label, self.preview)
    }
}

/// Listing of every candidate, in document order.
pub fn listing(candidates: &[Candidate]) -> Vec<ListingEntry> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| ListingEntry {
            index: i + 1,
            label: c.label.clone(),
            preview: preview(&c.body),
        })
        .collect()
}

/// First [`PREVIEW_CHARS`] characters of `body` (with `...` when cut), escaped
/// like a string literal without the surrounding quotes.
pub fn preview(body: &str) -> String {
    let mut head: String = body.chars().take(PREVIEW_CHARS).collect();
    if head.len() < body.len() {
        head.push_str("...");
    }
    let quoted = format!("{:?}", head);
    quoted[1..quoted.len() - 1].to_string()
}
