//! Turning candidates into the suffix appended to a report.

use dym_ir::SuggestionCandidate;
use rustc_hash::FxHashSet;

const PREFIX: &str = ". Did you mean ";
const SEPARATOR: &str = ", ";
const SUFFIX: &str = "?";

/// Render `candidates` as `. Did you mean a, b?`.
///
/// Texts are deduplicated exactly, first occurrence wins. No candidates
/// render as the empty string.
pub fn compose(candidates: &[SuggestionCandidate]) -> String {
    compose_capped(candidates, None)
}

/// [`compose`], keeping at most `limit` distinct texts.
pub fn compose_capped(candidates: &[SuggestionCandidate], limit: Option<usize>) -> String {
    let mut seen = FxHashSet::default();
    let texts: Vec<&str> = candidates
        .iter()
        .map(|candidate| candidate.text.as_str())
        .filter(|text| seen.insert(*text))
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if texts.is_empty() {
        return String::new();
    }
    format!("{PREFIX}{}{SUFFIX}", texts.join(SEPARATOR))
}
