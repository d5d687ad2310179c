//! Appending a composed suggestion to a report, and taking it back off.

use dym_ir::{ErrorReport, ReportState};

/// Append `suffix` to every textual facet of `report` and mark it mutated.
///
/// Does nothing, and returns `false`, when `suffix` is empty or the report
/// was already mutated. The kind and every non-text facet are untouched.
pub fn apply_suggestion(report: &mut ErrorReport, suffix: &str) -> bool {
    if suffix.is_empty() || report.is_mutated() {
        return false;
    }
    for text in report.text_facets_mut() {
        text.push_str(suffix);
    }
    report.advance(ReportState::Mutated)
}

/// Undo [`apply_suggestion`] on one facet.
///
/// Removes a trailing `suffix` when there is one, otherwise its first
/// occurrence. Text without `suffix` comes back unchanged.
pub fn strip_suggestion(text: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return text.to_owned();
    }
    match text.strip_suffix(suffix) {
        Some(original) => original.to_owned(),
        None => text.replacen(suffix, "", 1),
    }
}

#[cfg(test)]
mod tests;
