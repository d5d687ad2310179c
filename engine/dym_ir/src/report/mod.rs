//! The error report the engine annotates.
//!
//! A report is created by an integration adapter when it catches a failure
//! and is owned by that adapter throughout. The engine only ever appends
//! text to its message facets, once.

use crate::ErrorKind;

/// Lifecycle of a report through one diagnosis.
///
/// Transitions are strictly forward; `Mutated` is absorbing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub enum ReportState {
    #[default]
    Raw,
    Classified,
    Suggested,
    Mutated,
}

/// A captured failure: its kind plus every textual facet that displays it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ErrorReport {
    kind: ErrorKind,
    primary_message: String,
    /// Secondary message slots, ordered, unique by name.
    auxiliary: Vec<(String, String)>,
    state: ReportState,
}

impl ErrorReport {
    /// Create a raw report.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorReport {
            kind,
            primary_message: message.into(),
            auxiliary: Vec::new(),
            state: ReportState::Raw,
        }
    }

    /// Add or replace an auxiliary message slot.
    #[must_use]
    pub fn with_auxiliary(mut self, field: impl Into<String>, text: impl Into<String>) -> Self {
        let field = field.into();
        let text = text.into();
        if let Some(slot) = self.auxiliary.iter_mut().find(|(name, _)| *name == field) {
            slot.1 = text;
        } else {
            self.auxiliary.push((field, text));
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn primary_message(&self) -> &str {
        &self.primary_message
    }

    /// Auxiliary slot by name.
    pub fn auxiliary(&self, field: &str) -> Option<&str> {
        self.auxiliary
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, text)| text.as_str())
    }

    /// Every auxiliary slot, in insertion order.
    pub fn auxiliary_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.auxiliary
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    pub fn state(&self) -> ReportState {
        self.state
    }

    pub fn is_mutated(&self) -> bool {
        self.state == ReportState::Mutated
    }

    /// Move the report forward to `next`.
    ///
    /// Returns `false` (and changes nothing) when `next` is not strictly
    /// later than the current state.
    pub fn advance(&mut self, next: ReportState) -> bool {
        if next > self.state {
            self.state = next;
            true
        } else {
            false
        }
    }

    /// Mutable access to every textual facet: the primary message first,
    /// then each auxiliary slot in order.
    pub fn text_facets_mut(&mut self) -> impl Iterator<Item = &mut String> {
        std::iter::once(&mut self.primary_message)
            .chain(self.auxiliary.iter_mut().map(|(_, text)| text))
    }
}

#[cfg(test)]
mod tests;
