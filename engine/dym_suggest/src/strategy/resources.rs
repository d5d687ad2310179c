//! Strategies for running out of memory or numeric range.

use std::sync::LazyLock;

use dym_ir::{ErrorKind, SuggestionCandidate};
use regex::Regex;
use rustc_hash::FxHashSet;

use super::{lazy, none, Candidates, Strategy, StrategyContext, StrategyError};

/// A possibly dotted name directly followed by an opening parenthesis.
static CALLED_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_][\w.]*)\s*\(").ok());

/// A cheaper call for whatever was called on the failing line.
///
/// The curated table depends on the kind: out-of-memory calls get a
/// streaming alternative, overflowing ones an arbitrary-precision one.
/// Dotted callees are looked up by full name, then by last segment.
#[derive(Debug, Default)]
pub struct FootprintAlternative;

impl Strategy for FootprintAlternative {
    fn name(&self) -> &'static str {
        "footprint-alternative"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::OutOfMemory, ErrorKind::Overflow]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let (Some(line), Some(pattern)) = (cx.env.source_line(), CALLED_NAME.as_ref()) else {
            return Ok(none());
        };
        let knowledge = cx.knowledge;
        let alternative = move |callee: &str| match cx.kind {
            ErrorKind::OutOfMemory => knowledge.memory_alternative(callee),
            ErrorKind::Overflow => knowledge.overflow_alternative(callee),
            _ => None,
        };

        let source = self.name();
        let mut seen = FxHashSet::default();
        let found = pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .filter_map(move |callee| {
                let callee = callee.as_str();
                let leaf = callee.rsplit('.').next().unwrap_or(callee);
                alternative(callee).or_else(|| alternative(leaf))
            })
            .filter(move |text| seen.insert(*text))
            .map(move |text| SuggestionCandidate::new(text, source));
        Ok(lazy(found))
    }
}
