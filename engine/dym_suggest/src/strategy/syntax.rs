//! Strategies for syntax left over from an older runtime version.

use std::sync::LazyLock;

use dym_ir::{fields, ErrorKind, SuggestionCandidate};
use regex::Regex;

use super::{lazy, none, quoted, Candidates, Strategy, StrategyContext, StrategyError};

/// Grammar entries for a generic syntax error.
const INVALID_SYNTAX: &[&str] = &["syntax.invalid"];
/// Grammar entries for a malformed number.
const INVALID_NUMBER: &[&str] = &["syntax.invalid_token", "syntax.leading_zeros"];

fn matched_any(cx: &StrategyContext<'_>, entries: &[&str]) -> bool {
    cx.fields.entry().is_some_and(|entry| entries.contains(&entry))
}

/// A zero-prefixed integer literal: leading zeros, then the digits.
static ZERO_PREFIXED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\w.])0+(\d+)\b").ok());

/// `print x` where `print` became a function.
#[derive(Debug, Default)]
pub struct OutdatedPrint;

impl Strategy for OutdatedPrint {
    fn name(&self) -> &'static str {
        "outdated-print"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::SyntaxProblem]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let func = cx.field(fields::FUNC)?;
        // The runtime already gave its own hint.
        if cx.fields.get(fields::HINT).is_some() {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            quoted(&format!("{func}(...)")),
            self.name(),
        ))))
    }
}

/// `a <> b` where `<>` was removed.
#[derive(Debug, Default)]
pub struct OutdatedComparison;

impl Strategy for OutdatedComparison {
    fn name(&self) -> &'static str {
        "outdated-comparison"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::SyntaxProblem]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        if !matched_any(&cx, INVALID_SYNTAX) {
            return Ok(none());
        }
        let has_diamond = cx.env.source_line().is_some_and(|line| line.contains("<>"));
        if !has_diamond {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            "'!='",
            self.name(),
        ))))
    }
}

/// `0755` where octal literals need `0o`.
///
/// Suggests the octal spelling when every digit is octal, then the
/// decimal spelling without the zeros.
#[derive(Debug, Default)]
pub struct OctalLiteral;

impl Strategy for OctalLiteral {
    fn name(&self) -> &'static str {
        "octal-literal"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::SyntaxProblem]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        if !matched_any(&cx, INVALID_NUMBER) {
            return Ok(none());
        }
        let (Some(line), Some(pattern)) = (cx.env.source_line(), ZERO_PREFIXED.as_ref()) else {
            return Ok(none());
        };
        let source = self.name();

        let found = pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .flat_map(move |digits| {
                let digits = digits.as_str();
                let octal = digits
                    .bytes()
                    .all(|digit| (b'0'..=b'7').contains(&digit))
                    .then(|| SuggestionCandidate::new(quoted(&format!("0o{digits}")), source));
                octal
                    .into_iter()
                    .chain(std::iter::once(SuggestionCandidate::new(quoted(digits), source)))
            });
        Ok(lazy(found))
    }
}
