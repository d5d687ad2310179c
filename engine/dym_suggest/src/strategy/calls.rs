//! Strategies for calls and subscripts used on the wrong kind of value.

use dym_ir::{fields, ErrorKind, SuggestionCandidate, SymbolEnvironment, Value};

use super::{lazy, none, quoted, Candidates, Strategy, StrategyContext, StrategyError};
use crate::fuzzy::{close_matches, MatchBounds};

/// The callee named by `func`: the captured receiver when it declares
/// parameters, else the nearest binding of the full name or of its last
/// dotted segment.
fn resolve_callee<'a>(env: &'a SymbolEnvironment, func: Option<&str>) -> Option<&'a Value> {
    let declares_parameters = |value: &&Value| value.parameter_names().is_some();

    if let Some(receiver) = env.receiver().filter(declares_parameters) {
        return Some(receiver);
    }
    let func = func?;
    let leaf = func.rsplit('.').next().unwrap_or(func);
    [func, leaf].into_iter().find_map(|name| {
        env.lookup(name)
            .into_iter()
            .map(|binding| binding.value)
            .find(declares_parameters)
    })
}

/// A keyword argument the callee does not declare: suggest close matches
/// among the parameters it does declare.
#[derive(Debug, Default)]
pub struct UnexpectedKeyword;

impl Strategy for UnexpectedKeyword {
    fn name(&self) -> &'static str {
        "unexpected-keyword"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::UnexpectedKeyword]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let arg = cx.field(fields::ARG)?;
        let parameters = resolve_callee(cx.env, cx.fields.get(fields::FUNC))
            .and_then(|callee| callee.parameter_names())
            .ok_or(StrategyError::NoReceiver)?;

        let found: Vec<SuggestionCandidate> =
            close_matches(arg, parameters.iter().map(String::as_str), MatchBounds::DEFAULT)
                .into_iter()
                .map(|found| SuggestionCandidate::scored(quoted(found.text), self.name(), found.score))
                .collect();
        Ok(lazy(found.into_iter()))
    }
}

/// Subscripting something that should have been called.
#[derive(Debug, Default)]
pub struct CallInsteadOfSubscript;

impl Strategy for CallInsteadOfSubscript {
    fn name(&self) -> &'static str {
        "call-instead-of-subscript"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::Unsubscriptable]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let type_name = cx.field(fields::TYPE)?;
        let value = cx.env.find_by_type(type_name).ok_or(StrategyError::NoReceiver)?;
        if !value.is_callable() {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            "'function(value)'",
            self.name(),
        ))))
    }
}

/// Calling something that should have been subscripted.
#[derive(Debug, Default)]
pub struct SubscriptInsteadOfCall;

impl Strategy for SubscriptInsteadOfCall {
    fn name(&self) -> &'static str {
        "subscript-instead-of-call"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NotCallable]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let type_name = cx.field(fields::TYPE)?;
        let value = cx.env.find_by_type(type_name).ok_or(StrategyError::NoReceiver)?;
        if !value.has_attribute("__getitem__") {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            "'object[value]'",
            self.name(),
        ))))
    }
}

/// A hashable stand-in for a type used as a key or set member.
#[derive(Debug, Default)]
pub struct HashableAlternative;

impl Strategy for HashableAlternative {
    fn name(&self) -> &'static str {
        "hashable-alternative"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::Unhashable]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let type_name = cx.field(fields::TYPE)?;
        let source = self.name();
        Ok(lazy(
            cx.knowledge
                .hashable_alternative(type_name)
                .map(|text| SuggestionCandidate::new(text, source))
                .into_iter(),
        ))
    }
}
