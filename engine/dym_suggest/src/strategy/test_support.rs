//! Shared fixtures for the strategy tests.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use dym_ir::{
    ErrorKind, ScopeTier, SnapshotValue, StructuredFields, SymbolEnvironment, Tier, Value,
};
use dym_knowledge::KnowledgeBase;

use super::{Strategy, StrategyContext, StrategyError};

/// A plain value of `type_name` exposing `attributes`.
pub fn value(type_name: &str, attributes: &[&str]) -> Value {
    SnapshotValue::new(type_name)
        .with_attributes(attributes.iter().copied())
        .into_value()
}

/// A tier with every `(name, value)` bound in order.
pub fn tier(tier: Tier, bindings: Vec<(&str, Value)>) -> ScopeTier {
    bindings
        .into_iter()
        .fold(ScopeTier::new(tier), |scope, (name, value)| scope.bind(name, value))
}

/// Fields matched by a test entry.
pub fn matched_fields(pairs: &[(&'static str, &str)]) -> StructuredFields {
    pairs
        .iter()
        .fold(StructuredFields::matched("test"), |fields, &(name, text)| {
            fields.with(name, text)
        })
}

/// Run `strategy` and collect its candidate texts.
pub fn run(
    strategy: &dyn Strategy,
    kind: ErrorKind,
    fields: &StructuredFields,
    env: &SymbolEnvironment,
) -> Result<Vec<String>, StrategyError> {
    run_with(strategy, kind, fields, env, KnowledgeBase::standard())
}

pub fn run_with(
    strategy: &dyn Strategy,
    kind: ErrorKind,
    fields: &StructuredFields,
    env: &SymbolEnvironment,
    knowledge: &KnowledgeBase,
) -> Result<Vec<String>, StrategyError> {
    let cx = StrategyContext {
        kind,
        fields,
        env,
        knowledge,
    };
    let candidates = strategy.generate(cx)?;
    Ok(candidates
        .inspect(|candidate| assert_eq!(candidate.source, strategy.name()))
        .map(|candidate| candidate.text)
        .collect())
}
