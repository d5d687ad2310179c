#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::strategy::{Candidates, Strategy, StrategyError};
use dym_ir::{fields, ScopeTier, SnapshotValue, Tier};
use pretty_assertions::assert_eq;

/// Suggests every bound name, whatever the failure.
struct EveryName;

impl Strategy for EveryName {
    fn name(&self) -> &'static str {
        "every-name"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let names: Vec<SuggestionCandidate> = cx
            .env
            .bound_names()
            .into_iter()
            .map(|(name, _)| SuggestionCandidate::new(format!("'{name}'"), "every-name"))
            .collect();
        Ok(Box::new(names.into_iter()))
    }
}

struct Panics {
    while_iterating: bool,
}

impl Strategy for Panics {
    fn name(&self) -> &'static str {
        "panics"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, _cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        if !self.while_iterating {
            panic!("strategy bug");
        }
        let mut produced = 0;
        Ok(Box::new(std::iter::from_fn(move || {
            produced += 1;
            assert!(produced < 2, "strategy bug while iterating");
            Some(SuggestionCandidate::new("'partial'", "panics"))
        })))
    }
}

struct NeverApplies;

impl Strategy for NeverApplies {
    fn name(&self) -> &'static str {
        "never-applies"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, _cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        Err(StrategyError::NoReceiver)
    }
}

fn env() -> SymbolEnvironment {
    SymbolEnvironment::new().with_tier(
        ScopeTier::new(Tier::Local)
            .bind("alpha", SnapshotValue::new("int").into_value())
            .bind("beta", SnapshotValue::new("int").into_value())
            .bind("gamma", SnapshotValue::new("int").into_value()),
    )
}

fn undefined() -> ErrorReport {
    ErrorReport::new(ErrorKind::NameNotDefined, "name 'delta' is not defined")
}

#[test]
fn test_diagnose_runs_the_pipeline() {
    let mut builder = StrategyRegistry::builder();
    builder.register(EveryName);
    let registry = builder.build();
    let engine = Engine::builder().registry(&registry).build();

    let report = engine.diagnose(undefined(), &env());
    assert_eq!(
        report.primary_message(),
        "name 'delta' is not defined. Did you mean 'alpha', 'beta', 'gamma'?"
    );
    assert_eq!(report.state(), ReportState::Mutated);
}

#[test]
fn test_max_suggestions_caps_output() {
    let mut builder = StrategyRegistry::builder();
    builder.register(EveryName);
    let registry = builder.build();
    let engine = Engine::builder()
        .registry(&registry)
        .config(EngineConfig {
            max_suggestions: Some(2),
        })
        .build();

    let report = engine.diagnose(undefined(), &env());
    assert_eq!(
        report.primary_message(),
        "name 'delta' is not defined. Did you mean 'alpha', 'beta'?"
    );
}

#[test]
fn test_panicking_strategies_are_isolated() {
    let mut builder = StrategyRegistry::builder();
    builder
        .register(Panics {
            while_iterating: false,
        })
        .register(NeverApplies)
        .register(Panics {
            while_iterating: true,
        })
        .register(EveryName);
    let registry = builder.build();
    let engine = Engine::builder().registry(&registry).build();

    let candidates = engine.suggest(
        ErrorKind::NameNotDefined,
        &StructuredFields::matched("test").with(fields::NAME, "delta"),
        &env(),
    );
    let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["'alpha'", "'beta'", "'gamma'"]);
}

#[test]
fn test_nothing_applies_leaves_report_unchanged() {
    let mut builder = StrategyRegistry::builder();
    builder.register(NeverApplies);
    let registry = builder.build();
    let engine = Engine::builder().registry(&registry).build();

    let report = engine.diagnose(undefined(), &env());
    assert_eq!(report.primary_message(), "name 'delta' is not defined");
    assert_eq!(report.state(), ReportState::Suggested);
}

#[test]
fn test_mutated_report_is_returned_as_is() {
    let engine = Engine::builder().build();
    let mut report = undefined();
    crate::mutate::apply_suggestion(&mut report, ". Did you mean 'x'?");
    let before = report.clone();

    assert_eq!(engine.diagnose(report, &env()), before);
}

#[test]
fn test_kinds_without_strategies() {
    let engine = Engine::standard();
    let report = ErrorReport::new(ErrorKind::KeyLookupFailed, "'missing'");
    let report = engine.diagnose(report, &env());
    assert_eq!(report.primary_message(), "'missing'");
    assert_eq!(report.kind(), ErrorKind::KeyLookupFailed);
}

#[test]
fn test_engine_config_from_json() {
    let config: EngineConfig = serde_json::from_str(r#"{ "max_suggestions": 4 }"#).unwrap();
    assert_eq!(config.max_suggestions, Some(4));

    let config: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, EngineConfig::default());

    assert!(serde_json::from_str::<EngineConfig>(r#"{ "max": 4 }"#).is_err());
}

#[test]
fn test_standard_engine_defaults() {
    assert_eq!(Engine::standard().config(), &EngineConfig::default());
}

#[test]
fn test_runtime_hint_is_not_repeated() {
    let mut builder = StrategyRegistry::builder();
    builder.register(EveryName);
    let registry = builder.build();
    let engine = Engine::builder().registry(&registry).build();

    let report = engine.diagnose(
        ErrorReport::new(
            ErrorKind::NameNotDefined,
            "name 'delta' is not defined. Did you mean: 'beta'?",
        ),
        &env(),
    );
    assert_eq!(
        report.primary_message(),
        "name 'delta' is not defined. Did you mean: 'beta'?. Did you mean 'alpha', 'gamma'?"
    );
}

#[test]
fn test_runtime_hint_alone_leaves_report_unchanged() {
    let env = SymbolEnvironment::new().with_tier(
        ScopeTier::new(Tier::Builtin).bind(
            "print",
            SnapshotValue::new("builtin_function_or_method")
                .with_attributes(["__call__"])
                .into_value(),
        ),
    );
    let message = "name 'prnt' is not defined. Did you mean: 'print'?";
    let report = Engine::standard().diagnose(
        ErrorReport::new(ErrorKind::NameNotDefined, message),
        &env,
    );
    assert_eq!(report.primary_message(), message);
}

#[test]
fn test_repeats_hint() {
    assert!(repeats_hint("'print'", "'print'"));
    assert!(repeats_hint("'print' (builtin)", "'print'"));
    assert!(!repeats_hint("'printf'", "'print'"));
    assert!(!repeats_hint("'math.pi' (not imported)", "'math'"));
}
