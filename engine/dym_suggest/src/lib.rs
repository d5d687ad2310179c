//! Dym Suggest - "did you mean" suggestions for runtime error reports
//!
//! Given an [`ErrorReport`] and a read-only [`SymbolEnvironment`] snapshot
//! of the failing scope, the engine:
//!
//! 1. classifies the message into structured fields ([`dym_grammar`]),
//! 2. runs the strategies registered for the report's kind ([`strategy`]),
//! 3. composes their candidates into one suffix ([`compose`]),
//! 4. appends that suffix to every textual facet of the report ([`mutate`]).
//!
//! Diagnosing never fails and never touches anything but report text.
//!
//! # Example
//!
//! ```
//! use dym_ir::{ErrorKind, ErrorReport, ScopeTier, SnapshotValue, SymbolEnvironment, Tier};
//!
//! let env = SymbolEnvironment::new().with_tier(
//!     ScopeTier::new(Tier::Local).bind("babar", SnapshotValue::new("int").into_value()),
//! );
//! let report = ErrorReport::new(ErrorKind::NameNotDefined, "name 'baba' is not defined");
//!
//! let report = dym_suggest::diagnose(report, &env);
//! assert_eq!(
//!     report.primary_message(),
//!     "name 'baba' is not defined. Did you mean 'babar' (local)?"
//! );
//! ```

pub mod compose;
mod engine;
pub mod fuzzy;
pub mod mutate;
pub mod strategy;
mod tracing_init;

pub use compose::{compose, compose_capped};
pub use engine::{Engine, EngineBuilder, EngineConfig};
pub use fuzzy::{close_matches, similarity, MatchBounds};
pub use mutate::{apply_suggestion, strip_suggestion};
pub use strategy::{Strategy, StrategyContext, StrategyError, StrategyRegistry};
pub use tracing_init::init_tracing;

pub use dym_ir::{ErrorKind, ErrorReport, SuggestionCandidate, SymbolEnvironment};

/// Annotate `report` using the standard engine.
///
/// Shorthand for [`Engine::standard`]`().diagnose(report, env)`.
pub fn diagnose(report: ErrorReport, env: &SymbolEnvironment) -> ErrorReport {
    Engine::standard().diagnose(report, env)
}
