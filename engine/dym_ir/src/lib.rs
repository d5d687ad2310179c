//! Dym IR - core data model for the suggestion engine
//!
//! This crate contains the types every other engine crate speaks:
//! - [`ErrorKind`] for the closed set of failure categories
//! - [`ErrorReport`] for the report being annotated and its lifecycle
//! - [`StructuredFields`] for what the classifier extracts from a message
//! - [`SuggestionCandidate`] for what strategies produce
//! - [`env`] for the symbol environment snapshot supplied by the caller
//!
//! # Design Philosophy
//!
//! - **Closed dispatch**: failure categories are an enum, never a hierarchy.
//! - **Snapshots, not introspection**: the engine only reads what the
//!   integration layer captured; nothing here touches live program state.
//! - **Text is the only mutable facet**: a report's kind is fixed at creation.

mod candidate;
pub mod env;
pub mod fields;
mod kind;
mod report;

pub use candidate::SuggestionCandidate;
pub use env::{
    Binding, CachedResolver, ModuleResolver, ScopeTier, SnapshotValue, StaticResolver,
    SymbolEnvironment, Tier, Value, ValueHandle,
};
pub use fields::StructuredFields;
pub use kind::ErrorKind;
pub use report::{ErrorReport, ReportState};
