//! Error message grammars.
//!
//! Runtime versions phrase the same failure differently. Each phrasing is a
//! [`GrammarEntry`]: an anchored pattern whose named groups map onto the
//! shared field vocabulary in [`dym_ir::fields`]. The [`GrammarTable`] groups
//! entries by [`dym_ir::ErrorKind`] and classifies a message by trying its
//! kind's entries in registration order.
//!
//! Supporting a new runtime version means adding rows to [`STANDARD_ROWS`],
//! never adding code paths.
//!
//! # Invariant
//!
//! Across every entry of every kind, a message matches at most one entry.
//! The table tests check this against a corpus of real messages.

mod entry;
mod rows;
mod table;

pub use entry::{GrammarEntry, GrammarError};
pub use rows::{GrammarRow, STANDARD_ROWS};
pub use table::{GrammarTable, GrammarTableBuilder};
