//! Grammar table and classifier.

use std::sync::LazyLock;

use dym_ir::{ErrorKind, StructuredFields};
use rustc_hash::FxHashMap;

use crate::{GrammarEntry, GrammarError, GrammarRow, STANDARD_ROWS};

/// Immutable set of grammar entries indexed by kind.
pub struct GrammarTable {
    /// All entries, in registration order.
    entries: Vec<GrammarEntry>,
    /// Index from kind to entry indices, in registration order.
    by_kind: FxHashMap<ErrorKind, Vec<usize>>,
}

static STANDARD: LazyLock<GrammarTable> = LazyLock::new(|| {
    let mut builder = GrammarTable::builder();
    builder.rows(STANDARD_ROWS);
    builder.build()
});

impl GrammarTable {
    pub fn builder() -> GrammarTableBuilder {
        GrammarTableBuilder::default()
    }

    /// The table compiled from [`STANDARD_ROWS`], built on first use.
    pub fn standard() -> &'static GrammarTable {
        &STANDARD
    }

    /// Extract structured fields from `message`.
    ///
    /// Tries the entries registered for `kind` in order and returns the
    /// first match. No match yields empty fields, never an error.
    pub fn classify(&self, kind: ErrorKind, message: &str) -> StructuredFields {
        let fields = self
            .entries_for(kind)
            .find_map(|entry| entry.captures(message))
            .unwrap_or_default();
        tracing::debug!(
            %kind,
            entry = fields.entry().unwrap_or("<none>"),
            captured = fields.len(),
            "classified message"
        );
        fields
    }

    /// Entries registered for `kind`, in order.
    pub fn entries_for(&self, kind: ErrorKind) -> impl Iterator<Item = &GrammarEntry> {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.entries.get(idx))
    }

    /// Every entry, of any kind, that matches `message`.
    pub fn matching_entries<'a>(
        &'a self,
        message: &'a str,
    ) -> impl Iterator<Item = &'a GrammarEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.is_match(message))
    }

    pub fn entry(&self, id: &str) -> Option<&GrammarEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for GrammarTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarTable")
            .field("entry_count", &self.len())
            .field("kinds", &self.by_kind.len())
            .finish_non_exhaustive()
    }
}

/// Accumulates entries before the table is frozen.
#[derive(Default)]
pub struct GrammarTableBuilder {
    entries: Vec<GrammarEntry>,
}

impl GrammarTableBuilder {
    /// Register a compiled entry after every entry registered so far.
    ///
    /// An entry whose id is already registered is ignored.
    pub fn push(&mut self, entry: GrammarEntry) -> &mut Self {
        if self.entries.iter().any(|known| known.id() == entry.id()) {
            tracing::warn!(id = entry.id(), "duplicate grammar entry ignored");
        } else {
            self.entries.push(entry);
        }
        self
    }

    /// Compile and register one row.
    pub fn row(&mut self, row: GrammarRow) -> Result<&mut Self, GrammarError> {
        let entry = GrammarEntry::new(row.id, row.kind, row.pattern)?;
        Ok(self.push(entry))
    }

    /// Compile and register rows, skipping (and logging) any that fail.
    pub fn rows(&mut self, rows: &[GrammarRow]) -> &mut Self {
        for &row in rows {
            if let Err(err) = self.row(row) {
                tracing::error!(%err, "grammar row skipped");
            }
        }
        self
    }

    pub fn build(self) -> GrammarTable {
        let mut by_kind: FxHashMap<ErrorKind, Vec<usize>> = FxHashMap::default();
        for (idx, entry) in self.entries.iter().enumerate() {
            by_kind.entry(entry.kind()).or_default().push(idx);
        }
        GrammarTable {
            entries: self.entries,
            by_kind,
        }
    }
}
