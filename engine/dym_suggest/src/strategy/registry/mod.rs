//! Strategy Registry
//!
//! Maps each [`ErrorKind`] to the strategies registered for it, in
//! registration order. Lookup is exact: a kind sees only the strategies
//! that declared it.
//!
//! The registry is assembled once through a [`RegistryBuilder`] and is
//! immutable afterwards, so a single instance can serve every thread.

use std::sync::{Arc, LazyLock};

use dym_ir::ErrorKind;
use rustc_hash::FxHashMap;

use super::{
    AttributeOfKnownSymbol, AttributeOnOtherSymbol, AttributeSynonym, AttributeTypo,
    BuiltinAsAttribute, CallInsteadOfSubscript, DirectoryListing, ExpandedPath,
    FootprintAlternative, GlobalDeclaration, HashableAlternative, ImportedNameTypo, KeywordTypo,
    ModuleTypo, NameSpecialCase, NameTypo, OctalLiteral, OutdatedComparison, OutdatedPrint,
    ParentDirectory, RemovedAttribute, RenamedModule, StandardModuleImport, Strategy,
    SubscriptInsteadOfCall, UnexpectedKeyword, UnimportedModuleAttribute,
};

/// Registry for suggestion strategies.
pub struct StrategyRegistry {
    /// All registered strategies (stored once, referenced by kind).
    strategies: Vec<Arc<dyn Strategy>>,
    /// Index from kind to strategy indices.
    by_kind: FxHashMap<ErrorKind, Vec<usize>>,
}

static STANDARD: LazyLock<StrategyRegistry> = LazyLock::new(|| {
    let mut builder = StrategyRegistry::builder();
    builder
        // Names
        .register(AttributeOfKnownSymbol)
        .register(StandardModuleImport)
        .register(UnimportedModuleAttribute)
        .register(GlobalDeclaration)
        .register(NameTypo)
        .register(KeywordTypo)
        .register(NameSpecialCase)
        // Attributes
        .register(BuiltinAsAttribute)
        .register(RemovedAttribute)
        .register(AttributeSynonym)
        .register(AttributeTypo)
        .register(AttributeOnOtherSymbol)
        // Calls and containers
        .register(UnexpectedKeyword)
        .register(CallInsteadOfSubscript)
        .register(SubscriptInsteadOfCall)
        .register(HashableAlternative)
        // Imports
        .register(RenamedModule)
        .register(ModuleTypo)
        .register(ImportedNameTypo)
        // Syntax
        .register(OutdatedPrint)
        .register(OutdatedComparison)
        .register(OctalLiteral)
        // Resources and paths
        .register(FootprintAlternative)
        .register(ExpandedPath)
        .register(DirectoryListing)
        .register(ParentDirectory);
    builder.build()
});

impl StrategyRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Every built-in strategy, built on first use.
    pub fn standard() -> &'static StrategyRegistry {
        &STANDARD
    }

    /// Strategies registered for `kind`, in registration order.
    pub fn strategies_for(&self, kind: ErrorKind) -> impl Iterator<Item = &dyn Strategy> {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.strategies.get(idx))
            .map(|strategy| &**strategy)
    }

    /// Check if any strategies are registered for the given kind.
    pub fn has_strategies_for(&self, kind: ErrorKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Get the number of registered strategies.
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Get the number of kind -> strategy mappings.
    pub fn mapping_count(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.by_kind.keys().collect();
        kinds.sort();
        f.debug_struct("StrategyRegistry")
            .field("strategy_count", &self.strategy_count())
            .field("kinds", &kinds)
            .finish_non_exhaustive()
    }
}

/// Collects strategies before the registry is frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    strategies: Vec<Arc<dyn Strategy>>,
}

impl RegistryBuilder {
    /// Register a strategy for every kind it declares, after every strategy
    /// registered so far.
    pub fn register<S: Strategy + 'static>(&mut self, strategy: S) -> &mut Self {
        self.register_shared(Arc::new(strategy))
    }

    /// Register an already shared strategy.
    pub fn register_shared(&mut self, strategy: Arc<dyn Strategy>) -> &mut Self {
        self.strategies.push(strategy);
        self
    }

    pub fn build(self) -> StrategyRegistry {
        let mut by_kind: FxHashMap<ErrorKind, Vec<usize>> = FxHashMap::default();
        for (idx, strategy) in self.strategies.iter().enumerate() {
            for &kind in strategy.kinds() {
                by_kind.entry(kind).or_default().push(idx);
            }
        }
        StrategyRegistry {
            strategies: self.strategies,
            by_kind,
        }
    }
}
