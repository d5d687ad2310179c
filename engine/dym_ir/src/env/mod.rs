//! Symbol environment snapshot.
//!
//! The integration layer captures the bindings visible at the failure site
//! and hands them over as a read-only [`SymbolEnvironment`]. Strategies query
//! it for names, values and module exports; none of them can invoke a value
//! or change a binding.
//!
//! # Tiers
//!
//! Tiers are ordered innermost first: local, global, builtin. A name bound in
//! an inner tier hides the same name in an outer one, and lookups return every
//! binding so strategies can report the shadowing. Enclosing (closure) scopes
//! are not modelled.
//!
//! # Partial data
//!
//! Every piece is optional. A snapshot without a resolver, receiver or source
//! line still works; strategies that need the missing piece simply produce
//! nothing.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Upper bound on bindings kept per tier.
pub const MAX_BINDINGS_PER_TIER: usize = 4096;
/// Module names a [`CachedResolver`] remembers.
pub const MAX_CACHED_MODULES: usize = 4096;

/// Binding visibility level.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Tier {
    Local,
    Global,
    Builtin,
}

impl Tier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Local => "local",
            Tier::Global => "global",
            Tier::Builtin => "builtin",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only capability over a bound value.
///
/// Implementations answer questions about a value without running any of
/// its code.
pub trait ValueHandle: fmt::Debug + Send + Sync {
    /// Name of the value's type, as the runtime prints it.
    fn type_name(&self) -> &str;

    /// Declared attribute names, in a stable order.
    fn attribute_names(&self) -> Vec<String>;

    fn has_attribute(&self, name: &str) -> bool;

    /// Declared parameter names when the value is a callable with a known
    /// signature.
    fn parameter_names(&self) -> Option<Vec<String>> {
        None
    }

    fn is_callable(&self) -> bool {
        self.has_attribute("__call__")
    }
}

/// Shared handle to a bound value.
pub type Value = Arc<dyn ValueHandle>;

/// Answers which names a module exports.
///
/// Must not have side effects. `None` means "unknown", which covers both a
/// module that does not exist and a resolver that could not find out.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, module: &str) -> Option<Vec<String>>;
}

/// One name binding as seen by a lookup.
#[derive(Clone, Copy, Debug)]
pub struct Binding<'a> {
    pub name: &'a str,
    pub tier: Tier,
    pub value: &'a Value,
}

/// Bindings of one visibility level.
#[derive(Clone, Debug)]
pub struct ScopeTier {
    tier: Tier,
    bindings: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl ScopeTier {
    pub fn new(tier: Tier) -> Self {
        ScopeTier {
            tier,
            bindings: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Builder form of [`ScopeTier::insert`].
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name`, replacing an existing binding in place.
    ///
    /// New names past [`MAX_BINDINGS_PER_TIER`] are dropped.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if let Some(&slot) = self.index.get(&name) {
            self.bindings[slot].1 = value;
            return;
        }
        if self.bindings.len() >= MAX_BINDINGS_PER_TIER {
            return;
        }
        self.index.insert(name.clone(), self.bindings.len());
        self.bindings.push((name, value));
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entry(name).map(|(_, value)| value)
    }

    fn entry(&self, name: &str) -> Option<(&str, &Value)> {
        let slot = *self.index.get(name)?;
        self.bindings
            .get(slot)
            .map(|(bound, value)| (bound.as_str(), value))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = Binding<'_>> {
        self.bindings.iter().map(move |(name, value)| Binding {
            name,
            tier: self.tier,
            value,
        })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Snapshot of everything visible at the failure site.
#[derive(Clone, Default)]
pub struct SymbolEnvironment {
    tiers: Vec<ScopeTier>,
    resolver: Option<Arc<dyn ModuleResolver>>,
    receiver: Option<Value>,
    source_line: Option<String>,
}

impl SymbolEnvironment {
    /// An empty snapshot: no bindings, no resolver.
    pub fn new() -> Self {
        SymbolEnvironment::default()
    }

    /// Append a tier. Tiers must be supplied innermost first.
    #[must_use]
    pub fn with_tier(mut self, tier: ScopeTier) -> Self {
        self.tiers.push(tier);
        self
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn ModuleResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Record the value whose attribute, call or subscript failed.
    #[must_use]
    pub fn with_receiver(mut self, receiver: Value) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Record the text of the failing source line.
    #[must_use]
    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }

    pub fn tiers(&self) -> &[ScopeTier] {
        &self.tiers
    }

    /// The first tier of the given level, if supplied.
    pub fn tier(&self, tier: Tier) -> Option<&ScopeTier> {
        self.tiers.iter().find(|scope| scope.tier == tier)
    }

    pub fn receiver(&self) -> Option<&Value> {
        self.receiver.as_ref()
    }

    pub fn source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }

    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Every binding of `name`, innermost first.
    pub fn lookup(&self, name: &str) -> SmallVec<[Binding<'_>; 3]> {
        self.tiers
            .iter()
            .filter_map(|scope| {
                scope.entry(name).map(|(bound, value)| Binding {
                    name: bound,
                    tier: scope.tier,
                    value,
                })
            })
            .collect()
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.tiers.iter().any(|scope| scope.contains(name))
    }

    /// Every binding of every tier, innermost tier first.
    pub fn bindings(&self) -> impl Iterator<Item = Binding<'_>> {
        self.tiers.iter().flat_map(ScopeTier::bindings)
    }

    /// Distinct bound names, each tagged with the nearest tier binding it.
    pub fn bound_names(&self) -> Vec<(&str, Tier)> {
        let mut seen = FxHashSet::default();
        self.bindings()
            .filter(|binding| seen.insert(binding.name))
            .map(|binding| (binding.name, binding.tier))
            .collect()
    }

    /// A value of type `type_name`: the receiver when it matches, otherwise
    /// the first such binding, innermost first.
    pub fn find_by_type(&self, type_name: &str) -> Option<&Value> {
        if let Some(receiver) = self
            .receiver
            .as_ref()
            .filter(|value| value.type_name() == type_name)
        {
            return Some(receiver);
        }
        self.bindings()
            .find(|binding| binding.value.type_name() == type_name)
            .map(|binding| binding.value)
    }

    /// Exports of `module`, or `None` when there is no resolver or it has
    /// no answer.
    pub fn resolve_module(&self, module: &str) -> Option<Vec<String>> {
        self.resolver.as_ref()?.resolve(module)
    }
}

impl fmt::Debug for SymbolEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolEnvironment")
            .field("tiers", &self.tiers)
            .field("has_resolver", &self.resolver.is_some())
            .field("receiver", &self.receiver)
            .field("source_line", &self.source_line)
            .finish()
    }
}

/// Plain-data value handle for snapshots built ahead of time.
#[derive(Clone, Debug, Default)]
pub struct SnapshotValue {
    type_name: String,
    attributes: Vec<String>,
    attribute_index: FxHashSet<String>,
    parameters: Option<Vec<String>>,
}

impl SnapshotValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        SnapshotValue {
            type_name: type_name.into(),
            ..SnapshotValue::default()
        }
    }

    /// Add declared attributes; duplicates are ignored.
    #[must_use]
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if self.attribute_index.insert(name.clone()) {
                self.attributes.push(name);
            }
        }
        self
    }

    /// Declare the value as a callable with these parameters.
    #[must_use]
    pub fn with_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn into_value(self) -> Value {
        Arc::new(self)
    }
}

impl ValueHandle for SnapshotValue {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes.clone()
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_index.contains(name)
    }

    fn parameter_names(&self) -> Option<Vec<String>> {
        self.parameters.clone()
    }
}

/// Resolver backed by a precomputed export table.
#[derive(Clone, Debug, Default)]
pub struct StaticResolver {
    exports: FxHashMap<String, Vec<String>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        StaticResolver::default()
    }

    /// Builder form of [`StaticResolver::insert`].
    #[must_use]
    pub fn with_module<I, S>(mut self, module: impl Into<String>, exports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(module, exports);
        self
    }

    pub fn insert<I, S>(&mut self, module: impl Into<String>, exports: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exports
            .insert(module.into(), exports.into_iter().map(Into::into).collect());
    }
}

impl ModuleResolver for StaticResolver {
    fn resolve(&self, module: &str) -> Option<Vec<String>> {
        self.exports.get(module).cloned()
    }
}

/// Memoizes another resolver, misses included.
///
/// At most [`MAX_CACHED_MODULES`] names are remembered; once full, new
/// names go straight to the inner resolver every time.
///
/// The lock is not held while the inner resolver runs, so a slow resolver
/// never blocks readers of already-cached modules.
pub struct CachedResolver<R> {
    inner: R,
    cache: Mutex<FxHashMap<String, Option<Vec<String>>>>,
}

impl<R: ModuleResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        CachedResolver {
            inner,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Number of module names answered so far.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }
}

impl<R: ModuleResolver> ModuleResolver for CachedResolver<R> {
    fn resolve(&self, module: &str) -> Option<Vec<String>> {
        if let Some(hit) = self.cache.lock().get(module) {
            return hit.clone();
        }
        let answer = self.inner.resolve(module);
        let mut cache = self.cache.lock();
        if cache.len() < MAX_CACHED_MODULES {
            cache
                .entry(module.to_owned())
                .or_insert_with(|| answer.clone());
        }
        answer
    }
}

impl<R> fmt::Debug for CachedResolver<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedResolver")
            .field("cached", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}
