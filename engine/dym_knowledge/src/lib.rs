//! Curated knowledge the suggestion strategies consult.
//!
//! A [`KnowledgeBase`] is built once and never changes afterwards. The
//! process-wide default lives behind [`KnowledgeBase::standard`]; callers
//! that need different tables build their own with
//! [`KnowledgeBase::from_config`] and hand it to the engine.
//!
//! Tables that feed the fuzzy matcher keep their insertion order, so the
//! same configuration always produces the same suggestions.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

mod config;
mod defaults;

pub use config::{ConfigError, KnowledgeConfig, RemovedSpec};

/// Ordered set of names with constant-time membership.
#[derive(Clone, Debug, Default)]
pub struct NameSet {
    ordered: Vec<String>,
    index: FxHashSet<String>,
}

impl NameSet {
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::default();
        for name in iter {
            let name = name.into();
            if set.index.insert(name.clone()) {
                set.ordered.push(name);
            }
        }
        set
    }
}

/// Replacement for an attribute a newer runtime removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovedAttribute {
    /// Replacement text; `{type}` stands for the receiver's type name.
    pub replacement: String,
    /// Attribute the receiver must expose for the replacement to make sense.
    pub requires: Option<String>,
}

impl RemovedAttribute {
    pub fn new(replacement: impl Into<String>, requires: Option<&str>) -> Self {
        RemovedAttribute {
            replacement: replacement.into(),
            requires: requires.map(str::to_owned),
        }
    }

    /// Replacement text for a receiver of type `type_name`.
    pub fn render(&self, type_name: &str) -> String {
        self.replacement.replace("{type}", type_name)
    }
}

/// Immutable curated facts.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    standard_modules: NameSet,
    synonym_sets: Vec<Vec<String>>,
    removed_attributes: FxHashMap<String, RemovedAttribute>,
    reserved_words: NameSet,
    special_cases: FxHashMap<String, String>,
    renamed_modules: FxHashMap<String, String>,
    memory_alternatives: FxHashMap<String, String>,
    overflow_alternatives: FxHashMap<String, String>,
    hashable_alternatives: FxHashMap<String, String>,
}

static STANDARD: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::builtin);

impl KnowledgeBase {
    /// The process-wide default tables.
    pub fn standard() -> &'static KnowledgeBase {
        &STANDARD
    }

    /// A fresh copy of the built-in tables.
    pub fn builtin() -> Self {
        KnowledgeBase {
            standard_modules: defaults::STANDARD_MODULES.iter().copied().collect(),
            synonym_sets: defaults::SYNONYM_SETS
                .iter()
                .map(|set| set.iter().map(|name| (*name).to_owned()).collect())
                .collect(),
            removed_attributes: defaults::REMOVED_ATTRIBUTES
                .iter()
                .map(|&(attr, replacement, requires)| {
                    (
                        attr.to_owned(),
                        RemovedAttribute::new(replacement, requires),
                    )
                })
                .collect(),
            reserved_words: defaults::RESERVED_WORDS.iter().copied().collect(),
            special_cases: owned_pairs(defaults::SPECIAL_CASES),
            renamed_modules: owned_pairs(defaults::RENAMED_MODULES),
            memory_alternatives: owned_pairs(defaults::MEMORY_ALTERNATIVES),
            overflow_alternatives: owned_pairs(defaults::OVERFLOW_ALTERNATIVES),
            hashable_alternatives: owned_pairs(defaults::HASHABLE_ALTERNATIVES),
        }
    }

    pub fn is_standard_module(&self, name: &str) -> bool {
        self.standard_modules.contains(name)
    }

    pub fn standard_modules(&self) -> &NameSet {
        &self.standard_modules
    }

    /// Every other member of every synonym set containing `attr`, in table
    /// order, without repeats.
    pub fn synonyms_of<'a>(&'a self, attr: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let mut seen = FxHashSet::default();
        self.synonym_sets
            .iter()
            .filter(move |set| set.iter().any(|member| member == attr))
            .flatten()
            .map(String::as_str)
            .filter(move |member| *member != attr && seen.insert(*member))
    }

    pub fn synonym_sets(&self) -> &[Vec<String>] {
        &self.synonym_sets
    }

    pub fn removed_attribute(&self, attr: &str) -> Option<&RemovedAttribute> {
        self.removed_attributes.get(attr)
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words.contains(word)
    }

    pub fn reserved_words(&self) -> &NameSet {
        &self.reserved_words
    }

    /// Curated text for a name the runtime does not define.
    pub fn special_case(&self, name: &str) -> Option<&str> {
        self.special_cases.get(name).map(String::as_str)
    }

    /// Current name of a module that was renamed.
    pub fn renamed_module(&self, name: &str) -> Option<&str> {
        self.renamed_modules.get(name).map(String::as_str)
    }

    /// Lower-footprint alternative for a call that ran out of memory.
    pub fn memory_alternative(&self, callee: &str) -> Option<&str> {
        self.memory_alternatives.get(callee).map(String::as_str)
    }

    /// Alternative for a call that overflowed.
    pub fn overflow_alternative(&self, callee: &str) -> Option<&str> {
        self.overflow_alternatives.get(callee).map(String::as_str)
    }

    /// Hashable counterpart of an unhashable type.
    pub fn hashable_alternative(&self, type_name: &str) -> Option<&str> {
        self.hashable_alternatives.get(type_name).map(String::as_str)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        KnowledgeBase::builtin()
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|&(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}
