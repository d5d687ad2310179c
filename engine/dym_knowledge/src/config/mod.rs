//! Configuration overrides for the knowledge base.
//!
//! Every key is optional. A present key replaces the corresponding built-in
//! table wholesale; an absent key keeps the built-in one. Keys use camelCase
//! so configuration files read the same across hosts:
//!
//! ```text
//! {
//!     "standardModules": ["math", "os"],
//!     "removedAlternatives": {
//!         "has_key": { "replacement": "key in {type}", "requires": "__contains__" },
//!         "iteritems": "items"
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{KnowledgeBase, NameSet, RemovedAttribute};

/// Errors found while validating a [`KnowledgeConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("empty name in `{table}`")]
    EmptyName { table: &'static str },

    #[error("synonym set {index} has {len} member(s), at least two are required")]
    SynonymSetTooSmall { index: usize, len: usize },

    #[error("`{table}` entry `{key}` has an empty value")]
    EmptyValue { table: &'static str, key: String },
}

/// A removed-attribute entry: either just the replacement text or the
/// replacement plus the attribute the receiver must expose.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RemovedSpec {
    Replacement(String),
    Detailed {
        replacement: String,
        #[serde(default)]
        requires: Option<String>,
    },
}

/// Overrides for the built-in tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KnowledgeConfig {
    pub standard_modules: Option<Vec<String>>,
    pub synonym_sets: Option<Vec<Vec<String>>>,
    pub removed_alternatives: Option<BTreeMap<String, RemovedSpec>>,
    pub reserved_words: Option<Vec<String>>,
    pub special_cases: Option<BTreeMap<String, String>>,
    pub renamed_modules: Option<BTreeMap<String, String>>,
    pub memory_alternatives: Option<BTreeMap<String, String>>,
    pub overflow_alternatives: Option<BTreeMap<String, String>>,
    pub hashable_alternatives: Option<BTreeMap<String, String>>,
}

impl KnowledgeBase {
    /// Built-in tables with `config` applied on top.
    pub fn from_config(config: KnowledgeConfig) -> Result<Self, ConfigError> {
        let mut knowledge = KnowledgeBase::builtin();

        if let Some(modules) = config.standard_modules {
            knowledge.standard_modules = name_set("standardModules", modules)?;
        }
        if let Some(words) = config.reserved_words {
            knowledge.reserved_words = name_set("reservedWords", words)?;
        }
        if let Some(sets) = config.synonym_sets {
            for (index, set) in sets.iter().enumerate() {
                if set.len() < 2 {
                    return Err(ConfigError::SynonymSetTooSmall {
                        index,
                        len: set.len(),
                    });
                }
                if set.iter().any(String::is_empty) {
                    return Err(ConfigError::EmptyName {
                        table: "synonymSets",
                    });
                }
            }
            knowledge.synonym_sets = sets;
        }
        if let Some(removed) = config.removed_alternatives {
            knowledge.removed_attributes = removed_table(removed)?;
        }
        if let Some(table) = config.special_cases {
            knowledge.special_cases = text_table("specialCases", table)?;
        }
        if let Some(table) = config.renamed_modules {
            knowledge.renamed_modules = text_table("renamedModules", table)?;
        }
        if let Some(table) = config.memory_alternatives {
            knowledge.memory_alternatives = text_table("memoryAlternatives", table)?;
        }
        if let Some(table) = config.overflow_alternatives {
            knowledge.overflow_alternatives = text_table("overflowAlternatives", table)?;
        }
        if let Some(table) = config.hashable_alternatives {
            knowledge.hashable_alternatives = text_table("hashableAlternatives", table)?;
        }

        Ok(knowledge)
    }
}

fn name_set(table: &'static str, names: Vec<String>) -> Result<NameSet, ConfigError> {
    if names.iter().any(String::is_empty) {
        return Err(ConfigError::EmptyName { table });
    }
    Ok(names.into_iter().collect())
}

fn text_table(
    table: &'static str,
    entries: BTreeMap<String, String>,
) -> Result<FxHashMap<String, String>, ConfigError> {
    for (key, value) in &entries {
        if key.is_empty() {
            return Err(ConfigError::EmptyName { table });
        }
        if value.is_empty() {
            return Err(ConfigError::EmptyValue {
                table,
                key: key.clone(),
            });
        }
    }
    Ok(entries.into_iter().collect())
}

fn removed_table(
    entries: BTreeMap<String, RemovedSpec>,
) -> Result<FxHashMap<String, RemovedAttribute>, ConfigError> {
    const TABLE: &str = "removedAlternatives";

    let mut table = FxHashMap::default();
    for (attr, spec) in entries {
        if attr.is_empty() {
            return Err(ConfigError::EmptyName { table: TABLE });
        }
        let entry = match spec {
            RemovedSpec::Replacement(replacement) => RemovedAttribute {
                replacement,
                requires: None,
            },
            RemovedSpec::Detailed {
                replacement,
                requires,
            } => RemovedAttribute {
                replacement,
                requires,
            },
        };
        if entry.replacement.is_empty() {
            return Err(ConfigError::EmptyValue {
                table: TABLE,
                key: attr,
            });
        }
        table.insert(attr, entry);
    }
    Ok(table)
}

#[cfg(test)]
mod tests;
