#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn parse(json: &str) -> KnowledgeConfig {
    serde_json::from_str(json).expect("valid config json")
}

#[test]
fn test_empty_config_keeps_builtin_tables() {
    let knowledge = KnowledgeBase::from_config(KnowledgeConfig::default()).unwrap();
    assert!(knowledge.is_standard_module("math"));
    assert!(knowledge.is_reserved("while"));
    assert_eq!(knowledge.special_case("xrange"), Some("'range'"));
}

#[test]
fn test_present_key_replaces_table() {
    let config = parse(r#"{ "standardModules": ["alpha", "beta"] }"#);
    let knowledge = KnowledgeBase::from_config(config).unwrap();

    assert!(knowledge.is_standard_module("alpha"));
    assert!(!knowledge.is_standard_module("math"));
    assert_eq!(
        knowledge.standard_modules().iter().collect::<Vec<_>>(),
        vec!["alpha", "beta"]
    );
    // Untouched tables stay built-in.
    assert!(knowledge.is_reserved("lambda"));
}

#[test]
fn test_removed_alternatives_accept_both_shapes() {
    let config = parse(
        r#"{
            "removedAlternatives": {
                "has_key": { "replacement": "key in {type}", "requires": "__contains__" },
                "iteritems": "items"
            }
        }"#,
    );
    let knowledge = KnowledgeBase::from_config(config).unwrap();

    let has_key = knowledge.removed_attribute("has_key").unwrap();
    assert_eq!(has_key.requires.as_deref(), Some("__contains__"));
    assert_eq!(has_key.render("dict"), "key in dict");

    let iteritems = knowledge.removed_attribute("iteritems").unwrap();
    assert_eq!(iteritems.requires, None);
    assert!(knowledge.removed_attribute("iterkeys").is_none());
}

#[test]
fn test_synonym_set_too_small() {
    let config = parse(r#"{ "synonymSets": [["append", "push"], ["lonely"]] }"#);
    assert_eq!(
        KnowledgeBase::from_config(config).unwrap_err(),
        ConfigError::SynonymSetTooSmall { index: 1, len: 1 }
    );
}

#[test]
fn test_empty_names_rejected() {
    let config = parse(r#"{ "reservedWords": ["if", ""] }"#);
    assert_eq!(
        KnowledgeBase::from_config(config).unwrap_err(),
        ConfigError::EmptyName {
            table: "reservedWords"
        }
    );

    let config = parse(r#"{ "specialCases": { "ls": "" } }"#);
    let err = KnowledgeBase::from_config(config).unwrap_err();
    assert_eq!(err.to_string(), "`specialCases` entry `ls` has an empty value");
}

#[test]
fn test_unknown_keys_rejected() {
    let parsed: Result<KnowledgeConfig, _> = serde_json::from_str(r#"{ "standardModule": [] }"#);
    assert!(parsed.is_err());
}
