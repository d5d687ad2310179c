#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use super::*;
use crate::strategy::test_support::{matched_fields, run, run_with, tier, value};
use dym_ir::{StaticResolver, SymbolEnvironment};
use dym_knowledge::{KnowledgeBase, KnowledgeConfig};
use pretty_assertions::assert_eq;

fn name_fields(name: &str) -> dym_ir::StructuredFields {
    matched_fields(&[(fields::NAME, name)])
}

// Attribute of a known symbol

#[test]
fn test_attribute_of_known_symbol() {
    let env = SymbolEnvironment::new().with_tier(tier(
        Tier::Local,
        vec![("point", value("Point", &["x", "y"])), ("other", value("int", &[]))],
    ));
    let found = run(
        &AttributeOfKnownSymbol,
        ErrorKind::NameNotDefined,
        &name_fields("x"),
        &env,
    )
    .unwrap();
    assert_eq!(found, vec!["'point.x'"]);
}

#[test]
fn test_attribute_hidden_by_nearer_tier() {
    let env = SymbolEnvironment::new()
        .with_tier(tier(Tier::Local, vec![("config", value("int", &[]))]))
        .with_tier(tier(
            Tier::Global,
            vec![("config", value("Config", &["debug"]))],
        ));
    let found = run(
        &AttributeOfKnownSymbol,
        ErrorKind::NameNotDefined,
        &name_fields("debug"),
        &env,
    )
    .unwrap();
    assert_eq!(found, vec!["'config.debug' (hidden by local)"]);
}

#[test]
fn test_attribute_of_builtin_symbol() {
    let env = SymbolEnvironment::new().with_tier(tier(
        Tier::Builtin,
        vec![("str", value("type", &["join"]))],
    ));
    let found = run(
        &AttributeOfKnownSymbol,
        ErrorKind::NameNotDefined,
        &name_fields("join"),
        &env,
    )
    .unwrap();
    assert_eq!(found, vec!["'str.join'"]);
}

#[test]
fn test_builtin_attribute_hidden_by_local() {
    let env = SymbolEnvironment::new()
        .with_tier(tier(Tier::Local, vec![("str", value("int", &[]))]))
        .with_tier(tier(Tier::Builtin, vec![("str", value("type", &["join"]))]));
    let found = run(
        &AttributeOfKnownSymbol,
        ErrorKind::NameNotDefined,
        &name_fields("join"),
        &env,
    )
    .unwrap();
    assert_eq!(found, vec!["'str.join' (hidden by local)"]);
}

#[test]
fn test_missing_name_field() {
    let env = SymbolEnvironment::new();
    let err = run(
        &AttributeOfKnownSymbol,
        ErrorKind::NameNotDefined,
        &dym_ir::StructuredFields::empty(),
        &env,
    )
    .unwrap_err();
    assert!(matches!(err, StrategyError::MissingField("name")));
}

// Standard modules

#[test]
fn test_standard_module_import() {
    let env = SymbolEnvironment::new();
    let found = run(
        &StandardModuleImport,
        ErrorKind::NameNotDefined,
        &name_fields("math"),
        &env,
    )
    .unwrap();
    assert_eq!(found, vec!["to import math first"]);
}

#[test]
fn test_standard_module_already_bound() {
    let env = SymbolEnvironment::new()
        .with_tier(tier(Tier::Global, vec![("math", value("module", &["pi"]))]));
    let found = run(
        &StandardModuleImport,
        ErrorKind::NameNotDefined,
        &name_fields("math"),
        &env,
    )
    .unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_unimported_module_attribute() {
    let resolver = StaticResolver::new()
        .with_module("math", ["pi", "tau"])
        .with_module("cmath", ["pi", "phase"]);
    let env = SymbolEnvironment::new().with_resolver(Arc::new(resolver));
    let found = run(
        &UnimportedModuleAttribute,
        ErrorKind::NameNotDefined,
        &name_fields("pi"),
        &env,
    )
    .unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.contains(&"'math.pi' (not imported)".to_owned()));
    assert!(found.contains(&"'cmath.pi' (not imported)".to_owned()));
}

#[test]
fn test_unimported_module_attribute_skips_bound_modules() {
    let resolver = StaticResolver::new().with_module("math", ["pi"]);
    let env = SymbolEnvironment::new()
        .with_resolver(Arc::new(resolver))
        .with_tier(tier(Tier::Global, vec![("math", value("module", &["pi"]))]));
    let found = run(
        &UnimportedModuleAttribute,
        ErrorKind::NameNotDefined,
        &name_fields("pi"),
        &env,
    )
    .unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_unimported_module_attribute_without_resolver() {
    let found = run(
        &UnimportedModuleAttribute,
        ErrorKind::NameNotDefined,
        &name_fields("pi"),
        &SymbolEnvironment::new(),
    )
    .unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_modules_missing_from_resolver_yield_nothing() {
    // `math` is a standard module, but this resolver knows nothing about it.
    let resolver = StaticResolver::new().with_module("not_a_std_module", ["pi"]);
    let env = SymbolEnvironment::new().with_resolver(Arc::new(resolver));
    let found = run(
        &UnimportedModuleAttribute,
        ErrorKind::NameNotDefined,
        &name_fields("pi"),
        &env,
    )
    .unwrap();
    assert!(found.is_empty());
}

// Typos

#[test]
fn test_name_typo_tags_nearest_tier() {
    let env = SymbolEnvironment::new()
        .with_tier(tier(Tier::Local, vec![("babar", value("int", &[]))]))
        .with_tier(tier(
            Tier::Global,
            vec![("babar", value("str", &[])), ("babaz", value("str", &[]))],
        ));
    let found = run(&NameTypo, ErrorKind::NameNotDefined, &name_fields("baba"), &env).unwrap();
    assert_eq!(found, vec!["'babar' (local)", "'babaz' (global)"]);
}

#[test]
fn test_name_typo_excludes_the_name_itself() {
    let env = SymbolEnvironment::new().with_tier(tier(
        Tier::Local,
        vec![("count", value("int", &[])), ("counts", value("list", &[]))],
    ));
    let found = run(&NameTypo, ErrorKind::UnboundLocal, &name_fields("count"), &env).unwrap();
    assert_eq!(found, vec!["'counts' (local)"]);
}

#[test]
fn test_keyword_typo() {
    let found = run(
        &KeywordTypo,
        ErrorKind::NameNotDefined,
        &name_fields("whille"),
        &SymbolEnvironment::new(),
    )
    .unwrap();
    assert_eq!(found, vec!["'while' (keyword)"]);
}

#[test]
fn test_special_case() {
    let found = run(
        &NameSpecialCase,
        ErrorKind::NameNotDefined,
        &name_fields("xrange"),
        &SymbolEnvironment::new(),
    )
    .unwrap();
    assert_eq!(found, vec!["'range'"]);
}

#[test]
fn test_special_case_from_custom_knowledge() {
    let config: KnowledgeConfig = serde_json::from_str(
        r#"{ "specialCases": { "nothing": "'None'" } }"#,
    )
    .unwrap();
    let knowledge = KnowledgeBase::from_config(config).unwrap();

    let found = run_with(
        &NameSpecialCase,
        ErrorKind::NameNotDefined,
        &name_fields("nothing"),
        &SymbolEnvironment::new(),
        &knowledge,
    )
    .unwrap();
    assert_eq!(found, vec!["'None'"]);

    let found = run_with(
        &NameSpecialCase,
        ErrorKind::NameNotDefined,
        &name_fields("xrange"),
        &SymbolEnvironment::new(),
        &knowledge,
    )
    .unwrap();
    assert!(found.is_empty());
}

// Unbound locals

#[test]
fn test_global_declaration() {
    let env = SymbolEnvironment::new()
        .with_tier(tier(Tier::Local, vec![]))
        .with_tier(tier(Tier::Global, vec![("count", value("int", &[]))]));
    let found = run(
        &GlobalDeclaration,
        ErrorKind::UnboundLocal,
        &name_fields("count"),
        &env,
    )
    .unwrap();
    assert_eq!(found, vec!["'global count'"]);
}

#[test]
fn test_global_declaration_needs_global_binding() {
    let env = SymbolEnvironment::new()
        .with_tier(tier(Tier::Builtin, vec![("count", value("int", &[]))]));
    let found = run(
        &GlobalDeclaration,
        ErrorKind::UnboundLocal,
        &name_fields("count"),
        &env,
    )
    .unwrap();
    assert!(found.is_empty());
}
