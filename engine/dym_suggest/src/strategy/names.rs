//! Strategies for names that could not be resolved.

use dym_ir::{fields, ErrorKind, SuggestionCandidate, Tier};

use super::{lazy, none, quoted, Candidates, Strategy, StrategyContext, StrategyError};
use crate::fuzzy::{close_matches, MatchBounds};

/// Upper bound on standard modules probed through the resolver per report.
pub const MAX_MODULE_PROBES: usize = 512;

/// `baba` where a bound `foo` has an attribute `baba`: suggest `foo.baba`.
///
/// When the nearest binding of `foo` lacks the attribute but an outer one
/// has it, the suggestion says which tier hides it.
#[derive(Debug, Default)]
pub struct AttributeOfKnownSymbol;

impl Strategy for AttributeOfKnownSymbol {
    fn name(&self) -> &'static str {
        "attribute-of-known-symbol"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        let source = self.name();
        let env = cx.env;

        let symbols = env.bound_names().into_iter().map(|(symbol, _)| symbol);

        Ok(lazy(symbols.filter_map(move |symbol| {
            let bindings = env.lookup(symbol);
            let mut scoped = bindings.iter();
            let nearest = scoped.next()?;
            let text = format!("'{symbol}.{name}'");
            if nearest.value.has_attribute(name) {
                Some(SuggestionCandidate::new(text, source))
            } else if scoped.any(|outer| outer.value.has_attribute(name)) {
                Some(SuggestionCandidate::new(
                    format!("{text} (hidden by {})", nearest.tier),
                    source,
                ))
            } else {
                None
            }
        })))
    }
}

/// A standard module used without importing it.
#[derive(Debug, Default)]
pub struct StandardModuleImport;

impl Strategy for StandardModuleImport {
    fn name(&self) -> &'static str {
        "standard-module-import"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        if !cx.knowledge.is_standard_module(name) || cx.env.is_bound(name) {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            format!("to import {name} first"),
            self.name(),
        ))))
    }
}

/// A name exported by a standard module that is not imported.
///
/// Needs a resolver; without one it yields nothing.
#[derive(Debug, Default)]
pub struct UnimportedModuleAttribute;

impl Strategy for UnimportedModuleAttribute {
    fn name(&self) -> &'static str {
        "unimported-module-attribute"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        if !cx.env.has_resolver() {
            return Ok(none());
        }
        let source = self.name();
        let env = cx.env;

        let found = cx
            .knowledge
            .standard_modules()
            .iter()
            .filter(move |module| !env.is_bound(module))
            .take(MAX_MODULE_PROBES)
            .filter(move |module| {
                env.resolve_module(module)
                    .is_some_and(|exports| exports.iter().any(|export| export == name))
            })
            .map(move |module| {
                SuggestionCandidate::new(format!("'{module}.{name}' (not imported)"), source)
            });
        Ok(lazy(found))
    }
}

/// Close matches among every bound name, tagged with the nearest tier.
#[derive(Debug, Default)]
pub struct NameTypo;

impl Strategy for NameTypo {
    fn name(&self) -> &'static str {
        "name-typo"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined, ErrorKind::UnboundLocal]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        let bound = cx.env.bound_names();
        let found: Vec<SuggestionCandidate> =
            close_matches(name, bound.iter().map(|&(known, _)| known), MatchBounds::DEFAULT)
                .into_iter()
                .filter_map(|found| {
                    let &(_, tier) = bound.iter().find(|&&(known, _)| known == found.text)?;
                    Some(SuggestionCandidate::scored(
                        format!("'{}' ({tier})", found.text),
                        self.name(),
                        found.score,
                    ))
                })
                .collect();
        Ok(lazy(found.into_iter()))
    }
}

/// Close matches among the reserved words.
#[derive(Debug, Default)]
pub struct KeywordTypo;

impl Strategy for KeywordTypo {
    fn name(&self) -> &'static str {
        "keyword-typo"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        let source = self.name();
        let found = close_matches(name, cx.knowledge.reserved_words().iter(), MatchBounds::DEFAULT)
            .into_iter()
            .map(move |found| {
                SuggestionCandidate::scored(format!("'{}' (keyword)", found.text), source, found.score)
            });
        Ok(lazy(found))
    }
}

/// Curated text for names people expect to exist.
#[derive(Debug, Default)]
pub struct NameSpecialCase;

impl Strategy for NameSpecialCase {
    fn name(&self) -> &'static str {
        "name-special-case"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::NameNotDefined]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        let source = self.name();
        Ok(lazy(
            cx.knowledge
                .special_case(name)
                .map(|text| SuggestionCandidate::new(text, source))
                .into_iter(),
        ))
    }
}

/// A local read before assignment that shadows a global of the same name.
#[derive(Debug, Default)]
pub struct GlobalDeclaration;

impl Strategy for GlobalDeclaration {
    fn name(&self) -> &'static str {
        "global-declaration"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::UnboundLocal]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        let is_global = cx
            .env
            .tier(Tier::Global)
            .is_some_and(|scope| scope.contains(name));
        if !is_global {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            quoted(&format!("global {name}")),
            self.name(),
        ))))
    }
}

#[cfg(test)]
mod tests;
