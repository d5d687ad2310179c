//! Strategies for failed imports.

use dym_ir::{fields, ErrorKind, SuggestionCandidate};

use super::{lazy, none, quoted, Candidates, Strategy, StrategyContext, StrategyError};
use crate::fuzzy::{close_matches, MatchBounds};

#[derive(Debug, Default)]
pub struct RenamedModule;

impl Strategy for RenamedModule {
    fn name(&self) -> &'static str {
        "renamed-module"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::ImportMissing]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let module = cx.field(fields::MODULE)?;
        let source = self.name();
        Ok(lazy(
            cx.knowledge
                .renamed_module(module)
                .map(|renamed| SuggestionCandidate::new(quoted(renamed), source))
                .into_iter(),
        ))
    }
}

/// Close matches for a module name.
///
/// A top-level name is matched against the standard modules. For a dotted
/// name only the last segment is matched, against what the parent exports.
#[derive(Debug, Default)]
pub struct ModuleTypo;

impl Strategy for ModuleTypo {
    fn name(&self) -> &'static str {
        "module-typo"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::ImportMissing]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let module = cx.field(fields::MODULE)?;
        let source = self.name();

        let Some((parent, leaf)) = module.rsplit_once('.') else {
            let found: Vec<SuggestionCandidate> = close_matches(
                module,
                cx.knowledge.standard_modules().iter(),
                MatchBounds::LOOSE,
            )
            .into_iter()
            .map(|found| SuggestionCandidate::scored(quoted(found.text), source, found.score))
            .collect();
            return Ok(lazy(found.into_iter()));
        };

        let Some(exports) = cx.env.resolve_module(parent) else {
            return Ok(none());
        };
        let found: Vec<SuggestionCandidate> =
            close_matches(leaf, exports.iter().map(String::as_str), MatchBounds::LOOSE)
                .into_iter()
                .map(|found| {
                    SuggestionCandidate::scored(
                        format!("'{parent}.{}'", found.text),
                        source,
                        found.score,
                    )
                })
                .collect();
        Ok(lazy(found.into_iter()))
    }
}

/// Close matches for a name imported from a module that does not export it.
#[derive(Debug, Default)]
pub struct ImportedNameTypo;

impl Strategy for ImportedNameTypo {
    fn name(&self) -> &'static str {
        "imported-name-typo"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::CannotImportName]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let name = cx.field(fields::NAME)?;
        let module = cx.field(fields::MODULE)?;
        let Some(exports) = cx.env.resolve_module(module) else {
            return Ok(none());
        };
        let found: Vec<SuggestionCandidate> =
            close_matches(name, exports.iter().map(String::as_str), MatchBounds::LOOSE)
                .into_iter()
                .map(|found| SuggestionCandidate::scored(quoted(found.text), self.name(), found.score))
                .collect();
        Ok(lazy(found.into_iter()))
    }
}
