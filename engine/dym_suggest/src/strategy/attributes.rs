//! Strategies for failed attribute lookups.
//!
//! All of them except [`BuiltinAsAttribute`] need the receiver; see
//! [`super::resolve_receiver`] for how it is found.

use dym_ir::{fields, ErrorKind, SuggestionCandidate, Tier};

use super::{lazy, none, quoted, resolve_receiver, Candidates, Strategy, StrategyContext, StrategyError};
use crate::fuzzy::{close_matches, MatchBounds};

/// Other symbols suggested per report by [`AttributeOnOtherSymbol`].
pub const MAX_OTHER_SYMBOLS: usize = 3;

/// `xs.len` where `len` is a callable builtin: suggest `len(list)`.
#[derive(Debug, Default)]
pub struct BuiltinAsAttribute;

impl Strategy for BuiltinAsAttribute {
    fn name(&self) -> &'static str {
        "builtin-as-attribute"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::AttributeMissing]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let attr = cx.field(fields::ATTR)?;
        let is_builtin_callable = cx
            .env
            .tier(Tier::Builtin)
            .and_then(|scope| scope.get(attr))
            .is_some_and(|value| value.is_callable());
        if !is_builtin_callable {
            return Ok(none());
        }

        let type_name = match cx.fields.get(fields::TYPE).or_else(|| cx.fields.get(fields::CLASS)) {
            Some(type_name) => type_name.to_owned(),
            None => resolve_receiver(&cx)?.type_name,
        };
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            quoted(&format!("{attr}({type_name})")),
            self.name(),
        ))))
    }
}

/// An attribute a newer runtime removed, with its replacement.
#[derive(Debug, Default)]
pub struct RemovedAttribute;

impl Strategy for RemovedAttribute {
    fn name(&self) -> &'static str {
        "removed-attribute"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::AttributeMissing]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let attr = cx.field(fields::ATTR)?;
        let Some(removed) = cx.knowledge.removed_attribute(attr) else {
            return Ok(none());
        };
        let receiver = resolve_receiver(&cx)?;

        let capable = removed
            .requires
            .as_deref()
            .is_none_or(|required| receiver.has(required));
        if receiver.has(attr) || !capable {
            return Ok(none());
        }
        Ok(lazy(std::iter::once(SuggestionCandidate::new(
            format!("{} ({attr} is removed)", quoted(&removed.render(&receiver.type_name))),
            self.name(),
        ))))
    }
}

/// The name other languages (or other containers) use for the same thing.
#[derive(Debug, Default)]
pub struct AttributeSynonym;

impl Strategy for AttributeSynonym {
    fn name(&self) -> &'static str {
        "attribute-synonym"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::AttributeMissing]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let attr = cx.field(fields::ATTR)?;
        let mut siblings = cx.knowledge.synonyms_of(attr).peekable();
        if siblings.peek().is_none() {
            return Ok(none());
        }
        let receiver = resolve_receiver(&cx)?;
        let source = self.name();
        let found: Vec<SuggestionCandidate> = siblings
            .filter(|sibling| receiver.has(sibling))
            .map(|sibling| SuggestionCandidate::new(quoted(sibling), source))
            .collect();
        Ok(lazy(found.into_iter()))
    }
}

/// Close matches among the receiver's attributes.
#[derive(Debug, Default)]
pub struct AttributeTypo;

impl Strategy for AttributeTypo {
    fn name(&self) -> &'static str {
        "attribute-typo"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::AttributeMissing]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let attr = cx.field(fields::ATTR)?;
        let receiver = resolve_receiver(&cx)?;
        let found: Vec<SuggestionCandidate> = close_matches(
            attr,
            receiver.attributes.iter().map(String::as_str),
            MatchBounds::DEFAULT,
        )
        .into_iter()
        .map(|found| SuggestionCandidate::scored(quoted(found.text), self.name(), found.score))
        .collect();
        Ok(lazy(found.into_iter()))
    }
}

/// Another bound symbol, of a different type, that does have the attribute.
#[derive(Debug, Default)]
pub struct AttributeOnOtherSymbol;

impl Strategy for AttributeOnOtherSymbol {
    fn name(&self) -> &'static str {
        "attribute-on-other-symbol"
    }

    fn kinds(&self) -> &'static [ErrorKind] {
        &[ErrorKind::AttributeMissing]
    }

    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError> {
        let attr = cx.field(fields::ATTR)?;
        let receiver_type = match cx.fields.get(fields::TYPE) {
            Some(type_name) => type_name.to_owned(),
            None => resolve_receiver(&cx)?.type_name,
        };
        let source = self.name();
        let env = cx.env;

        let found = env
            .bound_names()
            .into_iter()
            .filter(|&(_, tier)| matches!(tier, Tier::Local | Tier::Global))
            .filter_map(move |(symbol, _)| {
                let nearest = env.lookup(symbol).into_iter().next()?;
                let value = nearest.value;
                (value.type_name() != receiver_type && value.has_attribute(attr))
                    .then(|| SuggestionCandidate::new(format!("'{symbol}.{attr}'"), source))
            })
            .take(MAX_OTHER_SYMBOLS);
        Ok(lazy(found))
    }
}
