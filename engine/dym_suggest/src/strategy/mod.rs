//! Suggestion strategies.
//!
//! A strategy inspects the structured fields of one report, the symbol
//! environment and the knowledge base, and yields candidate fix-texts. It
//! never mutates anything it is given. Strategies are registered per
//! [`ErrorKind`] in a [`StrategyRegistry`]; the engine runs the ones
//! registered for a report's kind in registration order and concatenates
//! their output.
//!
//! A strategy that cannot apply returns a [`StrategyError`] (or simply yields
//! nothing). Either way the engine moves on to the next one.

use std::path::PathBuf;

use dym_ir::{ErrorKind, StructuredFields, SuggestionCandidate, SymbolEnvironment, Value};
use dym_knowledge::KnowledgeBase;

mod attributes;
mod calls;
mod imports;
mod names;
mod paths;
mod registry;
mod resources;
mod syntax;

pub use attributes::{
    AttributeOnOtherSymbol, AttributeSynonym, AttributeTypo, BuiltinAsAttribute, RemovedAttribute,
};
pub use calls::{CallInsteadOfSubscript, HashableAlternative, SubscriptInsteadOfCall, UnexpectedKeyword};
pub use imports::{ImportedNameTypo, ModuleTypo, RenamedModule};
pub use names::{
    AttributeOfKnownSymbol, GlobalDeclaration, KeywordTypo, NameSpecialCase, NameTypo,
    StandardModuleImport, UnimportedModuleAttribute,
};
pub use paths::{DirectoryListing, ExpandedPath, ParentDirectory};
pub use registry::{RegistryBuilder, StrategyRegistry};
pub use resources::FootprintAlternative;
pub use syntax::{OctalLiteral, OutdatedComparison, OutdatedPrint};

/// Lazily produced candidates.
pub type Candidates<'a> = Box<dyn Iterator<Item = SuggestionCandidate> + 'a>;

/// Why a strategy does not apply to a report.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("field `{0}` was not extracted from the message")]
    MissingField(&'static str),

    #[error("the failing value is not in the environment")]
    NoReceiver,

    #[error("could not inspect `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything a strategy may read.
#[derive(Copy, Clone, Debug)]
pub struct StrategyContext<'a> {
    pub kind: ErrorKind,
    pub fields: &'a StructuredFields,
    pub env: &'a SymbolEnvironment,
    pub knowledge: &'a KnowledgeBase,
}

impl<'a> StrategyContext<'a> {
    /// A field the strategy cannot work without.
    pub fn field(&self, name: &'static str) -> Result<&'a str, StrategyError> {
        self.fields
            .get(name)
            .ok_or(StrategyError::MissingField(name))
    }
}

/// A source of suggestions for one or more kinds.
pub trait Strategy: Send + Sync {
    /// Stable identifier, used in logs and recorded on every candidate.
    fn name(&self) -> &'static str;

    /// Kinds this strategy is registered for.
    fn kinds(&self) -> &'static [ErrorKind];

    /// Candidates for the report described by `cx`.
    fn generate<'a>(&self, cx: StrategyContext<'a>) -> Result<Candidates<'a>, StrategyError>;
}

/// Box an iterator as [`Candidates`].
pub(crate) fn lazy<'a, I>(iter: I) -> Candidates<'a>
where
    I: Iterator<Item = SuggestionCandidate> + 'a,
{
    Box::new(iter)
}

/// No candidates.
pub(crate) fn none<'a>() -> Candidates<'a> {
    Box::new(std::iter::empty())
}

/// Quote a name the way suggestions display it.
pub(crate) fn quoted(text: &str) -> String {
    format!("'{text}'")
}

/// The value a failing attribute lookup, call or subscript was performed on,
/// reduced to what the strategies need.
#[derive(Debug)]
pub(crate) struct Receiver {
    pub type_name: String,
    pub attributes: Vec<String>,
}

impl Receiver {
    fn from_value(value: &Value) -> Self {
        Receiver {
            type_name: value.type_name().to_owned(),
            attributes: value.attribute_names(),
        }
    }

    pub fn has(&self, attr: &str) -> bool {
        self.attributes.iter().any(|known| known == attr)
    }
}

/// Find the receiver of an attribute failure.
///
/// The receiver captured by the integration layer wins. Otherwise it is
/// reconstructed from the message: a module through the resolver (or a
/// binding of that name), an instance through its type, a class through
/// its name.
pub(crate) fn resolve_receiver(cx: &StrategyContext<'_>) -> Result<Receiver, StrategyError> {
    use dym_ir::fields;

    if let Some(value) = cx.env.receiver() {
        return Ok(Receiver::from_value(value));
    }

    if let Some(module) = cx.fields.get(fields::MODULE) {
        if let Some(exports) = cx.env.resolve_module(module) {
            return Ok(Receiver {
                type_name: "module".to_owned(),
                attributes: exports,
            });
        }
        if let Some(binding) = cx.env.lookup(module).first() {
            return Ok(Receiver::from_value(binding.value));
        }
    }

    if let Some(value) = cx
        .fields
        .get(fields::TYPE)
        .and_then(|type_name| cx.env.find_by_type(type_name))
    {
        return Ok(Receiver::from_value(value));
    }

    if let Some(binding) = cx
        .fields
        .get(fields::CLASS)
        .and_then(|class| cx.env.lookup(class).into_iter().next())
    {
        return Ok(Receiver::from_value(binding.value));
    }

    Err(StrategyError::NoReceiver)
}

#[cfg(test)]
mod test_support;
