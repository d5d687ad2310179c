use dym_ir::{fields, ErrorKind, StructuredFields};
use regex::Regex;
use smallvec::SmallVec;

/// A row that could not be turned into an entry.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("grammar entry `{id}` has an invalid pattern: {source}")]
    Pattern {
        id: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("grammar entry `{id}` captures unknown field `{field}`")]
    UnknownField { id: &'static str, field: String },
}

/// One phrasing of one failure kind.
#[derive(Clone, Debug)]
pub struct GrammarEntry {
    id: &'static str,
    kind: ErrorKind,
    pattern: Regex,
    fields: SmallVec<[&'static str; 4]>,
}

impl GrammarEntry {
    /// Compile `pattern` anchored to the whole message.
    ///
    /// Every named group must be a name from [`dym_ir::fields`].
    pub fn new(id: &'static str, kind: ErrorKind, pattern: &str) -> Result<Self, GrammarError> {
        let anchored = format!(r"\A(?:{pattern})\z");
        let pattern = Regex::new(&anchored).map_err(|source| GrammarError::Pattern { id, source })?;

        let mut captured = SmallVec::new();
        for name in pattern.capture_names().flatten() {
            let field = fields::lookup(name).ok_or_else(|| GrammarError::UnknownField {
                id,
                field: name.to_owned(),
            })?;
            captured.push(field);
        }

        Ok(GrammarEntry {
            id,
            kind,
            pattern,
            fields: captured,
        })
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Field names this entry can produce, in group order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn is_match(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }

    /// Named captures of `message`, or `None` when it does not match.
    ///
    /// Optional groups that did not participate are left out.
    pub fn captures(&self, message: &str) -> Option<StructuredFields> {
        let caps = self.pattern.captures(message)?;
        let mut out = StructuredFields::matched(self.id);
        for &field in &self.fields {
            if let Some(value) = caps.name(field) {
                out.insert(field, value.as_str());
            }
        }
        Some(out)
    }
}
