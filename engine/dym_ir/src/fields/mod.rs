//! Structured fields extracted from an error message.
//!
//! Field names are a closed vocabulary shared by the grammar rows and the
//! strategies, so every phrasing of the same condition lands in the same
//! slot regardless of which runtime version produced it.

use smallvec::SmallVec;

/// The undefined or imported name.
pub const NAME: &str = "name";
/// The missing attribute.
pub const ATTR: &str = "attr";
/// Type name of an instance receiver.
pub const TYPE: &str = "type";
/// Name of a class used as receiver.
pub const CLASS: &str = "class";
pub const MODULE: &str = "module";
/// Parent package of a dotted module that is not a package.
pub const PARENT: &str = "parent";
pub const LOCATION: &str = "location";
/// Callee name, possibly qualified.
pub const FUNC: &str = "func";
/// Offending keyword argument.
pub const ARG: &str = "arg";
pub const KEY: &str = "key";
pub const PATH: &str = "path";
/// Target C type of a failed integer conversion.
pub const CTYPE: &str = "ctype";
/// Hint the runtime already embedded in its own message.
pub const HINT: &str = "hint";

/// Every known field name.
pub const ALL: [&str; 13] = [
    NAME, ATTR, TYPE, CLASS, MODULE, PARENT, LOCATION, FUNC, ARG, KEY, PATH, CTYPE, HINT,
];

/// Map a capture group name onto the shared vocabulary.
pub fn lookup(name: &str) -> Option<&'static str> {
    ALL.iter().copied().find(|known| *known == name)
}

/// Result of classifying one message.
///
/// An unmatched message yields the empty value, which strategies treat as
/// "cannot apply". A message can also match an entry that captures nothing
/// (`invalid syntax`); [`StructuredFields::is_match`] tells the two apart.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StructuredFields {
    entry: Option<&'static str>,
    values: SmallVec<[(&'static str, String); 4]>,
}

impl StructuredFields {
    /// Fields for a message no entry matched.
    pub fn empty() -> Self {
        StructuredFields::default()
    }

    /// Fields for a message matched by the entry `entry`.
    pub fn matched(entry: &'static str) -> Self {
        StructuredFields {
            entry: Some(entry),
            values: SmallVec::new(),
        }
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.values.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.values.push((name, value));
        }
    }

    /// Builder form of [`StructuredFields::insert`].
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Id of the grammar entry that produced these fields.
    pub fn entry(&self) -> Option<&'static str> {
        self.entry
    }

    /// Whether some grammar entry matched.
    pub fn is_match(&self) -> bool {
        self.entry.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }
}
