use std::fmt;

/// Category of a runtime failure.
///
/// Each report carries exactly one kind, assigned by the adapter that
/// captured the failure. Grammar rows and strategies are both keyed on it,
/// and lookup is exact: there is no parent/child relation between kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorKind {
    /// A free name could not be resolved.
    NameNotDefined,
    /// A local name was read before it was assigned.
    UnboundLocal,
    /// An attribute lookup on a value, class or module failed.
    AttributeMissing,
    /// A module could not be found.
    ImportMissing,
    /// A module was found but the requested name is not in it.
    CannotImportName,
    /// A call used a keyword argument the callee does not declare.
    UnexpectedKeyword,
    KeyLookupFailed,
    IndexOutOfRange,
    Unsubscriptable,
    NotCallable,
    Unhashable,
    SyntaxProblem,
    OutOfMemory,
    Overflow,
    FileNotFound,
    IsADirectory,
    NotADirectory,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 17] = [
        ErrorKind::NameNotDefined,
        ErrorKind::UnboundLocal,
        ErrorKind::AttributeMissing,
        ErrorKind::ImportMissing,
        ErrorKind::CannotImportName,
        ErrorKind::UnexpectedKeyword,
        ErrorKind::KeyLookupFailed,
        ErrorKind::IndexOutOfRange,
        ErrorKind::Unsubscriptable,
        ErrorKind::NotCallable,
        ErrorKind::Unhashable,
        ErrorKind::SyntaxProblem,
        ErrorKind::OutOfMemory,
        ErrorKind::Overflow,
        ErrorKind::FileNotFound,
        ErrorKind::IsADirectory,
        ErrorKind::NotADirectory,
    ];

    /// Stable kebab-case tag, used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NameNotDefined => "name-not-defined",
            ErrorKind::UnboundLocal => "unbound-local",
            ErrorKind::AttributeMissing => "attribute-missing",
            ErrorKind::ImportMissing => "import-missing",
            ErrorKind::CannotImportName => "cannot-import-name",
            ErrorKind::UnexpectedKeyword => "unexpected-keyword",
            ErrorKind::KeyLookupFailed => "key-lookup-failed",
            ErrorKind::IndexOutOfRange => "index-out-of-range",
            ErrorKind::Unsubscriptable => "unsubscriptable",
            ErrorKind::NotCallable => "not-callable",
            ErrorKind::Unhashable => "unhashable",
            ErrorKind::SyntaxProblem => "syntax-problem",
            ErrorKind::OutOfMemory => "out-of-memory",
            ErrorKind::Overflow => "overflow",
            ErrorKind::FileNotFound => "file-not-found",
            ErrorKind::IsADirectory => "is-a-directory",
            ErrorKind::NotADirectory => "not-a-directory",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
