use dym_ir::ErrorKind;

/// Source form of a [`crate::GrammarEntry`].
#[derive(Copy, Clone, Debug)]
pub struct GrammarRow {
    pub id: &'static str,
    pub kind: ErrorKind,
    /// Unanchored pattern; anchoring is added at compile time.
    pub pattern: &'static str,
}

const fn row(id: &'static str, kind: ErrorKind, pattern: &'static str) -> GrammarRow {
    GrammarRow { id, kind, pattern }
}

/// Phrasings produced by the runtime versions we know about.
///
/// Within a kind, order is the order entries are tried. Rows that cover an
/// older phrasing sit next to their newer counterpart.
pub const STANDARD_ROWS: &[GrammarRow] = &[
    // -- NameNotDefined --
    row(
        "name.not_defined",
        ErrorKind::NameNotDefined,
        r"name '(?P<name>\w+)' is not defined(?:\. Did you (?:mean:|forget to import) (?P<hint>'[\w.]+')\?)?",
    ),
    row(
        "name.global_not_defined",
        ErrorKind::NameNotDefined,
        r"global name '(?P<name>\w+)' is not defined",
    ),
    row(
        "name.free_before_assignment",
        ErrorKind::NameNotDefined,
        r"free variable '(?P<name>\w+)' referenced before assignment in enclosing scope",
    ),
    row(
        "name.free_not_associated",
        ErrorKind::NameNotDefined,
        r"cannot access free variable '(?P<name>\w+)' where it is not associated with a value in enclosing scope",
    ),
    // -- UnboundLocal --
    row(
        "local.before_assignment",
        ErrorKind::UnboundLocal,
        r"local variable '(?P<name>\w+)' referenced before assignment",
    ),
    row(
        "local.not_associated",
        ErrorKind::UnboundLocal,
        r"cannot access local variable '(?P<name>\w+)' where it is not associated with a value",
    ),
    // -- AttributeMissing --
    row(
        "attr.object",
        ErrorKind::AttributeMissing,
        r"'(?P<type>[\w.]+)' object has no attribute '(?P<attr>\w+)'(?:\. Did you mean: (?P<hint>'\w+')\?)?",
    ),
    row(
        "attr.type_object",
        ErrorKind::AttributeMissing,
        r"type object '(?P<class>[\w.]+)' has no attribute '(?P<attr>\w+)'(?:\. Did you mean: (?P<hint>'\w+')\?)?",
    ),
    row(
        "attr.module",
        ErrorKind::AttributeMissing,
        r"module '(?P<module>[\w.]+)' has no attribute '(?P<attr>\w+)'(?:\. Did you mean: (?P<hint>'\w+')\?)?",
    ),
    row(
        "attr.partial_module",
        ErrorKind::AttributeMissing,
        r"partially initialized module '(?P<module>[\w.]+)' has no attribute '(?P<attr>\w+)' \(most likely due to a circular import\)",
    ),
    row(
        "attr.old_instance",
        ErrorKind::AttributeMissing,
        r"(?P<type>\w+) instance has no attribute '(?P<attr>\w+)'",
    ),
    row(
        "attr.old_class",
        ErrorKind::AttributeMissing,
        r"class (?P<class>\w+) has no attribute '(?P<attr>\w+)'",
    ),
    // -- ImportMissing --
    row(
        "import.no_module",
        ErrorKind::ImportMissing,
        r"No module named '(?P<module>[\w.]+)'",
    ),
    row(
        "import.no_module_unquoted",
        ErrorKind::ImportMissing,
        r"No module named (?P<module>[\w.]+)",
    ),
    row(
        "import.not_a_package",
        ErrorKind::ImportMissing,
        r"No module named '(?P<module>[\w.]+)'; '(?P<parent>[\w.]+)' is not a package",
    ),
    // -- CannotImportName --
    row(
        "import_name.bare",
        ErrorKind::CannotImportName,
        r"cannot import name '(?P<name>\w+)'",
    ),
    row(
        "import_name.unquoted",
        ErrorKind::CannotImportName,
        r"cannot import name (?P<name>\w+)",
    ),
    row(
        "import_name.from_module",
        ErrorKind::CannotImportName,
        r"cannot import name '(?P<name>\w+)' from '(?P<module>[\w.]+)' \((?P<location>[^)]*)\)(?:\. Did you mean: (?P<hint>'\w+')\?)?",
    ),
    row(
        "import_name.partial_module",
        ErrorKind::CannotImportName,
        r"cannot import name '(?P<name>\w+)' from partially initialized module '(?P<module>[\w.]+)' \(most likely due to a circular import\) \((?P<location>[^)]*)\)",
    ),
    // -- UnexpectedKeyword --
    row(
        "keyword.unexpected",
        ErrorKind::UnexpectedKeyword,
        r"(?P<func>[\w.<>]+)\(\) got an unexpected keyword argument '(?P<arg>\w+)'(?:\. Did you mean (?P<hint>'\w+')\?)?",
    ),
    row(
        "keyword.invalid_for",
        ErrorKind::UnexpectedKeyword,
        r"'(?P<arg>\w+)' is an invalid keyword argument for (?P<func>[\w.]+)\(\)",
    ),
    row(
        "keyword.invalid_for_this_function",
        ErrorKind::UnexpectedKeyword,
        r"'(?P<arg>\w+)' is an invalid keyword argument for this function",
    ),
    // -- KeyLookupFailed --
    row(
        "key.quoted",
        ErrorKind::KeyLookupFailed,
        r"'(?P<key>[^']*)'",
    ),
    row(
        "key.integer",
        ErrorKind::KeyLookupFailed,
        r"(?P<key>-?\d+)",
    ),
    // -- IndexOutOfRange --
    row(
        "index.out_of_range",
        ErrorKind::IndexOutOfRange,
        r"(?P<type>\w+) index out of range",
    ),
    row(
        "index.assignment",
        ErrorKind::IndexOutOfRange,
        r"(?P<type>\w+) assignment index out of range",
    ),
    row(
        "index.object",
        ErrorKind::IndexOutOfRange,
        r"(?P<type>\w+) object index out of range",
    ),
    // -- Unsubscriptable --
    row(
        "subscript.not_subscriptable",
        ErrorKind::Unsubscriptable,
        r"'(?P<type>[\w.]+)' object is not subscriptable",
    ),
    row(
        "subscript.unsubscriptable",
        ErrorKind::Unsubscriptable,
        r"'(?P<type>[\w.]+)' object is unsubscriptable",
    ),
    row(
        "subscript.no_indexing",
        ErrorKind::Unsubscriptable,
        r"'(?P<type>[\w.]+)' object does not support indexing",
    ),
    row(
        "subscript.type",
        ErrorKind::Unsubscriptable,
        r"type '(?P<type>[\w.]+)' is not subscriptable",
    ),
    // -- NotCallable --
    row(
        "call.not_callable",
        ErrorKind::NotCallable,
        r"'(?P<type>[\w.]+)' object is not callable",
    ),
    // -- Unhashable --
    row(
        "hash.unhashable",
        ErrorKind::Unhashable,
        r"unhashable type: '(?P<type>[\w.]+)'",
    ),
    row(
        "hash.cannot_use",
        ErrorKind::Unhashable,
        r"cannot use '(?P<type>[\w.]+)' as an? (?:set element|dict key) \(unhashable type: '[\w.]+'\)",
    ),
    // -- SyntaxProblem --
    row(
        "syntax.missing_parentheses",
        ErrorKind::SyntaxProblem,
        r"Missing parentheses in call to '(?P<func>\w+)'(?:\. Did you mean (?P<hint>.+)\?)?",
    ),
    row(
        "syntax.invalid",
        ErrorKind::SyntaxProblem,
        r"invalid syntax(?:\. Perhaps you forgot a comma\?)?",
    ),
    row(
        "syntax.invalid_token",
        ErrorKind::SyntaxProblem,
        r"invalid token",
    ),
    row(
        "syntax.leading_zeros",
        ErrorKind::SyntaxProblem,
        r"leading zeros in decimal integer literals are not permitted; use an 0o prefix for octal integers",
    ),
    // -- OutOfMemory --
    row("memory.empty", ErrorKind::OutOfMemory, r""),
    // -- Overflow --
    row(
        "overflow.c_int",
        ErrorKind::Overflow,
        r"Python int too large to convert to C (?P<ctype>long|ssize_t|int)",
    ),
    row(
        "overflow.float",
        ErrorKind::Overflow,
        r"int too large to convert to float",
    ),
    row("overflow.math_range", ErrorKind::Overflow, r"math range error"),
    row(
        "overflow.errno",
        ErrorKind::Overflow,
        r"\(34, 'Numerical result out of range'\)",
    ),
    row(
        "overflow.index_sized",
        ErrorKind::Overflow,
        r"cannot fit '(?P<type>\w+)' into an index-sized integer",
    ),
    // -- FileNotFound --
    row(
        "path.not_found",
        ErrorKind::FileNotFound,
        r"\[Errno 2\] No such file or directory: '(?P<path>.*)'",
    ),
    row(
        "path.not_found_windows",
        ErrorKind::FileNotFound,
        r"\[WinError 2\] The system cannot find the file specified: '(?P<path>.*)'",
    ),
    // -- IsADirectory --
    row(
        "path.is_directory",
        ErrorKind::IsADirectory,
        r"\[Errno 21\] Is a directory: '(?P<path>.*)'",
    ),
    // -- NotADirectory --
    row(
        "path.not_directory",
        ErrorKind::NotADirectory,
        r"\[Errno 20\] Not a directory: '(?P<path>.*)'",
    ),
    row(
        "path.not_directory_windows",
        ErrorKind::NotADirectory,
        r"\[WinError 267\] The directory name is invalid: '(?P<path>.*)'",
    ),
];
