//! Built-in tables.

/// Top-level modules shipped with the standard distribution.
pub(crate) const STANDARD_MODULES: &[&str] = &[
    "__future__",
    "abc",
    "argparse",
    "array",
    "ast",
    "asyncio",
    "atexit",
    "base64",
    "bdb",
    "binascii",
    "bisect",
    "builtins",
    "bz2",
    "calendar",
    "cmath",
    "cmd",
    "code",
    "codecs",
    "collections",
    "colorsys",
    "compileall",
    "concurrent",
    "configparser",
    "contextlib",
    "contextvars",
    "copy",
    "copyreg",
    "cProfile",
    "csv",
    "ctypes",
    "curses",
    "dataclasses",
    "datetime",
    "dbm",
    "decimal",
    "difflib",
    "dis",
    "doctest",
    "email",
    "encodings",
    "enum",
    "errno",
    "faulthandler",
    "fcntl",
    "filecmp",
    "fileinput",
    "fnmatch",
    "fractions",
    "ftplib",
    "functools",
    "gc",
    "getopt",
    "getpass",
    "gettext",
    "glob",
    "graphlib",
    "grp",
    "gzip",
    "hashlib",
    "heapq",
    "hmac",
    "html",
    "http",
    "imaplib",
    "importlib",
    "inspect",
    "io",
    "ipaddress",
    "itertools",
    "json",
    "keyword",
    "linecache",
    "locale",
    "logging",
    "lzma",
    "mailbox",
    "marshal",
    "math",
    "mimetypes",
    "mmap",
    "multiprocessing",
    "netrc",
    "numbers",
    "operator",
    "optparse",
    "os",
    "pathlib",
    "pdb",
    "pickle",
    "pkgutil",
    "platform",
    "plistlib",
    "poplib",
    "posix",
    "pprint",
    "profile",
    "pstats",
    "pty",
    "pwd",
    "py_compile",
    "queue",
    "quopri",
    "random",
    "re",
    "readline",
    "reprlib",
    "resource",
    "rlcompleter",
    "runpy",
    "sched",
    "secrets",
    "select",
    "selectors",
    "shelve",
    "shlex",
    "shutil",
    "signal",
    "site",
    "smtplib",
    "socket",
    "socketserver",
    "sqlite3",
    "ssl",
    "stat",
    "statistics",
    "string",
    "stringprep",
    "struct",
    "subprocess",
    "symtable",
    "sys",
    "sysconfig",
    "syslog",
    "tabnanny",
    "tarfile",
    "tempfile",
    "termios",
    "textwrap",
    "threading",
    "time",
    "timeit",
    "tkinter",
    "token",
    "tokenize",
    "tomllib",
    "trace",
    "traceback",
    "tracemalloc",
    "tty",
    "turtle",
    "types",
    "typing",
    "unicodedata",
    "unittest",
    "urllib",
    "uuid",
    "venv",
    "warnings",
    "wave",
    "weakref",
    "webbrowser",
    "wsgiref",
    "xml",
    "xmlrpc",
    "zipapp",
    "zipfile",
    "zipimport",
    "zlib",
    "zoneinfo",
];

/// Hard keywords.
pub(crate) const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Method names that mean the same thing on different containers or in
/// other languages.
pub(crate) const SYNONYM_SETS: &[&[&str]] = &[
    &["append", "add", "push"],
    &["extend", "update"],
    &["remove", "discard", "__delitem__"],
    &["strip", "trim"],
    &["lstrip", "trim_start", "ltrim"],
    &["rstrip", "trim_end", "rtrim"],
    &["lower", "to_lower", "tolower", "downcase"],
    &["upper", "to_upper", "toupper", "upcase"],
    &["startswith", "starts_with", "startsWith"],
    &["endswith", "ends_with", "endsWith"],
    &["items", "entries"],
    &["index", "find", "indexOf"],
];

/// `(removed attribute, replacement, attribute the receiver must have)`.
pub(crate) const REMOVED_ATTRIBUTES: &[(&str, &str, Option<&str>)] = &[
    ("has_key", "key in {type}", Some("__contains__")),
    ("iteritems", "items", Some("items")),
    ("iterkeys", "keys", Some("keys")),
    ("itervalues", "values", Some("values")),
    ("viewitems", "items", Some("items")),
    ("viewkeys", "keys", Some("keys")),
    ("viewvalues", "values", Some("values")),
    ("xreadlines", "for line in file", Some("__iter__")),
    ("next", "next({type})", Some("__next__")),
    ("im_func", "__func__", Some("__func__")),
    ("im_self", "__self__", Some("__self__")),
    ("func_name", "__name__", Some("__name__")),
    ("func_code", "__code__", Some("__code__")),
    ("func_defaults", "__defaults__", Some("__defaults__")),
    ("func_globals", "__globals__", Some("__globals__")),
    ("func_doc", "__doc__", Some("__doc__")),
];

/// Names that are not typos of anything in scope but still have an obvious
/// intended meaning.
pub(crate) const SPECIAL_CASES: &[(&str, &str)] = &[
    ("i", "'1j' (imaginary unit)"),
    ("j", "'1j' (imaginary unit)"),
    ("ls", "'os.listdir(os.getcwd())'"),
    ("pwd", "'os.getcwd()'"),
    ("cd", "'os.chdir(path)'"),
    ("unicode", "'str'"),
    ("basestring", "'str'"),
    ("long", "'int'"),
    ("xrange", "'range'"),
    ("raw_input", "'input'"),
    ("unichr", "'chr'"),
    ("file", "'open'"),
    ("execfile", "'exec(open(path).read())'"),
    ("buffer", "'memoryview'"),
    ("intern", "'sys.intern'"),
    ("reload", "'importlib.reload'"),
    ("apply", "'function(*args, **kwargs)'"),
    ("cmp", "'(a > b) - (a < b)'"),
    ("null", "'None'"),
    ("nil", "'None'"),
    ("this", "'self'"),
];

/// Modules that moved in a later runtime version.
pub(crate) const RENAMED_MODULES: &[(&str, &str)] = &[
    ("Tkinter", "tkinter"),
    ("tkMessageBox", "tkinter.messagebox"),
    ("ConfigParser", "configparser"),
    ("Queue", "queue"),
    ("SocketServer", "socketserver"),
    ("StringIO", "io"),
    ("cStringIO", "io"),
    ("cPickle", "pickle"),
    ("urllib2", "urllib.request"),
    ("urlparse", "urllib.parse"),
    ("HTMLParser", "html.parser"),
    ("httplib", "http.client"),
    ("Cookie", "http.cookies"),
    ("cookielib", "http.cookiejar"),
    ("BaseHTTPServer", "http.server"),
    ("SimpleHTTPServer", "http.server"),
    ("__builtin__", "builtins"),
    ("commands", "subprocess"),
    ("thread", "_thread"),
    ("copy_reg", "copyreg"),
    ("repr", "reprlib"),
    ("anydbm", "dbm"),
    ("xmlrpclib", "xmlrpc.client"),
    ("md5", "hashlib"),
    ("sha", "hashlib"),
];

/// Calls that materialize everything at once, keyed by callee.
pub(crate) const MEMORY_ALTERNATIVES: &[(&str, &str)] = &[
    ("readlines", "'iter(file)'"),
    ("read", "'read(size)' in a loop"),
    ("sorted", "'list.sort()' (in place)"),
    ("list", "'itertools.islice'"),
];

/// Calls whose arguments overflow a machine-sized type, keyed by callee.
pub(crate) const OVERFLOW_ALTERNATIVES: &[(&str, &str)] = &[
    ("range", "'itertools.count()'"),
    ("pow", "'pow(base, exp, mod)'"),
    ("exp", "'decimal.Decimal(x).exp()'"),
    ("float", "'fractions.Fraction'"),
];

pub(crate) const HASHABLE_ALTERNATIVES: &[(&str, &str)] = &[
    ("list", "'tuple'"),
    ("set", "'frozenset'"),
    ("bytearray", "'bytes'"),
    ("dict", "'frozenset(dict.items())'"),
];
