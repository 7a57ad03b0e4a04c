//! Reserved keyword tables for the languages schema code is generated into.
//!
//! Each table lists the words a language's lexical grammar reserves, plus the
//! contextual and soft keywords its reference calls out. Matching against these
//! tables is byte-exact: no case folding, no normalization.
//!
//! Adding a language means adding a table and one entry to [`LANGUAGES`].

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

// https://en.cppreference.com/w/c/keyword
#[rustfmt::skip]
pub const KEYWORDS_C: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if", "inline",
    "int", "long", "register", "restrict", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while",
    // C23
    "alignas", "alignof", "bool", "constexpr", "false", "nullptr",
    "static_assert", "thread_local", "true", "typeof", "typeof_unqual",
    // Reserved identifiers with keyword status
    "_Alignas", "_Alignof", "_Atomic", "_BitInt", "_Bool", "_Complex",
    "_Decimal128", "_Decimal32", "_Decimal64", "_Generic", "_Imaginary",
    "_Noreturn", "_Static_assert", "_Thread_local",
];

// https://learn.microsoft.com/en-us/dotnet/csharp/language-reference/keywords/
#[rustfmt::skip]
pub const KEYWORDS_CSHARP: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char",
    "checked", "class", "const", "continue", "decimal", "default", "delegate",
    "do", "double", "else", "enum", "event", "explicit", "extern", "false",
    "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit",
    "in", "int", "interface", "internal", "is", "lock", "long", "namespace",
    "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte",
    "sealed", "short", "sizeof", "stackalloc", "static", "string", "struct",
    "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile",
    "while",
    // Contextual keywords
    "add", "allows", "alias", "and", "ascending", "args", "async", "await",
    "by", "descending", "dynamic", "equals", "extension", "field", "file",
    "from", "get", "global", "group", "init", "into", "join", "let",
    "managed", "nameof", "nint", "not", "notnull", "nuint", "on", "or",
    "orderby", "partial", "record", "remove", "required", "scoped", "select",
    "set", "unmanaged", "value", "var", "when", "where", "with", "yield",
];

// https://en.cppreference.com/w/cpp/keyword
#[rustfmt::skip]
pub const KEYWORDS_CPP: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor",
    "bool", "break", "case", "catch", "char", "char8_t", "char16_t",
    "char32_t", "class", "compl", "concept", "const", "consteval",
    "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false",
    "float", "for", "friend", "goto", "if", "inline", "int", "long",
    "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr",
    "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof",
    "static", "static_assert", "static_cast", "struct", "switch", "template",
    "this", "thread_local", "throw", "true", "try", "typedef", "typeid",
    "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
    // C++26
    "contract_assert",
    // Identifiers with special meaning
    "final", "import", "module", "override", "post", "pre",
];

// https://dart.dev/language/keywords
#[rustfmt::skip]
pub const KEYWORDS_DART: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "base", "break", "case",
    "catch", "class", "const", "continue", "covariant", "default", "deferred",
    "do", "dynamic", "else", "enum", "export", "extends", "extension",
    "external", "factory", "false", "final", "finally", "for", "Function",
    "get", "hide", "if", "implements", "import", "in", "interface", "is",
    "late", "library", "mixin", "new", "null", "of", "on", "operator", "part",
    "required", "rethrow", "return", "sealed", "set", "show", "static",
    "super", "switch", "sync", "this", "throw", "true", "try", "type",
    "typedef", "var", "void", "when", "while", "with", "yield",
];

// https://go.dev/ref/spec#Keywords
#[rustfmt::skip]
pub const KEYWORDS_GO: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

// https://docs.oracle.com/javase/specs/jls/se21/html/jls-3.html#jls-3.9
#[rustfmt::skip]
pub const KEYWORDS_JAVA: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
    // Contextual keywords
    "exports", "module", "non-sealed", "open", "opens", "permits", "provides",
    "record", "requires", "sealed", "to", "transitive", "uses", "var", "when",
    "with", "yield",
];

// https://tc39.es/ecma262/#sec-keywords-and-reserved-words
#[rustfmt::skip]
pub const KEYWORDS_JAVASCRIPT: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "export",
    "extends", "false", "finally", "for", "function", "if", "import", "in",
    "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
    // Strict mode
    "arguments", "eval", "implements", "interface", "let", "package",
    "private", "protected", "public", "static",
    // Contextual
    "as", "async", "from", "get", "of", "set",
    // Reserved in older editions
    "abstract", "boolean", "byte", "char", "double", "final", "float", "goto",
    "int", "long", "native", "short", "synchronized", "throws", "transient",
    "volatile",
];

// https://kotlinlang.org/docs/keyword-reference.html
#[rustfmt::skip]
pub const KEYWORDS_KOTLIN: &[&str] = &[
    // Hard keywords
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun",
    "if", "in", "interface", "is", "null", "object", "package", "return",
    "super", "this", "throw", "true", "try", "typealias", "typeof", "val",
    "var", "when", "while",
    // Soft keywords
    "by", "catch", "constructor", "delegate", "dynamic", "field", "file",
    "finally", "get", "import", "init", "param", "property", "receiver",
    "set", "setparam", "value", "where",
    // Modifier keywords
    "abstract", "actual", "annotation", "companion", "const", "crossinline",
    "data", "enum", "expect", "external", "final", "infix", "inline",
    "inner", "internal", "lateinit", "noinline", "open", "operator", "out",
    "override", "private", "protected", "public", "reified", "sealed",
    "suspend", "tailrec", "vararg",
    // Special identifiers
    "it",
];

// https://www.php.net/manual/en/reserved.php
#[rustfmt::skip]
pub const KEYWORDS_PHP: &[&str] = &[
    "__halt_compiler", "abstract", "and", "array", "as", "break", "callable",
    "case", "catch", "class", "clone", "const", "continue", "declare",
    "default", "die", "do", "echo", "else", "elseif", "empty", "enddeclare",
    "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "final", "finally", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "include_once",
    "instanceof", "insteadof", "interface", "isset", "list", "match",
    "namespace", "new", "or", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "return", "static", "switch",
    "throw", "trait", "try", "unset", "use", "var", "while", "xor", "yield",
    // Compile-time constants
    "__CLASS__", "__DIR__", "__FILE__", "__FUNCTION__", "__LINE__",
    "__METHOD__", "__NAMESPACE__", "__PROPERTY__", "__TRAIT__",
    // Reserved class names
    "bool", "false", "float", "int", "iterable", "mixed", "never", "null",
    "numeric", "object", "parent", "resource", "self", "string", "true",
    "void",
];

// https://docs.python.org/3/reference/lexical_analysis.html#keywords
#[rustfmt::skip]
pub const KEYWORDS_PYTHON: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
    // Soft keywords
    "_", "case", "match", "type",
];

// https://docs.ruby-lang.org/en/master/syntax/keywords_rdoc.html
#[rustfmt::skip]
pub const KEYWORDS_RUBY: &[&str] = &[
    "__ENCODING__", "__LINE__", "__FILE__", "BEGIN", "END", "alias", "and",
    "begin", "break", "case", "class", "def", "defined?", "do", "else",
    "elsif", "end", "ensure", "false", "for", "if", "in", "module", "next",
    "nil", "not", "or", "redo", "rescue", "retry", "return", "self", "super",
    "then", "true", "undef", "unless", "until", "when", "while", "yield",
];

// https://doc.rust-lang.org/reference/keywords.html
#[rustfmt::skip]
pub const KEYWORDS_RUST: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
    // Weak keywords
    "macro_rules", "raw", "safe", "union",
];

// https://docs.swift.org/swift-book/documentation/the-swift-programming-language/lexicalstructure/#Keywords-and-Punctuation
#[rustfmt::skip]
pub const KEYWORDS_SWIFT: &[&str] = &[
    // Declarations
    "associatedtype", "borrowing", "class", "consuming", "deinit", "enum",
    "extension", "fileprivate", "func", "import", "init", "inout",
    "internal", "let", "nonisolated", "open", "operator", "private",
    "precedencegroup", "protocol", "public", "rethrows", "static", "struct",
    "subscript", "typealias", "var",
    // Statements
    "break", "case", "catch", "continue", "default", "defer", "do", "else",
    "fallthrough", "for", "guard", "if", "in", "repeat", "return", "switch",
    "throw", "where", "while",
    // Expressions and types
    "Any", "as", "await", "false", "is", "nil", "self", "Self", "super",
    "throws", "true", "try",
    // Patterns
    "_",
    // Contextual keywords
    "associativity", "async", "convenience", "didSet", "dynamic", "final",
    "get", "indirect", "infix", "lazy", "left", "mutating", "none",
    "nonmutating", "optional", "override", "package", "postfix",
    "precedence", "prefix", "Protocol", "required", "right", "set", "some",
    "Type", "unowned", "weak", "willSet",
];

// https://github.com/microsoft/TypeScript/blob/main/src/compiler/scanner.ts
#[rustfmt::skip]
pub const KEYWORDS_TYPESCRIPT: &[&str] = &[
    // Reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "import", "in", "instanceof", "new",
    "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode reserved words
    "implements", "interface", "let", "package", "private", "protected",
    "public", "static", "yield",
    // Contextual keywords
    "abstract", "accessor", "any", "as", "assert", "asserts", "async",
    "await", "bigint", "boolean", "constructor", "declare", "from", "get",
    "global", "infer", "intrinsic", "is", "keyof", "module", "namespace",
    "never", "number", "object", "of", "out", "override", "readonly",
    "require", "satisfies", "set", "string", "symbol", "type", "undefined",
    "unique", "unknown", "using",
];

/// Every registered language as `(display name, keyword table)`, in registry
/// order. Lookup keys are the lower-cased display names and must be unique.
pub const LANGUAGES: &[(&str, &[&str])] = &[
    ("C",          KEYWORDS_C),
    ("C#",         KEYWORDS_CSHARP),
    ("C++",        KEYWORDS_CPP),
    ("Dart",       KEYWORDS_DART),
    ("Go",         KEYWORDS_GO),
    ("Java",       KEYWORDS_JAVA),
    ("JavaScript", KEYWORDS_JAVASCRIPT),
    ("Kotlin",     KEYWORDS_KOTLIN),
    ("PHP",        KEYWORDS_PHP),
    ("Python",     KEYWORDS_PYTHON),
    ("Ruby",       KEYWORDS_RUBY),
    ("Rust",       KEYWORDS_RUST),
    ("Swift",      KEYWORDS_SWIFT),
    ("TypeScript", KEYWORDS_TYPESCRIPT),
];

lazy_static! {
    static ref REGISTRY: Registry = Registry::new(LANGUAGES);
}

/// The process-wide keyword registry. Built on first use, never mutated.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// One language's reserved words.
#[derive(Debug, Clone)]
pub struct Language {
    name:     &'static str,
    key:      String,
    keywords: HashSet<&'static str>,
}

impl Language {
    pub fn new(name: &'static str, keywords: &'static [&'static str]) -> Self {
        Language {
            name,
            key: name.to_lowercase(),
            keywords: keywords.iter().copied().collect(),
        }
    }

    /// Display name used in messages, e.g. `C++`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lower-cased name matched against `enabled_languages` entries.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn keywords(&self) -> &HashSet<&'static str> {
        &self.keywords
    }

    pub fn is_reserved(&self, identifier: &str) -> bool {
        self.keywords.contains(identifier)
    }
}

#[derive(Debug)]
pub struct Registry {
    languages: Vec<Language>,
    by_key:    HashMap<String, usize>,
}

impl Registry {
    /// Builds a registry from `(display name, keywords)` entries, keeping
    /// their order. A later entry with a duplicate key replaces the lookup of
    /// an earlier one, so callers should keep keys unique.
    pub fn new(entries: &[(&'static str, &'static [&'static str])]) -> Self {
        let languages: Vec<Language> = entries
            .iter()
            .map(|&(name, keywords)| Language::new(name, keywords))
            .collect();
        let by_key = languages
            .iter()
            .enumerate()
            .map(|(index, language)| (language.key.clone(), index))
            .collect();
        Registry { languages, by_key }
    }

    pub fn get(&self, key: &str) -> Option<&Language> {
        self.by_key.get(key).map(|&index| &self.languages[index])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// All languages, in registry order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(Language::key)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
