//! Reserved word and cast type tables.
//!
//! Lookups are case-insensitive, as PHP keywords are.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words PHP reserves as keywords.
///
/// Soft keywords such as `enum` are not listed: they stay valid names and are classified
/// from context.
const RESERVED: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "die", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "eval",
    "exit", "extends", "final", "finally", "fn", "for", "foreach", "function", "global", "goto",
    "if", "implements", "include", "include_once", "instanceof", "insteadof", "interface",
    "isset", "list", "match", "namespace", "new", "or", "print", "private", "protected",
    "public", "readonly", "require", "require_once", "return", "static", "switch", "throw",
    "trait", "try", "unset", "use", "var", "while", "xor", "yield",
];

/// Every spelling PHP has ever accepted inside a cast, deprecated ones included.
const CAST_TYPES: &[&str] = &[
    "int", "integer", "bool", "boolean", "float", "double", "real", "string", "binary", "array",
    "object", "unset",
];

static RESERVED_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| RESERVED.iter().copied().collect());

static CAST_TYPE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CAST_TYPES.iter().copied().collect());

pub fn is_reserved(word: &str) -> bool {
    RESERVED_SET.contains(word.to_ascii_lowercase().as_str())
}

pub fn is_cast_type(word: &str) -> bool {
    CAST_TYPE_SET.contains(word.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_is_case_insensitive() {
        assert!(is_reserved("echo"));
        assert!(is_reserved("ECHO"));
        assert!(is_reserved("Function"));
        assert!(!is_reserved("strlen"));
        assert!(!is_reserved("true"));
        assert!(!is_reserved("enum"));
    }

    #[test]
    fn test_cast_types() {
        for word in ["int", "INTEGER", "Boolean", "real", "unset", "binary"] {
            assert!(is_cast_type(word), "{word} should be a cast type");
        }
        assert!(!is_cast_type("resource"));
        assert!(!is_cast_type("mixed"));
    }
}
