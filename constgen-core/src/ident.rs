//! Identifier helpers shared by manifest validation and code generation.

use thiserror::Error;

/// C# reserved keywords. Contextual keywords (`var`, `async`, ...) are valid
/// identifiers and are not listed.
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Letters, ASCII digits or `_`. Other numeric characters such as `²`
/// or `٣` are not accepted.
fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

/// Check that `name` is a plain identifier: a letter or underscore followed
/// by letters, digits or underscores. Keywords are not rejected here.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(is_identifier_char)
}

/// Collapse a display name into identifier characters.
///
/// The name is split on every character that is not a letter, an ASCII
/// digit or `_`, and every part after the first gets its first character upper-cased
/// (e.g., "Ignore Raycast" -> "IgnoreRaycast", "enemy-spawn" -> "enemySpawn").
/// The result may still start with a digit or be empty.
pub fn join_identifier_parts(name: &str) -> String {
    name.split(|c: char| !is_identifier_char(c))
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                return part.to_string();
            }
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// A tag or layer name that cannot become a member identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("'{name}' has no characters usable in an identifier")]
    Empty { name: String },

    #[error("'{first}' and '{second}' both map to the identifier '{ident}'")]
    Duplicate {
        first: String,
        second: String,
        ident: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_identifier_parts() {
        assert_eq!(join_identifier_parts("Player"), "Player");
        assert_eq!(join_identifier_parts("Ignore Raycast"), "IgnoreRaycast");
        assert_eq!(join_identifier_parts("enemy-spawn point"), "enemySpawnPoint");
        assert_eq!(join_identifier_parts("under_score"), "under_score");
        assert_eq!(join_identifier_parts("  padded  "), "padded");
        assert_eq!(join_identifier_parts("2D Overlay"), "2DOverlay");
        assert_eq!(join_identifier_parts("Level²"), "Level");
        assert_eq!(join_identifier_parts("½ Speed"), "Speed");
        assert_eq!(join_identifier_parts("Floor٣Top"), "FloorTop");
        assert_eq!(join_identifier_parts("***"), "");
        assert_eq!(join_identifier_parts(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Layer"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("Über"));
        assert!(!is_identifier("2D"));
        assert!(!is_identifier("Area²"));
        assert!(!is_identifier("٣D"));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_csharp_keywords() {
        assert!(is_csharp_keyword("class"));
        assert!(is_csharp_keyword("string"));
        assert!(!is_csharp_keyword("var"));
        assert!(!is_csharp_keyword("Player"));
    }
}
