//! C# string literals.

/// Quote `value` as a regular C# string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Parse a literal produced by [`string_literal`]. Anything else, including
/// verbatim or interpolated strings, is rejected.
pub fn parse_string_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                '0' => out.push('\0'),
                'u' => {
                    let hex: String = chars.by_ref().take(4).collect();
                    if hex.len() != 4 {
                        return None;
                    }
                    let code = u32::from_str_radix(&hex, 16).ok()?;
                    out.push(char::from_u32(code)?);
                }
                _ => return None,
            },
            '"' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(string_literal("Player"), "\"Player\"");
        assert_eq!(parse_string_literal("\"Player\"").as_deref(), Some("Player"));
    }

    #[test]
    fn test_escapes_survive_reading_back() {
        let tag = "Say \"hi\"\\\tnow\u{1}";
        let literal = string_literal(tag);
        assert_eq!(literal, "\"Say \\\"hi\\\"\\\\\\tnow\\u0001\"");
        assert_eq!(parse_string_literal(&literal).as_deref(), Some(tag));
    }

    #[test]
    fn test_rejects_foreign_literals() {
        assert_eq!(parse_string_literal("@\"Player\""), None);
        assert_eq!(parse_string_literal("\"open"), None);
        assert_eq!(parse_string_literal("\"a\"b\""), None);
        assert_eq!(parse_string_literal("\"bad \\q\""), None);
    }
}
