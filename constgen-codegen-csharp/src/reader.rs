//! Reading back previously generated files.
//!
//! Only the exact shape [`TagsCs`](crate::files::TagsCs) and
//! [`LayersCs`](crate::files::LayersCs) emit is recognized. A hand-written
//! type of the same name is not ours, so it reads as absent.

use constgen_core::{Snapshot, Value, is_identifier};

use crate::{files::MASKS_SUFFIX, literal::parse_string_literal};

/// Constants of the generated tags class `type_name`.
pub fn read_tags(source: &str, type_name: &str) -> Option<Snapshot> {
    let body = declaration_body(source, &format!("public static class {}", type_name))?;
    body.into_iter()
        .map(|line| {
            let (ident, literal) = line
                .strip_prefix("public const string ")?
                .strip_suffix(';')?
                .split_once(" = ")?;
            Some((member_name(ident)?, Value::Str(parse_string_literal(literal)?)))
        })
        .collect()
}

/// Members of the generated layer index enum `type_name`. The mask
/// companion is not part of the result.
pub fn read_layers(source: &str, type_name: &str) -> Option<Snapshot> {
    read_enum(source, type_name, |value| value.parse().ok())
}

/// Members of the mask companion of the layer enum `type_name`, evaluated
/// to their numeric values.
pub fn read_layer_masks(source: &str, type_name: &str) -> Option<Snapshot> {
    let name = format!("{}{}", type_name, MASKS_SUFFIX);
    read_enum(source, &name, |value| {
        let shift: u32 = value.strip_prefix("1 << ")?.parse().ok()?;
        let mask = 1u32.checked_shl(shift)?;
        Some(i64::from(mask))
    })
}

fn read_enum(
    source: &str,
    name: &str,
    evaluate: impl Fn(&str) -> Option<i64>,
) -> Option<Snapshot> {
    let body = declaration_body(source, &format!("public enum {}", name))?;
    body.into_iter()
        .map(|line| {
            let (ident, value) = line.strip_suffix(',')?.split_once(" = ")?;
            Some((member_name(ident)?, Value::Int(evaluate(value)?)))
        })
        .collect()
}

/// Trimmed lines between the braces following `header`.
fn declaration_body<'s>(source: &'s str, header: &str) -> Option<Vec<&'s str>> {
    let mut lines = source.lines().map(str::trim);
    lines.find(|line| *line == header)?;
    if lines.next()? != "{" {
        return None;
    }

    let mut body = Vec::new();
    for line in lines {
        if line == "}" {
            return Some(body);
        }
        body.push(line);
    }
    None
}

fn member_name(ident: &str) -> Option<&str> {
    is_identifier(ident.strip_prefix('@').unwrap_or(ident)).then_some(ident)
}
