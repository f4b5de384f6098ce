//! Turning Unity tag and layer names into C# member identifiers.

use std::collections::HashMap;

use constgen_codegen::Member;
use constgen_core::{Layers, NameError, Value, is_csharp_keyword, join_identifier_parts};

/// Identifier for a tag or layer name, or `None` when the name has no
/// identifier characters at all.
///
/// Separators are dropped with the following part capitalized. An identifier
/// that does not start with a letter or `_` gets a `_` prefix, and keywords
/// are escaped with `@`.
pub fn member_ident(name: &str) -> Option<String> {
    let ident = join_identifier_parts(name);
    if ident.is_empty() {
        return None;
    }
    if !ident.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        return Some(format!("_{}", ident));
    }
    if is_csharp_keyword(&ident) {
        return Some(format!("@{}", ident));
    }
    Some(ident)
}

/// Members of the tags class, in tag order.
///
/// A member may not share the name of its class, so such an identifier
/// gets a trailing `_`.
pub fn tag_members(class_name: &str, tags: &[String]) -> Result<Vec<Member>, NameError> {
    let mut members = Members::default();
    for tag in tags {
        let ident = ident_or_error(tag)?;
        let ident = if ident == class_name {
            format!("{}_", ident)
        } else {
            ident
        };
        members.push(tag, ident, Value::from(tag.as_str()))?;
    }
    Ok(members.into_inner())
}

/// Members of the layer enum: one per named slot, valued by slot index.
pub fn layer_members(layers: &Layers) -> Result<Vec<Member>, NameError> {
    let mut members = Members::default();
    for layer in layers.named() {
        let ident = ident_or_error(&layer.name)?;
        members.push(&layer.name, ident, Value::Int(i64::from(layer.index)))?;
    }
    Ok(members.into_inner())
}

fn ident_or_error(name: &str) -> Result<String, NameError> {
    member_ident(name).ok_or_else(|| NameError::Empty {
        name: name.to_string(),
    })
}

/// Member list rejecting identifier collisions.
#[derive(Default)]
struct Members {
    members: Vec<Member>,
    sources: HashMap<String, String>,
}

impl Members {
    fn push(&mut self, source: &str, ident: String, value: Value) -> Result<(), NameError> {
        if let Some(first) = self.sources.get(&ident) {
            return Err(NameError::Duplicate {
                first: first.clone(),
                second: source.to_string(),
                ident,
            });
        }
        self.sources.insert(ident.clone(), source.to_string());
        self.members.push(Member::new(source, ident, value));
        Ok(())
    }

    fn into_inner(self) -> Vec<Member> {
        self.members
    }
}
