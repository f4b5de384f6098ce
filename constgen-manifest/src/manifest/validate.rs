//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use constgen_core::{is_csharp_keyword, is_identifier};
use miette::SourceSpan;

use super::{ProjectConfig, TargetConfig};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content and the table currently being validated
/// (`tags` or `layers`), so errors can point at the right line.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Table path segments (e.g., ["tags"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages, e.g. "type name in [tags]".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in [{}]", kind, self.path_string())
        }
    }

    /// Find the span of `key = "value"` inside the current table.
    pub fn find_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), &self.path_string(), key, value)
    }

    /// An empty type name is allowed: the target is then simply not configured.
    pub fn validate_type_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        self.validate_identifier(name, name, "type_name", "type name")
    }

    /// A namespace is a dot-separated list of identifiers.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        for segment in namespace.split('.') {
            self.validate_identifier(segment, namespace, "namespace", "namespace")?;
        }
        Ok(())
    }

    fn validate_identifier(&self, name: &str, value: &str, key: &str, kind: &str) -> Result<()> {
        let span = self.find_span(key, value);

        if is_csharp_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if !is_identifier(name) {
            return Err(self
                .source
                .invalid_identifier_error(name, self.context_for(kind), span));
        }

        Ok(())
    }

    pub fn validate_project(&self, project: &ProjectConfig) -> Result<()> {
        let ctx = self.push("project");

        if project.tag_manager.trim().is_empty() {
            return Err(self.source.validation_error(
                "tag_manager cannot be empty",
                ctx.find_span("tag_manager", ""),
            ));
        }

        if project.source_roots.is_empty() {
            return Err(self.source.validation_error(
                "source_roots must list at least one directory",
                None,
            ));
        }

        Ok(())
    }

    /// Both targets cannot produce the same type in the same namespace. The
    /// layer target also claims its `Masks` companion.
    pub fn validate_distinct_types(&self, tags: &TargetConfig, layers: &TargetConfig) -> Result<()> {
        if tags.type_name.is_empty()
            || layers.type_name.is_empty()
            || tags.namespace() != layers.namespace()
        {
            return Ok(());
        }

        let masks = format!("{}Masks", layers.type_name);
        if tags.type_name != layers.type_name && tags.type_name != masks {
            return Ok(());
        }

        Err(self.source.duplicate_type_error(
            &tags.type_name,
            self.push("tags").find_span("type_name", &tags.type_name),
            self.push("layers")
                .find_span("type_name", &layers.type_name),
        ))
    }
}

/// Find the span of the quoted value in `key = "value"`, searching from the
/// `[table]` header when one is given.
pub(crate) fn find_value_span(
    src: &str,
    table: &str,
    key: &str,
    value: &str,
) -> Option<SourceSpan> {
    let (start, section) = if table.is_empty() {
        (0, src)
    } else {
        let start = src.find(&format!("[{}]", table))?;
        let section = &src[start..];
        match section[1..].find("\n[") {
            Some(end) => (start, &section[..end + 1]),
            None => (start, section),
        }
    };

    for quote in ['"', '\''] {
        for sep in [" = ", "="] {
            let pattern = format!("{}{}{}{}{}", key, sep, quote, value, quote);
            if let Some(pos) = section.find(&pattern) {
                // Skip `key = "` to land on the value itself
                let offset = start + pos + key.len() + sep.len() + 1;
                return Some(SourceSpan::from((offset, value.len())));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "[tags]\ntype_name = \"Tag\"\n\n[layers]\ntype_name = \"Tag\"\n";

    #[test]
    fn test_find_value_span_in_table() {
        let tags = find_value_span(SRC, "tags", "type_name", "Tag").unwrap();
        assert_eq!(&SRC[tags.offset()..tags.offset() + tags.len()], "Tag");

        let layers = find_value_span(SRC, "layers", "type_name", "Tag").unwrap();
        assert!(layers.offset() > tags.offset());
        assert_eq!(&SRC[layers.offset()..layers.offset() + layers.len()], "Tag");
    }

    #[test]
    fn test_find_value_span_missing_table() {
        assert!(find_value_span(SRC, "project", "type_name", "Tag").is_none());
    }

    #[test]
    fn test_find_value_span_single_quotes() {
        let src = "[tags]\nnamespace='Game'\n";
        let span = find_value_span(src, "tags", "namespace", "Game").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Game");
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "constgen.toml");
        assert_eq!(ctx.context_for("type name"), "type name");
        assert_eq!(ctx.push("tags").context_for("type name"), "type name in [tags]");
    }

    #[test]
    fn test_validate_namespace_segments() {
        let ctx = ParseContext::new("", "constgen.toml").push("tags");
        assert!(ctx.validate_namespace("Studio.Game").is_ok());
        assert!(ctx.validate_namespace("Studio.2D").is_err());
        assert!(ctx.validate_namespace("Studio.namespace").is_err());
    }

    #[test]
    fn test_validate_distinct_types_masks_companion() {
        let ctx = ParseContext::new("", "constgen.toml");
        let mut tags = TargetConfig::default_tags();
        tags.type_name = "LayerMasks".to_string();
        let layers = TargetConfig::default_layers();
        assert!(ctx.validate_distinct_types(&tags, &layers).is_err());
    }
}
