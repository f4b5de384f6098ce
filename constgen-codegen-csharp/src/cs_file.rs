//! CsFile abstraction for structured C# file generation.
//!
//! Collects top-level declarations and wraps them in an optional
//! namespace block.

use constgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A structured representation of a C# source file.
///
/// # Example
///
/// ```
/// use constgen_codegen_csharp::{CsFile, ast::{Enum, EnumMember}};
///
/// let source = CsFile::new()
///     .namespace(Some("Game"))
///     .add(Enum::new("Layer").member(EnumMember::new("Default", "0")))
///     .render();
///
/// assert_eq!(
///     source,
///     "namespace Game\n{\n    public enum Layer\n    {\n        Default = 0,\n    }\n}\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CsFile {
    namespace: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CsFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap declarations in `namespace`. `None` or an empty name leaves them
    /// in the global namespace.
    pub fn namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .map(String::from);
        self
    }

    /// Add a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render with C# indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::csharp();

        let mut declarations = Vec::new();
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                declarations.push(CodeFragment::Blank);
            }
            declarations.extend(fragments.iter().cloned());
        }

        match &self.namespace {
            Some(namespace) => {
                builder.emit(&CodeFragment::braced(
                    format!("namespace {}", namespace),
                    declarations,
                ));
            }
            None => {
                builder.emit(&declarations[..]);
            }
        }

        builder.build()
    }

    /// Render with a header comment separated by a blank line.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Enum, StaticClass};

    #[test]
    fn test_empty_file() {
        let file = CsFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_blank_namespace_is_global() {
        let source = CsFile::new()
            .namespace(Some("  "))
            .add(StaticClass::new("Tag"))
            .render();
        assert_eq!(source, "public static class Tag\n{\n}\n");
    }

    #[test]
    fn test_declarations_are_separated() {
        let source = CsFile::new()
            .add(Enum::new("Layer"))
            .add(Enum::new("LayerMasks"))
            .render();
        assert_eq!(
            source,
            "public enum Layer\n{\n}\n\npublic enum LayerMasks\n{\n}\n"
        );
    }

    #[test]
    fn test_header() {
        let source = CsFile::new().add(Enum::new("Layer")).render_with_header("// generated");
        assert_eq!(source, "// generated\n\npublic enum Layer\n{\n}\n");
    }
}
