//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indent level, matching Unity's default editor settings.
const INDENT: &str = "    ";

/// Builds code line by line, indenting nested blocks by four spaces.
///
/// # Example
///
/// ```
/// use constgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder
///     .push_line("enum Layer")
///     .push_line("{")
///     .push_indent()
///     .push_line("Default = 0,")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "enum Layer\n{\n    Default = 0,\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn csharp() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `/// <summary>` doc comment.
    pub fn push_summary(&mut self, text: &str) -> &mut Self {
        self.push_line("/// <summary>");
        for line in text.lines() {
            self.push_line(&format!("/// {}", line));
        }
        self.push_line("/// </summary>")
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Summary(text) => {
                self.push_summary(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
