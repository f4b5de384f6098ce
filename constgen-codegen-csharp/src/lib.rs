//! C# code generator for constgen.
//!
//! Tags become `public const string` fields of a static class. Layers become
//! an index enum plus a `[System.Flags]` companion holding `1 << index`
//! masks. Previously generated files are recognized through [`reader`].

mod cs_file;
mod generator;
mod literal;
mod naming;

pub mod ast;
pub mod files;
pub mod reader;

pub use constgen_codegen::LanguageCodegen;
pub use cs_file::CsFile;
pub use generator::Generator;
pub use literal::{parse_string_literal, string_literal};
pub use naming::{layer_members, member_ident, tag_members};
