//! C# AST builders.
//!
//! Declarations render to [`CodeFragment`](constgen_codegen::builder::CodeFragment)s
//! and are assembled into files by [`CsFile`](crate::CsFile).

mod class;
mod enums;

pub use class::{Const, StaticClass};
pub use enums::{Enum, EnumMember};
