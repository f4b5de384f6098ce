//! Core operations.
//!
//! This module contains the business logic for constgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{generate, sync};

use std::path::Path;

use constgen_codegen::GenerateError;

/// `path` relative to `root` when it lies below it.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Render a generation error with its diagnostic code and help.
fn render_error(err: GenerateError) -> String {
    format!("{:?}", miette::Report::new(err))
}
