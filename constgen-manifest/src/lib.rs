//! `constgen.toml` parsing and validation.
//!
//! The manifest holds one [`TargetConfig`] for tags and one for layers plus
//! project-level settings (where the tag manager asset lives, which
//! directories hold scripts).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ConstgenToml, DEFAULT_FILENAME, Manifest, ParseContext, ProjectConfig, TargetConfig,
    default_manifest,
};
