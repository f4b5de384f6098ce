//! Core utilities and types for constgen.
//!
//! This crate provides the fundamental data model (tags, layer slots,
//! generated-type snapshots), identifier helpers and file writing shared
//! across the constgen crates.

mod file;
mod ident;
mod model;
mod target;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Identifier helpers
pub use ident::{
    CSHARP_KEYWORDS, NameError, is_csharp_keyword, is_identifier, join_identifier_parts,
};
// Data model
pub use model::{BUILTIN_TAGS, LAYER_COUNT, LayerEntry, Layers, Snapshot, Value};
pub use target::TargetKind;
