//! Deciding whether a target may be generated and whether it must be.

use std::path::Path;

use constgen_core::{Snapshot, is_csharp_keyword, is_identifier};
use constgen_manifest::TargetConfig;

use crate::inspect::{Inspection, has_extension};

/// Whether the members in `current` differ from the prior type.
///
/// A missing prior type only calls for generation when there is something
/// to generate. Otherwise the comparison ignores member order.
pub fn needs_regeneration(current: &Snapshot, existing: &Inspection) -> bool {
    match existing.snapshot() {
        None => !current.is_empty(),
        Some(previous) => !current.same_members(previous),
    }
}

/// Check that `target` names a type and a writable-looking file with the
/// given extension. The error is a human-readable reason.
pub fn readiness(target: &TargetConfig, extension: &str) -> Result<(), String> {
    let type_name = target.type_name.trim();
    if type_name.is_empty() {
        return Err("type name is empty".to_string());
    }
    if !is_identifier(type_name) {
        return Err(format!("'{}' is not a valid type name", type_name));
    }
    if is_csharp_keyword(type_name) {
        return Err(format!("'{}' is a reserved keyword", type_name));
    }

    let file_path = target.file_path.trim();
    if file_path.is_empty() {
        return Err("file path is empty".to_string());
    }
    if file_path.ends_with('/') || file_path.ends_with('\\') {
        return Err(format!("'{}' is a directory, not a file", file_path));
    }
    let path = Path::new(file_path);
    if path.file_stem().is_none() {
        return Err(format!("'{}' has no file name", file_path));
    }
    if !has_extension(path, extension) {
        return Err(format!("'{}' must end in .{}", file_path, extension));
    }

    Ok(())
}

/// Whether `target` is configured well enough to be generated. This gates
/// permission, not need.
pub fn can_generate(target: &TargetConfig, extension: &str) -> bool {
    readiness(target, extension).is_ok()
}
