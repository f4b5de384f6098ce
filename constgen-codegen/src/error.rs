use std::path::PathBuf;

use constgen_core::{NameError, TargetKind};
use miette::Diagnostic;
use thiserror::Error;

use crate::source::SourceError;

/// Why a target could not be generated.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("{target} target is not configured: {reason}")]
    #[diagnostic(
        code(constgen::not_configured),
        help("set `type_name` and `file_path` in the [{target}] table of constgen.toml")
    )]
    NotConfigured { target: TargetKind, reason: String },

    #[error("type '{type_name}' is defined in several assemblies: {}", .assemblies.join(", "))]
    #[diagnostic(
        code(constgen::ambiguous_type),
        help("set `assembly` to the one that holds the generated type")
    )]
    AmbiguousType {
        type_name: String,
        assemblies: Vec<String>,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(constgen::write_error))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tag and layer names are unavailable")]
    #[diagnostic(
        code(constgen::host_unavailable),
        help("check `project.tag_manager` in constgen.toml points at the Unity TagManager.asset")
    )]
    HostUnavailable(#[from] SourceError),

    #[error("{target} cannot be generated")]
    #[diagnostic(code(constgen::invalid_name))]
    InvalidName {
        target: TargetKind,
        #[source]
        source: NameError,
    },

    #[error("failed to scan '{path}' for generated scripts")]
    #[diagnostic(code(constgen::scan_error))]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_type_lists_assemblies() {
        let err = GenerateError::AmbiguousType {
            type_name: "Layer".to_string(),
            assemblies: vec!["Game.Core".to_string(), "Game.Ui".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "type 'Layer' is defined in several assemblies: Game.Core, Game.Ui"
        );
    }

    #[test]
    fn test_not_configured_message() {
        let err = GenerateError::NotConfigured {
            target: TargetKind::Layers,
            reason: "file path is empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "layers target is not configured: file path is empty"
        );
    }
}
