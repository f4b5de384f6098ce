use std::path::{Path, PathBuf};

use constgen_core::TargetKind;
use serde::{Deserialize, Deserializer, Serialize};

/// Settings for one generated file (the tags class or the layer enums).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetConfig {
    /// Which target these settings belong to
    #[serde(skip)]
    pub kind: TargetKind,

    /// Regenerate automatically when the project changes
    pub auto_generate: bool,

    /// Name of the generated C# type
    pub type_name: String,

    /// Output path, relative to the directory holding constgen.toml
    pub file_path: String,

    /// Namespace wrapping the generated type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Assembly the previously generated type is looked up in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
}

/// As written in the file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTarget {
    auto_generate: Option<bool>,
    type_name: Option<String>,
    file_path: Option<String>,
    namespace: Option<String>,
    assembly: Option<String>,
}

impl TargetConfig {
    /// Defaults for the tags target.
    pub fn default_tags() -> Self {
        Self::defaults(TargetKind::Tags)
    }

    /// Defaults for the layers target.
    pub fn default_layers() -> Self {
        Self::defaults(TargetKind::Layers)
    }

    fn defaults(kind: TargetKind) -> Self {
        let type_name = match kind {
            TargetKind::Tags => "Tag",
            TargetKind::Layers => "Layer",
        };
        Self {
            kind,
            auto_generate: true,
            type_name: type_name.to_string(),
            file_path: format!("Assets/Scripts/Generated/{}.cs", type_name),
            namespace: None,
            assembly: None,
        }
    }

    fn from_raw(kind: TargetKind, raw: RawTarget) -> Self {
        let defaults = Self::defaults(kind);
        Self {
            kind,
            auto_generate: raw.auto_generate.unwrap_or(defaults.auto_generate),
            type_name: raw
                .type_name
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.type_name),
            file_path: raw
                .file_path
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.file_path),
            namespace: non_empty(raw.namespace),
            assembly: non_empty(raw.assembly),
        }
    }

    /// Namespace, if one is configured.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Assembly qualifier, if one is configured.
    pub fn assembly(&self) -> Option<&str> {
        self.assembly.as_deref()
    }

    /// Resolve the output path against the project root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.file_path)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub(super) fn deserialize_tags<'de, D>(deserializer: D) -> Result<TargetConfig, D::Error>
where
    D: Deserializer<'de>,
{
    RawTarget::deserialize(deserializer).map(|raw| TargetConfig::from_raw(TargetKind::Tags, raw))
}

pub(super) fn deserialize_layers<'de, D>(deserializer: D) -> Result<TargetConfig, D::Error>
where
    D: Deserializer<'de>,
{
    RawTarget::deserialize(deserializer)
        .map(|raw| TargetConfig::from_raw(TargetKind::Layers, raw))
}
