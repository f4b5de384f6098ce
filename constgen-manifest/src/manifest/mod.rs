//! Manifest types and parsing for constgen.toml files.

mod file;
mod parse;
mod project;
mod target;
mod template;
mod validate;

use constgen_core::TargetKind;
pub use file::ConstgenToml;
pub use project::ProjectConfig;
use serde::{Deserialize, Serialize};
pub use target::TargetConfig;
pub use template::default_manifest;
pub use validate::ParseContext;

/// Name of the configuration file looked up by default.
pub const DEFAULT_FILENAME: &str = "constgen.toml";

/// Root manifest for constgen.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manifest {
    /// Where names are read from and where scripts live
    #[serde(default)]
    pub project: ProjectConfig,

    /// Tag constants target
    #[serde(
        default = "TargetConfig::default_tags",
        deserialize_with = "target::deserialize_tags"
    )]
    pub tags: TargetConfig,

    /// Layer enums target
    #[serde(
        default = "TargetConfig::default_layers",
        deserialize_with = "target::deserialize_layers"
    )]
    pub layers: TargetConfig,
}

impl Manifest {
    /// Get the configuration for one target.
    pub fn target(&self, kind: TargetKind) -> &TargetConfig {
        match kind {
            TargetKind::Tags => &self.tags,
            TargetKind::Layers => &self.layers,
        }
    }

    /// Both targets, tags first.
    pub fn targets(&self) -> impl Iterator<Item = &TargetConfig> {
        [&self.tags, &self.layers].into_iter()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            tags: TargetConfig::default_tags(),
            layers: TargetConfig::default_layers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.tags.type_name, "Tag");
        assert_eq!(manifest.layers.type_name, "Layer");
        assert!(manifest.tags.auto_generate);
    }

    #[test]
    fn test_partial_target_keeps_kind_defaults() {
        let manifest = Manifest::from_str(
            r#"
            [layers]
            namespace = "Game.Physics"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.layers.kind, TargetKind::Layers);
        assert_eq!(manifest.layers.type_name, "Layer");
        assert_eq!(manifest.layers.namespace(), Some("Game.Physics"));
        assert_eq!(manifest.tags.namespace(), None);
    }

    #[test]
    fn test_target_lookup() {
        let manifest = Manifest::default();
        assert_eq!(manifest.target(TargetKind::Tags).kind, TargetKind::Tags);
        assert_eq!(manifest.target(TargetKind::Layers).kind, TargetKind::Layers);
        assert_eq!(manifest.targets().count(), 2);
    }
}
