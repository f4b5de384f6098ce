use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Project-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Path to Unity's tag manager asset
    #[serde(default = "default_tag_manager")]
    pub tag_manager: String,

    /// Directories scanned for previously generated scripts
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,
}

fn default_tag_manager() -> String {
    "ProjectSettings/TagManager.asset".to_string()
}

fn default_source_roots() -> Vec<String> {
    vec!["Assets".to_string()]
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            tag_manager: default_tag_manager(),
            source_roots: default_source_roots(),
        }
    }
}

impl ProjectConfig {
    pub fn tag_manager_path(&self, root: &Path) -> PathBuf {
        root.join(&self.tag_manager)
    }

    pub fn source_root_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.source_roots.iter().map(|dir| root.join(dir)).collect()
    }
}
