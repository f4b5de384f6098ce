//! Opening the project a constgen.toml describes.

use std::path::{Path, PathBuf};

use constgen_codegen::Orchestrator;
use constgen_codegen_csharp::Generator;
use constgen_core::TargetKind;
use constgen_manifest::ConstgenToml;

use crate::commands::UnwrapOrExit;

/// A loaded constgen.toml and the Unity project around it.
pub struct Project {
    toml: ConstgenToml,
}

impl Project {
    /// Load `config`, exiting with a diagnostic when it is missing or invalid.
    pub fn open(config: &Path) -> Self {
        Self {
            toml: ConstgenToml::open(config).unwrap_or_exit(),
        }
    }

    pub fn config_path(&self) -> &Path {
        self.toml.path()
    }

    /// Orchestrator reading names from the project's tag manager asset and
    /// generating C#.
    pub fn orchestrator(&self) -> Orchestrator<'_> {
        Orchestrator::for_project(self.toml.manifest(), self.toml.root(), Generator::new())
    }

    /// Files whose changes should trigger automatic generation: the tag
    /// manager asset and both outputs, so a deleted output is restored.
    pub fn watched_paths(&self) -> Vec<PathBuf> {
        let manifest = self.toml.manifest();
        let root = self.toml.root();
        let mut paths = vec![manifest.project.tag_manager_path(root)];
        paths.extend(
            TargetKind::ALL
                .into_iter()
                .map(|kind| manifest.target(kind))
                .filter(|target| !target.file_path.is_empty())
                .map(|target| target.output_path(root)),
        );
        paths
    }
}
