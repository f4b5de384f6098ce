//! Test utilities for generators and the orchestrator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use constgen_core::{
    FileRules, GeneratedFile, Layers, NameError, Snapshot, TargetKind, Value,
    join_identifier_parts,
};
use constgen_manifest::TargetConfig;
use tempfile::TempDir;

use crate::language::{LanguageCodegen, Member};

/// A throwaway Unity project tree.
///
/// Paths given to the helpers are relative to the project root. Helpers
/// panic on I/O failure since they only run inside tests.
pub struct UnityProject {
    dir: TempDir,
}

impl UnityProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file, creating parent folders.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write file");
        self
    }

    /// Create `folder/{name}.asmdef` declaring assembly `name`.
    pub fn asmdef(&self, folder: &str, name: &str) -> &Self {
        let content = format!("{{\n    \"name\": \"{}\",\n    \"references\": []\n}}\n", name);
        self.write(&format!("{}/{}.asmdef", folder, name), &content)
    }

    /// Write `ProjectSettings/TagManager.asset` the way the Unity editor does.
    /// `tags` are user tags only; `layers` fill slots from index 0.
    pub fn tag_manager(&self, tags: &[&str], layers: &[&str]) -> &Self {
        let mut content = String::from(
            "%YAML 1.1\n%TAG !u! tag:unity3d.com,2011:\n--- !u!78 &1\nTagManager:\n  serializedVersion: 2\n",
        );
        if tags.is_empty() {
            content.push_str("  tags: []\n");
        } else {
            content.push_str("  tags:\n");
            for tag in tags {
                content.push_str(&format!("  - {}\n", tag));
            }
        }
        content.push_str("  layers:\n");
        for index in 0..constgen_core::LAYER_COUNT {
            match layers.get(index).filter(|name| !name.is_empty()) {
                Some(name) => content.push_str(&format!("  - {}\n", name)),
                None => content.push_str("  -\n"),
            }
        }
        content.push_str("  m_SortingLayers:\n  - name: Default\n    uniqueID: 0\n    locked: 0\n");
        self.write("ProjectSettings/TagManager.asset", &content)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("failed to read file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }
}

impl Default for UnityProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal line-based generator: a `// {kind} {type}` header followed by
/// `ident=value` lines. Lets the pipeline be tested without a real target
/// language.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodegen;

struct LineFile {
    path: String,
    content: String,
}

impl GeneratedFile for LineFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

fn unique_members(
    names: impl IntoIterator<Item = (String, Value)>,
) -> Result<Vec<Member>, NameError> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut members = Vec::new();
    for (name, value) in names {
        let ident = join_identifier_parts(&name);
        if ident.is_empty() {
            return Err(NameError::Empty { name });
        }
        if let Some(first) = seen.insert(ident.clone(), name.clone()) {
            return Err(NameError::Duplicate {
                first,
                second: name,
                ident,
            });
        }
        members.push(Member::new(name, ident, value));
    }
    Ok(members)
}

impl LanguageCodegen for LineCodegen {
    fn language(&self) -> &'static str {
        "lines"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn tag_members(&self, _type_name: &str, tags: &[String]) -> Result<Vec<Member>, NameError> {
        unique_members(tags.iter().map(|t| (t.clone(), Value::from(t.as_str()))))
    }

    fn layer_members(&self, _type_name: &str, layers: &Layers) -> Result<Vec<Member>, NameError> {
        unique_members(
            layers
                .named()
                .map(|l| (l.name.clone(), Value::Int(i64::from(l.index)))),
        )
    }

    fn file(&self, target: &TargetConfig, members: Vec<Member>) -> Box<dyn GeneratedFile> {
        let mut content = format!("// {} {}\n", target.kind, target.type_name);
        for member in members {
            let value = match member.value {
                Value::Str(s) => s,
                Value::Int(i) => i.to_string(),
            };
            content.push_str(&format!("{}={}\n", member.ident, value));
        }
        Box::new(LineFile {
            path: target.file_path.clone(),
            content,
        })
    }

    fn read_back(&self, kind: TargetKind, source: &str, type_name: &str) -> Option<Snapshot> {
        let mut lines = source.lines();
        if lines.next()? != format!("// {} {}", kind, type_name) {
            return None;
        }
        let mut snapshot = Snapshot::new();
        for line in lines {
            let (ident, value) = line.split_once('=')?;
            let value = match kind {
                TargetKind::Tags => Value::from(value),
                TargetKind::Layers => Value::Int(value.parse().ok()?),
            };
            snapshot.insert(ident, value);
        }
        Some(snapshot)
    }
}
