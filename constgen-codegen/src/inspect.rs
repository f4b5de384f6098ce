//! Recovering previously generated types from script files.
//!
//! The generated file is the record of the last generation. The inspector
//! scans the configured source roots for scripts the active
//! [`LanguageCodegen`] recognizes as its own output and resolves which Unity
//! assembly each one compiles into.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
};

use constgen_core::{Snapshot, TargetKind};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{GenerateError, language::LanguageCodegen};

/// Assembly Unity compiles scripts into when no `.asmdef` applies.
const DEFAULT_ASSEMBLY: &str = "Assembly-CSharp";

/// Folders whose scripts Unity compiles in the first pass.
const FIRSTPASS_FOLDERS: &[&str] = &["Plugins", "Standard Assets", "Pro Standard Assets"];

/// Result of looking for a previously generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// No prior type exists; the first-run state
    NotFound,
    Found(FoundType),
}

impl Inspection {
    pub fn found(&self) -> Option<&FoundType> {
        match self {
            Inspection::NotFound => None,
            Inspection::Found(found) => Some(found),
        }
    }

    /// Members of the prior type, if there is one.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.found().map(|found| &found.snapshot)
    }
}

/// A previously generated type located on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundType {
    pub assembly: String,
    pub path: PathBuf,
    pub snapshot: Snapshot,
}

#[derive(Debug, Deserialize)]
struct AssemblyDefinition {
    name: String,
}

/// Scans source roots for generated types.
pub struct SourceInspector<'a> {
    roots: Vec<PathBuf>,
    lang: &'a dyn LanguageCodegen,
}

impl<'a> SourceInspector<'a> {
    pub fn new(roots: Vec<PathBuf>, lang: &'a dyn LanguageCodegen) -> Self {
        Self { roots, lang }
    }

    /// Find the type `type_name` of shape `kind`.
    ///
    /// With `assembly` set only that assembly is searched. Without it, a type
    /// present in more than one assembly is [`GenerateError::AmbiguousType`].
    /// When one assembly holds several copies, the one at `path_hint` wins.
    pub fn inspect(
        &self,
        kind: TargetKind,
        type_name: &str,
        path_hint: Option<&Path>,
        assembly: Option<&str>,
    ) -> Result<Inspection, GenerateError> {
        let mut candidates = Vec::new();
        let mut asmdefs = HashMap::new();

        for root in &self.roots {
            if !root.is_dir() {
                debug!(root = %root.display(), "source root missing, skipping");
                continue;
            }

            let mut scripts = Vec::new();
            self.collect_scripts(root, &mut scripts)?;
            debug!(root = %root.display(), scripts = scripts.len(), "scanning source root");

            for path in scripts {
                let Some(snapshot) = self.read_back(kind, &path, type_name)? else {
                    continue;
                };
                let assembly = assembly_for(root, &path, &mut asmdefs);
                debug!(path = %path.display(), %assembly, members = snapshot.len(), "found generated type");
                candidates.push(FoundType {
                    assembly,
                    path,
                    snapshot,
                });
            }
        }

        if let Some(wanted) = assembly {
            candidates.retain(|found| found.assembly == wanted);
        }

        let assemblies: BTreeSet<&str> = candidates.iter().map(|f| f.assembly.as_str()).collect();
        if assemblies.len() > 1 {
            return Err(GenerateError::AmbiguousType {
                type_name: type_name.to_string(),
                assemblies: assemblies.into_iter().map(String::from).collect(),
            });
        }

        if candidates.len() > 1 {
            if let Some(index) = path_hint.and_then(|hint| candidates.iter().position(|f| f.path == hint)) {
                return Ok(Inspection::Found(candidates.swap_remove(index)));
            }
            warn!(
                type_name,
                copies = candidates.len(),
                using = %candidates[0].path.display(),
                "type is generated more than once in the same assembly"
            );
        }

        Ok(candidates
            .into_iter()
            .next()
            .map_or(Inspection::NotFound, Inspection::Found))
    }

    fn read_back(
        &self,
        kind: TargetKind,
        path: &Path,
        type_name: &str,
    ) -> Result<Option<Snapshot>, GenerateError> {
        let bytes = fs::read(path).map_err(|e| GenerateError::Scan {
            path: path.to_path_buf(),
            source: e,
        })?;
        let Ok(source) = String::from_utf8(bytes) else {
            debug!(path = %path.display(), "skipping non UTF-8 script");
            return Ok(None);
        };
        if !source.contains(type_name) {
            return Ok(None);
        }
        Ok(self.lang.read_back(kind, &source, type_name))
    }

    /// Scripts below `dir` in sorted order. Hidden folders and folders
    /// ending in `~` are ignored, as Unity does.
    fn collect_scripts(&self, dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), GenerateError> {
        let scan_error = |e| GenerateError::Scan {
            path: dir.to_path_buf(),
            source: e,
        };

        let mut entries = fs::read_dir(dir)
            .map_err(scan_error)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(scan_error)?;
        entries.sort();

        for path in entries {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            if path.is_dir() {
                if name.starts_with('.') || name.ends_with('~') {
                    continue;
                }
                self.collect_scripts(&path, out)?;
            } else if has_extension(&path, self.lang.file_extension()) {
                out.push(path);
            }
        }
        Ok(())
    }
}

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Name of the assembly `script` compiles into: the nearest `.asmdef` at or
/// above its folder (stopping at `root`), else Unity's predefined assemblies.
fn assembly_for(
    root: &Path,
    script: &Path,
    cache: &mut HashMap<PathBuf, Option<String>>,
) -> String {
    let mut dir = script.parent();
    while let Some(current) = dir {
        if !current.starts_with(root) {
            break;
        }
        let definition = cache
            .entry(current.to_path_buf())
            .or_insert_with(|| asmdef_in(current))
            .clone();
        if let Some(name) = definition {
            return name;
        }
        dir = current.parent();
    }

    predefined_assembly(script.strip_prefix(root).unwrap_or(script))
}

fn asmdef_in(dir: &Path) -> Option<String> {
    let mut definitions: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_extension(path, "asmdef"))
        .collect();
    definitions.sort();
    let path = definitions.into_iter().next()?;

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| {
            serde_json::from_str::<AssemblyDefinition>(&content).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(definition) if !definition.name.trim().is_empty() => Some(definition.name),
        other => {
            let error = other.err().unwrap_or_else(|| "empty name".to_string());
            let fallback = path.file_stem()?.to_string_lossy().into_owned();
            warn!(
                path = %path.display(),
                %error,
                assembly = %fallback,
                "unreadable assembly definition, using its file name"
            );
            Some(fallback)
        }
    }
}

fn predefined_assembly(relative: &Path) -> String {
    let folders: Vec<&str> = relative
        .parent()
        .map(|parent| parent.iter().filter_map(|c| c.to_str()).collect())
        .unwrap_or_default();

    let firstpass = folders
        .first()
        .is_some_and(|top| FIRSTPASS_FOLDERS.contains(top));
    let editor = folders.contains(&"Editor");

    let mut name = DEFAULT_ASSEMBLY.to_string();
    if editor {
        name.push_str("-Editor");
    }
    if firstpass {
        name.push_str("-firstpass");
    }
    name
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_predefined_assembly() {
        assert_eq!(predefined_assembly(Path::new("Scripts/Tag.cs")), "Assembly-CSharp");
        assert_eq!(predefined_assembly(Path::new("Tag.cs")), "Assembly-CSharp");
        assert_eq!(
            predefined_assembly(Path::new("Scripts/Editor/Tools.cs")),
            "Assembly-CSharp-Editor"
        );
        assert_eq!(
            predefined_assembly(Path::new("Plugins/Vendor/Lib.cs")),
            "Assembly-CSharp-firstpass"
        );
        assert_eq!(
            predefined_assembly(Path::new("Standard Assets/Editor/Lib.cs")),
            "Assembly-CSharp-Editor-firstpass"
        );
        assert_eq!(
            predefined_assembly(Path::new("Scripts/Plugins/Lib.cs")),
            "Assembly-CSharp"
        );
    }

    #[test]
    fn test_nearest_asmdef_wins() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Assets");
        let nested = root.join("Game/Ui/Generated");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("Game/Game.asmdef"), r#"{ "name": "Game.Core" }"#).unwrap();
        fs::write(root.join("Game/Ui/Ui.asmdef"), r#"{ "name": "Game.Ui" }"#).unwrap();

        let mut cache = HashMap::new();
        assert_eq!(assembly_for(&root, &nested.join("Layer.cs"), &mut cache), "Game.Ui");
        assert_eq!(
            assembly_for(&root, &root.join("Game/Layer.cs"), &mut cache),
            "Game.Core"
        );
        assert_eq!(
            assembly_for(&root, &root.join("Other/Layer.cs"), &mut cache),
            "Assembly-CSharp"
        );
    }

    #[test]
    fn test_malformed_asmdef_falls_back_to_file_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Broken.asmdef"), "{ not json").unwrap();
        assert_eq!(asmdef_in(temp.path()).as_deref(), Some("Broken"));
    }

    #[test]
    fn test_has_extension_ignores_case() {
        assert!(has_extension(Path::new("Tag.CS"), "cs"));
        assert!(!has_extension(Path::new("Tag.cs.meta"), "cs"));
        assert!(!has_extension(Path::new("Tag"), "cs"));
    }
}
