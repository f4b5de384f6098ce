//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{DEFAULT_FILENAME, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a constgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a constgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_project(&manifest.project)?;

    for target in manifest.targets() {
        let target_ctx = ctx.push(target.kind.as_str());
        target_ctx.validate_type_name(&target.type_name)?;
        if let Some(namespace) = target.namespace() {
            target_ctx.validate_namespace(namespace)?;
        }
    }

    ctx.validate_distinct_types(&manifest.tags, &manifest.layers)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            tag_manager = "ProjectSettings/TagManager.asset"
            source_roots = ["Assets", "Packages/com.studio.game"]

            [tags]
            auto_generate = false
            type_name = "Tags"
            file_path = "Assets/Generated/Tags.cs"
            namespace = "Studio.Game"
            assembly = "Game.Runtime"

            [layers]
            type_name = "Layers"
            file_path = "Assets/Generated/Layers.cs"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.project.source_roots.len(), 2);
        assert!(!manifest.tags.auto_generate);
        assert_eq!(manifest.tags.type_name, "Tags");
        assert_eq!(manifest.tags.assembly(), Some("Game.Runtime"));
        assert!(manifest.layers.auto_generate);
        assert_eq!(manifest.layers.file_path, "Assets/Generated/Layers.cs");
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            [tags]
            typename = "Tags"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_type_name_rejected() {
        let err = Manifest::from_str(
            r#"
            [tags]
            type_name = "class"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let err = Manifest::from_str(
            r#"
            [layers]
            namespace = "Game..Physics"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_empty_type_name_is_accepted() {
        let manifest = Manifest::from_str(
            r#"
            [tags]
            type_name = ""
            "#,
        )
        .unwrap();
        assert_eq!(manifest.tags.type_name, "");
    }

    #[test]
    fn test_duplicate_type_names_rejected() {
        let err = Manifest::from_str(
            r#"
            [tags]
            type_name = "Names"

            [layers]
            type_name = "Names"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateTypeName { .. }));
    }

    #[test]
    fn test_same_type_name_in_different_namespaces_is_fine() {
        let manifest = Manifest::from_str(
            r#"
            [tags]
            type_name = "Names"
            namespace = "Game.Tags"

            [layers]
            type_name = "Names"
            namespace = "Game.Layers"
            "#,
        );
        assert!(manifest.is_ok());
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::from_file(temp.path().join("constgen.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("constgen.toml");
        fs::write(&path, "[tags]\ntype_name = \"GameTags\"\n").unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest.tags.type_name, "GameTags");
    }
}
