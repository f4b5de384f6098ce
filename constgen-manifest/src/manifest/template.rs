//! Default constgen.toml written by `constgen init`.

/// Render a commented constgen.toml, optionally with a namespace for both targets.
pub fn default_manifest(namespace: Option<&str>) -> String {
    let namespace_line = match namespace {
        Some(ns) => format!("namespace = \"{}\"", ns),
        None => "# namespace = \"Game\"".to_string(),
    };

    format!(
        r#"# constgen: C# constants for Unity tags and layers

[project]
# Unity asset holding the tag and layer names
tag_manager = "ProjectSettings/TagManager.asset"
# Directories searched for previously generated scripts
source_roots = ["Assets"]

[tags]
auto_generate = true
type_name = "Tag"
file_path = "Assets/Scripts/Generated/Tag.cs"
{namespace_line}
# Assembly the generated type compiles into (empty: search all)
# assembly = "Assembly-CSharp"

[layers]
auto_generate = true
type_name = "Layer"
file_path = "Assets/Scripts/Generated/Layer.cs"
{namespace_line}
# assembly = "Assembly-CSharp"
"#
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Manifest;

    #[test]
    fn test_default_manifest_parses_to_defaults() {
        let manifest = Manifest::from_str(&default_manifest(None)).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_default_manifest_with_namespace() {
        let manifest = Manifest::from_str(&default_manifest(Some("Studio.Game"))).unwrap();
        assert_eq!(manifest.tags.namespace(), Some("Studio.Game"));
        assert_eq!(manifest.layers.namespace(), Some("Studio.Game"));
    }
}
