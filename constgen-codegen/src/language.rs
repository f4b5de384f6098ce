//! The seam between the pipeline and a target language.

use constgen_core::{GeneratedFile, Layers, NameError, Snapshot, TargetKind, Value};
use constgen_manifest::TargetConfig;

/// One generated member: the host name it came from, the identifier it is
/// emitted as, and its constant value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Tag or layer name as reported by the host
    pub source: String,
    /// Identifier used in the generated code
    pub ident: String,
    pub value: Value,
}

impl Member {
    pub fn new(source: impl Into<String>, ident: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            source: source.into(),
            ident: ident.into(),
            value: value.into(),
        }
    }
}

/// Identifier → value view of a member list, comparable with what an
/// inspector reads back from a generated file.
pub fn members_snapshot(members: &[Member]) -> Snapshot {
    members
        .iter()
        .map(|m| (m.ident.clone(), m.value.clone()))
        .collect()
}

/// Trait for language-specific generators.
///
/// A generator decides how host names become identifiers, renders the
/// generated file, and recognizes its own output when reading it back.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files, without the dot
    fn file_extension(&self) -> &'static str;

    /// Members of the tags type, in tag order.
    fn tag_members(&self, type_name: &str, tags: &[String]) -> Result<Vec<Member>, NameError>;

    /// Members of the layer enum, one per named slot in index order.
    /// Values are slot indices; masks are derived when rendering.
    fn layer_members(&self, type_name: &str, layers: &Layers) -> Result<Vec<Member>, NameError>;

    /// The file for `target` holding `members`.
    fn file(&self, target: &TargetConfig, members: Vec<Member>) -> Box<dyn GeneratedFile>;

    /// Recover the members of `type_name` from `source`, if the file holds a
    /// type of exactly the shape this generator emits for `kind`.
    fn read_back(&self, kind: TargetKind, source: &str, type_name: &str) -> Option<Snapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_snapshot_uses_identifiers() {
        let members = vec![
            Member::new("Ignore Raycast", "IgnoreRaycast", 2i64),
            Member::new("Water", "Water", 4i64),
        ];
        let snapshot = members_snapshot(&members);

        assert_eq!(snapshot.get("IgnoreRaycast"), Some(&Value::Int(2)));
        assert!(snapshot.get("Ignore Raycast").is_none());
        assert_eq!(snapshot.len(), 2);
    }
}
