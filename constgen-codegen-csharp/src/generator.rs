use constgen_codegen::{LanguageCodegen, Member};
use constgen_core::{GeneratedFile, Layers, NameError, Snapshot, TargetKind};
use constgen_manifest::TargetConfig;

use crate::{
    files::{LayersCs, TagsCs},
    naming, reader,
};

/// C# generator producing a constants class for tags and a pair of enums
/// for layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Source of the tags file for `tags` in host order.
    pub fn emit_tag_file(
        &self,
        namespace: Option<&str>,
        type_name: &str,
        tags: &[String],
    ) -> Result<String, NameError> {
        let members = naming::tag_members(type_name, tags)?;
        Ok(TagsCs::new("", namespace, type_name, members).render())
    }

    /// Source of the layers file for the named slots of `layers`.
    pub fn emit_layer_file(
        &self,
        namespace: Option<&str>,
        type_name: &str,
        layers: &Layers,
    ) -> Result<String, NameError> {
        let members = naming::layer_members(layers)?;
        Ok(LayersCs::new("", namespace, type_name, members).render())
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn tag_members(&self, type_name: &str, tags: &[String]) -> Result<Vec<Member>, NameError> {
        naming::tag_members(type_name, tags)
    }

    fn layer_members(&self, _type_name: &str, layers: &Layers) -> Result<Vec<Member>, NameError> {
        naming::layer_members(layers)
    }

    fn file(&self, target: &TargetConfig, members: Vec<Member>) -> Box<dyn GeneratedFile> {
        match target.kind {
            TargetKind::Tags => Box::new(TagsCs::new(
                &target.file_path,
                target.namespace(),
                &target.type_name,
                members,
            )),
            TargetKind::Layers => Box::new(LayersCs::new(
                &target.file_path,
                target.namespace(),
                &target.type_name,
                members,
            )),
        }
    }

    fn read_back(&self, kind: TargetKind, source: &str, type_name: &str) -> Option<Snapshot> {
        match kind {
            TargetKind::Tags => reader::read_tags(source, type_name),
            TargetKind::Layers => reader::read_layers(source, type_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use constgen_codegen::members_snapshot;

    use super::*;

    #[test]
    fn test_emitted_tags_read_back_to_their_members() {
        let generator = Generator::new();
        let tags = vec!["Untagged".to_string(), "Ignore Me".to_string()];
        let members = generator.tag_members("Tag", &tags).unwrap();
        let source = generator.emit_tag_file(Some("Game"), "Tag", &tags).unwrap();

        let snapshot = generator
            .read_back(TargetKind::Tags, &source, "Tag")
            .unwrap();
        assert!(snapshot.same_members(&members_snapshot(&members)));
    }

    #[test]
    fn test_tags_file_is_not_read_as_layers() {
        let generator = Generator::new();
        let source = generator
            .emit_tag_file(None, "Tag", &["Player".to_string()])
            .unwrap();
        assert!(generator.read_back(TargetKind::Layers, &source, "Tag").is_none());
    }

    #[test]
    fn test_file_uses_target_settings() {
        let mut target = TargetConfig::default_layers();
        target.namespace = Some("Game".to_string());
        let members = naming::layer_members(&Layers::empty().with(0, "Default")).unwrap();

        let file = Generator.file(&target, members);
        assert_eq!(
            file.path(std::path::Path::new("/project")),
            std::path::Path::new("/project/Assets/Scripts/Generated/Layer.cs")
        );
        assert!(file.render().contains("namespace Game"));
        assert!(file.render().contains("public enum LayerMasks"));
    }
}
