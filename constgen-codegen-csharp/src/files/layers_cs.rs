use std::path::{Path, PathBuf};

use constgen_codegen::Member;
use constgen_core::{FileRules, GeneratedFile, Value};

use super::GENERATED_HEADER;
use crate::{
    CsFile,
    ast::{Enum, EnumMember},
};

/// Suffix of the bitmask companion enum.
pub(crate) const MASKS_SUFFIX: &str = "Masks";

/// The layers file: an index enum and a `[System.Flags]` mask enum.
pub struct LayersCs {
    pub file_path: String,
    pub namespace: Option<String>,
    pub type_name: String,
    /// Named layers in ascending index order, valued by index
    pub members: Vec<Member>,
}

impl LayersCs {
    pub fn new(
        file_path: impl Into<String>,
        namespace: Option<&str>,
        type_name: impl Into<String>,
        members: Vec<Member>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            namespace: namespace.map(String::from),
            type_name: type_name.into(),
            members,
        }
    }

    fn indices(&self) -> impl Iterator<Item = (&str, i64)> {
        self.members.iter().filter_map(|member| match member.value {
            Value::Int(index) => Some((member.ident.as_str(), index)),
            Value::Str(_) => None,
        })
    }

    fn build_index_enum(&self) -> Enum {
        Enum::new(&self.type_name)
            .doc("Layer indices defined in the Unity Tag Manager.")
            .members(
                self.indices()
                    .map(|(ident, index)| EnumMember::new(ident, index.to_string())),
            )
    }

    fn build_mask_enum(&self) -> Enum {
        Enum::new(format!("{}{}", self.type_name, MASKS_SUFFIX))
            .doc(format!(
                "Single-layer masks for <see cref=\"{}\"/>, usable as a LayerMask.",
                self.type_name
            ))
            .flags()
            .members(
                self.indices()
                    .map(|(ident, index)| EnumMember::new(ident, format!("1 << {}", index))),
            )
    }
}

impl GeneratedFile for LayersCs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        CsFile::new()
            .namespace(self.namespace.as_deref())
            .add(self.build_index_enum())
            .add(self.build_mask_enum())
            .render_with_header(GENERATED_HEADER)
    }
}
