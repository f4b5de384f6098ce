use std::path::{Path, PathBuf};

use constgen_codegen::Member;
use constgen_core::{FileRules, GeneratedFile, Value};

use super::GENERATED_HEADER;
use crate::{
    CsFile,
    ast::{Const, StaticClass},
    literal::string_literal,
};

/// The tags file: one static class with a string constant per tag.
pub struct TagsCs {
    pub file_path: String,
    pub namespace: Option<String>,
    pub type_name: String,
    pub members: Vec<Member>,
}

impl TagsCs {
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

    fn build_class(&self) -> StaticClass {
        StaticClass::new(&self.type_name)
            .doc("Tag names defined in the Unity Tag Manager.")
            .constants(self.members.iter().map(|member| {
                let value = match &member.value {
                    Value::Str(tag) => string_literal(tag),
                    Value::Int(i) => string_literal(&i.to_string()),
                };
                Const::new(&member.ident, "string", value)
            }))
    }
}

impl GeneratedFile for TagsCs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        CsFile::new()
            .namespace(self.namespace.as_deref())
            .add(self.build_class())
            .render_with_header(GENERATED_HEADER)
    }
}
