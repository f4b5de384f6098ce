//! C# static class builder.

use constgen_codegen::builder::{CodeFragment, Renderable};

/// A `public const` field.
#[derive(Debug, Clone)]
pub struct Const {
    pub name: String,
    pub ty: String,
    /// Value expression, already in C# syntax
    pub value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }

    fn format(&self) -> String {
        format!("public const {} {} = {};", self.ty, self.name, self.value)
    }
}

/// Builder for `public static class` declarations holding constants.
#[derive(Debug, Clone)]
pub struct StaticClass {
    name: String,
    doc: Option<String>,
    consts: Vec<Const>,
}

impl StaticClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            consts: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn constant(mut self, constant: Const) -> Self {
        self.consts.push(constant);
        self
    }

    pub fn constants(mut self, consts: impl IntoIterator<Item = Const>) -> Self {
        self.consts.extend(consts);
        self
    }
}

impl Renderable for StaticClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::summary(doc));
        }
        let body = self
            .consts
            .iter()
            .map(|c| CodeFragment::line(c.format()))
            .collect();
        fragments.push(CodeFragment::braced(
            format!("public static class {}", self.name),
            body,
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use constgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_static_class() {
        let class = StaticClass::new("Tag")
            .constant(Const::new("Player", "string", "\"Player\""));

        let mut builder = CodeBuilder::csharp();
        builder.emit(&class);
        assert_eq!(
            builder.build(),
            "public static class Tag\n{\n    public const string Player = \"Player\";\n}\n"
        );
    }

    #[test]
    fn test_doc_comment() {
        let class = StaticClass::new("Tag").doc("Tags.");
        let mut builder = CodeBuilder::csharp();
        builder.emit(&class);
        assert_eq!(
            builder.build(),
            "/// <summary>\n/// Tags.\n/// </summary>\npublic static class Tag\n{\n}\n"
        );
    }
}
