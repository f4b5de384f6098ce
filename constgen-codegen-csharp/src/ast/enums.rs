//! C# enum builder.

use constgen_codegen::builder::{CodeFragment, Renderable};

/// A member of a C# enum.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: String,
    /// Value expression, already in C# syntax
    pub value: String,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builder for `public enum` declarations.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    members: Vec<EnumMember>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an attribute, e.g. `System.Flags`.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    /// Mark the enum as a bit field.
    pub fn flags(self) -> Self {
        self.attr("System.Flags")
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = EnumMember>) -> Self {
        self.members.extend(members);
        self
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::summary(doc));
        }
        fragments.extend(
            self.attrs
                .iter()
                .map(|attr| CodeFragment::line(format!("[{}]", attr))),
        );
        let body = self
            .members
            .iter()
            .map(|m| CodeFragment::line(format!("{} = {},", m.name, m.value)))
            .collect();
        fragments.push(CodeFragment::braced(format!("public enum {}", self.name), body));
        fragments
    }
}
