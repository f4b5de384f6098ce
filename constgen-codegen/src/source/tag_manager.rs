//! Unity `ProjectSettings/TagManager.asset` reader.

use std::{fmt, path::PathBuf};

use constgen_core::{BUILTIN_TAGS, Layers};
use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};
use tracing::debug;

use super::{NameSource, SourceError};

/// Reads names from a Unity tag manager asset on every call.
#[derive(Debug, Clone)]
pub struct TagManagerSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct AssetDocument {
    #[serde(rename = "TagManager")]
    tag_manager: TagManagerAsset,
}

#[derive(Debug, Deserialize)]
struct TagManagerAsset {
    #[serde(default)]
    tags: Vec<RawName>,
    #[serde(default)]
    layers: Vec<RawName>,
}

/// A list entry exactly as written. Unity does not quote names, so `True`,
/// `null` or `0x10` are names too and must not go through YAML typing. Only
/// an item with no text at all is empty.
#[derive(Debug, Default)]
struct RawName(String);

impl<'de> Deserialize<'de> for RawName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RawNameVisitor)
    }
}

struct RawNameVisitor;

impl Visitor<'_> for RawNameVisitor {
    type Value = RawName;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a tag or layer name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawName, E> {
        Ok(RawName(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawName, E> {
        Ok(RawName::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<RawName, E> {
        Ok(RawName::default())
    }
}

impl TagManagerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<TagManagerAsset, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let document: AssetDocument =
            serde_yaml::from_str(&strip_unity_directives(&content)).map_err(|e| {
                SourceError::Malformed {
                    path: self.path.clone(),
                    source: e,
                }
            })?;

        debug!(
            path = %self.path.display(),
            tags = document.tag_manager.tags.len(),
            layers = document.tag_manager.layers.len(),
            "loaded tag manager"
        );
        Ok(document.tag_manager)
    }
}

impl NameSource for TagManagerSource {
    fn current_tags(&self) -> Result<Vec<String>, SourceError> {
        let asset = self.load()?;
        let mut tags: Vec<String> = BUILTIN_TAGS.iter().map(|t| t.to_string()).collect();

        for RawName(tag) in &asset.tags {
            let tag = tag.trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }

        Ok(tags)
    }

    fn current_layers(&self) -> Result<Layers, SourceError> {
        let asset = self.load()?;
        Ok(Layers::from_names(asset.layers.into_iter().map(|RawName(name)| name)))
    }
}

/// Unity writes `%YAML`/`%TAG` directives and `--- !u!78 &1` document
/// headers whose local tags plain YAML readers reject.
fn strip_unity_directives(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('%'))
        .map(|line| if line.starts_with("---") { "---" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}
