//! Where the current tag and layer names come from.

mod tag_manager;

use std::path::PathBuf;

use constgen_core::Layers;
pub use tag_manager::TagManagerSource;
use thiserror::Error;

/// Reads the authoritative tag and layer names from the host.
///
/// Implementations have no side effects; every call reflects the host's
/// current state.
pub trait NameSource {
    /// Tag names in host order.
    fn current_tags(&self) -> Result<Vec<String>, SourceError>;

    /// All 32 layer slots in index order.
    fn current_layers(&self) -> Result<Layers, SourceError>;
}

/// The host environment could not be read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a valid tag manager asset")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Names held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticNames {
    tags: Vec<String>,
    layers: Layers,
}

impl StaticNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn layers(mut self, layers: Layers) -> Self {
        self.layers = layers;
        self
    }
}

impl NameSource for StaticNames {
    fn current_tags(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.tags.clone())
    }

    fn current_layers(&self) -> Result<Layers, SourceError> {
        Ok(self.layers.clone())
    }
}
