use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which generated file a configuration or operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// String constants for tags
    Tags,
    /// Layer index enum plus its mask companion
    Layers,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::Tags, TargetKind::Layers];

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Tags => "tags",
            TargetKind::Layers => "layers",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tags" | "tag" => Ok(TargetKind::Tags),
            "layers" | "layer" => Ok(TargetKind::Layers),
            _ => Err(format!("unknown target '{}', expected 'tags' or 'layers'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TargetKind::from_str("tags").unwrap(), TargetKind::Tags);
        assert_eq!(TargetKind::from_str("Layer").unwrap(), TargetKind::Layers);
        assert!(TargetKind::from_str("sorting").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetKind::Tags.to_string(), "tags");
        assert_eq!(TargetKind::Layers.to_string(), "layers");
    }
}
