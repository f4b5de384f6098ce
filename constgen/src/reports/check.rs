//! Check command report data structures.

use std::path::PathBuf;

use constgen_core::TargetKind;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from inspecting every target without writing.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config: PathBuf,
    pub targets: Vec<TargetStatus>,
}

/// State of one target.
#[derive(Debug, Serialize)]
pub struct TargetStatus {
    pub target: TargetKind,
    pub auto_generate: bool,
    /// Output path relative to the project root.
    pub file: String,
    /// Whether the target passes the generation precondition.
    pub configured: bool,
    /// Why the target is not configured, or why evaluating it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The previously generated type, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing: Option<ExistingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_regeneration: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ExistingType {
    pub assembly: String,
    pub path: String,
    pub members: usize,
}

impl CheckReport {
    /// Whether an automatically generated target is out of date or cannot
    /// be evaluated. Unconfigured targets are disabled, not stale.
    pub fn is_stale(&self) -> bool {
        self.targets.iter().any(|t| {
            t.auto_generate
                && t.configured
                && (t.needs_regeneration == Some(true) || t.error.is_some())
        })
    }
}

impl TargetStatus {
    fn status(&self) -> String {
        match (&self.error, self.needs_regeneration) {
            (Some(error), _) if !self.configured => format!("not configured ({})", error),
            (Some(error), _) => format!("error ({})", error),
            (None, Some(true)) => "needs regeneration".to_string(),
            (None, _) => "up to date".to_string(),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.key_value(target.target.as_str(), &target.file);
            out.key_value_indented("status", &target.status());
            if target.configured && target.error.is_none() {
                let existing = match &target.existing {
                    Some(found) => format!(
                        "{} in {} ({} members)",
                        found.path, found.assembly, found.members
                    ),
                    None => "none".to_string(),
                };
                out.key_value_indented("existing", &existing);
            }
            out.key_value_indented("auto_generate", &target.auto_generate.to_string());
        }
    }
}
