//! Generate and sync report data structures.

use constgen_core::TargetKind;

use super::output::{Output, Report};

/// What happened to one target.
#[derive(Debug)]
pub enum TargetResult {
    /// The file was written.
    Written {
        kind: TargetKind,
        path: String,
        changed: bool,
    },
    /// The file already matched and was left alone.
    Unchanged { kind: TargetKind, path: String },
    /// Dry-run rendering.
    Preview {
        kind: TargetKind,
        path: String,
        content: String,
    },
    /// Generation failed; the message is a rendered diagnostic.
    Failed { kind: TargetKind, message: String },
}

/// Report data from a generate or sync run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub results: Vec<TargetResult>,
}

impl GenerateReport {
    pub fn push(&mut self, result: TargetResult) {
        self.results.push(result);
    }

    /// Whether any target failed.
    pub fn has_failures(&self) -> bool {
        self.results
            .iter()
            .any(|r| matches!(r, TargetResult::Failed { .. }))
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for result in &self.results {
            match result {
                TargetResult::Written {
                    kind,
                    path,
                    changed: true,
                } => out.added_item(&format!("{}: {}", kind, path)),
                TargetResult::Written {
                    kind,
                    path,
                    changed: false,
                } => out.added_item(&format!("{}: {} (rewritten, no changes)", kind, path)),
                TargetResult::Unchanged { kind, path } => {
                    out.unchanged_item(&format!("{}: {} is up to date", kind, path))
                }
                TargetResult::Preview {
                    kind,
                    path,
                    content,
                } => {
                    out.divider(&format!("{}: {}", kind, path));
                    out.preformatted(content);
                }
                TargetResult::Failed { kind, message } => {
                    out.error(&format!("{} failed\n{}", kind, message))
                }
            }
        }
    }
}
