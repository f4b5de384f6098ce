//! Generate and sync operations.

use constgen_codegen::{Action, GenerateError, Orchestrator, Outcome, Trigger};
use constgen_core::TargetKind;

use super::{display_path, render_error};
use crate::reports::{GenerateReport, TargetResult};

/// Manual trigger: write every target in `kinds`, or render it when
/// `dry_run` is set.
pub fn generate(
    orchestrator: &Orchestrator<'_>,
    kinds: &[TargetKind],
    dry_run: bool,
) -> GenerateReport {
    let mut report = GenerateReport::default();
    for &kind in kinds {
        let result = if dry_run {
            match orchestrator.preview(kind) {
                Ok(preview) => TargetResult::Preview {
                    kind,
                    path: display_path(orchestrator.root(), &preview.path),
                    content: preview.content,
                },
                Err(err) => failed(kind, err),
            }
        } else {
            to_result(
                orchestrator,
                kind,
                orchestrator.generate_file(kind, Trigger::Manual),
            )
        };
        report.push(result);
    }
    report
}

/// Automatic trigger: regenerate targets with `auto_generate` set whose
/// names changed.
pub fn sync(orchestrator: &Orchestrator<'_>) -> GenerateReport {
    let mut report = GenerateReport::default();
    for (kind, outcome) in orchestrator.on_project_changed() {
        report.push(to_result(orchestrator, kind, outcome));
    }
    report
}

fn to_result(
    orchestrator: &Orchestrator<'_>,
    kind: TargetKind,
    outcome: Result<Outcome, GenerateError>,
) -> TargetResult {
    match outcome {
        Ok(outcome) => {
            let path = display_path(orchestrator.root(), &outcome.path);
            match outcome.action {
                Action::Written { changed } => TargetResult::Written {
                    kind,
                    path,
                    changed,
                },
                Action::Unchanged => TargetResult::Unchanged { kind, path },
            }
        }
        Err(err) => failed(kind, err),
    }
}

fn failed(kind: TargetKind, err: GenerateError) -> TargetResult {
    TargetResult::Failed {
        kind,
        message: render_error(err),
    }
}
