//! Check operation - report target state without writing.

use std::path::Path;

use constgen_codegen::{GenerateError, Orchestrator};
use constgen_core::TargetKind;

use super::{display_path, render_error};
use crate::reports::{CheckReport, ExistingType, TargetStatus};

/// Evaluate every target.
pub fn check(orchestrator: &Orchestrator<'_>, config_path: &Path) -> CheckReport {
    let targets = TargetKind::ALL
        .into_iter()
        .map(|kind| target_status(orchestrator, kind))
        .collect();

    CheckReport {
        config: config_path.to_path_buf(),
        targets,
    }
}

fn target_status(orchestrator: &Orchestrator<'_>, kind: TargetKind) -> TargetStatus {
    let target = orchestrator.target(kind);
    let readiness = orchestrator.readiness(kind);
    let mut status = TargetStatus {
        target: kind,
        auto_generate: target.auto_generate,
        file: target.file_path.clone(),
        configured: readiness.is_ok(),
        error: None,
        existing: None,
        needs_regeneration: None,
    };

    if let Err(err) = readiness {
        status.error = Some(match err {
            GenerateError::NotConfigured { reason, .. } => reason,
            other => other.to_string(),
        });
        return status;
    }

    match orchestrator.evaluate(kind) {
        Ok(evaluation) => {
            status.existing = evaluation.existing.found().map(|found| ExistingType {
                assembly: found.assembly.clone(),
                path: display_path(orchestrator.root(), &found.path),
                members: found.snapshot.len(),
            });
            status.needs_regeneration = Some(evaluation.needs_regeneration);
        }
        Err(err) => status.error = Some(render_error(err)),
    }
    status
}
