//! Generation orchestrator.
//!
//! Each call walks one target through
//! `Idle → Evaluating → (NoChange | Generating → Idle)`. Nothing is kept
//! between calls: names and the prior type are read fresh every time, so a
//! call made right after a successful write finds nothing to do.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use constgen_core::TargetKind;
use constgen_manifest::{Manifest, TargetConfig};
use tracing::{debug, info};

use crate::{
    GenerateError,
    detect::{needs_regeneration, readiness},
    inspect::{Inspection, SourceInspector},
    language::{LanguageCodegen, Member, members_snapshot},
    source::{NameSource, TagManagerSource},
};

/// What asked for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// An explicit request; always writes
    Manual,
    /// A project change notification; writes only when something changed
    Automatic,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Manual => write!(f, "manual"),
            Trigger::Automatic => write!(f, "automatic"),
        }
    }
}

/// What happened to the target's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The file was written. `changed` is false when a manual trigger
    /// rewrote members identical to the prior type.
    Written { changed: bool },
    /// The prior type already matched; nothing was written.
    Unchanged,
}

/// Result of a successful [`Orchestrator::generate_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: TargetKind,
    pub path: PathBuf,
    pub action: Action,
    pub trigger: Trigger,
}

impl Outcome {
    pub fn written(&self) -> bool {
        matches!(self.action, Action::Written { .. })
    }
}

/// Current members of a target compared against its prior type.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub kind: TargetKind,
    pub members: Vec<Member>,
    pub existing: Inspection,
    pub needs_regeneration: bool,
}

/// Rendered output of a target, not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub kind: TargetKind,
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Evaluating,
    NoChange,
    Generating,
}

/// Ties a name source, the prior generated types and a language generator
/// together for the targets of one manifest.
pub struct Orchestrator<'a> {
    manifest: &'a Manifest,
    root: PathBuf,
    names: Box<dyn NameSource + 'a>,
    lang: Box<dyn LanguageCodegen + 'a>,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator for the project at `root`, the directory paths
    /// in `manifest` are relative to.
    pub fn new(
        manifest: &'a Manifest,
        root: impl Into<PathBuf>,
        names: impl NameSource + 'a,
        lang: impl LanguageCodegen + 'a,
    ) -> Self {
        Self {
            manifest,
            root: root.into(),
            names: Box::new(names),
            lang: Box::new(lang),
        }
    }

    /// Create an orchestrator reading names from the project's tag manager
    /// asset.
    pub fn for_project(
        manifest: &'a Manifest,
        root: impl Into<PathBuf>,
        lang: impl LanguageCodegen + 'a,
    ) -> Self {
        let root = root.into();
        let names = TagManagerSource::new(manifest.project.tag_manager_path(&root));
        Self::new(manifest, root, names, lang)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target(&self, kind: TargetKind) -> &TargetConfig {
        self.manifest.target(kind)
    }

    /// Where the target's file is written.
    pub fn output_path(&self, kind: TargetKind) -> PathBuf {
        self.target(kind).output_path(&self.root)
    }

    /// Whether the target is configured well enough to be generated.
    pub fn can_generate(&self, kind: TargetKind) -> bool {
        self.readiness(kind).is_ok()
    }

    /// Like [`can_generate`](Self::can_generate), with the reason on failure.
    pub fn readiness(&self, kind: TargetKind) -> Result<(), GenerateError> {
        readiness(self.target(kind), self.lang.file_extension())
            .map_err(|reason| GenerateError::NotConfigured { target: kind, reason })
    }

    /// Members the target would be generated with right now.
    pub fn members(&self, kind: TargetKind) -> Result<Vec<Member>, GenerateError> {
        let target = self.target(kind);
        let members = match kind {
            TargetKind::Tags => {
                let tags = self.names.current_tags()?;
                self.lang.tag_members(&target.type_name, &tags)
            }
            TargetKind::Layers => {
                let layers = self.names.current_layers()?;
                self.lang.layer_members(&target.type_name, &layers)
            }
        };
        members.map_err(|source| GenerateError::InvalidName { target: kind, source })
    }

    /// Look for the previously generated type of the target.
    pub fn inspect(&self, kind: TargetKind) -> Result<Inspection, GenerateError> {
        let target = self.target(kind);
        let roots = self.manifest.project.source_root_paths(&self.root);
        let hint = target.output_path(&self.root);
        SourceInspector::new(roots, self.lang.as_ref()).inspect(
            kind,
            &target.type_name,
            Some(&hint),
            target.assembly(),
        )
    }

    /// Compare the target's current members with its prior type.
    pub fn evaluate(&self, kind: TargetKind) -> Result<Evaluation, GenerateError> {
        self.readiness(kind)?;
        let members = self.members(kind)?;
        let existing = self.inspect(kind)?;
        let needs_regeneration = needs_regeneration(&members_snapshot(&members), &existing);

        Ok(Evaluation {
            kind,
            members,
            existing,
            needs_regeneration,
        })
    }

    /// Render the target without writing it.
    pub fn preview(&self, kind: TargetKind) -> Result<Preview, GenerateError> {
        self.readiness(kind)?;
        let members = self.members(kind)?;
        let file = self.lang.file(self.target(kind), members);
        Ok(Preview {
            kind,
            path: file.path(&self.root),
            content: file.render(),
        })
    }

    /// Generate one target.
    ///
    /// Nothing is written when the target is not configured, names cannot
    /// be read, or the prior type is ambiguous. A manual trigger then always
    /// writes; an automatic one only when the members changed.
    pub fn generate_file(
        &self,
        kind: TargetKind,
        trigger: Trigger,
    ) -> Result<Outcome, GenerateError> {
        enter(kind, Phase::Evaluating);
        let evaluation = self.evaluate(kind).inspect_err(|_| enter(kind, Phase::Idle))?;
        let path = self.output_path(kind);

        if trigger == Trigger::Automatic && !evaluation.needs_regeneration {
            enter(kind, Phase::NoChange);
            info!(target_kind = %kind, path = %path.display(), "up to date");
            enter(kind, Phase::Idle);
            return Ok(Outcome {
                kind,
                path,
                action: Action::Unchanged,
                trigger,
            });
        }

        enter(kind, Phase::Generating);
        let file = self.lang.file(self.target(kind), evaluation.members);
        let written = file.write(&self.root);
        enter(kind, Phase::Idle);
        written.map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;

        info!(
            target_kind = %kind,
            path = %path.display(),
            %trigger,
            language = self.lang.language(),
            changed = evaluation.needs_regeneration,
            "generated"
        );
        Ok(Outcome {
            kind,
            path,
            action: Action::Written {
                changed: evaluation.needs_regeneration,
            },
            trigger,
        })
    }

    /// Automatic entry point: generate every target with `auto_generate`
    /// set, writing only what changed. Each target reports separately.
    pub fn on_project_changed(&self) -> Vec<(TargetKind, Result<Outcome, GenerateError>)> {
        self.manifest
            .targets()
            .filter(|target| {
                if !target.auto_generate {
                    debug!(target_kind = %target.kind, "automatic generation disabled");
                }
                target.auto_generate
            })
            .map(|target| (target.kind, self.generate_file(target.kind, Trigger::Automatic)))
            .collect()
    }
}

fn enter(kind: TargetKind, phase: Phase) {
    debug!(target_kind = %kind, ?phase, "phase");
}
