//! Language-agnostic generation pipeline for constgen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - The [`LanguageCodegen`] seam implemented per target language
//! - [`source`] - Where tag and layer names come from ([`NameSource`])
//! - [`inspect`] - Recovering previously generated types from script files
//! - [`detect`] - Deciding whether a target may and must be regenerated
//! - [`orchestrator`] - Ties the above together behind manual/automatic triggers
//! - [`watch`] - Change notification driving the automatic trigger
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod detect;
pub mod inspect;
pub mod language;
pub mod orchestrator;
pub mod source;
pub mod watch;

mod error;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use detect::{can_generate, needs_regeneration, readiness};
pub use error::GenerateError;
pub use inspect::{FoundType, Inspection, SourceInspector};
pub use language::{LanguageCodegen, Member, members_snapshot};
pub use orchestrator::{Action, Evaluation, Orchestrator, Outcome, Preview, Trigger};
pub use source::{NameSource, SourceError, StaticNames, TagManagerSource};
pub use watch::{ChangeNotifier, FileWatcher, PollingNotifier, WatchError};
