use std::{path::Path, time::Duration};

use clap::Args;
use constgen_codegen::{ChangeNotifier, FileWatcher, PollingNotifier};
use eyre::{Context, Result};
use tracing::info;

use crate::{
    ops,
    project::Project,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct WatchCommand {
    /// Poll file metadata instead of subscribing to filesystem events
    #[arg(long)]
    pub poll: bool,

    /// Polling interval in milliseconds (with --poll)
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Quiet period that ends a burst of filesystem events, in milliseconds
    #[arg(long, default_value_t = 200)]
    pub debounce_ms: u64,
}

impl WatchCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = Project::open(config);
        let orchestrator = project.orchestrator();
        let mut out = TerminalOutput::new();

        // Bring everything up to date before waiting for changes.
        ops::sync(&orchestrator).render(&mut out);

        let paths = project.watched_paths();
        let mut notifier: Box<dyn ChangeNotifier> = if self.poll {
            info!(files = paths.len(), interval_ms = self.interval_ms, "polling for changes");
            Box::new(PollingNotifier::new(
                paths,
                Duration::from_millis(self.interval_ms),
            ))
        } else {
            info!(files = paths.len(), debounce_ms = self.debounce_ms, "watching for changes");
            Box::new(FileWatcher::new(paths).debounce(Duration::from_millis(self.debounce_ms)))
        };

        notifier
            .listen(&mut || ops::sync(&orchestrator).render(&mut out))
            .wrap_err("Failed to watch project files")
    }
}
