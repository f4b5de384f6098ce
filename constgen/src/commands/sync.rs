use std::path::Path;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    project::Project,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SyncCommand {}

impl SyncCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = Project::open(config);
        let report = ops::sync(&project.orchestrator());
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
