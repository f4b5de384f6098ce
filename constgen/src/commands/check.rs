use std::path::Path;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use crate::{
    ops,
    project::Project,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl CheckCommand {
    /// Exits with status 1 when an automatic target is out of date.
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = Project::open(config);
        let report = ops::check(&project.orchestrator(), project.config_path());

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .wrap_err("Failed to serialize check report")?;
                println!("{}", json);
            }
        }

        if report.is_stale() {
            std::process::exit(1);
        }
        Ok(())
    }
}
