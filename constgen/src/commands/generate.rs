use std::path::Path;

use clap::{Args, ValueEnum};
use constgen_core::TargetKind;
use eyre::Result;

use crate::{
    ops,
    project::Project,
    reports::{Report, TerminalOutput},
};

/// Which targets to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Tags,
    Layers,
    All,
}

impl TargetArg {
    fn kinds(self) -> &'static [TargetKind] {
        match self {
            TargetArg::Tags => &[TargetKind::Tags],
            TargetArg::Layers => &[TargetKind::Layers],
            TargetArg::All => &TargetKind::ALL,
        }
    }
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Target to generate
    #[arg(value_enum, default_value_t = TargetArg::All)]
    pub target: TargetArg,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = Project::open(config);
        let orchestrator = project.orchestrator();

        let report = ops::generate(&orchestrator, self.target.kinds(), self.dry_run);
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
