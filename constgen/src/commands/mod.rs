mod check;
mod completions;
mod generate;
mod init;
mod sync;
mod watch;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use sync::SyncCommand;
use watch::WatchCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for constgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "constgen")]
#[command(version)]
#[command(about = "Generate C# constants for Unity tags and layers")]
pub(crate) struct Cli {
    /// Path to constgen.toml
    #[arg(short, long, global = true, default_value = constgen_manifest::DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Log more (-v info, -vv debug); CONSTGEN_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.config),
            Commands::Sync(cmd) => cmd.run(&self.config),
            Commands::Check(cmd) => cmd.run(&self.config),
            Commands::Watch(cmd) => cmd.run(&self.config),
            Commands::Init(cmd) => cmd.run(&self.config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the generated files now, whether or not names changed
    Generate(GenerateCommand),

    /// Regenerate automatic targets whose names changed
    Sync(SyncCommand),

    /// Report which targets are out of date without writing
    Check(CheckCommand),

    /// Watch the tag manager and sync on every change
    Watch(WatchCommand),

    /// Create a constgen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
