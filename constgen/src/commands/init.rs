use std::path::Path;

use clap::Args;
use constgen_core::{File, WriteResult};
use constgen_manifest::default_manifest;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Namespace for the generated types
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Overwrite an existing configuration without asking
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let file = File::new(config, default_manifest(self.namespace.as_deref()));
        let overwrite = self.force || (file.exists() && Self::confirm_overwrite(config)?);
        let file = if overwrite { file } else { file.if_missing() };

        let result = file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", config.display()))?;
        match result {
            WriteResult::Written => {
                println!("Created {}", config.display());
                println!("Run `constgen generate` to write the tag and layer constants.");
            }
            WriteResult::Skipped => println!("Left {} unchanged", config.display()),
        }
        Ok(())
    }

    fn confirm_overwrite(config: &Path) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite it?", config.display()))
            .default(false)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}
