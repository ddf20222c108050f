//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::output::{today_stamp, OutputLayout};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::workflows;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the terminal
    pub async fn run(&self) -> Result<()> {
        let mut prompter = TerminalPrompter::new();
        self.run_with(&mut prompter).await
    }

    /// Run the CLI command, reading input from `prompter`
    pub async fn run_with(&self, prompter: &mut dyn Prompter) -> Result<()> {
        let settings = Settings::load(self.cli.config.as_deref(), self.cli.overrides())?;
        let layout = OutputLayout::new(&settings.output_dir);
        let stamp = today_stamp();
        let start = Instant::now();

        let api = workflows::connect(&settings, prompter).await?;

        match &self.cli.command {
            Commands::Licenses => {
                workflows::export_licenses(&api, &layout, &stamp).await?;
            }
            Commands::Packages { license } => {
                workflows::export_packages(&api, &layout, &stamp, license).await?;
            }
            Commands::Transfers { license } => {
                workflows::export_transfers(&api, prompter, &layout, &stamp, license.as_deref())
                    .await?;
            }
            Commands::Manifests => {
                let count = workflows::download_manifests(&api, &layout).await?;
                info!(count, "Manifest download complete");
            }
            Commands::Coas { license, manifest } => {
                let count = workflows::download_coas(
                    &api,
                    prompter,
                    &layout,
                    license.as_deref(),
                    manifest.as_deref(),
                )
                .await?;
                info!(count, "COA download complete");
            }
        }

        info!(elapsed_ms = start.elapsed().as_millis() as u64, "Done");
        Ok(())
    }
}
