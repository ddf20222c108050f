//! CLI commands and argument parsing

use crate::config::Overrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Export data from the Track and Trace Tools API
#[derive(Parser, Debug)]
#[command(name = "tracktrace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true, env = "TRACKTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Metrc hostname, e.g. ca.metrc.com
    #[arg(long, global = true, env = "TRACKTRACE_HOSTNAME")]
    pub hostname: Option<String>,

    /// Metrc username
    #[arg(short, long, global = true, env = "TRACKTRACE_USERNAME")]
    pub username: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = "TRACKTRACE_BASE_URL")]
    pub base_url: Option<String>,

    /// Output directory
    #[arg(short, long, global = true, env = "TRACKTRACE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Records per page for paginated endpoints
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings overrides carried by the flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            hostname: self.hostname.clone(),
            username: self.username.clone(),
            output_dir: self.output_dir.clone(),
            page_size: self.page_size,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write all licenses to licenses_<date>.csv
    Licenses,

    /// Write all active packages of a license to packages_<date>.csv
    Packages {
        /// License number
        #[arg(short, long)]
        license: String,
    },

    /// Write the outgoing transfers of a license to transfers_<date>.csv
    Transfers {
        /// License number (prompted for when omitted)
        #[arg(short, long)]
        license: Option<String>,
    },

    /// Download the manifest PDF of every outgoing transfer of every license
    Manifests,

    /// Download the lab result (COA) PDFs of one outgoing transfer
    Coas {
        /// License number (prompted for when omitted)
        #[arg(short, long)]
        license: Option<String>,

        /// Manifest number (prompted for when omitted)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_packages() {
        let cli = Cli::try_parse_from([
            "tracktrace",
            "--hostname",
            "ca.metrc.com",
            "-u",
            "jdoe",
            "packages",
            "--license",
            "LIC-1",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Packages {
                license: "LIC-1".to_string()
            }
        );
        let overrides = cli.overrides();
        assert_eq!(overrides.hostname.as_deref(), Some("ca.metrc.com"));
        assert_eq!(overrides.username.as_deref(), Some("jdoe"));
    }

    #[test]
    fn test_packages_requires_license() {
        assert!(Cli::try_parse_from(["tracktrace", "packages"]).is_err());
    }

    #[test]
    fn test_parse_coas_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tracktrace",
            "coas",
            "-m",
            "0001",
            "--page-size",
            "50",
            "-v",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Coas {
                license: None,
                manifest: Some("0001".to_string())
            }
        );
        assert_eq!(cli.page_size, Some(50));
        assert!(cli.verbose);
    }
}
