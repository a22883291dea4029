use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::{HostOverrides, DEFAULT_CONFIG_FILE};
use commands::{serve, show_config};

#[derive(Parser)]
#[command(name = "skycast")]
#[command(about = "Serves the SkyCast forecast page and its compiled frontend")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional, skipped when absent)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory with the compiled frontend (trunk `dist` output)
        #[arg(short, long)]
        static_dir: Option<PathBuf>,

        /// Directory served under /bgimg
        #[arg(long)]
        background_dir: Option<PathBuf>,
    },
    /// Print the effective configuration and exit
    ShowConfig,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                static_dir,
                background_dir,
            } => {
                let overrides = HostOverrides {
                    bind_address,
                    static_dir,
                    background_dir,
                };
                serve(&self.config, overrides).await?;
            }
            Commands::ShowConfig => {
                show_config(&self.config)?;
            }
        }
        Ok(())
    }
}
