//! CLI module for Duet
//!
//! Provides commands:
//! - `serve`: Start the HTTP server
//! - `doctor`: Check server settings and agent configuration

use clap::{Parser, Subcommand};

use crate::server::config::AppConfig;

pub mod doctor;

/// Duet multi-agent workflow CLI
#[derive(Parser, Debug)]
#[command(name = "duet")]
#[command(about = "Simulated Gemini + Jules multi-agent coding workflow service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Check configuration
    Doctor {
        /// Agent configuration file (overrides settings)
        #[arg(long)]
        agents_config: Option<String>,
    },
}

/// Overrides for the `serve` command
#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long)]
    pub host: Option<String>,
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,
    /// Agent configuration file
    #[arg(long)]
    pub agents_config: Option<String>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = self.agents_config {
            config.agents.config_path = path;
        }
        config
    }
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve(args)) => {
            let config = args.apply(crate::server::load_config()?);
            crate::server::run(config).await
        }
        Some(Commands::Doctor { agents_config }) => {
            let config = ServeArgs {
                agents_config,
                ..Default::default()
            }
            .apply(crate::server::load_config()?);
            doctor::run(config).await
        }
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
