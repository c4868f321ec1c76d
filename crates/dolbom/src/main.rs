// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dolbom - webhook relay for a parenting-advice chatbot.
//!
//! This is the binary entry point for the Dolbom relay server.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use dolbom_config::DolbomConfig;

mod config_cmd;
mod serve;
mod shutdown;

/// Dolbom - webhook relay for a parenting-advice chatbot.
#[derive(Parser, Debug)]
#[command(name = "dolbom", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the relay server.
    Serve {
        /// Load configuration from this file instead of the search path.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Manage Dolbom configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Subcommands under `dolbom config`.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration with secrets redacted.
    Show {
        /// Load configuration from this file instead of the search path.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Write a commented starter config to the user config directory.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

/// Loads and validates configuration, exiting with rendered diagnostics on failure.
fn load_or_exit(path: Option<&Path>) -> DolbomConfig {
    let result = match path {
        Some(p) => dolbom_config::load_and_validate_from_path(p),
        None => dolbom_config::load_and_validate(),
    };
    match result {
        Ok(config) => config,
        Err(errors) => {
            dolbom_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { config }) => {
            let config = load_or_exit(config.as_deref());
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("dolbom serve: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config { command }) => {
            let result = match command {
                ConfigCommands::Show { config } => {
                    let config = load_or_exit(config.as_deref());
                    config_cmd::run_config_show(&config)
                }
                ConfigCommands::Init { force } => config_cmd::run_config_init(force),
            };
            if let Err(e) = result {
                eprintln!("dolbom config: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("dolbom: use --help for available commands");
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        super::Cli::command().debug_assert();
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config = dolbom_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.tasks.backend, "http");
    }
}
