// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! AQT provider command line.
//!
//! # Usage
//!
//! ```bash
//! # List the backend catalog
//! aqt-provider backends
//!
//! # Only devices
//! aqt-provider backends --device
//!
//! # Show one backend's configuration
//! aqt-provider show aqt_innsbruck
//!
//! # List portal workspaces (needs AQT_TOKEN)
//! aqt-provider workspaces
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aqt_provider::config::LoggingConfig;
use aqt_provider::{AqtProvider, BackendQuery, Config, Result, VERSION};

/// AQT backend provider
#[derive(Parser)]
#[command(name = "aqt-provider")]
#[command(author = "QubitOS Contributors")]
#[command(version = VERSION)]
#[command(about = "List and inspect Alpine Quantum Technologies backends")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// AQT access token
    #[arg(long, global = true, env = "AQT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List backends in the catalog
    Backends {
        /// Only the backend with this exact name
        #[arg(short, long)]
        name: Option<String>,

        /// Only simulators
        #[arg(long, conflicts_with = "device")]
        simulator: bool,

        /// Only devices
        #[arg(long)]
        device: bool,
    },

    /// Show the configuration of one backend
    Show {
        /// Backend name
        name: String,
    },

    /// List portal workspaces and their resources
    Workspaces,

    /// Show effective configuration
    Config,

    /// Validate configuration
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(token) = cli.token {
        config.provider.access_token = Some(token);
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Backends {
            name,
            simulator,
            device,
        } => {
            let provider = catalog_provider(&config)?;

            let mut query = BackendQuery::new();
            if let Some(name) = name {
                query = query.name(name);
            }
            if simulator {
                query = query.constraint("simulator", true);
            }
            if device {
                query = query.constraint("simulator", false);
            }

            let backends = provider.query(&query);
            if backends.is_empty() {
                eprintln!("No backend matches criteria.");
                std::process::exit(1);
            }

            println!("Backends of {}:", provider);
            for backend in backends {
                let config = backend.configuration();
                println!(
                    "  {} [{}] {} qubits, max {} shots",
                    backend.name(),
                    backend.backend_type(),
                    config.n_qubits,
                    config.max_shots
                );
            }
        }

        Commands::Show { name } => {
            let provider = catalog_provider(&config)?;
            match provider.backends().get(&name) {
                Ok(backend) => {
                    println!("{}", serde_yaml::to_string(backend.configuration())?);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Workspaces => {
            let provider = AqtProvider::from_config(&config)?;

            let workspaces = match provider.workspaces().await {
                Ok(workspaces) => workspaces,
                Err(e) => {
                    error!(error = %e, "Failed to list workspaces");
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            if workspaces.is_empty() {
                println!("(no workspaces available)");
            }
            for workspace in workspaces {
                println!("{}", workspace.id);
                for resource in workspace.resources {
                    println!(
                        "  {} [{}] {}",
                        resource.id, resource.resource_type, resource.name
                    );
                }
            }
        }

        Commands::Config => {
            println!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::Validate => match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Initialize logging with tracing.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

/// Provider for commands that only read the catalog and need no credential.
fn catalog_provider(config: &Config) -> Result<AqtProvider> {
    let mut config = config.clone();
    if config.provider.access_token.is_none() {
        debug!("No access token configured, using an empty one for catalog access");
        config.provider.access_token = Some(String::new());
    }
    AqtProvider::from_config(&config)
}
