//! Expense tracker: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/expense-tracker/config.toml)
//! expense-tracker
//!
//! # Custom config path
//! expense-tracker --config /etc/expense-tracker/config.toml
//!
//! # Override the port
//! expense-tracker --port 9090
//!
//! # Validate config without starting
//! expense-tracker --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use expense_tracker::config::{default_config_path, AppConfig};
use expense_tracker::server::{init_tracing, ServerHandle, ServerOptions};

/// Expense tracker REST server.
#[derive(Parser, Debug)]
#[command(
    name = "expense-tracker",
    version,
    about = "Personal expense tracking REST server",
    long_about = "Roles, users, expense types and expenses over a JSON REST API.\n\n\
                  Default config: ~/.config/expense-tracker/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "EXPENSE_TRACKER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the default admin user.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ───────────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let loaded = AppConfig::load(&config_path);
    if cli.check {
        return match loaded {
            Ok(mut config) => {
                if let Some(port) = cli.port {
                    config.server.port = port;
                }
                println!("Configuration is valid");
                println!("   Config file : {}", config_path.display());
                println!("   Address     : {}", config.address());
                println!("   Database    : {}", config.database.url);
                println!("   Log level   : {}", config.logging.level);
                Ok(())
            }
            Err(e) => {
                eprintln!("Invalid configuration {}: {}", config_path.display(), e);
                std::process::exit(1);
            }
        };
    }

    let mut config = match loaded {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(
                    cli.log_level.as_deref().unwrap_or("info"),
                ))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ──────────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Start server ─────────────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
