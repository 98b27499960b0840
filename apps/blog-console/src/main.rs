//! # Luxe Blog Console
//!
//! Entry point wiring configuration, telemetry and storage around the post store.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod state;
mod telemetry;

use commands::Command;
use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "blog-console", about = "Write and browse Luxe Blog posts", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    let mut store = state::open_store(&config.storage);
    tracing::debug!(posts = store.len(), key = %config.storage.key, "Store opened");

    let output = commands::run(&mut store, cli.command)?;
    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}
