//! Cadence CLI application.
//!
//! Plans a goal into a time-blocked schedule, or renders a saved one.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::Settings;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        plan,
        command,
    } = Args::parse();

    let settings = Settings::load(config.as_deref()).context("Failed to load settings")?;
    let cli = Cli::new(settings, TerminalRenderer::new(!no_color));

    info!("Cadence started");

    match command {
        Some(Commands::Show(args)) => cli.show(args).await,
        None => cli.plan(plan).await,
    }
}
