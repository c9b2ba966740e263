use chrono::{Local, NaiveDateTime};
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;
mod demo;
mod report;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use tasktrack::domain::Priority;
use tasktrack::store::TieBreak;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasktrack")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tasktrack.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    let default_level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => handle_demo_command(None, None, None, cli.json, config),
        Some(Commands::Demo {
            now,
            tie_break,
            min_priority,
        }) => handle_demo_command(*now, *tie_break, *min_priority, cli.json, config),
    }
}

fn handle_demo_command(
    now: Option<NaiveDateTime>,
    tie_break: Option<TieBreak>,
    min_priority: Option<Priority>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let now = now.unwrap_or_else(|| Local::now().naive_local());
    let mut store_config = config.store.clone();
    if let Some(tie_break) = tie_break {
        store_config.ordering.tie_break = tie_break;
    }
    info!("Running demo at {} (tie-break: {})", now, store_config.ordering.tie_break);

    let report = demo::run(store_config, now, min_priority);
    if json {
        println!("{}", report::render_json(&report).context("Failed to render JSON")?);
    } else {
        println!("{}", report::render_text(&report, &config.display));
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging at the configured level
    setup_logging(&config).context("Failed to setup logging")?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
