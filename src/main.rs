mod cli;
mod collector;
mod config;
mod credentials;
mod jira_client;
mod models;
mod renderer;

use clap::Parser;
use cli::Cli;
use collector::*;
use config::Config;
use owo_colors::OwoColorize;
use renderer::Renderer;
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error("Error writing report: {0}")]
    Output(#[from] std::io::Error),
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = if cli.color.enabled_on_stderr() {
                "Error:".red().bold().to_string()
            } else {
                "Error:".to_string()
            };
            eprintln!("{} {}", label, e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = Config::from_env();
    debug!("Using Jira at {}", config.base_url);

    let issues = collect_issues(&config, &cli.project, &cli.fix_version)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Renderer::new(cli.color.enabled()).render(&mut out, &issues)?;
    Ok(())
}
