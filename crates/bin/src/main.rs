//! `incomeview` - annual income statements for one company in the terminal.

mod cli;
mod config;
mod error;
mod render;

use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use incomeview::{Dashboard, FetchStatus};

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is not an error; the key may come from the environment.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = dotenv {
        debug!(error = %e, "No .env file loaded");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "incomeview=info",
        1 => "incomeview=debug",
        _ => "incomeview=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::from_cli(&cli);
    debug!(?config, "Configuration resolved");

    let mut dashboard = Dashboard::new(config.symbol.clone());
    match config.provider() {
        Ok(provider) => {
            dashboard.load(&provider).await;
        }
        Err(e) => {
            warn!(error = %e, "Provider unavailable");
            dashboard.set_status(FetchStatus::Failed(e.to_string()));
            return Err(CliError::Config(e.to_string()));
        }
    }

    if let FetchStatus::Failed(message) = dashboard.status() {
        return Err(CliError::Fetch(message.clone()));
    }

    for (field, input) in cli.filter_inputs() {
        dashboard.set_filter_field(field, input);
    }
    for column in &cli.sort {
        dashboard.set_sort((*column).into());
    }

    let symbol = dashboard.symbol().clone();
    let filters = *dashboard.filters();
    let sort = dashboard.sort();
    let view = dashboard.view();

    let output = match cli.format {
        OutputFormat::Text => render::render_text(&symbol, view, cli.view),
        OutputFormat::Json => render::render_json(&symbol, &filters, sort, view, cli.view)?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    Ok(())
}
