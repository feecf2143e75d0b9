// file: src/main.rs
// version: 1.0.0
// guid: a5b6c7d8-e9f0-1234-5678-901234abcdef

//! Poster Daily Runner - Main entry point

use std::process::ExitCode;

use clap::Parser;
use poster_daily_runner::{
    cli::{
        args::{Cli, Commands},
        commands,
    },
    logging::logger,
    Result,
};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_init = if cli.log_json {
        logger::init_json_logger()
    } else {
        logger::init_logger(cli.verbose, cli.quiet)
    };
    if let Err(e) = log_init {
        eprintln!("{}", e);
        return ExitCode::from(e.exit_code());
    }

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // One line from the runner; the failing child's own stderr has
            // already reached the error stream.
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = commands::resolve_config(cli.config.as_deref(), cli.base_dir, cli.interpreter)?;

    match cli.command {
        Commands::Run {
            date,
            skip_products_sales,
            dry_run,
        } => commands::run_command(&config, date.as_deref(), skip_products_sales, dry_run).await,
        Commands::Import {
            date,
            skip_products_sales,
            dry_run,
        } => commands::import_command(&config, date.as_deref(), skip_products_sales, dry_run).await,
        Commands::Report { date, dry_run } => {
            commands::report_command(&config, date.as_deref(), dry_run).await
        }
        Commands::Check { json } => commands::check_command(&config, json).await,
    }
}
