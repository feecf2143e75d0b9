// file: src/cli/args.rs
// version: 1.0.0
// guid: c1d2e3f4-a5b6-7890-1234-567890cdefab

//! Command line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "poster-daily-runner")]
#[command(about = "Fail-fast daily pipeline runner for Poster data import and anomaly reporting")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true, env = "POSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Application base directory (overrides the config file)
    #[arg(short = 'b', long, global = true, env = "POSTER_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Interpreter executable (overrides the config file)
    #[arg(short = 'i', long, global = true, env = "POSTER_INTERPRETER")]
    pub interpreter: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit JSON log lines (for scheduler-driven runs)
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the daily pipeline: import, then anomaly report
    Run {
        #[arg(short, long, help = "Date in YYYY-MM-DD format; defaults to today")]
        date: Option<String>,

        #[arg(long, help = "Skip fetching product-sales data during the import")]
        skip_products_sales: bool,

        #[arg(long, help = "Show what would be invoked without invoking it")]
        dry_run: bool,
    },

    /// Run only the daily import
    Import {
        #[arg(short, long, help = "Date in YYYY-MM-DD format; defaults to today")]
        date: Option<String>,

        #[arg(long, help = "Skip fetching product-sales data during the import")]
        skip_products_sales: bool,

        #[arg(long)]
        dry_run: bool,
    },

    /// Run only the anomaly report
    Report {
        #[arg(short, long, help = "Date in YYYY-MM-DD format; defaults to today")]
        date: Option<String>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration and resolved paths without invoking anything
    Check {
        #[arg(short, long)]
        json: bool,
    },
}
