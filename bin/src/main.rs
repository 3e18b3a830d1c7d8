//! vaxrisk CLI - Infection risk by vaccination status from regional case data.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

mod commands;
mod display;
mod session;

use commands::model::ModelArgs;
use commands::pages::Page;
use display::Format;
use session::Session;

#[derive(Parser)]
#[command(name = "vaxrisk")]
#[command(
    about = "Estimate the probability of an active infection by vaccination status",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Cache directory, overriding the configuration file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Session date (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    date: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page
    Home,

    /// Estimate the infection risk for a location
    Model {
        /// Country (prompted when omitted)
        #[arg(short, long)]
        country: Option<String>,

        /// Region, state or province; "All" for the whole country
        #[arg(short, long)]
        region: Option<String>,

        /// Sub-region or county; "All" for the whole region
        #[arg(short, long)]
        sub_region: Option<String>,

        /// Infection detection rate in percent
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
        detection_rate: Option<u8>,

        /// Estimated vaccine efficacy in percent
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
        efficacy: Option<u8>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Also write the resolved daily series to this file (.csv, .json or .txt)
        #[arg(long)]
        series: Option<PathBuf>,

        /// Never prompt; use defaults for anything not given
        #[arg(long)]
        no_input: bool,
    },

    /// Show how the model works
    About,

    /// Show the disclaimer
    Disclaimer,

    /// List the countries in the current data
    Countries,

    /// List the regions of a country, or the sub-regions of a region
    Regions {
        /// Country
        country: String,

        /// Region whose sub-regions to list
        region: Option<String>,
    },

    /// Download and cache the data for the session date
    Fetch,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let today = match cli.date.as_deref() {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {s}"))?,
        None => chrono::Local::now().date_naive(),
    };
    let session = Session::new(cli.config.as_deref(), cli.data_dir, today, cli.quiet)?;

    match command {
        Commands::Home => commands::pages::show(Page::Home, &session).await,
        Commands::Model {
            country,
            region,
            sub_region,
            detection_rate,
            efficacy,
            format,
            series,
            no_input,
        } => {
            let args = ModelArgs {
                country,
                region,
                sub_region,
                detection_rate,
                efficacy,
                format,
                series,
                interactive: !no_input && display::is_interactive(),
            };
            commands::pages::show(Page::Model(args), &session).await
        }
        Commands::About => commands::pages::show(Page::About, &session).await,
        Commands::Disclaimer => commands::pages::show(Page::Disclaimer, &session).await,
        Commands::Countries => commands::list::list_countries(&session).await,
        Commands::Regions { country, region } => {
            commands::list::list_regions(&session, &country, region.as_deref()).await
        }
        Commands::Fetch => commands::fetch::fetch(&session).await,
    }
}
