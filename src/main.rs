//! CLI entry point for the surf rater.
//!
//! Scores a point forecast hour by hour, finds the best session window and
//! prints a surf report, either for a saved provider payload or for live
//! coordinates.

mod infra;
mod services;

use crate::infra::nominatim::client::NominatimClient;
use crate::infra::stormglass::client::StormglassClient;
use crate::services::surf_report::surf_report;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use surf_rater::analyzers::analyzer::analyze;
use surf_rater::config::Settings;
use surf_rater::{
    fetch::{BasicClient, fetch_bytes},
    output::{append_records, print_json, print_pretty},
    parser::parse_forecast,
    report::build_report,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "surf_rater")]
#[command(about = "Finds the best hours to surf from a point forecast", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a saved forecast payload from a file or URL
    Analyze {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// CSV file to append scored hours to
        #[arg(short, long, default_value = "scored_hours.csv")]
        output: String,

        /// Also log the full analysis as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Place name shown in the report
        #[arg(long, default_value = "Unknown spot")]
        place: String,
    },
    /// Fetch the live forecast for a location and print the surf report
    Report {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Place name shown in the report instead of the geocoded one
        #[arg(long)]
        place: Option<String>,

        /// Also log the full analysis as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env()?;

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&settings.log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&settings.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("surf_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            output,
            json,
            place,
        } => {
            let bytes = fetcher(&source).await?;
            let hours = parse_forecast(&bytes)
                .with_context(|| format!("failed to parse forecast from {source}"))?;
            let analysis = analyze(&hours, &settings.scoring, &settings.window);

            print_pretty(&analysis);
            if json {
                print_json(&analysis)?;
            }
            append_records(&output, &analysis.hours)?;

            info!(
                hours = analysis.hours.len(),
                best_score = analysis.best.score(),
                output = %output,
                "Forecast scored"
            );
            println!("{}", build_report(&place, &analysis));
        }
        Commands::Report {
            lat,
            lng,
            place,
            json,
        } => {
            let forecast = StormglassClient::new(settings.stormglass_api_key.as_deref())?;
            let geocoder = NominatimClient::new()?;

            let report = surf_report(
                &forecast,
                &geocoder,
                lat,
                lng,
                place.as_deref(),
                &settings,
            ).await?;
            if json {
                info!(place = %report.place, "Analysis for report");
                print_json(&report.analysis)?;
            }
            println!("{}", report.text);
        }
    }

    Ok(())
}

/// Loads a forecast payload from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %url))]
async fn fetcher(url: &str) -> Result<Vec<u8>> {
    let bytes = if url.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, url).await?
    } else {
        std::fs::read(url).with_context(|| format!("failed to read {url}"))?
    };
    Ok(bytes)
}
