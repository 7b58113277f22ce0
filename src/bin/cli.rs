//! Skywatch CLI
//!
//! Command-line interface for Skywatch operations:
//! - Render the dashboard in the terminal
//! - Check server status
//! - Generate a config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use skywatch::aggregator::{now_ms, DashboardAggregator, FetchError};
use skywatch::model::DashboardSnapshot;
use skywatch::report::{render_dashboard, render_failure};

#[derive(Parser)]
#[command(name = "skywatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "NASA space data dashboard")]
#[command(long_about = "Skywatch shows NASA's picture of the day, a media library search and\nthe near-Earth objects approaching this week.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard panels
    Dashboard {
        /// Media library search term (default: server setting)
        #[arg(short, long)]
        query: Option<String>,
        /// Bypass the server's snapshot cache
        #[arg(long)]
        refresh: bool,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    match cli.command {
        Commands::Dashboard { query, refresh } => {
            let mut aggregator = DashboardAggregator::default();
            let Some(ticket) = aggregator.mount(now_ms()) else {
                anyhow::bail!("dashboard did not request a fetch");
            };

            let result = fetch_dashboard(&client, &cli.api_url, query.as_deref(), refresh).await;
            aggregator.complete(ticket, result, now_ms());

            let status = aggregator.status();
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&status.views())?);
                }
                OutputFormat::Text => match status.error() {
                    Some(message) => print!("{}", render_failure(message)),
                    None => print!("{}", render_dashboard(&status.views())),
                },
            }

            if let Some(message) = status.error() {
                eprintln!();
                eprintln!("Make sure the Skywatch API server is running at {}:", cli.api_url);
                eprintln!("  cargo run --bin skywatch");
                anyhow::bail!("{}", message);
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if cli.format == OutputFormat::Json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!(
                        "Skywatch v{}",
                        health["version"].as_str().unwrap_or(env!("CARGO_PKG_VERSION"))
                    );
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );

                    if let Some(upstream) = health.get("upstream") {
                        println!();
                        println!("Upstream:");
                        println!("  API:    {}", upstream["api_url"].as_str().unwrap_or("-"));
                        println!("  Images: {}", upstream["images_url"].as_str().unwrap_or("-"));
                    }

                    let cache = &health["cache"];
                    println!();
                    match cache["age_seconds"].as_u64() {
                        Some(age) => println!(
                            "Cache: {} ({} old)",
                            if cache["fresh"].as_bool().unwrap_or(false) { "fresh" } else { "stale" },
                            format_duration(age)
                        ),
                        None => println!("Cache: empty"),
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    anyhow::bail!("API returned error: {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot connect to Skywatch API at {}", cli.api_url);
                    eprintln!();
                    eprintln!("Make sure the Skywatch API server is running:");
                    eprintln!("  cargo run --bin skywatch");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { output } => {
            let config = skywatch::config::generate_default_config();

            match output {
                Some(path) => {
                    std::fs::write(&path, config)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", config),
            }
        }
    }

    Ok(())
}

/// GET the composite payload, mapping every failure onto the aggregator's error type
async fn fetch_dashboard(
    client: &reqwest::Client,
    api_url: &str,
    query: Option<&str>,
    refresh: bool,
) -> Result<DashboardSnapshot, FetchError> {
    let mut request = client.get(format!("{}/api/v1/dashboard", api_url.trim_end_matches('/')));
    if let Some(q) = query {
        request = request.query(&[("q", q)]);
    }
    if refresh {
        request = request.query(&[("refresh", "true")]);
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["error"]["message"]
            .as_str()
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error"))
            .to_string();
        return Err(FetchError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<DashboardSnapshot>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
