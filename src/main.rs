use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;

#[derive(Parser)]
#[command(
    name = "sentinelvoice",
    about = "Security operations pipeline with auto-remediation analysis and voice alerts",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the daemon (API server + intake pipeline)
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },

    /// Analyze a single alert without storing it or synthesizing audio
    Analyze {
        /// Path to an alert JSON file; reads stdin when omitted
        #[arg(long)]
        file: Option<String>,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a .env file during development.
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            tracing::info!(%bind, "Starting SentinelVoice daemon");
            sentinelvoice::serve(&bind).await?;
        }
        Commands::Analyze { file, json } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading alert file {}", path))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading alert from stdin")?;
                    buf
                }
            };
            let value: serde_json::Value =
                serde_json::from_str(&raw).context("alert payload is not valid JSON")?;

            let alert = sentinelvoice::analyze::normalize(value)?;
            let analysis = sentinelvoice::analyze::classify(&alert);

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("\nSentinelVoice Threat Analysis");
                println!("Incident:   {}", analysis.incident_id);
                println!("Summary:    {}", analysis.summary);
                println!("Risk score: {}/100", analysis.risk_score);
                println!("\nReasoning:");
                for step in &analysis.reasoning {
                    println!(" - {}", step);
                }
                if analysis.recommended_actions.is_empty() {
                    println!("\nNo remediation playbook for this category.");
                } else {
                    println!("\nActions taken:");
                    for action in &analysis.recommended_actions {
                        println!(" - {}", action);
                    }
                }
                println!();
            }
        }
    }

    Ok(())
}
