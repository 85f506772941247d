//! One-shot trigger for the agent chain
//!
//! Runs scrape → summarize → compose → publish → write-back once, without
//! the HTTP server, and prints the final state as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use social_agent::domains::agent::{run_agent, Network, WorkflowState};
use social_agent::kernel::ServerDeps;
use social_agent::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "run_agent")]
#[command(about = "Run the social media agent once")]
struct Cli {
    /// Article URL; when omitted the latest link in the sheet is used
    #[arg(long)]
    url: Option<String>,

    /// Network to write for and publish to (overrides PUBLISH_NETWORK)
    #[arg(long)]
    network: Option<Network>,

    /// Pretty-print the final state
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,social_agent=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(network) = cli.network {
        config.publish_network = network;
    }

    let deps = ServerDeps::from_config(&config)
        .await
        .context("Failed to initialize dependencies")?;

    let final_state = run_agent(&deps, WorkflowState::for_url(cli.url)).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&final_state)?
    } else {
        serde_json::to_string(&final_state)?
    };
    println!("{}", output);

    Ok(())
}
