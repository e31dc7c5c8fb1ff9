use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use hubbit_stats::config::{self, Config};
use hubbit_stats::domain::gateways::StatsGateway;
use hubbit_stats::server;
use tracing_subscriber::EnvFilter;

/// Session statistics page server.
#[derive(Parser)]
#[command(name = "hubbit-stats")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Validate configuration and probe the GraphQL endpoint
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    init_tracing(&config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            config.print_summary();
            server::run(config).await
        }
        Commands::Check => check(&config).await,
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn check(config: &Config) -> Result<()> {
    println!("{}", "Configuration".bold());
    println!("  {} {}", "Listen:".dimmed(), config.listen_addr);
    println!("  {} {}", "GraphQL:".dimmed(), config.graphql_endpoint()?);
    println!("  {} {}", "Config:".dimmed(), "valid".green());

    let gateway = server::build_gateway(config)?;

    if gateway.health_check().await {
        println!("  {} {}", "Upstream:".dimmed(), "reachable".green());
        Ok(())
    } else {
        println!("  {} {}", "Upstream:".dimmed(), "unreachable".red());
        anyhow::bail!("GraphQL endpoint did not answer the health probe")
    }
}
