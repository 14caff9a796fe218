use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtside::api::state::AppState;
use courtside::calculate::{calculate_radar_stats, top_three_stats};
use courtside::config::AppConfig;
use courtside::fetch::{FileSource, HttpSource, HttpSourceConfig, RatingsSource};
use courtside::ingest;
use courtside::parse_duration;
use courtside::storage::{self, StorageConfig};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Local NBA 2K player ratings tracker with derived stats API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a scraped ratings payload and write a snapshot
    Ingest {
        /// Read the payload from a local file instead of the
        /// configured HTTP source
        #[arg(long)]
        file: Option<String>,

        /// Fetch and decode but don't write a snapshot
        #[arg(long)]
        dry_run: bool,

        /// Keep ingesting at an interval (e.g., "6h", "30m")
        #[arg(long)]
        watch: bool,

        /// Ingest interval when watching
        #[arg(long, default_value = "6h")]
        interval: String,
    },

    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a player's derived stats
    Stats {
        /// Player ID or name
        player: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting courtside v{}", env!("CARGO_PKG_VERSION"));

    // Load config; a missing file just means defaults
    let config_path = PathBuf::from(&cli.config);
    let mut config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }

    let storage_config = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Ingest {
            file,
            dry_run,
            watch,
            interval,
        } => {
            let source: Arc<dyn RatingsSource> = match file {
                Some(path) => Arc::new(FileSource::new(PathBuf::from(path))),
                None => Arc::new(HttpSource::new(HttpSourceConfig {
                    payload_url: config.source.payload_url.clone(),
                    timeout: std::time::Duration::from_secs(config.source.timeout_seconds),
                    user_agent: config.source.user_agent.clone(),
                })?),
            };

            if watch {
                let period = parse_duration(&interval)
                    .unwrap_or(std::time::Duration::from_secs(6 * 3600));
                tracing::info!("Ingesting every {:?} from {}", period, source.describe());
                loop {
                    if let Err(e) = run_ingest(&*source, &storage_config, dry_run).await {
                        tracing::error!("Ingest failed: {}", e);
                    }
                    tokio::time::sleep(period).await;
                }
            } else {
                run_ingest(&*source, &storage_config, dry_run).await?;
            }
        }
        Commands::Serve { host, port } => {
            let roster = storage::read_latest(&storage_config)?;
            if roster.is_empty() {
                tracing::warn!("No snapshots found; serving an empty roster");
            }

            let state = AppState::new(storage_config, roster);
            let app = courtside::api::build_router(state);

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("API listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Stats { player } => {
            let roster = storage::read_latest(&storage_config)?;
            let found = roster
                .iter()
                .find(|p| p.id.as_str() == player || p.name.eq_ignore_ascii_case(&player));

            match found {
                Some(p) => {
                    let composite = calculate_radar_stats(p);
                    println!("{} ({})", p.name, p.team.as_deref().unwrap_or("free agent"));
                    println!("  Overall:         {}", composite.overall);
                    println!("  Inside scoring:  {}", composite.inside_scoring);
                    println!("  Outside scoring: {}", composite.outside_scoring);
                    println!("  Playmaking:      {}", composite.playmaking);
                    println!("  Athleticism:     {}", composite.athleticism);
                    println!("  Rebounding:      {}", composite.rebounding);
                    println!("  Defending:       {}", composite.defending);

                    let top = top_three_stats(p);
                    if !top.is_empty() {
                        println!("  Top attributes:");
                        for stat in top {
                            println!("    {} {}", stat.value, stat.label);
                        }
                    }
                }
                None => {
                    eprintln!("No player matching '{}'", player);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Fetch one payload, decode it, and write a snapshot.
async fn run_ingest(
    source: &dyn RatingsSource,
    storage_config: &StorageConfig,
    dry_run: bool,
) -> Result<()> {
    tracing::info!("Ingesting from {}", source.describe());
    let payload = source.fetch_payload().await?;
    let report = ingest::parse_players(&payload)?;

    println!("Decoded {} players", report.players.len());
    if report.skipped > 0 {
        println!("  {} records skipped (no overall rating)", report.skipped);
    }
    if report.duplicates_replaced > 0 {
        println!("  {} duplicate records replaced", report.duplicates_replaced);
    }
    if report.values_dropped > 0 {
        println!("  {} attribute values dropped", report.values_dropped);
    }

    if dry_run {
        println!("(dry run - no snapshot written)");
        return Ok(());
    }

    storage::write_raw_payload(storage_config, &payload)?;
    let path = storage::write_snapshot(storage_config, &report.players)?;
    println!("Snapshot written to {}", path.display());
    Ok(())
}
