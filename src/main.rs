//! Command line entry point for the Babyfoot League
//!
//! Loads configuration, connects to the roster store, and runs a single
//! league operation, printing the resulting standings.

use anyhow::Result;
use babyfoot_league::config::AppConfig;
use babyfoot_league::{HttpRosterStore, MatchRecorder, MatchSubmission, Player};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Babyfoot League - Elo standings for table-football matches
#[derive(Parser)]
#[command(
    name = "babyfoot-league",
    version,
    about = "Track Elo standings for 1v1 and 2v2 table-football matches",
    long_about = "Babyfoot League keeps a roster of players in a Firebase-compatible realtime \
                 database and updates their Elo ratings as matches are reported. Concurrent \
                 reports are serialized locally and checked against the store version so no \
                 update is lost."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Roster store URL override
    #[arg(long, value_name = "URL", help = "Override roster store base URL")]
    store_url: Option<String>,

    /// Request timeout override
    #[arg(long, value_name = "MS", help = "Override store request timeout")]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current standings
    List,
    /// Add a new player at the default rating
    Add {
        /// Player name (unique, case-sensitive)
        name: String,
    },
    /// Record a 1v1 result
    Solo {
        /// Winning player
        winner: String,
        /// Losing player
        loser: String,
    },
    /// Record a 2v2 result
    Duo {
        /// The two winning players
        #[arg(long, num_args = 2, required = true, value_names = ["PLAYER", "PLAYER"])]
        winners: Vec<String>,
        /// The two losing players
        #[arg(long, num_args = 2, required = true, value_names = ["PLAYER", "PLAYER"])]
        losers: Vec<String>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if let Some(store_url) = &args.store_url {
        config.store.url = store_url.clone();
    }

    if let Some(timeout_ms) = args.timeout_ms {
        config.store.request_timeout_ms = timeout_ms;
    }

    babyfoot_league::config::validate_config(&config)?;
    Ok(config)
}

/// Print standings as a ranked table
fn print_standings(players: &[Player]) {
    if players.is_empty() {
        println!("No players yet. Add one with `babyfoot-league add <NAME>`.");
        return;
    }

    println!(
        "{:>4}  {:<20} {:>6} {:>5} {:>5} {:>7}",
        "#", "Player", "Elo", "W", "L", "Win %"
    );
    for (rank, player) in players.iter().enumerate() {
        println!(
            "{:>4}  {:<20} {:>6} {:>5} {:>5} {:>6.1}%",
            rank + 1,
            player.id,
            player.rating,
            player.wins,
            player.losses,
            player.win_rate() * 100.0
        );
    }
}

async fn run(command: Command, recorder: &MatchRecorder) -> babyfoot_league::Result<Vec<Player>> {
    match command {
        Command::List => recorder.list_players().await,
        Command::Add { name } => recorder.add_player(&name).await,
        Command::Solo { winner, loser } => {
            recorder
                .record_match(&MatchSubmission::solo(winner, loser))
                .await
        }
        Command::Duo { winners, losers } => {
            let submission =
                MatchSubmission::new(babyfoot_league::MatchKind::Duo, winners, losers)?;
            recorder.record_match(&submission).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!("Service: {}", config.service.name);
    debug!("Roster store: {}", config.store.url);

    let store = match HttpRosterStore::new(&config.store) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to create roster store client: {}", e);
            std::process::exit(1);
        }
    };
    let recorder = MatchRecorder::new(store, &config);

    match run(args.command, &recorder).await {
        Ok(players) => {
            print_standings(&players);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            if e.is_retryable() {
                info!("The store may be busy or unreachable; try again");
            }
            std::process::exit(1);
        }
    }
}
