//! # Arcanum CLI (`arcanum`)
//!
//! The `arcanum` binary loads the built-in esoteric dataset into SQLite,
//! reports on it, and serves it over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! arcanum --config ./config/arcanum.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `arcanum init` | Create the schema and load the dataset |
//! | `arcanum stats` | Print entity counts and dataset status |
//! | `arcanum card <number>` | Print one card's cross-system correspondences |
//! | `arcanum serve` | Start the HTTP API |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcanum::{config, correspond, db, seed, server, stats};

/// Arcanum: a read-only esoteric knowledge API.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/arcanum.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "arcanum",
    about = "Arcanum: tarot, Tree of Life, astrology and ritual correspondences over HTTP",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/arcanum.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema and load the built-in dataset.
    ///
    /// Safe to run repeatedly: a store that already holds the current
    /// dataset is left as is.
    Init,

    /// Show what the knowledge store holds.
    Stats,

    /// Print a card's Qabalah and astrology correspondences as JSON.
    Card {
        /// Card number, 0-77.
        number: i64,
    },

    /// Start the HTTP server.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arcanum=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            let pool = db::connect(&cfg).await?;
            let outcome = seed::init(&pool).await?;
            if outcome.reloaded {
                println!("Dataset loaded ({}).", outcome.fingerprint);
            } else {
                println!("Dataset already current ({}).", outcome.fingerprint);
            }
            let c = &outcome.counts;
            println!(
                "  {} cards, {} keywords, {} system descriptions",
                c.cards, c.keywords, c.system_descriptions
            );
            println!(
                "  {} sephiroth, {} paths, {} planets, {} signs, {} rituals",
                c.sephiroth, c.paths, c.planets, c.zodiac_signs, c.rituals
            );
            pool.close().await;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
        Commands::Card { number } => {
            let pool = db::connect(&cfg).await?;
            seed::ensure_seeded(&pool, cfg.server.auto_seed).await?;
            let mut conn = pool.acquire().await?;
            let view = correspond::resolve(&mut conn, number).await?;
            println!("{}", serde_json::to_string_pretty(&view)?);
            drop(conn);
            pool.close().await;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
