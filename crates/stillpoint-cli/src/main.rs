//! Stillpoint CLI - guided meditation catalog and terminal player

mod play;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stillpoint_core::config::Config;
use stillpoint_core::domain::catalog::{
    CatalogService, DifficultyLevel, MeditationSession, MeditationType, SessionDetail,
};
use stillpoint_core::storage::{Database, DatabaseConfig};

#[derive(Parser)]
#[command(name = "stillpoint")]
#[command(author, version, about = "Guided meditation catalog and terminal player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database file (defaults to the per-user location)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List sessions in the catalog
    List {
        /// Filter by meditation type (e.g. breathing, body_scan)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Filter by difficulty level (beginner, intermediate, advanced)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Show a session and its instruction steps
    Show {
        /// Session id
        id: i64,
    },

    /// Play a session in the terminal
    Play {
        /// Session id
        id: i64,
    },

    /// Seed the sample catalog
    Seed,

    /// List categories
    Categories,

    /// Delete a session and its instructions
    Delete {
        /// Session id
        id: i64,
    },

    /// Run a database health check
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stillpoint=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let db_path = cli
        .database
        .clone()
        .unwrap_or_else(|| config.database_path());
    let db = Database::new(DatabaseConfig::with_path(db_path)).await?;
    let catalog = CatalogService::new(db.pool().clone());

    match cli.command {
        Commands::List { kind, difficulty } => {
            cmd_list(&catalog, kind.as_deref(), difficulty.as_deref(), cli.format, cli.quiet).await
        }
        Commands::Show { id } => cmd_show(&catalog, id, cli.format).await,
        Commands::Play { id } => cmd_play(&catalog, id, &config).await,
        Commands::Seed => cmd_seed(&catalog, cli.quiet).await,
        Commands::Categories => cmd_categories(&catalog, cli.format).await,
        Commands::Delete { id } => cmd_delete(&catalog, id, cli.quiet).await,
        Commands::Doctor => cmd_doctor(&db).await,
    }
}

fn parse_type(s: &str) -> anyhow::Result<MeditationType> {
    MeditationType::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = MeditationType::ALL.iter().map(|t| t.as_str()).collect();
        anyhow!("Unknown meditation type '{}'. Valid types: {}", s, valid.join(", "))
    })
}

fn parse_difficulty(s: &str) -> anyhow::Result<DifficultyLevel> {
    DifficultyLevel::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = DifficultyLevel::ALL.iter().map(|d| d.as_str()).collect();
        anyhow!("Unknown difficulty '{}'. Valid levels: {}", s, valid.join(", "))
    })
}

async fn cmd_list(
    catalog: &CatalogService,
    kind: Option<&str>,
    difficulty: Option<&str>,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    // First-run convenience: an empty catalog gets the sample sessions
    if catalog.ensure_sample_data().await? && !quiet {
        eprintln!("Seeded sample sessions into the empty catalog");
    }

    let sessions = match (kind, difficulty) {
        (Some(kind), None) => catalog.list_by_type(parse_type(kind)?).await?,
        (None, Some(level)) => catalog.list_by_difficulty(parse_difficulty(level)?).await?,
        (Some(kind), Some(level)) => {
            // Both filters: narrow the type listing by difficulty
            let level = parse_difficulty(level)?;
            catalog
                .list_by_type(parse_type(kind)?)
                .await?
                .into_iter()
                .filter(|s| s.difficulty_level == level)
                .collect()
        }
        (None, None) => catalog.list_active_sessions().await?,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sessions)?),
        OutputFormat::Text => print_session_table(&sessions, quiet),
    }
    Ok(())
}

fn print_session_table(sessions: &[MeditationSession], quiet: bool) {
    if sessions.is_empty() {
        println!("No sessions found. Try `stillpoint seed` or adjust your filters.");
        return;
    }
    if !quiet {
        println!(
            "{:>4}  {:<35} {:<16} {:<13} {:>7}",
            "ID", "TITLE", "TYPE", "LEVEL", "LENGTH"
        );
    }
    for session in sessions {
        println!(
            "{:>4}  {:<35} {:<16} {:<13} {:>4} min",
            session.id,
            session.title,
            session.meditation_type.label(),
            session.difficulty_level.label(),
            session.duration_minutes
        );
    }
}

async fn cmd_show(catalog: &CatalogService, id: i64, format: OutputFormat) -> anyhow::Result<()> {
    let Some(detail) = catalog.get_session(Some(id)).await? else {
        return Err(anyhow!("Session not found"));
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Text => print_session_detail(&detail),
    }
    Ok(())
}

fn print_session_detail(detail: &SessionDetail) {
    let session = &detail.session;
    println!("{} (#{})", session.title, session.id);
    println!("{}", session.description);
    println!(
        "{} · {} · {} min · ~{}s of timed steps",
        session.meditation_type.label(),
        session.difficulty_level.label(),
        session.duration_minutes,
        detail.total_seconds()
    );
    println!();

    if detail.instructions.is_empty() {
        println!("No instruction steps yet.");
        return;
    }

    for instruction in &detail.instructions {
        // Steps without a timer advance only on user input
        let timing = match instruction.duration_seconds {
            Some(seconds) if seconds > 0 => format!("{:>4}s", seconds),
            _ => "  key".to_string(),
        };
        println!(
            "  {:>3}. [{}] {}",
            instruction.step_order, timing, instruction.instruction_text
        );
    }
}

async fn cmd_play(catalog: &CatalogService, id: i64, config: &Config) -> anyhow::Result<()> {
    let Some(detail) = catalog.get_session(Some(id)).await? else {
        return Err(anyhow!("Session not found"));
    };
    play::run(detail, config.player.poll_interval_ms).await
}

async fn cmd_seed(catalog: &CatalogService, quiet: bool) -> anyhow::Result<()> {
    if catalog.ensure_sample_data().await? {
        if !quiet {
            println!("Seeded sample meditation sessions");
        }
    } else if !quiet {
        println!("Catalog already has sessions; nothing to do");
    }
    Ok(())
}

async fn cmd_categories(catalog: &CatalogService, format: OutputFormat) -> anyhow::Result<()> {
    let categories = catalog.list_categories().await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
        OutputFormat::Text => {
            if categories.is_empty() {
                println!("No categories defined.");
            }
            for category in categories {
                let color = category.color_code.as_deref().unwrap_or("-");
                println!("{:>4}  {:<25} {:<9} {}", category.id, category.name, color, category.description);
            }
        }
    }
    Ok(())
}

async fn cmd_delete(catalog: &CatalogService, id: i64, quiet: bool) -> anyhow::Result<()> {
    if catalog.delete_session(id).await? {
        if !quiet {
            println!("Deleted session {}", id);
        }
        Ok(())
    } else {
        Err(anyhow!("Session not found"))
    }
}

async fn cmd_doctor(db: &Database) -> anyhow::Result<()> {
    db.health_check().await?;
    let status = db.migration_status().await?;

    println!("Database: {}", db.path().display());
    println!("Health check: ok");
    println!(
        "Schema version: {} (latest {})",
        status.current_version, status.target_version
    );
    if status.needs_migration {
        println!("Migrations pending; they run automatically on next start");
    }
    Ok(())
}
