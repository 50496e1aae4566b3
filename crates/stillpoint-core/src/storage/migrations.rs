//! Database migrations
//!
//! This module manages SQLite schema migrations for the meditation catalog.
//! Migrations are versioned and applied automatically on database connection.

use sqlx::SqlitePool;

/// Current schema version
pub const CURRENT_VERSION: i32 = 2;

/// SQL for creating the migrations tracking table
const CREATE_MIGRATIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS _migrations (
        version INTEGER PRIMARY KEY NOT NULL,
        applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
"#;

/// Migration 1: Sessions and their ordered instructions
const MIGRATION_V1: &str = r#"
    -- Meditation sessions table
    CREATE TABLE IF NOT EXISTS meditation_sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        meditation_type TEXT NOT NULL CHECK (meditation_type IN (
            'breathing', 'mindfulness', 'body_scan', 'loving_kindness',
            'concentration', 'walking', 'visualization'
        )),
        difficulty_level TEXT NOT NULL DEFAULT 'beginner' CHECK (difficulty_level IN (
            'beginner', 'intermediate', 'advanced'
        )),
        duration_minutes INTEGER NOT NULL CHECK (duration_minutes BETWEEN 1 AND 120),
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX IF NOT EXISTS idx_sessions_is_active ON meditation_sessions(is_active);
    CREATE INDEX IF NOT EXISTS idx_sessions_type ON meditation_sessions(meditation_type);
    CREATE INDEX IF NOT EXISTS idx_sessions_difficulty ON meditation_sessions(difficulty_level);

    -- Instruction steps, ordered by step_order within a session
    CREATE TABLE IF NOT EXISTS meditation_instructions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id INTEGER NOT NULL REFERENCES meditation_sessions(id) ON DELETE CASCADE,
        step_order INTEGER NOT NULL CHECK (step_order >= 1),
        instruction_text TEXT NOT NULL,
        duration_seconds INTEGER CHECK (duration_seconds IS NULL OR duration_seconds >= 0),
        is_pause INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX IF NOT EXISTS idx_instructions_session_id ON meditation_instructions(session_id);
    CREATE INDEX IF NOT EXISTS idx_instructions_step_order ON meditation_instructions(session_id, step_order);
"#;

/// Migration 2: Categories and the session/category link table
const MIGRATION_V2: &str = r#"
    CREATE TABLE IF NOT EXISTS meditation_categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL DEFAULT '',
        color_code TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_name ON meditation_categories(name);

    CREATE TABLE IF NOT EXISTS session_category_links (
        session_id INTEGER NOT NULL REFERENCES meditation_sessions(id) ON DELETE CASCADE,
        category_id INTEGER NOT NULL REFERENCES meditation_categories(id) ON DELETE CASCADE,
        PRIMARY KEY (session_id, category_id)
    );
"#;

/// Run all pending migrations against the given pool
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    let current_version = get_current_version(pool).await?;

    tracing::info!(
        current_version = current_version,
        target_version = CURRENT_VERSION,
        "Checking database migrations"
    );

    if current_version >= CURRENT_VERSION {
        tracing::debug!("Database is up to date");
        return Ok(());
    }

    // Apply migrations in order
    if current_version < 1 {
        tracing::info!("Applying migration v1: Sessions and instructions");
        sqlx::raw_sql(MIGRATION_V1).execute(pool).await?;
        record_migration(pool, 1).await?;
    }

    if current_version < 2 {
        tracing::info!("Applying migration v2: Categories");
        sqlx::raw_sql(MIGRATION_V2).execute(pool).await?;
        record_migration(pool, 2).await?;
    }

    tracing::info!("Database migrations completed");
    Ok(())
}

/// Migration status report
#[derive(Debug, Clone)]
pub struct MigrationStatus {
    /// Current schema version in the database
    pub current_version: i32,
    /// Target schema version (latest)
    pub target_version: i32,
    /// Whether migrations need to be run
    pub needs_migration: bool,
}

/// Check the migration status of the given pool
pub async fn migration_status(pool: &SqlitePool) -> anyhow::Result<MigrationStatus> {
    let current_version = get_current_version(pool).await?;
    Ok(MigrationStatus {
        current_version,
        target_version: CURRENT_VERSION,
        needs_migration: current_version < CURRENT_VERSION,
    })
}

async fn get_current_version(pool: &SqlitePool) -> anyhow::Result<i32> {
    // Ensure migrations table exists
    sqlx::raw_sql(CREATE_MIGRATIONS_TABLE).execute(pool).await?;

    // MAX(version) is NULL when no migration has been recorded yet
    let row: (Option<i32>,) = sqlx::query_as("SELECT MAX(version) FROM _migrations")
        .fetch_one(pool)
        .await?;

    Ok(row.0.unwrap_or(0))
}

async fn record_migration(pool: &SqlitePool, version: i32) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO _migrations (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await?;
    Ok(())
}
