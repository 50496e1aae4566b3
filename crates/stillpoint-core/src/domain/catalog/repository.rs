//! Catalog repository for database operations
//!
//! Handles all database interactions for sessions, instructions, and
//! categories. Instructions always come back sorted by step order, with
//! id as the deterministic tie-break.

use super::entity::{
    DifficultyLevel, MeditationCategory, MeditationInstruction, MeditationSession, MeditationType,
    NewCategory, NewInstruction, NewSession,
};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Repository for catalog database operations
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ========== Sessions ==========

    /// Insert a new session and return it with its assigned id
    pub async fn insert_session(&self, new: &NewSession) -> Result<MeditationSession> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO meditation_sessions (
                title, description, meditation_type, difficulty_level,
                duration_minutes, is_active, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, 1, ?, ?)
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.meditation_type.as_str())
        .bind(new.difficulty_level.as_str())
        .bind(new.duration_minutes)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(MeditationSession {
            id: result.last_insert_rowid(),
            title: new.title.clone(),
            description: new.description.clone(),
            meditation_type: new.meditation_type,
            difficulty_level: new.difficulty_level,
            duration_minutes: new.duration_minutes,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a session by id
    pub async fn get_session(&self, id: i64) -> Result<Option<MeditationSession>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, meditation_type, difficulty_level,
                   duration_minutes, is_active, created_at, updated_at
            FROM meditation_sessions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SessionRow::into_session).transpose()
    }

    /// List all active sessions
    pub async fn list_active(&self) -> Result<Vec<MeditationSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, meditation_type, difficulty_level,
                   duration_minutes, is_active, created_at, updated_at
            FROM meditation_sessions
            WHERE is_active = 1
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SessionRow::into_session).collect()
    }

    /// List active sessions of a given meditation type
    pub async fn list_by_type(&self, kind: MeditationType) -> Result<Vec<MeditationSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, meditation_type, difficulty_level,
                   duration_minutes, is_active, created_at, updated_at
            FROM meditation_sessions
            WHERE meditation_type = ? AND is_active = 1
            "#,
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SessionRow::into_session).collect()
    }

    /// List active sessions of a given difficulty level
    pub async fn list_by_difficulty(
        &self,
        level: DifficultyLevel,
    ) -> Result<Vec<MeditationSession>> {
        let rows: Vec<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, meditation_type, difficulty_level,
                   duration_minutes, is_active, created_at, updated_at
            FROM meditation_sessions
            WHERE difficulty_level = ? AND is_active = 1
            "#,
        )
        .bind(level.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SessionRow::into_session).collect()
    }

    /// Delete a session; instructions and category links cascade
    pub async fn delete_session(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM meditation_sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all sessions, active or not
    pub async fn count_sessions(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM meditation_sessions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // ========== Instructions ==========

    /// Insert an instruction step and return it with its assigned id
    pub async fn insert_instruction(&self, new: &NewInstruction) -> Result<MeditationInstruction> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO meditation_instructions (
                session_id, step_order, instruction_text,
                duration_seconds, is_pause, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.session_id)
        .bind(new.step_order)
        .bind(&new.instruction_text)
        .bind(new.duration_seconds)
        .bind(new.is_pause)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(MeditationInstruction {
            id: result.last_insert_rowid(),
            session_id: new.session_id,
            step_order: new.step_order,
            instruction_text: new.instruction_text.clone(),
            duration_seconds: new.duration_seconds,
            is_pause: new.is_pause,
            created_at: now,
        })
    }

    /// Instructions for a session, sorted by step order then id
    pub async fn instructions_for(&self, session_id: i64) -> Result<Vec<MeditationInstruction>> {
        let rows: Vec<InstructionRow> = sqlx::query_as(
            r#"
            SELECT id, session_id, step_order, instruction_text,
                   duration_seconds, is_pause, created_at
            FROM meditation_instructions
            WHERE session_id = ?
            ORDER BY step_order ASC, id ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(InstructionRow::into_instruction).collect())
    }

    // ========== Categories ==========

    /// Insert a category and return it with its assigned id
    pub async fn insert_category(&self, new: &NewCategory) -> Result<MeditationCategory> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO meditation_categories (name, description, color_code, is_active, created_at)
            VALUES (?, ?, ?, 1, ?)
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.color_code)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::DuplicateCategory(new.name.clone())
            }
            _ => Error::DatabaseError(e),
        })?;

        Ok(MeditationCategory {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            description: new.description.clone(),
            color_code: new.color_code.clone(),
            is_active: true,
            created_at: now,
        })
    }

    /// List all active categories
    pub async fn list_categories(&self) -> Result<Vec<MeditationCategory>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, color_code, is_active, created_at
            FROM meditation_categories
            WHERE is_active = 1
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    /// Attach a session to a category
    pub async fn link_category(&self, session_id: i64, category_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO session_category_links (session_id, category_id)
            VALUES (?, ?)
            "#,
        )
        .bind(session_id)
        .bind(category_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Database row for a session, converted after fetch
#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: i64,
    title: String,
    description: String,
    meditation_type: String,
    difficulty_level: String,
    duration_minutes: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Result<MeditationSession> {
        let meditation_type = MeditationType::from_str(&self.meditation_type).ok_or_else(|| {
            Error::Parse(format!("Invalid meditation type: {}", self.meditation_type))
        })?;
        let difficulty_level =
            DifficultyLevel::from_str(&self.difficulty_level).ok_or_else(|| {
                Error::Parse(format!("Invalid difficulty level: {}", self.difficulty_level))
            })?;

        Ok(MeditationSession {
            id: self.id,
            title: self.title,
            description: self.description,
            meditation_type,
            difficulty_level,
            duration_minutes: self.duration_minutes,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InstructionRow {
    id: i64,
    session_id: i64,
    step_order: i64,
    instruction_text: String,
    duration_seconds: Option<i64>,
    is_pause: bool,
    created_at: DateTime<Utc>,
}

impl InstructionRow {
    fn into_instruction(self) -> MeditationInstruction {
        MeditationInstruction {
            id: self.id,
            session_id: self.session_id,
            step_order: self.step_order,
            instruction_text: self.instruction_text,
            duration_seconds: self.duration_seconds,
            is_pause: self.is_pause,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: String,
    color_code: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> MeditationCategory {
        MeditationCategory {
            id: self.id,
            name: self.name,
            description: self.description,
            color_code: self.color_code,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}
