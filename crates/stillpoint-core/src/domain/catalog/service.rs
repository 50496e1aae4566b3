//! Catalog service: validated reads and writes over the repository
//!
//! This is the query service from the player's and catalog view's point of
//! view. Missing sessions are `Ok(None)`, never an error; constraint
//! violations fail before anything is written.

use super::entity::{
    DifficultyLevel, MeditationCategory, MeditationInstruction, MeditationSession, MeditationType,
    NewCategory, NewInstruction, NewSession, SessionDetail,
};
use super::repository::CatalogRepository;
use super::{sample, validation};
use crate::error::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

/// Service layer for meditation catalog management
#[derive(Debug, Clone)]
pub struct CatalogService {
    repository: CatalogRepository,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CatalogRepository::new(pool),
        }
    }

    /// Get the underlying repository
    pub fn repository(&self) -> &CatalogRepository {
        &self.repository
    }

    /// All sessions with is_active = true
    pub async fn list_active_sessions(&self) -> Result<Vec<MeditationSession>> {
        self.repository.list_active().await
    }

    /// A session with its instructions preloaded, sorted by step order
    ///
    /// An absent id and an unknown id both yield `Ok(None)`.
    pub async fn get_session(&self, id: Option<i64>) -> Result<Option<SessionDetail>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let Some(session) = self.repository.get_session(id).await? else {
            return Ok(None);
        };

        let instructions = self.repository.instructions_for(id).await?;
        Ok(Some(SessionDetail {
            session,
            instructions,
        }))
    }

    /// Active sessions of the given type
    pub async fn list_by_type(&self, kind: MeditationType) -> Result<Vec<MeditationSession>> {
        self.repository.list_by_type(kind).await
    }

    /// Active sessions of the given difficulty
    pub async fn list_by_difficulty(
        &self,
        level: DifficultyLevel,
    ) -> Result<Vec<MeditationSession>> {
        self.repository.list_by_difficulty(level).await
    }

    /// Create a new session after validating its fields
    pub async fn create_session(&self, new: NewSession) -> Result<MeditationSession> {
        validation::validate_new_session(&new)?;
        let session = self.repository.insert_session(&new).await?;
        info!(session_id = session.id, title = %session.title, "Created meditation session");
        Ok(session)
    }

    /// Add an instruction step to an existing session
    pub async fn add_instruction(&self, new: NewInstruction) -> Result<MeditationInstruction> {
        validation::validate_new_instruction(&new)?;

        if self.repository.get_session(new.session_id).await?.is_none() {
            return Err(Error::SessionNotFound(new.session_id));
        }

        self.repository.insert_instruction(&new).await
    }

    /// Delete a session; its instructions and category links go with it
    pub async fn delete_session(&self, id: i64) -> Result<bool> {
        let deleted = self.repository.delete_session(id).await?;
        if deleted {
            info!(session_id = id, "Deleted meditation session");
        }
        Ok(deleted)
    }

    /// All active categories
    pub async fn list_categories(&self) -> Result<Vec<MeditationCategory>> {
        self.repository.list_categories().await
    }

    /// Create a category after validating its fields
    pub async fn create_category(&self, new: NewCategory) -> Result<MeditationCategory> {
        validation::validate_new_category(&new)?;
        self.repository.insert_category(&new).await
    }

    /// Seed the sample catalog when the store is empty
    ///
    /// Returns true when sample data was created on this call.
    pub async fn ensure_sample_data(&self) -> Result<bool> {
        if self.repository.count_sessions().await? > 0 {
            return Ok(false);
        }

        for script in sample::sample_sessions() {
            let session = self.create_session(script.session).await?;
            for (order, (text, seconds)) in script.steps.iter().enumerate() {
                self.add_instruction(NewInstruction {
                    session_id: session.id,
                    step_order: (order + 1) as i64,
                    instruction_text: (*text).to_string(),
                    duration_seconds: Some(*seconds),
                    is_pause: false,
                })
                .await?;
            }
        }

        info!("Seeded sample meditation sessions");
        Ok(true)
    }
}
