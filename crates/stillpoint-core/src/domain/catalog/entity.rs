//! Catalog entities and creation payloads
//!
//! Defines the session, instruction, and category types plus the
//! `New*` payloads used when creating them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of meditation practice a session guides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeditationType {
    /// Focused breathing exercises
    Breathing,
    /// Present-moment awareness practice
    Mindfulness,
    /// Progressive attention through the body
    BodyScan,
    /// Metta / loving-kindness practice
    LovingKindness,
    /// Single-point concentration
    Concentration,
    /// Walking meditation
    Walking,
    /// Guided imagery
    Visualization,
}

impl MeditationType {
    /// All known types, in display order
    pub const ALL: [MeditationType; 7] = [
        Self::Breathing,
        Self::Mindfulness,
        Self::BodyScan,
        Self::LovingKindness,
        Self::Concentration,
        Self::Walking,
        Self::Visualization,
    ];

    /// Create from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breathing" => Some(Self::Breathing),
            "mindfulness" => Some(Self::Mindfulness),
            "body_scan" => Some(Self::BodyScan),
            "loving_kindness" => Some(Self::LovingKindness),
            "concentration" => Some(Self::Concentration),
            "walking" => Some(Self::Walking),
            "visualization" => Some(Self::Visualization),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breathing => "breathing",
            Self::Mindfulness => "mindfulness",
            Self::BodyScan => "body_scan",
            Self::LovingKindness => "loving_kindness",
            Self::Concentration => "concentration",
            Self::Walking => "walking",
            Self::Visualization => "visualization",
        }
    }

    /// Human-readable label ("body_scan" -> "Body Scan")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Breathing => "Breathing",
            Self::Mindfulness => "Mindfulness",
            Self::BodyScan => "Body Scan",
            Self::LovingKindness => "Loving Kindness",
            Self::Concentration => "Concentration",
            Self::Walking => "Walking",
            Self::Visualization => "Visualization",
        }
    }
}

impl fmt::Display for MeditationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Difficulty level of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// All levels, easiest first
    pub const ALL: [DifficultyLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Create from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self::Beginner
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A complete meditation session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationSession {
    /// Unique identifier, assigned by the store on creation
    pub id: i64,
    pub title: String,
    pub description: String,
    pub meditation_type: MeditationType,
    pub difficulty_level: DifficultyLevel,
    /// Advertised session length, 1-120 minutes
    pub duration_minutes: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Individual instruction step within a meditation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationInstruction {
    pub id: i64,
    pub session_id: i64,
    /// Playback position within the session, starting at 1
    pub step_order: i64,
    pub instruction_text: String,
    /// Step length in seconds; None means the step waits for manual Next
    pub duration_seconds: Option<i64>,
    /// Marks a silent pause step; informational only
    pub is_pause: bool,
    pub created_at: DateTime<Utc>,
}

/// Category for organizing sessions in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Optional hex color like "#3b82f6"
    pub color_code: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A session together with its instructions, sorted by step order
///
/// This is the fixed sequence a player instance walks; it is never
/// refreshed for the lifetime of that player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDetail {
    pub session: MeditationSession,
    pub instructions: Vec<MeditationInstruction>,
}

impl SessionDetail {
    /// Total of all step durations, treating untimed steps as zero
    pub fn total_seconds(&self) -> i64 {
        self.instructions
            .iter()
            .map(|i| i.duration_seconds.unwrap_or(0))
            .sum()
    }
}

/// Payload for creating a new session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSession {
    pub title: String,
    pub description: String,
    pub meditation_type: MeditationType,
    pub difficulty_level: DifficultyLevel,
    pub duration_minutes: i64,
}

/// Payload for adding an instruction to a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInstruction {
    pub session_id: i64,
    pub step_order: i64,
    pub instruction_text: String,
    pub duration_seconds: Option<i64>,
    pub is_pause: bool,
}

/// Payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub color_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meditation_type_round_trip() {
        for t in MeditationType::ALL {
            assert_eq!(MeditationType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(MeditationType::from_str("BODY_SCAN"), Some(MeditationType::BodyScan));
        assert_eq!(MeditationType::from_str("yoga"), None);
    }

    #[test]
    fn test_difficulty_round_trip() {
        for d in DifficultyLevel::ALL {
            assert_eq!(DifficultyLevel::from_str(d.as_str()), Some(d));
        }
        assert_eq!(DifficultyLevel::from_str("expert"), None);
        assert_eq!(DifficultyLevel::default(), DifficultyLevel::Beginner);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MeditationType::BodyScan.label(), "Body Scan");
        assert_eq!(MeditationType::LovingKindness.to_string(), "loving_kindness");
        assert_eq!(DifficultyLevel::Intermediate.label(), "Intermediate");
    }

    #[test]
    fn test_total_seconds_treats_none_as_zero() {
        let now = Utc::now();
        let session = MeditationSession {
            id: 1,
            title: "t".into(),
            description: String::new(),
            meditation_type: MeditationType::Breathing,
            difficulty_level: DifficultyLevel::Beginner,
            duration_minutes: 5,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let step = |order: i64, secs: Option<i64>| MeditationInstruction {
            id: order,
            session_id: 1,
            step_order: order,
            instruction_text: "step".into(),
            duration_seconds: secs,
            is_pause: false,
            created_at: now,
        };
        let detail = SessionDetail {
            session,
            instructions: vec![step(1, Some(30)), step(2, None), step(3, Some(45))],
        };
        assert_eq!(detail.total_seconds(), 75);
    }
}
