//! Catalog input validation
//!
//! Field constraints enforced at the service boundary before any write.
//! A constraint violation fails synchronously; nothing is persisted.

use super::entity::{NewCategory, NewInstruction, NewSession};
use crate::error::{Error, Result};

const TITLE_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 1000;
const INSTRUCTION_TEXT_MAX: usize = 2000;
const CATEGORY_NAME_MAX: usize = 100;
const CATEGORY_DESCRIPTION_MAX: usize = 500;
pub(crate) const DURATION_MINUTES_RANGE: std::ops::RangeInclusive<i64> = 1..=120;

/// Validate a session creation payload
pub fn validate_new_session(session: &NewSession) -> Result<()> {
    if session.title.trim().is_empty() {
        return Err(Error::validation("title", "must not be empty"));
    }
    if session.title.chars().count() > TITLE_MAX {
        return Err(Error::validation(
            "title",
            format!("must be {} characters or less", TITLE_MAX),
        ));
    }
    if session.description.chars().count() > DESCRIPTION_MAX {
        return Err(Error::validation(
            "description",
            format!("must be {} characters or less", DESCRIPTION_MAX),
        ));
    }
    if !DURATION_MINUTES_RANGE.contains(&session.duration_minutes) {
        return Err(Error::validation(
            "duration_minutes",
            "must be between 1 and 120",
        ));
    }
    Ok(())
}

/// Validate an instruction creation payload
pub fn validate_new_instruction(instruction: &NewInstruction) -> Result<()> {
    if instruction.step_order < 1 {
        return Err(Error::validation("step_order", "must be 1 or greater"));
    }
    if instruction.instruction_text.trim().is_empty() {
        return Err(Error::validation("instruction_text", "must not be empty"));
    }
    if instruction.instruction_text.chars().count() > INSTRUCTION_TEXT_MAX {
        return Err(Error::validation(
            "instruction_text",
            format!("must be {} characters or less", INSTRUCTION_TEXT_MAX),
        ));
    }
    if let Some(seconds) = instruction.duration_seconds {
        if seconds < 0 {
            return Err(Error::validation("duration_seconds", "must not be negative"));
        }
    }
    Ok(())
}

/// Validate a category creation payload
pub fn validate_new_category(category: &NewCategory) -> Result<()> {
    if category.name.trim().is_empty() {
        return Err(Error::validation("name", "must not be empty"));
    }
    if category.name.chars().count() > CATEGORY_NAME_MAX {
        return Err(Error::validation(
            "name",
            format!("must be {} characters or less", CATEGORY_NAME_MAX),
        ));
    }
    if category.description.chars().count() > CATEGORY_DESCRIPTION_MAX {
        return Err(Error::validation(
            "description",
            format!("must be {} characters or less", CATEGORY_DESCRIPTION_MAX),
        ));
    }
    if let Some(color) = &category.color_code {
        if !is_hex_color(color) {
            return Err(Error::validation(
                "color_code",
                "must be a hex color like #3b82f6",
            ));
        }
    }
    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::entity::{DifficultyLevel, MeditationType};

    fn session(duration_minutes: i64) -> NewSession {
        NewSession {
            title: "Morning Calm".to_string(),
            description: "A short practice".to_string(),
            meditation_type: MeditationType::Breathing,
            difficulty_level: DifficultyLevel::Beginner,
            duration_minutes,
        }
    }

    fn instruction(step_order: i64, duration_seconds: Option<i64>) -> NewInstruction {
        NewInstruction {
            session_id: 1,
            step_order,
            instruction_text: "Breathe in".to_string(),
            duration_seconds,
            is_pause: false,
        }
    }

    #[test]
    fn test_duration_minutes_bounds() {
        assert!(validate_new_session(&session(1)).is_ok());
        assert!(validate_new_session(&session(120)).is_ok());
        assert!(validate_new_session(&session(0)).is_err());
        assert!(validate_new_session(&session(121)).is_err());
        assert!(validate_new_session(&session(-5)).is_err());
    }

    #[test]
    fn test_title_rules() {
        let mut s = session(10);
        s.title = "   ".to_string();
        assert!(validate_new_session(&s).is_err());

        s.title = "x".repeat(201);
        assert!(validate_new_session(&s).is_err());

        s.title = "x".repeat(200);
        assert!(validate_new_session(&s).is_ok());
    }

    #[test]
    fn test_description_length() {
        let mut s = session(10);
        s.description = "x".repeat(1001);
        assert!(validate_new_session(&s).is_err());
    }

    #[test]
    fn test_step_order_must_be_positive() {
        assert!(validate_new_instruction(&instruction(1, None)).is_ok());
        assert!(validate_new_instruction(&instruction(0, None)).is_err());
        assert!(validate_new_instruction(&instruction(-1, None)).is_err());
    }

    #[test]
    fn test_duration_seconds_non_negative() {
        assert!(validate_new_instruction(&instruction(1, Some(0))).is_ok());
        assert!(validate_new_instruction(&instruction(1, Some(90))).is_ok());
        assert!(validate_new_instruction(&instruction(1, Some(-1))).is_err());
    }

    #[test]
    fn test_instruction_text_rules() {
        let mut i = instruction(1, None);
        i.instruction_text = String::new();
        assert!(validate_new_instruction(&i).is_err());

        i.instruction_text = "x".repeat(2001);
        assert!(validate_new_instruction(&i).is_err());

        i.instruction_text = "x".repeat(2000);
        assert!(validate_new_instruction(&i).is_ok());
    }

    #[test]
    fn test_category_color_code() {
        let mut c = NewCategory {
            name: "Calm".to_string(),
            description: String::new(),
            color_code: Some("#3b82f6".to_string()),
        };
        assert!(validate_new_category(&c).is_ok());

        c.color_code = Some("3b82f6".to_string());
        assert!(validate_new_category(&c).is_err());

        c.color_code = Some("#3b82g6".to_string());
        assert!(validate_new_category(&c).is_err());

        c.color_code = Some("#fff".to_string());
        assert!(validate_new_category(&c).is_err());
    }
}
