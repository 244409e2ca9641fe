//! Session record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a finished training session, as reported by the caller
///
/// This is the input to `SessionStore::save_session`: everything a full
/// record carries except the identifier and timestamp, which the store
/// generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    /// Skill level the session was played at
    pub skill_level: f64,

    /// Total session duration in seconds
    pub total_time: f64,

    /// Number of puzzles solved
    pub puzzles_solved: u32,

    /// Number of puzzles failed
    pub puzzles_failed: u32,

    /// Solved / attempted ratio
    pub accuracy_rate: f64,
}

/// A persisted training session record
///
/// Immutable once created: the stored collection only ever appends whole
/// records or removes them, never edits a field in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Unique record identifier, generated at creation
    pub id: Uuid,

    /// When the session was recorded
    pub date: DateTime<Utc>,

    pub skill_level: f64,
    pub total_time: f64,
    pub puzzles_solved: u32,
    pub puzzles_failed: u32,
    pub accuracy_rate: f64,
}

impl SessionRecord {
    /// Build a full record from an outcome, generating a fresh v4 identifier
    /// and the current UTC timestamp.
    pub fn new(outcome: SessionOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            skill_level: outcome.skill_level,
            total_time: outcome.total_time,
            puzzles_solved: outcome.puzzles_solved,
            puzzles_failed: outcome.puzzles_failed,
            accuracy_rate: outcome.accuracy_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> SessionOutcome {
        SessionOutcome {
            skill_level: 3.0,
            total_time: 120.0,
            puzzles_solved: 8,
            puzzles_failed: 2,
            accuracy_rate: 0.8,
        }
    }

    #[test]
    fn test_new_record_carries_outcome_fields() {
        let record = SessionRecord::new(sample_outcome());

        assert_eq!(record.skill_level, 3.0);
        assert_eq!(record.total_time, 120.0);
        assert_eq!(record.puzzles_solved, 8);
        assert_eq!(record.puzzles_failed, 2);
        assert_eq!(record.accuracy_rate, 0.8);
        assert!(!record.id.is_nil());
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = SessionRecord::new(sample_outcome());
        let b = SessionRecord::new(sample_outcome());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let record = SessionRecord::new(sample_outcome());
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"skillLevel\""));
        assert!(json.contains("\"totalTime\""));
        assert!(json.contains("\"puzzlesSolved\""));
        assert!(json.contains("\"puzzlesFailed\""));
        assert!(json.contains("\"accuracyRate\""));
        assert!(!json.contains("skill_level"));
    }

    #[test]
    fn test_record_round_trip() {
        let record = SessionRecord::new(sample_outcome());
        let json = serde_json::to_string(&record).unwrap();
        let loaded: SessionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, record);
    }

    #[test]
    fn test_date_parses_as_iso_8601() {
        let record = SessionRecord::new(sample_outcome());
        let json = serde_json::to_value(&record).unwrap();

        let date = json["date"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(date).is_ok());
    }
}
