use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single patient-reported mood data point, as stored by the backend.
/// Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    /// 1 (worst) to 10 (best).
    pub mood_score: i32,
    #[serde(default)]
    pub notes: Option<String>,
    /// Absent in the row means no triggers.
    #[serde(default)]
    pub triggers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub patient_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_triggers_and_notes_deserialize_empty() {
        let json = r#"{
            "id": "7f1c6f7e-0b7a-4c3e-9a1d-2d7c5b1e9f00",
            "mood_score": 4,
            "created_at": "2026-03-01T09:30:00Z",
            "patient_id": "0a4e3c1b-5d2f-4e6a-8b7c-9d0e1f2a3b4c"
        }"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood_score, 4);
        assert!(entry.triggers.is_empty());
        assert!(entry.notes.is_none());
    }
}
