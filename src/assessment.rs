//! Capture-time validation and the combined risk/suggestion assessment run
//! after a mood entry is recorded.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{EvaluatorConfig, MOOD_SCORE_MAX, MOOD_SCORE_MIN};
use crate::error::EvaluatorError;
use crate::models::MoodEntry;
use crate::risk::{is_high_risk_mood, trigger_suggestion};

/// Outcome of evaluating one mood entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAssessment {
    pub entry_id: Uuid,
    pub patient_id: Uuid,
    /// Clinician should be alerted.
    pub high_risk: bool,
    /// Coping suggestion to show the patient, if any trigger matched.
    pub suggestion: Option<String>,
}

/// Entry-form validation: score within 1-10, no blank trigger labels.
/// The evaluators assume callers ran this upstream.
pub fn validate_entry(entry: &MoodEntry) -> Result<(), EvaluatorError> {
    if !(MOOD_SCORE_MIN..=MOOD_SCORE_MAX).contains(&entry.mood_score) {
        return Err(EvaluatorError::InvalidMoodScore(entry.mood_score));
    }
    if let Some(pos) = entry.triggers.iter().position(|t| t.trim().is_empty()) {
        return Err(EvaluatorError::EmptyTrigger(pos));
    }
    Ok(())
}

pub fn assess_entry(config: &EvaluatorConfig, entry: &MoodEntry) -> MoodAssessment {
    let high_risk = is_high_risk_mood(config, entry.mood_score, &entry.triggers);
    let suggestion = trigger_suggestion(config, &entry.triggers).map(str::to_string);

    // Ids only. Notes and trigger text stay out of logs.
    if high_risk {
        tracing::warn!(
            entry_id = %entry.id,
            patient_id = %entry.patient_id,
            mood_score = entry.mood_score,
            "High-risk mood entry, clinician alert required"
        );
    } else {
        tracing::debug!(
            entry_id = %entry.id,
            has_suggestion = suggestion.is_some(),
            "Mood entry assessed"
        );
    }

    MoodAssessment {
        entry_id: entry.id,
        patient_id: entry.patient_id,
        high_risk,
        suggestion,
    }
}
