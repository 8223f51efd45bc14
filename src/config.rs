use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EvaluatorError;
use crate::risk::normalize_trigger;

/// Application-level constants
pub const APP_NAME: &str = "MoodMate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest mood score (inclusive) still considered critical.
pub const CRITICAL_SCORE: i32 = 2;

/// Lowest and highest mood scores the entry form accepts.
pub const MOOD_SCORE_MIN: i32 = 1;
pub const MOOD_SCORE_MAX: i32 = 10;

/// Trigger labels that, paired with a critical score, indicate acute risk.
pub const HIGH_RISK_TRIGGERS: &[&str] = &[
    "suicidal thoughts",
    "self-harm",
    "self harm",
    "hopelessness",
    "substance use",
    "panic attack",
];

/// Default trigger → coping suggestion table.
pub const TRIGGER_SUGGESTIONS: &[(&str, &str)] = &[
    ("stress", "Try a 5-minute box breathing exercise: inhale 4s, hold 4s, exhale 4s, hold 4s."),
    ("anxiety", "Try the 5-4-3-2-1 grounding technique: name 5 things you see, 4 you feel, 3 you hear, 2 you smell, 1 you taste."),
    ("isolation", "Reach out to one person you trust today, even with a short message."),
    ("loneliness", "Consider joining a support group or calling a friend for a few minutes."),
    ("sleep", "Keep a regular bedtime and put screens away 30 minutes before sleep."),
    ("work", "Take a short break away from your desk and set one small, achievable goal."),
    ("family", "Write down what you are feeling before talking it through with a family member."),
    ("relationships", "Try expressing one need clearly using an \"I feel\" statement."),
    ("finances", "List your expenses for this week and pick one small step you can take."),
    ("health", "Note your symptoms and bring them up at your next appointment with your clinician."),
];

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,moodmate_lib=debug"
}

/// Immutable evaluator configuration: risk thresholds and the suggestion
/// table. Built once at startup and passed by reference to the evaluators.
///
/// Trigger keys are normalized (trimmed, lowercase) on construction, so JSON
/// configs may use any casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEvaluatorConfig")]
pub struct EvaluatorConfig {
    pub critical_score: i32,
    pub high_risk_triggers: HashSet<String>,
    pub suggestions: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawEvaluatorConfig {
    critical_score: i32,
    high_risk_triggers: Vec<String>,
    suggestions: HashMap<String, String>,
}

impl Default for RawEvaluatorConfig {
    fn default() -> Self {
        Self {
            critical_score: CRITICAL_SCORE,
            high_risk_triggers: HIGH_RISK_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            suggestions: TRIGGER_SUGGESTIONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl From<RawEvaluatorConfig> for EvaluatorConfig {
    fn from(raw: RawEvaluatorConfig) -> Self {
        Self::new(raw.critical_score, raw.high_risk_triggers, raw.suggestions)
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        RawEvaluatorConfig::default().into()
    }
}

impl EvaluatorConfig {
    pub fn new<T, S>(critical_score: i32, high_risk_triggers: T, suggestions: S) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        S: IntoIterator<Item = (String, String)>,
    {
        Self {
            critical_score,
            high_risk_triggers: high_risk_triggers
                .into_iter()
                .map(|t| normalize_trigger(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
            suggestions: suggestions
                .into_iter()
                .map(|(k, v)| (normalize_trigger(&k), v))
                .filter(|(k, _)| !k.is_empty())
                .collect(),
        }
    }

    /// Parse a JSON config. Missing fields fall back to the built-in defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EvaluatorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self, EvaluatorError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            critical_score = config.critical_score,
            high_risk_triggers = config.high_risk_triggers.len(),
            suggestions = config.suggestions.len(),
            "Loaded evaluator config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_moodmate() {
        assert_eq!(APP_NAME, "MoodMate");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_config_uses_constants() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.critical_score, CRITICAL_SCORE);
        assert_eq!(config.high_risk_triggers.len(), HIGH_RISK_TRIGGERS.len());
        assert_eq!(config.suggestions.len(), TRIGGER_SUGGESTIONS.len());
        assert!(config.high_risk_triggers.contains("suicidal thoughts"));
    }

    #[test]
    fn constructor_normalizes_keys() {
        let config = EvaluatorConfig::new(
            3,
            ["  Hopelessness ", ""],
            [("  STRESS".to_string(), "Breathe.".to_string())],
        );
        assert!(config.high_risk_triggers.contains("hopelessness"));
        assert_eq!(config.high_risk_triggers.len(), 1);
        assert_eq!(config.suggestions.get("stress").map(String::as_str), Some("Breathe."));
    }

    #[test]
    fn json_partial_falls_back_to_defaults() {
        let config = EvaluatorConfig::from_json_str(r#"{ "critical_score": 4 }"#).unwrap();
        assert_eq!(config.critical_score, 4);
        assert!(config.suggestions.contains_key("stress"));
        assert!(config.high_risk_triggers.contains("self-harm"));
    }

    #[test]
    fn json_overrides_are_normalized() {
        let config = EvaluatorConfig::from_json_str(
            r#"{ "high_risk_triggers": ["Panic Attack"], "suggestions": { "Work ": "Step away." } }"#,
        )
        .unwrap();
        assert_eq!(config.high_risk_triggers.len(), 1);
        assert!(config.high_risk_triggers.contains("panic attack"));
        assert_eq!(config.suggestions.get("work").map(String::as_str), Some("Step away."));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = EvaluatorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EvaluatorError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluator.json");
        std::fs::write(&path, r#"{ "critical_score": 1 }"#).unwrap();
        let config = EvaluatorConfig::load(&path).unwrap();
        assert_eq!(config.critical_score, 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EvaluatorConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, EvaluatorError::Io(_)));
    }
}
