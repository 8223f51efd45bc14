//! Mood risk classification and trigger → coping suggestion selection.
//!
//! Both operate on normalized trigger labels (trimmed, lowercase) with exact
//! matching against the sets in [`EvaluatorConfig`]. No fuzzy or substring
//! matching.

use crate::config::EvaluatorConfig;

/// Trim surrounding whitespace and lowercase a trigger label.
pub fn normalize_trigger(trigger: &str) -> String {
    trigger.trim().to_lowercase()
}

/// True iff `score <= critical_score` AND at least one trigger is a
/// high-risk trigger. Either condition alone is not enough.
///
/// Scores outside 1-10 are not checked here; see
/// [`crate::assessment::validate_entry`].
pub fn is_high_risk_mood<S: AsRef<str>>(config: &EvaluatorConfig, score: i32, triggers: &[S]) -> bool {
    score <= config.critical_score
        && triggers
            .iter()
            .any(|t| config.high_risk_triggers.contains(&normalize_trigger(t.as_ref())))
}

/// Suggestion for the first trigger (in the given order) that has an entry in
/// the suggestion table. Later triggers are not consulted once one matches.
pub fn trigger_suggestion<'a, S: AsRef<str>>(
    config: &'a EvaluatorConfig,
    triggers: &[S],
) -> Option<&'a str> {
    triggers
        .iter()
        .find_map(|t| config.suggestions.get(&normalize_trigger(t.as_ref())))
        .map(String::as_str)
}
