//! Heuristic scanning of AI companion chat text: does the assistant recommend
//! an exercise, and did the patient confirm or decline it?
//!
//! These are keyword/regex classifiers, not parsers. False positives and
//! negatives are expected and no confidence score is produced. Confirmation
//! and denial are evaluated independently, so ambiguous text can match
//! neither or both.

use regex::Regex;

use crate::error::EvaluatorError;

/// Case-insensitive substrings marking an exercise recommendation.
pub const RECOMMENDATION_KEYWORDS: &[&str] = &[
    "exercise",
    "try this",
    "technique",
    "breathing",
    "meditation",
    "mindfulness",
    "grounding",
    "journaling",
    "stretch",
    "practice",
];

/// Patterns for a patient confirming they did (or will do) the exercise.
pub const CONFIRMATION_PATTERNS: &[&str] = &[
    r"(?i)\b(?:yes|yeah|yep|yup|sure|absolutely|of\s+course)\b",
    r"(?i)\bi\s+(?:did|tried|completed|finished|practiced)\b",
    r"(?i)\b(?:ok|okay|will\s+do|let['’]?s\s+(?:do|try)\s+it)\b",
    r"(?i)\b(?:it|that)\s+helped\b",
];

/// Patterns for a patient declining or not having done the exercise.
pub const DENIAL_PATTERNS: &[&str] = &[
    r"(?i)\b(?:no|nope|nah|not\s+yet|not\s+really)\b",
    r"(?i)\b(?:haven['’]?t|have\s+not|didn['’]?t|did\s+not|couldn['’]?t|could\s+not|can['’]?t|cannot)\b",
    r"(?i)\b(?:skipped|forgot|don['’]?t\s+want)\b",
];

/// Compiled keyword and pattern sets. Build once, share by reference.
#[derive(Debug, Clone)]
pub struct ExerciseScanner {
    keywords: Vec<String>,
    confirmations: Vec<Regex>,
    denials: Vec<Regex>,
}

impl Default for ExerciseScanner {
    fn default() -> Self {
        Self::new(RECOMMENDATION_KEYWORDS, CONFIRMATION_PATTERNS, DENIAL_PATTERNS)
            .expect("Invalid built-in exercise pattern")
    }
}

impl ExerciseScanner {
    /// Build a scanner from custom keyword and pattern sets.
    /// Patterns are used as given; add `(?i)` for case-insensitivity.
    pub fn new<K, P>(keywords: &[K], confirmations: &[P], denials: &[P]) -> Result<Self, EvaluatorError>
    where
        K: AsRef<str>,
        P: AsRef<str>,
    {
        Ok(Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            confirmations: compile_all(confirmations)?,
            denials: compile_all(denials)?,
        })
    }

    /// Case-insensitive substring search for any recommendation keyword.
    pub fn is_exercise_recommendation(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|kw| lower.contains(kw.as_str()))
    }

    pub fn is_user_confirmation(&self, text: &str) -> bool {
        self.confirmations.iter().any(|re| re.is_match(text))
    }

    pub fn is_user_denial(&self, text: &str) -> bool {
        self.denials.iter().any(|re| re.is_match(text))
    }

    /// First sentence (split on `.`, `!`, `?`) that reads as a recommendation,
    /// trimmed. Falls back to the whole text unchanged when none qualifies.
    pub fn extract_exercise_from_text(&self, text: &str) -> String {
        text.split(['.', '!', '?'])
            .map(str::trim)
            .find(|sentence| !sentence.is_empty() && self.is_exercise_recommendation(sentence))
            .unwrap_or(text)
            .to_string()
    }
}

fn compile_all<P: AsRef<str>>(patterns: &[P]) -> Result<Vec<Regex>, EvaluatorError> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p.as_ref()).map_err(|source| EvaluatorError::InvalidPattern {
                pattern: p.as_ref().to_string(),
                source,
            })
        })
        .collect()
}
