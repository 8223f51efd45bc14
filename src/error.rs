use thiserror::Error;

/// Errors raised while building evaluator configuration or validating
/// entries at capture time. The evaluators themselves never fail.
#[derive(Error, Debug)]
pub enum EvaluatorError {
    #[error("Mood score {0} is outside the 1-10 range")]
    InvalidMoodScore(i32),

    #[error("Trigger at position {0} is empty")]
    EmptyTrigger(usize),

    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid text pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
