pub mod config;
pub mod error;
pub mod models;
pub mod risk; // Mood risk + trigger suggestions
pub mod exercise; // Chat exercise recommendation scanner
pub mod assessment;
pub mod report; // Clinician mood report
pub mod availability;

pub use assessment::{assess_entry, validate_entry, MoodAssessment};
pub use config::EvaluatorConfig;
pub use error::EvaluatorError;
pub use exercise::ExerciseScanner;
pub use report::MoodReport;
pub use risk::{is_high_risk_mood, trigger_suggestion};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` wins over the default
/// filter. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    tracing::info!("{} evaluator v{}", config::APP_NAME, config::APP_VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn shared_config_and_scanner_across_threads() {
        let config = std::sync::Arc::new(EvaluatorConfig::default());
        let scanner = std::sync::Arc::new(ExerciseScanner::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let config = config.clone();
                let scanner = scanner.clone();
                std::thread::spawn(move || {
                    is_high_risk_mood(&config, 1, &["self-harm"])
                        && scanner.is_exercise_recommendation("try this breathing exercise")
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
