//! Clinician-facing summary of a patient's mood entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EvaluatorConfig;
use crate::models::{MoodEntry, MoodTrend};
use crate::risk::{is_high_risk_mood, normalize_trigger};

/// Entries needed before a trend is reported.
pub const MIN_ENTRIES_FOR_TREND: usize = 4;

/// Half-to-half change in mean score that counts as a trend.
pub const TREND_DELTA: f64 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerCount {
    pub trigger: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodReport {
    pub entry_count: usize,
    pub average_score: Option<f64>,
    pub lowest_score: Option<i32>,
    /// Chronological.
    pub high_risk_entry_ids: Vec<Uuid>,
    /// Most frequent first, ties by label.
    pub trigger_counts: Vec<TriggerCount>,
    pub trend: MoodTrend,
}

impl MoodReport {
    pub fn build(config: &EvaluatorConfig, entries: &[MoodEntry]) -> Self {
        let mut ordered: Vec<&MoodEntry> = entries.iter().collect();
        ordered.sort_by_key(|e| e.created_at);

        let scores: Vec<i32> = ordered.iter().map(|e| e.mood_score).collect();

        let high_risk_entry_ids = ordered
            .iter()
            .filter(|e| is_high_risk_mood(config, e.mood_score, &e.triggers))
            .map(|e| e.id)
            .collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in &ordered {
            for trigger in &entry.triggers {
                let key = normalize_trigger(trigger);
                if !key.is_empty() {
                    *counts.entry(key).or_default() += 1;
                }
            }
        }
        let mut trigger_counts: Vec<TriggerCount> = counts
            .into_iter()
            .map(|(trigger, count)| TriggerCount { trigger, count })
            .collect();
        trigger_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.trigger.cmp(&b.trigger)));

        let report = Self {
            entry_count: scores.len(),
            average_score: mean(&scores),
            lowest_score: scores.iter().copied().min(),
            high_risk_entry_ids,
            trigger_counts,
            trend: trend(&scores),
        };

        tracing::debug!(
            entries = report.entry_count,
            high_risk = report.high_risk_entry_ids.len(),
            trend = report.trend.as_str(),
            "Built mood report"
        );

        report
    }
}

fn mean(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64)
}

/// Compares the later half against the earlier half; an odd middle entry is
/// left out of both.
fn trend(scores: &[i32]) -> MoodTrend {
    if scores.len() < MIN_ENTRIES_FOR_TREND {
        return MoodTrend::InsufficientData;
    }
    let half = scores.len() / 2;
    let (Some(earlier), Some(later)) = (mean(&scores[..half]), mean(&scores[scores.len() - half..])) else {
        return MoodTrend::InsufficientData;
    };
    let delta = later - earlier;
    if delta >= TREND_DELTA {
        MoodTrend::Improving
    } else if delta <= -TREND_DELTA {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}
