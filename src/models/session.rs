use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::SessionStatus;

/// A clinician appointment occupying `[starts_at, starts_at + duration)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedSession {
    pub id: Uuid,
    pub clinician_id: Uuid,
    pub patient_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: SessionStatus,
}

impl BookedSession {
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.starts_at + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Cancelled sessions release their slot.
    pub fn occupies_slot(&self) -> bool {
        self.status != SessionStatus::Cancelled
    }
}
