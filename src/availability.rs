//! Appointment slot availability against a clinician's booked sessions.
//!
//! Slots and sessions are half-open intervals `[start, end)`: a slot ending
//! exactly when a session starts does not conflict with it. Cancelled
//! sessions never block a slot.

use chrono::{DateTime, Duration, Utc};

use crate::models::BookedSession;

/// True if `[start, start + duration_minutes)` overlaps no active session.
/// Zero-length slots are never available.
pub fn is_slot_available(start: DateTime<Utc>, duration_minutes: u32, booked: &[BookedSession]) -> bool {
    if duration_minutes == 0 {
        return false;
    }
    let end = start + Duration::minutes(i64::from(duration_minutes));
    !booked
        .iter()
        .filter(|s| s.occupies_slot())
        .any(|s| start < s.ends_at() && s.starts_at < end)
}

/// Free slot start times between `day_start` and `day_end`, stepping by
/// `slot_minutes`. A slot must end at or before `day_end`.
pub fn available_slots(
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    slot_minutes: u32,
    booked: &[BookedSession],
) -> Vec<DateTime<Utc>> {
    if slot_minutes == 0 {
        return Vec::new();
    }
    let step = Duration::minutes(i64::from(slot_minutes));

    let mut slots = Vec::new();
    let mut cursor = day_start;
    while cursor + step <= day_end {
        if is_slot_available(cursor, slot_minutes, booked) {
            slots.push(cursor);
        }
        cursor += step;
    }

    tracing::debug!(
        candidates = ((day_end - day_start).num_minutes().max(0) / i64::from(slot_minutes)),
        available = slots.len(),
        "Computed available slots"
    );

    slots
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;
    use crate::models::SessionStatus;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 14, hour, minute, 0).unwrap()
    }

    fn session(hour: u32, minute: u32, duration_minutes: u32, status: SessionStatus) -> BookedSession {
        BookedSession {
            id: Uuid::new_v4(),
            clinician_id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            starts_at: at(hour, minute),
            duration_minutes,
            status,
        }
    }

    #[test]
    fn empty_calendar_is_available() {
        assert!(is_slot_available(at(9, 0), 50, &[]));
    }

    #[test]
    fn overlapping_session_blocks_slot() {
        let booked = [session(10, 0, 60, SessionStatus::Scheduled)];
        assert!(!is_slot_available(at(10, 30), 30, &booked));
        assert!(!is_slot_available(at(9, 30), 45, &booked));
        assert!(!is_slot_available(at(9, 0), 180, &booked));
    }

    #[test]
    fn touching_intervals_do_not_conflict() {
        let booked = [session(10, 0, 60, SessionStatus::Scheduled)];
        assert!(is_slot_available(at(9, 0), 60, &booked));
        assert!(is_slot_available(at(11, 0), 30, &booked));
    }

    #[test]
    fn cancelled_session_frees_slot() {
        let booked = [session(10, 0, 60, SessionStatus::Cancelled)];
        assert!(is_slot_available(at(10, 0), 60, &booked));
    }

    #[test]
    fn completed_session_still_occupies() {
        let booked = [session(10, 0, 60, SessionStatus::Completed)];
        assert!(!is_slot_available(at(10, 15), 15, &booked));
    }

    #[test]
    fn zero_duration_unavailable() {
        assert!(!is_slot_available(at(9, 0), 0, &[]));
    }

    #[test]
    fn lists_free_slots_in_working_day() {
        let booked = [
            session(10, 0, 60, SessionStatus::Scheduled),
            session(12, 0, 60, SessionStatus::Cancelled),
        ];
        let slots = available_slots(at(9, 0), at(13, 0), 60, &booked);
        assert_eq!(slots, vec![at(9, 0), at(11, 0), at(12, 0)]);
    }

    #[test]
    fn partial_trailing_slot_excluded() {
        let slots = available_slots(at(9, 0), at(10, 30), 60, &[]);
        assert_eq!(slots, vec![at(9, 0)]);
    }

    #[test]
    fn zero_step_or_inverted_range_is_empty() {
        assert!(available_slots(at(9, 0), at(17, 0), 0, &[]).is_empty());
        assert!(available_slots(at(17, 0), at(9, 0), 30, &[]).is_empty());
    }
}
