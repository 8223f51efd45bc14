pub mod enums;
pub mod mood_entry;
pub mod session;

pub use enums::{MoodTrend, SessionStatus};
pub use mood_entry::MoodEntry;
pub use session::BookedSession;
