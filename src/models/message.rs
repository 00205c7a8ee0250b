use chrono::NaiveDateTime;
use serde::Serialize;

/// Integer id assigned to a user name in first-seen order, starting at 0.
pub type UserId = u64;

/// Integer id assigned to a thread name in first-seen order, starting at 0.
pub type ThreadId = u64;

/// A fully assembled message from the archive.
///
/// Records are created when the extraction state machine recognizes a message
/// boundary and are immutable thereafter. The timestamp is always present (a
/// boundary closed without one aborts the run); the text is `""` when the
/// message had no body paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    pub thread_id: ThreadId,
    pub user_id: UserId,
    pub timestamp: NaiveDateTime,
    pub text: String,
}
