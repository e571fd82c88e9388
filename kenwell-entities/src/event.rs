use crate::{id::Id, time::Timestamp};

/// Activity log entry in the `user_events` collection.
///
/// Each event belongs to exactly one user and is removed together
/// with the owning user record.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEvent {
    pub id         : Id,
    pub user_id    : Id,
    pub kind       : String,
    pub created_at : Timestamp,
}
