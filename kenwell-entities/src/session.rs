use crate::{id::Id, time::Timestamp};

/// Appointment in the `wellness_sessions` collection.
///
/// Sessions reference the user who runs them in a nurse capacity and
/// are removed together with that user record.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellnessSession {
    pub id            : Id,
    pub nurse_user_id : Id,
    pub scheduled_at  : Timestamp,
}
