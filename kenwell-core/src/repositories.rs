// Low-level document store access traits.
// Each repository is responsible for a single collection. Related
// documents are only referenced by their id and never loaded or
// modified through another collection's repository.

use thiserror::Error;

use crate::entities::{event::UserEvent, id::Id, session::WellnessSession, user::User};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested document could not be found")]
    NotFound,
    #[error("The document already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Reference to a single document in one of the collections touched
/// by the cascading deletion workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocRef {
    User(Id),
    UserEvent(Id),
    WellnessSession(Id),
}

/// An atomic set of document deletions.
///
/// Queued deletions take effect all at once on commit, or not at all.
/// Deleting a document that does not exist is a no-op for the store
/// but the deletion still counts as queued.
#[derive(Debug, Default)]
pub struct WriteBatch {
    deletes: Vec<DocRef>,
}

impl WriteBatch {
    pub fn delete(&mut self, doc: DocRef) {
        self.deletes.push(doc);
    }

    pub fn len(&self) -> usize {
        self.deletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty()
    }

    pub fn into_deletes(self) -> Vec<DocRef> {
        self.deletes
    }
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn try_get_user(&self, id: &Id) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait UserEventRepo {
    fn create_user_event(&self, event: &UserEvent) -> Result<()>;

    /// All events with a matching `user_id`, unpaginated.
    fn user_events_by_user(&self, user_id: &Id) -> Result<Vec<UserEvent>>;
}

pub trait WellnessSessionRepo {
    fn create_wellness_session(&self, session: &WellnessSession) -> Result<()>;

    /// All sessions with a matching `nurse_user_id`, unpaginated.
    fn wellness_sessions_by_nurse(&self, nurse_user_id: &Id) -> Result<Vec<WellnessSession>>;
}

pub trait BatchWriter {
    /// Applies all queued writes atomically.
    ///
    /// On failure none of the queued writes must have taken effect.
    fn commit_batch(&self, batch: WriteBatch) -> Result<()>;
}

pub trait DocumentStore: UserRepo + UserEventRepo + WellnessSessionRepo + BatchWriter {}

impl<T> DocumentStore for T where T: UserRepo + UserEventRepo + WellnessSessionRepo + BatchWriter {}
