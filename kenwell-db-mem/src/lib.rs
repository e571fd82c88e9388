//! Thread-safe in-memory document store.
//!
//! Backs the server in local development and in tests. The hosted
//! document database behind the production deployment is consumed
//! through the `kenwell-core` repository traits only, so this store
//! implements the same contract: point reads, equality queries on a
//! foreign-key attribute, and all-or-nothing write batches.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use kenwell_core::{
    entities::{event::UserEvent, id::Id, session::WellnessSession, user::User},
    repositories::{self as repo, DocRef, Error as RepoError, WriteBatch},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
struct Collections {
    users: HashMap<Id, User>,
    user_events: HashMap<Id, UserEvent>,
    wellness_sessions: HashMap<Id, WellnessSession>,
}

/// Cloneable handle to one shared set of collections.
///
/// Constructed once at startup and injected into every component that
/// needs document access; there is no ambient global instance.
#[derive(Default, Clone)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

impl repo::UserRepo for Store {
    fn create_user(&self, user: &User) -> Result<()> {
        let mut collections = self.inner.write();
        if collections.users.contains_key(&user.id) {
            return Err(RepoError::AlreadyExists);
        }
        collections.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    fn try_get_user(&self, id: &Id) -> Result<Option<User>> {
        Ok(self.inner.read().users.get(id).cloned())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.inner.read().users.len())
    }
}

impl repo::UserEventRepo for Store {
    fn create_user_event(&self, event: &UserEvent) -> Result<()> {
        let mut collections = self.inner.write();
        if collections.user_events.contains_key(&event.id) {
            return Err(RepoError::AlreadyExists);
        }
        collections
            .user_events
            .insert(event.id.clone(), event.clone());
        Ok(())
    }

    fn user_events_by_user(&self, user_id: &Id) -> Result<Vec<UserEvent>> {
        Ok(self
            .inner
            .read()
            .user_events
            .values()
            .filter(|e| e.user_id == *user_id)
            .cloned()
            .collect())
    }
}

impl repo::WellnessSessionRepo for Store {
    fn create_wellness_session(&self, session: &WellnessSession) -> Result<()> {
        let mut collections = self.inner.write();
        if collections.wellness_sessions.contains_key(&session.id) {
            return Err(RepoError::AlreadyExists);
        }
        collections
            .wellness_sessions
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn wellness_sessions_by_nurse(&self, nurse_user_id: &Id) -> Result<Vec<WellnessSession>> {
        Ok(self
            .inner
            .read()
            .wellness_sessions
            .values()
            .filter(|s| s.nurse_user_id == *nurse_user_id)
            .cloned()
            .collect())
    }
}

impl repo::BatchWriter for Store {
    fn commit_batch(&self, batch: WriteBatch) -> Result<()> {
        // The write lock is held across the whole batch, so readers
        // never observe a partially applied commit. Deleting absent
        // documents is a no-op.
        let mut collections = self.inner.write();
        let deletes = batch.into_deletes();
        log::debug!("Committing batch with {} deletions", deletes.len());
        for doc in deletes {
            match doc {
                DocRef::User(id) => {
                    collections.users.remove(&id);
                }
                DocRef::UserEvent(id) => {
                    collections.user_events.remove(&id);
                }
                DocRef::WellnessSession(id) => {
                    collections.wellness_sessions.remove(&id);
                }
            }
        }
        Ok(())
    }
}
