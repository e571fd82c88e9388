use std::{cell::RefCell, result};

use crate::{
    entities::{event::UserEvent, id::Id, session::WellnessSession, user::User},
    gateways::identity,
    repositories::{DocRef, Error as RepoError, WriteBatch, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub user_events: RefCell<Vec<UserEvent>>,
    pub wellness_sessions: RefCell<Vec<WellnessSession>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.id == user.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn try_get_user(&self, id: &Id) -> RepoResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.id == *id).cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl UserEventRepo for MockDb {
    fn create_user_event(&self, event: &UserEvent) -> RepoResult<()> {
        self.user_events.borrow_mut().push(event.clone());
        Ok(())
    }

    fn user_events_by_user(&self, user_id: &Id) -> RepoResult<Vec<UserEvent>> {
        Ok(self
            .user_events
            .borrow()
            .iter()
            .filter(|e| e.user_id == *user_id)
            .cloned()
            .collect())
    }
}

impl WellnessSessionRepo for MockDb {
    fn create_wellness_session(&self, session: &WellnessSession) -> RepoResult<()> {
        self.wellness_sessions.borrow_mut().push(session.clone());
        Ok(())
    }

    fn wellness_sessions_by_nurse(&self, nurse_user_id: &Id) -> RepoResult<Vec<WellnessSession>> {
        Ok(self
            .wellness_sessions
            .borrow()
            .iter()
            .filter(|s| s.nurse_user_id == *nurse_user_id)
            .cloned()
            .collect())
    }
}

impl BatchWriter for MockDb {
    fn commit_batch(&self, batch: WriteBatch) -> RepoResult<()> {
        for doc in batch.into_deletes() {
            match doc {
                DocRef::User(id) => self.users.borrow_mut().retain(|u| u.id != id),
                DocRef::UserEvent(id) => self.user_events.borrow_mut().retain(|e| e.id != id),
                DocRef::WellnessSession(id) => {
                    self.wellness_sessions.borrow_mut().retain(|s| s.id != id);
                }
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockIdentityGateway {
    pub accounts: RefCell<Vec<Id>>,
}

impl MockIdentityGateway {
    pub fn add_account(&self, id: Id) {
        self.accounts.borrow_mut().push(id);
    }

    pub fn has_account(&self, id: &Id) -> bool {
        self.accounts.borrow().contains(id)
    }
}

impl identity::IdentityGateway for MockIdentityGateway {
    fn verify_token(&self, token: &str) -> identity::Result<Option<Id>> {
        // Tokens are plain user ids for usecase-level tests.
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|id| id.as_str() == token)
            .cloned())
    }

    fn delete_account(&self, user_id: &Id) -> identity::Result<()> {
        let mut accounts = self.accounts.borrow_mut();
        let len_before = accounts.len();
        accounts.retain(|id| id != user_id);
        if accounts.len() == len_before {
            return Err(identity::Error::NotFound);
        }
        Ok(())
    }
}
