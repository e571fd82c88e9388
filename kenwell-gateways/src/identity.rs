use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use parking_lot::RwLock;

use kenwell_core::{
    entities::id::Id,
    gateways::identity::{Error, IdentityGateway, Result},
};

#[derive(Default)]
struct Accounts {
    accounts: HashSet<Id>,
    tokens: HashMap<String, Id>,
}

/// Identity provider backed by process memory.
///
/// Stands in for the hosted authentication service during local
/// development and in tests. Bearer tokens are opaque strings mapped
/// directly to user identifiers; the hosted provider performs real
/// token verification behind the same trait.
#[derive(Default, Clone)]
pub struct InMemoryIdentityGateway {
    inner: Arc<RwLock<Accounts>>,
}

impl InMemoryIdentityGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_account(&self, user_id: Id) {
        self.inner.write().accounts.insert(user_id);
    }

    pub fn register_token(&self, token: impl Into<String>, user_id: Id) {
        self.inner.write().tokens.insert(token.into(), user_id);
    }

    pub fn has_account(&self, user_id: &Id) -> bool {
        self.inner.read().accounts.contains(user_id)
    }
}

impl IdentityGateway for InMemoryIdentityGateway {
    fn verify_token(&self, token: &str) -> Result<Option<Id>> {
        Ok(self.inner.read().tokens.get(token).cloned())
    }

    fn delete_account(&self, user_id: &Id) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.accounts.remove(user_id) {
            return Err(Error::NotFound);
        }
        inner.tokens.retain(|_, id| id != user_id);
        log::debug!("Deleted identity account {user_id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_registered_token() {
        let gw = InMemoryIdentityGateway::new();
        gw.register_account("u1".into());
        gw.register_token("secret", "u1".into());
        assert_eq!(Some(Id::from("u1")), gw.verify_token("secret").unwrap());
        assert_eq!(None, gw.verify_token("other").unwrap());
    }

    #[test]
    fn delete_account_distinguishes_missing_accounts() {
        let gw = InMemoryIdentityGateway::new();
        gw.register_account("u1".into());
        assert!(gw.delete_account(&"u1".into()).is_ok());
        assert!(matches!(
            gw.delete_account(&"u1".into()),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn deleting_an_account_revokes_its_tokens() {
        let gw = InMemoryIdentityGateway::new();
        gw.register_account("u1".into());
        gw.register_token("secret", "u1".into());
        gw.delete_account(&"u1".into()).unwrap();
        assert_eq!(None, gw.verify_token("secret").unwrap());
    }
}
