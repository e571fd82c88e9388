use thiserror::Error;

use crate::entities::id::Id;

#[derive(Debug, Error)]
pub enum Error {
    /// No identity account exists for the given identifier.
    #[error("identity account not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Authentication provider that owns one identity account per user.
///
/// Identity accounts live in a separate storage system from the
/// application documents. Deleting an account is not transactional
/// with any document store write.
pub trait IdentityGateway {
    /// Resolves a bearer token to a verified user identifier.
    ///
    /// `Ok(None)` means the token is well-formed but does not belong
    /// to any account.
    fn verify_token(&self, token: &str) -> Result<Option<Id>>;

    /// Deletes the identity account, distinguishing a missing account
    /// ([`Error::NotFound`]) from all other provider failures.
    fn delete_account(&self, user_id: &Id) -> Result<()>;
}
