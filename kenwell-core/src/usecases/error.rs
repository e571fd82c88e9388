use thiserror::Error;

use crate::{authorization, gateways::identity, repositories};

/// Failure vocabulary of the administrative usecases.
///
/// Every variant maps to exactly one caller-facing error kind at the
/// transport boundary; see the webserver's error translation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("User must be authenticated to delete users")]
    Unauthenticated,
    #[error("Calling user not found in database")]
    CallingUserNotFound,
    #[error("Only administrators can delete users")]
    NotAnAdministrator,
    #[error("userId is required")]
    MissingUserId,
    #[error("You cannot delete your own account")]
    SelfDeletion,
    #[error("User authentication account not found")]
    IdentityAccountNotFound,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Identity(anyhow::Error),
}

impl From<authorization::Error> for Error {
    fn from(err: authorization::Error) -> Self {
        match err {
            authorization::Error::UnauthorizedRole => Self::NotAnAdministrator,
        }
    }
}

impl From<identity::Error> for Error {
    fn from(err: identity::Error) -> Self {
        match err {
            identity::Error::NotFound => Self::IdentityAccountNotFound,
            identity::Error::Other(err) => Self::Identity(err),
        }
    }
}
