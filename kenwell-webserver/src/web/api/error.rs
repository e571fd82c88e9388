use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use super::json_error_response;
use kenwell_application::error::{AppError, BError};
use kenwell_boundary::ErrorKind;
pub use kenwell_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            // A body without a usable `userId` is the same caller
            // mistake as an empty identifier.
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

fn kind_for_status(status: Status) -> ErrorKind {
    match status.code {
        c if c == Status::BadRequest.code || c == Status::UnprocessableEntity.code => {
            ErrorKind::InvalidArgument
        }
        c if c == Status::Unauthorized.code => ErrorKind::Unauthenticated,
        c if c == Status::Forbidden.code => ErrorKind::PermissionDenied,
        c if c == Status::NotFound.code => ErrorKind::NotFound,
        c if c == Status::PreconditionFailed.code => ErrorKind::FailedPrecondition,
        _ => ErrorKind::Internal,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(BError::Parameter(ref param)) = err {
                    let (kind, status) = match param {
                        ParameterError::Unauthenticated => {
                            (ErrorKind::Unauthenticated, Status::Unauthorized)
                        }
                        ParameterError::CallingUserNotFound
                        | ParameterError::NotAnAdministrator => {
                            (ErrorKind::PermissionDenied, Status::Forbidden)
                        }
                        ParameterError::MissingUserId => {
                            (ErrorKind::InvalidArgument, Status::BadRequest)
                        }
                        ParameterError::SelfDeletion => {
                            (ErrorKind::FailedPrecondition, Status::PreconditionFailed)
                        }
                        ParameterError::IdentityAccountNotFound => {
                            (ErrorKind::NotFound, Status::NotFound)
                        }
                        ParameterError::Repo(_) | ParameterError::Identity(_) => {
                            error!("Delete user error: {param}");
                            return json_error_response(
                                req,
                                ErrorKind::Internal,
                                format!("Failed to delete user: {param}"),
                                Status::InternalServerError,
                            );
                        }
                    };
                    return json_error_response(req, kind, param.to_string(), status);
                }
                error!("Error: {err}");
                json_error_response(
                    req,
                    ErrorKind::Internal,
                    format!("Failed to delete user: {err}"),
                    Status::InternalServerError,
                )
            }
            Error::OtherWithStatus(err, status) => {
                json_error_response(req, kind_for_status(status), err.to_string(), status)
            }
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(
                    req,
                    ErrorKind::Internal,
                    err.to_string(),
                    Status::InternalServerError,
                )
            }
        }
    }
}
