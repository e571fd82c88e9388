use serde::{Deserialize, Serialize};

/// Argument object of the cascading deletion call.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    pub user_id: String,
}

/// Successful result of the cascading deletion call.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct UserDeleted {
    pub success           : bool,
    pub message           : String,
    pub deleted_documents : u64,
}

/// Liveness payload; `status` is always `"healthy"` and `timestamp`
/// is an RFC 3339 string captured at response time.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct HealthStatus {
    pub status    : String,
    pub timestamp : String,
    pub message   : String,
}

/// Machine-readable category of a failed call.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Unauthenticated,
    PermissionDenied,
    InvalidArgument,
    FailedPrecondition,
    NotFound,
    Internal,
}

/// Error response body carried alongside the HTTP status.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}
