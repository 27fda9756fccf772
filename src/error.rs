use rocket::{http::Status, response::Responder, serde::json::Json, Request};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::DuplicateIdError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a single election service request.
///
/// None of these are fatal to the server; each is scoped to the request that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// The RPC status code name for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }

    /// The HTTP status this error is reported with.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidArgument(_) => Status::BadRequest,
            Self::AlreadyExists(_) => Status::Conflict,
            Self::NotFound(_) => Status::NotFound,
        }
    }
}

impl From<DuplicateIdError> for Error {
    fn from(err: DuplicateIdError) -> Self {
        Self::AlreadyExists(err.to_string())
    }
}

/// JSON body sent alongside an error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'o> {
        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_becomes_already_exists() {
        let err: Error = DuplicateIdError("E1".to_string()).into();
        assert_eq!(err, Error::AlreadyExists("election (E1) already exists".to_string()));
        assert_eq!(err.code(), "ALREADY_EXISTS");
        assert_eq!(err.status(), Status::Conflict);
    }

    #[test]
    fn statuses() {
        assert_eq!(Error::invalid_argument("x").status(), Status::BadRequest);
        assert_eq!(Error::invalid_argument("x").code(), "INVALID_ARGUMENT");
        assert_eq!(Error::not_found("x").status(), Status::NotFound);
        assert_eq!(Error::not_found("x").code(), "NOT_FOUND");
    }
}
