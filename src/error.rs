//! Error types for the activity directory and server startup.

use std::path::PathBuf;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias using [`ActivityError`].
pub type Result<T> = std::result::Result<T, ActivityError>;

/// Client-facing failures of directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// No activity with the requested name.
    #[error("Activity not found")]
    NotFound {
        /// The requested activity name.
        activity_name: String,
    },

    /// Signup for an activity the email is already on.
    #[error("{email} is already signed up for this activity")]
    AlreadySignedUp {
        /// The duplicate email.
        email: String,
    },

    /// Unregister of an email that is not on the roster.
    #[error("{email} is not signed up for this activity")]
    NotSignedUp {
        /// The missing email.
        email: String,
    },

    /// Query string could not be decoded, e.g. the `email` parameter is missing.
    #[error("{message}")]
    InvalidQuery {
        /// Status chosen by the rejecting extractor.
        status: StatusCode,
        /// Rejection text.
        message: String,
    },
}

impl From<QueryRejection> for ActivityError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ActivityError {
    /// Creates a not-found error for the given activity name.
    pub fn not_found(activity_name: impl Into<String>) -> Self {
        Self::NotFound {
            activity_name: activity_name.into(),
        }
    }

    /// HTTP status the error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp { .. } | Self::NotSignedUp { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidQuery { status, .. } => *status,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// Failures while assembling the server configuration and seed data.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        key: &'static str,
        /// The raw value.
        value: String,
    },

    /// Seed file could not be read.
    #[error("Cannot read seed file {path}: {source}")]
    SeedRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid directory JSON.
    #[error("Cannot parse seed file {path}: {source}")]
    SeedParse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Seed data breaks a directory invariant.
    #[error("Invalid seed data for {activity_name:?}: {reason}")]
    InvalidSeed {
        /// Offending activity.
        activity_name: String,
        /// What is wrong with it.
        reason: String,
    },
}
