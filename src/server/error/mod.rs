//! Error types for the Hangar server application.
//!
//! Domain errors live in their own modules and are aggregated into [`Error`]. Every error
//! implements `IntoResponse` so controllers can return `Result<_, Error>` directly, and all
//! definitions use `thiserror` for their `Display` & `Error` implementations.

pub mod airplane;
pub mod config;
pub mod seed;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{airplane::AirplaneError, config::ConfigError, seed::SeedError},
};

/// Main error type for the Hangar server application.
///
/// Aggregates the domain-specific error types and external library errors so that `?` can
/// be used throughout services & controllers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Airplane errors (validation failures, unknown airplane IDs)
/// - Seed errors (sample data generation gave up)
/// - Database errors (query failures, lost connections, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Airplane error (validation failure or airplane not found).
    #[error(transparent)]
    AirplaneError(#[from] AirplaneError),
    /// Seed error (sample data could not be generated).
    #[error(transparent)]
    SeedError(#[from] SeedError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Requested airplane does not exist
/// - 422 Unprocessable Entity - Submitted airplane failed validation
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AirplaneError(err) => err.into_response(),
            Self::SeedError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
