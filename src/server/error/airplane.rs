use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{
    airplane::{AirplaneFormDto, AirplaneParams},
    api::ErrorDto,
};

/// Errors raised by airplane operations that are reported back to the caller.
#[derive(Error, Debug)]
pub enum AirplaneError {
    /// No airplane exists with the requested ID.
    #[error("Airplane ID {0} not found")]
    NotFound(i32),
    /// The candidate airplane failed validation and was not persisted.
    ///
    /// Carries the submitted values so the creation form can be presented again
    /// alongside every violated rule.
    #[error("Airplane failed validation: {}", .errors.join(", "))]
    Invalid {
        airplane: AirplaneParams,
        errors: Vec<String>,
    },
}

impl IntoResponse for AirplaneError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(id) => {
                tracing::debug!(airplane_id = %id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Airplane not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Invalid { airplane, errors } => {
                tracing::debug!("Rejected airplane {:?}: {}", airplane.name, errors.join(", "));

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(AirplaneFormDto { airplane, errors }),
                )
                    .into_response()
            }
        }
    }
}
