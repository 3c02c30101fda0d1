use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while generating sample airplanes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// Every attempt at a name for one airplane collided with an earlier one.
    ///
    /// Happens when more airplanes are requested than the generator has distinct names for.
    #[error(
        "Gave up generating a distinct name for airplane {position} of {requested} after {attempts} attempts"
    )]
    NamesExhausted {
        position: usize,
        requested: usize,
        attempts: usize,
    },
}

impl IntoResponse for SeedError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
