use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airplane::{AirplaneDto, AirplaneFormDto, AirplaneParams},
        api::ErrorDto,
    },
    server::{error::Error, model::app::AppState, service::airplane::AirplaneService},
};

pub static AIRPLANE_TAG: &str = "airplane";

/// Path of the API resource for a single airplane
pub fn airplane_path(id: i32) -> String {
    format!("/api/airplanes/{}", id)
}

/// List every airplane
#[utoipa::path(
    get,
    path = "/api/airplanes",
    tag = AIRPLANE_TAG,
    responses(
        (status = 200, description = "All airplanes in insertion order", body = Vec<AirplaneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airplanes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let airplane_service = AirplaneService::new(&state.db);

    let airplanes = airplane_service.list().await?;

    Ok((StatusCode::OK, Json(airplanes)))
}

/// Get the empty form used to create a new airplane
#[utoipa::path(
    get,
    path = "/api/airplanes/new",
    tag = AIRPLANE_TAG,
    responses(
        (status = 200, description = "Blank airplane form without errors", body = AirplaneFormDto)
    ),
)]
pub async fn new_airplane() -> impl IntoResponse {
    (StatusCode::OK, Json(AirplaneService::new_form()))
}

/// Create an airplane
///
/// Only `name` & `description` are read from the body, any other field is ignored.
///
/// # Responses
/// - 302 (Found): Airplane created, `Location` points at the new airplane
/// - 422 (Unprocessable Entity): Validation failed, body holds the submitted values & the errors
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/airplanes",
    tag = AIRPLANE_TAG,
    request_body = AirplaneParams,
    responses(
        (status = 302, description = "Airplane created, redirect to the new airplane",
            headers(("location" = String, description = "Path of the created airplane"))),
        (status = 422, description = "Validation failed", body = AirplaneFormDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    Json(params): Json<AirplaneParams>,
) -> Result<impl IntoResponse, Error> {
    let airplane_service = AirplaneService::new(&state.db);

    let airplane = airplane_service.create(params).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, airplane_path(airplane.id))],
    ))
}

/// Get a single airplane
#[utoipa::path(
    get,
    path = "/api/airplanes/{id}",
    tag = AIRPLANE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the airplane")
    ),
    responses(
        (status = 200, description = "The airplane", body = AirplaneDto),
        (status = 404, description = "Airplane not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn show_airplane(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let airplane_service = AirplaneService::new(&state.db);

    let airplane = airplane_service.show(id).await?;

    Ok((StatusCode::OK, Json(airplane)))
}
