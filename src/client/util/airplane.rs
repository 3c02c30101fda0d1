#[cfg(feature = "web")]
use reqwasm::http::{Request, Response};

#[cfg(feature = "web")]
use crate::model::{
    airplane::{AirplaneDto, AirplaneFormDto, AirplaneParams},
    api::ErrorDto,
};

/// Result of submitting the new airplane form
#[cfg(feature = "web")]
pub enum CreateOutcome {
    /// Airplane stored, the API redirected to its detail resource
    Created(AirplaneDto),
    /// Validation failed, the form is returned with the error messages
    Invalid(AirplaneFormDto),
}

#[cfg(feature = "web")]
async fn error_message(response: Response) -> String {
    let status = response.status();

    match response.json::<ErrorDto>().await {
        Ok(body) => format!("Error {}: {}", status, body.error),
        Err(_) => format!("Unexpected response status: {}", status),
    }
}

#[cfg(feature = "web")]
pub async fn get_airplanes() -> Result<Vec<AirplaneDto>, String> {
    let response = Request::get("/api/airplanes")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch airplanes: {}", e))?;

    if response.status() == 200 {
        response
            .json::<Vec<AirplaneDto>>()
            .await
            .map_err(|e| format!("Failed to parse airplanes: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Fetches one airplane, `Ok(None)` when the API answers 404
#[cfg(feature = "web")]
pub async fn get_airplane(id: i32) -> Result<Option<AirplaneDto>, String> {
    let response = Request::get(&format!("/api/airplanes/{}", id))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch airplane: {}", e))?;

    match response.status() {
        200 => response
            .json::<AirplaneDto>()
            .await
            .map(Some)
            .map_err(|e| format!("Failed to parse airplane: {}", e)),
        404 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

/// Submits the form. The browser follows the 302 so a success ends on the detail resource.
#[cfg(feature = "web")]
pub async fn create_airplane(params: &AirplaneParams) -> Result<CreateOutcome, String> {
    let body =
        serde_json::to_string(params).map_err(|e| format!("Failed to encode airplane: {}", e))?;

    let response = Request::post("/api/airplanes")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to create airplane: {}", e))?;

    match response.status() {
        200 => response
            .json::<AirplaneDto>()
            .await
            .map(CreateOutcome::Created)
            .map_err(|e| format!("Failed to parse airplane: {}", e)),
        422 => response
            .json::<AirplaneFormDto>()
            .await
            .map(CreateOutcome::Invalid)
            .map_err(|e| format!("Failed to parse form errors: {}", e)),
        _ => Err(error_message(response).await),
    }
}
