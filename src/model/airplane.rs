use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted airplane as returned by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AirplaneDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input accepted when creating an airplane.
///
/// Only `name` & `description` are read from a request body, any other field is
/// dropped during deserialization. Missing fields default to empty strings so that
/// a missing name is reported by validation rather than rejected as malformed JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct AirplaneParams {
    pub name: String,
    pub description: String,
}

/// State of the airplane creation form: the candidate values plus any validation errors
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AirplaneFormDto {
    pub airplane: AirplaneParams,
    pub errors: Vec<String>,
}
