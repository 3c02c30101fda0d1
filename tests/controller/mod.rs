//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, verifying status codes,
//! response bodies, and error mapping for the airplane API.


use axum::{body::to_bytes, response::Response};
use hangar_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads the whole response body and deserializes it as JSON.
async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
