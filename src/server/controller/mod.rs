//! HTTP controller endpoints for the Hangar web API.
//!
//! Controllers are thin Axum handlers: they extract the request, call into the service layer,
//! and turn the outcome into an HTTP response. Every endpoint carries a utoipa annotation for
//! the OpenAPI document.

pub mod airplane;
