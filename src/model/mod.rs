//! Data transfer objects shared by the server API and the web client.

pub mod airplane;
pub mod api;
