//! Server application models and type definitions.
//!
//! Contains the shared application state handed to every controller and the database model
//! type aliases used across repositories & services.

pub mod app;
pub mod db;
