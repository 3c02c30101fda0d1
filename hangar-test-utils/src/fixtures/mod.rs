//! Test fixtures for database records.
//!
//! - `airplane` - Airplane records and in-memory airplane models

pub mod airplane;
