//! Service layer containing business logic.
//!
//! Services sit between the HTTP controllers and the data repositories. They own the
//! transaction boundaries, run validation before every write, and convert database models
//! into the DTOs returned by the API.
//!
//! - `airplane` - List, new-form, create, and show operations for airplanes
//! - `seed` - Clearing and repopulating the airplane table with generated sample data

pub mod airplane;
pub mod seed;
