//! Database model type aliases.
//!
//! Aliases for the SeaORM entity models used throughout the server so that repositories and
//! services don't need to spell out paths into the generated `entity` crate.

/// Type alias for the airplane database model.
///
/// # Fields (from `entity::airplane::Model`)
/// - `id` - Primary key assigned by the database on insert
/// - `name` - Unique airplane name, at least 6 characters
/// - `description` - Optional free-form description
/// - `created_at` - Timestamp when the airplane was inserted
/// - `updated_at` - Timestamp of the last change, equal to `created_at` as airplanes are never updated
pub type AirplaneModel = entity::airplane::Model;
