//! Database model type aliases used by fixtures.

pub type AirplaneModel = entity::airplane::Model;
