//! Server application core modules.
//!
//! This module contains all server-side functionality for Hangar: HTTP routing, the airplane
//! controllers, validation & persistence of airplane records, configuration, startup, and the
//! seed loader used to populate sample data.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
