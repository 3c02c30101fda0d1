//! Test harness for Hangar.
//!
//! Tests follow two phases: a [`TestBuilder`] declares the tables & fixtures a test needs, then
//! `build()` returns a [`TestContext`] backed by an in-memory SQLite database which the test
//! runs against.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::airplane::factory, TestBuilder, TestContext, TestError};
}
