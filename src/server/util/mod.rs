//! Utility functions and helpers for server operations.
//!
//! - `faker` - Random company names & filler paragraphs used to generate sample airplanes

pub mod faker;
