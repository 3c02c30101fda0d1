//! Factory functions for in-memory airplane values.
//!
//! Pure functions, no database access.

/// Name of the `n`th mock airplane, distinct for every `n` and always valid.
pub fn mock_airplane_name(n: usize) -> String {
    format!("Mock Carrier {} Airlines", n)
}
