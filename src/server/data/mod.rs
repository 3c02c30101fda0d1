//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table. They are generic over
//! `ConnectionTrait` so the same repository runs against a pooled connection or inside
//! a transaction.

pub mod airplane;

#[cfg(test)]
mod tests;
