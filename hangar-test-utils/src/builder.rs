//! Declarative test builder.
//!
//! `TestBuilder` queues tables and fixtures; nothing touches the database until `build()`.

use crate::{error::TestError, TestContext};
use sea_orm::Schema;

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete
/// test environment.
pub struct TestBuilder {
    include_airplane_table: bool,

    // (name, description)
    airplanes: Vec<(String, Option<String>)>,
    mock_airplanes: usize,
}

impl TestBuilder {
    /// Create a new TestBuilder with no table or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_airplane_table: false,
            airplanes: Vec::new(),
            mock_airplanes: 0,
        }
    }

    /// Add the airplane table to the test database.
    pub fn with_airplane_table(mut self) -> Self {
        self.include_airplane_table = true;
        self
    }

    /// Insert an airplane with the given name & description during `build()`.
    ///
    /// Implies the airplane table.
    pub fn with_airplane(mut self, name: impl Into<String>, description: Option<&str>) -> Self {
        self.include_airplane_table = true;
        self.airplanes
            .push((name.into(), description.map(str::to_string)));
        self
    }

    /// Insert `count` airplanes with distinct generated names during `build()`.
    ///
    /// Implies the airplane table.
    pub fn with_mock_airplanes(mut self, count: usize) -> Self {
        self.include_airplane_table = true;
        self.mock_airplanes += count;
        self
    }

    /// Build the test context.
    ///
    /// Creates the airplane table (if requested), then inserts
    /// the explicit airplanes in order followed by the generated ones.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        if self.include_airplane_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            test.with_tables(vec![
                schema.create_table_from_entity(entity::prelude::Airplane)
            ])
            .await?;
        }

        for (name, description) in self.airplanes {
            test.airplane()
                .insert_airplane(&name, description.as_deref())
                .await?;
        }

        for n in 1..=self.mock_airplanes {
            test.airplane().insert_mock_airplane(n).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
