//! Airplane database insertion utilities.
//!
//! Inserts bypass the application's validation so tests can also seed rows the
//! application itself would reject.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{
    error::TestError,
    fixtures::airplane::{factory::mock_airplane_name, AirplaneFixtures},
    model::AirplaneModel,
};

impl<'a> AirplaneFixtures<'a> {
    /// Insert an airplane with the given name & description.
    ///
    /// # Returns
    /// - `Ok(AirplaneModel)` - The created record
    /// - `Err(TestError::DbErr)` - Insert failed, for example on a duplicate name
    pub async fn insert_airplane(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<AirplaneModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Airplane::insert(entity::airplane::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(description.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the `n`th mock airplane, see [`mock_airplane_name`].
    pub async fn insert_mock_airplane(&self, n: usize) -> Result<AirplaneModel, TestError> {
        self.insert_airplane(&mock_airplane_name(n), Some("Mock airplane description"))
            .await
    }

    /// Number of airplane rows currently stored.
    pub async fn count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Airplane::find()
            .count(&self.setup.db)
            .await?)
    }

    /// Every airplane row, ordered by ID.
    pub async fn all(&self) -> Result<Vec<AirplaneModel>, TestError> {
        use sea_orm::QueryOrder;

        Ok(entity::prelude::Airplane::find()
            .order_by_asc(entity::airplane::Column::Id)
            .all(&self.setup.db)
            .await?)
    }
}
