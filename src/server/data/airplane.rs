use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::AirplaneModel;

/// Values for an airplane that has not been persisted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAirplane {
    pub name: String,
    pub description: Option<String>,
}

pub struct AirplaneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirplaneRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn active_model(airplane: NewAirplane) -> entity::airplane::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::airplane::ActiveModel {
            name: ActiveValue::Set(airplane.name),
            description: ActiveValue::Set(airplane.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }

    /// Insert a single airplane, returning the stored record with its assigned ID
    ///
    /// # Notes
    /// - Fails with a unique constraint violation if the name is already stored
    pub async fn create(&self, airplane: NewAirplane) -> Result<AirplaneModel, DbErr> {
        entity::prelude::Airplane::insert(Self::active_model(airplane))
            .exec_with_returning(self.db)
            .await
    }

    /// Insert a batch of airplanes in a single statement
    ///
    /// # Notes
    /// - Either every airplane is inserted or none is
    /// - Returns an empty list without querying when `airplanes` is empty
    pub async fn create_many(
        &self,
        airplanes: Vec<NewAirplane>,
    ) -> Result<Vec<AirplaneModel>, DbErr> {
        if airplanes.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Airplane::insert_many(airplanes.into_iter().map(Self::active_model))
            .exec_with_returning(self.db)
            .await
    }

    /// Get every airplane in insertion order
    pub async fn get_all(&self) -> Result<Vec<AirplaneModel>, DbErr> {
        entity::prelude::Airplane::find()
            .order_by_asc(entity::airplane::Column::Id)
            .all(self.db)
            .await
    }

    /// Get an airplane by its ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<AirplaneModel>, DbErr> {
        entity::prelude::Airplane::find_by_id(id).one(self.db).await
    }

    /// Check whether an airplane with exactly this name is stored (case-sensitive)
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Airplane::find()
            .filter(entity::airplane::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Delete every airplane, returning how many rows were removed
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Airplane::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
