//! Airplane service layer.
//!
//! Implements the four airplane operations exposed over HTTP: listing every airplane,
//! producing an empty creation form, creating a validated airplane, and showing a single
//! airplane by ID.

pub mod validation;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::airplane::{AirplaneDto, AirplaneFormDto, AirplaneParams},
    server::{
        data::airplane::{AirplaneRepository, NewAirplane},
        error::{airplane::AirplaneError, Error},
        model::db::AirplaneModel,
        service::airplane::validation::{validate_airplane, violation_messages, Violation},
    },
};

impl From<AirplaneModel> for AirplaneDto {
    fn from(airplane: AirplaneModel) -> Self {
        Self {
            id: airplane.id,
            name: airplane.name,
            description: airplane.description,
            created_at: airplane.created_at,
        }
    }
}

impl From<&AirplaneParams> for NewAirplane {
    /// An empty description is stored as NULL.
    fn from(params: &AirplaneParams) -> Self {
        let description = if params.description.is_empty() {
            None
        } else {
            Some(params.description.clone())
        };

        Self {
            name: params.name.clone(),
            description,
        }
    }
}

/// Service for airplane operations.
pub struct AirplaneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneService<'a> {
    /// Creates a new instance of AirplaneService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every airplane in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<AirplaneDto>)` - All airplanes, possibly empty
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list(&self) -> Result<Vec<AirplaneDto>, Error> {
        let airplane_repo = AirplaneRepository::new(self.db);

        let airplanes = airplane_repo.get_all().await?;

        Ok(airplanes.into_iter().map(AirplaneDto::from).collect())
    }

    /// Returns the empty form used to create a new airplane.
    pub fn new_form() -> AirplaneFormDto {
        AirplaneFormDto::default()
    }

    /// Validates & persists a new airplane.
    ///
    /// The uniqueness lookup and the insert run inside one transaction. Should a concurrent
    /// request insert the same name between the two, the storage unique constraint rejects
    /// the insert and it is reported as the same validation failure.
    ///
    /// # Arguments
    /// - `params` - Whitelisted user input
    ///
    /// # Returns
    /// - `Ok(AirplaneDto)` - The stored airplane including its assigned ID
    /// - `Err(Error::AirplaneError(AirplaneError::Invalid))` - Validation failed, nothing stored
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: AirplaneParams) -> Result<AirplaneDto, Error> {
        let candidate = NewAirplane::from(&params);

        let txn = self.db.begin().await?;
        let airplane_repo = AirplaneRepository::new(&txn);

        let name_taken = airplane_repo.name_exists(&candidate.name).await?;

        if let Err(violations) = validate_airplane(&candidate, name_taken) {
            txn.rollback().await?;

            return Err(AirplaneError::Invalid {
                airplane: params,
                errors: violation_messages(&violations),
            }
            .into());
        }

        let airplane = match airplane_repo.create(candidate).await {
            Ok(airplane) => airplane,
            Err(err) => {
                txn.rollback().await?;

                return Err(insert_error(err, params));
            }
        };

        txn.commit().await?;

        tracing::info!(airplane_id = %airplane.id, "Created airplane {:?}", airplane.name);

        Ok(airplane.into())
    }

    /// Retrieves a single airplane.
    ///
    /// # Arguments
    /// - `id` - ID of the airplane
    ///
    /// # Returns
    /// - `Ok(AirplaneDto)` - The airplane
    /// - `Err(Error::AirplaneError(AirplaneError::NotFound))` - No airplane has this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn show(&self, id: i32) -> Result<AirplaneDto, Error> {
        let airplane_repo = AirplaneRepository::new(self.db);

        let airplane = airplane_repo
            .get_by_id(id)
            .await?
            .ok_or(AirplaneError::NotFound(id))?;

        Ok(airplane.into())
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// A concurrent create won the race for the name: report it like the validator would.
fn insert_error(err: DbErr, params: AirplaneParams) -> Error {
    if is_unique_violation(&err) {
        AirplaneError::Invalid {
            airplane: params,
            errors: violation_messages(&[Violation::NameTaken]),
        }
        .into()
    } else {
        err.into()
    }
}
