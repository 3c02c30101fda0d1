//! Seed loader for sample airplane data.
//!
//! Replaces the content of the airplane table with freshly generated airplanes. The clear
//! and the insert share one transaction, so a failing candidate leaves the table untouched.

use std::collections::HashSet;

use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::airplane::AirplaneParams,
    server::{
        data::airplane::{AirplaneRepository, NewAirplane},
        error::{airplane::AirplaneError, seed::SeedError, Error},
        model::db::AirplaneModel,
        service::airplane::validation::{validate_airplane, violation_messages},
        util::faker,
    },
};

/// Number of airplanes inserted by the `seed` binary.
pub const DEFAULT_SEED_COUNT: usize = 20;

/// Outcome of a successful seed run.
#[derive(Debug)]
pub struct SeedReport {
    /// Number of airplanes deleted before inserting
    pub removed: u64,
    /// The inserted airplanes, in insertion order
    pub inserted: Vec<AirplaneModel>,
}

/// Attempts at a distinct name for a single airplane before generation gives up.
pub const MAX_NAME_ATTEMPTS: usize = 1_000;

/// Generates `count` sample airplanes with distinct names.
///
/// Names follow the `<company name> Airlines` pattern and descriptions are filler
/// paragraphs. A generated name colliding with an earlier one is regenerated, at most
/// [`MAX_NAME_ATTEMPTS`] times per airplane.
///
/// # Returns
/// - `Ok(Vec<NewAirplane>)` - Exactly `count` airplanes
/// - `Err(SeedError::NamesExhausted)` - No unused name was found for one of the airplanes
pub fn generate_airplanes<R: Rng>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<NewAirplane>, SeedError> {
    let mut names = HashSet::with_capacity(count);
    let mut airplanes = Vec::with_capacity(count);

    while airplanes.len() < count {
        let mut attempts = 0;
        let name = loop {
            if attempts == MAX_NAME_ATTEMPTS {
                return Err(SeedError::NamesExhausted {
                    position: airplanes.len() + 1,
                    requested: count,
                    attempts,
                });
            }
            attempts += 1;

            let name = format!("{} Airlines", faker::company_name(rng));
            if names.insert(name.clone()) {
                break name;
            }
        };

        airplanes.push(NewAirplane {
            name,
            description: Some(faker::hipster_paragraph(rng)),
        });
    }

    Ok(airplanes)
}

/// Service clearing & repopulating the airplane table.
pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of SeedService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces every airplane with `count` randomly generated ones.
    ///
    /// See [`SeedService::seed`] for the transactional behavior. Fails with
    /// `Error::SeedError` before touching the table when the names run out.
    pub async fn seed_random(&self, count: usize) -> Result<SeedReport, Error> {
        let airplanes = generate_airplanes(count, &mut rand::rng())?;

        self.seed(airplanes).await
    }

    /// Deletes every airplane then inserts `airplanes`.
    ///
    /// All-or-nothing: the delete, the validation of every candidate, and the batch insert
    /// run in one transaction. Since the table is empty once the delete ran, a candidate's
    /// name is only taken if an earlier candidate of the same batch uses it.
    ///
    /// # Arguments
    /// - `airplanes` - Candidates to insert, in order
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - Old airplanes removed, every candidate inserted
    /// - `Err(Error::AirplaneError(AirplaneError::Invalid))` - The first invalid candidate;
    ///   the transaction was rolled back and the table is unchanged
    /// - `Err(Error::DbErr)` - Database operation failed, the table is unchanged
    pub async fn seed(&self, airplanes: Vec<NewAirplane>) -> Result<SeedReport, Error> {
        let txn = self.db.begin().await?;
        let airplane_repo = AirplaneRepository::new(&txn);

        let removed = airplane_repo.delete_all().await?;

        let mut names = HashSet::with_capacity(airplanes.len());
        for airplane in &airplanes {
            let name_taken = !names.insert(airplane.name.as_str());

            if let Err(violations) = validate_airplane(airplane, name_taken) {
                txn.rollback().await?;

                return Err(AirplaneError::Invalid {
                    airplane: AirplaneParams {
                        name: airplane.name.clone(),
                        description: airplane.description.clone().unwrap_or_default(),
                    },
                    errors: violation_messages(&violations),
                }
                .into());
            }
        }

        let inserted = airplane_repo.create_many(airplanes).await?;

        txn.commit().await?;

        tracing::info!(
            "Seeded airplane table: removed {} airplanes, inserted {}",
            removed,
            inserted.len()
        );

        Ok(SeedReport { removed, inserted })
    }
}
