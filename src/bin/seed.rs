//! Replaces every airplane in the database with freshly generated sample airplanes.
//!
//! Reads `DATABASE_URL` from the environment or a `.env` file.

use dioxus_logger::tracing;
use hangar::server::{
    config::Config,
    service::seed::{SeedService, DEFAULT_SEED_COUNT},
    startup,
};

#[tokio::main]
async fn main() {
    dioxus_logger::initialize_default();
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match SeedService::new(&db).seed_random(DEFAULT_SEED_COUNT).await {
        Ok(report) => {
            for airplane in &report.inserted {
                tracing::info!(airplane_id = %airplane.id, "Inserted {}", airplane.name);
            }
        }
        Err(e) => {
            tracing::error!("Seeding failed, airplane table left unchanged: {}", e);
            std::process::exit(1);
        }
    }
}
