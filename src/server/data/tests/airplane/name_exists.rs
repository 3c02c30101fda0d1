//! Tests for AirplaneRepository::name_exists method.

use super::*;

/// Expect true for an exact match
#[tokio::test]
async fn true_for_exact_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_airplane("SkyHigh Airlines", None)
        .build()
        .await?;

    let airplane_repo = AirplaneRepository::new(&test.db);

    assert!(airplane_repo.name_exists("SkyHigh Airlines").await?);

    Ok(())
}

/// Expect false for names differing only in case
#[tokio::test]
async fn comparison_is_case_sensitive() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_airplane("SkyHigh Airlines", None)
        .build()
        .await?;

    let airplane_repo = AirplaneRepository::new(&test.db);

    assert!(!airplane_repo.name_exists("skyhigh airlines").await?);
    assert!(!airplane_repo.name_exists("SkyHigh").await?);

    Ok(())
}
