//! Tests for AirplaneRepository::get_by_id method.

use super::*;

/// Expect Some with the stored airplane
#[tokio::test]
async fn finds_existing_airplane() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_airplane_table().build().await?;
    let existing = test
        .airplane()
        .insert_airplane("SkyHigh Airlines", Some("x"))
        .await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let result = airplane_repo.get_by_id(existing.id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let found = result.unwrap();
    assert_eq!(found, Some(existing));

    Ok(())
}

/// Expect None for an ID that was never assigned
#[tokio::test]
async fn returns_none_for_nonexistent_airplane() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_airplanes(2).build().await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let result = airplane_repo.get_by_id(999).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    Ok(())
}
