//! Tests for AirplaneRepository::get_all method.

use super::*;

/// Expect airplanes in insertion order
#[tokio::test]
async fn returns_airplanes_in_insertion_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_airplane("Zulu Airlines", None)
        .with_airplane("Alpha Airlines", None)
        .with_airplane("Mike Airlines", None)
        .build()
        .await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let airplanes = airplane_repo.get_all().await?;

    let names: Vec<&str> = airplanes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Zulu Airlines", "Alpha Airlines", "Mike Airlines"]);

    Ok(())
}

/// Expect an empty list for an empty table
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_airplane_table().build().await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let airplanes = airplane_repo.get_all().await?;

    assert!(airplanes.is_empty());

    Ok(())
}

/// Expect Error when the airplane table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let result = airplane_repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}
