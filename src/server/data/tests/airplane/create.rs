//! Tests for AirplaneRepository::create method.

use sea_orm::SqlErr;

use super::*;

/// Expect Ok with an assigned ID & matching fields when inserting a new airplane
#[tokio::test]
async fn creates_airplane() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_airplane_table().build().await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let result = airplane_repo
        .create(new_airplane("SkyHigh Airlines", Some("x")))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.name, "SkyHigh Airlines");
    assert_eq!(created.description.as_deref(), Some("x"));
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(test.airplane().count().await?, 1);

    Ok(())
}

/// Expect distinct, increasing IDs for consecutive inserts
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_airplane_table().build().await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let first = airplane_repo
        .create(new_airplane("First Airlines", None))
        .await?;
    let second = airplane_repo
        .create(new_airplane("Second Airlines", None))
        .await?;

    assert!(second.id > first.id);

    Ok(())
}

/// Expect a unique constraint violation when the name already exists
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_airplane("SkyHigh Airlines", None)
        .build()
        .await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let result = airplane_repo
        .create(new_airplane("SkyHigh Airlines", Some("y")))
        .await;

    let err = result.unwrap_err();
    assert!(
        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
        "Error: {:?}",
        err
    );
    assert_eq!(test.airplane().count().await?, 1);

    Ok(())
}

/// Expect Error when the airplane table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let airplane_repo = AirplaneRepository::new(&test.db);
    let result = airplane_repo
        .create(new_airplane("SkyHigh Airlines", None))
        .await;

    assert!(result.is_err());

    Ok(())
}
