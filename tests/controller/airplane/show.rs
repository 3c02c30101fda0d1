use super::*;

/// Expect 200 with the stored fields of the requested airplane
#[tokio::test]
async fn returns_airplane() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_airplane_table().build().await?;
    let airplane = test
        .airplane()
        .insert_airplane("SkyHigh Airlines", Some("x"))
        .await?;

    let result = show_airplane(State(test.to_app_state()), Path(airplane.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let dto: AirplaneDto = json_body(resp).await;
    assert_eq!(dto.id, airplane.id);
    assert_eq!(dto.name, "SkyHigh Airlines");
    assert_eq!(dto.description.as_deref(), Some("x"));

    Ok(())
}

/// Expect 404 for an ID that was never assigned
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_airplanes(2).build().await?;

    let result = show_airplane(State(test.to_app_state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Airplane not found");

    Ok(())
}

/// Expect 500 when the airplane table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = show_airplane(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
