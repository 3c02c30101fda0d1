use super::*;

/// Expect 200 with an empty array when no airplanes exist
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_airplane_table().build().await?;

    let result = list_airplanes(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let airplanes: Vec<AirplaneDto> = json_body(resp).await;
    assert!(airplanes.is_empty());

    Ok(())
}

/// Expect 200 with every airplane in insertion order
#[tokio::test]
async fn returns_airplanes_in_insertion_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_airplane("Zephyr Airlines", None)
        .with_airplane("Aurora Airlines", Some("Night flights"))
        .build()
        .await?;

    let resp = list_airplanes(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let airplanes: Vec<AirplaneDto> = json_body(resp).await;
    let names: Vec<&str> = airplanes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Zephyr Airlines", "Aurora Airlines"]);
    assert_eq!(airplanes[1].description.as_deref(), Some("Night flights"));

    Ok(())
}

/// Expect 500 when the airplane table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_airplanes(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}
