use axum::http::header;

use super::*;

fn params(name: &str, description: &str) -> AirplaneParams {
    AirplaneParams {
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Expect 302 pointing at the new airplane, which is then retrievable
#[tokio::test]
async fn redirects_to_created_airplane() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_airplane_table().build().await?;

    let result = create_airplane(
        State(test.to_app_state()),
        Json(params("SkyHigh Airlines", "x")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FOUND);

    let stored = test.airplane().all().await?;
    assert_eq!(stored.len(), 1);
    let location = resp.headers().get(header::LOCATION).unwrap();
    assert_eq!(
        location.to_str().unwrap(),
        format!("/api/airplanes/{}", stored[0].id)
    );

    Ok(())
}

/// Expect 422 with the submitted values & the error message for a short name
#[tokio::test]
async fn rejects_short_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_airplane_table().build().await?;

    let result = create_airplane(State(test.to_app_state()), Json(params("SkyHi", "y"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let form: AirplaneFormDto = json_body(resp).await;
    assert_eq!(form.airplane, params("SkyHi", "y"));
    assert_eq!(
        form.errors,
        vec!["Name is too short (minimum is 6 characters)".to_string()]
    );
    assert_eq!(test.airplane().count().await?, 0);

    Ok(())
}

/// Expect 422 for a name already used by another airplane
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_airplane("SkyHigh Airlines", Some("x"))
        .build()
        .await?;

    let result = create_airplane(
        State(test.to_app_state()),
        Json(params("SkyHigh Airlines", "y")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let form: AirplaneFormDto = json_body(resp).await;
    assert_eq!(form.errors, vec!["Name has already been taken".to_string()]);
    assert_eq!(test.airplane().count().await?, 1);

    Ok(())
}

/// Expect a body field outside the whitelist to be ignored
#[tokio::test]
async fn ignores_unknown_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_airplane_table().build().await?;

    let body: AirplaneParams = serde_json::from_value(serde_json::json!({
        "id": 4242,
        "name": "SkyHigh Airlines",
        "description": "x",
        "admin": true
    }))
    .unwrap();

    let resp = create_airplane(State(test.to_app_state()), Json(body))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::FOUND);
    let stored = test.airplane().all().await?;
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].id, 4242);

    Ok(())
}

/// Expect 500 when the airplane table does not exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_airplane(
        State(test.to_app_state()),
        Json(params("SkyHigh Airlines", "x")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
