use super::*;

/// Expect 200 with a blank form and no errors
#[tokio::test]
async fn returns_blank_form() {
    let resp = new_airplane().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let form: AirplaneFormDto = json_body(resp).await;
    assert_eq!(form.airplane.name, "");
    assert_eq!(form.airplane.description, "");
    assert!(form.errors.is_empty());
}
