mod common;

#[tokio::test]
async fn test_signup_returns_profile_and_token() {
    let ctx = common::create_test_state();
    let server = common::test_server(ctx.state);

    let response = server
        .post("/auth/signup")
        .json(&serde_json::json!({ "email": "a@example.com", "password": "hunter2222" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["user"]["email"], "a@example.com");
    assert!(!body["token"].as_str().unwrap().is_empty());
    // The credential hash never leaves the auth service.
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let ctx = common::create_test_state();
    let server = common::test_server(ctx.state);
    common::signup(&server, "a@example.com").await;

    let response = server
        .post("/auth/signup")
        .json(&serde_json::json!({ "email": "a@example.com", "password": "hunter2222" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let ctx = common::create_test_state();
    let server = common::test_server(ctx.state);

    let response = server
        .post("/auth/signup")
        .json(&serde_json::json!({ "email": "not-an-email", "password": "hunter2222" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_login_round_trip() {
    let ctx = common::create_test_state();
    let server = common::test_server(ctx.state);
    let (user_id, _) = common::signup(&server, "a@example.com").await;

    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": "a@example.com", "password": "hunter2222" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["id"], serde_json::json!(user_id));

    // The fresh token works against a protected endpoint.
    let token = body["token"].as_str().unwrap();
    let me = server
        .get("/api/me")
        .add_header("Authorization", common::bearer(token))
        .await;
    me.assert_status_ok();
    let me: serde_json::Value = me.json();
    assert_eq!(me["email"], "a@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let ctx = common::create_test_state();
    let server = common::test_server(ctx.state);
    common::signup(&server, "a@example.com").await;

    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": "a@example.com", "password": "wrong-password" }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_me_rejects_forged_token() {
    let ctx = common::create_test_state();
    let server = common::test_server(ctx.state);

    let response = server
        .get("/api/me")
        .add_header("Authorization", "Bearer forged-token-value")
        .await;

    response.assert_status_unauthorized();
}
