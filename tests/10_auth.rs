mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{seed_admin, test_app, token_for, TestRequest, ADMIN_PASSWORD, TEST_SECRET};

#[tokio::test]
async fn login_with_valid_credentials_returns_token() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;

    let res = TestRequest::post("/api/admin/login")
        .json(&json!({ "username": "admin", "password": ADMIN_PASSWORD }))
        .send(app.clone())
        .await;

    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["username"], "admin");
    assert_eq!(body["id"], admin.id.to_string());
    let token = body["token"].as_str().expect("token in response");

    // The guard accepts the freshly issued token
    let res = TestRequest::get("/api/admin/profile")
        .bearer(token)
        .send(app)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let profile = res.json();
    assert_eq!(profile["username"], "admin");
    assert!(profile.get("passwordHash").is_none(), "hash must not leak");

    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_rejected() -> Result<()> {
    let (app, state) = test_app();
    seed_admin(&state).await;

    let res = TestRequest::post("/api/admin/login")
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .send(app)
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json(), json!({ "error": "Invalid username or password" }));
    Ok(())
}

#[tokio::test]
async fn login_with_unknown_username_indistinguishable() -> Result<()> {
    let (app, state) = test_app();
    seed_admin(&state).await;

    let res = TestRequest::post("/api/admin/login")
        .json(&json!({ "username": "nobody", "password": ADMIN_PASSWORD }))
        .send(app)
        .await;

    // Same status and body as a wrong password, so usernames cannot be probed
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json(), json!({ "error": "Invalid username or password" }));
    Ok(())
}

#[tokio::test]
async fn login_with_missing_fields_rejected() -> Result<()> {
    let (app, _) = test_app();

    let res = TestRequest::post("/api/admin/login")
        .json(&json!({ "username": "admin" }))
        .send(app)
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn profile_without_header_rejected() -> Result<()> {
    let (app, state) = test_app();
    seed_admin(&state).await;

    let res = TestRequest::get("/api/admin/profile").send(app).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["error"], "Missing Authorization header");
    Ok(())
}

#[tokio::test]
async fn malformed_authorization_header_rejected() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;
    let token = token_for(&admin);

    // Wrong scheme
    let res = TestRequest::get("/api/admin/profile")
        .json(&json!({}))
        .bearer("")
        .send(app.clone())
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    // Right scheme works
    let res = TestRequest::get("/api/admin/profile")
        .bearer(&token)
        .send(app)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn expired_token_rejected() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;

    let expired =
        causebase_api::auth::issue_token(admin.id, TEST_SECRET, chrono::Duration::days(-1))?;

    let res = TestRequest::get("/api/admin/profile")
        .bearer(&expired)
        .send(app)
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["error"], "Invalid or expired token");
    Ok(())
}

#[tokio::test]
async fn token_signed_with_other_secret_rejected() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;

    let forged =
        causebase_api::auth::issue_token(admin.id, "a-different-secret", chrono::Duration::days(30))?;

    let res = TestRequest::get("/api/admin/profile")
        .bearer(&forged)
        .send(app)
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn token_for_missing_principal_rejected() -> Result<()> {
    let (app, state) = test_app();
    seed_admin(&state).await;

    // Valid signature, but the encoded principal does not exist
    let orphan = causebase_api::auth::issue_token(Uuid::new_v4(), TEST_SECRET, chrono::Duration::days(30))?;

    let res = TestRequest::get("/api/admin/profile")
        .bearer(&orphan)
        .send(app)
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["error"], "Admin account no longer exists");
    Ok(())
}
