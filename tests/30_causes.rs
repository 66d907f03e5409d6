mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{seed_admin, test_app, token_for, TestRequest};

fn cause_payload() -> serde_json::Value {
    json!({
        "title": "Emergency Medical Care",
        "description": "Treatment for injured animals.",
        "content": "Full program description.",
        "image": "/images/cause.png",
        "goalAmount": 50000,
        "category": "medical"
    })
}

#[tokio::test]
async fn create_defaults_raised_amount_and_reads_back() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;
    let token = token_for(&admin);

    let res = TestRequest::post("/api/causes")
        .bearer(&token)
        .json(&cause_payload())
        .send(app.clone())
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    let created = res.json();
    assert_eq!(created["goalAmount"], 50000.0);
    assert_eq!(created["raisedAmount"], 0.0);
    assert_eq!(created["percentRaised"], 0.0);
    let id = created["id"].as_str().unwrap().to_owned();

    // Immediate public read returns the same document
    let res = TestRequest::get(&format!("/api/causes/{}", id)).send(app).await;
    assert_eq!(res.status, StatusCode::OK);
    let fetched = res.json();
    assert_eq!(fetched["id"], id.as_str());
    assert_eq!(fetched["raisedAmount"], 0.0);
    Ok(())
}

#[tokio::test]
async fn percent_raised_is_derived_and_clamped() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;
    let token = token_for(&admin);

    let created = TestRequest::post("/api/causes")
        .bearer(&token)
        .json(&cause_payload())
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_owned();

    // Over-funding shows as exactly 100 percent
    let res = TestRequest::put(&format!("/api/causes/{}", id))
        .bearer(&token)
        .json(&json!({ "raisedAmount": 75000 }))
        .send(app.clone())
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let updated = res.json();
    assert_eq!(updated["raisedAmount"], 75000.0);
    assert_eq!(updated["percentRaised"], 100.0);

    // The derived value is not persisted
    let stored = state.causes().select_any().await?;
    let doc = serde_json::to_value(&stored[0])?;
    assert!(doc.get("percentRaised").is_none());
    Ok(())
}

#[tokio::test]
async fn raised_amount_cannot_decrease() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;
    let token = token_for(&admin);

    let created = TestRequest::post("/api/causes")
        .bearer(&token)
        .json(&cause_payload())
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_owned();

    let res = TestRequest::put(&format!("/api/causes/{}", id))
        .bearer(&token)
        .json(&json!({ "raisedAmount": 10000 }))
        .send(app.clone())
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let res = TestRequest::put(&format!("/api/causes/{}", id))
        .bearer(&token)
        .json(&json!({ "raisedAmount": 5000 }))
        .send(app)
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"], "raisedAmount cannot decrease");
    Ok(())
}

#[tokio::test]
async fn zero_goal_rejected() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;
    let token = token_for(&admin);

    let mut payload = cause_payload();
    payload["goalAmount"] = json!(0);

    let res = TestRequest::post("/api/causes")
        .bearer(&token)
        .json(&payload)
        .send(app)
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(state.causes().count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn delete_nonexistent_leaves_store_unchanged() -> Result<()> {
    let (app, state) = test_app();
    let admin = seed_admin(&state).await;
    let token = token_for(&admin);

    TestRequest::post("/api/causes")
        .bearer(&token)
        .json(&cause_payload())
        .send(app.clone())
        .await;
    assert_eq!(state.causes().count().await?, 1);

    let res = TestRequest::delete(&format!("/api/causes/{}", uuid::Uuid::new_v4()))
        .bearer(&token)
        .send(app)
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(state.causes().count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn writes_require_bearer_token() -> Result<()> {
    let (app, state) = test_app();
    seed_admin(&state).await;

    let res = TestRequest::post("/api/causes")
        .json(&cause_payload())
        .send(app.clone())
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = TestRequest::get("/api/causes").send(app).await;
    assert_eq!(res.status, StatusCode::OK);
    Ok(())
}
