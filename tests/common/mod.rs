// Shared by several test binaries; not every binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Once};
use tower::ServiceExt;

use causebase_api::models::AdminPrincipal;
use causebase_api::store::MemoryStore;
use causebase_api::{app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

static INIT: Once = Once::new();

/// Inject the signing secret before the config singleton is first touched.
/// Tests that build an `AppState` without going through `test_app` must call
/// this first, or a parallel test may freeze the config with an empty secret.
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("JWT_SECRET", TEST_SECRET);
    });
}

/// Build the router over a fresh in-memory store. The signing secret is
/// injected before the config singleton is first touched.
pub fn test_app() -> (Router, AppState) {
    init_test_env();

    let state = AppState::new(Arc::new(MemoryStore::new()));
    (app(state.clone()), state)
}

/// Provision the admin principal the way the CLI would (low bcrypt cost to
/// keep the suite fast).
pub async fn seed_admin(state: &AppState) -> AdminPrincipal {
    let hash = bcrypt::hash(ADMIN_PASSWORD, 4).expect("bcrypt hash");
    let admin = AdminPrincipal::new("admin".to_string(), hash);
    state
        .admins()
        .insert(admin.id, &admin)
        .await
        .expect("seed admin");
    admin
}

/// A token the access guard accepts for the given principal.
pub fn token_for(admin: &AdminPrincipal) -> String {
    causebase_api::auth::issue_token(admin.id, TEST_SECRET, chrono::Duration::days(30))
        .expect("issue token")
}

/// In-process request builder driving the router via tower's oneshot, so
/// no server or database is needed.
pub struct TestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl TestRequest {
    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::new(Method::PUT, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("authorization".to_owned(), format!("Bearer {}", token)));
        self
    }

    pub fn json<T: Serialize>(mut self, data: &T) -> Self {
        self.body = Some(serde_json::to_string(data).expect("serialize body"));
        self.headers.push((
            header::CONTENT_TYPE.as_str().to_owned(),
            "application/json".to_owned(),
        ));
        self
    }

    pub async fn send(self, app: Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        for (key, value) in self.headers {
            builder = builder.header(key, value);
        }

        let request = builder
            .body(Body::from(self.body.unwrap_or_default()))
            .expect("build request");

        let response = app.oneshot(request).await.expect("execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body")
            .to_vec();

        TestResponse { status, headers, body }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response was not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }
}
