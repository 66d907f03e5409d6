use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

pub use state::AppState;

/// Build the full application router. The guard middleware is layered onto
/// the mutating/protected routes only; reads stay public.
pub fn app(state: AppState) -> Router {
    let guard = axum::middleware::from_fn_with_state(state.clone(), middleware::require_admin);

    let public = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/blogs", get(handlers::blog::list))
        .route("/api/blogs/:id", get(handlers::blog::get_one))
        .route("/api/causes", get(handlers::cause::list))
        .route("/api/causes/:id", get(handlers::cause::get_one))
        .route("/api/testimonials", get(handlers::testimonial::list))
        .route("/api/testimonials/:id", get(handlers::testimonial::get_one))
        .route("/api/contact", post(handlers::contact::submit))
        .route("/api/donation", post(handlers::donation::create))
        .route("/api/donation/generate-reference", get(handlers::donation::reference))
        .route("/api/donation/upload-proof", post(handlers::donation::upload_proof))
        .route("/api/chat", post(handlers::chat::message));

    let protected = Router::new()
        .route("/api/admin/profile", get(handlers::admin::profile))
        .route("/api/blogs", post(handlers::blog::create))
        .route(
            "/api/blogs/:id",
            put(handlers::blog::update).delete(handlers::blog::delete),
        )
        .route("/api/causes", post(handlers::cause::create))
        .route(
            "/api/causes/:id",
            put(handlers::cause::update).delete(handlers::cause::delete),
        )
        .route("/api/testimonials", post(handlers::testimonial::create))
        .route(
            "/api/testimonials/:id",
            put(handlers::testimonial::update).delete(handlers::testimonial::delete),
        )
        .route_layer(guard);

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(endpoint_not_found)
        // Bodies past the configured cap are refused before any handler runs
        .layer(DefaultBodyLimit::max(config::config().api.max_request_size_bytes))
        // Rate limiting runs ahead of every route, matched or not
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit,
        ))
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    let security = &config::config().security;
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        layer.allow_origin(tower_http::cors::Any)
    } else {
        layer.allow_origin(origins)
    }
}

async fn endpoint_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
