use std::net::SocketAddr;
use std::sync::Arc;

use causebase_api::state::AppState;
use causebase_api::store::PgStore;
use causebase_api::{app, config};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Causebase API in {:?} mode", config.environment);

    // A deployment without a signing secret must refuse to start: falling
    // back to a default secret would make every issued token forgeable.
    if config.security.jwt_secret.is_empty() {
        eprintln!("JWT_SECRET is not set; refusing to start");
        std::process::exit(1);
    }

    let store = match PgStore::connect().await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(store);
    let app = app(state).into_make_service_with_connect_info::<SocketAddr>();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Causebase API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
