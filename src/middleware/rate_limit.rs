use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config;
use crate::error::ApiError;
use crate::state::AppState;

/// Fixed-window per-client request counter. Windows live in-process; a
/// restart resets every window, which is acceptable for abuse damping.
#[derive(Clone)]
pub struct RateLimiter {
    windows: Arc<RwLock<Windows>>,
    max_requests: u32,
    window: Duration,
}

struct Windows {
    map: HashMap<String, Window>,
    last_prune: Instant,
}

#[derive(Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(RwLock::new(Windows {
                map: HashMap::new(),
                last_prune: Instant::now(),
            })),
            max_requests,
            window,
        }
    }

    /// Count one request for `key`; false means the budget is exhausted.
    pub async fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.write().await;

        // Evict lapsed windows once per window length, so the map stays
        // bounded by the number of clients seen within one window.
        if now.duration_since(windows.last_prune) >= self.window {
            let window = self.window;
            windows.map.retain(|_, w| now.duration_since(w.started) < window);
            windows.last_prune = now;
        }

        let window = windows.map.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        window.count += 1;
        window.count <= self.max_requests
    }

    #[cfg(test)]
    async fn tracked_keys(&self) -> usize {
        self.windows.read().await.map.len()
    }
}

/// Per-IP rate limit applied ahead of all /api routes.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !config::config().api.enable_rate_limiting {
        return Ok(next.run(request).await);
    }

    let key = client_key(request.headers(), request.extensions().get::<ConnectInfo<SocketAddr>>());
    if !state.limiter.allow(&key).await {
        return Err(ApiError::too_many_requests(
            "Too many requests, please try again later.",
        ));
    }

    Ok(next.run(request).await)
}

/// Prefer the socket address; fall back to X-Forwarded-For behind a proxy.
fn client_key(headers: &HeaderMap, conn: Option<&ConnectInfo<SocketAddr>>) -> String {
    if let Some(ConnectInfo(addr)) = conn {
        return addr.ip().to_string();
    }
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_budget_enforced_per_key() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        for _ in 0..3 {
            assert!(limiter.allow("1.2.3.4").await);
        }
        assert!(!limiter.allow("1.2.3.4").await);
        // Other clients have their own window
        assert!(limiter.allow("5.6.7.8").await);
    }

    #[tokio::test]
    async fn test_lapsed_windows_evicted() {
        let limiter = RateLimiter::new(5, Duration::from_millis(20));
        for i in 0..100 {
            limiter.allow(&format!("10.0.0.{}", i)).await;
        }
        assert_eq!(limiter.tracked_keys().await, 100);

        tokio::time::sleep(Duration::from_millis(30)).await;

        // The next request prunes everything that lapsed
        limiter.allow("fresh-client").await;
        assert_eq!(limiter.tracked_keys().await, 1);
    }

    #[tokio::test]
    async fn test_window_rolls_over() {
        let limiter = RateLimiter::new(1, Duration::from_millis(20));
        assert!(limiter.allow("1.2.3.4").await);
        assert!(!limiter.allow("1.2.3.4").await);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(limiter.allow("1.2.3.4").await);
    }
}
