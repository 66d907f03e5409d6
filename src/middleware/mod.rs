pub mod auth;
pub mod rate_limit;

pub use auth::{require_admin, AuthAdmin};
pub use rate_limit::{rate_limit, RateLimiter};
