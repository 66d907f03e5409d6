use std::sync::Arc;

use crate::middleware::rate_limit::RateLimiter;
use crate::models::{AdminPrincipal, Blog, Cause, ContactMessage, Donation, Testimonial};
use crate::services::{CannedChatProvider, ChatProvider, LogMailer, Mailer};
use crate::store::{DocumentStore, Repository};

/// Shared per-request context: the store handle, the external collaborators
/// and the rate-limiter window map. Everything else is stateless.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub mailer: Arc<dyn Mailer>,
    pub chat: Arc<dyn ChatProvider>,
    pub limiter: RateLimiter,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let api = &crate::config::config().api;
        Self {
            store,
            mailer: Arc::new(LogMailer),
            chat: Arc::new(CannedChatProvider),
            limiter: RateLimiter::new(
                api.rate_limit_requests,
                std::time::Duration::from_secs(api.rate_limit_window_secs),
            ),
        }
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn with_chat(mut self, chat: Arc<dyn ChatProvider>) -> Self {
        self.chat = chat;
        self
    }

    pub fn admins(&self) -> Repository<AdminPrincipal> {
        Repository::new(AdminPrincipal::COLLECTION, self.store.clone())
    }

    pub fn blogs(&self) -> Repository<Blog> {
        Repository::new(Blog::COLLECTION, self.store.clone())
    }

    pub fn causes(&self) -> Repository<Cause> {
        Repository::new(Cause::COLLECTION, self.store.clone())
    }

    pub fn testimonials(&self) -> Repository<Testimonial> {
        Repository::new(Testimonial::COLLECTION, self.store.clone())
    }

    pub fn contacts(&self) -> Repository<ContactMessage> {
        Repository::new(ContactMessage::COLLECTION, self.store.clone())
    }

    pub fn donations(&self) -> Repository<Donation> {
        Repository::new(Donation::COLLECTION, self.store.clone())
    }
}
