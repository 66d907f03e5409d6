use async_trait::async_trait;
use thiserror::Error;

use crate::models::ContactMessage;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Mail delivery failed: {0}")]
    Delivery(String),
}

/// Outbound mail collaborator for contact-form submissions. The real
/// transport lives outside this service; implementations only hand off.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), MailerError>;
}

/// Default collaborator: records the hand-off in the log. Deployments wire
/// a real transport behind the same trait.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), MailerError> {
        tracing::info!(
            contact_id = %message.id,
            from = %message.email,
            "contact message queued for delivery"
        );
        Ok(())
    }
}
