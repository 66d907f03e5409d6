use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat provider failed: {0}")]
    Provider(String),
}

/// Chatbot collaborator behind /api/chat. Reply generation is external;
/// this service only relays messages and returns whatever comes back.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, ChatError>;
}

/// Keyword-matched canned replies used when no external provider is wired.
pub struct CannedChatProvider;

#[async_trait]
impl ChatProvider for CannedChatProvider {
    async fn reply(&self, message: &str) -> Result<String, ChatError> {
        let lower = message.to_lowercase();
        let reply = if lower.contains("donat") {
            "You can donate from the Causes page; every cause shows its current progress toward the goal."
        } else if lower.contains("volunteer") {
            "We would love your help! Send us a message through the contact form and the team will reach out."
        } else if lower.contains("contact") || lower.contains("email") {
            "You can reach the team through the contact form; we usually reply within two working days."
        } else {
            "Thanks for your message! Browse our causes and blog for more on what we do, or ask about donating or volunteering."
        };
        Ok(reply.to_string())
    }
}
