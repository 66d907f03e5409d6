pub mod chat;
pub mod mailer;

pub use chat::{CannedChatProvider, ChatProvider};
pub use mailer::{LogMailer, Mailer};
