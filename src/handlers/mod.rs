pub mod admin;
pub mod blog;
pub mod cause;
pub mod chat;
pub mod contact;
pub mod donation;
pub mod health;
pub mod testimonial;
