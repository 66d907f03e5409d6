pub mod admin;
pub mod blog;
pub mod cause;
pub mod contact;
pub mod donation;
pub mod testimonial;

pub use admin::AdminPrincipal;
pub use blog::Blog;
pub use cause::Cause;
pub use contact::ContactMessage;
pub use donation::Donation;
pub use testimonial::Testimonial;
