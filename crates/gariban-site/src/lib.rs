//! Site plumbing shared by the scene and the server side of
//! gariban.space: route table, sitemap generation, and the contact form
//! with its outbound mailer.
//!
//! The scene crate pulls this in with `default-features = false` so the
//! SMTP transport never reaches the wasm build; the route table and form
//! state machine are plain Rust and work everywhere.

pub mod contact;
pub mod routes;
pub mod sitemap;

pub use contact::{
    send_contact_message, ContactForm, MailError, MailRequest, Mailer, SendOutcome,
};
#[cfg(feature = "smtp")]
pub use contact::SmtpMailer;
pub use routes::Route;
pub use sitemap::{sitemap_entries, to_xml, ChangeFrequency, SitemapEntry};
