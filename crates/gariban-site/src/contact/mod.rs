pub mod form;
pub mod mail;
#[cfg(feature = "smtp")]
pub mod smtp;

pub use form::ContactForm;
pub use mail::{send_contact_message, MailError, MailRequest, Mailer, SendOutcome};
#[cfg(feature = "smtp")]
pub use smtp::SmtpMailer;
