use serde::Serialize;

/// Address that both sends and receives contact mail. The visitor's own
/// address travels as the Reply-To and inside the message body.
pub const OWNER_EMAIL: &str = "furkankirci12@gmail.com";

/// User-facing outcome text on success.
pub const SUCCESS_MESSAGE: &str = "Mesajınız başarıyla gönderildi!";
/// User-facing outcome text on failure.
pub const FAILURE_MESSAGE: &str = "Mesaj gönderilirken bir hata oluştu.";

/// Errors that can occur while assembling or delivering mail.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The SMTP password is not present in the environment.
    #[error("missing credentials: {0} is not set")]
    MissingCredentials(String),

    /// A mailbox string failed to parse.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The message could not be built.
    #[error("message assembly failed: {0}")]
    Assembly(String),

    /// The transport rejected or failed to deliver the message.
    #[error("transport error: {0}")]
    Transport(String),
}

/// An assembled outbound mail.
#[derive(Debug, Clone, PartialEq)]
pub struct MailRequest {
    pub from: String,
    pub to: String,
    /// Visitor address, so a reply goes straight back to the sender.
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

impl MailRequest {
    /// Build the contact-form notification mail.
    pub fn contact(name: &str, email: &str, message: &str) -> Self {
        Self {
            from: OWNER_EMAIL.to_string(),
            to: OWNER_EMAIL.to_string(),
            reply_to: email.to_string(),
            subject: format!("Portfolio İletişim Formu - {}", name),
            html_body: render_html_body(name, email, message),
        }
    }
}

fn render_html_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "<h2>Yeni İletişim Mesajı</h2>\n\
         <p><strong>Gönderen:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Mesaj:</strong></p>\n\
         <p>{message}</p>\n\
         <hr>\n\
         <p><small>Bu mesaj portfolio sitenizden gönderilmiştir.</small></p>"
    )
}

/// Delivery outcome surfaced to the page, mirroring the form UI contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendOutcome {
    pub success: bool,
    pub message: String,
}

/// Anything that can deliver an assembled mail request.
/// The production implementation is `SmtpMailer`; tests use mocks.
pub trait Mailer {
    fn send(&self, request: &MailRequest) -> Result<(), MailError>;
}

/// Assemble and send the contact notification, mapping the result to a
/// user-facing outcome. Errors are logged here, never shown raw.
pub fn send_contact_message(
    mailer: &dyn Mailer,
    name: &str,
    email: &str,
    message: &str,
) -> SendOutcome {
    let request = MailRequest::contact(name, email, message);
    match mailer.send(&request) {
        Ok(()) => SendOutcome {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        },
        Err(err) => {
            log::error!("contact mail delivery failed: {}", err);
            SendOutcome {
                success: false,
                message: FAILURE_MESSAGE.to_string(),
            }
        }
    }
}
