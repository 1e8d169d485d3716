use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::contact::mail::{MailError, MailRequest, Mailer, OWNER_EMAIL};

/// Environment variable holding the Gmail app password.
pub const PASSWORD_ENV: &str = "EMAIL_PASSWORD";

/// Gmail relay host.
const SMTP_RELAY: &str = "smtp.gmail.com";

/// Mailer relaying through Gmail with the owner's credentials.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    /// Build a mailer from the `EMAIL_PASSWORD` environment variable.
    pub fn from_env() -> Result<Self, MailError> {
        let password = std::env::var(PASSWORD_ENV)
            .map_err(|_| MailError::MissingCredentials(PASSWORD_ENV.to_string()))?;
        let transport = SmtpTransport::relay(SMTP_RELAY)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(OWNER_EMAIL.to_string(), password))
            .build();
        Ok(Self { transport })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, request: &MailRequest) -> Result<(), MailError> {
        let from: Mailbox = request
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(request.from.clone()))?;
        let to: Mailbox = request
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(request.to.clone()))?;
        let reply_to: Mailbox = request
            .reply_to
            .parse()
            .map_err(|_| MailError::InvalidAddress(request.reply_to.clone()))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(request.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(request.html_body.clone())
            .map_err(|e| MailError::Assembly(e.to_string()))?;

        self.transport
            .send(&message)
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}
