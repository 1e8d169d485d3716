use crate::contact::mail::{send_contact_message, Mailer, SendOutcome};

/// Contact form state: three required fields plus an in-flight latch
/// mirroring the page's disabled submit button.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three fields are present. Whitespace-only input does not count.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Whether a request is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Latch the form for an outgoing request. Returns false when the
    /// form is invalid or a request is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.submitting || !self.is_valid() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Release the latch with the delivery outcome. Fields are cleared
    /// only on success, so a failed attempt can be retried as typed.
    pub fn finish(&mut self, outcome: &SendOutcome) {
        self.submitting = false;
        if outcome.success {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }

    /// Begin, deliver through the mailer, finish. Returns `None` when
    /// the form is invalid or already submitting.
    pub fn submit(&mut self, mailer: &dyn Mailer) -> Option<SendOutcome> {
        if !self.try_begin() {
            return None;
        }
        let outcome = send_contact_message(mailer, &self.name, &self.email, &self.message);
        self.finish(&outcome);
        Some(outcome)
    }
}
