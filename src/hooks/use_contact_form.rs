use std::time::Duration;

use dioxus::prelude::*;

use crate::browser;
use crate::config::LandingConfig;

/// Identifies one accepted submission. Only the newest ticket may clear
/// the acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckTicket(u64);

/// The footer contact form: current input plus the transient
/// "submission received" flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    email: String,
    acknowledged: bool,
    generation: u64,
}

impl ContactForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Accept the current input if it is non-empty. The email is dropped
    /// here; nothing downstream receives it.
    pub fn submit(&mut self) -> Option<AckTicket> {
        if self.email.is_empty() {
            return None;
        }
        self.email.clear();
        self.acknowledged = true;
        self.generation += 1;
        Some(AckTicket(self.generation))
    }

    /// Clear the acknowledgement if `ticket` is still the latest one.
    /// Returns whether the flag was reset.
    pub fn expire(&mut self, ticket: AckTicket) -> bool {
        if ticket.0 != self.generation || !self.acknowledged {
            return false;
        }
        self.acknowledged = false;
        true
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ContactFormState {
    pub form: Signal<ContactForm>,
    reset_delay: Duration,
}

pub fn use_contact_form() -> ContactFormState {
    let config = use_context::<LandingConfig>();
    let form = use_signal(ContactForm::default);

    ContactFormState {
        form,
        reset_delay: config.ack_reset_delay(),
    }
}

impl ContactFormState {
    pub fn email(&self) -> String {
        self.form.read().email().to_string()
    }

    pub fn is_acknowledged(&self) -> bool {
        self.form.read().is_acknowledged()
    }

    pub fn set_email(&mut self, email: String) {
        self.form.write().set_email(email);
    }

    /// Handle a form submit. Schedules the acknowledgement reset on the
    /// calling component's scope, so unmounting cancels it.
    pub fn submit(&mut self) {
        let Some(ticket) = self.form.write().submit() else {
            return;
        };
        tracing::debug!("contact submission acknowledged");

        let mut form = self.form;
        let delay = self.reset_delay;
        spawn(async move {
            browser::sleep(delay).await;
            if form.write().expire(ticket) {
                tracing::debug!("contact acknowledgement cleared");
            }
        });
    }
}
