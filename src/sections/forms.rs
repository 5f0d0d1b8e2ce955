//! Lead-generation (audit request) and newsletter forms.
//!
//! Submitting only validates and flips a local flag; nothing is sent.

use crate::i18n::ContentTree;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::info;

/// Reasons a form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Required field is empty: {0:?}")]
    MissingField(AuditField),

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Unknown standard: '{0}'")]
    UnknownStandard(String),
}

/// Fields of the audit request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditField {
    Name,
    Company,
    Email,
    Phone,
    Standard,
    Message,
}

impl AuditField {
    pub const REQUIRED: [AuditField; 4] = [
        AuditField::Name,
        AuditField::Company,
        AuditField::Email,
        AuditField::Standard,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Translated field label.
    pub fn label(&self, content: &ContentTree) -> &'static str {
        let fields = &content.audit.form.fields;
        match self {
            AuditField::Name => fields.name,
            AuditField::Company => fields.company,
            AuditField::Email => fields.email,
            AuditField::Phone => fields.phone,
            AuditField::Standard => fields.standard,
            AuditField::Message => fields.message,
        }
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Same shape a browser accepts for `<input type="email">`.
fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .unwrap()
    });
    regex.is_match(email)
}

/// Audit request form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub standard: String,
    pub message: String,
    submitted: bool,
}

impl AuditForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: AuditField) -> &str {
        match field {
            AuditField::Name => &self.name,
            AuditField::Company => &self.company,
            AuditField::Email => &self.email,
            AuditField::Phone => &self.phone,
            AuditField::Standard => &self.standard,
            AuditField::Message => &self.message,
        }
    }

    /// Edit a field. Any edit hides the success message.
    pub fn update(&mut self, field: AuditField, value: impl Into<String>) {
        self.submitted = false;
        let slot = match field {
            AuditField::Name => &mut self.name,
            AuditField::Company => &mut self.company,
            AuditField::Email => &mut self.email,
            AuditField::Phone => &mut self.phone,
            AuditField::Standard => &mut self.standard,
            AuditField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Validate against the active language's standards and mark the form
    /// as submitted. Field values are kept.
    pub fn submit(&mut self, content: &ContentTree) -> Result<(), FormError> {
        for field in AuditField::REQUIRED {
            if self.value(field).trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }

        if !content.audit.standards.contains(&self.standard.as_str()) {
            return Err(FormError::UnknownStandard(self.standard.clone()));
        }

        info!("Audit request submitted for {}", self.standard);
        self.submitted = true;
        Ok(())
    }

    /// Success message, shown only after a submit.
    pub fn success_message(&self, content: &ContentTree) -> Option<&'static str> {
        self.submitted.then_some(content.audit.form.success)
    }
}

/// Footer newsletter signup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    subscribed: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.subscribed = false;
        self.email = email.into();
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Mark as subscribed and clear the field.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }

        info!("Newsletter signup recorded");
        self.subscribed = true;
        self.email.clear();
        Ok(())
    }

    pub fn success_message(&self, content: &ContentTree) -> Option<&'static str> {
        self.subscribed.then_some(content.footer.newsletter.success)
    }
}
