//! Local-only contact form. Nothing is sent anywhere; a valid submission
//! only produces an acknowledgement note and clears the form.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Deliberately simple: rejects some valid addresses and accepts some
/// invalid ones. Keep it as is.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

pub const WARNING_MESSAGE: &str = "Please enter a valid name & email.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name is empty")]
    EmptyName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

// ============================================================================
// Note
// ============================================================================

/// Message shown under the form after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactNote {
    Warning(String),
    Acknowledged(String),
}

impl ContactNote {
    pub fn message(&self) -> &str {
        match self {
            Self::Warning(msg) | Self::Acknowledged(msg) => msg,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Warning(_) => "warn",
            Self::Acknowledged(_) => "accent",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }
}

// ============================================================================
// Form
// ============================================================================

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Trimmed field values, validated.
    pub fn validate(&self) -> Result<Submission, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(Submission {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Validate and produce the note to display. On success the fields are
    /// cleared; on failure they are left for correction.
    pub fn submit(&mut self) -> ContactNote {
        match self.validate() {
            Ok(submission) => {
                tracing::info!(name = %submission.name, "Contact form acknowledged (not sent)");
                self.clear();
                ContactNote::Acknowledged(format!(
                    "Thanks, {}! We will get back to {}.",
                    submission.name, submission.email
                ))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                ContactNote::Warning(WARNING_MESSAGE.to_string())
            }
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}
