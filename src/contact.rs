use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SENT_MESSAGE: &str = "Message sent successfully!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Unknown contact form field: {0}")]
    UnknownField(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter Your Name",
            Self::Email => "Enter Your Email",
            Self::Subject => "Enter Your Subject",
            Self::Message => "Enter Your Message",
        }
    }
}

impl FromStr for ContactField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "message" => Ok(Self::Message),
            other => Err(ContactError::UnknownField(other.to_string())),
        }
    }
}

/// Contents of the contact form. Submitting only logs locally; nothing is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Sets a field by its input `name` attribute.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), ContactError> {
        let field = name.parse::<ContactField>()?;
        self.set(field, value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Logs the form, then resets every field. Returns what was submitted.
    pub fn submit(&mut self) -> ContactForm {
        let sent = std::mem::take(self);
        log::info!("{sent:?}");
        sent
    }
}
