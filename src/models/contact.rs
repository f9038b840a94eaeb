// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form fields and the JSON payload sent to the form endpoint.

use serde::Serialize;

/// Raw contact form input as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Identifies one of the four form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Trimmed, validated body posted to the form endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Build the payload, or `None` when any field is blank after trimming.
    ///
    /// No email-shape or length checks are applied.
    pub fn to_payload(&self) -> Option<ContactPayload> {
        let trimmed = |s: &str| Some(s.trim().to_string()).filter(|t| !t.is_empty());
        Some(ContactPayload {
            name: trimmed(&self.name)?,
            email: trimmed(&self.email)?,
            subject: trimmed(&self.subject)?,
            message: trimmed(&self.message)?,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: " Ada ".into(),
            email: "ada@example.org".into(),
            subject: "Hello".into(),
            message: "Nice site\n".into(),
        }
    }

    #[test]
    fn payload_trims_every_field() {
        let payload = filled().to_payload().expect("all fields present");
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.message, "Nice site");
    }

    #[test]
    fn whitespace_only_field_is_blank() {
        let mut fields = filled();
        fields.subject = "   ".into();
        assert!(fields.to_payload().is_none());
    }

    #[test]
    fn email_shape_is_not_checked() {
        let mut fields = filled();
        fields.email = "not an address".into();
        assert!(fields.to_payload().is_some());
    }

    #[test]
    fn payload_serializes_with_expected_keys() {
        let json = serde_json::to_value(filled().to_payload().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.org",
                "subject": "Hello",
                "message": "Nice site",
            })
        );
    }
}
