// Payload validation for the JSON API.
//
// Each payload struct deserializes loosely (every field optional) and then
// normalizes through `validate()`, which reports every violated field at
// once. Nothing past this boundary sees an unchecked value.

pub mod contact;
pub mod user;

use serde::Serialize;

/// A single violated field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Pragmatic email shape check: non-empty local part and domain around a
/// single '@', with a dot somewhere in the domain. Not full RFC 5322.
pub fn email_shape_ok(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}
