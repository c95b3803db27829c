use serde::Deserialize;

use super::{email_shape_ok, FieldError};

pub const MIN_PHONE_LENGTH: usize = 7;

/// POST /api/contacts request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<i32>,
}

/// Normalized contact creation accepted by the store.
#[derive(Debug)]
pub struct ContactDraft {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewContact {
    pub fn validate(self) -> Result<ContactDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require_name(self.name, &mut errors);
        let email = require_email(self.email, &mut errors);
        let phone = require_phone(self.phone, &mut errors);

        let user_id = match self.user_id {
            Some(user_id) => Some(user_id),
            None => {
                errors.push(FieldError::new("userId", "userId is required"));
                None
            }
        };

        match (name, email, phone, user_id) {
            (Some(name), Some(email), Some(phone), Some(user_id)) => Ok(ContactDraft {
                user_id,
                name,
                email,
                phone,
            }),
            _ => Err(errors),
        }
    }
}

/// PUT /api/contacts/:id request body. Full replacement of the mutable
/// fields; the owning user never changes on update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Normalized full-replacement update accepted by the store.
#[derive(Debug)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UpdateContact {
    pub fn validate(self) -> Result<ContactFields, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require_name(self.name, &mut errors);
        let email = require_email(self.email, &mut errors);
        let phone = require_phone(self.phone, &mut errors);

        match (name, email, phone) {
            (Some(name), Some(email), Some(phone)) => Ok(ContactFields { name, email, phone }),
            _ => Err(errors),
        }
    }
}

fn require_name(name: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match name {
        Some(name) if !name.is_empty() => Some(name),
        _ => {
            errors.push(FieldError::new("name", "Name is required"));
            None
        }
    }
}

fn require_email(email: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match email {
        Some(email) if email_shape_ok(&email) => Some(email),
        _ => {
            errors.push(FieldError::new("email", "Invalid email"));
            None
        }
    }
}

fn require_phone(phone: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match phone {
        Some(phone) if phone.len() >= MIN_PHONE_LENGTH => Some(phone),
        _ => {
            errors.push(FieldError::new(
                "phone",
                format!("Phone must be at least {MIN_PHONE_LENGTH} characters"),
            ));
            None
        }
    }
}
