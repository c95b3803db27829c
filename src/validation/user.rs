use serde::Deserialize;

use super::{email_shape_ok, FieldError};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// POST /api/users request body. Fields deserialize as optional so that a
/// missing field reports as a violation instead of a deserializer error.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Normalized registration accepted by the store.
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn validate(self) -> Result<Registration, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match self.name {
            Some(name) if !name.is_empty() => Some(name),
            _ => {
                errors.push(FieldError::new("name", "Name is required"));
                None
            }
        };

        let email = match self.email {
            Some(email) if email_shape_ok(&email) => Some(email),
            _ => {
                errors.push(FieldError::new("email", "Invalid email"));
                None
            }
        };

        let password = match self.password {
            Some(password) if password.len() >= MIN_PASSWORD_LENGTH => Some(password),
            _ => {
                errors.push(FieldError::new(
                    "password",
                    format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
                ));
                None
            }
        };

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) => Ok(Registration {
                name,
                email,
                password,
            }),
            _ => Err(errors),
        }
    }
}

/// PUT /api/users/:id request body. Every field optional; a present field
/// must satisfy the registration rules. The empty-patch rejection happens
/// in the handler, after diffing against the stored record.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUser {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(name) = &self.name {
            if name.is_empty() {
                errors.push(FieldError::new("name", "Name is required"));
            }
        }
        if let Some(email) = &self.email {
            if !email_shape_ok(email) {
                errors.push(FieldError::new("email", "Invalid email"));
            }
        }
        if let Some(password) = &self.password {
            if password.len() < MIN_PASSWORD_LENGTH {
                errors.push(FieldError::new(
                    "password",
                    format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
