// handlers/contacts/create.rs - POST /api/contacts handler

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;

use crate::database::models::contact::Contact;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::contact::NewContact;

/// POST /api/contacts - Create a contact owned by an existing user.
///
/// Ownership is enforced by the foreign key on insert; an unknown userId
/// maps to 400 from the constraint violation itself.
pub async fn contact_create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let payload: NewContact =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let draft = payload.validate()?;

    let contact = state.contacts.create(draft).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}
