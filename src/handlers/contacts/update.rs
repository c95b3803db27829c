// handlers/contacts/update.rs - PUT /api/contacts/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;

use crate::database::models::contact::Contact;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::contact::UpdateContact;

/// PUT /api/contacts/:id - Replace a contact's name/email/phone.
///
/// The owning user never changes on update.
pub async fn contact_update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<Contact>, ApiError> {
    let payload: UpdateContact =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let fields = payload.validate()?;

    let contact = state.contacts.update(id, fields).await?;
    Ok(Json(contact))
}
