// handlers/contacts/show.rs - GET /api/contacts/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::models::contact::Contact;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/contacts/:id - Fetch a single contact by id.
pub async fn contact_show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state
        .contacts
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact not found"))?;

    Ok(Json(contact))
}
