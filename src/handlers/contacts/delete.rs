// handlers/contacts/delete.rs - DELETE /api/contacts/:id handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::ApiError;
use crate::state::AppState;

/// DELETE /api/contacts/:id - Remove a single contact.
pub async fn contact_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.contacts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
