// handlers/users/delete.rs - DELETE /api/users/:id handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::ApiError;
use crate::state::AppState;

/// DELETE /api/users/:id - Permanently remove a user.
///
/// The user's contacts go with them (ON DELETE CASCADE); a missing id is
/// 404, never a masked 500.
pub async fn user_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
