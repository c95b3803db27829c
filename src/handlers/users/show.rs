// handlers/users/show.rs - GET /api/users/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::models::user::User;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/users/:id - Fetch a single user by id.
pub async fn user_show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}
