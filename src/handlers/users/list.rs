// handlers/users/list.rs - GET /api/users handler

use axum::{extract::State, response::Json};

use crate::database::models::user::User;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/users - List every registered user.
///
/// Password hashes are excluded at the serializer level, so the store
/// records can be returned directly.
pub async fn user_list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.find_all().await?;
    Ok(Json(users))
}
