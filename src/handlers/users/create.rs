// handlers/users/create.rs - POST /api/users handler

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;

use crate::auth;
use crate::database::models::user::User;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::user::RegisterUser;

/// POST /api/users - Register a new user.
///
/// The plaintext credential is hashed before it reaches the store. A
/// duplicate email surfaces from the unique index on insert and maps to
/// 400 regardless of timing.
pub async fn user_create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload: RegisterUser =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    let registration = payload.validate()?;

    let password_hash = auth::hash_password(&registration.password)?;
    let user = state
        .users
        .create(&registration.name, &registration.email, &password_hash)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
