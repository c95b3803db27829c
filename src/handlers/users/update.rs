// handlers/users/update.rs - PUT /api/users/:id handler

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;

use crate::auth;
use crate::database::models::user::User;
use crate::database::users::UserPatch;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::user::UpdateUser;

/// PUT /api/users/:id - Patch-style update of name/email/password.
///
/// Only fields that actually differ from the stored record enter the
/// patch; an empty patch is rejected instead of answering with a no-op
/// 200. A supplied password is always rehashed - comparing salted hashes
/// cannot detect a resubmitted credential.
pub async fn user_update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<User>, ApiError> {
    let payload: UpdateUser =
        serde_json::from_value(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;
    payload.validate()?;

    let current = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let mut patch = UserPatch::default();

    if let Some(name) = payload.name {
        if name != current.name {
            patch.name = Some(name);
        }
    }

    if let Some(email) = payload.email {
        if email != current.email {
            // Advisory lookup for a friendlier message; the unique index
            // still decides under concurrency and the late violation maps
            // to the same 400.
            if let Some(existing) = state.users.find_by_email(&email).await? {
                if existing.id != id {
                    return Err(ApiError::bad_request("Email already exists"));
                }
            }
            patch.email = Some(email);
        }
    }

    if let Some(password) = payload.password {
        patch.password = Some(auth::hash_password(&password)?);
    }

    if patch.is_empty() {
        return Err(ApiError::bad_request("No data to update"));
    }

    let user = state.users.update(id, patch).await?;
    Ok(Json(user))
}
