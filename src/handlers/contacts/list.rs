// handlers/contacts/list.rs - GET /api/contacts handler

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::database::models::contact::Contact;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListQuery {
    pub user_id: Option<i32>,
}

/// GET /api/contacts?userId=N - List a user's contacts.
///
/// The owner filter is mandatory; a missing userId is rejected before any
/// store call. An unknown owner simply yields an empty list.
pub async fn contact_list(
    State(state): State<AppState>,
    Query(query): Query<ContactListQuery>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let user_id = query
        .user_id
        .ok_or_else(|| ApiError::bad_request("Missing or invalid userId"))?;

    let contacts = state.contacts.find_by_user(user_id).await?;
    Ok(Json(contacts))
}
