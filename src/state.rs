use sqlx::PgPool;

use crate::database::contacts::ContactStore;
use crate::database::users::UserStore;

/// Shared application state: store handles over one connection pool,
/// constructed once at startup and cloned into each handler via axum State.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub users: UserStore,
    pub contacts: ContactStore,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            contacts: ContactStore::new(pool.clone()),
            pool,
        }
    }
}
