use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod state;
mod validation;

use state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!(
        "Starting contact directory API in {:?} mode",
        config.environment
    );

    let pool = database::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to open database pool: {}", e));

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run database migrations");

    let app = app(AppState::new(pool));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Contact directory API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(user_routes())
        .merge(contact_routes())
        .fallback(not_found);

    let router = if config::config().security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/api/users", get(users::user_list).post(users::user_create))
        .route(
            "/api/users/:id",
            get(users::user_show)
                .put(users::user_update)
                .delete(users::user_delete),
        )
}

fn contact_routes() -> Router<AppState> {
    use handlers::contacts;

    Router::new()
        .route(
            "/api/contacts",
            get(contacts::contact_list).post(contacts::contact_create),
        )
        .route(
            "/api/contacts/:id",
            get(contacts::contact_show)
                .put(contacts::contact_update)
                .delete(contacts::contact_delete),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Contact Directory API",
        "version": version,
        "description": "User registration and personal contact management backend",
        "endpoints": {
            "users": "/api/users[/:id]",
            "contacts": "/api/contacts[/:id] (collection filtered by ?userId=)",
            "health": "/health",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}

async fn not_found() -> error::ApiError {
    error::ApiError::not_found("Route not found")
}
