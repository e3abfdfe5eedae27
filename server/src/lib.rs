//! HTTP surface of the user-record service.
//!
//! Four routes, each a direct translation onto one store operation:
//! list, create, wholesale update, delete. Mutations acknowledge with a
//! message body only; callers re-list to observe their effect. Cross-origin
//! requests are allowed from anywhere.
//!
//! The store is injected into [`app`] rather than constructed here, so the
//! same router serves the MySQL-backed binary and the in-memory test suites.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use store::{MemoryStore, MySqlStore, StoreError, UserStore};

/// A persisted user record as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Request body for create and update: every field, replaced wholesale.
/// No partial patch, and no field validation beyond deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Mutation acknowledgement.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    fn of(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Shared handle to whichever store backs the service.
pub type SharedStore = Arc<dyn UserStore>;

/// Build the router over the given store.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve the router on an already-bound listener.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_users(State(store): State<SharedStore>) -> Result<Json<Vec<User>>, ApiError> {
    let users = store.list().await?;
    Ok(Json(users))
}

async fn create_user(
    State(store): State<SharedStore>,
    Json(input): Json<UserInput>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    let id = store.create(&input).await?;
    debug!(id, "user created");
    Ok((StatusCode::CREATED, Ack::of("User added successfully!")))
}

async fn update_user(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(input): Json<UserInput>,
) -> Result<Json<Ack>, ApiError> {
    if !store.update(id, &input).await? {
        return Err(ApiError::NotFound { id });
    }
    debug!(id, "user updated");
    Ok(Ack::of("User updated successfully!"))
}

async fn delete_user(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, ApiError> {
    if !store.delete(id).await? {
        return Err(ApiError::NotFound { id });
    }
    debug!(id, "user deleted");
    Ok(Ack::of("User deleted successfully!"))
}
