//! # Todo Service - Singleton Todo CRUD API
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the health and todo endpoints
//! - [`models`] - The todo entity, request decoding and application state
//! - [`services`] - Injectable clock and the singleton todo store
//! - [`utils`] - Constants, configuration statics and value coercion
//!
//! ## Routes
//!
//! All routes live under `/api/v1`:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/health` | [`handlers::health_check`] |
//! | GET | `/todos` | [`handlers::list_todos`] |
//! | POST | `/todos` | [`handlers::create_todo`] |
//! | GET | `/todos/{id}` | [`handlers::get_todo`] |
//! | PUT | `/todos/{id}` | [`handlers::update_todo`] |
//! | DELETE | `/todos/{id}` | [`handlers::delete_todo`] |

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{
    create_todo, delete_todo, get_todo, health_check, list_todos, update_todo,
};
use crate::models::AppState;
use crate::services::{Clock, SystemClock};
use crate::utils::constant::API_PREFIX;

/// Creates an Axum router backed by the system clock.
///
/// This is a convenience function that calls [`app_with_clock`] with a [`SystemClock`].
#[inline]
pub fn app() -> Router {
    app_with_clock(Arc::new(SystemClock))
}

/// Creates an Axum router with application routes and a fresh, empty todo store.
///
/// Each call owns its own store, so separate routers never share a todo.
///
/// # Arguments
///
/// * `clock` - Source of every `created_at` / `updated_at` timestamp
pub fn app_with_clock(clock: Arc<dyn Clock>) -> Router {
    let state = Arc::new(AppState::new(clock));

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        );

    info!(prefix = API_PREFIX, "Routes configured");

    Router::new()
        .nest(API_PREFIX, api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
