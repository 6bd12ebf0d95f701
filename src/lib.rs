//! Layered in-memory todo REST API.
//!
//! Request flow: axum handler (controller) → [`service::TodoService`] →
//! [`repository::TodoRepository`] → [`store::Store`]. Each layer either
//! passes data through or raises a typed failure the layer above interprets.

use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
pub mod store;

use repository::TodoRepository;
use service::TodoService;
use store::{MemoryStore, Store};

/// Shared application state. The store is constructed once at startup and
/// injected here; there is no global collection.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TodoService>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let service = TodoService::new(TodoRepository::new(store));
        Self {
            service: Arc::new(service),
        }
    }
}

/// Router over an empty in-memory store.
pub fn app() -> Router {
    app_with_state(AppState::new(Arc::new(MemoryStore::new())))
}

/// Router over the fixed seed data set.
pub fn seeded_app() -> Router {
    let store = MemoryStore::with_todos(seed::seed_todos());
    app_with_state(AppState::new(Arc::new(store)))
}

pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_index))
        .route("/api/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route("/api/todos/status", get(handlers::todos_by_status))
        .route("/api/todos/search", get(handlers::search_todos))
        .route(
            "/api/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/api/todos/:id/toggle", patch(handlers::toggle_todo))
        .with_state(state)
}
