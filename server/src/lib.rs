//! In-memory todo HTTP service.
//!
//! # Overview
//! CRUD over a process-local list of todos plus two diagnostic endpoints
//! (`/accept`, `/any`) that log whatever they receive.
//!
//! # Design
//! - The store is an explicitly owned `TodoStore` shared through router
//!   state, never a global. It is lost on restart.
//! - Ids come from a monotonic counter and are never reused.
//! - Handlers return `ApiError` for the two failure shapes: an empty 404 and
//!   a plain-text 400.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    routing::{any, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{LogFormat, ServerConfig};
pub use error::{ApiError, ConfigError, ServerError};
pub use store::TodoStore;
pub use types::{Todo, TodoInput};

/// Router over a freshly seeded store.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded())
}

/// Router over the given store.
pub fn app_with_store(store: TodoStore) -> Router {
    let db: handlers::Db = Arc::new(store);
    Router::new()
        .route("/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todo/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo)
                .fallback(handlers::todo_id_fallback),
        )
        .route("/accept", post(handlers::accept))
        .route("/any", any(handlers::any))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Serve the seeded app until the listener fails.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve according to `config` until Ctrl-C.
pub async fn serve(listener: TcpListener, config: &ServerConfig) -> Result<(), std::io::Error> {
    let store = if config.seed {
        TodoStore::seeded()
    } else {
        TodoStore::new()
    };
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
