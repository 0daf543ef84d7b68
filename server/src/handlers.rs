//! Route handlers.
//!
//! Todo handlers are thin: extract, call the store, wrap the result. The two
//! diagnostic handlers log everything about the request and answer with a
//! fixed status.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{Path, Query, Request, State},
    http::StatusCode,
    Json,
};
use http_body_util::BodyExt;

use crate::{
    error::ApiError,
    extract::{parse_id, JsonBody, TodoId},
    store::TodoStore,
    types::{ListParams, Todo, TodoInput},
};

pub type Db = Arc<TodoStore>;

pub async fn create_todo(
    State(db): State<Db>,
    JsonBody(input): JsonBody<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.create(input.text).await;
    tracing::info!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

pub async fn get_todo(State(db): State<Db>, TodoId(id): TodoId) -> Result<Json<Todo>, ApiError> {
    db.get(id).await.map(Json).ok_or_else(|| {
        tracing::debug!(id, "todo not found");
        ApiError::NotFound
    })
}

pub async fn update_todo(
    State(db): State<Db>,
    TodoId(id): TodoId,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    let todo = db.update(id, input.text).await.ok_or_else(|| {
        tracing::debug!(id, "update of unknown todo");
        ApiError::NotFound
    })?;
    tracing::info!(id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(State(db): State<Db>, TodoId(id): TodoId) -> Result<StatusCode, ApiError> {
    db.delete(id).await.ok_or_else(|| {
        tracing::debug!(id, "delete of unknown todo");
        ApiError::NotFound
    })?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_todos(
    State(db): State<Db>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Todo>> {
    let params = ListParams::from_pairs(&pairs);
    Json(db.list(params.is_reversed()).await)
}

/// Unregistered method on `/todo/{id}`. A non-numeric id never matched the
/// route, so it is 404 rather than 405.
pub async fn todo_id_fallback(Path(raw): Path<String>) -> StatusCode {
    match parse_id(&raw) {
        Some(_) => StatusCode::METHOD_NOT_ALLOWED,
        None => StatusCode::NOT_FOUND,
    }
}

pub async fn accept(req: Request) -> StatusCode {
    log_request(req).await;
    StatusCode::ACCEPTED
}

pub async fn any(req: Request) -> (StatusCode, &'static str) {
    log_request(req).await;
    (StatusCode::OK, "OK")
}

/// Most of a diagnostic body that gets buffered and logged.
pub const DIAGNOSTIC_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Log method, path, body and every header. An unreadable body is logged as
/// an error and treated as empty; an oversized one is cut at
/// `DIAGNOSTIC_BODY_LIMIT`.
async fn log_request(req: Request) {
    let (parts, body) = req.into_parts();
    let body = match read_capped(body, DIAGNOSTIC_BODY_LIMIT).await {
        Ok((bytes, truncated)) => {
            if truncated {
                tracing::warn!(limit = DIAGNOSTIC_BODY_LIMIT, "request body truncated");
            }
            bytes
        }
        Err(e) => {
            tracing::error!(error = %e, "error reading body");
            Bytes::new()
        }
    };

    tracing::info!("----------------------------------------");
    tracing::info!(method = %parts.method, "method");
    tracing::info!(path = parts.uri.path(), "received request");
    tracing::info!(body = %String::from_utf8_lossy(&body), "received body");
    for (name, value) in &parts.headers {
        tracing::info!(header = %name, value = ?value, "header");
    }
}

/// Buffer at most `limit` bytes of `body`. The flag is set when data past the
/// limit was dropped; the rest of the body is not read.
async fn read_capped(mut body: Body, limit: usize) -> Result<(Bytes, bool), axum::Error> {
    let mut buf = Vec::new();
    while let Some(frame) = body.frame().await {
        let Ok(data) = frame?.into_data() else {
            continue;
        };
        let room = limit - buf.len();
        if data.len() > room {
            buf.extend_from_slice(&data[..room]);
            return Ok((Bytes::from(buf), true));
        }
        buf.extend_from_slice(&data);
    }
    Ok((Bytes::from(buf), false))
}
