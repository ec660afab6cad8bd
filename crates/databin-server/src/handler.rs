use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use databin_store::{Document, DocumentStore};

use crate::error::{ServerError, ServerResult};
use crate::router::AppState;

/// Response envelope for write endpoints and error bodies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub message: String,
    pub status: u16,
}

/// GET /data: return the whole stored document.
pub async fn get_document(State(state): State<AppState>) -> ServerResult<Json<Document>> {
    let doc = state.store.read()?;
    Ok(Json(doc))
}

/// POST /data: replace the stored document, 201 on success.
pub async fn post_document(
    state: State<AppState>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<StatusEnvelope>)> {
    replace_document(state, body, StatusCode::CREATED)
}

/// PUT /data: replace the stored document, 200 on success.
pub async fn put_document(
    state: State<AppState>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<StatusEnvelope>)> {
    replace_document(state, body, StatusCode::OK)
}

fn replace_document(
    State(state): State<AppState>,
    body: Bytes,
    success: StatusCode,
) -> ServerResult<(StatusCode, Json<StatusEnvelope>)> {
    // Parse before touching the store: a malformed body must leave the
    // persisted document unchanged.
    let doc = Document::from_slice(&body).map_err(ServerError::InvalidBody)?;
    state.store.replace(&doc)?;
    Ok((
        success,
        Json(StatusEnvelope {
            message: "Data successfully stored/updated".to_string(),
            status: success.as_u16(),
        }),
    ))
}
