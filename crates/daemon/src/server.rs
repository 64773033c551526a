// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP routes for event submission and stash registration.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ct_core::{Controller, Event, Stash, StashId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Build the router over a shared controller
pub fn router(controller: Arc<Controller>) -> Router {
    Router::new()
        .route("/test", post(submit_event))
        .route("/stash", post(add_stash).get(list_stashes))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(controller)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventAccepted {
    pub accepted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StashAdded {
    pub id: StashId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub stashes: usize,
    pub notifiers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors returned to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid {what}: {source}")]
    Decode {
        what: &'static str,
        source: serde_json::Error,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Decode { .. } => StatusCode::BAD_REQUEST,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Decode a JSON body, logging and mapping failures to a client error
fn decode<T: DeserializeOwned>(body: &[u8], what: &'static str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| {
        warn!(what, error = %source, "decode failed");
        ApiError::Decode { what, source }
    })
}

/// Dispatch one event; delivery results are logged, not returned
async fn submit_event(
    State(controller): State<Arc<Controller>>,
    body: Bytes,
) -> Result<Json<EventAccepted>, ApiError> {
    let event: Event = decode(&body, "event")?;

    let report = controller.process(&event).await;
    debug!(
        id = event.id(),
        delivered = report.delivered(),
        suppressed = report.suppressed(),
        failed = report.failed(),
        "dispatched"
    );

    Ok(Json(EventAccepted { accepted: true }))
}

async fn add_stash(
    State(controller): State<Arc<Controller>>,
    body: Bytes,
) -> Result<Json<StashAdded>, ApiError> {
    let stash: Stash = decode(&body, "stash")?;

    let id = controller.add_stash(stash).await;
    info!(%id, "stash added");

    Ok(Json(StashAdded { id }))
}

async fn list_stashes(State(controller): State<Arc<Controller>>) -> Json<BTreeMap<StashId, Stash>> {
    Json(controller.stashes().await)
}

async fn health(State(controller): State<Arc<Controller>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        stashes: controller.stash_count().await,
        notifiers: controller.notifier_names().await,
    })
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
