//! HTTP API handlers.

use axum::{extract::State, response::IntoResponse, Json};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::dapr::{DaprClient, SAVED_NUMBER_KEY};
use crate::error::SidecarError;
use crate::metrics;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the co-located Dapr sidecar.
    pub dapr: DaprClient,
}

impl AppState {
    /// Create new app state around a sidecar client.
    pub fn new(dapr: DaprClient) -> Self {
        Self { dapr }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Typed request body for `POST /saveNumber`.
#[derive(Debug, Deserialize)]
pub struct SaveNumberRequest {
    /// The number to persist under the `savedNumber` key.
    pub number: i64,
}

/// Acknowledgement returned to the sidecar for topic deliveries.
#[derive(Debug, Serialize)]
pub struct TopicAck {
    /// Always true; the sidecar treats 200 + this body as consumed.
    pub success: bool,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Returns a random integer in [0, 101] inclusive. No side effects.
pub async fn random_number() -> impl IntoResponse {
    let number: u32 = rand::thread_rng().gen_range(0..=101);
    Json(number)
}

/// Persists the posted number under the `savedNumber` key.
///
/// The sidecar's HTTP status is logged but not branched on; the handler
/// answers plain `OK` as long as the request itself went through.
pub async fn save_number(
    State(state): State<AppState>,
    Json(body): Json<SaveNumberRequest>,
) -> Result<&'static str, SidecarError> {
    let status = state
        .dapr
        .save_state(SAVED_NUMBER_KEY, Value::from(body.number))
        .await?;

    info!(number = body.number, sidecar_status = %status, "saved number");

    Ok("OK")
}

/// Reads the stored number back from the sidecar's state API.
///
/// Whatever JSON the sidecar returned is passed through unmodified,
/// including `null` when no value has been stored yet.
pub async fn saved_number(State(state): State<AppState>) -> Result<Json<Value>, SidecarError> {
    let value = state.dapr.get_state(SAVED_NUMBER_KEY).await?;
    Ok(Json(value))
}

/// Declares the topics this service wants routed to it.
pub async fn subscribe() -> impl IntoResponse {
    Json(crate::dapr::TOPICS)
}

/// Handles deliveries on topic A.
pub async fn topic_a(Json(payload): Json<Value>) -> impl IntoResponse {
    info!(topic = "A", %payload, "received topic message");
    metrics::inc_topic_messages("A");
    Json(TopicAck { success: true })
}

/// Handles deliveries on topic B.
pub async fn topic_b(Json(payload): Json<Value>) -> impl IntoResponse {
    info!(topic = "B", %payload, "received topic message");
    metrics::inc_topic_messages("B");
    Json(TopicAck { success: true })
}
