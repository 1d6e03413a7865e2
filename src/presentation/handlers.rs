// HTTP request handlers
use crate::application::card_builder::CardRequest;
use crate::application::card_service::CardReading;
use crate::application::value_store::ComponentValue;
use crate::infrastructure::config::CardDefinition;
use crate::infrastructure::props::{card_to_props, CardProps};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown card key: {0}")]
    UnknownCard(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownCard(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                tracing::error!("internal error: {e:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the configured card presets
pub async fn list_cards(State(state): State<Arc<AppState>>) -> Json<Vec<CardDefinition>> {
    Json(state.card_service.definitions().to_vec())
}

/// Build a card from a full argument bag
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CardRequest>,
) -> Json<CardProps> {
    Json(card_to_props(state.card_service.build(request)))
}

/// Build a configured preset card from a live reading
pub async fn create_preset_card(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(reading): Json<CardReading>,
) -> Result<Json<CardProps>, ApiError> {
    let card = state
        .card_service
        .build_preset(&key, reading)
        .ok_or_else(|| ApiError::UnknownCard(key))?;
    Ok(Json(card_to_props(card)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueResponse {
    pub key: String,
    pub value: ComponentValue,
    pub received_at: Option<DateTime<Utc>>,
}

/// Fetch the last component value the surface reported for a card.
/// An unused key reports the null sentinel, not an error.
pub async fn get_component_value(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ValueResponse>, ApiError> {
    let stored = state.value_store.get(&key).await?;
    let (value, received_at) = match stored {
        Some(s) => (s.value, Some(s.received_at)),
        None => (ComponentValue::Null, None),
    };
    Ok(Json(ValueResponse {
        key,
        value,
        received_at,
    }))
}

/// The rendering surface reports a component value back
pub async fn report_component_value(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(value): Json<ComponentValue>,
) -> Result<StatusCode, ApiError> {
    state.value_store.put(&key, value).await?;
    Ok(StatusCode::NO_CONTENT)
}
