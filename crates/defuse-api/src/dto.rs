//! Data Transfer Objects for API requests and responses

use axum::http::StatusCode;
use axum::Json;
use defuse_core::SelectionError;
use poa::{PhaseKind, Selection};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Where the token selector is in its lifecycle
    pub phase: PhaseKind,
}

impl HealthResponse {
    pub fn new(phase: PhaseKind) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            phase,
        }
    }
}

/// Query for `GET /tokens/chains`; without `asset` the selected asset is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainsQuery {
    pub asset: Option<String>,
}

/// Asset change request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSelectRequest {
    pub asset_name: String,
}

/// Chain change request; carries the chain option's value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSelectRequest {
    pub asset_identifier: String,
}

/// Selection after a successful transition
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResponse {
    pub selection: Selection,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Error half of every fallible handler
pub type ApiFailure = (StatusCode, Json<ApiError>);

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        Self::new(err.error_code(), err.to_string())
    }
}

/// Map a selection error onto its HTTP status and body
pub fn selection_failure(err: SelectionError) -> ApiFailure {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.into()))
}
