//! Selection change endpoints

use axum::{extract::State, routing::post, Json, Router};

use crate::dto::{
    selection_failure, ApiFailure, AssetSelectRequest, ChainSelectRequest, SelectionResponse,
};
use crate::AppState;

/// Create selection routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/asset", post(select_asset))
        .route("/chain", post(select_chain))
}

/// POST /selection/asset - Switch asset; chain resets to the asset's first option
pub async fn select_asset(
    State(state): State<AppState>,
    Json(request): Json<AssetSelectRequest>,
) -> Result<Json<SelectionResponse>, ApiFailure> {
    let selector = state.selector();
    let selection = selector
        .lock()
        .await
        .on_asset_change(&request.asset_name)
        .map_err(selection_failure)?;

    Ok(Json(SelectionResponse { selection }))
}

/// POST /selection/chain - Switch chain within the selected asset
pub async fn select_chain(
    State(state): State<AppState>,
    Json(request): Json<ChainSelectRequest>,
) -> Result<Json<SelectionResponse>, ApiFailure> {
    let selector = state.selector();
    let selection = selector
        .lock()
        .await
        .on_chain_change(&request.asset_identifier)
        .map_err(selection_failure)?;

    Ok(Json(SelectionResponse { selection }))
}
