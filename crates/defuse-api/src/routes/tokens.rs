//! Token listing endpoints

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use defuse_core::SelectionError;
use poa::{ChainOption, TokenSelectorState};

use crate::dto::{selection_failure, ApiFailure, ChainsQuery};
use crate::AppState;

/// Create token routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/state", get(get_state))
        .route("/assets", get(get_assets))
        .route("/chains", get(get_chains))
}

/// GET /tokens/state - Phase, options and current selection
pub async fn get_state(State(state): State<AppState>) -> Json<TokenSelectorState> {
    let selector = state.selector();
    let snapshot = selector.lock().await.snapshot();
    Json(snapshot)
}

/// GET /tokens/assets - Asset dropdown options
pub async fn get_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiFailure> {
    let selector = state.selector();
    let selector = selector.lock().await;
    let machine = selector.machine().ok_or_else(|| not_ready(selector.phase_kind().as_str()))?;

    Ok(Json(
        machine
            .available_assets()
            .into_iter()
            .map(str::to_string)
            .collect(),
    ))
}

/// GET /tokens/chains[?asset=] - Chain dropdown options for an asset,
/// the selected one by default
pub async fn get_chains(
    State(state): State<AppState>,
    Query(query): Query<ChainsQuery>,
) -> Result<Json<Vec<ChainOption>>, ApiFailure> {
    let selector = state.selector();
    let selector = selector.lock().await;
    let machine = selector.machine().ok_or_else(|| not_ready(selector.phase_kind().as_str()))?;

    let asset = match query.asset {
        Some(asset) => asset,
        None => match machine.selection() {
            Some(selection) => selection.asset_name.clone(),
            // empty working set, nothing selected
            None => return Ok(Json(Vec::new())),
        },
    };
    Ok(Json(machine.chain_options(&asset)))
}

fn not_ready(phase: &'static str) -> ApiFailure {
    selection_failure(SelectionError::NotReady { phase })
}
