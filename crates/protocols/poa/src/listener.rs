//! Selection notifications for the embedding View

use crate::reconcile::BridgeableToken;
use crate::selection::SelectionEvent;

/// Receives load and selection notifications.
///
/// Every method defaults to a no-op, so a listener only implements the
/// callbacks it cares about.
pub trait SelectionListener: Send + Sync {
    fn on_tokens_loaded(&self, _tokens: &[BridgeableToken]) {}

    fn on_asset_select(&self, _token: &BridgeableToken) {}

    fn on_chain_select(&self, _token: &BridgeableToken) {}
}

/// Listener that ignores everything
pub struct NoopListener;

impl SelectionListener for NoopListener {}

/// Listener that logs every notification
pub struct TracingListener;

impl SelectionListener for TracingListener {
    fn on_tokens_loaded(&self, tokens: &[BridgeableToken]) {
        tracing::info!("Loaded {} bridgeable tokens", tokens.len());
    }

    fn on_asset_select(&self, token: &BridgeableToken) {
        tracing::info!(asset = token.asset_name(), "Asset selected");
    }

    fn on_chain_select(&self, token: &BridgeableToken) {
        tracing::info!(
            asset = token.asset_name(),
            chain = %token.chain_key(),
            "Chain selected"
        );
    }
}

/// Deliver events to `listener` in order
pub fn dispatch(listener: &dyn SelectionListener, events: &[SelectionEvent]) {
    for event in events {
        match event {
            SelectionEvent::AssetSelected(token) => listener.on_asset_select(token),
            SelectionEvent::ChainSelected(token) => listener.on_chain_select(token),
        }
    }
}
