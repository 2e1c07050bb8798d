//! Dependent asset → chain selection
//!
//! The working set is fixed once loaded. The machine is either `Empty` (no
//! bridgeable tokens, nothing to select, for the rest of the session) or
//! `Ready` with a selection that always points at a token of the working set.
//! Transitions return the notifications they produce, in delivery order.

use std::collections::HashSet;

use defuse_core::SelectionError;

use crate::constants::chain_display_name;
use crate::reconcile::{BridgeableToken, Reconciled, Selection};
use crate::state::ChainOption;

/// Notification produced by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    AssetSelected(BridgeableToken),
    ChainSelected(BridgeableToken),
}

#[derive(Debug, Clone, PartialEq)]
enum MachineState {
    Empty,
    Ready(Selection),
}

/// Selection state over a fixed set of bridgeable tokens
#[derive(Debug, Clone)]
pub struct SelectionStateMachine {
    tokens: Vec<BridgeableToken>,
    state: MachineState,
}

impl SelectionStateMachine {
    /// Start `Ready` on the first token, or `Empty` when there are none
    pub fn new(reconciled: Reconciled) -> Self {
        let tokens = reconciled.into_bridgeable();
        let state = match tokens.first() {
            Some(first) => MachineState::Ready(Selection::of(first)),
            None => MachineState::Empty,
        };
        Self { tokens, state }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, MachineState::Empty)
    }

    pub fn tokens(&self) -> &[BridgeableToken] {
        &self.tokens
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            MachineState::Ready(selection) => Some(selection),
            MachineState::Empty => None,
        }
    }

    /// The token the current chain choice points at
    pub fn selected_token(&self) -> Option<&BridgeableToken> {
        let selection = self.selection()?;
        self.find_by_identifier(&selection.asset_identifier)
    }

    /// Notifications announcing the default selection after load
    pub fn initial_events(&self) -> Vec<SelectionEvent> {
        match self.selected_token() {
            Some(token) => vec![
                SelectionEvent::AssetSelected(token.clone()),
                SelectionEvent::ChainSelected(token.clone()),
            ],
            None => Vec::new(),
        }
    }

    /// Unique asset names in first-occurrence order
    pub fn available_assets(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tokens
            .iter()
            .map(|t| t.asset_name())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Every token of `asset_name`, in working-set order
    pub fn available_chains(&self, asset_name: &str) -> Vec<&BridgeableToken> {
        self.tokens
            .iter()
            .filter(|t| t.asset_name() == asset_name)
            .collect()
    }

    /// Chain dropdown options for `asset_name`
    pub fn chain_options(&self, asset_name: &str) -> Vec<ChainOption> {
        self.available_chains(asset_name)
            .into_iter()
            .map(|t| {
                let chain_key = t.chain_key();
                ChainOption {
                    value: t.asset_identifier().to_string(),
                    display_name: chain_display_name(chain_key.as_str()).to_string(),
                    chain_key,
                }
            })
            .collect()
    }

    /// Switch asset; the chain falls back to the asset's first token.
    pub fn on_asset_change(
        &mut self,
        asset_name: &str,
    ) -> Result<Vec<SelectionEvent>, SelectionError> {
        self.ensure_ready()?;

        let token = self
            .tokens
            .iter()
            .find(|t| t.asset_name() == asset_name)
            .cloned()
            .ok_or_else(|| SelectionError::InvalidAsset {
                asset: asset_name.to_string(),
            })?;

        tracing::debug!(
            asset = asset_name,
            chain = %token.chain_key(),
            "Asset selection changed"
        );
        self.state = MachineState::Ready(Selection::of(&token));

        Ok(vec![
            SelectionEvent::AssetSelected(token.clone()),
            SelectionEvent::ChainSelected(token),
        ])
    }

    /// Switch chain by asset identifier. The selected asset name is left as is.
    pub fn on_chain_change(
        &mut self,
        asset_identifier: &str,
    ) -> Result<Vec<SelectionEvent>, SelectionError> {
        self.ensure_ready()?;

        let token = self
            .find_by_identifier(asset_identifier)
            .cloned()
            .ok_or_else(|| SelectionError::InvalidChain {
                chain: asset_identifier.to_string(),
            })?;

        if let MachineState::Ready(selection) = &mut self.state {
            if token.asset_name() != selection.asset_name {
                tracing::warn!(
                    selected_asset = %selection.asset_name,
                    chain_asset = token.asset_name(),
                    "Chain chosen outside the selected asset's options"
                );
            }
            selection.chain_key = token.chain_key();
            selection.asset_identifier = token.asset_identifier().to_string();
        }

        tracing::debug!(chain = %token.chain_key(), "Chain selection changed");
        Ok(vec![SelectionEvent::ChainSelected(token)])
    }

    fn ensure_ready(&self) -> Result<(), SelectionError> {
        match self.state {
            MachineState::Ready(_) => Ok(()),
            MachineState::Empty => Err(SelectionError::NotReady { phase: "empty" }),
        }
    }

    fn find_by_identifier(&self, asset_identifier: &str) -> Option<&BridgeableToken> {
        self.tokens
            .iter()
            .find(|t| t.asset_identifier() == asset_identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::reconcile;
    use crate::reconcile::tests::fixture;
    use crate::token_list::ReferenceTable;

    fn ready_machine() -> SelectionStateMachine {
        let (reference, raw) = fixture();
        SelectionStateMachine::new(reconcile(&raw, &reference))
    }

    fn event_ids(events: &[SelectionEvent]) -> Vec<(&'static str, &str)> {
        events
            .iter()
            .map(|e| match e {
                SelectionEvent::AssetSelected(t) => ("asset", t.asset_identifier()),
                SelectionEvent::ChainSelected(t) => ("chain", t.asset_identifier()),
            })
            .collect()
    }

    #[test]
    fn test_empty_machine() {
        let reference = ReferenceTable::new(vec![]);
        let mut machine = SelectionStateMachine::new(reconcile(&[], &reference));

        assert!(machine.is_empty());
        assert!(machine.selection().is_none());
        assert!(machine.available_assets().is_empty());
        assert!(machine.initial_events().is_empty());
        assert_eq!(
            machine.on_asset_change("USDC"),
            Err(SelectionError::NotReady { phase: "empty" })
        );
        assert_eq!(
            machine.on_chain_change("eth:1:0xa0b8"),
            Err(SelectionError::NotReady { phase: "empty" })
        );
    }

    #[test]
    fn test_available_assets_unique_in_first_occurrence_order() {
        let machine = ready_machine();
        assert_eq!(machine.available_assets(), vec!["USDC", "BTC", "ETH"]);
    }

    #[test]
    fn test_available_chains_cover_exactly_the_asset() {
        let machine = ready_machine();
        let identifiers = |asset: &str| -> Vec<String> {
            machine
                .available_chains(asset)
                .iter()
                .map(|t| t.asset_identifier().to_string())
                .collect()
        };

        assert_eq!(identifiers("USDC"), vec!["eth:1:0xa0b8", "sol:mainnet:epjf"]);
        assert_eq!(identifiers("BTC"), vec!["btc:mainnet:native"]);
        assert_eq!(identifiers("ETH"), vec!["eth:1:native", "base:8453:native"]);
        // filtered out by reconciliation
        assert!(identifiers("NEAR").is_empty());
        assert!(identifiers("PEPE").is_empty());
        assert!(identifiers("DOGE").is_empty());
    }

    #[test]
    fn test_initial_events_announce_first_token() {
        let machine = ready_machine();
        assert_eq!(
            event_ids(&machine.initial_events()),
            vec![("asset", "eth:1:0xa0b8"), ("chain", "eth:1:0xa0b8")]
        );
    }

    #[test]
    fn test_asset_change_selects_first_chain_of_asset() {
        let mut machine = ready_machine();
        let events = machine.on_asset_change("ETH").unwrap();

        assert_eq!(
            event_ids(&events),
            vec![("asset", "eth:1:native"), ("chain", "eth:1:native")]
        );
        let selection = machine.selection().unwrap();
        assert_eq!(selection.asset_name, "ETH");
        assert_eq!(selection.chain_key.as_str(), "eth:1");
        assert!(machine
            .available_chains("ETH")
            .iter()
            .any(|t| t.chain_key() == selection.chain_key));
    }

    #[test]
    fn test_asset_change_resets_chain() {
        let mut machine = ready_machine();
        machine.on_chain_change("sol:mainnet:epjf").unwrap();
        machine.on_asset_change("BTC").unwrap();
        machine.on_asset_change("USDC").unwrap();

        let selection = machine.selection().unwrap();
        assert_eq!(selection.chain_key.as_str(), "eth:1");
    }

    #[test]
    fn test_invalid_asset_leaves_state_unchanged() {
        let mut machine = ready_machine();
        let before = machine.selection().cloned();

        let err = machine.on_asset_change("DOGE").unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidAsset {
                asset: "DOGE".to_string()
            }
        );
        assert_eq!(machine.selection().cloned(), before);
    }

    #[test]
    fn test_chain_change_within_asset() {
        let mut machine = ready_machine();
        let events = machine.on_chain_change("sol:mainnet:epjf").unwrap();

        assert_eq!(event_ids(&events), vec![("chain", "sol:mainnet:epjf")]);
        let selection = machine.selection().unwrap();
        assert_eq!(selection.asset_name, "USDC");
        assert_eq!(selection.chain_key.as_str(), "sol:mainnet");
        assert_eq!(
            machine.selected_token().unwrap().intents_token_id(),
            "usdc-sol"
        );
    }

    #[test]
    fn test_chain_change_never_changes_asset() {
        let mut machine = ready_machine();
        // identifier belongs to ETH while USDC is selected
        machine.on_chain_change("base:8453:native").unwrap();

        let selection = machine.selection().unwrap();
        assert_eq!(selection.asset_name, "USDC");
        assert_eq!(selection.chain_key.as_str(), "base:8453");
    }

    #[test]
    fn test_invalid_chain_leaves_state_unchanged() {
        let mut machine = ready_machine();
        let before = machine.selection().cloned();

        // chain keys are not accepted, only full identifiers
        let err = machine.on_chain_change("eth:1").unwrap_err();
        assert_eq!(
            err,
            SelectionError::InvalidChain {
                chain: "eth:1".to_string()
            }
        );
        assert_eq!(machine.selection().cloned(), before);
    }

    #[test]
    fn test_chain_options_for_dropdown() {
        let machine = ready_machine();
        let options = machine.chain_options("ETH");

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "eth:1:native");
        assert_eq!(options[0].display_name, "Ethereum");
        assert_eq!(options[1].chain_key.as_str(), "base:8453");
        assert_eq!(options[1].display_name, "Base");
    }
}
