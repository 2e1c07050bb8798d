//! Reconciliation of fetched tokens against the reference list
//!
//! The endpoint lists every token it knows; only those the local list marks
//! as POA-bridged make it into the working set. The reference list gates
//! inclusion only, all fields come from the fetched record.

use defuse_core::{ChainKey, RawToken};
use serde::Serialize;

use crate::token_list::ReferenceTable;

/// A fetched token that passed the POA membership check.
///
/// Only [`reconcile`] creates these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BridgeableToken(RawToken);

impl BridgeableToken {
    pub fn asset_name(&self) -> &str {
        &self.0.asset_name
    }

    pub fn intents_token_id(&self) -> &str {
        &self.0.intents_token_id
    }

    /// Full `defuse_asset_identifier`, used as the chain option value
    pub fn asset_identifier(&self) -> &str {
        &self.0.defuse_asset_identifier
    }

    pub fn chain_key(&self) -> ChainKey {
        self.0.chain_key()
    }

    pub fn raw(&self) -> &RawToken {
        &self.0
    }

    pub fn into_raw(self) -> RawToken {
        self.0
    }
}

/// Initial asset/chain selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub asset_name: String,
    pub chain_key: ChainKey,
    /// `defuse_asset_identifier` of the selected token
    pub asset_identifier: String,
}

impl Selection {
    pub fn of(token: &BridgeableToken) -> Self {
        Self {
            asset_name: token.asset_name().to_string(),
            chain_key: token.chain_key(),
            asset_identifier: token.asset_identifier().to_string(),
        }
    }
}

/// Output of [`reconcile`]. Read-only outside this module, so `initial` is
/// always `Some` exactly when `bridgeable` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    bridgeable: Vec<BridgeableToken>,
    initial: Option<Selection>,
}

impl Reconciled {
    pub fn bridgeable(&self) -> &[BridgeableToken] {
        &self.bridgeable
    }

    pub fn initial(&self) -> Option<&Selection> {
        self.initial.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.bridgeable.is_empty()
    }

    pub fn into_bridgeable(self) -> Vec<BridgeableToken> {
        self.bridgeable
    }
}

/// Keep the raw tokens listed as POA-bridgeable, in their original order, and
/// derive the default selection from the first one.
pub fn reconcile(raw: &[RawToken], reference: &ReferenceTable) -> Reconciled {
    let bridgeable: Vec<BridgeableToken> = raw
        .iter()
        .filter(|t| reference.is_poa_bridgeable(&t.intents_token_id))
        .cloned()
        .map(BridgeableToken)
        .collect();

    tracing::debug!(
        fetched = raw.len(),
        kept = bridgeable.len(),
        "Reconciled fetched tokens against reference list"
    );

    let initial = bridgeable.first().map(|first| {
        let first_of_asset = bridgeable
            .iter()
            .find(|t| t.asset_name() == first.asset_name())
            .unwrap_or(first);
        Selection::of(first_of_asset)
    });

    Reconciled {
        bridgeable,
        initial,
    }
}
