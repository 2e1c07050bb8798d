//! Serializable state types for frontend communication

use defuse_core::ChainKey;
use serde::Serialize;

use crate::reconcile::Selection;

/// One option of the chain dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainOption {
    /// Full asset identifier, sent back on chain change
    pub value: String,
    pub chain_key: ChainKey,
    pub display_name: String,
}

/// Lifecycle phase of the selector as seen by the View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKind {
    Loading,
    Error,
    Empty,
    Ready,
    Closed,
}

impl PhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Empty => "empty",
            Self::Ready => "ready",
            Self::Closed => "closed",
        }
    }
}

/// Everything the View needs to render the selector
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSelectorState {
    pub phase: PhaseKind,
    pub error: Option<String>,
    pub assets: Vec<String>,
    /// Options for the currently selected asset
    pub chains: Vec<ChainOption>,
    pub selection: Option<Selection>,
}

impl TokenSelectorState {
    pub(crate) fn without_tokens(phase: PhaseKind, error: Option<String>) -> Self {
        Self {
            phase,
            error,
            assets: Vec::new(),
            chains: Vec::new(),
            selection: None,
        }
    }
}
