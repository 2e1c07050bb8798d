//! Core type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chain key: the `chain:network` prefix of a defuse asset identifier
/// (e.g. `eth:1` for `eth:1:0xa0b8...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainKey(pub String);

impl ChainKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derive the chain key from a full `defuse_asset_identifier`.
    ///
    /// Takes the first two `:`-separated segments. A missing segment is read as
    /// the empty string, so `"near"` yields `"near:"` and `""` yields `":"`.
    ///
    /// Note the padding: a take-two-then-join on `:` would give `"near"` and
    /// `""` for those inputs. Keys here always contain the separator.
    pub fn from_identifier(identifier: &str) -> Self {
        let mut segments = identifier.split(':');
        let chain = segments.next().unwrap_or_default();
        let network = segments.next().unwrap_or_default();
        Self(format!("{}:{}", chain, network))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token descriptor as returned by the bridge `supported_tokens` call.
///
/// Only the three fields the selector reads are typed; everything else the
/// endpoint sends (decimals, fees, limits, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    pub intents_token_id: String,
    pub asset_name: String,
    pub defuse_asset_identifier: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawToken {
    /// Build a token with no extra fields
    pub fn new(
        intents_token_id: impl Into<String>,
        asset_name: impl Into<String>,
        defuse_asset_identifier: impl Into<String>,
    ) -> Self {
        Self {
            intents_token_id: intents_token_id.into(),
            asset_name: asset_name.into(),
            defuse_asset_identifier: defuse_asset_identifier.into(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn chain_key(&self) -> ChainKey {
        ChainKey::from_identifier(&self.defuse_asset_identifier)
    }
}
