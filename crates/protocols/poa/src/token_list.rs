//! Local token reference list
//!
//! A static list of known tokens and the bridge each one travels over. It is
//! loaded once at start-up (bundled, or from a file named in the config) and
//! only read afterwards. Unified assets carry their per-chain variants in
//! `groupedTokens`.

use std::path::Path;

use defuse_core::Error;
use serde::{Deserialize, Serialize};

use crate::constants::{BUNDLED_TOKEN_LIST, POA_BRIDGE};

/// One entry of the reference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    /// Absent on unified-asset group parents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defuse_asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouped_tokens: Option<Vec<ReferenceEntry>>,
}

impl ReferenceEntry {
    pub fn new(defuse_asset_id: impl Into<String>, bridge: impl Into<String>) -> Self {
        Self {
            defuse_asset_id: Some(defuse_asset_id.into()),
            bridge: Some(bridge.into()),
            grouped_tokens: None,
        }
    }

    /// A group parent with the given members
    pub fn group(members: Vec<ReferenceEntry>) -> Self {
        Self {
            defuse_asset_id: None,
            bridge: None,
            grouped_tokens: Some(members),
        }
    }

    /// An entry without an id matches nothing, not even an empty token id
    fn is_poa(&self, token_id: &str) -> bool {
        self.defuse_asset_id.as_deref() == Some(token_id)
            && self.bridge.as_deref() == Some(POA_BRIDGE)
    }

    /// Whether this entry, or one of its grouped members, is the POA listing of `token_id`
    pub fn admits(&self, token_id: &str) -> bool {
        if self.is_poa(token_id) {
            return true;
        }
        self.grouped_tokens
            .as_ref()
            .map(|members| members.iter().any(|g| g.is_poa(token_id)))
            .unwrap_or(false)
    }
}

/// The loaded reference list
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Parse the list bundled into the binary
    pub fn bundled() -> Result<Self, Error> {
        Self::from_json(BUNDLED_TOKEN_LIST)
    }

    /// Parse a JSON array of entries. An empty list is rejected.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let entries: Vec<ReferenceEntry> =
            serde_json::from_str(json).map_err(|e| Error::ReferenceTable(e.to_string()))?;
        if entries.is_empty() {
            return Err(Error::ReferenceTable("token list is empty".to_string()));
        }
        Ok(Self { entries })
    }

    /// Read and parse a JSON token list from disk
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ReferenceTable(format!("{}: {}", path.display(), e)))?;
        let table = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "Loaded token reference list"
        );
        Ok(table)
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `intents_token_id` is listed as bridgeable over POA
    pub fn is_poa_bridgeable(&self, intents_token_id: &str) -> bool {
        self.entries.iter().any(|r| r.admits(intents_token_id))
    }
}
