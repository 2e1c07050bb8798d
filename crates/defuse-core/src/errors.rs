//! Error types for the bridge selector

use thiserror::Error;

/// Core errors that can occur in the workspace
#[derive(Debug, Error)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Reference table error: {0}")]
    ReferenceTable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures while fetching the supported token list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Bridge endpoint unreachable at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("Bridge endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Bridge RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response is missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },
}

/// Rejected selection transitions.
///
/// The View only offers options taken from the working set, so these signal a
/// desync between what was offered and what was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No bridgeable token has asset name '{asset}'")]
    InvalidAsset { asset: String },

    #[error("No bridgeable token has asset identifier '{chain}'")]
    InvalidChain { chain: String },

    #[error("Selector is not ready (phase: {phase})")]
    NotReady { phase: &'static str },
}

impl SelectionError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAsset { .. } => "invalid_asset",
            Self::InvalidChain { .. } => "invalid_chain",
            Self::NotReady { .. } => "not_ready",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAsset { .. } | Self::InvalidChain { .. } => 422,
            Self::NotReady { .. } => 409,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_codes() {
        let err = SelectionError::InvalidAsset {
            asset: "DOGE".into(),
        };
        assert_eq!(err.error_code(), "invalid_asset");
        assert_eq!(err.status_code(), 422);

        let err = SelectionError::NotReady { phase: "loading" };
        assert_eq!(err.error_code(), "not_ready");
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_fetch_error_wraps_into_core_error() {
        let err: Error = FetchError::HttpStatus { status: 502 }.into();
        assert_eq!(err.to_string(), "Fetch error: Bridge endpoint returned HTTP 502");
    }
}
