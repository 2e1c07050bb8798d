//! Seam between the network client and the selector

use async_trait::async_trait;

use crate::{FetchError, RawToken};

/// Source of the raw supported-token list.
///
/// Implemented by the bridge RPC client; tests substitute canned lists.
#[async_trait]
pub trait TokenFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawToken>, FetchError>;
}
