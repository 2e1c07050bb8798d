//! JSON-RPC 2.0 envelopes for the bridge endpoint

use serde::{Deserialize, Serialize};

/// Method name for the supported token listing
pub const SUPPORTED_TOKENS_METHOD: &str = "supported_tokens";

/// Outgoing request envelope
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<P> {
    pub id: u64,
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: P,
}

impl<P> JsonRpcRequest<P> {
    pub fn new(method: &'static str, params: P) -> Self {
        Self {
            id: 1,
            jsonrpc: "2.0",
            method,
            params,
        }
    }
}

/// Filter object for `supported_tokens` (empty chains = every chain)
#[derive(Debug, Clone, Serialize)]
pub struct SupportedTokensFilter {
    pub chains: Vec<String>,
}

/// Incoming response envelope. `result` is left untyped so a missing
/// `tokens` array can be reported precisely.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Build the `supported_tokens` request body
pub fn supported_tokens_request(chains: &[String]) -> JsonRpcRequest<[SupportedTokensFilter; 1]> {
    JsonRpcRequest::new(
        SUPPORTED_TOKENS_METHOD,
        [SupportedTokensFilter {
            chains: chains.to_vec(),
        }],
    )
}
