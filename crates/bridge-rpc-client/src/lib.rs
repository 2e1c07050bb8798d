//! bridge-rpc-client: Client for the POA bridge JSON-RPC endpoint
//!
//! Issues the single `supported_tokens` call the selector needs and turns the
//! response into `RawToken` records. One request per fetch, no retry.

pub mod rpc;

use std::time::Duration;

use async_trait::async_trait;
use defuse_core::{FetchError, RawToken, RpcConfig, TokenFetcher};

/// Result type for client operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// High-level bridge RPC client
#[derive(Clone)]
pub struct BridgeRpcClient {
    http: reqwest::Client,
    config: RpcConfig,
}

impl BridgeRpcClient {
    /// Create a client for the configured endpoint
    pub fn new(config: RpcConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("defuse-bridge")
            .build()
            .map_err(|e| FetchError::Unreachable {
                url: config.url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { http, config })
    }

    /// Get the current RPC configuration
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Call `supported_tokens` with the given chain filter (empty = all chains)
    pub async fn supported_tokens(&self, chains: &[String]) -> Result<Vec<RawToken>> {
        let body = rpc::supported_tokens_request(chains);
        tracing::debug!(url = %self.config.url, ?chains, "Requesting supported tokens");

        let response = self
            .timed_request(self.http.post(&self.config.url).json(&body).send())
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Bridge endpoint rejected request");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = self.timed_request(response.text()).await?;
        let tokens = parse_supported_tokens(&text)?;

        tracing::info!("Fetched {} supported tokens", tokens.len());
        Ok(tokens)
    }

    /// Bound a request future by the configured timeout
    async fn timed_request<T>(
        &self,
        fut: impl std::future::Future<Output = std::result::Result<T, reqwest::Error>>,
    ) -> Result<T> {
        let secs = self.config.timeout_secs;
        tokio::time::timeout(Duration::from_secs(secs), fut)
            .await
            .map_err(|_| FetchError::Timeout { secs })?
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout { secs }
                } else {
                    FetchError::Unreachable {
                        url: self.config.url.clone(),
                        reason: e.to_string(),
                    }
                }
            })
    }
}

#[async_trait]
impl TokenFetcher for BridgeRpcClient {
    async fn fetch(&self) -> Result<Vec<RawToken>> {
        self.supported_tokens(&self.config.chains).await
    }
}

/// Extract `result.tokens` from a JSON-RPC response body
fn parse_supported_tokens(body: &str) -> Result<Vec<RawToken>> {
    let response: rpc::JsonRpcResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if let Some(err) = response.error {
        return Err(FetchError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    let mut result = response
        .result
        .ok_or(FetchError::MissingField { field: "result" })?;

    let tokens = result
        .get_mut("tokens")
        .map(serde_json::Value::take)
        .ok_or(FetchError::MissingField {
            field: "result.tokens",
        })?;

    serde_json::from_value(tokens).map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/rpc", addr)
    }

    fn client_for(url: String, timeout_secs: u64) -> BridgeRpcClient {
        BridgeRpcClient::new(RpcConfig {
            url,
            timeout_secs,
            chains: Vec::new(),
        })
        .unwrap()
    }

    fn tokens_body() -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "tokens": [
                    {
                        "defuse_asset_identifier": "eth:1:0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                        "near_token_id": "eth-0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48.omft.near",
                        "decimals": 6,
                        "asset_name": "USDC",
                        "intents_token_id": "nep141:eth-0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48.omft.near",
                        "standard": "nep141"
                    },
                    {
                        "defuse_asset_identifier": "btc:mainnet:native",
                        "near_token_id": "btc.omft.near",
                        "decimals": 8,
                        "asset_name": "BTC",
                        "intents_token_id": "nep141:btc.omft.near",
                        "standard": "nep141"
                    }
                ]
            }
        })
    }

    #[test]
    fn test_parse_missing_tokens() {
        let err = parse_supported_tokens(r#"{"jsonrpc":"2.0","id":1,"result":{}}"#).unwrap_err();
        assert_eq!(
            err,
            FetchError::MissingField {
                field: "result.tokens"
            }
        );

        let err = parse_supported_tokens(r#"{"jsonrpc":"2.0","id":1}"#).unwrap_err();
        assert_eq!(err, FetchError::MissingField { field: "result" });
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_supported_tokens("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));

        // a token missing a required field is a parse failure, not a partial list
        let err = parse_supported_tokens(
            r#"{"result":{"tokens":[{"asset_name":"USDC","intents_token_id":"x"}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_supported_tokens() {
        let router = Router::new().route(
            "/rpc",
            post(|headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                assert_eq!(headers["content-type"], "application/json");
                assert_eq!(body["method"], "supported_tokens");
                assert_eq!(body["params"], serde_json::json!([{ "chains": [] }]));
                Json(tokens_body())
            }),
        );
        let client = client_for(serve(router).await, 5);

        let tokens = client.fetch().await.unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].asset_name, "USDC");
        assert_eq!(tokens[1].chain_key().as_str(), "btc:mainnet");
        assert_eq!(tokens[1].extra["decimals"], 8);
    }

    #[tokio::test]
    async fn test_fetch_http_error_status() {
        let router = Router::new().route(
            "/rpc",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let client = client_for(serve(router).await, 5);

        let err = client.fetch().await.unwrap_err();
        assert_eq!(err, FetchError::HttpStatus { status: 502 });
    }

    #[tokio::test]
    async fn test_fetch_rpc_error_object() {
        let router = Router::new().route(
            "/rpc",
            post(|| async {
                Json(serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": { "code": -32602, "message": "Invalid params" }
                }))
            }),
        );
        let client = client_for(serve(router).await, 5);

        let err = client.fetch().await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Rpc {
                code: -32602,
                message: "Invalid params".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let router = Router::new().route(
            "/rpc",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(tokens_body())
            }),
        );
        let client = client_for(serve(router).await, 1);

        let err = client.fetch().await.unwrap_err();
        assert_eq!(err, FetchError::Timeout { secs: 1 });
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/rpc", addr), 5);
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Unreachable { .. }));
    }
}
