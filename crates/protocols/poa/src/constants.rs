//! POA bridge constants

/// Bridge tag of reference entries routed through the POA bridge
pub const POA_BRIDGE: &str = "poa";

/// Reference token list bundled into the binary
pub const BUNDLED_TOKEN_LIST: &str = include_str!("../data/token_list.json");

/// Display name for a `chain:network` key.
///
/// Presentation only; unknown keys are shown as-is.
pub fn chain_display_name(chain_key: &str) -> &str {
    match chain_key {
        "eth:1" => "Ethereum",
        "base:8453" => "Base",
        "arb:42161" => "Arbitrum",
        "gnosis:100" => "Gnosis",
        "bera:80094" => "Berachain",
        "polygon:137" => "Polygon",
        "bsc:56" => "BNB Smart Chain",
        "near:mainnet" => "NEAR",
        "btc:mainnet" => "Bitcoin",
        "sol:mainnet" => "Solana",
        "doge:mainnet" => "Dogecoin",
        "xrp:mainnet" => "XRP Ledger",
        "zec:mainnet" => "Zcash",
        "tron:mainnet" => "Tron",
        "ton:mainnet" => "TON",
        "sui:mainnet" => "Sui",
        "aptos:mainnet" => "Aptos",
        "stellar:mainnet" => "Stellar",
        _ => chain_key,
    }
}
