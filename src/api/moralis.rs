//! Moralis API
//!
//! Wallet transaction history. Authenticated with an `X-API-Key` header;
//! chains are addressed by their hex id, mapped from the human-readable
//! name kept in configuration.

use gloo_net::http::Request;

const BASE_URL: &str = "https://deep-index.moralis.io/api/v2.2";

/// Map a chain name to its hex chain id. Unknown names pass through
/// unchanged so raw hex values keep working.
pub fn chain_hex(chain: &str) -> &str {
    match chain.to_lowercase().as_str() {
        "eth" => "0x1",
        "polygon" => "0x89",
        "bsc" => "0x38",
        "avalanche" => "0xa86a",
        "arbitrum" => "0xa4b1",
        "base" => "0x2105",
        "optimism" => "0xa",
        "gnosis" => "0x64",
        "linea" => "0xe708",
        _ => chain,
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub result: Vec<HistoryEntry>,
}

/// One entry of a wallet's decoded transaction history.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub from_address: String,
    #[serde(default)]
    pub to_address: String,
    /// Native token value in wei, as a decimal string
    #[serde(default)]
    pub value: String,
    /// RFC 3339 timestamp
    #[serde(default)]
    pub block_timestamp: String,
    /// Moralis category, e.g. "receive", "send", "contract interaction"
    #[serde(default)]
    pub category: String,
}

/// Fetch the transaction history for a wallet, newest first.
pub async fn fetch_wallet_history(
    address: &str,
    chain: &str,
    api_key: &str,
) -> Result<Vec<HistoryEntry>, String> {
    let url = format!(
        "{}/wallets/{}/history?chain={}&order=DESC",
        BASE_URL,
        address,
        chain_hex(chain),
    );

    let response = Request::get(&url)
        .header("X-API-Key", api_key)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let result: HistoryResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chains_map_to_hex() {
        assert_eq!(chain_hex("eth"), "0x1");
        assert_eq!(chain_hex("Base"), "0x2105");
    }

    #[test]
    fn unknown_chains_pass_through() {
        assert_eq!(chain_hex("0x1"), "0x1");
        assert_eq!(chain_hex("somechain"), "somechain");
    }

    #[test]
    fn history_parses_with_partial_fields() {
        let json = r#"{ "result": [
            { "hash": "0xabc", "from_address": "0x1", "to_address": "0x2",
              "value": "450000000000000000", "block_timestamp": "2025-01-03T15:41:00.000Z",
              "category": "receive" },
            { "hash": "0xdef" }
        ]}"#;
        let parsed: HistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.result.len(), 2);
        assert_eq!(parsed.result[0].category, "receive");
        assert_eq!(parsed.result[1].value, "");
    }
}
