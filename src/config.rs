//! Client Configuration
//!
//! Settings persisted in browser local storage: backend base URL, third-party
//! API keys, and chat/polling behavior. Defaults apply whenever storage is
//! unavailable or a key has never been set.

const KEY_API_BASE: &str = "crypgod_api_base";
const KEY_CRYPTOCOMPARE_KEY: &str = "crypgod_cryptocompare_key";
const KEY_MORALIS_KEY: &str = "crypgod_moralis_key";
const KEY_WALLET_CHAIN: &str = "crypgod_wallet_chain";
const KEY_STREAMING: &str = "crypgod_chat_streaming";
const KEY_POLL_SECS: &str = "crypgod_poll_secs";

/// Default poll interval for latest-price refreshes
pub const DEFAULT_POLL_SECS: u32 = 60;

fn storage_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn storage_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Base URL of the CrypGod backend. Empty means same-origin, so requests go
/// to relative paths like `/api/chat`.
pub fn api_base() -> String {
    let url = storage_get(KEY_API_BASE).unwrap_or_default();
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

pub fn set_api_base(url: &str) {
    storage_set(KEY_API_BASE, url);
}

/// CryptoCompare API key, attached as an `api_key` query parameter when set.
pub fn cryptocompare_key() -> Option<String> {
    storage_get(KEY_CRYPTOCOMPARE_KEY).filter(|k| !k.is_empty())
}

pub fn set_cryptocompare_key(key: &str) {
    storage_set(KEY_CRYPTOCOMPARE_KEY, key);
}

/// Moralis API key for the wallet history endpoint.
pub fn moralis_key() -> Option<String> {
    storage_get(KEY_MORALIS_KEY).filter(|k| !k.is_empty())
}

pub fn set_moralis_key(key: &str) {
    storage_set(KEY_MORALIS_KEY, key);
}

/// Chain the wallet lives on, by Moralis chain name ("eth", "base", ...).
pub fn wallet_chain() -> String {
    storage_get(KEY_WALLET_CHAIN).filter(|c| !c.is_empty()).unwrap_or_else(|| "eth".to_string())
}

pub fn set_wallet_chain(chain: &str) {
    storage_set(KEY_WALLET_CHAIN, chain);
}

/// Whether chat requests use the streaming endpoint. When disabled the
/// non-streaming response is animated locally instead.
pub fn streaming_enabled() -> bool {
    storage_get(KEY_STREAMING).map(|v| v != "false").unwrap_or(true)
}

pub fn set_streaming_enabled(enabled: bool) {
    storage_set(KEY_STREAMING, if enabled { "true" } else { "false" });
}

/// Seconds between latest-price polls.
pub fn poll_interval_secs() -> u32 {
    storage_get(KEY_POLL_SECS)
        .and_then(|v| v.parse().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_POLL_SECS)
}

pub fn set_poll_interval_secs(secs: u32) {
    storage_set(KEY_POLL_SECS, &secs.to_string());
}
