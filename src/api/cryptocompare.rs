//! CryptoCompare API
//!
//! Market data: historical price series, spot prices, top movers, and news.
//! An API key, when configured, rides along as the `api_key` query
//! parameter.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::state::prices::{Coin, PricePoint, TimeSpan};

const BASE_URL: &str = "https://min-api.cryptocompare.com/data";

fn key_query(api_key: Option<&str>) -> String {
    match api_key {
        Some(key) => format!("&api_key={}", key),
        None => String::new(),
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct HistoResponse {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "Data", default)]
    data: HistoData,
}

#[derive(Debug, Default, serde::Deserialize)]
struct HistoData {
    #[serde(rename = "Data", default)]
    data: Vec<HistoEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct HistoEntry {
    /// Unix timestamp in seconds
    time: i64,
    close: f64,
}

#[derive(Debug, serde::Deserialize)]
struct TopListResponse {
    #[serde(rename = "Data", default)]
    data: Vec<TopListEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct TopListEntry {
    #[serde(rename = "CoinInfo")]
    coin_info: TopCoinInfo,
    #[serde(rename = "RAW", default)]
    raw: Option<TopRawQuotes>,
}

#[derive(Debug, serde::Deserialize)]
struct TopCoinInfo {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "FullName")]
    full_name: String,
}

#[derive(Debug, serde::Deserialize)]
struct TopRawQuotes {
    #[serde(rename = "USD")]
    usd: Option<TopRawQuote>,
}

#[derive(Debug, serde::Deserialize)]
struct TopRawQuote {
    #[serde(rename = "PRICE", default)]
    price: f64,
    #[serde(rename = "CHANGEPCT24HOUR", default)]
    change_pct_24h: f64,
}

/// One row of a top-movers list.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketEntry {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_pct_24h: f64,
}

#[derive(Debug, serde::Deserialize)]
struct NewsResponse {
    #[serde(rename = "Data", default)]
    data: Vec<NewsArticle>,
}

/// A news article from the CryptoCompare feed.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub published_on: i64,
}

// ============ API Functions ============

/// Fetch the full price history for one (coin, span) combination.
///
/// Day spans use hourly resolution, everything longer daily resolution, so
/// the chart always has a usable number of points.
pub async fn fetch_history(
    coin: Coin,
    span: TimeSpan,
    api_key: Option<&str>,
) -> Result<Vec<PricePoint>, String> {
    let url = format!(
        "{}/{}?fsym={}&tsym=USD&limit={}{}",
        BASE_URL,
        span.histo_path(),
        coin.symbol(),
        span.histo_limit(),
        key_query(api_key),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let result: HistoResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.response == "Error" {
        return Err(result.message);
    }

    Ok(result
        .data
        .data
        .into_iter()
        .map(|entry| PricePoint {
            timestamp: entry.time * 1000,
            value: entry.close,
        })
        .collect())
}

/// Fetch the current spot price for one coin in USD.
pub async fn fetch_spot(coin: Coin, api_key: Option<&str>) -> Result<f64, String> {
    let url = format!(
        "{}/price?fsym={}&tsyms=USD{}",
        BASE_URL,
        coin.symbol(),
        key_query(api_key),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let result: HashMap<String, f64> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    result
        .get("USD")
        .copied()
        .ok_or_else(|| "no USD quote in response".to_string())
}

/// Fetch the top coins by market capitalization.
pub async fn fetch_top_market_cap(
    limit: u32,
    api_key: Option<&str>,
) -> Result<Vec<MarketEntry>, String> {
    fetch_top_list("top/mktcapfull", limit, api_key).await
}

/// Fetch the top coins by 24h trading volume.
pub async fn fetch_top_volume(
    limit: u32,
    api_key: Option<&str>,
) -> Result<Vec<MarketEntry>, String> {
    fetch_top_list("top/totalvolfull", limit, api_key).await
}

async fn fetch_top_list(
    path: &str,
    limit: u32,
    api_key: Option<&str>,
) -> Result<Vec<MarketEntry>, String> {
    let url = format!(
        "{}/{}?limit={}&tsym=USD{}",
        BASE_URL,
        path,
        limit,
        key_query(api_key),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let result: TopListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    // Coins without a USD quote (no RAW block) are not displayable
    Ok(result
        .data
        .into_iter()
        .filter_map(|entry| {
            let quote = entry.raw?.usd?;
            Some(MarketEntry {
                symbol: entry.coin_info.name,
                name: entry.coin_info.full_name,
                price: quote.price,
                change_pct_24h: quote.change_pct_24h,
            })
        })
        .collect())
}

/// Fetch English-language news for the given category symbols
/// (e.g. `"BTC,ETH"`).
pub async fn fetch_news(
    categories: &str,
    api_key: Option<&str>,
) -> Result<Vec<NewsArticle>, String> {
    let url = format!(
        "{}/v2/news/?lang=EN&categories={}{}",
        BASE_URL,
        categories,
        key_query(api_key),
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let result: NewsResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histo_response_parses_nested_data() {
        let json = r#"{
            "Response": "Success",
            "Data": { "Data": [
                { "time": 1700000000, "close": 37250.5, "open": 37000.0 },
                { "time": 1700003600, "close": 37300.25 }
            ]}
        }"#;
        let parsed: HistoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.data.len(), 2);
        assert_eq!(parsed.data.data[0].time, 1_700_000_000);
        assert_eq!(parsed.data.data[1].close, 37300.25);
    }

    #[test]
    fn histo_error_response_is_detected() {
        let json = r#"{ "Response": "Error", "Message": "limit is larger than max value." }"#;
        let parsed: HistoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response, "Error");
        assert!(parsed.data.data.is_empty());
    }

    #[test]
    fn top_list_skips_entries_without_usd_quote() {
        let json = r#"{ "Data": [
            { "CoinInfo": { "Name": "BTC", "FullName": "Bitcoin" },
              "RAW": { "USD": { "PRICE": 37000.0, "CHANGEPCT24HOUR": -1.25 } } },
            { "CoinInfo": { "Name": "XYZ", "FullName": "NoQuote" } }
        ]}"#;
        let parsed: TopListResponse = serde_json::from_str(json).unwrap();
        let entries: Vec<MarketEntry> = parsed
            .data
            .into_iter()
            .filter_map(|entry| {
                let quote = entry.raw?.usd?;
                Some(MarketEntry {
                    symbol: entry.coin_info.name,
                    name: entry.coin_info.full_name,
                    price: quote.price,
                    change_pct_24h: quote.change_pct_24h,
                })
            })
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symbol, "BTC");
        assert_eq!(entries[0].change_pct_24h, -1.25);
    }

    #[test]
    fn news_response_tolerates_missing_fields() {
        let json = r#"{ "Data": [
            { "title": "Bitcoin does a thing", "url": "https://example.com/a" }
        ]}"#;
        let parsed: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].source, "");
        assert_eq!(parsed.data[0].published_on, 0);
    }
}
