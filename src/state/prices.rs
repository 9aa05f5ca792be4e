//! Price Store
//!
//! Historical and latest price points per (coin, time span), refreshed by
//! periodic polling. The plain [`PriceBook`] snapshot carries the data and
//! its invariants; [`PriceStore`] wraps it in signals and drives fetches.

use leptos::*;
use std::collections::HashMap;

use crate::api;
use crate::config;

/// Tracked assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Solana,
    Cardano,
}

impl Coin {
    pub const ALL: [Coin; 4] = [Coin::Bitcoin, Coin::Ethereum, Coin::Solana, Coin::Cardano];

    /// CryptoCompare ticker symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Coin::Bitcoin => "BTC",
            Coin::Ethereum => "ETH",
            Coin::Solana => "SOL",
            Coin::Cardano => "ADA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Coin::Bitcoin => "Bitcoin",
            Coin::Ethereum => "Ethereum",
            Coin::Solana => "Solana",
            Coin::Cardano => "Cardano",
        }
    }

    /// Currency glyph shown in the selector
    pub fn glyph(self) -> &'static str {
        match self {
            Coin::Bitcoin => "₿",
            Coin::Ethereum => "Ξ",
            Coin::Solana => "◎",
            Coin::Cardano => "₳",
        }
    }

    /// Accent color used for the chart line and selector glyph
    pub fn accent(self) -> &'static str {
        match self {
            Coin::Bitcoin => "#F7931A",
            Coin::Ethereum => "#627EEA",
            Coin::Solana => "#00FFA3",
            Coin::Cardano => "#0033AD",
        }
    }
}

/// Chart time ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeSpan {
    Day,
    Week,
    Month,
    Year,
}

impl TimeSpan {
    pub const ALL: [TimeSpan; 4] = [TimeSpan::Day, TimeSpan::Week, TimeSpan::Month, TimeSpan::Year];

    pub fn label(self) -> &'static str {
        match self {
            TimeSpan::Day => "1D",
            TimeSpan::Week => "7D",
            TimeSpan::Month => "1M",
            TimeSpan::Year => "1Y",
        }
    }

    pub fn days(self) -> u32 {
        match self {
            TimeSpan::Day => 1,
            TimeSpan::Week => 7,
            TimeSpan::Month => 30,
            TimeSpan::Year => 365,
        }
    }

    /// Histo endpoint: hourly resolution for a single day, daily otherwise.
    pub fn histo_path(self) -> &'static str {
        match self {
            TimeSpan::Day => "v2/histohour",
            _ => "v2/histoday",
        }
    }

    pub fn histo_limit(self) -> u32 {
        match self {
            TimeSpan::Day => 24,
            _ => self.days(),
        }
    }
}

/// Single timestamped price sample. Timestamps are Unix milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PricePoint {
    pub timestamp: i64,
    pub value: f64,
}

/// In-memory snapshot of every tracked price series.
///
/// Series are timestamp-ascending; `append_latest` preserves that by
/// discarding samples that are not newer than the current tail.
#[derive(Clone, Debug, Default)]
pub struct PriceBook {
    series: HashMap<(Coin, TimeSpan), Vec<PricePoint>>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first successful full refresh.
    pub fn is_empty(&self) -> bool {
        self.series.values().all(|points| points.is_empty())
    }

    /// Replace the whole snapshot. Used only after every fetch of a full
    /// refresh succeeded, so a partial failure never tears the book.
    pub fn replace_all(&mut self, snapshot: HashMap<(Coin, TimeSpan), Vec<PricePoint>>) {
        self.series = snapshot;
    }

    /// Append a freshly polled sample, keeping the series ascending.
    pub fn append_latest(&mut self, coin: Coin, span: TimeSpan, point: PricePoint) {
        let series = self.series.entry((coin, span)).or_default();
        if series.last().map(|last| last.timestamp < point.timestamp).unwrap_or(true) {
            series.push(point);
        }
    }

    pub fn series(&self, coin: Coin, span: TimeSpan) -> &[PricePoint] {
        self.series.get(&(coin, span)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Most recent price for a (coin, span) series.
    pub fn latest(&self, coin: Coin, span: TimeSpan) -> Option<f64> {
        self.series(coin, span).last().map(|point| point.value)
    }

    /// Signed percent change over the span (first vs. last point).
    pub fn change_pct(&self, coin: Coin, span: TimeSpan) -> Option<f64> {
        let series = self.series(coin, span);
        if series.len() < 2 {
            return None;
        }
        let first = series.first()?.value;
        let last = series.last()?.value;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

/// Reactive price store.
#[derive(Clone)]
pub struct PriceStore {
    pub book: RwSignal<PriceBook>,
    pub is_loading: RwSignal<bool>,
}

impl PriceStore {
    pub fn new() -> Self {
        Self {
            book: create_rw_signal(PriceBook::new()),
            is_loading: create_rw_signal(false),
        }
    }

    /// Fetch full history for every (coin, span) combination in parallel and
    /// replace the snapshot atomically. On any failure the previous snapshot
    /// is retained and only the loading flag changes.
    pub async fn refresh_all(&self) -> Result<(), String> {
        self.is_loading.set(true);

        let api_key = config::cryptocompare_key();
        let combos: Vec<(Coin, TimeSpan)> = Coin::ALL
            .iter()
            .flat_map(|&coin| TimeSpan::ALL.iter().map(move |&span| (coin, span)))
            .collect();

        let fetches = combos
            .iter()
            .map(|&(coin, span)| api::cryptocompare::fetch_history(coin, span, api_key.as_deref()));
        let results = futures::future::join_all(fetches).await;

        let mut snapshot = HashMap::new();
        for (&(coin, span), result) in combos.iter().zip(results) {
            match result {
                Ok(points) => {
                    snapshot.insert((coin, span), points);
                }
                Err(e) => {
                    self.is_loading.set(false);
                    return Err(e);
                }
            }
        }

        self.book.update(|book| book.replace_all(snapshot));
        self.is_loading.set(false);
        Ok(())
    }

    /// Fetch only the newest spot price and append it to one series. An
    /// approximation of a true incremental update, good enough for display
    /// recency.
    pub async fn refresh_latest(&self, coin: Coin, span: TimeSpan) -> Result<(), String> {
        let api_key = config::cryptocompare_key();
        let value = api::cryptocompare::fetch_spot(coin, api_key.as_deref()).await?;
        let timestamp = chrono::Utc::now().timestamp_millis();

        self.book
            .update(|book| book.append_latest(coin, span, PricePoint { timestamp, value }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp: i64, value: f64) -> PricePoint {
        PricePoint { timestamp, value }
    }

    #[test]
    fn new_book_is_empty() {
        assert!(PriceBook::new().is_empty());
    }

    #[test]
    fn replace_all_swaps_the_snapshot_wholesale() {
        let mut book = PriceBook::new();
        let mut first = HashMap::new();
        first.insert((Coin::Bitcoin, TimeSpan::Day), vec![point(1, 10.0)]);
        book.replace_all(first);

        let mut second = HashMap::new();
        second.insert((Coin::Ethereum, TimeSpan::Week), vec![point(2, 20.0)]);
        book.replace_all(second);

        assert!(book.series(Coin::Bitcoin, TimeSpan::Day).is_empty());
        assert_eq!(book.latest(Coin::Ethereum, TimeSpan::Week), Some(20.0));
    }

    #[test]
    fn append_latest_keeps_series_ascending() {
        let mut book = PriceBook::new();
        book.append_latest(Coin::Bitcoin, TimeSpan::Day, point(1000, 10.0));
        book.append_latest(Coin::Bitcoin, TimeSpan::Day, point(2000, 11.0));
        // Stale and duplicate timestamps are discarded
        book.append_latest(Coin::Bitcoin, TimeSpan::Day, point(2000, 12.0));
        book.append_latest(Coin::Bitcoin, TimeSpan::Day, point(500, 9.0));

        let series = book.series(Coin::Bitcoin, TimeSpan::Day);
        assert_eq!(series.len(), 2);
        assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(book.latest(Coin::Bitcoin, TimeSpan::Day), Some(11.0));
    }

    #[test]
    fn change_pct_is_signed_first_to_last() {
        let mut book = PriceBook::new();
        book.append_latest(Coin::Solana, TimeSpan::Week, point(1, 20.0));
        book.append_latest(Coin::Solana, TimeSpan::Week, point(2, 25.0));
        assert_eq!(book.change_pct(Coin::Solana, TimeSpan::Week), Some(25.0));

        let mut falling = PriceBook::new();
        falling.append_latest(Coin::Solana, TimeSpan::Week, point(1, 20.0));
        falling.append_latest(Coin::Solana, TimeSpan::Week, point(2, 15.0));
        assert_eq!(falling.change_pct(Coin::Solana, TimeSpan::Week), Some(-25.0));
    }

    #[test]
    fn change_pct_needs_two_points() {
        let mut book = PriceBook::new();
        assert_eq!(book.change_pct(Coin::Bitcoin, TimeSpan::Day), None);
        book.append_latest(Coin::Bitcoin, TimeSpan::Day, point(1, 10.0));
        assert_eq!(book.change_pct(Coin::Bitcoin, TimeSpan::Day), None);
    }

    #[test]
    fn day_span_uses_hourly_resolution() {
        assert_eq!(TimeSpan::Day.histo_path(), "v2/histohour");
        assert_eq!(TimeSpan::Day.histo_limit(), 24);
        assert_eq!(TimeSpan::Year.histo_path(), "v2/histoday");
        assert_eq!(TimeSpan::Year.histo_limit(), 365);
    }
}
