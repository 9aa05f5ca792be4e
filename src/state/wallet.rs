//! Wallet State
//!
//! Public address, portfolio holdings and their valuation against current
//! prices, and the transaction history shown in the transactions widget.

use leptos::*;

use crate::api::{self, moralis::HistoryEntry};
use crate::config;
use crate::state::prices::Coin;

/// A fixed position in the portfolio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Holding {
    pub coin: Coin,
    pub quantity: f64,
    pub cost_per_coin: f64,
}

/// The tracked portfolio.
pub fn default_holdings() -> Vec<Holding> {
    vec![
        Holding { coin: Coin::Bitcoin, quantity: 0.1, cost_per_coin: 45_000.0 },
        Holding { coin: Coin::Ethereum, quantity: 2.0, cost_per_coin: 1_500.0 },
        Holding { coin: Coin::Solana, quantity: 25.0, cost_per_coin: 20.0 },
        Holding { coin: Coin::Cardano, quantity: 3_000.0, cost_per_coin: 0.45 },
    ]
}

/// A holding valued at a current price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoldingView {
    pub holding: Holding,
    pub current_price: f64,
    pub total_cost: f64,
    pub total_value: f64,
    pub profit_loss: f64,
    pub profit_loss_pct: f64,
}

pub fn value_holding(holding: Holding, current_price: f64) -> HoldingView {
    let total_cost = holding.cost_per_coin * holding.quantity;
    let total_value = current_price * holding.quantity;
    let profit_loss = total_value - total_cost;
    let profit_loss_pct = if total_cost > 0.0 { profit_loss / total_cost * 100.0 } else { 0.0 };
    HoldingView { holding, current_price, total_cost, total_value, profit_loss, profit_loss_pct }
}

/// Portfolio-wide totals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PortfolioTotals {
    pub total_cost: f64,
    pub total_value: f64,
    pub profit_loss: f64,
    pub profit_loss_pct: f64,
}

pub fn portfolio_totals(views: &[HoldingView]) -> PortfolioTotals {
    let total_cost: f64 = views.iter().map(|v| v.total_cost).sum();
    let total_value: f64 = views.iter().map(|v| v.total_value).sum();
    let profit_loss = total_value - total_cost;
    let profit_loss_pct = if total_cost > 0.0 { profit_loss / total_cost * 100.0 } else { 0.0 };
    PortfolioTotals { total_cost, total_value, profit_loss, profit_loss_pct }
}

/// Format a dollar amount with thousands separators and two decimals.
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Shorten an address to the familiar `0x1234...5678` form.
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Transaction direction/kind shown in the transactions widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxKind {
    Receive,
    Send,
    Contract,
    Swap,
}

/// One row of the transactions widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: TxKind,
    /// Signed display amount, e.g. "+0.45"
    pub amount: String,
    pub token: String,
    pub counterparty: String,
    pub timestamp: String,
    pub hash: String,
}

/// Map one Moralis history entry to a display transaction. Direction falls
/// back to address comparison when the category is unrecognized.
pub fn transaction_from_history(entry: &HistoryEntry, own_address: &str) -> Transaction {
    let own = own_address.to_lowercase();
    let incoming = entry.to_address.to_lowercase() == own;

    let kind = match entry.category.as_str() {
        "receive" => TxKind::Receive,
        "send" => TxKind::Send,
        "contract interaction" => TxKind::Contract,
        "token swap" | "swap" => TxKind::Swap,
        _ if incoming => TxKind::Receive,
        _ => TxKind::Send,
    };

    let eth = entry.value.parse::<f64>().unwrap_or(0.0) / 1e18;
    let signed = if matches!(kind, TxKind::Receive) { eth } else { -eth };
    let amount = format!("{:+.4}", signed);

    let counterparty = if incoming {
        shorten_address(&entry.from_address)
    } else {
        shorten_address(&entry.to_address)
    };

    let timestamp = chrono::DateTime::parse_from_rfc3339(&entry.block_timestamp)
        .map(|dt| dt.format("%d %b %H:%M").to_string())
        .unwrap_or_default();

    Transaction {
        id: entry.hash.clone(),
        kind,
        amount,
        token: "ETH".to_string(),
        counterparty,
        timestamp,
        hash: shorten_address(&entry.hash),
    }
}

/// Placeholder rows shown until a Moralis key and wallet address are
/// configured.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            kind: TxKind::Receive,
            amount: "+0.45".to_string(),
            token: "ETH".to_string(),
            counterparty: "0x1234...5678".to_string(),
            timestamp: "3 Jan 15:41".to_string(),
            hash: "0xabc...def".to_string(),
        },
        Transaction {
            id: "2".to_string(),
            kind: TxKind::Contract,
            amount: "-0.12".to_string(),
            token: "ETH".to_string(),
            counterparty: "UniswapV3".to_string(),
            timestamp: "2 Jan 20:53".to_string(),
            hash: "0x123...789".to_string(),
        },
        Transaction {
            id: "3".to_string(),
            kind: TxKind::Send,
            amount: "-1250".to_string(),
            token: "USDT".to_string(),
            counterparty: "0x8765...4321".to_string(),
            timestamp: "1 Jan 11:09".to_string(),
            hash: "0xdef...abc".to_string(),
        },
    ]
}

/// Reactive wallet store.
#[derive(Clone)]
pub struct WalletStore {
    pub address: RwSignal<Option<String>>,
    pub transactions: RwSignal<Vec<Transaction>>,
    pub transactions_loading: RwSignal<bool>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self {
            address: create_rw_signal(None),
            transactions: create_rw_signal(Vec::new()),
            transactions_loading: create_rw_signal(false),
        }
    }

    /// Fetch the public address from the backend.
    pub fn load_address(&self) {
        let store = self.clone();
        spawn_local(async move {
            match api::backend::fetch_public_address(&config::api_base()).await {
                Ok(address) => store.address.set(Some(address)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch public address: {}", e).into(),
                    );
                }
            }
        });
    }

    /// Load transaction history: real data when a Moralis key and address
    /// are available, the sample rows otherwise.
    pub fn load_transactions(&self) {
        let store = self.clone();
        spawn_local(async move {
            store.transactions_loading.set(true);

            let address = store.address.get_untracked();
            let loaded = match (config::moralis_key(), address) {
                (Some(key), Some(address)) => {
                    match api::moralis::fetch_wallet_history(&address, &config::wallet_chain(), &key)
                        .await
                    {
                        Ok(entries) => entries
                            .iter()
                            .map(|entry| transaction_from_history(entry, &address))
                            .collect(),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch wallet history: {}", e).into(),
                            );
                            sample_transactions()
                        }
                    }
                }
                _ => sample_transactions(),
            };

            store.transactions.set(loaded);
            store.transactions_loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valuation_math_adds_up() {
        let holding = Holding { coin: Coin::Ethereum, quantity: 2.0, cost_per_coin: 1_500.0 };
        let view = value_holding(holding, 2_000.0);

        assert_eq!(view.total_cost, 3_000.0);
        assert_eq!(view.total_value, 4_000.0);
        assert_eq!(view.profit_loss, 1_000.0);
        assert!((view.profit_loss_pct - 33.333).abs() < 0.001);
    }

    #[test]
    fn zero_cost_holding_has_zero_percent() {
        let holding = Holding { coin: Coin::Solana, quantity: 1.0, cost_per_coin: 0.0 };
        let view = value_holding(holding, 100.0);
        assert_eq!(view.profit_loss_pct, 0.0);
    }

    #[test]
    fn totals_aggregate_across_holdings() {
        let views = vec![
            value_holding(Holding { coin: Coin::Bitcoin, quantity: 1.0, cost_per_coin: 100.0 }, 150.0),
            value_holding(Holding { coin: Coin::Ethereum, quantity: 1.0, cost_per_coin: 100.0 }, 50.0),
        ];
        let totals = portfolio_totals(&views);

        assert_eq!(totals.total_cost, 200.0);
        assert_eq!(totals.total_value, 200.0);
        assert_eq!(totals.profit_loss, 0.0);
        assert_eq!(totals.profit_loss_pct, 0.0);
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(0.0), "0.00");
        assert_eq!(format_usd(1234.5), "1,234.50");
        assert_eq!(format_usd(98_7654.321), "987,654.32");
        assert_eq!(format_usd(-42.005), "-42.01");
    }

    #[test]
    fn addresses_are_shortened() {
        assert_eq!(
            shorten_address("0x4315d134aCd3221a02dD380ADE3aF39Ce219037c"),
            "0x4315...037c"
        );
        assert_eq!(shorten_address("0xshort"), "0xshort");
    }

    #[test]
    fn history_maps_to_display_transactions() {
        let entry = HistoryEntry {
            hash: "0xabcdef1234567890".to_string(),
            from_address: "0x1111111111111111111111111111111111111111".to_string(),
            to_address: "0x2222222222222222222222222222222222222222".to_string(),
            value: "450000000000000000".to_string(),
            block_timestamp: "2025-01-03T15:41:00.000Z".to_string(),
            category: "receive".to_string(),
        };

        let tx = transaction_from_history(&entry, "0x2222222222222222222222222222222222222222");
        assert_eq!(tx.kind, TxKind::Receive);
        assert_eq!(tx.amount, "+0.4500");
        assert_eq!(tx.counterparty, "0x1111...1111");
        assert_eq!(tx.timestamp, "03 Jan 15:41");
    }

    #[test]
    fn direction_falls_back_to_address_comparison() {
        let entry = HistoryEntry {
            from_address: "0xAAA0000000000000000000000000000000000000".to_string(),
            to_address: "0xBBB0000000000000000000000000000000000000".to_string(),
            value: "1000000000000000000".to_string(),
            category: "unknown thing".to_string(),
            ..Default::default()
        };

        let outgoing = transaction_from_history(&entry, "0xAAA0000000000000000000000000000000000000");
        assert_eq!(outgoing.kind, TxKind::Send);
        assert_eq!(outgoing.amount, "-1.0000");

        let incoming = transaction_from_history(&entry, "0xBBB0000000000000000000000000000000000000");
        assert_eq!(incoming.kind, TxKind::Receive);
        assert_eq!(incoming.amount, "+1.0000");
    }
}
