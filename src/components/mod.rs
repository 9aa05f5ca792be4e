//! UI Components
//!
//! Reusable Leptos components for the dashboard widgets.

pub mod chart;
pub mod chat;
pub mod dock;
pub mod glass_card;
pub mod loading;
pub mod markdown;
pub mod market;
pub mod selector;
pub mod toast;
pub mod transactions;
pub mod wallet;

pub use chart::PriceChart;
pub use chat::Chat;
pub use dock::FloatingDock;
pub use glass_card::GlassCard;
pub use loading::Loading;
pub use markdown::Markdown;
pub use market::MarketPanel;
pub use selector::{CoinSelector, TimeRangeSelector};
pub use toast::Toast;
pub use transactions::TransactionList;
pub use wallet::WalletCard;
