//! State Management
//!
//! Reactive stores for chat, prices, wallet data, and UI chrome, provided
//! to the component tree via Leptos context.

pub mod chat;
pub mod prices;
pub mod ui;
pub mod wallet;

pub use chat::ChatStore;
pub use prices::{Coin, PricePoint, PriceStore, TimeSpan};
pub use ui::{UiState, Widget};
pub use wallet::WalletStore;

/// Provide every global store to the component tree.
pub fn provide_stores() {
    leptos::provide_context(ui::UiState::new());
    leptos::provide_context(chat::ChatStore::new());
    leptos::provide_context(prices::PriceStore::new());
    leptos::provide_context(wallet::WalletStore::new());
}
