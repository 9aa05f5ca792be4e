//! Dashboard Page
//!
//! The main widget grid: chart, portfolio, and transactions on the left,
//! chat on the right. Widgets toggle through the floating dock.

use leptos::*;

use crate::components::{Chat, MarketPanel, TransactionList, WalletCard};
use crate::state::prices::PriceStore;
use crate::state::ui::{UiState, Widget};
use crate::state::wallet::WalletStore;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");
    let prices = use_context::<PriceStore>().expect("PriceStore not found");
    let wallet = use_context::<WalletStore>().expect("WalletStore not found");

    // Fetch initial data on mount
    create_effect(move |_| {
        let prices = prices.clone();
        let ui = ui.clone();
        if prices.book.with_untracked(|book| book.is_empty()) {
            spawn_local(async move {
                if let Err(e) = prices.refresh_all().await {
                    ui.show_error(&format!("Failed to load market data: {}", e));
                }
            });
        }

        if wallet.address.get_untracked().is_none() {
            wallet.load_address();
        }
    });

    let ui_for_grid = use_context::<UiState>().expect("UiState not found");
    let is_active = move |widget: Widget| {
        let ui = ui_for_grid.clone();
        move || ui.active_widgets.get().contains(&widget)
    };

    let show_left = is_active(Widget::Charts);
    let show_portfolio = is_active(Widget::Portfolio);
    let show_transactions = is_active(Widget::Transactions);
    let show_chat = is_active(Widget::Chat);

    view! {
        <div class="pl-20 pr-4 py-4 min-h-screen">
            <div class="grid grid-cols-10 gap-4">
                // Left column: chart, portfolio, transactions
                <div class="col-span-10 md:col-span-6 flex flex-col gap-4">
                    <Show when=show_left fallback=|| ()>
                        <MarketPanel />
                    </Show>
                    <Show when=show_portfolio fallback=|| ()>
                        <WalletCard />
                    </Show>
                    <Show when=show_transactions fallback=|| ()>
                        <TransactionList />
                    </Show>
                </div>

                // Right column: chat
                <div class="col-span-10 md:col-span-4">
                    <Show when=show_chat fallback=|| ()>
                        <Chat />
                    </Show>
                </div>
            </div>
        </div>
    }
}
