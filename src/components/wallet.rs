//! Wallet Card Component
//!
//! Portfolio overview: total value and P/L, the public address, and a row
//! per holding valued at the latest price.

use leptos::*;

use crate::components::glass_card::GlassCard;
use crate::state::prices::{PriceStore, TimeSpan};
use crate::state::wallet::{
    default_holdings, format_usd, portfolio_totals, shorten_address, value_holding, HoldingView,
    WalletStore,
};

const ONRAMP_URL: &str = "https://pay.coinbase.com/buy/select-asset?defaultAsset=ETH";

/// Portfolio widget
#[component]
pub fn WalletCard() -> impl IntoView {
    let prices = use_context::<PriceStore>().expect("PriceStore not found");
    let wallet = use_context::<WalletStore>().expect("WalletStore not found");

    // Value every holding at the latest 1D price
    let views = create_memo(move |_| {
        prices.book.with(|book| {
            default_holdings()
                .into_iter()
                .map(|holding| {
                    let price = book.latest(holding.coin, TimeSpan::Day).unwrap_or(0.0);
                    value_holding(holding, price)
                })
                .collect::<Vec<HoldingView>>()
        })
    });

    let totals = create_memo(move |_| portfolio_totals(&views.get()));

    let address = wallet.address;

    view! {
        <GlassCard>
            <div class="flex items-center justify-between p-6">
                <div class="space-y-2">
                    <div class="flex items-center">
                        <span class="text-sm text-zinc-400 font-medium">"Main Wallet"</span>
                        {move || address.get().map(|addr| view! {
                            <span class="ml-1 text-xs text-zinc-300">
                                {format!("({})", shorten_address(&addr))}
                            </span>
                        })}
                    </div>
                    <div class="flex items-center">
                        <h1 class="text-2xl font-bold">
                            {move || format!("{} USD", format_usd(totals.get().total_value))}
                        </h1>
                        <div class="ml-4 text-sm text-zinc-300">
                            "P/L: "
                            {move || {
                                let totals = totals.get();
                                let color = if totals.profit_loss >= 0.0 {
                                    "text-[#00FFA3]"
                                } else {
                                    "text-red-500"
                                };
                                view! {
                                    <span class=color>
                                        {format!(
                                            "{} ({:.2}%)",
                                            format_usd(totals.profit_loss),
                                            totals.profit_loss_pct,
                                        )}
                                    </span>
                                }
                            }}
                        </div>
                    </div>
                </div>

                <a
                    href=ONRAMP_URL
                    target="_blank"
                    class="px-4 py-2 bg-white/5 hover:bg-white/10 rounded-lg text-sm font-medium
                           transition-colors"
                >
                    "Buy"
                </a>
            </div>

            // Holdings
            <div class="px-6 pb-6 grid gap-3">
                {move || {
                    views.get().into_iter().map(|item| {
                        let coin = item.holding.coin;
                        let pl_color = if item.profit_loss >= 0.0 {
                            "text-[#00FFA3]"
                        } else {
                            "text-red-500"
                        };
                        view! {
                            <div class="grid grid-cols-[32px_1fr_auto] items-center gap-4">
                                <span
                                    class="text-xl font-medium"
                                    style=format!("color: {}", coin.accent())
                                >
                                    {coin.glyph()}
                                </span>
                                <div class="space-y-1">
                                    <p class="text-sm font-medium leading-none">{coin.symbol()}</p>
                                    <p class="text-xs text-zinc-400">
                                        {format!("{} × ${}", item.holding.quantity, format_usd(item.current_price))}
                                    </p>
                                </div>
                                <div class="flex flex-col items-end gap-1">
                                    <p class="text-sm font-medium tabular-nums">
                                        {format!("${}", format_usd(item.total_value))}
                                    </p>
                                    <p class=format!("text-xs {}", pl_color)>
                                        {format!("{:+.2}%", item.profit_loss_pct)}
                                    </p>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </GlassCard>
    }
}
