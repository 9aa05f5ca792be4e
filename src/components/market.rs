//! Market Panel Component
//!
//! Current price, change over the selected range, the price chart, and the
//! coin/time-range selectors. Owns the polling timer that keeps the
//! selected series fresh.

use leptos::*;

use crate::components::glass_card::GlassCard;
use crate::components::{CoinSelector, PriceChart, TimeRangeSelector};
use crate::config;
use crate::state::prices::{Coin, PriceStore, TimeSpan};
use crate::state::wallet::format_usd;

/// Market overview widget
#[component]
pub fn MarketPanel() -> impl IntoView {
    let prices = use_context::<PriceStore>().expect("PriceStore not found");
    let (coin, set_coin) = create_signal(Coin::Bitcoin);
    let (span, set_span) = create_signal(TimeSpan::Day);

    // Poll the latest price for the current selection. The handle is
    // dropped on teardown, which cancels the timer.
    let prices_for_tick = prices.clone();
    let interval = gloo_timers::callback::Interval::new(
        config::poll_interval_secs() * 1000,
        move || {
            let prices = prices_for_tick.clone();
            let coin = coin.get_untracked();
            let span = span.get_untracked();
            spawn_local(async move {
                if let Err(e) = prices.refresh_latest(coin, span).await {
                    web_sys::console::error_1(
                        &format!("Failed to fetch latest price: {}", e).into(),
                    );
                }
            });
        },
    );
    on_cleanup(move || drop(interval));

    let prices_for_price = prices.clone();
    let current_price = create_memo(move |_| {
        prices_for_price.book.with(|book| book.latest(coin.get(), span.get()))
    });

    let prices_for_change = prices.clone();
    let change_pct = create_memo(move |_| {
        prices_for_change.book.with(|book| book.change_pct(coin.get(), span.get()))
    });

    let is_loading = prices.is_loading;

    view! {
        <GlassCard>
            <div class="p-6 space-y-6">
                <div class="flex flex-col-reverse gap-4 sm:flex-row sm:items-center sm:justify-between">
                    <div class="flex flex-col gap-1">
                        // Current price
                        <div class="text-3xl font-bold tabular-nums">
                            {move || {
                                if is_loading.get() {
                                    view! {
                                        <div class="h-9 w-32 animate-pulse rounded-md bg-white/10" />
                                    }.into_view()
                                } else {
                                    match current_price.get() {
                                        Some(price) => format!("${}", format_usd(price)).into_view(),
                                        None => "—".into_view(),
                                    }
                                }
                            }}
                        </div>

                        // Change over the selected range
                        <div class="flex items-center gap-2">
                            {move || {
                                match change_pct.get() {
                                    Some(pct) => {
                                        let positive = pct >= 0.0;
                                        let (arrow, color) = if positive {
                                            ("↑", "text-[#00FFA3]")
                                        } else {
                                            ("↓", "text-red-500")
                                        };
                                        view! {
                                            <span class=format!("flex items-center text-sm font-medium {}", color)>
                                                {arrow}
                                                {format!("{:.2}%", pct.abs())}
                                            </span>
                                            <span class="text-sm text-zinc-400">
                                                {move || format!("Past {}", span.get().label())}
                                            </span>
                                        }.into_view()
                                    }
                                    None => view! {
                                        <span class="text-sm text-zinc-500">"No trend data"</span>
                                    }.into_view(),
                                }
                            }}
                        </div>
                    </div>

                    <TimeRangeSelector value=span set_value=set_span />
                </div>

                <PriceChart coin=coin span=span />

                <CoinSelector value=coin set_value=set_coin />
            </div>
        </GlassCard>
    }
}
