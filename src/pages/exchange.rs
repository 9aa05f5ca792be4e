//! Exchange Page
//!
//! Market movers: top coins by market capitalization and by 24h volume.

use leptos::*;

use crate::api::cryptocompare::{self, MarketEntry};
use crate::components::glass_card::GlassCard;
use crate::components::loading::ListSkeleton;
use crate::config;
use crate::state::wallet::format_usd;

const LIST_LIMIT: u32 = 10;

#[derive(Clone, Copy)]
enum MoversKind {
    MarketCap,
    Volume,
}

/// Exchange page component
#[component]
pub fn Exchange() -> impl IntoView {
    view! {
        <div class="pl-20 pr-4 py-4 min-h-screen">
            <div class="grid md:grid-cols-2 gap-4">
                <MoversList title="Top Market Cap" kind=MoversKind::MarketCap />
                <MoversList title="Top Volume (24h)" kind=MoversKind::Volume />
            </div>
        </div>
    }
}

/// One movers list fed by a top-list endpoint
#[component]
fn MoversList(title: &'static str, kind: MoversKind) -> impl IntoView {
    let (entries, set_entries) = create_signal(Vec::<MarketEntry>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            let api_key = config::cryptocompare_key();
            let result = match kind {
                MoversKind::MarketCap => {
                    cryptocompare::fetch_top_market_cap(LIST_LIMIT, api_key.as_deref()).await
                }
                MoversKind::Volume => {
                    cryptocompare::fetch_top_volume(LIST_LIMIT, api_key.as_deref()).await
                }
            };

            match result {
                Ok(list) => set_entries.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch {}: {}", title, e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <GlassCard>
            <div class="p-6">
                <h2 class="text-lg font-semibold mb-4">{title}</h2>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=5 /> }.into_view()
                    } else if entries.get().is_empty() {
                        view! {
                            <p class="text-sm text-zinc-400">"Nothing to show."</p>
                        }.into_view()
                    } else {
                        entries.get().into_iter().map(|entry| {
                            view! { <MoverRow entry=entry /> }
                        }).collect_view()
                    }
                }}
            </div>
        </GlassCard>
    }
}

#[component]
fn MoverRow(entry: MarketEntry) -> impl IntoView {
    let positive = entry.change_pct_24h >= 0.0;
    let (arrow, color) = if positive {
        ("↑", "text-[#00FFA3]")
    } else {
        ("↓", "text-red-500")
    };

    view! {
        <div class="flex items-center justify-between py-3 border-b border-white/5 last:border-0">
            <div class="flex flex-col">
                <span class="text-sm font-medium">{entry.name.clone()}</span>
                <span class="text-xs text-zinc-400">{format!("({})", entry.symbol)}</span>
            </div>
            <div class="flex flex-col items-end">
                <span class="text-sm font-medium tabular-nums">
                    {format!("${}", format_usd(entry.price))}
                </span>
                <span class=format!("flex items-center gap-0.5 text-xs font-medium {}", color)>
                    {arrow}
                    {format!("{:.2}%", entry.change_pct_24h.abs())}
                </span>
            </div>
        </div>
    }
}
