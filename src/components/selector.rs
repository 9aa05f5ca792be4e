//! Selectors
//!
//! Button rows for picking the charted coin and time range.

use leptos::*;

use crate::state::prices::{Coin, TimeSpan};

/// Time range selection buttons
#[component]
pub fn TimeRangeSelector(
    value: ReadSignal<TimeSpan>,
    set_value: WriteSignal<TimeSpan>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            {TimeSpan::ALL.into_iter().map(|span| {
                view! {
                    <button
                        on:click=move |_| set_value.set(span)
                        class=move || {
                            let base = "px-3 py-1 text-sm font-medium rounded-md transition-colors";
                            if value.get() == span {
                                format!("{} bg-white/10 text-white", base)
                            } else {
                                format!("{} text-zinc-400 hover:text-white", base)
                            }
                        }
                    >
                        {span.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Coin selection buttons
#[component]
pub fn CoinSelector(
    value: ReadSignal<Coin>,
    set_value: WriteSignal<Coin>,
) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            {Coin::ALL.into_iter().map(|coin| {
                view! {
                    <button
                        on:click=move |_| set_value.set(coin)
                        class=move || {
                            let base = "flex items-center gap-2 px-4 py-2 rounded-lg transition-colors";
                            if value.get() == coin {
                                format!("{} bg-white/10 text-white", base)
                            } else {
                                format!("{} text-zinc-400 hover:bg-white/5 hover:text-white", base)
                            }
                        }
                    >
                        <span
                            class="text-lg font-medium"
                            style=format!("color: {}", coin.accent())
                        >
                            {coin.glyph()}
                        </span>
                        <span class="font-medium">{coin.symbol()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
