//! Settings Page
//!
//! Backend connection, market data API keys, and chat/polling behavior.

use leptos::*;

use crate::api;
use crate::config;
use crate::state::ui::UiState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="pl-20 pr-4 py-8 min-h-screen space-y-8 max-w-3xl">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-zinc-400 mt-1">"Configure your CrypGod dashboard"</p>
            </div>

            <BackendSettings />
            <MarketDataSettings />
            <ChatSettings />
        </div>
    }
}

/// Backend connection settings
#[component]
fn BackendSettings() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");

    let (api_url, set_api_url) = create_signal(config::api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let ui_for_test = ui.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        config::set_api_base(&url);

        let ui = ui_for_test.clone();
        spawn_local(async move {
            match api::backend::fetch_public_address(&config::api_base()).await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    ui.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    ui.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let ui_for_save = ui.clone();
    let save_url = move |_| {
        config::set_api_base(&api_url.get());
        ui_for_save.show_success("Backend URL saved");
    };

    view! {
        <section class="bg-white/5 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Backend"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-zinc-400 mb-2">
                        "Base URL (empty for same-origin)"
                    </label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            placeholder="https://crypgod.example.com"
                            class="flex-1 bg-white/5 rounded-lg px-4 py-3
                                   border border-white/10 focus:border-white/30 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-white/10 hover:bg-white/20 disabled:opacity-40
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-white/10 hover:bg-white/20
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-zinc-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-emerald-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-zinc-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Market data API keys
#[component]
fn MarketDataSettings() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");

    let (cc_key, set_cc_key) = create_signal(config::cryptocompare_key().unwrap_or_default());
    let (moralis_key, set_moralis_key) = create_signal(config::moralis_key().unwrap_or_default());
    let (chain, set_chain) = create_signal(config::wallet_chain());

    let save = move |_| {
        config::set_cryptocompare_key(&cc_key.get());
        config::set_moralis_key(&moralis_key.get());
        config::set_wallet_chain(&chain.get());
        ui.show_success("Market data settings saved");
    };

    view! {
        <section class="bg-white/5 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Market Data"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-zinc-400 mb-2">"CryptoCompare API key"</label>
                    <input
                        type="password"
                        prop:value=move || cc_key.get()
                        on:input=move |ev| set_cc_key.set(event_target_value(&ev))
                        class="w-full bg-white/5 rounded-lg px-4 py-3
                               border border-white/10 focus:border-white/30 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-zinc-400 mb-2">"Moralis API key"</label>
                    <input
                        type="password"
                        prop:value=move || moralis_key.get()
                        on:input=move |ev| set_moralis_key.set(event_target_value(&ev))
                        class="w-full bg-white/5 rounded-lg px-4 py-3
                               border border-white/10 focus:border-white/30 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-zinc-400 mb-2">"Wallet chain"</label>
                    <input
                        type="text"
                        prop:value=move || chain.get()
                        on:input=move |ev| set_chain.set(event_target_value(&ev))
                        placeholder="eth"
                        class="w-full bg-white/5 rounded-lg px-4 py-3
                               border border-white/10 focus:border-white/30 focus:outline-none"
                    />
                </div>

                <button
                    on:click=save
                    class="px-4 py-3 bg-white/10 hover:bg-white/20 rounded-lg font-medium
                           transition-colors"
                >
                    "Save"
                </button>
            </div>
        </section>
    }
}

/// Chat and polling behavior
#[component]
fn ChatSettings() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");

    let (streaming, set_streaming) = create_signal(config::streaming_enabled());
    let (poll_secs, set_poll_secs) = create_signal(config::poll_interval_secs().to_string());

    let save = move |_| {
        config::set_streaming_enabled(streaming.get());
        if let Ok(secs) = poll_secs.get().parse::<u32>() {
            if secs > 0 {
                config::set_poll_interval_secs(secs);
            }
        }
        ui.show_success("Chat settings saved");
    };

    view! {
        <section class="bg-white/5 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Chat & Polling"</h2>

            <div class="space-y-4">
                <label class="flex items-center space-x-3 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || streaming.get()
                        on:change=move |ev| set_streaming.set(event_target_checked(&ev))
                        class="w-4 h-4"
                    />
                    <span class="text-sm">"Stream assistant responses"</span>
                </label>

                <div>
                    <label class="block text-sm text-zinc-400 mb-2">
                        "Price poll interval (seconds)"
                    </label>
                    <input
                        type="number"
                        prop:value=move || poll_secs.get()
                        on:input=move |ev| set_poll_secs.set(event_target_value(&ev))
                        class="w-40 bg-white/5 rounded-lg px-4 py-3
                               border border-white/10 focus:border-white/30 focus:outline-none"
                    />
                </div>

                <button
                    on:click=save
                    class="px-4 py-3 bg-white/10 hover:bg-white/20 rounded-lg font-medium
                           transition-colors"
                >
                    "Save"
                </button>
            </div>
        </section>
    }
}
