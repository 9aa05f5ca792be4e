//! Charts Page
//!
//! Full-width market panel plus a crypto news feed.

use leptos::*;

use crate::api::cryptocompare::{self, NewsArticle};
use crate::components::glass_card::GlassCard;
use crate::components::loading::ListSkeleton;
use crate::components::MarketPanel;
use crate::config;
use crate::state::prices::{Coin, PriceStore};
use crate::state::ui::UiState;

/// Charts page component
#[component]
pub fn Charts() -> impl IntoView {
    let prices = use_context::<PriceStore>().expect("PriceStore not found");
    let ui = use_context::<UiState>().expect("UiState not found");

    // The page can be opened directly, so make sure history is loaded
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
    });

    view! {
        <div class="pl-20 pr-4 py-4 min-h-screen space-y-4">
            <MarketPanel />
            <NewsFeed />
        </div>
    }
}

/// Latest crypto news for the tracked coins
#[component]
fn NewsFeed() -> impl IntoView {
    let (articles, set_articles) = create_signal(Vec::<NewsArticle>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            let categories = Coin::ALL
                .iter()
                .map(|coin| coin.symbol())
                .collect::<Vec<_>>()
                .join(",");
            let api_key = config::cryptocompare_key();

            match cryptocompare::fetch_news(&categories, api_key.as_deref()).await {
                Ok(news) => set_articles.set(news.into_iter().take(8).collect()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch news: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <GlassCard>
            <div class="p-6">
                <h2 class="text-lg font-semibold mb-4">"News"</h2>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=4 /> }.into_view()
                    } else if articles.get().is_empty() {
                        view! {
                            <p class="text-sm text-zinc-400">"No news right now."</p>
                        }.into_view()
                    } else {
                        articles.get().into_iter().map(|article| {
                            let published = chrono::DateTime::from_timestamp(article.published_on, 0)
                                .map(|dt| dt.format("%b %d, %H:%M").to_string())
                                .unwrap_or_default();
                            view! {
                                <a
                                    href=article.url.clone()
                                    target="_blank"
                                    class="block py-3 border-b border-white/5 last:border-0
                                           hover:bg-white/5 rounded-lg px-2 -mx-2 transition-colors"
                                >
                                    <p class="text-sm font-medium">{article.title.clone()}</p>
                                    <p class="text-xs text-zinc-400 mt-1">
                                        {format!("{} · {}", article.source, published)}
                                    </p>
                                </a>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </GlassCard>
    }
}
