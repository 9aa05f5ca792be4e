//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton block for a value that has not loaded yet
#[component]
pub fn ValueSkeleton(
    #[prop(default = "h-9 w-32")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("{} animate-pulse rounded-md bg-white/10", size) />
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white/10 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
