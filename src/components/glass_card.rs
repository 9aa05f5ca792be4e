//! Glass Card Component
//!
//! Frosted-glass container wrapping every dashboard widget.

use leptos::*;

#[component]
pub fn GlassCard(children: Children) -> impl IntoView {
    view! {
        <div class="relative rounded-3xl border border-white/5 bg-black/20 backdrop-blur-3xl \
                    shadow-lg overflow-hidden">
            {children()}
        </div>
    }
}
