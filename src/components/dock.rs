//! Floating Dock Component
//!
//! Vertical dock fixed to the left edge: page navigation plus the widget
//! toggles for the dashboard grid.

use leptos::*;
use leptos_router::*;

use crate::state::ui::{UiState, Widget};

/// Floating dock with navigation and widget toggles
#[component]
pub fn FloatingDock() -> impl IntoView {
    view! {
        <div class="fixed left-4 top-1/2 -translate-y-1/2 z-30">
            <div class="flex flex-col items-center gap-2 rounded-2xl border border-white/5
                        bg-black/30 backdrop-blur-2xl p-2">
                <DockLink href="/" label="Dashboard" glyph="🏠" />
                <DockLink href="/charts" label="Charts" glyph="📊" />
                <DockLink href="/exchange" label="Exchange" glyph="🪙" />
                <DockLink href="/settings" label="Settings" glyph="⚙" />

                <div class="w-8 border-t border-white/10 my-1" />

                {Widget::ALL.into_iter().map(|widget| {
                    view! { <WidgetToggle widget=widget /> }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Navigation entry in the dock
#[component]
fn DockLink(
    href: &'static str,
    label: &'static str,
    glyph: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex h-10 w-10 items-center justify-center rounded-xl text-lg
                   text-zinc-400 hover:text-white hover:bg-white/10 transition-colors"
            active_class="bg-white/10 text-white"
        >
            <span title=label>{glyph}</span>
        </A>
    }
}

/// Toggle button for one dashboard widget
#[component]
fn WidgetToggle(widget: Widget) -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");

    let state_for_active = state.clone();
    let is_active = create_memo(move |_| {
        state_for_active.active_widgets.get().contains(&widget)
    });

    let on_click = move |_| state.toggle_widget(widget);

    view! {
        <button
            on:click=on_click
            title=widget.label()
            class=move || {
                let base = "flex h-10 w-10 items-center justify-center rounded-xl text-lg \
                            transition-colors";
                if is_active.get() {
                    format!("{} bg-white/10 text-white", base)
                } else {
                    format!("{} text-zinc-500 hover:text-white", base)
                }
            }
        >
            {widget.glyph()}
        </button>
    }
}
