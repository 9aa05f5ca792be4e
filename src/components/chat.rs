//! Chat Component
//!
//! The CrypGod assistant widget: message history, streaming status, retry
//! handling, and the input form.

use leptos::*;
use web_sys::SubmitEvent;

use crate::components::glass_card::GlassCard;
use crate::components::markdown::Markdown;
use crate::state::chat::{ChatMessage, ChatStore, Role, StreamStatus};

/// Chat assistant widget
#[component]
pub fn Chat() -> impl IntoView {
    let chat = use_context::<ChatStore>().expect("ChatStore not found");
    let (draft, set_draft) = create_signal(String::new());
    let scroll_ref = create_node_ref::<html::Div>();

    // Keep the newest message in view
    let chat_for_scroll = chat.clone();
    create_effect(move |_| {
        chat_for_scroll.log.with(|_| ());
        if let Some(container) = scroll_ref.get() {
            container.set_scroll_top(container.scroll_height());
        }
    });

    let chat_for_submit = chat.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        set_draft.set(String::new());
        chat_for_submit.send(text);
    };

    let chat_for_list = chat.clone();
    let chat_for_status = chat.clone();
    let chat_for_disabled = chat.clone();

    view! {
        <GlassCard>
            <div class="flex flex-col h-[calc(95vh)] relative">
                // Header
                <div class="border-b border-white/5 p-4 flex items-center justify-between">
                    <h1 class="text-xl font-semibold">"CrypGod"</h1>
                </div>

                // Messages
                <div node_ref=scroll_ref class="flex-1 overflow-y-auto p-4 space-y-6">
                    {move || {
                        chat_for_list
                            .log
                            .with(|log| log.messages.clone())
                            .into_iter()
                            .map(|message| view! { <MessageView message=message /> })
                            .collect_view()
                    }}

                    // Transient streaming status
                    {move || {
                        chat_for_status
                            .log
                            .with(|log| log.status.clone())
                            .map(|status| view! { <StatusView status=status /> })
                    }}
                </div>

                // Message input
                <form on:submit=on_submit class="p-4 border-t border-white/5">
                    <div class="flex items-center gap-2">
                        <input
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            placeholder="Type a message..."
                            class="flex-1 bg-white/5 rounded-lg px-4 py-3 text-sm
                                   border border-white/5 focus:border-white/20 focus:outline-none"
                        />
                        <button
                            type="submit"
                            disabled=move || chat_for_disabled.log.with(|log| log.in_flight)
                            class="shrink-0 bg-white/5 hover:bg-white/10 disabled:opacity-40
                                   rounded-lg px-4 py-3 text-sm font-medium transition-colors"
                        >
                            "Send"
                        </button>
                    </div>
                </form>
            </div>
        </GlassCard>
    }
}

/// One chat message row
#[component]
fn MessageView(message: ChatMessage) -> impl IntoView {
    let chat = use_context::<ChatStore>().expect("ChatStore not found");

    let (author, avatar) = match message.role {
        Role::User => ("You", "U"),
        Role::Assistant => ("CrypGod", "C"),
    };

    let message_id = message.id;
    let on_retry = move |_| chat.retry(message_id);

    view! {
        <div class="flex items-start gap-3">
            <div class="h-8 w-8 shrink-0 rounded-full bg-white/10 flex items-center justify-center
                        text-sm font-semibold">
                {avatar}
            </div>
            <div class="grid gap-1 w-full">
                <div class="flex items-center gap-2">
                    <span class="font-semibold">{author}</span>
                    <span class="text-xs text-zinc-400">{message.timestamp.clone()}</span>
                </div>

                {if message.failed {
                    view! {
                        <div class="text-red-400">
                            {message.content.clone()}
                            <button
                                on:click=on_retry
                                class="ml-3 text-xs underline text-zinc-300 hover:text-white"
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_view()
                } else if message.role == Role::Assistant {
                    view! {
                        <Markdown source=message.content.clone() />
                        {message.image_url.clone().map(|url| view! {
                            <img
                                src=url
                                alt="Generated image"
                                class="mt-2 rounded-lg shadow-lg w-[400px] object-contain"
                            />
                        })}
                    }.into_view()
                } else {
                    view! { <div>{message.content.clone()}</div> }.into_view()
                }}
            </div>
        </div>
    }
}

/// Transient status row rendered while a response streams in
#[component]
fn StatusView(status: StreamStatus) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <div class="h-8 w-8 shrink-0 rounded-full bg-white/10 flex items-center justify-center
                        text-sm font-semibold">
                "C"
            </div>
            <div class="grid gap-1">
                <span class="font-semibold">"CrypGod"</span>
                {match status {
                    StreamStatus::Thinking { content } => view! {
                        <div class="flex items-center gap-2 text-zinc-400">
                            <AiThinking />
                            <span>{content}</span>
                        </div>
                    }.into_view(),
                    StreamStatus::ToolUsage { content, details } => view! {
                        <div class="text-zinc-400">
                            <p>{content}</p>
                            {details.map(|d| view! { <p class="text-sm opacity-80">{d}</p> })}
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Spinner shown while the assistant is thinking
#[component]
fn AiThinking() -> impl IntoView {
    view! {
        <div class="relative w-6 h-6">
            <div class="absolute inset-0">
                <div class="w-6 h-6 rounded-full border-4 border-white/10 border-t-white/60
                            animate-spin" />
            </div>
            <div class="absolute inset-0 flex items-center justify-center">
                <div class="w-1.5 h-1.5 rounded-full bg-white/60 animate-pulse" />
            </div>
        </div>
    }
}
