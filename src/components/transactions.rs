//! Transactions Component
//!
//! Recent wallet transactions, one styled row per entry.

use leptos::*;

use crate::components::glass_card::GlassCard;
use crate::components::loading::ListSkeleton;
use crate::state::wallet::{Transaction, TxKind, WalletStore};

fn kind_style(kind: TxKind) -> (&'static str, &'static str) {
    match kind {
        TxKind::Receive => ("↓", "bg-emerald-500/20 text-emerald-500"),
        TxKind::Send => ("↑", "bg-red-500/20 text-red-500"),
        TxKind::Contract => ("⌘", "bg-blue-500/20 text-blue-500"),
        TxKind::Swap => ("⇄", "bg-purple-500/20 text-purple-500"),
    }
}

/// Transactions widget
#[component]
pub fn TransactionList() -> impl IntoView {
    let wallet = use_context::<WalletStore>().expect("WalletStore not found");

    // Load once the widget first renders
    let wallet_for_load = wallet.clone();
    create_effect(move |_| {
        if wallet_for_load.transactions.get_untracked().is_empty() {
            wallet_for_load.load_transactions();
        }
    });

    let transactions = wallet.transactions;
    let loading = wallet.transactions_loading;

    view! {
        <GlassCard>
            <div class="flex items-center justify-between p-6 pb-4">
                <h2 class="text-lg font-semibold">"Transactions"</h2>
            </div>
            <div class="px-6 pb-6 grid gap-4">
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton /> }.into_view()
                    } else {
                        transactions
                            .get()
                            .into_iter()
                            .map(|tx| view! { <TransactionRow transaction=tx /> })
                            .collect_view()
                    }
                }}
            </div>
        </GlassCard>
    }
}

#[component]
fn TransactionRow(transaction: Transaction) -> impl IntoView {
    let (icon, badge) = kind_style(transaction.kind);
    let amount_color = if transaction.amount.starts_with('+') {
        "text-emerald-500"
    } else {
        "text-red-500"
    };

    view! {
        <div class="grid grid-cols-[32px_1fr_auto] items-center gap-4">
            <div class=format!("flex h-8 w-8 items-center justify-center rounded-md {}", badge)>
                {icon}
            </div>
            <div class="space-y-1">
                <p class="text-sm font-medium leading-none">{transaction.counterparty.clone()}</p>
                <p class="text-xs text-zinc-400">{format!("Tx: {}", transaction.hash)}</p>
            </div>
            <div class="flex flex-col items-end gap-1">
                <p class=format!("text-sm font-medium {}", amount_color)>
                    {format!("{} {}", transaction.amount, transaction.token)}
                </p>
                <p class="text-xs text-zinc-400">{transaction.timestamp.clone()}</p>
            </div>
        </div>
    }
}
