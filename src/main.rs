//! CrypGod Dashboard
//!
//! Crypto portfolio, chart, transaction, and chat-assistant dashboard built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Live price charts with periodic polling
//! - Portfolio valuation against current prices
//! - Wallet transaction history
//! - Streaming AI chat assistant
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the CrypGod backend over HTTP (including a
//! newline-delimited JSON chat stream) and to CryptoCompare/Moralis for
//! market and wallet data.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;
mod stream;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
