//! HTTP Clients
//!
//! Functions for communicating with the CrypGod backend and the
//! third-party market data APIs.

pub mod backend;
pub mod cryptocompare;
pub mod moralis;
