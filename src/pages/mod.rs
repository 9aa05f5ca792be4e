//! Pages
//!
//! Top-level page components for each route.

pub mod charts;
pub mod dashboard;
pub mod exchange;
pub mod settings;

pub use charts::Charts;
pub use dashboard::Dashboard;
pub use exchange::Exchange;
pub use settings::Settings;
