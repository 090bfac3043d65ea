//! Library entry for the Sportify merchandise catalog engine.
//!
//! - [`catalog`]: the read-only product list.
//! - [`logic`]: filtering, sorting, wishlist toggles and the detail view.
//! - [`state`]: value types and the session `AppState`.
//! - [`store`]: key-value persistence and the wishlist store.

pub mod args;
pub mod catalog;
pub mod config;
pub mod logic;
pub mod state;
pub mod store;
pub mod util;

pub use util::format_lkr;
