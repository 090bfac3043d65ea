//! Session state and the value types it is built from.

pub mod app_state;
pub mod query;
pub mod types;

pub use app_state::AppState;
pub use query::QueryParams;
pub use types::{
    Category, Product, ProductImage, ProductSpecs, SortKey, StateEvent, ToggleOutcome,
};
