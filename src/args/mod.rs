//! Command-line argument parsing and handling.

pub mod browse;
pub mod definition;
pub mod detail;
pub mod utils;
pub mod wishlist;

// Re-export commonly used items
pub use definition::{Args, process_args, wants_browse};
pub use utils::determine_log_level;
