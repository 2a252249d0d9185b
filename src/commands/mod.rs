//! CLI command implementations for hastatus.
//!
//! This module provides implementations for all CLI subcommands:
//! - `status`: Fetch, classify and render one snapshot (the default)
//! - `check`: Config + socket + snapshot validation
//! - `raw`: Raw stats CSV dump

pub mod check;
pub mod raw;
pub mod status;

// Re-export command functions
pub use check::command_check;
pub use raw::command_raw;
pub use status::command_status;
