//! TUI donut (workspace facade crate).
//!
//! This package keeps a single `tui_donut::{core,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_donut_core as core;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
