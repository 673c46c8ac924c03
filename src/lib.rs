//! TUI 2048 (workspace facade crate).
//!
//! This package keeps the `tui_2048::{core,term,input,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`. High-score persistence lives here because it is an app-level
//! concern, not a game-rules one.

pub mod highscore;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use highscore::HighScoreStore;
