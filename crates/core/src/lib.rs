//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the
//! spawner AI. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: `Copy` boards and zero-allocation move resolution, so the
//!   expectimax search can fork positions freely
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 board with pure move resolution, merge events, and
//!   win/game-over detection
//! - [`heuristic`]: board evaluation (empty cells, monotonicity,
//!   smoothness, corner-anchored positional weights)
//! - [`spawner`]: difficulty-driven tile placement backed by a
//!   bounded-depth expectimax search
//! - [`rng`]: seedable LCG used by the medium (classic random) spawner
//! - [`session`]: one playthrough tying board, score, flags, and spawner
//!   together
//!
//! # Game Rules
//!
//! Standard 2048 movement: each move compresses every line toward the move
//! edge and merges adjacent equal tiles exactly once per tile. What is not
//! standard is the spawner: easy mode searches for the placement that helps
//! the player, hard mode for the one that hurts, and medium reproduces the
//! classic uniform spawn.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_types::{Difficulty, Direction};
//!
//! let mut game = GameSession::new(Difficulty::Medium, 12345);
//!
//! // A fresh board starts with two tiles.
//! assert_eq!(game.board().empty_count(), 14);
//!
//! // Moves that change the board trigger exactly one spawn.
//! for dir in Direction::ALL {
//!     if game.try_move(dir).is_some() {
//!         break;
//!     }
//! }
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod heuristic;
pub mod rng;
pub mod session;
pub mod spawner;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveResult};
pub use rng::{SimpleRng, TileRng};
pub use session::{GameSession, SessionSnapshot};
pub use spawner::{search, Spawner, DEAD_END_SCORE};
