//! Terminal UI for the 2048 game.
//!
//! Split into a pure side and an I/O side:
//!
//! - [`fb`]: framebuffer of styled character cells
//! - [`game_view`]: session snapshot -> framebuffer
//! - [`menu`]: difficulty selection state and rendering
//! - [`renderer`]: framebuffer -> terminal escape sequences, with diff
//!   redraw between frames
//!
//! Everything except [`renderer`] is testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod menu;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use menu::MenuState;
pub use renderer::TerminalRenderer;
