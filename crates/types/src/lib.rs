//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board side length in cells (the classic game is 4x4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that counts as a win
pub const WIN_TILE: u32 = 2048;

/// Percent chance that a spawned tile is a 4 (the remaining 90% are 2s)
pub const FOUR_TILE_PERCENT: u32 = 10;

/// Expectimax look-ahead depth for the easy spawner (plies)
pub const EASY_SEARCH_DEPTH: u8 = 2;

/// Expectimax look-ahead depth for the hard spawner (plies)
pub const HARD_SEARCH_DEPTH: u8 = 3;

/// Maximum number of empty cells expanded at a chance node.
///
/// Keeps hard-difficulty search latency interactive on open boards; cells
/// beyond the cap are skipped in deterministic row-major order.
pub const CHANCE_SAMPLE_LIMIT: usize = 6;

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order used for game-over simulation
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Spawner difficulty, fixed for a game session
///
/// - **Easy**: the spawner searches for the placement that helps the player
/// - **Medium**: classic unbiased random spawning, no search
/// - **Hard**: the spawner searches for the placement that hurts the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Expectimax depth used by this difficulty's spawn decision.
    ///
    /// Medium never searches; its depth is only a placeholder.
    pub fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy | Difficulty::Medium => EASY_SEARCH_DEPTH,
            Difficulty::Hard => HARD_SEARCH_DEPTH,
        }
    }
}

/// A cell position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A merge produced by a move: the destination cell and the doubled value.
///
/// Consumed by the presentation layer for animation, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    pub pos: Pos,
    pub value: u32,
}

/// Game actions applied to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the board in the given direction
    Move(Direction),
    /// Keep playing after reaching 2048
    Continue,
    /// Restart the session (same difficulty, high score kept)
    Restart,
}
