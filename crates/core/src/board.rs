//! Board module - manages the 4x4 game grid
//!
//! The board is a 4x4 grid where each cell is empty (0) or holds a
//! power-of-two tile value. Uses a flat array for cache locality and
//! zero-allocation; the whole board is `Copy` so search code can fork
//! positions freely.
//!
//! All move logic is pure: `apply_move` and `place_tile` return new boards
//! and never touch hidden state, which is what makes the spawner's
//! look-ahead simulation safe.

use arrayvec::ArrayVec;

use crate::types::{Direction, MergeEvent, Pos, BOARD_SIZE, CELL_COUNT, WIN_TILE};

/// The game board - 4x4 grid using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of tile values, row-major order (row * SIZE + col), 0 = empty
    cells: [u32; CELL_COUNT],
}

/// Outcome of one move: the resulting board plus everything the caller
/// needs to score and animate it.
///
/// `changed == false` signals an illegal move; the caller must reject the
/// input and must not trigger a spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    /// Sum of the values produced by merges during this move
    pub score_delta: u32,
    pub changed: bool,
    /// Destination cell and doubled value for every merge (at most 8 per move)
    pub merges: ArrayVec<MergeEvent, 8>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from a 4x4 value grid
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.cells[r * BOARD_SIZE + c] = value;
            }
        }
        board
    }

    /// Convert to a 4x4 value grid (read accessor for the presentation layer)
    pub fn rows(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                rows[r][c] = self.cells[r * BOARD_SIZE + c];
            }
        }
        rows
    }

    #[inline(always)]
    fn index(row: u8, col: u8) -> usize {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        (row as usize) * BOARD_SIZE + (col as usize)
    }

    /// Get the tile value at (row, col); 0 means empty
    pub fn get(&self, row: u8, col: u8) -> u32 {
        self.cells[Self::index(row, col)]
    }

    fn set(&mut self, pos: Pos, value: u32) {
        self.cells[Self::index(pos.row, pos.col)] = value;
    }

    /// All empty cell positions in row-major order.
    ///
    /// The order is deterministic so search and tie-breaking are
    /// reproducible; it carries no other meaning.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        let mut empties = ArrayVec::new();
        for r in 0..BOARD_SIZE as u8 {
            for c in 0..BOARD_SIZE as u8 {
                if self.get(r, c) == 0 {
                    empties.push(Pos::new(r, c));
                }
            }
        }
        empties
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Largest tile value on the board
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Total of all tile values.
    ///
    /// Moves conserve this sum; only spawns increase it.
    pub fn tile_sum(&self) -> u32 {
        self.cells.iter().sum()
    }

    /// Return a new board with `value` placed at `pos`.
    ///
    /// Pure function. Placing on an occupied cell means the caller skipped
    /// the game-over/empty-cells check and is a programming error.
    ///
    /// # Panics
    ///
    /// Panics if the target cell is not empty.
    pub fn place_tile(&self, pos: Pos, value: u32) -> Board {
        assert_eq!(
            self.get(pos.row, pos.col),
            0,
            "place_tile on occupied cell ({}, {})",
            pos.row,
            pos.col
        );
        let mut board = *self;
        board.set(pos, value);
        board
    }

    /// Cell coordinates of one line, ordered from the move edge inward.
    fn line_positions(dir: Direction, line: usize) -> [Pos; BOARD_SIZE] {
        let mut positions = [Pos::new(0, 0); BOARD_SIZE];
        let last = (BOARD_SIZE - 1) as u8;
        for (k, slot) in positions.iter_mut().enumerate() {
            let k8 = k as u8;
            *slot = match dir {
                Direction::Left => Pos::new(line as u8, k8),
                Direction::Right => Pos::new(line as u8, last - k8),
                Direction::Up => Pos::new(k8, line as u8),
                Direction::Down => Pos::new(last - k8, line as u8),
            };
        }
        positions
    }

    /// Resolve one move: compress every line toward the move edge, merge
    /// adjacent equal pairs exactly once per tile, re-compress.
    ///
    /// Pure function of the board and direction. A tile produced by a merge
    /// never merges again within the same move (standard 2048 rule).
    pub fn apply_move(&self, dir: Direction) -> MoveResult {
        let mut board = Board::new();
        let mut score_delta = 0u32;
        let mut merges: ArrayVec<MergeEvent, 8> = ArrayVec::new();

        for line in 0..BOARD_SIZE {
            let positions = Self::line_positions(dir, line);

            // Compress: collect non-empty tiles preserving relative order.
            let mut tiles: ArrayVec<u32, BOARD_SIZE> = ArrayVec::new();
            for pos in positions {
                let value = self.get(pos.row, pos.col);
                if value != 0 {
                    tiles.push(value);
                }
            }

            // Merge pairs from the move edge inward, writing compacted output.
            let mut out = 0usize;
            let mut i = 0usize;
            while i < tiles.len() {
                if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
                    let merged = tiles[i] * 2;
                    board.set(positions[out], merged);
                    score_delta += merged;
                    merges.push(MergeEvent {
                        pos: positions[out],
                        value: merged,
                    });
                    i += 2;
                } else {
                    board.set(positions[out], tiles[i]);
                    i += 1;
                }
                out += 1;
            }
        }

        let changed = board.cells != self.cells;
        MoveResult {
            board,
            score_delta,
            changed,
            merges,
        }
    }

    /// True iff no direction yields a changed board.
    ///
    /// Simulates all four moves; merge legality depends on direction, so
    /// there is no cheaper shortcut.
    pub fn is_game_over(&self) -> bool {
        Direction::ALL.iter().all(|&dir| !self.apply_move(dir).changed)
    }

    /// True iff any tile has reached the winning value.
    ///
    /// Winning does not end the session; play may continue.
    pub fn has_won(&self) -> bool {
        self.max_tile() >= WIN_TILE
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
