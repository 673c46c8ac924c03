//! Game session - ties the board engine and spawner AI together.
//!
//! One `GameSession` is a single playthrough: it owns the board, the
//! cumulative score, the high-score watermark, and the won/game-over flags.
//! Every accepted move is followed by exactly one spawn decision; an
//! illegal move triggers nothing. Difficulty is fixed for the lifetime of
//! the session.

use crate::board::{Board, MoveResult};
use crate::spawner::Spawner;
use crate::types::{Difficulty, Direction, GameAction, BOARD_SIZE};

/// Plain-data copy of everything the presentation layer needs for one
/// frame. Cheap to build and independent of the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub won: bool,
    pub awaiting_win_choice: bool,
    pub game_over: bool,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    spawner: Spawner,
    difficulty: Difficulty,
    score: u32,
    /// Best score seen across sessions; persisted by the caller at
    /// session boundaries, never written from here.
    high_score: u32,
    /// Set once the board first holds a 2048 tile; never cleared.
    won: bool,
    /// Player chose to keep going after the win banner.
    win_acknowledged: bool,
    game_over: bool,
}

impl GameSession {
    /// Create a session and spawn the two initial tiles.
    ///
    /// The seed drives the medium spawner's randomness; searched
    /// difficulties place their initial tiles deterministically.
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        let mut spawner = Spawner::new(difficulty, seed);
        let mut board = Board::new();
        for _ in 0..2 {
            // A fresh board always has empty cells.
            let (pos, value) = spawner
                .choose_spawn(&board)
                .expect("empty board must accept a spawn");
            board = board.place_tile(pos, value);
        }

        Self {
            board,
            spawner,
            difficulty,
            score: 0,
            high_score: 0,
            won: false,
            win_acknowledged: false,
            game_over: false,
        }
    }

    /// Seed the high-score watermark from the persistence collaborator
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = self.high_score.max(high_score);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// True while the win banner is up and the player has not yet chosen
    /// to continue
    pub fn awaiting_win_choice(&self) -> bool {
        self.won && !self.win_acknowledged
    }

    /// Capture the render-relevant state for this frame.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.rows(),
            score: self.score,
            high_score: self.high_score,
            difficulty: self.difficulty,
            won: self.won,
            awaiting_win_choice: self.awaiting_win_choice(),
            game_over: self.game_over,
        }
    }

    /// Execute one move/spawn cycle.
    ///
    /// Returns `None` for an illegal move (board unchanged, no spawn) or
    /// when the game is already over. On success the returned `MoveResult`
    /// carries the merge events for the presentation layer; the session has
    /// already advanced past it (spawn placed, flags updated).
    pub fn try_move(&mut self, dir: Direction) -> Option<MoveResult> {
        if self.game_over {
            return None;
        }

        let result = self.board.apply_move(dir);
        if !result.changed {
            return None;
        }

        self.board = result.board;
        self.score += result.score_delta;
        self.high_score = self.high_score.max(self.score);

        if !self.won && self.board.has_won() {
            self.won = true;
        }

        // Exactly one spawn per accepted move. The board just changed, so
        // at least one cell is empty and the spawner cannot refuse.
        if let Some((pos, value)) = self.spawner.choose_spawn(&self.board) {
            self.board = self.board.place_tile(pos, value);
        }

        if self.board.is_game_over() {
            self.game_over = true;
        }

        Some(result)
    }

    /// Resume play after reaching 2048
    pub fn continue_after_win(&mut self) {
        if self.won {
            self.win_acknowledged = true;
        }
    }

    /// Start over with the same difficulty. The high score survives; the
    /// RNG is reseeded from its current stream so restarted games differ.
    pub fn restart(&mut self) {
        let high_score = self.high_score;
        let seed = self.spawner.rng_state().wrapping_add(1);
        *self = Self::new(self.difficulty, seed).with_high_score(high_score);
    }

    /// Apply a game action; returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.try_move(dir).is_some(),
            GameAction::Continue => {
                let was_waiting = self.awaiting_win_choice();
                self.continue_after_win();
                was_waiting
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}
