//! Spawner AI - decides where the next tile appears and what it is worth.
//!
//! Medium difficulty reproduces classic 2048: a uniform random empty cell
//! and the 90/10 choice between a 2 and a 4, no search. Easy and hard run a
//! bounded-depth expectimax over every (cell, value) candidate and pick the
//! one that maximizes (easy, helping the player) or minimizes (hard,
//! adversarial) the evaluation. Ties go to the first candidate in the
//! board's deterministic empty-cell order, so both searched difficulties
//! are fully reproducible.

use crate::board::Board;
use crate::heuristic;
use crate::rng::TileRng;
use crate::types::{Difficulty, Direction, Pos, CHANCE_SAMPLE_LIMIT};

/// Score assigned to a player ply with no legal move (a lost position)
pub const DEAD_END_SCORE: f64 = -1.0e6;

/// Spawn probability of a 2 at a chance node
const TWO_PROB: f64 = 0.9;

/// Spawn probability of a 4 at a chance node
const FOUR_PROB: f64 = 0.1;

/// Expectimax evaluation of a position, starting at a player ply.
///
/// Player plies maximize over the four simulated moves; chance plies take
/// the probability-weighted expectation over spawning a 2 or a 4 in each
/// empty cell. Depth counts plies: easy searches 2, hard searches 3.
pub fn search(board: &Board, depth: u8) -> f64 {
    if depth == 0 {
        return heuristic::evaluate(board);
    }

    let mut best = f64::NEG_INFINITY;
    for dir in Direction::ALL {
        let result = board.apply_move(dir);
        if result.changed {
            best = best.max(chance_ply(&result.board, depth - 1));
        }
    }

    // No legal move: terminal position, worst possible for the player.
    if best == f64::NEG_INFINITY {
        DEAD_END_SCORE
    } else {
        best
    }
}

fn chance_ply(board: &Board, depth: u8) -> f64 {
    if depth == 0 {
        return heuristic::evaluate(board);
    }

    let empties = board.empty_cells();
    if empties.is_empty() {
        return heuristic::evaluate(board);
    }

    // Cap the fan-out on open boards to keep hard-mode latency interactive.
    let sampled = &empties[..empties.len().min(CHANCE_SAMPLE_LIMIT)];

    let mut total = 0.0;
    for &pos in sampled {
        let with_two = search(&board.place_tile(pos, 2), depth - 1);
        let with_four = search(&board.place_tile(pos, 4), depth - 1);
        total += TWO_PROB * with_two + FOUR_PROB * with_four;
    }

    total / sampled.len() as f64
}

/// Difficulty-driven tile spawner.
///
/// Owns the session's random source; the searched difficulties never touch
/// it, so an easy or hard game with a known board is fully deterministic.
#[derive(Debug, Clone)]
pub struct Spawner {
    difficulty: Difficulty,
    depth: u8,
    rng: TileRng,
}

impl Spawner {
    /// Create a spawner for the given difficulty and RNG seed
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        Self {
            difficulty,
            depth: difficulty.search_depth(),
            rng: TileRng::new(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current RNG state, used to derive a fresh seed on restart
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Decide the next spawn for `board`.
    ///
    /// Returns `None` when the board has no empty cell ("no spawn
    /// possible"). Callers are expected to have checked game over already;
    /// asking for a spawn on a full board is their logic error, and the
    /// `None` makes the skipped check visible rather than masking it.
    pub fn choose_spawn(&mut self, board: &Board) -> Option<(Pos, u32)> {
        let empties = board.empty_cells();
        if empties.is_empty() {
            return None;
        }

        match self.difficulty {
            Difficulty::Medium => {
                let pos = empties[self.rng.pick_index(empties.len())];
                Some((pos, self.rng.next_tile_value()))
            }
            Difficulty::Easy => Some(pick_candidate(board, &empties, self.depth, true)),
            Difficulty::Hard => Some(pick_candidate(board, &empties, self.depth, false)),
        }
    }
}

/// Enumerate every (cell, value) candidate, score each with expectimax and
/// keep the best. Strict comparison keeps the first-found candidate on ties.
fn pick_candidate(board: &Board, empties: &[Pos], depth: u8, maximize: bool) -> (Pos, u32) {
    let mut best: Option<(f64, Pos, u32)> = None;

    for &pos in empties {
        for value in [2u32, 4] {
            let score = search(&board.place_tile(pos, value), depth);
            let better = match best {
                None => true,
                Some((best_score, _, _)) => {
                    if maximize {
                        score > best_score
                    } else {
                        score < best_score
                    }
                }
            };
            if better {
                best = Some((score, pos, value));
            }
        }
    }

    // empties is non-empty, so a candidate always exists.
    let (_, pos, value) = best.unwrap();
    (pos, value)
}
