//! Heuristic evaluation of board quality.
//!
//! Higher is better for the player. The score is a weighted combination of
//! four measures; the weights are fixed constants so spawn decisions are
//! reproducible. Tests rely on the relative ordering these produce, not on
//! exact values.
//!
//! - empty cells: room to maneuver dominates everything else
//! - monotonicity: rows/columns ordered in one consistent direction
//! - smoothness: neighbouring tiles of similar magnitude merge sooner
//! - position: large tiles belong near the anchor corner (top-left)

use crate::board::Board;
use crate::types::BOARD_SIZE;

/// Points per empty cell
const EMPTY_WEIGHT: f64 = 500.0;

/// Penalty weight for non-monotonic rows/columns
const MONO_WEIGHT: f64 = 100.0;

/// Penalty weight for adjacent tiles of different magnitude
const SMOOTH_WEIGHT: f64 = 30.0;

/// Weight applied to the positional matrix term
const POSITION_WEIGHT: f64 = 20.0;

/// Positional weights, anchored at the top-left corner.
///
/// Applied to log2 tile values, so a 2048 in the corner outweighs the same
/// tile stranded in the middle.
const POSITION_WEIGHTS: [[f64; BOARD_SIZE]; BOARD_SIZE] = [
    [6.0, 5.0, 4.0, 3.0],
    [5.0, 4.0, 3.0, 2.0],
    [4.0, 3.0, 2.0, 1.0],
    [3.0, 2.0, 1.0, 0.0],
];

/// Evaluate a board. Pure function; higher favors the player.
pub fn evaluate(board: &Board) -> f64 {
    let rows = board.rows();
    EMPTY_WEIGHT * board.empty_count() as f64
        + MONO_WEIGHT * monotonicity(&rows)
        + SMOOTH_WEIGHT * smoothness(&rows)
        + POSITION_WEIGHT * positional(&rows)
}

/// log2 of a tile value, with empty cells counting as 0.
#[inline]
fn tile_log(value: u32) -> f64 {
    if value == 0 {
        0.0
    } else {
        (value as f64).log2()
    }
}

/// Monotonicity: for every row and column, accumulate the violations of an
/// increasing and of a decreasing ordering (in log2 space) and charge the
/// smaller of the two. A perfectly ordered line costs nothing regardless of
/// which way it slopes. Returns a value <= 0.
fn monotonicity(rows: &[[u32; BOARD_SIZE]; BOARD_SIZE]) -> f64 {
    let mut penalty = 0.0;

    for i in 0..BOARD_SIZE {
        let mut row_incr = 0.0;
        let mut row_decr = 0.0;
        let mut col_incr = 0.0;
        let mut col_decr = 0.0;

        for j in 0..BOARD_SIZE - 1 {
            let row_step = tile_log(rows[i][j + 1]) - tile_log(rows[i][j]);
            if row_step > 0.0 {
                row_incr += row_step;
            } else {
                row_decr -= row_step;
            }

            let col_step = tile_log(rows[j + 1][i]) - tile_log(rows[j][i]);
            if col_step > 0.0 {
                col_incr += col_step;
            } else {
                col_decr -= col_step;
            }
        }

        penalty += row_incr.min(row_decr) + col_incr.min(col_decr);
    }

    -penalty
}

/// Smoothness: penalize the log2 gap between horizontally and vertically
/// adjacent non-empty tiles. Returns a value <= 0.
fn smoothness(rows: &[[u32; BOARD_SIZE]; BOARD_SIZE]) -> f64 {
    let mut total = 0.0;

    for i in 0..BOARD_SIZE {
        for j in 0..BOARD_SIZE {
            let value = rows[i][j];
            if value == 0 {
                continue;
            }
            if j + 1 < BOARD_SIZE && rows[i][j + 1] != 0 {
                total -= (tile_log(value) - tile_log(rows[i][j + 1])).abs();
            }
            if i + 1 < BOARD_SIZE && rows[i + 1][j] != 0 {
                total -= (tile_log(value) - tile_log(rows[i + 1][j])).abs();
            }
        }
    }

    total
}

/// Positional term: log2 tile values weighted by the corner-anchored matrix.
fn positional(rows: &[[u32; BOARD_SIZE]; BOARD_SIZE]) -> f64 {
    let mut total = 0.0;
    for i in 0..BOARD_SIZE {
        for j in 0..BOARD_SIZE {
            total += POSITION_WEIGHTS[i][j] * tile_log(rows[i][j]);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptier_board_scores_higher() {
        let sparse = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let busy = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [0; 4], [0; 4]]);
        assert!(evaluate(&sparse) > evaluate(&busy));
    }

    #[test]
    fn test_corner_max_tile_beats_center() {
        let corner = Board::from_rows([[256, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let center = Board::from_rows([[0; 4], [0, 256, 0, 0], [0; 4], [0; 4]]);
        assert!(evaluate(&corner) > evaluate(&center));
    }

    #[test]
    fn test_monotonic_row_beats_shuffled() {
        let ordered = Board::from_rows([[16, 8, 4, 2], [0; 4], [0; 4], [0; 4]]);
        let shuffled = Board::from_rows([[8, 2, 16, 4], [0; 4], [0; 4], [0; 4]]);
        assert!(evaluate(&ordered) > evaluate(&shuffled));
    }

    #[test]
    fn test_perfectly_ordered_line_has_no_mono_penalty() {
        let decreasing = [[16, 8, 4, 2], [0; 4], [0; 4], [0; 4]];
        let increasing = [[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]];
        assert_eq!(monotonicity(&decreasing), 0.0);
        assert_eq!(monotonicity(&increasing), 0.0);

        let broken = [[16, 2, 8, 4], [0; 4], [0; 4], [0; 4]];
        assert!(monotonicity(&broken) < 0.0);
    }

    #[test]
    fn test_smoothness_prefers_equal_neighbours() {
        let smooth = [[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]];
        let rough = [[2, 128, 0, 0], [0; 4], [0; 4], [0; 4]];
        assert!(smoothness(&smooth) > smoothness(&rough));
        assert_eq!(smoothness(&smooth), 0.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let board = Board::from_rows([[2, 4, 8, 16], [32, 0, 2, 0], [0; 4], [4, 0, 0, 2]]);
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
