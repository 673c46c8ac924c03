//! Spawner policy behavior through the public facade.

use tui_2048::core::{search, Board, Spawner};
use tui_2048::types::{Difficulty, Pos, EASY_SEARCH_DEPTH, HARD_SEARCH_DEPTH};

fn midgame_board() -> Board {
    Board::from_rows([
        [64, 32, 8, 2],
        [16, 8, 4, 0],
        [4, 2, 0, 0],
        [2, 0, 0, 0],
    ])
}

/// Enumerate every (cell, value) candidate the searched modes consider.
fn candidates(board: &Board, depth: u8) -> Vec<(Pos, u32, f64)> {
    board
        .empty_cells()
        .iter()
        .flat_map(|&pos| {
            [2u32, 4u32].map(|value| {
                let child = board.place_tile(pos, value);
                (pos, value, search(&child, depth))
            })
        })
        .collect()
}

#[test]
fn easy_picks_the_best_scored_candidate() {
    let board = midgame_board();
    let mut spawner = Spawner::new(Difficulty::Easy, 1);
    let (pos, value) = spawner.choose_spawn(&board).unwrap();

    let chosen = search(&board.place_tile(pos, value), EASY_SEARCH_DEPTH);
    for (p, v, score) in candidates(&board, EASY_SEARCH_DEPTH) {
        assert!(
            score <= chosen,
            "candidate ({p:?}, {v}) scores {score} above chosen {chosen}"
        );
    }
}

#[test]
fn hard_picks_the_worst_scored_candidate() {
    let board = midgame_board();
    let mut spawner = Spawner::new(Difficulty::Hard, 1);
    let (pos, value) = spawner.choose_spawn(&board).unwrap();

    let chosen = search(&board.place_tile(pos, value), HARD_SEARCH_DEPTH);
    for (p, v, score) in candidates(&board, HARD_SEARCH_DEPTH) {
        assert!(
            score >= chosen,
            "candidate ({p:?}, {v}) scores {score} below chosen {chosen}"
        );
    }
}

#[test]
fn searched_modes_ignore_the_seed() {
    let board = midgame_board();
    for difficulty in [Difficulty::Easy, Difficulty::Hard] {
        let a = Spawner::new(difficulty, 7).choose_spawn(&board);
        let b = Spawner::new(difficulty, 99_999).choose_spawn(&board);
        assert_eq!(a, b, "{difficulty:?}");
    }
}

#[test]
fn medium_spawns_land_on_empty_cells_with_legal_values() {
    let board = midgame_board();
    let empties = board.empty_cells();
    let mut spawner = Spawner::new(Difficulty::Medium, 424_242);

    for _ in 0..200 {
        let (pos, value) = spawner.choose_spawn(&board).unwrap();
        assert!(empties.contains(&pos));
        assert!(value == 2 || value == 4);
    }
}

#[test]
fn every_difficulty_refuses_a_full_board() {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(Spawner::new(difficulty, 1).choose_spawn(&board), None);
    }
}

#[test]
fn deeper_search_still_prefers_open_boards() {
    let open = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let cramped = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [0, 0, 2, 4],
    ]);
    for depth in [EASY_SEARCH_DEPTH, HARD_SEARCH_DEPTH] {
        assert!(search(&open, depth) > search(&cramped, depth), "depth {depth}");
    }
}
