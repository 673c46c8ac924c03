//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Uses the classic 2048 palette; tiles above 2048 fall back to the dark
//! "super tile" color.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, BOARD_SIZE};
use tui_2048_core::session::SessionSnapshot;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board cell width in terminal columns.
const TILE_W: u16 = 8;
/// Board cell height in terminal rows.
const TILE_H: u16 = 3;
/// Gap between tiles, matching the original's grid chrome.
const GAP: u16 = 1;

const BACKGROUND: Rgb = Rgb::new(250, 248, 239);
const GRID_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_TILE: Rgb = Rgb::new(205, 193, 180);
const TEXT_LIGHT: Rgb = Rgb::new(119, 110, 101);
const TEXT_DARK: Rgb = Rgb::new(249, 246, 242);

/// Background color for a tile value (classic 2048 palette).
fn tile_bg(value: u32) -> Rgb {
    match value {
        0 => EMPTY_TILE,
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    }
}

/// Text color for a tile value.
fn tile_fg(value: u32) -> Rgb {
    if value <= 4 {
        TEXT_LIGHT
    } else {
        TEXT_DARK
    }
}

/// A lightweight terminal renderer for the 2048 board and chrome.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render a session snapshot into a framebuffer.
    pub fn render(&self, snapshot: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT_LIGHT, BACKGROUND).into_cell(' '));

        let grid_w = BOARD_SIZE as u16 * TILE_W + (BOARD_SIZE as u16 + 1) * GAP;
        let grid_h = BOARD_SIZE as u16 * TILE_H + (BOARD_SIZE as u16 + 1) * GAP;

        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        // Leave two header rows above the grid.
        let start_y = (viewport.height.saturating_sub(grid_h + 3) / 2).saturating_add(2);

        self.draw_header(&mut fb, snapshot, start_x, start_y, grid_w);

        // Grid chrome.
        fb.fill_rect(
            start_x,
            start_y,
            grid_w,
            grid_h,
            ' ',
            CellStyle::new(TEXT_DARK, GRID_BG),
        );

        // Tiles.
        let rows = snapshot.board;
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let x = start_x + GAP + c as u16 * (TILE_W + GAP);
                let y = start_y + GAP + r as u16 * (TILE_H + GAP);
                self.draw_tile(&mut fb, x, y, value);
            }
        }

        // Footer help line.
        fb.put_str_centered(
            start_x.saturating_sub(8),
            start_y + grid_h + 1,
            grid_w + 16,
            "arrows/wasd move · r restart · q quit",
            CellStyle::new(TEXT_LIGHT, BACKGROUND),
        );

        // Overlays.
        if snapshot.game_over {
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                grid_w,
                grid_h,
                "GAME OVER",
                "press any key for menu",
            );
        } else if snapshot.awaiting_win_choice {
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                grid_w,
                grid_h,
                "YOU WIN!",
                "space: keep going · other: menu",
            );
        }

        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &SessionSnapshot,
        start_x: u16,
        start_y: u16,
        grid_w: u16,
    ) {
        let y = start_y.saturating_sub(2);
        let title_style = CellStyle::new(TEXT_DARK, tile_bg(2048)).bold();
        fb.put_str(start_x, y, " 2048 ", title_style);

        let badge = match snapshot.difficulty {
            Difficulty::Easy => " EASY ",
            Difficulty::Medium => " MEDIUM ",
            Difficulty::Hard => " HARD ",
        };
        fb.put_str(start_x + 7, y, badge, CellStyle::new(TEXT_DARK, GRID_BG));

        let score_line = format!("SCORE {:>6}  BEST {:>6}", snapshot.score, snapshot.high_score);
        let x = start_x + grid_w.saturating_sub(score_line.chars().count() as u16);
        fb.put_str(
            x,
            y,
            &score_line,
            CellStyle::new(TEXT_LIGHT, BACKGROUND).bold(),
        );
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let style = CellStyle::new(tile_fg(value), tile_bg(value)).bold();
        fb.fill_rect(x, y, TILE_W, TILE_H, ' ', style);
        if value != 0 {
            fb.put_str_centered(x, y + TILE_H / 2, TILE_W, &value.to_string(), style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        title: &str,
        hint: &str,
    ) {
        let mid = y + h / 2;
        let style = CellStyle::new(TEXT_DARK, Rgb::new(60, 58, 50)).bold();
        fb.fill_rect(x, mid.saturating_sub(1), w, 3, ' ', style);
        fb.put_str_centered(x, mid, w, title, style);
        fb.put_str_centered(x, mid + 1, w, hint, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(board: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> SessionSnapshot {
        SessionSnapshot {
            board,
            score: 128,
            high_score: 4096,
            difficulty: Difficulty::Hard,
            won: false,
            awaiting_win_choice: false,
            game_over: false,
        }
    }

    fn full_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_tile_values_are_rendered() {
        let mut board = [[0; BOARD_SIZE]; BOARD_SIZE];
        board[0][0] = 512;
        board[2][3] = 64;
        let view = GameView;
        let fb = view.render(&snapshot_with(board), Viewport::new(80, 30));
        let text = full_text(&fb);
        assert!(text.contains("512"), "missing 512 tile:\n{text}");
        assert!(text.contains("64"), "missing 64 tile:\n{text}");
    }

    #[test]
    fn test_header_shows_scores_and_difficulty() {
        let view = GameView;
        let fb = view.render(&snapshot_with([[0; 4]; 4]), Viewport::new(80, 30));
        let text = full_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("BEST"));
        assert!(text.contains("128"));
        assert!(text.contains("4096"));
        assert!(text.contains("HARD"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snapshot = snapshot_with([[0; 4]; 4]);
        snapshot.game_over = true;
        let fb = GameView.render(&snapshot, Viewport::new(80, 30));
        assert!(full_text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn test_win_overlay() {
        let mut snapshot = snapshot_with([[0; 4]; 4]);
        snapshot.won = true;
        snapshot.awaiting_win_choice = true;
        let fb = GameView.render(&snapshot, Viewport::new(80, 30));
        assert!(full_text(&fb).contains("YOU WIN"));
    }

    #[test]
    fn test_empty_cell_uses_empty_palette() {
        let fb = GameView.render(&snapshot_with([[0; 4]; 4]), Viewport::new(80, 30));
        let hits = fb
            .cells()
            .iter()
            .filter(|cell| cell.style.bg == EMPTY_TILE)
            .count();
        // 16 empty tiles of TILE_W x TILE_H cells each.
        assert_eq!(hits, 16 * (TILE_W * TILE_H) as usize);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let _ = GameView.render(&snapshot_with([[2; 4]; 4]), Viewport::new(10, 5));
    }
}
