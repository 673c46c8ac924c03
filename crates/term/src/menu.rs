//! Difficulty selection menu.
//!
//! Pure state + rendering; the main loop feeds it key events and reads
//! back the chosen difficulty.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::Difficulty;

const BACKGROUND: Rgb = Rgb::new(250, 248, 239);
const TEXT_LIGHT: Rgb = Rgb::new(119, 110, 101);
const TEXT_DARK: Rgb = Rgb::new(249, 246, 242);

struct MenuOption {
    difficulty: Difficulty,
    label: &'static str,
    description: &'static str,
    tagline: &'static str,
    accent: Rgb,
}

const OPTIONS: [MenuOption; 3] = [
    MenuOption {
        difficulty: Difficulty::Easy,
        label: "EASY",
        description: "AI helps you with favorable spawns",
        tagline: "Good for learning!",
        accent: Rgb::new(46, 204, 113),
    },
    MenuOption {
        difficulty: Difficulty::Medium,
        label: "MEDIUM",
        description: "Random spawns (classic mode)",
        tagline: "The original experience",
        accent: Rgb::new(52, 152, 219),
    },
    MenuOption {
        difficulty: Difficulty::Hard,
        label: "HARD",
        description: "AI hinders you with bad spawns",
        tagline: "For experienced players",
        accent: Rgb::new(231, 76, 60),
    },
];

/// Cursor state for the difficulty menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
}

impl Default for MenuState {
    fn default() -> Self {
        // Medium is the classic mode, so it is the default cursor position.
        Self { selected: 1 }
    }
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Difficulty {
        OPTIONS[self.selected].difficulty
    }

    pub fn move_up(&mut self) {
        self.selected = (self.selected + OPTIONS.len() - 1) % OPTIONS.len();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % OPTIONS.len();
    }

    /// Jump directly to an option, as the 1/2/3 shortcut keys do.
    pub fn jump_to(&mut self, index: usize) {
        if index < OPTIONS.len() {
            self.selected = index;
        }
    }

    /// Render the menu into a framebuffer.
    pub fn render(&self, viewport: Viewport, high_score: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT_LIGHT, BACKGROUND).into_cell(' '));

        let width = viewport.width;
        let mut y = viewport.height.saturating_sub(14) / 2;

        fb.put_str_centered(
            0,
            y,
            width,
            " 2 0 4 8 ",
            CellStyle::new(TEXT_DARK, Rgb::new(237, 194, 46)).bold(),
        );
        y = y.saturating_add(2);
        fb.put_str_centered(
            0,
            y,
            width,
            "select difficulty",
            CellStyle::new(TEXT_LIGHT, BACKGROUND),
        );
        y = y.saturating_add(2);

        for (index, option) in OPTIONS.iter().enumerate() {
            let selected = index == self.selected;
            let label_style = if selected {
                CellStyle::new(TEXT_DARK, option.accent).bold()
            } else {
                CellStyle::new(option.accent, BACKGROUND)
            };
            let marker = if selected { "> " } else { "  " };
            let line = format!(
                "{}{}. {:<8}{}",
                marker,
                index + 1,
                option.label,
                option.description
            );
            fb.put_str_centered(0, y, width, &line, label_style);
            if selected {
                fb.put_str_centered(
                    0,
                    y + 1,
                    width,
                    option.tagline,
                    CellStyle::new(TEXT_LIGHT, BACKGROUND),
                );
            }
            y = y.saturating_add(3);
        }

        if high_score > 0 {
            fb.put_str_centered(
                0,
                y,
                width,
                &format!("best: {high_score}"),
                CellStyle::new(TEXT_LIGHT, BACKGROUND).bold(),
            );
            y = y.saturating_add(2);
        }

        fb.put_str_centered(
            0,
            y,
            width,
            "up/down select · enter play · q quit",
            CellStyle::new(TEXT_LIGHT, BACKGROUND),
        );

        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_defaults_to_medium() {
        assert_eq!(MenuState::new().selected(), Difficulty::Medium);
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut menu = MenuState::new();
        menu.move_down();
        assert_eq!(menu.selected(), Difficulty::Hard);
        menu.move_down();
        assert_eq!(menu.selected(), Difficulty::Easy);
        menu.move_up();
        assert_eq!(menu.selected(), Difficulty::Hard);
    }

    #[test]
    fn test_jump_to_shortcut() {
        let mut menu = MenuState::new();
        menu.jump_to(0);
        assert_eq!(menu.selected(), Difficulty::Easy);
        menu.jump_to(2);
        assert_eq!(menu.selected(), Difficulty::Hard);
        // Out-of-range jumps are ignored.
        menu.jump_to(9);
        assert_eq!(menu.selected(), Difficulty::Hard);
    }

    #[test]
    fn test_render_lists_all_options() {
        let fb = MenuState::new().render(Viewport::new(80, 24), 0);
        let text = full_text(&fb);
        assert!(text.contains("EASY"));
        assert!(text.contains("MEDIUM"));
        assert!(text.contains("HARD"));
        assert!(text.contains("classic mode"));
    }

    #[test]
    fn test_render_marks_selection_and_best() {
        let mut menu = MenuState::new();
        menu.move_down();
        let fb = menu.render(Viewport::new(80, 24), 512);
        let text = full_text(&fb);
        assert!(text.contains("> 3. HARD"));
        assert!(text.contains("For experienced players"));
        assert!(text.contains("best: 512"));
    }
}
