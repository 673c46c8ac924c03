//! Terminal 2048 runner (default binary).
//!
//! Menu -> session -> menu loop. Uses crossterm for input and a custom
//! framebuffer-based renderer (no ratatui widgets/layout). The high score
//! is loaded once at startup and written back at every session boundary.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use tui_2048::core::GameSession;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, MenuState, TerminalRenderer, Viewport};
use tui_2048::types::Difficulty;
use tui_2048::HighScoreStore;

/// Input poll granularity; also bounds the redraw latency on resize.
const POLL_MS: u64 = 16;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// What a finished session wants the outer loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionOutcome {
    BackToMenu,
    Quit,
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = HighScoreStore::default();
    let mut high_score = store.load();

    let view = GameView;
    let mut menu = MenuState::new();

    loop {
        let difficulty = match run_menu(term, &mut menu, high_score)? {
            Some(difficulty) => difficulty,
            None => return Ok(()),
        };

        let mut session =
            GameSession::new(difficulty, seed_from_clock()).with_high_score(high_score);
        let outcome = run_session(term, &view, &mut session)?;

        high_score = session.high_score();
        // A failed save should not take the game down with it.
        let _ = store.save(high_score);

        if outcome == SessionOutcome::Quit {
            return Ok(());
        }
    }
}

fn run_menu(
    term: &mut TerminalRenderer,
    menu: &mut MenuState,
    high_score: u32,
) -> Result<Option<Difficulty>> {
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(menu.render(Viewport::new(w, h), high_score))?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Resize(..) => term.invalidate(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(None);
                }
                match key.code {
                    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => menu.move_up(),
                    KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => menu.move_down(),
                    KeyCode::Char('1') => menu.jump_to(0),
                    KeyCode::Char('2') => menu.jump_to(1),
                    KeyCode::Char('3') => menu.jump_to(2),
                    KeyCode::Enter => return Ok(Some(menu.selected())),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn run_session(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &mut GameSession,
) -> Result<SessionOutcome> {
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(&session.snapshot(), Viewport::new(w, h)))?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Resize(..) => term.invalidate(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(SessionOutcome::Quit);
                }
                if let Some(outcome) = handle_session_key(session, key) {
                    return Ok(outcome);
                }
            }
            _ => {}
        }
    }
}

/// One key against the session's current phase. Returns `Some` when the
/// session is finished and the outer loop should take over.
fn handle_session_key(session: &mut GameSession, key: KeyEvent) -> Option<SessionOutcome> {
    if session.game_over() {
        // Any key returns to the menu once the board is dead.
        return Some(SessionOutcome::BackToMenu);
    }

    if session.awaiting_win_choice() {
        // Space keeps going; anything else ends the session a winner.
        if key.code == KeyCode::Char(' ') {
            session.continue_after_win();
            return None;
        }
        return Some(SessionOutcome::BackToMenu);
    }

    if let Some(action) = handle_key_event(key) {
        session.apply_action(action);
    }
    None
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0x2048)
}
