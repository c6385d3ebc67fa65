//! Terminal memory-match runner (default binary).
//!
//! Keyboard and mouse input come from crossterm; frames are drawn through the
//! framebuffer renderer. Settings and the in-progress session are saved under
//! the data directory by a background writer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};

use memory_match::config::AppConfig;
use memory_match::core::SessionView;
use memory_match::engine::{Effects, GameSession, SessionEvent};
use memory_match::input::{handle_key_event, should_quit, BoardCursor};
use memory_match::logging;
use memory_match::store::{BackgroundStore, FileStore, SessionPersistence};
use memory_match::term::{Confetti, FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use memory_match::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config)?;
    info!(data_dir = %config.data_dir.display(), "starting");

    let store = BackgroundStore::spawn(FileStore::new(&config.data_dir))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, SessionPersistence::new(store));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, persistence: SessionPersistence) -> Result<()> {
    let mut confetti = Confetti::new();
    let effects = Effects::new(confetti.trigger(), TerminalBell);
    let mut game = GameSession::start(config.engine_config(), persistence, effects)?;

    let view = GameView::default();
    let mut cursor = BoardCursor::new();
    let mut session_view = game.view();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.view_into(&mut session_view);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&session_view, Some(cursor.index()), viewport, &mut fb);
        confetti.draw(&mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        handle_action(&mut game, &mut cursor, &session_view, action)?;
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if let Some((index, id)) = view.tile_at(&session_view, viewport, column, row) {
                        cursor.set_index(index, session_view.tiles.len());
                        game.choose_tile(id);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with measured wall time so the clock does not drift.
        if last_tick.elapsed() >= tick_duration {
            let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
            last_tick = Instant::now();
            game.tick(elapsed_ms);
            confetti.tick(elapsed_ms);
        }

        for event in game.take_events() {
            match event {
                SessionEvent::NewGame { .. } => {
                    confetti.stop();
                    cursor.clamp(game.session().deck().len());
                }
                SessionEvent::Completed {
                    elapsed_seconds,
                    new_best,
                } => debug!(elapsed_seconds, new_best, "completion shown"),
                _ => {}
            }
        }
    }
}

fn handle_action(
    game: &mut GameSession,
    cursor: &mut BoardCursor,
    view: &SessionView,
    action: GameAction,
) -> Result<()> {
    match action {
        GameAction::CursorUp
        | GameAction::CursorDown
        | GameAction::CursorLeft
        | GameAction::CursorRight => {
            cursor.apply(action, view.columns, view.tiles.len());
        }
        GameAction::Flip => {
            if let Some(tile) = view.tiles.get(cursor.index()) {
                game.choose_tile(tile.id);
            }
        }
        _ => {
            game.apply_action(action)?;
        }
    }
    Ok(())
}
