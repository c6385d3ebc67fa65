//! Game session orchestrator.
//!
//! Owns the core [`Session`] together with everything around it that is not
//! pure game state: settings, persistence, the deferred mismatch resolution,
//! the deck RNG and completion effects.

use tracing::{debug, info, warn};

use memory_match_core::types::{
    Difficulty, GameAction, Theme, TileId, DEFAULT_DIFFICULTY, DEFAULT_MISMATCH_DELAY_MS,
    DEFAULT_THEME,
};
use memory_match_core::{
    ChooseOutcome, ConfigurationError, DeckRng, ResolutionToken, Session, SessionSnapshot,
    SessionView, Settings, TileIdAllocator,
};
use memory_match_store::SessionPersistence;

use crate::effects::Effects;
use crate::event::SessionEvent;
use crate::timer::ResolutionTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub theme: Theme,
    pub difficulty: Difficulty,
    /// How long a mismatched pair stays face-up.
    pub mismatch_delay_ms: u32,
    /// Offer the saved in-progress session on start.
    pub restore: bool,
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME,
            difficulty: DEFAULT_DIFFICULTY,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            restore: true,
            seed: None,
        }
    }
}

pub struct GameSession {
    session: Session,
    settings: Settings,
    persistence: SessionPersistence,
    timer: ResolutionTimer,
    rng: DeckRng,
    ids: TileIdAllocator,
    mismatch_delay_ms: u32,
    effects: Effects,
    events: Vec<SessionEvent>,
    snapshot_buf: SessionSnapshot,
}

impl GameSession {
    /// Load settings, then restore the saved session or deal a new one.
    pub fn start(
        config: EngineConfig,
        persistence: SessionPersistence,
        effects: Effects,
    ) -> Result<Self, ConfigurationError> {
        let settings = persistence.load_settings();
        let mut rng = config.seed.map(DeckRng::seeded).unwrap_or_default();
        let mut ids = TileIdAllocator::new();
        let generation = 1;

        let restored = if config.restore {
            restore_saved(&persistence, generation, &mut ids)
        } else {
            None
        };
        let was_restored = restored.is_some();
        let session = match restored {
            Some(session) => session,
            None => Session::new(config.theme, config.difficulty, generation, &mut rng, &mut ids)?,
        };

        let mut game = Self {
            session,
            settings,
            persistence,
            timer: ResolutionTimer::new(),
            rng,
            ids,
            mismatch_delay_ms: config.mismatch_delay_ms,
            effects,
            events: Vec::with_capacity(8),
            snapshot_buf: SessionSnapshot::default(),
        };

        if !was_restored {
            game.persistence.clear_snapshot();
        }
        info!(
            theme = %game.session.theme(),
            difficulty = %game.session.difficulty(),
            restored = was_restored,
            "session started"
        );
        game.push_new_game(was_restored);
        Ok(game)
    }

    /// Deal a new session. The deck is built first; on error the current
    /// session is left untouched.
    pub fn new_game(&mut self, theme: Theme, difficulty: Difficulty) -> Result<(), ConfigurationError> {
        let generation = self.session.generation().wrapping_add(1);
        let dealt = Session::new(theme, difficulty, generation, &mut self.rng, &mut self.ids);
        self.install(dealt)
    }

    // Every `Theme` covers every `Difficulty`, so a failed deal cannot come
    // from typed arguments today; `install` still keeps the old session then.
    fn install(&mut self, dealt: Result<Session, ConfigurationError>) -> Result<(), ConfigurationError> {
        let session = dealt?;
        let (theme, difficulty, generation) =
            (session.theme(), session.difficulty(), session.generation());

        if self.timer.cancel() {
            debug!("cancelled pending mismatch resolution");
        }
        self.session = session;
        self.persistence.clear_snapshot();
        info!(%theme, %difficulty, generation, "new game");
        self.push_new_game(false);
        Ok(())
    }

    /// Same parameters, fresh deck.
    pub fn restart(&mut self) -> Result<(), ConfigurationError> {
        self.new_game(self.session.theme(), self.session.difficulty())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ConfigurationError> {
        self.new_game(theme, self.session.difficulty())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ConfigurationError> {
        self.new_game(self.session.theme(), difficulty)
    }

    pub fn cycle_theme(&mut self) -> Result<(), ConfigurationError> {
        self.set_theme(self.session.theme().next())
    }

    pub fn cycle_difficulty(&mut self) -> Result<(), ConfigurationError> {
        self.set_difficulty(self.session.difficulty().next())
    }

    /// Choose a tile. A mismatch schedules its own resolution; call
    /// [`GameSession::tick`] to let the delay run.
    pub fn choose_tile(&mut self, id: TileId) -> ChooseOutcome {
        let outcome = self.session.choose_tile(id);
        match outcome {
            ChooseOutcome::Ignored(reason) => {
                debug!(tile = %id, ?reason, "choice ignored");
            }
            ChooseOutcome::FirstChosen => {
                self.events.push(SessionEvent::StateChanged);
            }
            ChooseOutcome::Matched { completed } => {
                debug!(tile = %id, "pair matched");
                self.events.push(SessionEvent::TurnResolved {
                    matched: true,
                    turn_count: self.session.turn_count(),
                });
                if completed {
                    self.complete();
                } else {
                    self.save_snapshot();
                }
            }
            ChooseOutcome::Mismatched(token) => {
                debug!(tile = %id, delay_ms = self.mismatch_delay_ms, "pair mismatched");
                self.timer.schedule(token, self.mismatch_delay_ms);
                self.events.push(SessionEvent::StateChanged);
            }
        }
        outcome
    }

    /// Delayed mismatch resolution. Returns false for a stale token, which is
    /// otherwise ignored.
    pub fn resolve_pending(&mut self, token: ResolutionToken) -> bool {
        match self.session.resolve_mismatch(token) {
            Ok(()) => {
                self.events.push(SessionEvent::TurnResolved {
                    matched: false,
                    turn_count: self.session.turn_count(),
                });
                self.save_snapshot();
                true
            }
            Err(stale) => {
                debug!(%stale, "ignoring stale mismatch resolution");
                false
            }
        }
    }

    /// Advance wall time: fires a due mismatch resolution, then runs the clock.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(token) = self.timer.advance(elapsed_ms) {
            self.resolve_pending(token);
        }
        if self.session.tick(elapsed_ms) > 0 {
            self.save_snapshot();
            self.events.push(SessionEvent::StateChanged);
        }
    }

    /// Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.session.toggle_pause();
        debug!(paused, "pause toggled");
        self.events.push(SessionEvent::StateChanged);
        paused
    }

    /// Returns the new sound setting.
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.settings_changed();
        self.settings.sound_enabled
    }

    /// Returns the new display mode (true for dark).
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.settings_changed();
        self.settings.dark_mode
    }

    /// Apply a session-level action. Cursor movement and flips need board
    /// context and are left to the caller; those return `Ok(false)`.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, ConfigurationError> {
        match action {
            GameAction::Pause => {
                self.toggle_pause();
            }
            GameAction::NewGame => self.restart()?,
            GameAction::ToggleSound => {
                self.toggle_sound();
            }
            GameAction::ToggleDarkMode => {
                self.toggle_dark_mode();
            }
            GameAction::NextTheme => self.cycle_theme()?,
            GameAction::NextDifficulty => self.cycle_difficulty()?,
            GameAction::CursorUp
            | GameAction::CursorDown
            | GameAction::CursorLeft
            | GameAction::CursorRight
            | GameAction::Flip => return Ok(false),
        }
        Ok(true)
    }

    /// Drain events queued since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_session(&self.session, &self.settings)
    }

    /// Refill an existing view (reuses its tile buffer).
    pub fn view_into(&self, out: &mut SessionView) {
        out.fill(&self.session, &self.settings);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mismatch_delay_ms(&self) -> u32 {
        self.mismatch_delay_ms
    }

    /// Time left before the pending mismatch resolves, if any.
    pub fn pending_resolution_ms(&self) -> Option<u32> {
        self.timer.remaining_ms()
    }

    fn complete(&mut self) {
        let elapsed_seconds = self.session.elapsed_seconds();
        let new_best = self.settings.record_completion(elapsed_seconds);
        if new_best {
            self.persistence.save_settings(&self.settings);
        }
        self.persistence.clear_snapshot();

        self.effects.celebration.trigger();
        if self.settings.sound_enabled {
            self.effects.audio.trigger();
        }

        info!(
            elapsed_seconds,
            turns = self.session.turn_count(),
            new_best,
            "session completed"
        );
        self.events.push(SessionEvent::Completed {
            elapsed_seconds,
            new_best,
        });
    }

    fn settings_changed(&mut self) {
        self.persistence.save_settings(&self.settings);
        debug!(settings = ?self.settings, "settings changed");
        self.events.push(SessionEvent::SettingsChanged(self.settings));
    }

    fn save_snapshot(&mut self) {
        if self.session.completed() {
            return;
        }
        self.session.snapshot_into(&mut self.snapshot_buf);
        self.persistence.save_snapshot(&self.snapshot_buf);
    }

    fn push_new_game(&mut self, restored: bool) {
        self.events.push(SessionEvent::NewGame {
            theme: self.session.theme(),
            difficulty: self.session.difficulty(),
            restored,
        });
    }
}

/// Saved session worth resuming, if any. Finished or invalid records are
/// dropped here and the caller deals a new game.
fn restore_saved(
    persistence: &SessionPersistence,
    generation: u32,
    ids: &mut TileIdAllocator,
) -> Option<Session> {
    let snapshot = persistence.load_snapshot()?;
    match Session::restore(&snapshot, generation, ids) {
        Ok(session) if session.completed() => {
            info!("saved session was already complete, dealing a new one");
            None
        }
        Ok(session) => Some(session),
        Err(e) => {
            warn!(error = %e, "saved session is invalid, dealing a new one");
            None
        }
    }
}
