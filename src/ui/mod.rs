//! UI shell: screen switching, cursor and selection handling, notices, and
//! the wiring between the reducer, the persistence store, and the feedback
//! sink. Everything here is testable without a terminal.

pub mod input;

pub use input::{handle_key_event, should_quit};

use crate::core::GameState;
use crate::feedback::FeedbackSink;
use crate::store::{Progress, ProgressStore};
use crate::term::{draw_tabs, DailyView, FrameBuffer, GameView, Hud, Viewport};
use crate::types::{
    MatchError, Pos, Screen, UiAction, DAILY_DAYS, GRID_COLS, GRID_ROWS, NOTICE_TTL_MS,
};

const ROW_LIMIT_NOTICE: &str = "row limit reached";
const CLEARED_NOTICE: &str = "progress cleared";

/// Application state above the reducer
pub struct App<S: FeedbackSink> {
    game: GameState,
    screen: Screen,
    cursor: Pos,
    selected: Option<Pos>,
    cursor_day: u8,
    notice: Option<(String, u32)>,
    progress: Progress,
    store: ProgressStore,
    sink: S,
    game_view: GameView,
    daily_view: DailyView,
}

impl<S: FeedbackSink> App<S> {
    pub fn new(game: GameState, store: ProgressStore, sink: S) -> Self {
        let progress = store.load();
        Self {
            game,
            screen: Screen::Game,
            cursor: Pos::new(0, 0),
            selected: None,
            cursor_day: 1,
            notice: None,
            progress,
            store,
            sink,
            game_view: GameView::default(),
            daily_view: DailyView::default(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn cursor_day(&self) -> u8 {
        self.cursor_day
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(text, _)| text.as_str())
    }

    /// Apply a mapped input action to whichever screen is active.
    pub fn handle_action(&mut self, action: UiAction) {
        match (self.screen, action) {
            (_, UiAction::SwitchScreen) => {
                self.screen = match self.screen {
                    Screen::Game => Screen::Daily,
                    Screen::Daily => Screen::Game,
                };
                self.notice = None;
            }

            (Screen::Game, UiAction::MoveUp) => self.move_cursor(-1, 0),
            (Screen::Game, UiAction::MoveDown) => self.move_cursor(1, 0),
            (Screen::Game, UiAction::MoveLeft) => self.move_cursor(0, -1),
            (Screen::Game, UiAction::MoveRight) => self.move_cursor(0, 1),
            (Screen::Game, UiAction::Activate) => self.activate_tile(),
            (Screen::Game, UiAction::AddRow) => {
                if !self.game.add_row() {
                    self.set_notice(ROW_LIMIT_NOTICE);
                }
            }
            (Screen::Game, UiAction::Restart) => {
                self.game.reset_all();
                self.selected = None;
                self.notice = None;
            }
            (Screen::Game, UiAction::ClearDaily) => {}

            (Screen::Daily, UiAction::MoveUp) => self.move_day(-(7i16)),
            (Screen::Daily, UiAction::MoveDown) => self.move_day(7),
            (Screen::Daily, UiAction::MoveLeft) => self.move_day(-1),
            (Screen::Daily, UiAction::MoveRight) => self.move_day(1),
            (Screen::Daily, UiAction::Activate) => {
                self.progress.toggle_day(self.cursor_day);
                self.persist();
            }
            (Screen::Daily, UiAction::ClearDaily) => {
                self.progress.clear_daily();
                self.persist();
                self.set_notice(CLEARED_NOTICE);
            }
            (Screen::Daily, UiAction::AddRow | UiAction::Restart) => {}
        }

        self.drain_effects();
    }

    /// Advance timers: notice TTL and the reducer's deferred level reinit.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some((_, ttl)) = &mut self.notice {
            *ttl = ttl.saturating_sub(elapsed_ms);
            if *ttl == 0 {
                self.notice = None;
            }
        }

        if self.game.tick(elapsed_ms) {
            // Board was rebuilt; any selection points at stale tiles.
            self.selected = None;
        }
    }

    /// Render the active screen.
    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = match self.screen {
            Screen::Game => {
                let snap = self.game.snapshot();
                let hud = Hud {
                    cursor: self.cursor,
                    selected: self.selected,
                    notice: self.notice(),
                    high_score: self.progress.high_score,
                };
                self.game_view.render(&snap, &hud, viewport)
            }
            Screen::Daily => {
                self.daily_view
                    .render(&self.progress, self.cursor_day, self.notice(), viewport)
            }
        };
        draw_tabs(&mut fb, self.screen);
        fb
    }

    fn move_cursor(&mut self, dr: i16, dc: i16) {
        let row = (self.cursor.row as i16 + dr).clamp(0, GRID_ROWS as i16 - 1);
        let col = (self.cursor.col as i16 + dc).clamp(0, GRID_COLS as i16 - 1);
        self.cursor = Pos::new(row as u8, col as u8);
    }

    fn move_day(&mut self, delta: i16) {
        let day = (self.cursor_day as i16 + delta).clamp(1, DAILY_DAYS as i16);
        self.cursor_day = day as u8;
    }

    /// Tap semantics: first tap selects a tile, tapping the selection again
    /// deselects, tapping a second tile attempts the match.
    fn activate_tile(&mut self) {
        let pos = self.cursor;

        let Some(selected) = self.selected else {
            // Empty cells cannot be selected.
            if self.game.grid().at(pos).unwrap_or(0) > 0 {
                self.selected = Some(pos);
            }
            return;
        };

        if selected == pos {
            self.selected = None;
            return;
        }

        match self.game.try_match(selected, pos) {
            Ok(outcome) => {
                self.selected = None;
                if outcome.leveled_up {
                    self.notice = None;
                }
                if self.progress.record_score(self.game.score()) {
                    self.persist();
                }
            }
            Err(err) => {
                self.selected = None;
                if err != MatchError::LevelTransition {
                    self.set_notice(err.notice());
                }
            }
        }
    }

    fn set_notice(&mut self, text: &str) {
        self.notice = Some((text.to_string(), NOTICE_TTL_MS));
    }

    fn persist(&mut self) {
        // Persistence is best effort; a failed write never interrupts play.
        let _ = self.store.save(&self.progress);
    }

    fn drain_effects(&mut self) {
        for cue in self.game.take_effects() {
            self.sink.play(cue);
        }
    }
}
