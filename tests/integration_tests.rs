//! End-to-end tests driving the app shell through input actions

use tui_tenpair::core::{GameState, Grid};
use tui_tenpair::feedback::NullFeedback;
use tui_tenpair::store::ProgressStore;
use tui_tenpair::term::Viewport;
use tui_tenpair::types::{
    Screen, UiAction, LEVEL_RESET_DELAY_MS, MATCHES_PER_LEVEL, NOTICE_TTL_MS,
};
use tui_tenpair::ui::App;

fn seeded_app(store: &ProgressStore) -> App<NullFeedback> {
    let mut game = GameState::new(1);
    *game.grid_mut() = Grid::from_rows([[5; 6]; 6]);
    App::new(game, store.clone(), NullFeedback)
}

/// Move the cursor (always on row 0 here) to the given column.
fn move_to_col(app: &mut App<NullFeedback>, col: u8) {
    for _ in 0..6 {
        app.handle_action(UiAction::MoveLeft);
    }
    for _ in 0..col {
        app.handle_action(UiAction::MoveRight);
    }
}

fn match_pair(app: &mut App<NullFeedback>, c1: u8, c2: u8) {
    move_to_col(app, c1);
    app.handle_action(UiAction::Activate);
    move_to_col(app, c2);
    app.handle_action(UiAction::Activate);
}

#[test]
fn test_full_level_up_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));
    let mut app = seeded_app(&store);

    for i in 0..MATCHES_PER_LEVEL {
        let col = (i % 3 * 2) as u8;
        match_pair(&mut app, col, col + 1);
    }

    // Sixth match triggered the transition; score holds until the reinit.
    assert_eq!(app.game().level(), 2);
    assert_eq!(app.game().score(), 60);
    assert!(app.game().in_transition());

    // The overlay is visible while the countdown runs.
    let fb = app.render(Viewport::new(80, 24));
    let text: String = (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .map(|(x, y)| fb.get(x, y).unwrap().ch)
        .collect();
    assert!(text.contains("LEVEL UP!"));

    app.tick(LEVEL_RESET_DELAY_MS);

    assert!(!app.game().in_transition());
    assert_eq!(app.game().level(), 2);
    assert_eq!(app.game().score(), 0);
    assert_eq!(app.selected(), None);
    assert_eq!(app.game().grid().filled_rows(), 3);

    // The run's peak score survives as the persisted best.
    assert_eq!(app.progress().high_score, 60);
    assert_eq!(store.load().high_score, 60);
}

#[test]
fn test_input_rejected_during_transition() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));
    let mut app = seeded_app(&store);

    for i in 0..MATCHES_PER_LEVEL {
        let col = (i % 3 * 2) as u8;
        match_pair(&mut app, col, col + 1);
    }
    assert!(app.game().in_transition());

    // Match attempts and row adds are ignored until the board rebuilds;
    // the rejection is silent (no error notice).
    match_pair(&mut app, 0, 1);
    assert_eq!(app.game().score(), 60);
    assert_eq!(app.notice(), None);

    app.handle_action(UiAction::AddRow);
    assert_eq!(app.game().rows_added(), 0);
}

#[test]
fn test_restart_mid_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));
    let mut app = seeded_app(&store);

    match_pair(&mut app, 0, 1);
    assert_eq!(app.game().score(), 10);

    app.handle_action(UiAction::Restart);
    assert_eq!(app.game().score(), 0);
    assert_eq!(app.game().level(), 1);
    assert_eq!(app.selected(), None);
    // The persisted best is untouched by a restart.
    assert_eq!(app.progress().high_score, 10);
}

#[test]
fn test_row_limit_notice_expires() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));
    // A full board leaves no headroom for manual rows at level 1.
    let mut app = seeded_app(&store);

    app.handle_action(UiAction::AddRow);
    assert_eq!(app.notice(), Some("row limit reached"));

    app.tick(NOTICE_TTL_MS);
    assert_eq!(app.notice(), None);
}

#[test]
fn test_daily_progress_survives_restart_of_app() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));

    {
        let mut app = seeded_app(&store);
        app.handle_action(UiAction::SwitchScreen);
        assert_eq!(app.screen(), Screen::Daily);
        app.handle_action(UiAction::Activate);
        app.handle_action(UiAction::MoveDown);
        app.handle_action(UiAction::Activate);
    }

    // A fresh app instance over the same store sees the toggles.
    let app = seeded_app(&store);
    assert!(app.progress().is_day_done(1));
    assert!(app.progress().is_day_done(8));
    assert!(!app.progress().is_day_done(2));
}

#[test]
fn test_screen_switch_preserves_game_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgressStore::at(dir.path().join("progress.json"));
    let mut app = seeded_app(&store);

    match_pair(&mut app, 0, 1);
    let score = app.game().score();

    app.handle_action(UiAction::SwitchScreen);
    app.handle_action(UiAction::SwitchScreen);
    assert_eq!(app.screen(), Screen::Game);
    assert_eq!(app.game().score(), score);
}
