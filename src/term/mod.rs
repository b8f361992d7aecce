//! Terminal rendering: framebuffer, diff renderer, and the two screen views.

pub mod daily_view;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use daily_view::DailyView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::TerminalRenderer;

use crate::types::Screen;

/// Draw the screen switcher on the top row.
pub fn draw_tabs(fb: &mut FrameBuffer, active: Screen) {
    let on = CellStyle {
        fg: Rgb::new(20, 20, 20),
        bg: Rgb::new(200, 160, 240),
        bold: true,
        dim: false,
    };
    let off = CellStyle {
        fg: Rgb::new(170, 170, 170),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: true,
    };

    let (game_style, daily_style) = match active {
        Screen::Game => (on, off),
        Screen::Daily => (off, on),
    };

    fb.put_str(1, 0, " GAME ", game_style);
    fb.put_str(8, 0, " DAILY ", daily_style);
    fb.put_str(16, 0, "(tab switches)", off);
}
