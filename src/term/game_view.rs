//! GameView: maps a `GameSnapshot` plus HUD state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    max_rows_for_level, Pos, GRID_COLS, GRID_ROWS, MATCHES_PER_LEVEL, MAX_ROW_ADDS,
};

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

/// Transient presentation state owned by the UI shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub cursor: Pos,
    pub selected: Option<Pos>,
    pub notice: Option<&'a str>,
    pub high_score: u32,
}

/// Renders the board, side panel, and overlays.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 tiles read well for one- and two-digit pips.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Board frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_COLS as u16) * self.cell_w + 2,
            (GRID_ROWS as u16) * self.cell_h + 2,
        )
    }

    pub fn render(&self, snap: &GameSnapshot, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = (viewport.height.saturating_sub(frame_h) / 2).max(1);

        let board_bg = CellStyle::plain(Rgb::new(80, 80, 90), Rgb::new(25, 20, 35));
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            board_bg,
        );
        draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Tiles.
        for r in 0..GRID_ROWS {
            for c in 0..GRID_COLS {
                let pos = Pos::new(r, c);
                let pip = snap.grid[r as usize][c as usize];
                let selected = hud.selected == Some(pos);
                let under_cursor = hud.cursor == pos;
                self.draw_tile(&mut fb, start_x, start_y, pos, pip, selected, under_cursor);
            }
        }

        self.draw_side_panel(&mut fb, snap, hud, viewport, start_x, start_y, frame_w);

        // Notice line under the board.
        if let Some(notice) = hud.notice {
            let style = CellStyle {
                fg: Rgb::new(250, 210, 120),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            fb.put_str_centered(start_x, frame_w, start_y + frame_h, notice, style);
        }

        // Level-up overlay during the transition window.
        if snap.in_transition {
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(120, 40, 160),
                bold: true,
                dim: false,
            };
            let mid_y = start_y + frame_h / 2;
            fb.put_str_centered(start_x, frame_w, mid_y, " LEVEL UP! ", style);
        }

        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Pos,
        pip: u8,
        selected: bool,
        under_cursor: bool,
    ) {
        let px = start_x + 1 + (pos.col as u16) * self.cell_w;
        let py = start_y + 1 + (pos.row as u16) * self.cell_h;

        let bg = if selected {
            Rgb::new(200, 160, 40)
        } else if under_cursor {
            Rgb::new(70, 70, 110)
        } else if pip > 0 {
            Rgb::new(48, 27, 47)
        } else {
            Rgb::new(25, 20, 35)
        };

        let fg = if selected {
            Rgb::new(20, 20, 20)
        } else {
            pip_color(pip)
        };

        let style = CellStyle {
            fg,
            bg,
            bold: pip > 0,
            dim: pip == 0 && !under_cursor,
        };

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        if pip > 0 {
            let text = pip.to_string();
            fb.put_str_centered(px, self.cell_w, py + self.cell_h / 2, &text, style);
        } else if under_cursor {
            fb.put_str_centered(px, self.cell_w, py + self.cell_h / 2, "·", style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let muted = CellStyle {
            dim: true,
            ..value
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &hud.high_score.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.level.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STREAK", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            &format!("{}/{}", snap.match_streak, MATCHES_PER_LEVEL),
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ROWS", label);
        y = y.saturating_add(1);
        let rows_style = if snap.can_add_row { value } else { muted };
        fb.put_str(
            panel_x,
            y,
            &format!(
                "{}/{} (max {})",
                snap.rows_added,
                MAX_ROW_ADDS,
                max_rows_for_level(snap.level)
            ),
            rows_style,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TREND", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &sparkline(&snap.trend, panel_w as usize), value);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Per-pip foreground color; repeats above nine so level 2-3 pips stay legible.
fn pip_color(pip: u8) -> Rgb {
    match pip % 9 {
        1 => Rgb::new(80, 220, 220),
        2 => Rgb::new(240, 220, 80),
        3 => Rgb::new(200, 120, 220),
        4 => Rgb::new(100, 220, 120),
        5 => Rgb::new(220, 80, 80),
        6 => Rgb::new(80, 120, 220),
        7 => Rgb::new(255, 165, 0),
        8 => Rgb::new(160, 220, 80),
        _ => Rgb::new(220, 160, 200),
    }
}

/// Map score history to block glyphs scaled against the current maximum.
pub fn sparkline(values: &[u32], max_width: usize) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let tail = if values.len() > max_width {
        &values[values.len() - max_width..]
    } else {
        values
    };
    let max = tail.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return tail.iter().map(|_| BARS[0]).collect();
    }

    tail.iter()
        .map(|&v| {
            let idx = ((v as u64 * (BARS.len() as u64 - 1)) / max as u64) as usize;
            BARS[idx]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_scales_to_max() {
        assert_eq!(sparkline(&[0, 0, 0], 10), "▁▁▁");
        let line = sparkline(&[0, 5, 10], 10);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[0], '▁');
        assert_eq!(chars[2], '█');
    }

    #[test]
    fn test_sparkline_truncates_to_width() {
        let values: Vec<u32> = (0..30).collect();
        assert_eq!(sparkline(&values, 8).chars().count(), 8);
    }

    #[test]
    fn test_frame_size_matches_tile_metrics() {
        let view = GameView::default();
        assert_eq!(view.frame_size(), (26, 14));
        let small = GameView::new(2, 1);
        assert_eq!(small.frame_size(), (14, 8));
    }
}
