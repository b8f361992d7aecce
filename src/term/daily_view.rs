//! DailyView: renders the daily-challenge completion grid.
//!
//! Pure like `GameView`; 30 day cells laid out seven per row, toggled days
//! highlighted.

use crate::store::Progress;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::game_view::Viewport;
use crate::types::DAILY_DAYS;

const DAYS_PER_ROW: u8 = 7;

pub struct DailyView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for DailyView {
    fn default() -> Self {
        Self {
            cell_w: 5,
            cell_h: 2,
        }
    }
}

impl DailyView {
    pub fn grid_size(&self) -> (u16, u16) {
        let rows = DAILY_DAYS.div_ceil(DAYS_PER_ROW) as u16;
        (
            DAYS_PER_ROW as u16 * self.cell_w,
            rows * self.cell_h,
        )
    }

    pub fn render(
        &self,
        progress: &Progress,
        cursor_day: u8,
        notice: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (grid_w, grid_h) = self.grid_size();
        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let start_y = (viewport.height.saturating_sub(grid_h) / 2).max(3);

        let title = CellStyle {
            fg: Rgb::new(250, 240, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let subtitle = CellStyle {
            fg: Rgb::new(170, 170, 170),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };

        fb.put_str_centered(0, viewport.width, start_y - 3, "DAILY CHALLENGES", title);
        fb.put_str_centered(
            0,
            viewport.width,
            start_y - 2,
            "space marks a day complete, x clears all",
            subtitle,
        );

        for day in 1..=DAILY_DAYS {
            self.draw_day(
                &mut fb,
                start_x,
                start_y,
                day,
                progress.is_day_done(day),
                day == cursor_day,
            );
        }

        if let Some(notice) = notice {
            let style = CellStyle {
                fg: Rgb::new(250, 210, 120),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            fb.put_str_centered(0, viewport.width, start_y + grid_h + 1, notice, style);
        }

        fb
    }

    fn draw_day(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        day: u8,
        done: bool,
        under_cursor: bool,
    ) {
        let idx = day - 1;
        let col = (idx % DAYS_PER_ROW) as u16;
        let row = (idx / DAYS_PER_ROW) as u16;
        let px = start_x + col * self.cell_w;
        let py = start_y + row * self.cell_h;

        let bg = if done {
            Rgb::new(90, 220, 160)
        } else if under_cursor {
            Rgb::new(70, 70, 110)
        } else {
            Rgb::new(48, 27, 47)
        };
        let fg = if done {
            Rgb::new(27, 10, 43)
        } else {
            Rgb::new(221, 221, 221)
        };
        let style = CellStyle {
            fg,
            bg,
            bold: done || under_cursor,
            dim: false,
        };

        // One column of padding between cells.
        fb.fill_rect(px, py, self.cell_w - 1, self.cell_h, ' ', style);
        fb.put_str_centered(px, self.cell_w - 1, py + self.cell_h / 2, &day.to_string(), style);
    }
}
