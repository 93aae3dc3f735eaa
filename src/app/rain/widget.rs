use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    widgets::Widget,
};

use super::{RainGrid, colors::EMPTY_CELL};

const CELL_WIDTH: u16 = 2;

/// Draws a [`RainGrid`] as a block of colored two-column cells, centered in the area.
pub struct RainView<'a> {
    grid: &'a RainGrid,
}

impl<'a> RainView<'a> {
    pub fn new(grid: &'a RainGrid) -> Self {
        Self { grid }
    }

    /// Horizontal and vertical distance between cell origins for the given area.
    fn steps(&self, area: Rect) -> (u16, u16) {
        let columns = self.grid.columns() as u16;
        let rows = self.grid.rows() as u16;
        let step_x = if columns * (CELL_WIDTH + 1) <= area.width + 1 {
            CELL_WIDTH + 1
        } else {
            CELL_WIDTH
        };
        let step_y = if rows * 2 <= area.height + 1 { 2 } else { 1 };
        (step_x, step_y)
    }

    /// Space the grid takes up when drawn with the roomiest spacing.
    pub fn preferred_size(grid: &RainGrid) -> Size {
        let columns = grid.columns() as u16;
        let rows = grid.rows() as u16;
        Size::new(
            (columns * (CELL_WIDTH + 1)).saturating_sub(1),
            (rows * 2).saturating_sub(1),
        )
    }
}

impl Widget for RainView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (step_x, step_y) = self.steps(area);
        let columns = self.grid.columns() as u16;
        let rows = self.grid.rows() as u16;
        let used_width = (columns * step_x).saturating_sub(step_x - CELL_WIDTH);
        let used_height = (rows * step_y).saturating_sub(step_y - 1);
        let origin_x = area.x + area.width.saturating_sub(used_width) / 2;
        let origin_y = area.y + area.height.saturating_sub(used_height) / 2;

        for row in 0..rows {
            let y = origin_y + row * step_y;
            if y >= area.bottom() {
                break;
            }
            for col in 0..columns {
                let x = origin_x + col * step_x;
                let color: Color = self
                    .grid
                    .color_at(row as usize, col as usize)
                    .unwrap_or(EMPTY_CELL);
                for dx in 0..CELL_WIDTH {
                    if x + dx >= area.right() {
                        break;
                    }
                    buf[(x + dx, y)]
                        .set_symbol(" ")
                        .set_style(Style::default().bg(color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::rain::colors::hex;

    #[test]
    fn test_preferred_size() {
        let grid = RainGrid::new(15, 20, 5, hex(0x8B0000));
        assert_eq!(RainView::preferred_size(&grid), Size::new(59, 29));
    }

    #[test]
    fn test_render_lit_and_empty() {
        let mut grid = RainGrid::new(3, 2, 2, hex(0xFF4500));
        grid.spawn_drop(1);
        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        RainView::new(&grid).render(area, &mut buf);

        // Column 1 starts at x = 3, rows are two lines apart.
        assert_eq!(buf[(0, 0)].bg, EMPTY_CELL);
        assert_eq!(buf[(3, 0)].bg, grid.gradient()[0]);
        assert_eq!(buf[(4, 2)].bg, grid.gradient()[1]);
        assert_eq!(buf[(3, 4)].bg, EMPTY_CELL);
        // Gaps stay untouched.
        assert_eq!(buf[(2, 0)].bg, Color::Reset);
        assert_eq!(buf[(0, 1)].bg, Color::Reset);
    }

    #[test]
    fn test_render_compact_when_small() {
        let grid = RainGrid::new(4, 4, 2, hex(0xFF4500));
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        RainView::new(&grid).render(area, &mut buf);

        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(buf[(x, y)].bg, EMPTY_CELL);
            }
        }
    }
}
