use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, palette::tailwind},
    widgets::{Paragraph, Widget},
};

use crate::app::rain::colors::hex;

const FACE: Color = hex(0xFF9800);
const LIT: Color = hex(0xFFB74D);
const SUNK: Color = hex(0xE68A00);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    /// Hovered
    Selected,
    /// Held down
    Active,
}

/// Face, upper edge and lower edge colors. A held button swaps its edges
/// so it looks pushed in.
struct Shades {
    face: Color,
    upper: Color,
    lower: Color,
}

impl ButtonState {
    fn shades(self) -> Shades {
        match self {
            Self::Normal => Shades {
                face: FACE,
                upper: LIT,
                lower: SUNK,
            },
            Self::Selected => Shades {
                face: LIT,
                upper: LIT,
                lower: SUNK,
            },
            Self::Active => Shades {
                face: SUNK,
                upper: SUNK,
                lower: LIT,
            },
        }
    }
}

/// The start/stop button under the grid.
pub struct ToggleButton<'a> {
    label: &'a str,
    state: ButtonState,
}

impl<'a> ToggleButton<'a> {
    pub fn new(label: &'a str, state: ButtonState) -> Self {
        Self { label, state }
    }
}

impl Widget for ToggleButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let shades = self.state.shades();
        buf.set_style(area, Style::new().bg(shades.face).fg(tailwind::ORANGE.c50));

        if area.height >= 3 {
            for x in area.left()..area.right() {
                buf[(x, area.top())].set_symbol("▀").set_fg(shades.upper);
                buf[(x, area.bottom() - 1)]
                    .set_symbol("▄")
                    .set_fg(shades.lower);
            }
        }

        let label_row = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: area.height.min(1),
            ..area
        };
        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .render(label_row, buf);
    }
}
