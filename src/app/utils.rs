use ratatui::{
    Frame,
    layout::{Rect, Size},
    style::Color,
};

use super::math::{Interpolation, inverse_lerp};

/// A `size` rect centered inside `area`, clipped to it.
pub fn centered(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn dim(color: Color, progress: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * progress) as u8,
            (g as f32 * progress) as u8,
            (b as f32 * progress) as u8,
        ),
        other => other,
    }
}

/// Scales every RGB color on screen towards black, fully dark at `time == 0`.
pub fn fade_in(frame: &mut Frame<'_>, duration: f32, time: f32) {
    let area = frame.area();
    let progress = Interpolation::Sine.apply(inverse_lerp(0.0..=duration, time));
    if progress >= 1.0 {
        return;
    }
    let buf = frame.buffer_mut();
    for row in area.rows() {
        for col in row.columns() {
            let cell = &mut buf[(col.x, col.y)];
            cell.fg = dim(cell.fg, progress);
            cell.bg = dim(cell.bg, progress);
        }
    }
}
