use ratatui::prelude::Color;

pub const SUNLIGHT: [&str; 7] = [
    "#8B0000", "#FF4500", "#FFD700", "#32CD32", "#1E90FF", "#800080", "#8A2BE2",
];

pub const EMPTY_CELL: Color = Color::Rgb(24, 24, 27);

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

pub const fn hex(value: u32) -> Color {
    rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Parses `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex(input: &str) -> Option<Color> {
    let digits = input.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(hex)
}

pub fn brightness(col: Color) -> f32 {
    if let Color::Rgb(r, g, b) = col {
        (0.298912 * (r as f32 / 255.0)
            + 0.586611 * (g as f32 / 255.0)
            + 0.114478 * (b as f32 / 255.0))
            .clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Scales `base` linearly from black up to just below full intensity.
/// Entry `i` is `base * i / length`, so the result always has `length` entries.
pub fn gradient(length: usize, base: Color) -> Vec<Color> {
    let Color::Rgb(r, g, b) = base else {
        return vec![base; length];
    };
    let scale = |channel: u8, factor: f32| (channel as f32 * factor).round() as u8;
    (0..length)
        .map(|i| {
            let factor = i as f32 / length as f32;
            rgb(scale(r, factor), scale(g, factor), scale(b, factor))
        })
        .collect()
}

/// True when every step is strictly brighter than the one before it.
pub fn brightens(steps: &[Color]) -> bool {
    steps
        .windows(2)
        .all(|pair| brightness(pair[0]) < brightness(pair[1]))
}
