use ratatui::style::Color;

/// Walks a fixed palette in a loop.
pub struct ColorCycler {
    palette: Vec<Color>,
    index: usize,
}

impl ColorCycler {
    /// `palette` must not be empty, config validation guarantees this.
    pub fn new(palette: Vec<Color>) -> Self {
        Self { palette, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    pub fn current(&self) -> Color {
        self.palette[self.index]
    }

    pub fn advance(&mut self) -> Color {
        self.index = (self.index + 1) % self.palette.len();
        self.current()
    }
}
