/// One grid cell. A lit cell carries its shade, the index of its color
/// within the active gradient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Copy)]
pub struct Cell {
    shade: Option<u16>,
}

impl Cell {
    pub fn new(shade: u16) -> Self {
        Self { shade: Some(shade) }
    }

    pub fn get(&self) -> Option<u16> {
        self.shade
    }

    pub fn set(&mut self, value: Self) {
        self.shade = value.shade;
    }

    pub fn clear(&mut self) {
        self.shade = None;
    }

    pub fn empty(&self) -> bool {
        self.shade.is_none()
    }
}

/// Grid coordinate, `x` is the row and `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vec2 {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitCell {
    pub pos: Vec2,
    pub shade: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lifecycle() {
        let mut cell = Cell::default();
        assert!(cell.empty());

        cell.set(Cell::new(3));
        assert_eq!(cell.get(), Some(3));
        assert!(!cell.empty());

        cell.clear();
        assert!(cell.empty());
        assert_eq!(cell.get(), None);
    }
}
