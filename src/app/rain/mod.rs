use rand::Rng;
use ratatui::style::Color;

use crate::app::structs::{Cell, LitCell, Vec2};

pub mod colors;
pub mod cycler;
pub mod widget;

pub type Grid = Vec<Vec<Cell>>;

pub struct RainGrid {
    cells: Grid,
    rows: usize,
    columns: usize,
    snake_length: usize,
    spawn_chance: f64,
    gradient: Vec<Color>,
}

impl RainGrid {
    pub fn new(rows: usize, columns: usize, snake_length: usize, base: Color) -> Self {
        Self {
            cells: vec![vec![Cell::default(); columns]; rows],
            rows,
            columns,
            snake_length,
            spawn_chance: 0.05,
            gradient: colors::gradient(snake_length, base),
        }
    }

    pub fn with_spawn_chance(mut self, chance: f64) -> Self {
        self.spawn_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn snake_length(&self) -> usize {
        self.snake_length
    }

    pub fn gradient(&self) -> &[Color] {
        &self.gradient
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        self.cells[row][col]
            .get()
            .map(|shade| self.gradient[shade as usize])
    }

    /// Lit cells in row-major order.
    pub fn lit_cells(&self) -> Vec<LitCell> {
        let mut lit = Vec::new();
        for (x, row) in self.cells.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                if let Some(shade) = cell.get() {
                    lit.push(LitCell {
                        pos: Vec2 { x, y },
                        shade,
                    });
                }
            }
        }
        lit
    }

    pub fn lit_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| !cell.empty()).count())
            .sum()
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fall();
        self.spawn(rng);
    }

    /// Moves every lit cell one row down. Cells in the last row fall off.
    pub fn fall(&mut self) {
        for col in 0..self.columns {
            for row in (0..self.rows).rev() {
                let cell = self.cells[row][col];
                if cell.empty() {
                    continue;
                }
                self.cells[row][col].clear();
                if row + 1 < self.rows {
                    self.cells[row + 1][col].set(cell);
                }
            }
        }
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for col in 0..self.columns {
            if self.rows > 0 && self.cells[0][col].empty() && rng.gen_bool(self.spawn_chance) {
                self.spawn_drop(col);
            }
        }
    }

    /// Fills the top of `col` with the gradient, darkest shade on top.
    pub fn spawn_drop(&mut self, col: usize) {
        for (shade, row) in self.cells.iter_mut().take(self.snake_length).enumerate() {
            row[col] = Cell::new(shade as u16);
        }
    }

    /// Lit cells keep their shade, so only the gradient changes.
    pub fn recolor(&mut self, base: Color) {
        self.gradient = colors::gradient(self.snake_length, base);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::colors::{brightness, hex, parse_hex};
    use super::*;

    fn column(grid: &RainGrid, col: usize) -> Vec<Option<u16>> {
        (0..grid.rows()).map(|row| grid.cell(row, col).get()).collect()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = RainGrid::new(15, 20, 5, hex(0x8B0000));
        assert_eq!(grid.rows(), 15);
        assert_eq!(grid.columns(), 20);
        assert_eq!(grid.lit_count(), 0);
        assert_eq!(grid.gradient().len(), 5);
    }

    #[test]
    fn test_spawned_drop_after_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = RainGrid::new(15, 20, 5, hex(0x8B0000)).with_spawn_chance(0.0);
        grid.tick(&mut rng);
        grid.spawn_drop(3);

        for row in 0..5 {
            assert_eq!(grid.color_at(row, 3), Some(grid.gradient()[row]));
        }
        for row in 1..5 {
            let above = grid.color_at(row - 1, 3).unwrap();
            let here = grid.color_at(row, 3).unwrap();
            assert!(brightness(above) < brightness(here));
        }
        assert_eq!(grid.lit_count(), 5);
    }

    #[test]
    fn test_drop_shorter_grid() {
        let mut grid = RainGrid::new(3, 4, 5, hex(0x1E90FF));
        grid.spawn_drop(0);
        assert_eq!(column(&grid, 0), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(grid.lit_count(), 3);
    }

    #[test]
    fn test_fall_keeps_shade() {
        let mut grid = RainGrid::new(15, 20, 5, hex(0xFFD700));
        grid.spawn_drop(2);
        grid.fall();

        let col = column(&grid, 2);
        assert_eq!(col[0], None);
        assert_eq!(&col[1..6], &[Some(0), Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(grid.lit_count(), 5);
    }

    #[test]
    fn test_last_row_falls_off() {
        let mut grid = RainGrid::new(6, 1, 5, hex(0x32CD32));
        grid.spawn_drop(0);
        grid.fall();
        assert_eq!(grid.lit_count(), 5);
        grid.fall();
        assert_eq!(grid.lit_count(), 4);
        assert_eq!(grid.cell(5, 0).get(), Some(3));

        for _ in 0..4 {
            grid.fall();
        }
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn test_full_spawn_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut grid = RainGrid::new(15, 20, 5, hex(0xFF4500)).with_spawn_chance(1.0);
        grid.tick(&mut rng);
        for col in 0..20 {
            assert_eq!(
                &column(&grid, col)[..5],
                &[Some(0), Some(1), Some(2), Some(3), Some(4)]
            );
        }
        assert_eq!(grid.lit_count(), 100);
    }

    #[test]
    fn test_spawn_skips_lit_top() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut grid = RainGrid::new(15, 4, 5, hex(0x1E90FF)).with_spawn_chance(1.0);
        grid.spawn_drop(2);
        grid.cells[0][2] = Cell::new(3);
        let lit_column = column(&grid, 2);

        grid.spawn(&mut rng);

        assert_eq!(column(&grid, 2), lit_column);
        for col in [0, 1, 3] {
            assert_eq!(
                &column(&grid, col)[..6],
                &[Some(0), Some(1), Some(2), Some(3), Some(4), None]
            );
        }
    }

    #[test]
    fn test_default_spawn_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        // one row and a drop length of one, so every fall clears the grid
        let mut grid = RainGrid::new(1, 200, 1, hex(0xFFD700));
        let mut spawned = 0;
        for _ in 0..50 {
            grid.spawn(&mut rng);
            spawned += grid.lit_count();
            grid.fall();
        }
        // 10_000 trials at 5%, about 4.5 standard deviations either side
        assert!((400..=600).contains(&spawned), "spawned {spawned} drops");
    }

    #[test]
    fn test_lit_cells_stay_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut grid = RainGrid::new(15, 20, 5, hex(0x800080)).with_spawn_chance(0.3);
        for _ in 0..500 {
            grid.tick(&mut rng);
            for lit in grid.lit_cells() {
                assert!(lit.pos.x < grid.rows());
                assert!(lit.pos.y < grid.columns());
                assert!((lit.shade as usize) < grid.snake_length());
            }
        }
    }

    #[test]
    fn test_recolor_preserves_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut grid = RainGrid::new(15, 20, 5, parse_hex("#8B0000").unwrap())
            .with_spawn_chance(0.2);
        for _ in 0..12 {
            grid.tick(&mut rng);
        }
        let before = grid.lit_cells();
        assert!(!before.is_empty());

        let new_base = parse_hex("#1E90FF").unwrap();
        grid.recolor(new_base);

        assert_eq!(grid.lit_cells(), before);
        assert_eq!(grid.gradient(), colors::gradient(5, new_base).as_slice());
        for lit in &before {
            assert_eq!(
                grid.color_at(lit.pos.x, lit.pos.y),
                Some(grid.gradient()[lit.shade as usize])
            );
        }
    }
}
