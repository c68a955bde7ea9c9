// grid.rs - Grid of hex cells and neighbor lookup

use crate::cell::Cell;
use crate::error::ConfigError;
use rand::Rng;

/// Neighbor offsets as (d_row, d_col). Six entries approximating hex
/// adjacency on a rectangular array with a column-parity offset.
/// Not symmetric; keep the table exactly as is.
pub const HEX_OFFSETS: [(isize, isize); 6] = [
    (0, -1), (0, 1),
    (-1, 0), (1, 0),
    (-1, -1), (1, 1),
];

/// Rectangular grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Square grid with each cell alive independently with probability `density`.
    pub fn random<R: Rng + ?Sized>(size: usize, density: f64, rng: &mut R) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity(density));
        }
        let mut grid = Self::dead(size, size)?;
        grid.repopulate(density, rng);
        Ok(grid)
    }

    /// Replaces every cell with a fresh one, alive with probability
    /// `density`. `density` must already be validated.
    pub(crate) fn repopulate<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::new(cell.row(), cell.col());
            if rng.gen_bool(density) {
                cell.set_alive(true);
            }
        }
    }

    /// Grid with every cell dead.
    pub fn dead(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidSize { rows, cols });
        }
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Dead grid with exactly the listed cells alive.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self, ConfigError> {
        let mut grid = Self::dead(rows, cols)?;
        for &(row, col) in alive {
            let index = grid.index(row, col).ok_or(ConfigError::CellOutOfBounds { row, col, rows, cols })?;
            grid.cells[index].set_alive(true);
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(Cell::is_alive)
    }

    /// Living cells among the in-bounds `HEX_OFFSETS` of (row, col).
    pub fn count_living_neighbors(&self, row: usize, col: usize) -> usize {
        HEX_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}
