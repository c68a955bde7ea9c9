// patterns.rs - Named starting patterns

use crate::error::ConfigError;
use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],   // (row, col)
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Single",
        cells: &[(5, 5)],
    },
    Pattern {
        name: "Triangle",   // two neighbors each; steady until dead cells time out
        cells: &[(4, 4), (4, 5), (5, 5)],
    },
    Pattern {
        name: "Ring",       // the six neighbors of (5, 5)
        cells: &[(5, 4), (5, 6), (4, 5), (6, 5), (4, 4), (6, 6)],
    },
    Pattern {
        name: "Flower",
        cells: &[(5, 5), (5, 4), (5, 6), (4, 5), (6, 5), (4, 4), (6, 6)],
    },
    Pattern {
        name: "Bar",
        cells: &[(5, 2), (5, 3), (5, 4), (5, 5), (5, 6), (5, 7)],
    },
    Pattern {
        name: "Diagonal",
        cells: &[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (7, 7)],
    },
];

impl Pattern {
    /// Dead `rows x cols` grid with the pattern's cells alive. Cells that
    /// fall outside the grid are dropped.
    pub fn place(&self, rows: usize, cols: usize) -> Result<Grid, ConfigError> {
        let inside: Vec<(usize, usize)> = self
            .cells
            .iter()
            .copied()
            .filter(|&(row, col)| row < rows && col < cols)
            .collect();
        Grid::with_alive(rows, cols, &inside)
    }
}

/// Looks up a pattern by name, ignoring case.
pub fn find(name: &str) -> Result<&'static Pattern, ConfigError> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownPattern(name.to_string()))
}
