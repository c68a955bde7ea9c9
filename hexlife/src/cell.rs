// cell.rs - Per-position cell state

/// Why a living cell died on its last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    Underpopulation,  // fewer than 2 living neighbors
    Overpopulation,   // more than 3 living neighbors
}

/// One hex cell. Coordinates are fixed at creation; the rest is mutated in
/// place by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
    dead_streak: u32,
    death_cause: Option<DeathCause>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: false,
            dead_streak: 0,
            death_cause: None,
        }
    }

    pub fn row(&self) -> usize { self.row }
    pub fn col(&self) -> usize { self.col }
    pub fn is_alive(&self) -> bool { self.alive }

    /// Consecutive generations this cell has been evaluated while dead.
    ///
    /// Zeroed when a living cell dies. A cell revived by the rule or by a
    /// reseed keeps whatever value it had until its next death.
    pub fn dead_streak(&self) -> u32 { self.dead_streak }

    /// Cause of the most recent death; `None` after a rule revival.
    /// Meaningless while the cell is alive.
    pub fn death_cause(&self) -> Option<DeathCause> { self.death_cause }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub(crate) fn set_dead_streak(&mut self, streak: u32) {
        self.dead_streak = streak;
    }

    pub(crate) fn set_death_cause(&mut self, cause: Option<DeathCause>) {
        self.death_cause = cause;
    }
}
