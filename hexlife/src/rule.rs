// rule.rs - Per-cell transition rule
//
// Survival on 2 or 3 living neighbors, birth on exactly 3, and revival of any
// cell that has stayed dead for REVIVAL_STREAK generations.

use crate::cell::{Cell, DeathCause};

/// Dead streak at which a dead cell comes back regardless of neighbors.
pub const REVIVAL_STREAK: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Die(DeathCause),
    Revive,
}

impl Transition {
    pub fn flips(self) -> bool {
        !matches!(self, Transition::Stay)
    }
}

/// Outcome of evaluating one cell: what happens to it, and the dead streak
/// it carries into the apply phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub transition: Transition,
    pub dead_streak: u32,
}

/// Evaluates `cell` against its living neighbor count from the pre-step grid.
pub fn evaluate(cell: &Cell, living_neighbors: usize) -> Verdict {
    if cell.is_alive() {
        let transition = match living_neighbors {
            0 | 1 => Transition::Die(DeathCause::Underpopulation),
            2 | 3 => Transition::Stay,
            _     => Transition::Die(DeathCause::Overpopulation),
        };
        return Verdict { transition, dead_streak: cell.dead_streak() };
    }

    let dead_streak = cell.dead_streak() + 1;
    let transition = if living_neighbors == 3 || dead_streak == REVIVAL_STREAK {
        Transition::Revive
    } else {
        Transition::Stay
    };
    Verdict { transition, dead_streak }
}
