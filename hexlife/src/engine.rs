// engine.rs - One generation step: evaluate, apply, reseed

use crate::cell::DeathCause;
use crate::grid::Grid;
use crate::rule::{self, Transition, Verdict};
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

/// Every RESEED_INTERVAL-th generation one random dead cell is set alive.
pub const RESEED_INTERVAL: u64 = 4;

/// Verdicts for every cell of a grid, row-major, computed against one
/// unmodified snapshot. Only `evaluate` can build one and only `apply` can
/// consume it.
#[derive(Debug)]
pub struct PendingTransitions {
    rows: usize,
    cols: usize,
    verdicts: Vec<Verdict>,
}

impl PendingTransitions {
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn flip_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.transition.flips()).count()
    }
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// No cell alive after the apply phase (measured before reseeding).
    pub all_dead: bool,
    pub births: usize,
    pub underpopulation_deaths: usize,
    pub overpopulation_deaths: usize,
    /// Cell revived by the periodic reseed, if any.
    pub reseeded: Option<(usize, usize)>,
}

/// Evaluate phase: runs the rule for every cell against `grid` as it is.
pub fn evaluate(grid: &Grid) -> PendingTransitions {
    let verdicts = grid
        .cells()
        .iter()
        .map(|cell| rule::evaluate(cell, grid.count_living_neighbors(cell.row(), cell.col())))
        .collect();
    PendingTransitions { rows: grid.rows(), cols: grid.cols(), verdicts }
}

/// Apply phase: stores every verdict into its cell. Returns the report with
/// `all_dead` filled in; `reseeded` is left empty.
///
/// Panics if `pending` was evaluated on a grid of a different shape.
pub fn apply(grid: &mut Grid, pending: PendingTransitions) -> StepReport {
    assert_eq!(
        (pending.rows, pending.cols),
        (grid.rows(), grid.cols()),
        "pending transitions were evaluated on a different grid",
    );

    let mut report = StepReport::default();
    let mut any_alive = false;

    for (cell, verdict) in grid.cells_mut().iter_mut().zip(pending.verdicts) {
        cell.set_dead_streak(verdict.dead_streak);
        match verdict.transition {
            Transition::Stay => {}
            Transition::Die(cause) => {
                cell.set_alive(false);
                cell.set_dead_streak(0);
                cell.set_death_cause(Some(cause));
                match cause {
                    DeathCause::Underpopulation => report.underpopulation_deaths += 1,
                    DeathCause::Overpopulation  => report.overpopulation_deaths += 1,
                }
            }
            Transition::Revive => {
                cell.set_alive(true);
                cell.set_death_cause(None);
                report.births += 1;
            }
        }
        any_alive |= cell.is_alive();
    }

    report.all_dead = !any_alive;
    report
}

/// Periodic reseed: on generations divisible by RESEED_INTERVAL, revives one
/// dead cell chosen uniformly. The cell's dead streak is left as is.
pub fn reseed<R: Rng + ?Sized>(grid: &mut Grid, generation: u64, rng: &mut R) -> Option<(usize, usize)> {
    if generation % RESEED_INTERVAL != 0 {
        return None;
    }
    let dead: Vec<usize> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.is_alive())
        .map(|(i, _)| i)
        .collect();

    let &index = dead.choose(rng)?;
    let cell = &mut grid.cells_mut()[index];
    cell.set_alive(true);
    trace!("generation {generation}: reseeded ({}, {})", cell.row(), cell.col());
    Some((cell.row(), cell.col()))
}

/// Runs one full generation and reports what happened.
pub fn step_report<R: Rng + ?Sized>(grid: &mut Grid, generation: u64, rng: &mut R) -> StepReport {
    let pending = evaluate(grid);
    trace!("generation {generation}: {} cells flip", pending.flip_count());
    let mut report = apply(grid, pending);
    report.reseeded = reseed(grid, generation, rng);

    debug!(
        "generation {generation}: +{} births, -{} under, -{} over, all_dead={}",
        report.births, report.underpopulation_deaths, report.overpopulation_deaths, report.all_dead,
    );
    report
}

/// Runs one full generation. Returns true when no cell was alive after the
/// apply phase, ignoring any reseed that followed.
pub fn step<R: Rng + ?Sized>(grid: &mut Grid, generation: u64, rng: &mut R) -> bool {
    step_report(grid, generation, rng).all_dead
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.cells().iter().filter(|c| c.is_alive()).map(|c| (c.row(), c.col())).collect()
    }

    #[test]
    fn test_evaluate_leaves_grid_untouched() {
        let grid = Grid::with_alive(3, 3, &[(0, 0), (1, 1), (2, 1)]).unwrap();
        let before = grid.clone();
        let pending = evaluate(&grid);
        assert_eq!(grid, before);
        assert_eq!(pending.verdicts().len(), 9);
    }

    #[test]
    fn test_two_by_one_phase_separation() {
        // A alive at (0,0), B dead at (1,0); each is the other's only neighbor.
        let mut grid = Grid::with_alive(2, 1, &[(0, 0)]).unwrap();
        let pending = evaluate(&grid);
        assert_eq!(pending.verdicts()[0].transition, Transition::Die(DeathCause::Underpopulation));
        assert_eq!(pending.verdicts()[1].transition, Transition::Stay);

        let report = apply(&mut grid, pending);
        assert!(report.all_dead);
        assert_eq!(grid.get(1, 0).unwrap().dead_streak(), 1);
    }

    #[test]
    fn test_updates_are_simultaneous() {
        // (0,0) is born from three neighbors while (0,1) and (1,0) starve.
        // Updating in place row by row would let (0,1) and (1,0) see the
        // newborn and survive, and kill (1,1) instead.
        let mut grid = Grid::with_alive(2, 2, &[(0, 1), (1, 0), (1, 1)]).unwrap();
        let all_dead = step(&mut grid, 1, &mut rng());

        assert!(!all_dead);
        assert_eq!(alive_set(&grid), vec![(0, 0), (1, 1)]);
        assert_eq!(grid.get(0, 1).unwrap().death_cause(), Some(DeathCause::Underpopulation));
        assert_eq!(grid.get(1, 0).unwrap().death_cause(), Some(DeathCause::Underpopulation));
    }

    #[test]
    fn test_death_resets_streak() {
        let mut grid = Grid::with_alive(1, 1, &[(0, 0)]).unwrap();
        grid.cells_mut()[0].set_dead_streak(3);

        assert!(step(&mut grid, 1, &mut rng()));
        assert_eq!(grid.cells()[0].dead_streak(), 0);

        step(&mut grid, 2, &mut rng());
        assert_eq!(grid.cells()[0].dead_streak(), 1);
        step(&mut grid, 3, &mut rng());
        assert_eq!(grid.cells()[0].dead_streak(), 2);
    }

    #[test]
    fn test_revival_keeps_streak() {
        let mut grid = Grid::dead(1, 1).unwrap();
        grid.cells_mut()[0].set_dead_streak(5);

        assert!(!step(&mut grid, 1, &mut rng()));
        let cell = &grid.cells()[0];
        assert!(cell.is_alive());
        assert_eq!(cell.dead_streak(), 6);
        assert_eq!(cell.death_cause(), None);
    }

    #[test]
    fn test_reseed_on_multiple_of_four() {
        for generation in [4, 8, 100] {
            let mut grid = Grid::dead(5, 5).unwrap();
            let report = step_report(&mut grid, generation, &mut rng());
            assert!(report.all_dead);
            assert_eq!(grid.alive_count(), 1);
            let (row, col) = report.reseeded.unwrap();
            assert!(grid.get(row, col).unwrap().is_alive());
        }
    }

    #[test]
    fn test_no_reseed_off_interval() {
        for generation in [1, 2, 3, 5, 6, 7, 9] {
            let mut grid = Grid::dead(5, 5).unwrap();
            let report = step_report(&mut grid, generation, &mut rng());
            assert!(report.all_dead);
            assert_eq!(report.reseeded, None);
            assert_eq!(grid.alive_count(), 0);
        }
    }

    #[test]
    fn test_reseed_skips_full_grid() {
        let mut grid = Grid::with_alive(1, 2, &[(0, 0), (0, 1)]).unwrap();
        // Both cells have one neighbor and die, then one is reseeded.
        let report = step_report(&mut grid, 4, &mut rng());
        assert!(report.all_dead);
        assert_eq!(grid.alive_count(), 1);

        // Nothing dead to pick from.
        let mut full = Grid::with_alive(1, 1, &[(0, 0)]).unwrap();
        assert_eq!(reseed(&mut full, 4, &mut rng()), None);
    }

    #[test]
    fn test_reseed_picks_uniformly() {
        let dead = Grid::dead(3, 3).unwrap();
        let mut rng = rng();
        let mut picks = [[0u32; 3]; 3];

        for _ in 0..900 {
            let mut grid = dead.clone();
            let (row, col) = reseed(&mut grid, 4, &mut rng).unwrap();
            picks[row][col] += 1;
        }

        // 100 expected per cell; the band is about five standard deviations.
        for (row, counts) in picks.iter().enumerate() {
            for (col, &count) in counts.iter().enumerate() {
                assert!((55..=145).contains(&count), "({row}, {col}) picked {count} times");
            }
        }
    }

    #[test]
    fn test_reseed_depends_on_seed() {
        let dead = Grid::dead(4, 4).unwrap();
        let picks: Vec<(usize, usize)> = (0..16)
            .map(|seed| reseed(&mut dead.clone(), 4, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap())
            .collect();
        assert!(picks.iter().any(|&p| p != picks[0]), "every seed picked {:?}", picks[0]);
    }

    #[test]
    fn test_reseed_only_picks_dead_cells() {
        let mut rng = rng();
        for _ in 0..50 {
            let mut grid = Grid::with_alive(2, 2, &[(0, 0), (0, 1), (1, 1)]).unwrap();
            assert_eq!(reseed(&mut grid, 8, &mut rng), Some((1, 0)));
        }
    }

    #[test]
    #[should_panic(expected = "different grid")]
    fn test_apply_rejects_mismatched_grid() {
        let small = Grid::dead(2, 2).unwrap();
        let pending = evaluate(&small);
        let mut large = Grid::dead(3, 3).unwrap();
        apply(&mut large, pending);
    }

    #[test]
    fn test_reseed_leaves_streak_stale() {
        let mut grid = Grid::dead(1, 1).unwrap();
        grid.cells_mut()[0].set_dead_streak(2);
        step(&mut grid, 4, &mut rng());

        let cell = &grid.cells()[0];
        assert!(cell.is_alive());
        assert_eq!(cell.dead_streak(), 3);
    }

    #[test]
    fn test_report_counts() {
        let all: Vec<(usize, usize)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let mut grid = Grid::with_alive(3, 3, &all).unwrap();
        let report = step_report(&mut grid, 1, &mut rng());
        assert_eq!(report.births, 0);
        assert_eq!(report.underpopulation_deaths, 0);
        assert_eq!(report.overpopulation_deaths, 5);
        assert!(!report.all_dead);
    }
}
