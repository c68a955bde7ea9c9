// simulation.rs - Driver: grid, random source and generation counter
//
// A generation that ends with every cell dead stays visible until the next
// advance, which starts from a fresh random grid.

use crate::config::Config;
use crate::engine::{self, StepReport};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::patterns::Pattern;
use log::info;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct Simulation {
    config: Config,
    grid: Grid,
    generation: u64,
    restarts: u64,
    restart_pending: bool,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl Simulation {
    /// Create a simulation, using the config's seed if it has one
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let seed = config.run.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        Self::with_seed(config, seed)
    }

    /// Create a simulation with a specific seed for reproducibility
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::random(config.world.size, config.world.density, &mut rng)?;
        info!(
            "seeded {0}x{0} grid (density {1}, seed {seed}): {2} alive",
            config.world.size, config.world.density, grid.alive_count(),
        );

        Ok(Self {
            config,
            grid,
            generation: 0,
            restarts: 0,
            restart_pending: false,
            rng,
            seed,
        })
    }

    /// Steps one generation. If the previous one ended extinct, the grid is
    /// replaced with a fresh random one first.
    pub fn advance(&mut self) -> StepReport {
        if self.restart_pending {
            self.repopulate();
            self.restarts += 1;
            info!("generation {}: restarted after extinction", self.generation + 1);
        }

        self.generation += 1;
        let report = engine::step_report(&mut self.grid, self.generation, &mut self.rng);
        if report.all_dead {
            info!("generation {}: extinction", self.generation);
            self.restart_pending = true;
        }
        report
    }

    /// Run simulation for the given number of generations
    pub fn run(&mut self, generations: u64) {
        self.run_with_callback(generations, |_, _| {});
    }

    /// Run simulation with a callback after every generation
    pub fn run_with_callback<F>(&mut self, generations: u64, mut callback: F)
    where
        F: FnMut(&Simulation, &StepReport),
    {
        for _ in 0..generations {
            let report = self.advance();
            callback(self, &report);
        }
    }

    /// Discards the grid for a fresh random one. The generation count carries on.
    pub fn restart(&mut self) {
        self.repopulate();
        info!("generation {}: grid restarted", self.generation);
    }

    /// Replaces the grid with `pattern` on a dead grid of the configured size.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<(), ConfigError> {
        let size = self.config.world.size;
        self.grid = pattern.place(size, size)?;
        self.restart_pending = false;
        info!("loaded pattern {} ({} alive)", pattern.name, self.grid.alive_count());
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of the last generation stepped (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Restarts caused by extinction so far.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// True when the last generation ended extinct and the next `advance`
    /// will start from a fresh grid.
    pub fn restart_pending(&self) -> bool {
        self.restart_pending
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn repopulate(&mut self) {
        // Density was validated in `with_seed` and the config is not mutable
        // afterwards.
        self.grid.repopulate(self.config.world.density, &mut self.rng);
        self.restart_pending = false;
    }
}
