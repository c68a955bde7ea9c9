// main.rs - Headless driver for hexlife
// Runs the automaton for a number of generations, restarting the grid after
// extinction, and logs population as it goes.

use clap::{Parser, Subcommand};
use hexlife::patterns::{self, PATTERNS};
use hexlife::{Config, Simulation};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hexlife")]
#[command(version)]
#[command(about = "Life-like cellular automaton on a hex-offset grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Grid side length
        #[arg(long)]
        size: Option<usize>,

        /// Initial alive probability
        #[arg(long)]
        density: Option<f64>,

        /// Number of generations to simulate
        #[arg(short, long)]
        generations: Option<u64>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Start from a named pattern instead of a random grid
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "hexlife.yaml")]
        output: PathBuf,
    },

    /// List the built-in patterns
    Patterns,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            size,
            density,
            generations,
            seed,
            pattern,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)?,
                None => Config::default(),
            };
            if let Some(size) = size {
                config.world.size = size;
            }
            if let Some(density) = density {
                config.world.density = density;
            }
            if let Some(generations) = generations {
                config.run.generations = generations;
            }
            if seed.is_some() {
                config.run.seed = seed;
            }

            init_logging(&config.logging.log_level);
            run_simulation(config, pattern)
        }

        Commands::Init { output } => {
            init_logging("info");
            Config::default().save(&output)?;
            info!("wrote default configuration to {:?}", output);
            Ok(())
        }

        Commands::Patterns => {
            for pattern in PATTERNS {
                println!("{:<10} {} cells", pattern.name, pattern.cells.len());
            }
            Ok(())
        }
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn run_simulation(config: Config, pattern: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let generations = config.run.generations;
    let stats_interval = config.logging.stats_interval.max(1);

    let mut sim = Simulation::new(config)?;
    if let Some(name) = pattern {
        sim.load_pattern(patterns::find(&name)?)?;
    }

    info!("Starting simulation");
    info!("  Grid size: {0}x{0}", sim.config().world.size);
    info!("  Density: {}", sim.config().world.density);
    info!("  Generations: {}", generations);
    info!("  Seed: {}", sim.seed());

    sim.run_with_callback(generations, |sim, report| {
        if sim.generation() % stats_interval == 0 {
            info!(
                "generation {:>5}: {:>4} alive, {} restarts{}{}",
                sim.generation(),
                sim.grid().alive_count(),
                sim.restarts(),
                if report.reseeded.is_some() { ", reseeded" } else { "" },
                if report.all_dead { ", extinct" } else { "" },
            );
        }
    });

    info!(
        "finished after {} generations: {} alive, {} restarts",
        sim.generation(),
        sim.grid().alive_count(),
        sim.restarts(),
    );
    Ok(())
}
