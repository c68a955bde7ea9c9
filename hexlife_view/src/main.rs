// main.rs - Hex grid viewer for hexlife
// Drawing lives in ui.rs; all simulation state lives in hexlife::Simulation.

use clap::Parser;
use eframe::egui;
use egui::Color32;
use hexlife::patterns::PATTERNS;
use hexlife::{Config, Simulation, StepReport};
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod ui;

#[derive(Parser)]
#[command(name = "hexlife_view")]
#[command(about = "Watch the hexlife automaton evolve")]
struct Args {
    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.seed.is_some() {
        config.run.seed = args.seed;
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.log_level.as_str())).init();

    let app = HexLifeApp::new(Simulation::new(config)?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hex Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

pub struct HexLifeApp {
    pub sim: Simulation,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub last_report: Option<StepReport>,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl HexLifeApp {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(500),
            last_report: None,
            live_color: Color32::from_rgb(0, 160, 0),
            dead_color: Color32::WHITE,
            selected_pattern: 0,
        }
    }

    /// One generation; the simulation restarts the grid itself on extinction.
    pub fn step_once(&mut self) {
        self.last_report = Some(self.sim.advance());
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            if let Err(err) = self.sim.load_pattern(pattern) {
                log::warn!("could not load pattern {}: {err}", pattern.name);
            }
            self.last_report = None;
        }
    }

    pub fn restart(&mut self) {
        self.sim.restart();
        self.last_report = None;
    }
}
