// ui.rs - egui front end: controls plus one hexagon per cell

use crate::HexLifeApp;
use eframe::egui;
use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};
use hexlife::layout;
use hexlife::patterns::PATTERNS;
use std::time::{Duration, Instant};

impl eframe::App for HexLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-advance if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step_once();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Generation {}", self.sim.generation()));
            if self.sim.restart_pending() {
                ui.label("Extinct: the next step starts from a fresh grid.");
            }

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.step_once();
                }

                if ui.button("🎲 Restart").clicked() {
                    self.restart();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            draw_grid(ui, self);

            ui.separator();

            let grid = self.sim.grid();
            let total = grid.cells().len();
            let live_cells = grid.alive_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
                ui.label(format!("Restarts: {}", self.sim.restarts()));
            });

            if let Some(report) = &self.last_report {
                ui.label(format!(
                    "Last step: +{} born, -{} starved, -{} crowded{}",
                    report.births,
                    report.underpopulation_deaths,
                    report.overpopulation_deaths,
                    if report.reseeded.is_some() { ", 1 reseeded" } else { "" },
                ));
            }
        });

        // Keep repainting while running
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

/// Fits the grid's layout bounds into the remaining space and draws every
/// cell as a hexagon.
fn draw_grid(ui: &mut egui::Ui, app: &HexLifeApp) {
    let grid = app.sim.grid();
    let ((min_x, min_y), (max_x, max_y)) = layout::bounds(grid.rows(), grid.cols());
    let (width, height) = (max_x - min_x, max_y - min_y);

    let available = ui.available_size() - Vec2::new(0.0, 60.0);   // leave room for stats
    let scale = (available.x / width).min(available.y / height).max(1.0);
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height) * scale, egui::Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(Rect::from_min_size(origin, response.rect.size()), 0.0, Color32::from_gray(230));

    let to_screen = |(x, y): (f32, f32)| Pos2::new(origin.x + (x - min_x) * scale, origin.y + (y - min_y) * scale);
    let stroke = Stroke::new(1.0, Color32::BLACK);

    for cell in grid.cells() {
        let points: Vec<Pos2> = layout::corners(cell.row(), cell.col())
            .into_iter()
            .map(to_screen)
            .collect();
        let fill = if cell.is_alive() { app.live_color } else { app.dead_color };
        painter.add(Shape::convex_polygon(points, fill, stroke));
    }
}
