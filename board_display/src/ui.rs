// ui.rs - Controls and grid painting for the life board viewer

use crate::LifeApp;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_board::{DIM, PATTERNS};
use std::time::{Duration, Instant};

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Life Board");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.advance();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_board();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
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

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
                if self.stable {
                    ui.colored_label(Color32::YELLOW, "stable");
                }
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells while paused to set them alive. The board stops on its own once no cell changes.");

            ui.separator();

            // Draw only the playable area; the dead border stays hidden.
            let box_size = 7.0;
            let spacing = 0.5;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * DIM as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for display_row in 0..DIM {
                for display_col in 0..DIM {
                    let x = start_pos.x + display_col as f32 * (box_size + spacing);
                    let y = start_pos.y + display_row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(
                        egui::pos2(x, y),
                        Vec2::splat(box_size),
                    );

                    // Map display coordinates to the bordered grid (1..=DIM)
                    let cell_color = if self.cell_alive(display_col + 1, display_row + 1) {
                        self.live_color
                    } else {
                        self.dead_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            // Handle painting (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let col = ((pos.x - start_pos.x) / (box_size + spacing)) as usize;
                    let row = ((pos.y - start_pos.y) / (box_size + spacing)) as usize;
                    if col < DIM && row < DIM {
                        self.paint_cell(col + 1, row + 1);
                    }
                }
            }

            ui.separator();

            // Statistics from the board itself
            let live_cells = self.population();
            let area = DIM * DIM;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", area - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / area as f32) * 100.0));
            });
        });

        // Keep the animation smooth while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
