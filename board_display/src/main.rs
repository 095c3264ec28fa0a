// main.rs - egui front-end for the bit-packed life board
// Drives the board through its public API and reads cell state for display.

use eframe::egui;
use egui::Color32;
use life_board::{Board, StepResult};
use std::time::{Duration, Instant};
use tracing::info;

mod ui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 960.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Life Board",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

pub struct LifeApp {
    board: Board,
    pub is_running: bool,
    pub stable: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    random_seed: u32,
}

impl Default for LifeApp {
    fn default() -> Self {
        let mut board = Board::new();
        board.init();

        Self {
            board,
            is_running: false,
            stable: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            random_seed: 0,
        }
    }
}

impl LifeApp {
    pub fn advance(&mut self) {
        match self.board.step() {
            StepResult::Stable => {
                self.is_running = false;
                self.stable = true;
                info!(generation = self.generation, "board reached a fixed point");
            }
            StepResult::Live(_) => {
                self.stable = false;
            }
        }
        self.generation += 1;
    }

    pub fn cell_alive(&self, x: usize, y: usize) -> bool {
        self.board.get_cell(x, y)
    }

    pub fn population(&self) -> usize {
        self.board.count()
    }

    pub fn clear_board(&mut self) {
        self.board.clear();
        self.generation = 0;
        self.stable = false;
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = life_board::PATTERNS.get(self.selected_pattern) {
            if let Err(err) = life_board::apply_pattern(&mut self.board, pattern) {
                tracing::warn!(pattern = pattern.name, %err, "pattern rejected");
                return;
            }
            info!(pattern = pattern.name, "pattern applied");
            self.generation = 0;
            self.stable = false;
        }
    }

    pub fn apply_random_pattern(&mut self) {
        self.random_seed = self.random_seed.wrapping_add(1);
        life_board::apply_random(&mut self.board, self.random_seed);
        info!(seed = self.random_seed, "random fill applied");
        self.generation = 0;
        self.stable = false;
    }

    /// Paints a cell alive. Only meaningful while paused; border clicks are
    /// ignored.
    pub fn paint_cell(&mut self, x: usize, y: usize) {
        if (1..=life_board::DIM).contains(&x) && (1..=life_board::DIM).contains(&y) {
            self.board.set_cell(x, y);
        }
    }
}
