// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use stav_board::{ config::state::GuiState, gui, log };
use eframe::egui::ViewportBuilder;

fn main() {
    log::init_gui();

    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Stav Board")
            .with_inner_size([gs.window_w as f32, gs.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
