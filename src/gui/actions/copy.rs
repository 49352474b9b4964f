// src/gui/actions/copy.rs
use eframe::egui;
use crate::{ gui::app::App, file };

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(board) = &app.board else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    match file::render_leaderboard(board, export.format, export.include_headers) {
        Ok(txt) => {
            logf!("Copy: format={:?} entries={}", export.format, board.entries.len());
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
