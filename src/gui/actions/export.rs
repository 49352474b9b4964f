// src/gui/actions/export.rs
use crate::{ gui::app::App, file };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.sync_out_path();

    let status_msg = match &app.board {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(board) => {
            let export = &app.state.options.export;
            logf!(
                "Export: Begin format={:?} entries={} path={}",
                export.format,
                board.entries.len(),
                export.out_path().display()
            );
            match file::export_leaderboard(export, board) {
                Ok(path) => format!("Exported {}", path.display()),
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the board borrow is gone
    app.status(status_msg);
}
