// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{ config::options::ExportFormat, gui::{ actions, app::App } };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut fmt_changed = false;
    let mut copy_clicked = false;
    let mut export_clicked = false;

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        ui.label("Format:");
        for (f, label) in [(ExportFormat::Csv, "CSV"), (ExportFormat::Tsv, "TSV"), (ExportFormat::Json, "JSON")] {
            fmt_changed |= ui.selectable_value(&mut export.format, f, label).changed();
        }

        let headers_on = export.format != ExportFormat::Json;
        if ui.add_enabled(headers_on, egui::Checkbox::new(&mut export.include_headers, "Include headers")).changed() {
            logf!("UI: include_headers → {}", export.include_headers);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        let have_data = app.board.is_some();
        copy_clicked = ui.add_enabled(have_data, egui::Button::new("Copy")).clicked();
        export_clicked = ui.add_enabled(have_data, egui::Button::new("Export")).clicked();
    });

    if fmt_changed {
        logf!("UI: Export format → {:?}", app.state.options.export.format);
        app.refresh_out_path_text();
    }
    if copy_clicked {
        actions::copy(app, ui.ctx());
    }
    if export_clicked {
        actions::export(app);
    }
}
