// src/gui/components/controls.rs
//
// Contest list + scrape switches + Scrape button.

use eframe::egui;
use crate::{ config::options::CellPolicy, gui::{ actions, app::App } };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Contests:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.contests_text)
                .hint_text("e.g. 101, 102 103")
                .desired_width(320.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let scrape = &mut app.state.options.scrape;
        if ui.checkbox(&mut scrape.rank, "Rank").changed() {
            logf!("UI: rank → {}", scrape.rank);
        }

        let mut lenient = scrape.cell_policy == CellPolicy::Lenient;
        if ui.checkbox(&mut lenient, "Skip bad cells")
            .on_hover_text("Drop task cells without a status instead of failing the run")
            .changed()
        {
            scrape.cell_policy = if lenient { CellPolicy::Lenient } else { CellPolicy::Strict };
            logf!("UI: cell_policy → {:?}", scrape.cell_policy);
        }

        let clicked = ui.add_enabled(!app.running, egui::Button::new("Scrape")).clicked();
        if (clicked || submitted) && !app.running {
            actions::scrape(app, ui.ctx());
        }
    });
}
