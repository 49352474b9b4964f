// src/gui/components/data_table.rs
//
// Draws the leaderboard. Purely a view over `app.table`.

use eframe::egui::{ self, Align, Color32, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };

use crate::gui::app::App;
use crate::table::LEAD_COLS;

const AC_COLOR: Color32 = Color32::from_rgb(0x3C, 0xB3, 0x71);
const WA_COLOR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);
const NS_COLOR: Color32 = Color32::GRAY;

fn class_color(class: &str) -> Color32 {
    match class {
        "AC" => AC_COLOR,
        "WA" => WA_COLOR,
        _ => NS_COLOR,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = &app.table;
    let cols = table.ncols();
    if cols == 0 {
        ui.weak("No data yet. Enter contest ids and press Scrape.");
        return;
    }

    // Contest legend: which letters belong to which contest
    ui.horizontal_wrapped(|ui| {
        for g in &table.groups {
            ui.label(RichText::new(format!("[{}] {}", g.len, g.title)).small());
        }
    });

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("board_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("board", cols));

            for ci in 0..cols {
                let w = match ci {
                    0 => 36.0,
                    1 => 180.0,
                    c if c >= LEAD_COLS && table.group_of(c).is_some() => 34.0,
                    _ => 64.0,
                };
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(22.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = table.headers.get(ci).cloned().unwrap_or_default();
                            let resp = ui.centered_and_justified(|ui| {
                                ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false))
                            }).inner;
                            if let Some(g) = table.group_of(ci) {
                                resp.on_hover_text(g.title.as_str());
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.nrows(), |mut row| {
                        let Some(cells) = table.rows.get(row.index()) else { return };
                        for (ci, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(&cell.text);
                                if let Some(class) = cell.class {
                                    rt = rt.color(class_color(class));
                                }
                                if ci == 1 {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                } else {
                                    ui.centered_and_justified(|ui| { ui.label(rt); });
                                }
                            });
                        }
                    });
                });
        });
}
