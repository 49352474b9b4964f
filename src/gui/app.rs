// src/gui/app.rs
use std::{
    error::Error,
    sync::{ mpsc::{ Receiver, TryRecvError }, Arc, Mutex },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{ consts::DEFAULT_OUT_DIR, state::AppState },
    error::Result,
    file,
    model::Leaderboard,
    table::TableData,
};

pub fn run(options: eframe::NativeOptions) -> std::result::Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Stav Board",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_dirty: bool,

    // last successful scrape + its display rows
    pub board: Option<Leaderboard>,
    pub table: TableData,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<Result<Leaderboard>>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: out path {}", state.gui.out_path_text);

        Self {
            state,
            out_path_dirty: false,
            board: None,
            table: TableData::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Push the typed path into ExportOptions if the user edited it.
    pub fn sync_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.state.gui.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }

    /// Show the path the export button would write to.
    pub fn refresh_out_path_text(&mut self) {
        if !self.out_path_dirty {
            self.state.gui.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }

    /// Pick up a finished background scrape, if any.
    fn poll_scrape(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.pending else { return };

        match rx.try_recv() {
            Ok(Ok(board)) => {
                logf!("Scrape: OK contests={} entries={}", board.contests.len(), board.entries.len());
                self.status(format!(
                    "Ready: {} contest(s), {} participant(s)",
                    board.contests.len(),
                    board.entries.len()
                ));
                self.install_board(board);
                self.finish_scrape();
            }
            Ok(Err(e)) => {
                loge!("Scrape: Error: {}", e);
                self.status(format!("Error: {e}"));
                self.finish_scrape();
            }
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Err(TryRecvError::Disconnected) => {
                loge!("Scrape: worker thread ended without a result");
                self.status("Error: scrape thread stopped");
                self.finish_scrape();
            }
        }
    }

    fn install_board(&mut self, board: Leaderboard) {
        self.table = TableData::from_leaderboard(&board);

        if !self.out_path_dirty {
            let stem = file::suggest_stem(&self.state.options.scrape.contests);
            self.state.options.export.set_path(&format!("{DEFAULT_OUT_DIR}/{stem}"));
            self.refresh_out_path_text();
        }
        self.board = Some(board);
    }

    fn finish_scrape(&mut self) {
        self.running = false;
        self.pending = None;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_scrape(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running { ui.add(egui::Spinner::new()); }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::controls::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
