// src/gui/actions/scrape.rs
use std::{ sync::mpsc, thread };

use eframe::egui;

use crate::{
    core::HttpFetcher,
    gui::{ app::App, progress::GuiProgress },
    scrape,
};

/// Start a background scrape; `App::update` picks up the result.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    // Align scrape options with the text field
    app.state.options.scrape.set_contests(&app.state.gui.contests_text);

    let opts = app.state.options.scrape.clone();
    if opts.contests.is_empty() {
        app.status("Enter at least one contest id");
        return;
    }

    logf!("Scrape: Begin contests={:?}", opts.contests);

    app.status("Scraping…");
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);

        // → This is where the scrape happens ←
        let res = HttpFetcher::new(&opts.base_url, opts.timeout_secs)
            .and_then(|fetcher| scrape::collect_leaderboard(&fetcher, &opts, Some(&mut prog)));

        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.pending = Some(rx);
    app.running = true;
}
