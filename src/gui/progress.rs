// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Writes scrape progress into the shared status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Fetching {} contest(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, contest_id: &str, title: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} '{}' ({}/{})", contest_id, title, self.done, self.total));
    }
    fn item_failed(&mut self, contest_id: &str, reason: &str) {
        self.set_status(format!("Contest {} failed: {}", contest_id, reason));
    }
    fn finish(&mut self) {
        logd!("GuiProgress: finish {}/{}", self.done, self.total);
    }
}
