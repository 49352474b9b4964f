// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
/// All calls happen on the thread that started the scrape.
pub trait Progress {
    /// Called at the start with the number of contests to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One contest fetched and parsed.
    fn item_done(&mut self, _contest_id: &str, _title: &str) {}

    /// One contest failed; the run is being aborted.
    fn item_failed(&mut self, _contest_id: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
