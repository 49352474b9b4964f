// tests/common/mod.rs
//
// Standings page fixtures and an offline Fetch.
#![allow(dead_code)]

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use stav_board::core::Fetch;
use stav_board::error::{ Error, Result };

/// `<td class="task">` with a status span and an optional time span.
pub fn cell(class: &str, text: &str, time: Option<&str>) -> String {
    let tm = time.map(|t| format!(r#"<span class="TM">{t}</span>"#)).unwrap_or_default();
    format!(r#"<td class="task"><span class="{class}">{text}</span>{tm}</td>"#)
}

pub fn ac(text: &str, time: &str) -> String { cell("AC", text, Some(time)) }
pub fn wa(text: &str) -> String { cell("WA", text, None) }
pub fn ns() -> String { cell("NS", ".", None) }

pub fn row(rank: &str, user: &str, cells: &[String], solved: &str, time: &str) -> String {
    format!(
        r#"<tr><td class="rank">{rank}</td><td class="user">{user}</td>{}<td class="solved">{solved}</td><td class="time">{time}</td></tr>"#,
        cells.concat()
    )
}

/// Full standings page with `tasks` task header cells.
pub fn page(title: &str, tasks: usize, rows: &[String]) -> String {
    let ths: String = (0..tasks).map(|i| format!(r#"<th class="task">{}</th>"#, i + 1)).collect();
    format!(
        r#"<html><head><title>Monitor</title></head><body>
<span class="page-title">{title} (01:15:00 из 05:00:00)</span>
<table class="monitor">
<thead><tr><th>#</th><th>User</th>{ths}<th>Solved</th><th>Time</th></tr></thead>
<tbody>
{}
</tbody>
</table></body></html>"#,
        rows.join("\n")
    )
}

/// Serves pages from memory. Unknown ids fail like a network error.
/// `delay_ms` per id lets tests finish contests out of input order.
#[derive(Default)]
pub struct MapFetcher {
    pub pages: HashMap<String, String>,
    pub delay_ms: HashMap<String, u64>,
}

impl MapFetcher {
    pub fn with(mut self, id: &str, doc: String) -> Self {
        self.pages.insert(id.to_string(), doc);
        self
    }

    pub fn slow(mut self, id: &str, ms: u64) -> Self {
        self.delay_ms.insert(id.to_string(), ms);
        self
    }
}

impl Fetch for MapFetcher {
    fn fetch(&self, contest_id: &str) -> Result<String> {
        if let Some(ms) = self.delay_ms.get(contest_id) {
            thread::sleep(Duration::from_millis(*ms));
        }
        self.pages
            .get(contest_id)
            .cloned()
            .ok_or_else(|| Error::retrieval(contest_id, format!("HTTP 404 for contest {contest_id}")))
    }
}
