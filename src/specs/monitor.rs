// src/specs/monitor.rs
// Page level: title, task count, row region.

use std::fmt;

use crate::core::Markup;
use crate::core::sanitize::clean_text;
use crate::model::ContestDescriptor;

pub const TITLE_MARKER: &str = r#"<span class="page-title">"#;
pub const HEAD_OPEN: &str = "<thead>";
pub const HEAD_CLOSE: &str = "</thead>";
pub const TASK_HEADER: &str = r#"<th class="task">"#;
pub const BODY_OPEN: &str = "<tbody>";
pub const BODY_CLOSE: &str = "</tbody>";

/// Structural gaps that are recovered with a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructureIssue {
    /// No title marker; title is "".
    MissingTitle,
    /// No `<thead>…</thead>`; task count is 0.
    MissingHeader,
    /// No `<tbody>…</tbody>`; the contest has no participants.
    MissingBody,
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            StructureIssue::MissingTitle => "page title not found, using empty title",
            StructureIssue::MissingHeader => "table header not found, task count is 0",
            StructureIssue::MissingBody => "table body not found, no participants",
        };
        f.write_str(msg)
    }
}

pub struct MonitorPage<'a> {
    pub contest: ContestDescriptor,
    /// Raw text between the first `<tbody>` and the first `</tbody>`.
    pub body: Option<&'a str>,
    pub issues: Vec<StructureIssue>,
}

pub fn parse_page<'a>(doc: &'a str, contest_id: &str) -> MonitorPage<'a> {
    let m = Markup::new(doc);
    let mut issues = Vec::new();

    let title = extract_title(&m).unwrap_or_else(|| {
        issues.push(StructureIssue::MissingTitle);
        s!()
    });

    let task_count = match m.slice_first(HEAD_OPEN, HEAD_CLOSE) {
        Some(head) => Markup::new(head).count(TASK_HEADER),
        None => {
            issues.push(StructureIssue::MissingHeader);
            0
        }
    };

    let body = m.slice_first(BODY_OPEN, BODY_CLOSE);
    if body.is_none() {
        issues.push(StructureIssue::MissingBody);
    }

    MonitorPage {
        contest: ContestDescriptor { id: s!(contest_id), title, task_count },
        body,
        issues,
    }
}

/* ---------- helpers ---------- */

/// Title text up to the next tag, minus the "(hh:mm:ss из hh:mm:ss)" timer.
fn extract_title(m: &Markup) -> Option<String> {
    let raw = m.text_after(TITLE_MARKER)?;
    let cut = timer_start(raw).unwrap_or(raw.len());
    Some(clean_text(&raw[..cut]))
}

/// Position of the first "(" that opens a clock, e.g. "(01:20:00 из 05:00:00)".
/// Parentheses that belong to the title itself ("Round (juniors)") are kept.
fn timer_start(s: &str) -> Option<usize> {
    let mut from = 0usize;
    while let Some(rel) = s[from..].find('(') {
        let open = from + rel;
        let inner = s[open + 1..].split(')').next().unwrap_or("");
        let clock = inner.trim_start().starts_with(|c: char| c.is_ascii_digit()) && inner.contains(':');
        if clock {
            return Some(open);
        }
        from = open + 1;
    }
    None
}
