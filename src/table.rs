// src/table.rs
//! Presentation model of a leaderboard.
//!
//! Turns the typed board into display rows: fixed lead columns (`#`, `User`),
//! one column per task with a letter per contest (`A`, `B`, …), then the
//! totals. Task cells carry the render class (`AC`/`WA`/`NS`) so the GUI can
//! colour them and exporters can ignore it.

use crate::model::{ ContestDescriptor, ContestStandings, Leaderboard, TaskRecord };

/// Columns before the first task column.
pub const LEAD_COLS: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct TableCell {
    pub text: String,
    /// `Some("AC" | "WA" | "NS")` for task cells.
    pub class: Option<&'static str>,
}

impl TableCell {
    fn plain<S: Into<String>>(text: S) -> Self {
        Self { text: text.into(), class: None }
    }

    fn task(t: &TaskRecord) -> Self {
        Self { text: t.display(), class: Some(t.status.class()) }
    }
}

/// A contest's title spanning its task columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnGroup {
    pub title: String,
    /// First column in `headers` (lead columns included).
    pub start: usize,
    pub len: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub groups: Vec<ColumnGroup>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

impl TableData {
    pub fn from_leaderboard(board: &Leaderboard) -> Self {
        let groups = groups_for(&board.contests);
        let headers = headers_for(&board.contests);

        let rows = board
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let mut row = Vec::with_capacity(headers.len());
                row.push(TableCell::plain((i + 1).to_string()));
                row.push(TableCell::plain(e.username.as_str()));
                row.extend(e.tasks.iter().map(TableCell::task));
                row.push(TableCell::plain(e.solved_total.to_string()));
                row.push(TableCell::plain(e.penalty_total.to_string()));
                row.push(TableCell::plain(e.attempts_total.to_string()));
                row
            })
            .collect();

        Self { groups, headers, rows }
    }

    /// Single contest, `#` is the place printed by the site (blank if unranked).
    pub fn from_standings(standings: &ContestStandings) -> Self {
        let contests = std::slice::from_ref(&standings.contest);
        let groups = groups_for(contests);
        let mut headers = headers_for(contests);
        headers.pop(); // no attempts column for raw standings

        let rows = standings
            .participants
            .iter()
            .map(|p| {
                let mut row = Vec::with_capacity(headers.len());
                row.push(TableCell::plain(p.rank.map(|r| r.to_string()).unwrap_or_default()));
                row.push(TableCell::plain(p.username.as_str()));
                row.extend(p.tasks.iter().map(TableCell::task));
                row.push(TableCell::plain(p.solved.to_string()));
                row.push(TableCell::plain(p.penalty.to_string()));
                row
            })
            .collect();

        Self { groups, headers, rows }
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One line, as wide as `headers`: each contest title at the first
    /// column of its group, blanks elsewhere.
    pub fn group_row(&self) -> Vec<String> {
        let mut out = vec![s!(); self.ncols()];
        for g in &self.groups {
            if let Some(slot) = out.get_mut(g.start) {
                *slot = g.title.clone();
            }
        }
        out
    }

    /// Title of the group owning column `col`, if it is a task column.
    pub fn group_of(&self, col: usize) -> Option<&ColumnGroup> {
        self.groups.iter().find(|g| col >= g.start && col < g.start + g.len)
    }

    /// Plain text rows (exports).
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|c| c.text.clone()).collect())
            .collect()
    }
}

/// Column letter within a contest: A..Z, then AA, AB, …
pub fn task_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

/* ---------- helpers ---------- */

fn groups_for(contests: &[ContestDescriptor]) -> Vec<ColumnGroup> {
    let mut start = LEAD_COLS;
    contests
        .iter()
        .map(|c| {
            let title = if c.title.is_empty() { format!("Contest {}", c.id) } else { c.title.clone() };
            let g = ColumnGroup { title, start, len: c.task_count };
            start += c.task_count;
            g
        })
        .collect()
}

fn headers_for(contests: &[ContestDescriptor]) -> Vec<String> {
    let width: usize = contests.iter().map(|c| c.task_count).sum();
    let mut headers = Vec::with_capacity(LEAD_COLS + width + 3);
    headers.push(s!("#"));
    headers.push(s!("User"));
    for c in contests {
        headers.extend((0..c.task_count).map(task_letter));
    }
    headers.push(s!("Solved"));
    headers.push(s!("Penalty"));
    headers.push(s!("Attempts"));
    headers
}
