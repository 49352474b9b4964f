// src/specs/mod.rs
//! # Standings page specs
//!
//! Everything that knows how a contest.stavdeti.ru standings page
//! ("show-monitor") is laid out lives here. The page is a single table:
//!
//! ```text
//! <span class="page-title">Title (00:00:00 из 05:00:00)</span>
//! <table>
//!   <thead> … <th class="task">A</th> <th class="task">B</th> … </thead>
//!   <tbody>
//!     <tr><td class="rank">1</td><td class="user">alice</td>
//!         <td class="task"><span class="AC">+</span><span class="TM">0:12</span></td> …
//!         <td class="solved">2</td><td class="time">40</td></tr>
//!     …
//!   </tbody>
//! </table>
//! ```
//!
//! ## What lives here
//! - [`monitor`]: contest title, task count and the row region (page level).
//! - [`rows`]: one `ParticipantRecord` per table row (row and cell level).
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), merging contests (`engine`), export (`csv`, `file`).
//!
//! ## Conventions
//! - Markers are matched case-insensitively; the first occurrence of a
//!   boundary marker wins and tags are never balanced (see `core::html`).
//! - Field-level gaps fall back to defaults; a row missing one of its four
//!   scalar fields is dropped without error.
//! - Specs are pure functions over page text, testable offline.

pub mod monitor;
pub mod rows;

use crate::config::options::CellPolicy;
use crate::error::Result;
use crate::model::ContestStandings;

pub use monitor::{ parse_page, MonitorPage, StructureIssue };
pub use rows::deserialize_rows;

/// Page Parser + Row Deserializer for one raw page.
pub fn read_contest(doc: &str, contest_id: &str, policy: CellPolicy) -> Result<ContestStandings> {
    let page = parse_page(doc, contest_id);
    for issue in &page.issues {
        logw!("Contest {contest_id}: {issue}");
    }

    let participants = match page.body {
        Some(body) => deserialize_rows(body, &page.contest, policy)?,
        None => Vec::new(),
    };

    logf!(
        "Contest {}: '{}' tasks={} participants={}",
        page.contest.id, page.contest.title, page.contest.task_count, participants.len()
    );

    Ok(ContestStandings { contest: page.contest, participants })
}
