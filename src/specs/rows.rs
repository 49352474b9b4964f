// src/specs/rows.rs
// Row level: table rows → ParticipantRecord, task cells → TaskRecord.

use crate::config::options::CellPolicy;
use crate::core::Markup;
use crate::core::sanitize::{ clean_text, leading_int };
use crate::error::{ Error, Result };
use crate::model::{ ContestDescriptor, ParticipantRecord, TaskRecord, TaskStatus };

pub const ROW_MARKER: &str = "<tr>";

pub const RANK: &str = r#"<td class="rank">"#;
pub const USER: &str = r#"<td class="user">"#;
pub const SOLVED: &str = r#"<td class="solved">"#;
pub const TIME: &str = r#"<td class="time">"#;

pub const TASK_OPEN: &str = r#"<td class="task">"#;
pub const TASK_CLOSE: &str = "</td>";

pub const STATUS_SPANS: [&str; 3] = [
    r#"<span class="AC">"#,
    r#"<span class="WA">"#,
    r#"<span class="NS">"#,
];
pub const TIME_SPAN: &str = r#"<span class="TM">"#;

/// All participant rows of a `<tbody>` region, in page order.
///
/// Rows lacking rank, user, solved or time are skipped; a non-numeric
/// rank keeps the row with `rank: None`. A task cell without
/// a status span either fails the run or is skipped, per `policy`.
pub fn deserialize_rows(
    region: &str,
    contest: &ContestDescriptor,
    policy: CellPolicy,
) -> Result<Vec<ParticipantRecord>> {
    let chunks = Markup::new(region).split(ROW_MARKER);
    let mut out = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        if let Some(rec) = read_row(chunk, contest, policy)? {
            out.push(rec);
        }
    }
    Ok(out)
}

fn read_row(chunk: &str, contest: &ContestDescriptor, policy: CellPolicy) -> Result<Option<ParticipantRecord>> {
    let m = Markup::new(chunk);

    let (Some(rank), Some(user), Some(solved), Some(time)) =
        (field(&m, RANK), field(&m, USER), field(&m, SOLVED), field(&m, TIME))
    else {
        if !chunk.trim().is_empty() {
            logd!("Contest {}: row without rank/user/solved/time dropped", contest.id);
        }
        return Ok(None);
    };

    let username = clean_text(user);

    // Only the presence of the four fields is required. Unranked
    // participants ("вне конкурса") keep their row with no place; unreadable
    // totals count as 0.
    let rank = leading_int(rank).and_then(|v| u32::try_from(v).ok());
    let solved = leading_int(solved).and_then(|v| u32::try_from(v).ok()).unwrap_or_else(|| {
        logd!("Contest {}: '{}' solved '{}' is not a number, using 0", contest.id, username, solved);
        0
    });
    let penalty = leading_int(time).unwrap_or_else(|| {
        logd!("Contest {}: '{}' time '{}' is not a number, using 0", contest.id, username, time);
        0
    });

    let mut tasks = Vec::with_capacity(contest.task_count);
    for (col, cell) in m.blocks(TASK_OPEN, TASK_CLOSE).into_iter().enumerate() {
        match parse_cell(cell) {
            Some(task) => tasks.push(task),
            None => match policy {
                CellPolicy::Strict => {
                    return Err(Error::TaskParse { user: username, contest: contest.id.clone() });
                }
                CellPolicy::Lenient => {
                    logw!("Contest {}: '{}' cell {} has no status, skipped", contest.id, username, col);
                }
            },
        }
    }
    fit_width(&mut tasks, contest, &username);

    Ok(Some(ParticipantRecord { username, rank, solved, penalty, tasks }))
}

/// Non-empty trimmed text after a field's opening marker.
fn field<'a>(m: &Markup<'a>, marker: &str) -> Option<&'a str> {
    m.text_after(marker).filter(|t| !t.is_empty())
}

/// One task cell. `None` when no status span is present.
pub fn parse_cell(cell: &str) -> Option<TaskRecord> {
    let m = Markup::new(cell);

    // Earliest status span in the cell
    let marker = STATUS_SPANS
        .iter()
        .filter_map(|mk| m.find(mk).map(|at| (at, *mk)))
        .min_by_key(|(at, _)| *at)
        .map(|(_, mk)| mk)?;
    let text = m.text_after(marker)?;

    let mut chars = text.chars();
    let status = match chars.next() {
        Some('+') => TaskStatus::Accepted,
        Some('-') => TaskStatus::WrongOrAttempted,
        _ => TaskStatus::NoSubmission,
    };
    let rest = chars.as_str().trim();

    let default_attempts = if status == TaskStatus::Accepted { 1 } else { 0 };
    let attempts = if rest.is_empty() {
        default_attempts
    } else {
        leading_int(rest)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default_attempts)
    };

    let penalty = match status {
        TaskStatus::NoSubmission => None,
        _ => m.text_after(TIME_SPAN).and_then(parse_clock),
    };

    Some(TaskRecord { status, attempts, penalty })
}

/// "12:34" → 12.34 (the colon is read as a decimal point).
pub fn parse_clock(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    t.replacen(':', ".", 1).parse::<f64>().ok()
}

/// Pad with placeholders or cut so the row is exactly one contest wide.
fn fit_width(tasks: &mut Vec<TaskRecord>, contest: &ContestDescriptor, user: &str) {
    let want = contest.task_count;
    if tasks.len() > want {
        logw!("Contest {}: '{}' has {} task cells, header has {}; extra cells dropped",
            contest.id, user, tasks.len(), want);
        tasks.truncate(want);
    } else if tasks.len() < want {
        logd!("Contest {}: '{}' has {} task cells, padding to {}", contest.id, user, tasks.len(), want);
        tasks.resize(want, TaskRecord::PLACEHOLDER);
    }
}
