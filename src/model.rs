// src/model.rs
//
// Plain data carried through the pipeline:
//   specs::monitor  → ContestDescriptor
//   specs::rows     → ParticipantRecord (+ TaskRecord per task column)
//   engine          → UnifiedEntry, Leaderboard
//
// Records never point back at their owner; a TaskRecord only lives inside
// the `tasks` vector of the row that holds it.

use serde::{ Deserialize, Serialize };

/// One contest as announced by its standings page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestDescriptor {
    pub id: String,
    pub title: String,
    pub task_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Accepted,
    WrongOrAttempted,
    NoSubmission,
}

impl TaskStatus {
    /// Presentation class used by renderers.
    pub fn class(&self) -> &'static str {
        match self {
            TaskStatus::Accepted => "AC",
            TaskStatus::WrongOrAttempted => "WA",
            TaskStatus::NoSubmission => "NS",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub status: TaskStatus,
    pub attempts: u32,
    /// Decimal minutes; only when the page reports a time for the cell.
    pub penalty: Option<f64>,
}

impl TaskRecord {
    /// Filler for columns of contests a participant did not take part in.
    pub const PLACEHOLDER: TaskRecord = TaskRecord {
        status: TaskStatus::NoSubmission,
        attempts: 0,
        penalty: None,
    };

    pub fn is_placeholder(&self) -> bool {
        *self == Self::PLACEHOLDER
    }

    /// Short display form: `+`, `+3`, `-2`, `.`
    pub fn display(&self) -> String {
        match self.status {
            TaskStatus::Accepted if self.attempts <= 1 => s!("+"),
            TaskStatus::Accepted => format!("+{}", self.attempts),
            TaskStatus::WrongOrAttempted => format!("-{}", self.attempts),
            TaskStatus::NoSubmission => s!("."),
        }
    }
}

/// One row of one contest's standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub username: String,
    /// Place as printed by the site; informational only.
    /// `None` when the cell holds text instead of a number.
    pub rank: Option<u32>,
    pub solved: u32,
    pub penalty: u64,
    /// Always exactly `task_count` long for the owning contest.
    pub tasks: Vec<TaskRecord>,
}

/// A parsed contest: descriptor plus its rows, in page order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContestStandings {
    pub contest: ContestDescriptor,
    pub participants: Vec<ParticipantRecord>,
}

/// One username across all contests of a leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnifiedEntry {
    pub username: String,
    pub tasks: Vec<TaskRecord>,
    pub solved_total: u32,
    pub penalty_total: u64,
    /// Sum of attempts over the Accepted cells this entry holds.
    pub attempts_total: u32,
}

impl UnifiedEntry {
    pub(crate) fn with_width(username: &str, width: usize) -> Self {
        Self {
            username: s!(username),
            tasks: vec![TaskRecord::PLACEHOLDER; width],
            solved_total: 0,
            penalty_total: 0,
            attempts_total: 0,
        }
    }
}

/// The merged, column-aligned result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    /// Column blocks, in input order.
    pub contests: Vec<ContestDescriptor>,
    pub entries: Vec<UnifiedEntry>,
}

impl Leaderboard {
    /// Total number of task columns.
    pub fn width(&self) -> usize {
        self.contests.iter().map(|c| c.task_count).sum()
    }

    /// Starting column of each contest's slice.
    pub fn offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.contests.len());
        let mut at = 0usize;
        for c in &self.contests {
            offsets.push(at);
            at += c.task_count;
        }
        offsets
    }

    /// Column range `[start, end)` of the contest at `index`.
    pub fn slice_of(&self, index: usize) -> Option<std::ops::Range<usize>> {
        let start = self.offsets().get(index).copied()?;
        Some(start..start + self.contests[index].task_count)
    }

    pub fn entry(&self, username: &str) -> Option<&UnifiedEntry> {
        self.entries.iter().find(|e| e.username == username)
    }
}
