// src/engine/aggregate.rs
//
// Username-keyed positional merge.
//
// Each contest owns the fixed column slice [offset, offset + task_count),
// where offset is the sum of task counts of the contests before it in the
// input. The total width is summed up front, so every entry is allocated
// once at full width, filled with placeholders, and a contest's slice is
// written by that contest only. Counters are accumulated, never replaced.

use std::collections::{ HashMap, HashSet };

use crate::error::{ Error, Result };
use crate::model::{ ContestStandings, Leaderboard, TaskRecord, TaskStatus, UnifiedEntry };

pub fn aggregate(contests: &[ContestStandings]) -> Result<Leaderboard> {
    let width: usize = contests.iter().map(|c| c.contest.task_count).sum();

    let mut entries: Vec<UnifiedEntry> = Vec::new();
    let mut by_user: HashMap<String, usize> = HashMap::new();
    let mut offset = 0usize;

    for standings in contests {
        let contest = &standings.contest;
        check_rows(standings)?;

        let span = offset..offset + contest.task_count;
        for rec in &standings.participants {
            let slot = match by_user.get(&rec.username) {
                Some(&i) => i,
                None => {
                    entries.push(UnifiedEntry::with_width(&rec.username, width));
                    by_user.insert(rec.username.clone(), entries.len() - 1);
                    entries.len() - 1
                }
            };

            let entry = &mut entries[slot];
            entry.tasks[span.clone()].clone_from_slice(&rec.tasks);
            entry.solved_total = entry.solved_total.saturating_add(rec.solved);
            entry.penalty_total = entry.penalty_total.saturating_add(rec.penalty);
            entry.attempts_total = entry.attempts_total.saturating_add(accepted_attempts(&rec.tasks));
        }

        logd!("Merge: contest {} at columns {:?}, {} rows", contest.id, span, standings.participants.len());
        offset += contest.task_count;
    }

    Ok(Leaderboard {
        contests: contests.iter().map(|c| c.contest.clone()).collect(),
        entries,
    })
}

/// Preconditions on one contest's rows: unique usernames, exact width.
fn check_rows(standings: &ContestStandings) -> Result<()> {
    let contest = &standings.contest;
    let mut seen: HashSet<&str> = HashSet::with_capacity(standings.participants.len());

    for rec in &standings.participants {
        if !seen.insert(rec.username.as_str()) {
            return Err(Error::DuplicateParticipant {
                user: rec.username.clone(),
                contest: contest.id.clone(),
            });
        }
        if rec.tasks.len() != contest.task_count {
            return Err(Error::RowWidth {
                user: rec.username.clone(),
                contest: contest.id.clone(),
                got: rec.tasks.len(),
                want: contest.task_count,
            });
        }
    }
    Ok(())
}

fn accepted_attempts(tasks: &[TaskRecord]) -> u32 {
    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Accepted)
        .map(|t| t.attempts)
        .fold(0u32, u32::saturating_add)
}
