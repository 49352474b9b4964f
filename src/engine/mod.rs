// src/engine/mod.rs
// Cross-contest merge and ordering. Pure, single-threaded: callers hand in
// contests already parsed and already in column order.

pub mod aggregate;
pub mod rank;

use crate::error::Result;
use crate::model::{ ContestStandings, Leaderboard };

pub use aggregate::aggregate;
pub use rank::rank;

/// Merge `contests` (in column order) and optionally rank the result.
pub fn build_leaderboard(contests: &[ContestStandings], apply_rank: bool) -> Result<Leaderboard> {
    let mut board = aggregate(contests)?;
    if apply_rank {
        rank(&mut board.entries);
    }
    logf!(
        "Leaderboard: contests={} columns={} entries={} ranked={}",
        board.contests.len(), board.width(), board.entries.len(), apply_rank
    );
    Ok(board)
}
