// tests/pipeline.rs
//
// Fetch → parse → merge → rank with an in-memory Fetch.
mod common;
use common::*;

use std::time::{ Duration, Instant };

use stav_board::config::options::ScrapeOptions;
use stav_board::error::Error;
use stav_board::model::TaskStatus;
use stav_board::progress::Progress;
use stav_board::scrape::{ collect_contest, collect_leaderboard };

fn opts(ids: &[&str]) -> ScrapeOptions {
    ScrapeOptions {
        contests: ids.iter().map(|s| s.to_string()).collect(),
        workers: 3,
        pause_ms: 0,
        ..ScrapeOptions::default()
    }
}

fn two_contests() -> MapFetcher {
    MapFetcher::default()
        .with("101", page("Day 1", 2, &[
            row("1", "alice", &[ac("+", "0:12"), ac("+1", "0:40")], "2", "52"),
            row("2", "bob", &[ac("+", "0:20"), wa("-3")], "1", "20"),
        ]))
        .with("102", page("Day 2", 1, &[
            row("1", "bob", &[ac("+2", "1:05")], "1", "5"),
            row("2", "carol", &[wa("-1")], "0", "0"),
        ]))
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, id: &str, _title: &str) { self.done.push(id.to_string()); }
    fn item_failed(&mut self, id: &str, _reason: &str) { self.failed.push(id.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn merges_in_input_order_and_ranks() {
    let fetcher = two_contests();
    let board = collect_leaderboard(&fetcher, &opts(&["101", "102"]), None).unwrap();

    let ids: Vec<&str> = board.contests.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["101", "102"]);
    assert_eq!(board.contests[0].title, "Day 1");
    assert_eq!(board.width(), 3);

    // bob: 2 solved, 25; alice: 2 solved, 52; carol: 0
    let order: Vec<&str> = board.entries.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(order, ["bob", "alice", "carol"]);

    let alice = board.entry("alice").unwrap();
    assert_eq!(alice.tasks[0].status, TaskStatus::Accepted);
    assert_eq!(alice.tasks[1].attempts, 1);
    assert!(alice.tasks[2].is_placeholder());

    let bob = board.entry("bob").unwrap();
    assert_eq!((bob.solved_total, bob.penalty_total, bob.attempts_total), (2, 25, 3));

    let carol = board.entry("carol").unwrap();
    assert!(carol.tasks[..2].iter().all(|t| t.is_placeholder()));
}

#[test]
fn completion_order_does_not_change_columns() {
    let fetcher = two_contests().slow("101", 80);
    let mut prog = Recorder::default();
    let mut o = opts(&["101", "102"]);
    o.rank = false;

    let board = collect_leaderboard(&fetcher, &o, Some(&mut prog)).unwrap();

    assert_eq!(board.contests[0].id, "101");
    assert_eq!(board.slice_of(1), Some(2..3));
    // first-seen order follows contest order, not arrival order
    let order: Vec<&str> = board.entries.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(order, ["alice", "bob", "carol"]);

    assert_eq!(prog.total, 2);
    assert_eq!(prog.done.len(), 2);
    assert!(prog.finished);
}

#[test]
fn one_failed_fetch_fails_the_run() {
    let fetcher = two_contests();
    let mut prog = Recorder::default();

    let err = collect_leaderboard(&fetcher, &opts(&["101", "404", "102"]), Some(&mut prog)).unwrap_err();
    match err {
        Error::Retrieval { contest, .. } => assert_eq!(contest, "404"),
        other => panic!("expected Retrieval, got {other}"),
    }
    assert_eq!(prog.failed, ["404"]);
    assert!(prog.finished);
}

#[test]
fn empty_contest_list_is_an_error() {
    let fetcher = MapFetcher::default();
    assert!(matches!(collect_leaderboard(&fetcher, &opts(&[]), None), Err(Error::NoContests)));
}

#[test]
fn repeated_contest_id_becomes_two_blocks() {
    let fetcher = two_contests();
    let board = collect_leaderboard(&fetcher, &opts(&["102", "102"]), None).unwrap();
    assert_eq!(board.width(), 2);
    let bob = board.entry("bob").unwrap();
    assert_eq!(bob.solved_total, 2);
    assert_eq!(bob.tasks[0], bob.tasks[1]);
}

#[test]
fn page_without_table_is_an_empty_contest() {
    let fetcher = two_contests().with("103", "<html><body>closed</body></html>".to_string());
    let board = collect_leaderboard(&fetcher, &opts(&["101", "103"]), None).unwrap();
    assert_eq!(board.contests[1].task_count, 0);
    assert_eq!(board.contests[1].title, "");
    assert_eq!(board.entries.len(), 2);
}

#[test]
fn single_contest_keeps_site_order() {
    let s = collect_contest(&two_contests(), "102", Default::default()).unwrap();
    assert_eq!(s.contest.title, "Day 2");
    assert_eq!(s.participants[0].username, "bob");
    assert_eq!(s.participants[0].tasks[0].attempts, 2);
}

#[test]
fn unreadable_cell_in_one_contest_fails_the_run() {
    let fetcher = two_contests().with("103", page("Day 3", 2, &[
        row("1", "dave", &[ac("+", "0:05"), "<td class=\"task\"></td>".to_string()], "1", "5"),
    ]));
    let mut prog = Recorder::default();

    let res = collect_leaderboard(&fetcher, &opts(&["101", "103", "102"]), Some(&mut prog));
    match res {
        Err(Error::TaskParse { user, contest }) => {
            assert_eq!(user, "dave");
            assert_eq!(contest, "103");
        }
        other => panic!("expected TaskParse, got {other:?}"),
    }
    assert_eq!(prog.failed, ["103"]);
}

#[test]
fn progress_sink_can_be_reused_between_runs() {
    let fetcher = two_contests();
    let mut prog = Recorder::default();

    {
        let sink: &mut dyn Progress = &mut prog;
        collect_leaderboard(&fetcher, &opts(&["101"]), Some(sink)).unwrap();
    }
    collect_leaderboard(&fetcher, &opts(&["102"]), Some(&mut prog)).unwrap();

    assert_eq!(prog.done, ["101", "102"]);
}

#[test]
fn no_pause_after_the_last_contest() {
    let fetcher = two_contests();
    let mut o = opts(&["101"]);
    o.pause_ms = 3_000;

    let started = Instant::now();
    collect_leaderboard(&fetcher, &o, None).unwrap();
    assert!(started.elapsed() < Duration::from_millis(1_500));
}
