// src/scrape.rs
//
// Fetch + parse contests on a small worker pool, then merge in input order.
//
// Workers pull contest indices from a shared counter and send back
// (index, result). Results are parked in per-index slots and handed to the
// engine in the caller's order, whatever order they arrived in. The first
// failure stops workers from taking new contests and fails the whole run.

use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering } },
};

use crate::{
    config::{ consts::JITTER_MS, options::{ CellPolicy, ScrapeOptions } },
    core::Fetch,
    engine,
    error::{ Error, Result },
    model::{ ContestStandings, Leaderboard },
    progress::Progress,
    specs,
};

/// Scrape every contest in `opts.contests` and build the unified leaderboard.
pub fn collect_leaderboard(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Leaderboard> {
    if opts.contests.is_empty() {
        return Err(Error::NoContests);
    }

    logf!("Scrape: Begin contests={:?} rank={} policy={:?}", opts.contests, opts.rank, opts.cell_policy);

    let standings = collect_all(fetcher, opts, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Merging standings…");
    }
    engine::build_leaderboard(&standings, opts.rank)
}

/// Scrape a single contest: descriptor plus its rows.
pub fn collect_contest(fetcher: &dyn Fetch, contest_id: &str, policy: CellPolicy) -> Result<ContestStandings> {
    let doc = fetcher.fetch(contest_id)?;
    specs::read_contest(&doc, contest_id, policy)
}

/// Fetch and parse all contests concurrently; output is in input order.
pub fn collect_all(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<ContestStandings>> {
    let ids = &opts.contests;
    let total = ids.len();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let next = AtomicUsize::new(0);
    let abort = AtomicBool::new(false);
    let workers = opts.workers.min(total).max(1);

    let mut slots: Vec<Option<ContestStandings>> = vec![None; total];
    let mut failure: Option<Error> = None;

    thread::scope(|scope| {
        let (res_tx, res_rx) = mpsc::channel::<(usize, Result<ContestStandings>)>();

        // Spawn workers
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (next, abort) = (&next, &abort);

            scope.spawn(move || {
                loop {
                    if abort.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= total {
                        break;
                    }
                    let result = collect_contest(fetcher, &ids[i], opts.cell_policy);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    // nothing left to fetch: no need to wait
                    if next.load(Ordering::Relaxed) >= total {
                        break;
                    }
                    pause(opts.pause_ms, i);
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Park results by input index
        for (i, result) in res_rx {
            match result {
                Ok(standings) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&ids[i], &standings.contest.title);
                    }
                    slots[i] = Some(standings);
                }
                Err(e) => {
                    loge!("Contest {}: {e}", ids[i]);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&ids[i], &e.to_string());
                    }
                    abort.store(true, Ordering::Relaxed);
                    if failure.is_none() {
                        failure = Some(e);
                    }
                }
            }
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if let Some(e) = failure {
        return Err(e);
    }

    slots
        .into_iter()
        .zip(ids)
        .map(|(slot, id)| slot.ok_or_else(|| Error::WorkerLost { contest: id.clone() }))
        .collect()
}

fn pause(pause_ms: u64, i: usize) {
    if pause_ms == 0 {
        return;
    }
    let jitter = (i as u64) % JITTER_MS;
    thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
}
