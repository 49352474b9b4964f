// benches/aggregate.rs
use criterion::{ criterion_group, criterion_main, Criterion, black_box };

use stav_board::{
    config::options::CellPolicy,
    engine,
    specs,
};

/// Synthetic standings page: `users` rows × `tasks` cells.
fn synth_page(contest: usize, users: usize, tasks: usize) -> String {
    let ths: String = (0..tasks).map(|i| format!(r#"<th class="task">{i}</th>"#)).collect();
    let mut rows = String::new();
    for u in 0..users {
        let mut cells = String::new();
        for t in 0..tasks {
            let cell = match (u + t + contest) % 3 {
                0 => r#"<span class="AC">+</span><span class="TM">12:34</span>"#.to_string(),
                1 => format!(r#"<span class="WA">-{}</span>"#, t % 4 + 1),
                _ => r#"<span class="NS">.</span>"#.to_string(),
            };
            cells.push_str(&format!(r#"<td class="task">{cell}</td>"#));
        }
        rows.push_str(&format!(
            r#"<tr><td class="rank">{}</td><td class="user">user{}</td>{cells}<td class="solved">{}</td><td class="time">{}</td></tr>"#,
            u + 1, (u * 7 + contest) % (users + users / 2), tasks / 3, u * 11
        ));
    }
    format!(
        r#"<span class="page-title">Contest {contest} (00:10:00 из 05:00:00)</span><table><thead><tr>{ths}</tr></thead><tbody>{rows}</tbody></table>"#
    )
}

fn bench_aggregate(c: &mut Criterion) {
    let docs: Vec<String> = (0..6).map(|i| synth_page(i, 400, 8)).collect();

    c.bench_function("parse_6x400", |b| {
        b.iter(|| {
            let n: usize = docs
                .iter()
                .enumerate()
                .filter_map(|(i, d)| specs::read_contest(black_box(d), &i.to_string(), CellPolicy::Lenient).ok())
                .map(|s| s.participants.len())
                .sum();
            black_box(n)
        })
    });

    let standings: Vec<_> = docs
        .iter()
        .enumerate()
        .filter_map(|(i, d)| specs::read_contest(d, &i.to_string(), CellPolicy::Lenient).ok())
        .collect();

    c.bench_function("merge_rank_6x400", |b| {
        b.iter(|| {
            let board = engine::build_leaderboard(black_box(&standings), true);
            black_box(board.map(|b| b.entries.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
