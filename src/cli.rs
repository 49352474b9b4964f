// src/cli.rs
//! Command line front end.
//!
//! ```text
//! cli board 101 102 103 -o out/board.csv
//! cli board 101,102 --no-rank --format json
//! cli contest 101 --lenient
//! ```
//! Without `-o` the result goes to stdout.

use std::path::PathBuf;

use clap::{ Args, Parser, Subcommand, ValueEnum };

use crate::{
    config::{
        consts::{ BASE_URL, TIMEOUT_SECS, WORKERS },
        options::{ parse_contest_list, CellPolicy, ExportFormat, ExportOptions, ScrapeOptions },
    },
    core::HttpFetcher,
    error::Result,
    file,
    progress::Progress,
    scrape,
};

#[derive(Debug, Parser)]
#[command(name = "stav_board", version, about = "Merge contest.stavdeti.ru standings into one leaderboard")]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Site root the standings pages are fetched from.
    #[arg(long, default_value = BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge several contests into one leaderboard.
    Board(BoardArgs),
    /// Standings of a single contest, as printed by the site.
    Contest(ContestArgs),
}

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Contest ids, in column order. Commas or spaces.
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Keep first-seen order instead of (solved desc, penalty asc).
    #[arg(long)]
    pub no_rank: bool,

    /// Drop unreadable task cells instead of failing.
    #[arg(long)]
    pub lenient: bool,

    /// Parallel fetches.
    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ContestArgs {
    pub id: String,

    /// Drop unreadable task cells instead of failing.
    #[arg(long)]
    pub lenient: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format; defaults to the file extension, then csv.
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Skip the two header lines (CSV/TSV).
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

impl OutputArgs {
    pub fn export_options(&self) -> ExportOptions {
        let mut export = ExportOptions::default();
        if let Some(out) = &self.out {
            export.set_path(&out.to_string_lossy());
        }
        export.format = match (self.format, self.out.as_ref().and_then(|p| p.extension())) {
            (Some(f), _) => f.into(),
            (None, Some(ext)) => ExportFormat::from_ext(&ext.to_string_lossy()).unwrap_or(ExportFormat::Csv),
            (None, None) => ExportFormat::Csv,
        };
        export.include_headers = !self.no_headers;
        export
    }
}

/// Progress on stderr, one line per contest.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} contest(s)…");
    }
    fn item_done(&mut self, contest_id: &str, title: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {contest_id}: {title}", self.done, self.total);
    }
    fn item_failed(&mut self, contest_id: &str, reason: &str) {
        eprintln!("[failed] {contest_id}: {reason}");
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Board(args) => {
            let mut opts = ScrapeOptions {
                contests: parse_contest_list(&args.ids.join(" ")),
                rank: !args.no_rank,
                cell_policy: policy(args.lenient),
                base_url: cli.base_url,
                timeout_secs: cli.timeout,
                ..ScrapeOptions::default()
            };
            opts.workers = args.workers.max(1);

            let fetcher = HttpFetcher::new(&opts.base_url, opts.timeout_secs)?;
            let mut prog = CliProgress { done: 0, total: 0 };
            let board = scrape::collect_leaderboard(&fetcher, &opts, Some(&mut prog))?;

            let export = args.output.export_options();
            match args.output.out {
                Some(_) => {
                    let path = file::export_leaderboard(&export, &board)?;
                    eprintln!("Wrote {} entries to {}", board.entries.len(), path.display());
                }
                None => print!("{}", file::render_leaderboard(&board, export.format, export.include_headers)?),
            }
        }
        Command::Contest(args) => {
            let fetcher = HttpFetcher::new(&cli.base_url, cli.timeout)?;
            let standings = scrape::collect_contest(&fetcher, &args.id, policy(args.lenient))?;

            let export = args.output.export_options();
            match args.output.out {
                Some(_) => {
                    let path = file::export_standings(&export, &standings)?;
                    eprintln!("Wrote {} rows to {}", standings.participants.len(), path.display());
                }
                None => print!("{}", file::render_standings(&standings, export.format, export.include_headers)?),
            }
        }
    }
    Ok(())
}

fn policy(lenient: bool) -> CellPolicy {
    if lenient { CellPolicy::Lenient } else { CellPolicy::Strict }
}
