// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to do with a task cell whose status span is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellPolicy {
    /// Abort the whole run with `Error::TaskParse`.
    #[default]
    Strict,
    /// Drop just that cell and keep going.
    Lenient,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Contest ids, in leaderboard column order.
    pub contests: Vec<String>,
    /// Sort by (solved desc, penalty asc). Off = first-seen order.
    pub rank: bool,
    pub cell_policy: CellPolicy,
    pub base_url: String,
    pub workers: usize,
    pub timeout_secs: u64,
    /// Pause between requests of one worker; 0 disables pause and jitter.
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            contests: Vec::new(),
            rank: true,
            cell_policy: CellPolicy::Strict,
            base_url: s!(BASE_URL),
            workers: WORKERS,
            timeout_secs: TIMEOUT_SECS,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl ScrapeOptions {
    /// Replace the contest list from free text: ids separated by commas
    /// and/or whitespace. Order is kept, duplicates too.
    pub fn set_contests(&mut self, text: &str) {
        self.contests = parse_contest_list(text);
    }
}

pub fn parse_contest_list(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Final file path. A user-typed extension is kept; otherwise the
    /// format decides it.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        match &self.out_path.ext {
            Some(ext) => path.push(format!("{stem}.{}", ext.to_string_lossy())),
            None => path.push(format!("{stem}.{}", self.format.ext())),
        }
        path
    }

    /// Parse user text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = Path::new(s);
        self.out_path.dir = match p.parent() {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::new(),
        };
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
