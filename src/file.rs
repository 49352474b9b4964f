// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use serde::Serialize;

use crate::config::options::{ ExportFormat, ExportOptions };
use crate::core::sanitize::sanitize_filename;
use crate::csv::table_to_string;
use crate::error::{ Error, Result };
use crate::model::{ ContestStandings, Leaderboard };
use crate::table::TableData;

/// Leaderboard in the requested format (also used for Copy).
pub fn render_leaderboard(board: &Leaderboard, format: ExportFormat, include_headers: bool) -> Result<String> {
    render(board, || TableData::from_leaderboard(board), format, include_headers)
}

/// Single contest standings in the requested format.
pub fn render_standings(standings: &ContestStandings, format: ExportFormat, include_headers: bool) -> Result<String> {
    render(standings, || TableData::from_standings(standings), format, include_headers)
}

fn render<T, F>(value: &T, table: F, format: ExportFormat, include_headers: bool) -> Result<String>
where
    T: Serialize,
    F: FnOnce() -> TableData,
{
    match format.delimiter() {
        Some(sep) => Ok(table_to_string(&table(), include_headers, sep)),
        None => {
            let mut s = serde_json::to_string_pretty(value)?;
            s.push('\n');
            Ok(s)
        }
    }
}

/// Write the leaderboard to `export.out_path()`. Returns the path written.
pub fn export_leaderboard(export: &ExportOptions, board: &Leaderboard) -> Result<PathBuf> {
    let contents = render_leaderboard(board, export.format, export.include_headers)?;
    write_export(&export.out_path(), &contents)
}

pub fn export_standings(export: &ExportOptions, standings: &ContestStandings) -> Result<PathBuf> {
    let contents = render_standings(standings, export.format, export.include_headers)?;
    write_export(&export.out_path(), &contents)
}

fn write_export(path: &Path, contents: &str) -> Result<PathBuf> {
    if looks_like_dir_hint(path) || path.is_dir() {
        return Err(Error::InvalidOutput(format!("{} is a directory", path.display())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logf!("Export: wrote {}", path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::InvalidOutput(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// File stem for a board made of `contest_ids`, e.g. "leaderboard_101_102".
pub fn suggest_stem(contest_ids: &[String]) -> String {
    let joined = contest_ids.join(" ");
    let ids = sanitize_filename(&joined, "");
    if ids.is_empty() { s!("leaderboard") } else { format!("leaderboard_{ids}") }
}
