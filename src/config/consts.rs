// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://contest.stavdeti.ru";
pub const MONITOR_PATH: &str = "/olympiad/{id}/show-monitor";
pub const USER_AGENT: &str = concat!("stav_board/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "leaderboard";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
