// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod csv;
pub mod engine;
pub mod file;
pub mod gui;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod table;

pub use error::{ Error, Result };
pub use model::{ ContestDescriptor, ContestStandings, Leaderboard, ParticipantRecord, TaskRecord, TaskStatus, UnifiedEntry };
pub use scrape::{ collect_contest, collect_leaderboard };
