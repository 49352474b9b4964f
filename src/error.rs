// src/error.rs
//! Crate-wide error type.
//!
//! Field-level gaps in a page (no title, no header, no body) are not errors;
//! see `specs::monitor::StructureIssue`. Everything here aborts the run.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    /// The retrieval collaborator failed. `source` is kept as-is.
    #[error("Failed to fetch contest {contest}: {source}")]
    Retrieval {
        contest: String,
        #[source]
        source: BoxError,
    },

    /// A task cell had no recognizable status span (strict cell policy).
    #[error("Cannot parse task status. Contestant: '{user}' Contest: {contest}")]
    TaskParse { user: String, contest: String },

    /// The same username occurs twice in one contest's standings.
    #[error("Duplicate participant '{user}' in contest {contest}")]
    DuplicateParticipant { user: String, contest: String },

    /// A row's task list does not match its contest's task count.
    #[error("Participant '{user}' in contest {contest} has {got} task cells, expected {want}")]
    RowWidth { user: String, contest: String, got: usize, want: usize },

    #[error("No contest ids given")]
    NoContests,

    /// A fetch worker went away without reporting back.
    #[error("Worker for contest {contest} ended without a result")]
    WorkerLost { contest: String },

    #[error("Invalid output path: {0}")]
    InvalidOutput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn retrieval<E>(contest: &str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Retrieval { contest: s!(contest), source: source.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
