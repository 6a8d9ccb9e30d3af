// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can abort a stage. Item-level problems are logged by the
/// stages and never surface here unless the whole batch is affected.
#[derive(Debug, Error)]
pub enum Error {
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("no decklist files found in {}", .0.display())]
    NoDecklists(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP error: {status} {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("invalid selector `{0}`")]
    Selector(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
