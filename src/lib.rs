// src/lib.rs
//! Decklist scraping and card frequency statistics.
//!
//! Pipeline: `links.txt` → `pages/*.html` → `decklists/*.txt` → `card_matrix.csv`.
//! Each stage reads the previous stage's files, so they can be re-run on their own.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod decklist;
pub mod error;
pub mod file;
pub mod progress;
pub mod report;
pub mod runner;
pub mod specs;
pub mod stages;
pub mod stats;

pub use error::{Error, Result};
