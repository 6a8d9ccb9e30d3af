// src/stats/mod.rs
//! Corpus statistics: per-card tallies folded from decklists, and the
//! finalized card matrix (CSV rows + report views).

pub mod corpus;
pub mod summary;
pub mod tally;

pub use corpus::{CardTally, CorpusStats, InclusionCounting};
pub use summary::{CSV_HEADERS, PoolSummary, Summary, SummaryRow, fixed2};
pub use tally::{PoolTally, median, mode};
