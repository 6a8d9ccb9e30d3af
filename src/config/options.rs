// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::stats::InclusionCounting;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub extract: ExtractOptions,
    pub matrix: MatrixOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            extract: ExtractOptions::default(),
            matrix: MatrixOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// One URL per line; blank lines are ignored.
    pub links: PathBuf,
    pub pages_dir: PathBuf,
    pub pause_ms: u64,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            links: PathBuf::from(DEFAULT_LINKS_FILE),
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
            pause_ms: REQUEST_PAUSE_MS,
            user_agent: s!(USER_AGENT),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub pages_dir: PathBuf,
    pub out_dir: PathBuf,
    pub selector: String,
    /// Remove leftover `.txt` files from the pages directory first.
    pub clean_stale: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
            out_dir: PathBuf::from(DEFAULT_DECKLISTS_DIR),
            selector: s!(DECKLIST_SELECTOR),
            clean_stale: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixOptions {
    pub decklists_dir: PathBuf,
    pub out_path: PathBuf,
    pub counting: InclusionCounting,
    pub top_main: usize,
    pub top_sideboard: usize,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            decklists_dir: PathBuf::from(DEFAULT_DECKLISTS_DIR),
            out_path: PathBuf::from(DEFAULT_MATRIX_FILE),
            counting: InclusionCounting::PerEntry,
            top_main: TOP_MAIN,
            top_sideboard: TOP_SIDEBOARD,
        }
    }
}
