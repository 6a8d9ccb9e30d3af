// src/config/consts.rs

// Fetch
pub const DEFAULT_LINKS_FILE: &str = "links.txt";
pub const DEFAULT_PAGES_DIR: &str = "pages";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const FALLBACK_PAGE_STEM: &str = "index";

// Extract
pub const DEFAULT_DECKLISTS_DIR: &str = "decklists";
pub const DECKLIST_SELECTOR: &str = "pre.d-none#decklist-swu-text";
pub const PAGE_EXT: &str = "html";
pub const DECKLIST_EXT: &str = "txt";

// Matrix
pub const DEFAULT_MATRIX_FILE: &str = "card_matrix.csv";
pub const TOP_MAIN: usize = 10;
pub const TOP_SIDEBOARD: usize = 5;
