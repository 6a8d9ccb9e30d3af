// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{AppOptions, consts::*};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, Stage};
use crate::stats::InclusionCounting;

#[derive(Debug, Parser)]
#[command(name = "deck_matrix", version, about = "Scrape decklist pages and build a card frequency matrix")]
pub struct Cli {
    /// Default log filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download every URL in the links file into the pages directory
    Fetch(FetchArgs),
    /// Pull the decklist text out of saved pages
    Extract(ExtractArgs),
    /// Build the card matrix CSV and print the report
    Matrix(MatrixArgs),
    /// Run fetch, extract and matrix in order
    All(AllArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    #[arg(long, default_value = DEFAULT_LINKS_FILE)]
    pub links: PathBuf,
    #[arg(long, default_value = DEFAULT_PAGES_DIR)]
    pub pages: PathBuf,
    /// Pause between requests
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[arg(long, default_value = DEFAULT_PAGES_DIR)]
    pub pages: PathBuf,
    #[arg(short, long, default_value = DEFAULT_DECKLISTS_DIR)]
    pub out: PathBuf,
    /// Leave old .txt files in the pages directory alone
    #[arg(long)]
    pub keep_stale: bool,
}

#[derive(Debug, Args)]
pub struct MatrixArgs {
    #[arg(long, default_value = DEFAULT_DECKLISTS_DIR)]
    pub decklists: PathBuf,
    #[arg(short, long, default_value = DEFAULT_MATRIX_FILE)]
    pub out: PathBuf,
    /// Count a card at most once per decklist (default: once per entry line)
    #[arg(long)]
    pub per_deck: bool,
    #[arg(long, default_value_t = TOP_MAIN)]
    pub top_main: usize,
    #[arg(long, default_value_t = TOP_SIDEBOARD)]
    pub top_sideboard: usize,
}

#[derive(Debug, Args)]
pub struct AllArgs {
    #[arg(long, default_value = DEFAULT_LINKS_FILE)]
    pub links: PathBuf,
    #[arg(long, default_value = DEFAULT_PAGES_DIR)]
    pub pages: PathBuf,
    #[arg(long, default_value = DEFAULT_DECKLISTS_DIR)]
    pub decklists: PathBuf,
    #[arg(short, long, default_value = DEFAULT_MATRIX_FILE)]
    pub out: PathBuf,
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,
    #[arg(long)]
    pub keep_stale: bool,
    #[arg(long)]
    pub per_deck: bool,
    #[arg(long, default_value_t = TOP_MAIN)]
    pub top_main: usize,
    #[arg(long, default_value_t = TOP_SIDEBOARD)]
    pub top_sideboard: usize,
}

fn counting(per_deck: bool) -> InclusionCounting {
    if per_deck { InclusionCounting::PerDecklist } else { InclusionCounting::PerEntry }
}

impl Command {
    /// Stage to run plus options filled from the arguments.
    pub fn into_options(self) -> (Stage, AppOptions) {
        let mut o = AppOptions::default();
        let stage = match self {
            Command::Fetch(a) => {
                o.fetch.links = a.links;
                o.fetch.pages_dir = a.pages;
                o.fetch.pause_ms = a.pause_ms;
                Stage::Fetch
            }
            Command::Extract(a) => {
                o.extract.pages_dir = a.pages;
                o.extract.out_dir = a.out;
                o.extract.clean_stale = !a.keep_stale;
                Stage::Extract
            }
            Command::Matrix(a) => {
                o.matrix.decklists_dir = a.decklists;
                o.matrix.out_path = a.out;
                o.matrix.counting = counting(a.per_deck);
                o.matrix.top_main = a.top_main;
                o.matrix.top_sideboard = a.top_sideboard;
                Stage::Matrix
            }
            Command::All(a) => {
                o.fetch.links = a.links;
                o.fetch.pages_dir = a.pages.clone();
                o.fetch.pause_ms = a.pause_ms;
                o.extract.pages_dir = a.pages;
                o.extract.out_dir = a.decklists.clone();
                o.extract.clean_stale = !a.keep_stale;
                o.matrix.decklists_dir = a.decklists;
                o.matrix.out_path = a.out;
                o.matrix.counting = counting(a.per_deck);
                o.matrix.top_main = a.top_main;
                o.matrix.top_sideboard = a.top_sideboard;
                Stage::All
            }
        };
        (stage, o)
    }
}

/// Prints stage transitions and a done/skipped tally per stage.
#[derive(Default)]
struct ConsoleProgress {
    done: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, _total: usize) {
        self.done = 0;
        self.failed = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _item: &str) {
        self.done += 1;
    }
    fn item_failed(&mut self, _item: &str, _reason: &str) {
        self.failed += 1;
    }
    fn finish(&mut self) {
        eprintln!("  {} done, {} skipped", self.done, self.failed);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(&cli.log_level);

    let (stage, options) = cli.command.into_options();
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(stage, &options, &mut progress)?;

    if let Some(report) = summary.report {
        println!("\n{report}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> (Stage, AppOptions) {
        let cli = Cli::try_parse_from(args).unwrap();
        cli.command.into_options()
    }

    #[test]
    fn matrix_defaults() {
        let (stage, o) = parse(&["deck_matrix", "matrix"]);
        assert_eq!(stage, Stage::Matrix);
        assert_eq!(o.matrix, AppOptions::default().matrix);
    }

    #[test]
    fn all_wires_directories_between_stages() {
        let (stage, o) = parse(&[
            "deck_matrix", "all", "--pages", "p", "--decklists", "d", "-o", "m.csv", "--per-deck",
        ]);
        assert_eq!(stage, Stage::All);
        assert_eq!(o.fetch.pages_dir, PathBuf::from("p"));
        assert_eq!(o.extract.pages_dir, PathBuf::from("p"));
        assert_eq!(o.extract.out_dir, PathBuf::from("d"));
        assert_eq!(o.matrix.decklists_dir, PathBuf::from("d"));
        assert_eq!(o.matrix.out_path, PathBuf::from("m.csv"));
        assert_eq!(o.matrix.counting, InclusionCounting::PerDecklist);
    }

    #[test]
    fn extract_keep_stale_flag() {
        let (_, o) = parse(&["deck_matrix", "extract", "--keep-stale"]);
        assert!(!o.extract.clean_stale);
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
