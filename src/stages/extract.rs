// src/stages/extract.rs
use std::path::PathBuf;

use crate::{
    config::{
        ExtractOptions,
        consts::{DECKLIST_EXT, PAGE_EXT},
    },
    core::sanitize::file_stem,
    error::{Error, Result},
    file::{self, ensure_directory, list_files_with_ext, remove_files_with_ext},
    progress::Progress,
    specs::decklist_page::DecklistPage,
};

#[derive(Debug, Default)]
pub struct ExtractOutcome {
    pub written: Vec<PathBuf>,
    /// Pages without a decklist block.
    pub missing: Vec<PathBuf>,
    /// Pages that could not be read or written.
    pub failed: Vec<PathBuf>,
}

/// Pull the decklist text out of every saved page into `out_dir/<stem>.txt`.
pub fn run(opts: &ExtractOptions, progress: &mut dyn Progress) -> Result<ExtractOutcome> {
    if !opts.pages_dir.is_dir() {
        return Err(Error::MissingDirectory(opts.pages_dir.clone()));
    }
    ensure_directory(&opts.out_dir)?;

    if opts.clean_stale {
        let removed = remove_files_with_ext(&opts.pages_dir, DECKLIST_EXT)?;
        logf!("Cleaned up {} text files from pages directory", removed.len());
    }

    let page = DecklistPage::with_selector(&opts.selector)?;
    let pages = list_files_with_ext(&opts.pages_dir, PAGE_EXT)?;
    logf!("Found {} HTML files to process", pages.len());
    progress.begin(pages.len());

    let mut outcome = ExtractOutcome::default();
    for path in pages {
        let name = path.display().to_string();
        logd!("Processing: {name}");

        let doc = match file::read_text(&path) {
            Ok(doc) => doc,
            Err(e) => {
                loge!("Error extracting content from {name}: {e}");
                progress.item_failed(&name, &e.to_string());
                outcome.failed.push(path);
                continue;
            }
        };

        let Some(text) = page.extract(&doc) else {
            logw!("No decklist content found in {name}");
            progress.item_failed(&name, "no decklist content");
            outcome.missing.push(path);
            continue;
        };

        let out = opts.out_dir.join(join!(file_stem(&path), ".", DECKLIST_EXT));
        match file::write_text(&out, &text) {
            Ok(()) => {
                logf!("Successfully extracted decklist to: {}", out.display());
                progress.item_done(&name);
                outcome.written.push(out);
            }
            Err(e) => {
                loge!("Error writing {}: {e}", out.display());
                progress.item_failed(&name, &e.to_string());
                outcome.failed.push(path);
            }
        }
    }

    progress.finish();
    Ok(outcome)
}
