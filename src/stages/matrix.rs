// src/stages/matrix.rs
use std::path::PathBuf;

use crate::{
    config::{MatrixOptions, consts::DECKLIST_EXT},
    decklist,
    error::{Error, Result},
    file::{self, list_files_with_ext},
    progress::Progress,
    stats::{CorpusStats, Summary},
};

#[derive(Debug)]
pub struct MatrixOutcome {
    pub out_path: PathBuf,
    pub summary: Summary,
    /// Files that could not be read.
    pub skipped: Vec<PathBuf>,
}

/// Parse every decklist in `decklists_dir`, fold them into corpus statistics,
/// and write the card matrix CSV. Fails without writing anything when there
/// are no decklist files or none of them can be read.
pub fn run(opts: &MatrixOptions, progress: &mut dyn Progress) -> Result<MatrixOutcome> {
    let dir = &opts.decklists_dir;
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.clone()));
    }

    let files = list_files_with_ext(dir, DECKLIST_EXT)?;
    if files.is_empty() {
        return Err(Error::NoDecklists(dir.clone()));
    }
    logf!("Found {} decklist files to process", files.len());
    progress.begin(files.len());

    let mut stats = CorpusStats::new(opts.counting);
    let mut skipped = Vec::new();

    for path in files {
        let name = path.display().to_string();
        logd!("Processing: {name}");

        let text = match file::read_text(&path) {
            Ok(text) => text,
            Err(e) => {
                loge!("Error processing file {name}: {e}");
                progress.item_failed(&name, &e.to_string());
                skipped.push(path);
                continue;
            }
        };

        // Still a decklist: it counts toward the total like any other file.
        let deck = decklist::parse(&text);
        if deck.is_empty() {
            logw!("No cards recognised in {name}");
        }

        stats.fold(&deck);
        progress.item_done(&name);
    }
    progress.finish();

    if stats.total_decklists() == 0 {
        return Err(Error::NoDecklists(dir.clone()));
    }

    let summary = stats.finalize();
    let csv = summary.to_csv().map_err(|e| Error::io(opts.out_path.clone(), e))?;
    file::write_text(&opts.out_path, &csv)?;
    logf!("Matrix has been saved to: {}", opts.out_path.display());

    Ok(MatrixOutcome { out_path: opts.out_path.clone(), summary, skipped })
}
