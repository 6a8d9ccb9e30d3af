// src/stages/fetch.rs
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use reqwest::blocking::Client;

use crate::{
    config::{FetchOptions, consts::PAGE_EXT},
    core::{net, sanitize},
    error::{Error, Result},
    file::{self, ensure_directory, resolve_unique_filename},
    progress::Progress,
};

#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub written: Vec<PathBuf>,
    pub failed: Vec<String>,
}

/// Trimmed, non-empty lines of the links file.
pub fn parse_links(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Download every URL in the links file into `pages_dir/<stem>.html`.
/// A failing URL is logged and skipped; a missing links file aborts.
pub fn run(opts: &FetchOptions, progress: &mut dyn Progress) -> Result<FetchOutcome> {
    if !opts.links.is_file() {
        return Err(Error::MissingInput(opts.links.clone()));
    }
    let links = parse_links(&file::read_text(&opts.links)?);
    logf!("Found {} links to process", links.len());

    ensure_directory(&opts.pages_dir)?;
    let client = net::client(&opts.user_agent, opts.timeout_secs)?;

    progress.begin(links.len());
    let mut outcome = FetchOutcome::default();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (i, url) in links.iter().enumerate() {
        logf!("Fetching: {url}");
        match fetch_one(&client, url, &opts.pages_dir, &mut seen) {
            Ok(path) => {
                logf!("Successfully saved: {}", path.display());
                progress.item_done(url);
                outcome.written.push(path);
            }
            Err(e) => {
                loge!("Error fetching {url}: {e}");
                progress.item_failed(url, &e.to_string());
                outcome.failed.push(url.clone());
            }
        }

        if i + 1 < links.len() && opts.pause_ms > 0 {
            thread::sleep(Duration::from_millis(opts.pause_ms));
        }
    }

    progress.finish();
    Ok(outcome)
}

fn fetch_one(
    client: &Client,
    url: &str,
    pages_dir: &Path,
    seen: &mut HashMap<String, usize>,
) -> Result<PathBuf> {
    let stem = sanitize::url_file_stem(url)?;
    let body = net::http_get(client, url)?;
    let path = resolve_unique_filename(pages_dir, &stem, seen, PAGE_EXT);
    file::write_text(&path, &body)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;

    #[test]
    fn links_are_trimmed_and_blank_lines_dropped() {
        let text = "https://a.example/deck/1\n\n  https://a.example/deck/2  \r\n\n";
        assert_eq!(
            parse_links(text),
            vec!["https://a.example/deck/1", "https://a.example/deck/2"]
        );
    }

    #[test]
    fn missing_links_file_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = FetchOptions {
            links: tmp.path().join("links.txt"),
            pages_dir: tmp.path().join("pages"),
            ..FetchOptions::default()
        };
        let err = run(&opts, &mut NullProgress).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
        assert!(!opts.pages_dir.exists());
    }

    #[test]
    fn bad_urls_are_skipped_without_network() {
        let tmp = tempfile::tempdir().unwrap();
        let links = tmp.path().join("links.txt");
        std::fs::write(&links, "not a url\n\nalso bad\n").unwrap();
        let opts = FetchOptions {
            links,
            pages_dir: tmp.path().join("pages"),
            pause_ms: 0,
            ..FetchOptions::default()
        };
        let outcome = run(&opts, &mut NullProgress).unwrap();
        assert!(outcome.written.is_empty());
        assert_eq!(outcome.failed, vec!["not a url", "also bad"]);
        assert!(opts.pages_dir.is_dir());
    }
}
