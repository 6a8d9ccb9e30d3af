// src/core/sanitize.rs
use std::path::Path;

use url::Url;

use crate::config::consts::FALLBACK_PAGE_STEM;
use crate::error::{Error, Result};

/// File stem for a fetched page: the last non-empty path segment of the URL,
/// or `index` for bare hosts.
pub fn url_file_stem(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|source| Error::InvalidUrl { url: s!(raw), source })?;

    let last = url
        .path_segments()
        .and_then(|segs| segs.filter(|s| !s.is_empty()).last())
        .map(sanitize_filename)
        .filter(|s| !s.is_empty());

    Ok(last.unwrap_or_else(|| s!(FALLBACK_PAGE_STEM)))
}

/// Replace characters that are not allowed in file names on common platforms.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

/// File name without extension, lossy.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_from_last_segment() {
        assert_eq!(url_file_stem("https://swudb.com/deck/AbCdEf123").unwrap(), "AbCdEf123");
        assert_eq!(url_file_stem("https://swudb.com/deck/AbCdEf123/").unwrap(), "AbCdEf123");
        assert_eq!(url_file_stem("https://swudb.com/deck/x?tab=list").unwrap(), "x");
    }

    #[test]
    fn bare_host_falls_back_to_index() {
        assert_eq!(url_file_stem("https://swudb.com").unwrap(), "index");
        assert_eq!(url_file_stem("https://swudb.com/").unwrap(), "index");
    }

    #[test]
    fn garbage_url_is_rejected() {
        assert!(matches!(url_file_stem("not a url"), Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn unsafe_chars_replaced() {
        assert_eq!(sanitize_filename("a:b*c"), "a_b_c");
        assert_eq!(sanitize_filename(".."), "");
    }
}
