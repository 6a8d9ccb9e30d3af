// src/core/html.rs
use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Finds the first element matching a CSS selector and returns its text.
pub struct TextLocator {
    selector: Selector,
}

impl TextLocator {
    pub fn new(selector: &str) -> Result<Self> {
        let selector = Selector::parse(selector)
            .map_err(|e| Error::Selector(format!("{selector}: {e}")))?;
        Ok(Self { selector })
    }

    /// Concatenated descendant text of the first match, trimmed.
    /// `None` when nothing matches or the text is blank.
    pub fn text_in(&self, doc: &str) -> Option<String> {
        let html = Html::parse_document(doc);
        let el = html.select(&self.selector).next()?;
        let text: String = el.text().collect();
        let text = text.trim();
        if text.is_empty() { None } else { Some(s!(text)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_text_is_trimmed() {
        let loc = TextLocator::new("pre#list").unwrap();
        let doc = "<html><body><pre id=\"list\">\n  Deck\n3 | A &amp; B\n</pre>\
                   <pre id=\"list\">second</pre></body></html>";
        assert_eq!(loc.text_in(doc).as_deref(), Some("Deck\n3 | A & B"));
    }

    #[test]
    fn blank_or_missing_is_none() {
        let loc = TextLocator::new("pre#list").unwrap();
        assert_eq!(loc.text_in("<pre id=\"list\">   </pre>"), None);
        assert_eq!(loc.text_in("<p>nothing</p>"), None);
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(TextLocator::new("pre[[").err(), Some(Error::Selector(_))));
    }
}
