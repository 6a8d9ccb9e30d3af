// src/specs/decklist_page.rs
//! Scraping *spec* for deck pages.
//!
//! The deck page renders the list visually and also embeds the plain-text
//! export in `<pre class="d-none" id="decklist-swu-text">`. That hidden block
//! is the ground truth; the visual markup is ignored.

use crate::config::consts::DECKLIST_SELECTOR;
use crate::core::TextLocator;
use crate::error::Result;

pub struct DecklistPage {
    locator: TextLocator,
}

impl DecklistPage {
    pub fn new() -> Result<Self> {
        Self::with_selector(DECKLIST_SELECTOR)
    }

    /// Override the container selector (site layout changes, other sites).
    pub fn with_selector(selector: &str) -> Result<Self> {
        Ok(Self { locator: TextLocator::new(selector)? })
    }

    /// Trimmed decklist text, or `None` if the page has no (non-blank) block.
    pub fn extract(&self, html_doc: &str) -> Option<String> {
        self.locator.text_in(html_doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html><head><title>Deck</title></head>
<body>
  <div class="deck-visual"><span>3x Krayt Dragon</span></div>
  <pre class="d-none" id="decklist-swu-text">
Leaders
1 | Han Solo | Worth the Risk
Deck
3 | Krayt Dragon
  </pre>
</body></html>"#;

    #[test]
    fn extracts_hidden_block() {
        let page = DecklistPage::new().unwrap();
        let text = page.extract(PAGE).unwrap();
        assert!(text.starts_with("Leaders\n1 | Han Solo | Worth the Risk"));
        assert!(text.ends_with("3 | Krayt Dragon"));
    }

    #[test]
    fn requires_both_class_and_id() {
        let page = DecklistPage::new().unwrap();
        let doc = r#"<pre id="decklist-swu-text">Deck
1 | X</pre>"#;
        assert_eq!(page.extract(doc), None);
    }
}
