//! # Page specs
//!
//! A spec knows *where the ground truth lives in a page's HTML* and how to get
//! it out. It does not fetch, cache or write anything; the stages decide when
//! to read which page and what to do with the result.
//!
//! ## Current specs
//! - `decklist_page` – the hidden `<pre>` on a deck page that carries the
//!   plain-text export of the decklist.
//!
//! ## Testing notes
//! Specs are testable offline against saved HTML.
pub mod decklist_page;
