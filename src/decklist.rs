// src/decklist.rs
//! Plain-text decklist format.
//!
//! ```text
//! Leaders
//! 1 | Han Solo | Worth the Risk
//! Base
//! 1 | Tarkintown
//! Deck
//! 3 | Krayt Dragon
//! Sideboard
//! 2 | Bounty Hunter Crew
//! ```
//!
//! A header line switches the current section; every other non-blank line is
//! a card entry `count | name [| subtitle]`. Parsing is lenient: anything that
//! does not look like a card is dropped, so `parse` never fails.

use std::fmt;

/// Field separator inside a card entry.
pub const FIELD_SEP: &str = " | ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub count: u32,
    pub name: String,
    pub subtitle: Option<String>,
}

impl Card {
    /// Aggregation key: `name`, or `name | subtitle` when a subtitle is present.
    pub fn key(&self) -> String {
        match &self.subtitle {
            Some(sub) => join!(&self.name, FIELD_SEP, sub),
            None => self.name.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Leaders,
    Base,
    Deck,
    Sideboard,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Leaders, Section::Base, Section::Deck, Section::Sideboard];

    /// Exact, case-sensitive header match.
    pub fn from_header(line: &str) -> Option<Self> {
        match line {
            "Leaders" => Some(Section::Leaders),
            "Base" => Some(Section::Base),
            "Deck" => Some(Section::Deck),
            "Sideboard" => Some(Section::Sideboard),
            _ => None,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Section::Leaders => "Leaders",
            Section::Base => "Base",
            Section::Deck => "Deck",
            Section::Sideboard => "Sideboard",
        }
    }

    /// Leaders, base and deck make up the main-deck pool.
    pub fn is_main(self) -> bool {
        !matches!(self, Section::Sideboard)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decklist {
    pub leaders: Vec<Card>,
    pub base: Vec<Card>,
    pub deck: Vec<Card>,
    pub sideboard: Vec<Card>,
}

impl Decklist {
    pub fn section(&self, section: Section) -> &[Card] {
        match section {
            Section::Leaders => &self.leaders,
            Section::Base => &self.base,
            Section::Deck => &self.deck,
            Section::Sideboard => &self.sideboard,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<Card> {
        match section {
            Section::Leaders => &mut self.leaders,
            Section::Base => &mut self.base,
            Section::Deck => &mut self.deck,
            Section::Sideboard => &mut self.sideboard,
        }
    }

    /// Leaders, then base, then deck, in file order.
    pub fn main_pool(&self) -> impl Iterator<Item = &Card> {
        self.leaders.iter().chain(&self.base).chain(&self.deck)
    }

    pub fn sideboard_pool(&self) -> impl Iterator<Item = &Card> {
        self.sideboard.iter()
    }

    /// Total number of card entries across all sections.
    pub fn len(&self) -> usize {
        Section::ALL.iter().map(|s| self.section(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How a single trimmed line reads.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Header(Section),
    Card(Card),
    Skip,
}

fn classify(line: &str) -> Line {
    if line.is_empty() {
        return Line::Skip;
    }
    if let Some(section) = Section::from_header(line) {
        return Line::Header(section);
    }
    match parse_card(line) {
        Some(card) => Line::Card(card),
        None => Line::Skip,
    }
}

/// `count | name [| subtitle]`. Fields past the subtitle are ignored.
fn parse_card(line: &str) -> Option<Card> {
    let mut fields = line.split(FIELD_SEP);
    let count_field = fields.next()?;
    let name = fields.next()?;

    // Whole field must be a positive integer; `2x` or `-1` drop the line.
    let count: u32 = count_field.trim().parse().ok()?;
    if count == 0 {
        return None;
    }

    let subtitle = fields
        .next()
        .filter(|s| !s.is_empty())
        .map(String::from);

    Some(Card { count, name: s!(name), subtitle })
}

/// Parse one decklist. Lines before the first header, blank lines and
/// malformed card entries are skipped.
pub fn parse(text: &str) -> Decklist {
    let mut decklist = Decklist::default();
    let mut current: Option<Section> = None;

    for raw in text.split('\n') {
        match classify(raw.trim()) {
            Line::Header(section) => current = Some(section),
            Line::Card(card) => {
                if let Some(section) = current {
                    decklist.section_mut(section).push(card);
                }
            }
            Line::Skip => {}
        }
    }

    decklist
}
