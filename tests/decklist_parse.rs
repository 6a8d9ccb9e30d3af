// tests/decklist_parse.rs
use deck_matrix::decklist::{self, Card, Decklist, Section};

fn card(count: u32, name: &str, subtitle: Option<&str>) -> Card {
    Card { count, name: name.into(), subtitle: subtitle.map(String::from) }
}

#[test]
fn leaders_and_deck_with_duplicate_entries() {
    let d = decklist::parse("Leaders\n2 | Rey | Survivor\nDeck\n3 | Blaster\n1 | Blaster\n");

    assert_eq!(d.leaders, vec![card(2, "Rey", Some("Survivor"))]);
    assert!(d.base.is_empty());
    assert_eq!(d.deck, vec![card(3, "Blaster", None), card(1, "Blaster", None)]);
    assert!(d.sideboard.is_empty());
    assert_eq!(d.leaders[0].key(), "Rey | Survivor");
}

#[test]
fn parsing_is_idempotent() {
    let text = "Leaders\n1 | Han Solo | Worth the Risk\nBase\n1 | Tarkintown\n\
                Deck\n3 | Krayt Dragon\nSideboard\n2 | Bounty Hunter Crew\n";
    assert_eq!(decklist::parse(text), decklist::parse(text));
}

#[test]
fn lines_before_first_header_are_ignored() {
    let d = decklist::parse("3 | Orphan\n\nDeck\n1 | Kept\n");
    assert_eq!(d.deck, vec![card(1, "Kept", None)]);
    assert_eq!(d.len(), 1);
}

#[test]
fn headerless_or_empty_text_gives_empty_decklist() {
    assert_eq!(decklist::parse(""), Decklist::default());
    assert_eq!(decklist::parse("\n\n   \n"), Decklist::default());
    assert!(decklist::parse("3 | Krayt Dragon\n1 | Tarkintown\n").is_empty());
}

#[test]
fn malformed_entries_are_dropped_silently() {
    let text = "Deck\n\
                three | Krayt Dragon\n\
                3 Krayt Dragon\n\
                3|Krayt Dragon\n\
                0 | Nothing\n\
                2x | Suffixed\n\
                -1 | Negative\n\
                2 | Valid\n";
    let d = decklist::parse(text);
    assert_eq!(d.deck, vec![card(2, "Valid", None)]);
}

#[test]
fn headers_are_exact_and_case_sensitive() {
    let d = decklist::parse("deck\n1 | A\nDECK\n1 | B\n Deck \n1 | C\nDeck list\n1 | D\n");
    // " Deck " is trimmed to a header; "Deck list" is just an unparsable line.
    assert_eq!(d.deck, vec![card(1, "C", None), card(1, "D", None)]);
}

#[test]
fn sections_accumulate_across_repeated_headers() {
    let d = decklist::parse("Deck\n1 | A\nSideboard\n1 | S\nDeck\n2 | B\n");
    assert_eq!(d.deck, vec![card(1, "A", None), card(2, "B", None)]);
    assert_eq!(d.sideboard, vec![card(1, "S", None)]);
}

#[test]
fn crlf_input_is_accepted() {
    let d = decklist::parse("Base\r\n1 | Tarkintown\r\nSideboard\r\n2 | Cantina Bouncer\r\n");
    assert_eq!(d.base, vec![card(1, "Tarkintown", None)]);
    assert_eq!(d.sideboard, vec![card(2, "Cantina Bouncer", None)]);
}

#[test]
fn main_pool_is_leaders_base_deck_in_order() {
    let d = decklist::parse("Deck\n3 | D\nSideboard\n1 | S\nBase\n1 | B\nLeaders\n1 | L\n");
    let main: Vec<_> = d.main_pool().map(|c| c.name.as_str()).collect();
    let side: Vec<_> = d.sideboard_pool().map(|c| c.name.as_str()).collect();
    assert_eq!(main, vec!["L", "B", "D"]);
    assert_eq!(side, vec!["S"]);
    assert!(Section::Base.is_main());
    assert!(!Section::Sideboard.is_main());
}
