use pretty_assertions::assert_eq;

use super::*;

#[test]
fn ascii_positions() {
    let chars = Chars::new("test");
    assert_eq!(chars.len(), 4);
    assert_eq!(chars.at(0), 't');
    assert_eq!(chars.at(1), 'e');
    assert_eq!(chars.at(3), 't');
}

#[test]
fn positions_are_characters_not_bytes() {
    let chars = Chars::from("café");
    assert_eq!(chars.len(), 4);
    assert_eq!(chars.at(3), 'é');
}

#[test]
fn empty_string_is_empty_sequence() {
    let chars = Chars::default();
    assert!(chars.is_empty());
    assert_eq!(chars, Chars::new(""));
}

#[test]
fn display_rebuilds_the_string() {
    let chars = Chars::from(String::from("python"));
    assert_eq!(chars.to_string(), "python");
    assert_eq!(chars.into_string(), "python");
}

#[test]
fn collects_from_char_iterator() {
    let chars: Chars = "abc".chars().rev().collect();
    assert_eq!(chars.as_slice(), &['c', 'b', 'a']);
}

#[test]
fn debug_shows_text_and_length() {
    assert_eq!(format!("{:?}", Chars::new("rev")), "Chars(\"rev\", len=3)");
}
