use std::collections::HashMap;

use rand::{rngs::StdRng, SeedableRng};

use crate::captions::CaptionDeck;

#[test]
fn empty_or_blank_source_disables_the_deck() {
    assert_eq!(CaptionDeck::parse(""), None);
    assert_eq!(CaptionDeck::parse("   "), None);
    assert_eq!(CaptionDeck::parse("| | |"), None);
}

#[test]
fn splits_captions_on_pipes_and_keeps_order() {
    let deck = CaptionDeck::parse("first|second|third").expect("deck");
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.captions(), ["first", "second", "third"]);
}

#[test]
fn newline_markers_become_real_line_breaks() {
    let deck = CaptionDeck::parse("line one\\nline two\\n——track").expect("deck");
    assert_eq!(deck.captions()[0], "line one\nline two\n——track");
}

#[test]
fn real_newlines_in_the_source_survive_parsing() {
    let deck = CaptionDeck::parse("line one\nline two|other").expect("deck");
    assert_eq!(deck.captions()[0], "line one\nline two");
    assert_eq!(deck.captions()[1], "other");
}

#[test]
fn selection_is_roughly_uniform_over_many_hovers() {
    let deck = CaptionDeck::parse("a|b|c|d").expect("deck");
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let trials = 4000;

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for _ in 0..trials {
        *counts.entry(deck.pick(&mut rng)).or_default() += 1;
    }

    assert_eq!(counts.len(), deck.len());
    let expected = trials / deck.len() as u32;
    for (caption, count) in counts {
        assert!(
            count.abs_diff(expected) < expected / 4,
            "caption {caption:?} picked {count} times, expected about {expected}"
        );
    }
}

#[test]
fn repeated_picks_do_not_mutate_the_deck() {
    let deck = CaptionDeck::parse("a|b").expect("deck");
    let before = deck.clone();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10 {
        deck.pick(&mut rng);
    }
    assert_eq!(deck, before);
}
