// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end editing scenarios for [`PieceTable`], plus a randomized run that checks
//! every edit against a plain `Vec<char>` model.

use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use test_case::test_case;

use crate::{CharIndex, CharLength, PieceTable, PieceTableError, ch_len};

/// Route `tracing` output to the test harness, so that it shows up for failing tests.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn assert_consistent(doc: &PieceTable) {
    doc.validate().unwrap();
    assert_eq!(doc.to_string().chars().count(), doc.len().as_usize());
    assert!(doc.pieces().iter().all(|piece| !piece.length().is_zero()));
}

#[test_case("" ; "empty")]
#[test_case("abc" ; "ascii")]
#[test_case("héllo wörld 😀" ; "multi byte")]
fn test_round_trip(text: &str) {
    let doc = PieceTable::new(text);
    assert_eq!(doc.to_string(), text);
    assert_consistent(&doc);
}

#[test]
fn test_append_ordering() {
    let mut doc = PieceTable::new("");
    doc.append("a").append("b");
    assert_eq!(doc.to_string(), "ab");
}

#[test]
fn test_insert_scenarios() {
    init_tracing();

    assert_eq!(PieceTable::new("abc").insert("xyz ", 0).to_string(), "xyz abc");
    assert_eq!(PieceTable::new("abc").insert(" xyz", 3).to_string(), "abc xyz");
    assert_eq!(
        PieceTable::new("abc def").insert("xyz ", 4).to_string(),
        "abc xyz def"
    );
    assert_eq!(
        PieceTable::new("")
            .insert("abc", 0)
            .insert(" ghi", 3)
            .insert(" def", 3)
            .to_string(),
        "abc def ghi"
    );
}

#[test]
fn test_delete_scenarios() {
    init_tracing();

    assert_eq!(PieceTable::new("abc").delete_char(100).to_string(), "abc");
    assert_eq!(PieceTable::new("abc").delete_char(0).to_string(), "bc");
    assert_eq!(PieceTable::new("abc").delete_char(2).to_string(), "ab");
    assert_eq!(PieceTable::new("abc").delete_char(1).to_string(), "ac");
    assert_eq!(
        PieceTable::new("abc").delete_char(1).delete_char(1).to_string(),
        "a"
    );
    assert_eq!(
        PieceTable::new("abc").insert(" xyz", 3).delete(1, 5).to_string(),
        "az"
    );
}

#[test]
fn test_signed_offsets_are_checked() {
    let mut doc = PieceTable::new("abc");

    let index = CharIndex::try_from(1_i64).unwrap();
    let length = CharLength::try_from(1_i64).unwrap();
    doc.delete(index, length);
    assert_eq!(doc.to_string(), "ac");

    assert_eq!(
        CharIndex::try_from(-1_i64),
        Err(PieceTableError::NegativeIndex { value: -1 })
    );
    assert_eq!(doc.to_string(), "ac");
}

#[test]
fn test_read_is_idempotent() {
    let mut doc = PieceTable::new("abc");
    doc.insert("xyz", 1).delete_char(0);
    let pieces = doc.pieces().to_vec();
    assert_eq!(doc.to_string(), doc.to_string());
    assert_eq!(doc.pieces(), pieces.as_slice());
}

/// One random edit, applied to both the document and the model.
fn random_edit(rng: &mut StdRng, doc: &mut PieceTable, model: &mut Vec<char>) {
    const ALPHABET: &[char] = &['a', 'b', 'c', ' ', 'é', '😀', '\n'];

    let random_text = |rng: &mut StdRng| -> String {
        let len = rng.random_range(0..=4);
        (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
            .collect()
    };

    // Offsets may land past the end on purpose.
    let index = rng.random_range(0..=model.len() + 2);

    match rng.random_range(0..4) {
        0 => {
            let text = random_text(rng);
            doc.append(&text);
            model.extend(text.chars());
        }
        1 => {
            let text = random_text(rng);
            doc.insert(&text, index);
            let at = index.min(model.len());
            for (offset, ch) in text.chars().enumerate() {
                model.insert(at + offset, ch);
            }
        }
        2 => {
            doc.delete_char(index);
            if index < model.len() {
                model.remove(index);
            }
        }
        _ => {
            let length = rng.random_range(0..=5);
            doc.delete(index, length);
            if index < model.len() {
                let end = (index + length).min(model.len());
                model.drain(index..end);
            }
        }
    }
}

#[test_case(1 ; "seed 1")]
#[test_case(42 ; "seed 42")]
#[test_case(2025 ; "seed 2025")]
fn test_random_edits_match_model(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut doc = PieceTable::new("the quick brown fox");
    let mut model: Vec<char> = "the quick brown fox".chars().collect();

    for step in 0..500 {
        random_edit(&mut rng, &mut doc, &mut model);

        let expected: String = model.iter().collect();
        assert_eq!(doc.to_string(), expected, "diverged at step {step}");
        assert_eq!(doc.len(), ch_len(model.len()));
        assert_consistent(&doc);
    }
}
