// Testy publicznego API anid-codec

use std::sync::Arc;
use std::thread;

use anid_codec::{BaseAlphabet, Codec, Schema, DEFAULT_BASE_ALPHABET, DEFAULT_SCHEMA};

const MIN_LENGTHS: [usize; 4] = [0, 1, 5, 10];

/// Wartości testowe: mały zakres, okolice granic podstaw i rozrzucone duże liczby.
fn sample_values() -> Vec<u64> {
    let mut values: Vec<u64> = (0..2048).collect();
    let mut power = 1u64;
    for radix in [32u64, 20, 32, 32, 32, 32, 20, 32, 32, 32, 32, 20, 32] {
        match power.checked_mul(radix) {
            Some(p) => {
                power = p;
                values.extend([p - 1, p, p + 1]);
            }
            None => break,
        }
    }
    let mut x = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..2000 {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        values.push(x);
        values.push(x >> 32);
    }
    values.extend([u64::MAX - 1, u64::MAX]);
    values
}

#[test]
fn round_trip_default_codec() {
    let codec = Codec::default();
    for v in sample_values() {
        for min_length in MIN_LENGTHS {
            let key = codec.encode(v, min_length);
            assert_eq!(codec.decode(&key), Some(v), "wartość {} klucz {}", v, key);
        }
    }
}

#[test]
fn keys_respect_min_length() {
    let codec = Codec::default();
    for v in sample_values() {
        for min_length in [0usize, 1, 2, 5, 10, 20] {
            let key = codec.encode(v, min_length);
            assert!(key.chars().count() >= min_length);
            assert!(!key.is_empty());
        }
    }
}

#[test]
fn padding_only_adds_characters_when_needed() {
    let codec = Codec::default();
    let unpadded = codec.encode(u64::MAX, 0);
    assert_eq!(codec.encode(u64::MAX, 5), unpadded);
    assert_eq!(codec.encode(u64::MAX, unpadded.len() + 3).len(), unpadded.len() + 3);
}

#[test]
fn encoding_is_deterministic() {
    let first = Codec::default();
    let second = Codec::new(Schema::from_rows(DEFAULT_SCHEMA).unwrap()).unwrap();
    for v in [0u64, 1, 12345, 987_654_321, u64::MAX] {
        let key = first.encode(v, 5);
        assert_eq!(first.encode(v, 5), key);
        assert_eq!(second.encode(v, 5), key);
        assert_eq!(second.decode(&key), Some(v));
    }
    assert_eq!(first.encode_default(12345), "pjZgf");
}

#[test]
fn sequential_values_do_not_look_sequential() {
    let codec = Codec::default();
    let keys: Vec<String> = (0..4).map(|v| codec.encode(v, 5)).collect();
    assert_eq!(keys, vec!["Wh2K6", "1r9dn", "qs0G1", "3zJCf"]);
}

#[test]
fn every_character_comes_from_its_row() {
    let codec = Codec::default();
    let schema = codec.schema();
    for v in sample_values().into_iter().step_by(7) {
        let key = codec.encode(v, 5);
        for (position, c) in key.chars().enumerate() {
            let row = schema.row(position % schema.len());
            assert!(row.index_of(c).is_some(), "znak '{}' spoza wiersza w {}", c, key);
        }
    }
}

#[test]
fn different_schema_gives_different_keys() {
    let default = Codec::default();
    let mut rows: Vec<String> = DEFAULT_SCHEMA.iter().map(|r| r.to_string()).collect();
    rows.swap(0, 2);
    let swapped = Codec::new(Schema::from_rows(&rows).unwrap()).unwrap();

    let mut differing = 0;
    let mut recovered = 0;
    for v in 0..500u64 {
        let key = default.encode(v, 5);
        if swapped.encode(v, 5) != key {
            differing += 1;
        }
        if swapped.decode(&key) == Some(v) {
            recovered += 1;
        }
    }
    assert!(differing > 450, "tylko {} różnych kluczy", differing);
    assert!(recovered < 50, "{} kluczy zdekodowanych poprawnie obcym schematem", recovered);

    // Klucz domyślnego schematu: 'p' z wiersza 0 nie należy do wiersza "H8YD5...".
    assert_eq!(swapped.decode("pjZgf"), None);
}

#[test]
fn different_base_alphabet_gives_different_keys() {
    let rotated: String = DEFAULT_BASE_ALPHABET
        .chars()
        .skip(1)
        .chain(DEFAULT_BASE_ALPHABET.chars().take(1))
        .collect();
    let other = Codec::with_base_alphabet(Schema::default(), BaseAlphabet::new(&rotated)).unwrap();
    let default = Codec::default();

    let key = default.encode(12345, 5);
    assert_ne!(other.encode(12345, 5), key);
    assert_ne!(other.decode(&key), Some(12345));
}

#[test]
fn invalid_characters_are_rejected() {
    let codec = Codec::default();
    for key in ["pjZg!", " pjZgf", "pjZ gf", "ąjZgf", "pp"] {
        assert_eq!(codec.decode(key), None, "klucz {:?}", key);
    }
}

#[test]
fn shared_codec_across_threads() {
    let codec = Arc::new(Codec::default());
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                for v in (t * 10_000)..(t * 10_000 + 2_000) {
                    let key = codec.encode(v, 6);
                    assert_eq!(codec.decode(&key), Some(v));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
