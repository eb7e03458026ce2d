//! Behavioural properties of the encoder that hold for any input.

use metaphone3::{EncodeOptions, Encoding, MAX_KEY_LENGTH, Metaphone3};

const WORDS: &[&str] = &[
    "",
    "a",
    "ae",
    "iron",
    "ironic",
    "knight",
    "wright",
    "smith",
    "schmidt",
    "guillermo",
    "goggle",
    "table",
    "schwarzenegger",
    "constantinople",
    "xxxxxxxxxxxxxxxxxxxxxxxxxxxx",
    "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
    "wiewiorowski",
    "hexagonality",
    "o'brien",
    "jean-luc",
    "Nicolas Gaydier",
    "Ærøskøbing",
    "Müller",
    "Çağlar",
];

fn all_options() -> Vec<EncodeOptions> {
    let mut out = Vec::new();
    for vowels in [false, true] {
        for exact in [false, true] {
            for key_length in [1, 4, 8, MAX_KEY_LENGTH] {
                out.push(EncodeOptions {
                    encode_vowels: vowels,
                    encode_exact: exact,
                    key_length,
                });
            }
        }
    }
    out
}

fn encode_with(options: EncodeOptions, word: &str) -> Encoding {
    Metaphone3::with_options(options).encode_word(word)
}

// -- termination and bounded output --

#[test]
fn keys_never_exceed_key_length() {
    for options in all_options() {
        for word in WORDS {
            let e = encode_with(options, word);
            assert!(
                e.primary.chars().count() <= options.key_length,
                "{:?} {:?}: primary {:?} too long",
                options,
                word,
                e.primary
            );
            assert!(
                e.secondary.chars().count() <= options.key_length,
                "{:?} {:?}: secondary {:?} too long",
                options,
                word,
                e.secondary
            );
        }
    }
}

#[test]
fn long_input_terminates() {
    let word = "abcdefghijklmnopqrstuvwxyz".repeat(40);
    let mut m = Metaphone3::new();
    m.set_key_length(MAX_KEY_LENGTH).unwrap();
    let e = m.encode_word(&word);
    assert_eq!(e.primary.chars().count(), MAX_KEY_LENGTH);
}

// -- no duplicate pair --

#[test]
fn secondary_differs_from_primary() {
    for options in all_options() {
        for word in WORDS {
            let e = encode_with(options, word);
            if !e.secondary.is_empty() {
                assert_ne!(e.primary, e.secondary, "{:?} {:?}", options, word);
            }
        }
    }
}

// -- idempotence and state reset --

#[test]
fn repeated_encoding_is_stable() {
    let mut m = Metaphone3::with_options(EncodeOptions::new(true, true));
    for word in WORDS {
        let first = m.encode_word(word);
        let second = m.encode_word(word);
        assert_eq!(first, second, "{:?}", word);
    }
}

#[test]
fn reuse_matches_fresh_encoder() {
    let options = EncodeOptions::new(true, false);
    let mut reused = Metaphone3::with_options(options);
    for word in WORDS {
        assert_eq!(reused.encode_word(word), encode_with(options, word), "{:?}", word);
    }
}

/// The -LE transposition must not carry over into the next word.
#[test]
fn inversion_does_not_leak_between_words() {
    let mut m = Metaphone3::with_options(EncodeOptions::new(true, false));
    assert_eq!(m.encode_word("goggle").primary, "KAKAL");
    assert_eq!(m.encode_word("ae").primary, "A");
    assert_eq!(m.encode_word("table").primary, "TAPAL");
    assert_eq!(m.encode_word("ironic").primary, "ARANAK");
}

// -- empty input --

#[test]
fn empty_input_gives_empty_keys() {
    for options in all_options() {
        assert_eq!(encode_with(options, ""), Encoding::default());
    }
}

// -- case insensitivity --

#[test]
fn case_is_ignored() {
    for options in all_options() {
        for word in WORDS {
            let lower = encode_with(options, &word.to_lowercase());
            let upper = encode_with(options, &word.to_uppercase());
            assert_eq!(lower, upper, "{:?} {:?}", options, word);
        }
    }
    let mut m = Metaphone3::new();
    assert_eq!(m.encode_word("SmItH"), m.encode_word("smith"));
}

// -- known words --

#[test]
fn known_words_default() {
    let mut m = Metaphone3::new();
    assert_eq!(m.encode_word("Guillermo"), Encoding::new("KRM", ""));
    assert_eq!(m.encode_word("knight"), Encoding::new("NT", ""));
    assert_eq!(m.encode_word("wright"), Encoding::new("RT", ""));
    assert_eq!(m.encode_word("smith"), Encoding::new("SM0", "XMT"));
    assert_eq!(m.encode_word("iron"), Encoding::new("ARN", ""));
    assert_eq!(m.encode_word("ironic"), Encoding::new("ARNK", ""));
}

#[test]
fn known_words_vowels_and_exact() {
    let mut m = Metaphone3::with_options(EncodeOptions::new(true, true));
    assert_eq!(m.encode_word("Guillermo"), Encoding::new("GARMA", ""));
    assert_eq!(m.encode_word("knight"), Encoding::new("NAT", ""));
    assert_eq!(m.encode_word("smith"), Encoding::new("SMA0", "XMAT"));
    assert_eq!(m.encode_word("iron"), Encoding::new("ARN", ""));
    assert_eq!(m.encode_word("ironic"), Encoding::new("ARANAK", ""));
}

#[test]
fn vowel_flag_toggles() {
    let mut m = Metaphone3::new();
    assert_eq!(m.encode_word("table").primary, "TPL");
    m.set_encode_vowels(true);
    assert_eq!(m.encode_word("table").primary, "TAPAL");
    m.set_encode_exact(true);
    assert_eq!(m.encode_word("table").primary, "TABAL");
    m.set_encode_vowels(false);
    assert_eq!(m.encode_word("table").primary, "TBL");
}

#[test]
fn key_length_truncates() {
    let mut m = Metaphone3::new();
    m.set_key_length(4).unwrap();
    assert_eq!(m.encode_word("schwarzenegger"), Encoding::new("XRTS", "XFRT"));
    m.set_key_length(MAX_KEY_LENGTH).unwrap();
    m.set_encode_vowels(true);
    assert_eq!(
        m.encode_word("schwarzenegger"),
        Encoding::new("XARTSANAKAR", "XFARTSANAKAR")
    );
}

#[test]
fn oversized_key_length_is_clamped() {
    let mut m = Metaphone3::new();
    assert!(m.set_key_length(MAX_KEY_LENGTH + 1).is_err());
    assert_eq!(m.key_length(), MAX_KEY_LENGTH);
}
