//! Differential tests: compare the encoder against reference golden output.
//!
//! `tests/differential/golden.tsv` holds one word per line followed by four
//! `primary|secondary` columns, one per configuration:
//! plain, exact, vowels, vowels+exact.
//!
//! Run: cargo test -p metaphone3 --test differential

use std::path::PathBuf;

use metaphone3::{EncodeOptions, Encoding, Metaphone3};

// ---------------------------------------------------------------------------
// Golden file loading
// ---------------------------------------------------------------------------

/// Column order of the golden file: (encode_vowels, encode_exact).
const CONFIGS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

struct GoldenRow {
    word: String,
    expected: [Encoding; 4],
}

fn parse_pair(field: &str) -> Encoding {
    let (primary, secondary) = field
        .split_once('|')
        .unwrap_or_else(|| panic!("malformed golden field {:?}", field));
    Encoding::new(primary, secondary)
}

fn load_golden() -> Vec<GoldenRow> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/differential/golden.tsv");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));

    contents
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 5, "golden line should have 5 fields: {:?}", line);
            GoldenRow {
                word: fields[0].to_string(),
                expected: [
                    parse_pair(fields[1]),
                    parse_pair(fields[2]),
                    parse_pair(fields[3]),
                    parse_pair(fields[4]),
                ],
            }
        })
        .collect()
}

fn config_name(config: (bool, bool)) -> &'static str {
    match config {
        (false, false) => "plain",
        (false, true) => "exact",
        (true, false) => "vowels",
        (true, true) => "vowels+exact",
    }
}

/// Encode every golden word under one configuration and collect mismatches.
fn run_config(rows: &[GoldenRow], column: usize) -> Vec<String> {
    let (vowels, exact) = CONFIGS[column];
    let mut encoder = Metaphone3::with_options(EncodeOptions::new(vowels, exact));
    let mut mismatches = Vec::new();

    for row in rows {
        let actual = encoder.encode_word(&row.word);
        let expected = &row.expected[column];
        if &actual != expected {
            mismatches.push(format!(
                "  [{}] expected={}|{}, got={}|{}",
                row.word, expected.primary, expected.secondary, actual.primary, actual.secondary
            ));
        }
    }

    mismatches
}

fn assert_config(column: usize) {
    let rows = load_golden();
    assert!(!rows.is_empty(), "golden file is empty");

    let name = config_name(CONFIGS[column]);
    let mismatches = run_config(&rows, column);

    if !mismatches.is_empty() {
        eprintln!("\n=== {} MISMATCHES: {}/{} ===", name, mismatches.len(), rows.len());
        for m in &mismatches {
            eprintln!("{}", m);
        }
        eprintln!("=== END {} MISMATCHES ===\n", name);
    }

    assert!(
        mismatches.is_empty(),
        "{}: {}/{} mismatches (see stderr for details)",
        name,
        mismatches.len(),
        rows.len()
    );
}

// ===========================================================================
// Tests
// ===========================================================================

#[test]
fn differential_plain() {
    assert_config(0);
}

#[test]
fn differential_exact() {
    assert_config(1);
}

#[test]
fn differential_vowels() {
    assert_config(2);
}

#[test]
fn differential_vowels_exact() {
    assert_config(3);
}

/// Reusing one encoder across configurations must not leak state.
#[test]
fn differential_reconfigured_encoder() {
    let rows = load_golden();
    let mut encoder = Metaphone3::new();
    let mut mismatches = Vec::new();

    for row in rows.iter().take(50) {
        for (column, &(vowels, exact)) in CONFIGS.iter().enumerate() {
            encoder.set_encode_vowels(vowels);
            encoder.set_encode_exact(exact);
            let actual = encoder.encode_word(&row.word);
            if actual != row.expected[column] {
                mismatches.push(format!("  [{}] {}", row.word, config_name((vowels, exact))));
            }
        }
    }

    assert!(mismatches.is_empty(), "reconfigured encoder mismatches:\n{}", mismatches.join("\n"));
}
