//! CLI integration tests for pron and pron-test.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn pron() -> Command {
    let mut cmd = Command::cargo_bin("pron").unwrap();
    cmd.env_remove("PRON_CONFIG");
    cmd
}

fn pron_test() -> Command {
    Command::cargo_bin("pron-test").unwrap()
}

/// A fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pron-cli-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================================
// Argument handling
// ============================================================================

#[test]
fn test_help() {
    pron()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Metaphone 3"));
}

#[test]
fn test_requires_one_input() {
    pron()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Need exactly one of -w, -p, -i, -I."));

    pron()
        .args(["-w", "smith", "-p", "john smith"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Need exactly one of"));
}

#[test]
fn test_missing_file() {
    pron()
        .args(["-i", "/nonexistent/words.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to read"));
}

#[test]
fn test_key_length_too_large() {
    pron()
        .args(["-w", "smith", "-l", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key length"));
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_word() {
    pron()
        .args(["-w", "smith"])
        .assert()
        .success()
        .stdout("smith  SM0  XMT\n");
}

#[test]
fn test_word_vowels_exact() {
    pron()
        .args(["-w", "Guillermo", "-v", "-e"])
        .assert()
        .success()
        .stdout("Guillermo  GARMA\n");
}

#[test]
fn test_phrase_csv() {
    pron()
        .args(["-p", "Nicolas Gaydier", "-f", "csv"])
        .assert()
        .success()
        .stdout("Nicolas Gaydier;NKLS KTR;\n");
}

#[test]
fn test_format_is_case_insensitive() {
    pron()
        .args(["-w", "knight", "-f", "CSV"])
        .assert()
        .success()
        .stdout("knight;NT;\n");
}

#[test]
fn test_key_length() {
    pron()
        .args(["-w", "schwarzenegger", "-l", "4", "-f", "csv"])
        .assert()
        .success()
        .stdout("schwarzenegger;XRTS;XFRT\n");
}

#[test]
fn test_infile_skips_blank_lines() {
    let dir = scratch_dir("infile");
    let file = dir.join("words.txt");
    std::fs::write(&file, "smith\n\n  knight  \n").unwrap();

    pron()
        .arg("-i")
        .arg(&file)
        .args(["-f", "csv"])
        .assert()
        .success()
        .stdout("smith;SM0;XMT\nknight;NT;\n");
}

#[test]
fn test_indir_reads_txt_files() {
    let dir = scratch_dir("indir");
    std::fs::create_dir_all(dir.join("sub")).unwrap();
    std::fs::write(dir.join("a.txt"), "smith\n").unwrap();
    std::fs::write(dir.join("sub").join("b.TXT"), "knight\n").unwrap();
    std::fs::write(dir.join("c.csv"), "iron\n").unwrap();

    pron()
        .arg("-I")
        .arg(&dir)
        .args(["-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smith;SM0;XMT"))
        .stdout(predicate::str::contains("knight;NT;"))
        .stdout(predicate::str::contains("iron").not());
}

#[test]
fn test_collisions() {
    let dir = scratch_dir("collisions");
    let file = dir.join("names.txt");
    std::fs::write(&file, "smith\nsmyth\nschmidt\n").unwrap();

    pron()
        .arg("-i")
        .arg(&file)
        .arg("-c")
        .assert()
        .success()
        .stdout(predicate::str::contains("Collisions primary"))
        .stdout(predicate::str::contains("Metapron3: SM0"))
        .stdout(predicate::str::contains("Metapron3: XMT"))
        .stdout(predicate::str::contains("  schmidt, XMT, "))
        .stdout(predicate::str::contains("Number of collisions: 1"))
        .stdout(predicate::str::contains("Number of collisions: 2"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file() {
    let dir = scratch_dir("config");
    let config = dir.join("pron.toml");
    std::fs::write(&config, "encode_vowels = true\n").unwrap();

    pron()
        .args(["-w", "smith", "-f", "csv", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("smith;SMA0;XMAT\n");
}

#[test]
fn test_config_from_env() {
    let dir = scratch_dir("config-env");
    let config = dir.join("pron.toml");
    std::fs::write(&config, "encode_exact = true\n").unwrap();

    pron()
        .env("PRON_CONFIG", &config)
        .args(["-w", "Guillermo", "-f", "csv"])
        .assert()
        .success()
        .stdout("Guillermo;GRM;\n");
}

#[test]
fn test_invalid_config() {
    let dir = scratch_dir("config-bad");
    let config = dir.join("pron.toml");
    std::fs::write(&config, "encode_vowels = \"yes\"\n").unwrap();

    pron()
        .args(["-w", "smith", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

// ============================================================================
// pron-test
// ============================================================================

#[test]
fn test_regression_list() {
    pron_test()
        .assert()
        .success()
        .stdout(predicate::str::contains("Input iron\nBest  ARN\nAlt   \n"))
        .stdout(predicate::str::contains("Input Guillermo\nBest  GARMA\n"))
        .stdout(predicate::str::contains("Input Nicolas Gaydier\nBest  NAKALAS GADAR\n"));
}

#[test]
fn test_regression_file() {
    let dir = scratch_dir("regression");
    let file = dir.join("list.txt");
    std::fs::write(&file, "witz\n").unwrap();

    pron_test()
        .arg(&file)
        .assert()
        .success()
        .stdout("Input witz\nBest  ATS\nAlt   FAX\n\n");
}
