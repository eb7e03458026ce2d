// metaphone3-cli: shared utilities for the pron tools.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process;

use metaphone3::{EncodeError, EncodeOptions, Encoding, Metaphone3};

/// Environment variable naming a TOML options file.
pub const CONFIG_ENV: &str = "PRON_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Need exactly one of -w, -p, -i, -I.")]
    NoInput,
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Load encoder options from `config`, or from the file named by
/// `PRON_CONFIG` when no path is given. Without either, the defaults.
pub fn load_options(config: Option<&Path>) -> Result<EncodeOptions, CliError> {
    let path = match config {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::var_os(CONFIG_ENV).map(PathBuf::from),
    };
    let Some(path) = path else {
        return Ok(EncodeOptions::default());
    };

    let text = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("options from {}", path.display());
    parse_options(&text).map_err(|source| CliError::Config { path, source })
}

pub fn parse_options(text: &str) -> Result<EncodeOptions, toml::de::Error> {
    toml::from_str(text)
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Read one word or phrase per line. Lines are trimmed and empty lines skipped.
pub fn read_word_file(path: &Path) -> Result<Vec<String>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("read {}", path.display());
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// All `.txt` files below `dir` (extension compared case-insensitively),
/// sorted by path.
pub fn collect_txt_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    walk(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("skipping entry in {}: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Words from every `.txt` file below `dir`. Unreadable files are skipped
/// with a warning.
pub fn read_word_dir(dir: &Path) -> Result<Vec<String>, CliError> {
    let mut words = Vec::new();
    for file in collect_txt_files(dir)? {
        match read_word_file(&file) {
            Ok(w) => words.extend(w),
            Err(e) => log::warn!("{e}"),
        }
    }
    Ok(words)
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Txt,
    Csv,
}

/// An input line with its keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub encoding: Encoding,
}

/// Encode each input as a phrase, so multi-word lines get one key per word.
pub fn encode_entries(encoder: &mut Metaphone3, words: &[String]) -> Vec<Entry> {
    words
        .iter()
        .map(|w| Entry {
            word: w.clone(),
            encoding: encoder.encode_phrase(w),
        })
        .collect()
}

pub fn format_entries(entries: &[Entry], format: Format) -> String {
    let mut out = String::new();
    match format {
        Format::Txt => {
            let word_width = entries.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);
            let key_width = entries
                .iter()
                .map(|e| e.encoding.primary.len())
                .max()
                .unwrap_or(0);
            for e in entries {
                let line = format!(
                    "{:<ww$}  {:<kw$}  {}",
                    e.word,
                    e.encoding.primary,
                    e.encoding.secondary,
                    ww = word_width,
                    kw = key_width,
                );
                let _ = writeln!(out, "{}", line.trim_end());
            }
        }
        Format::Csv => {
            for e in entries {
                let _ = writeln!(
                    out,
                    "{};{};{}",
                    e.word, e.encoding.primary, e.encoding.secondary
                );
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Collisions
// ---------------------------------------------------------------------------

/// Codes shared by more than one distinct word, each with the indices of
/// those words into the entry list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Collisions {
    pub primary: Vec<(String, Vec<usize>)>,
    pub with_alt: Vec<(String, Vec<usize>)>,
}

pub fn find_collisions(entries: &[Entry]) -> Collisions {
    let mut by_primary: hashbrown::HashMap<&str, Vec<usize>> = hashbrown::HashMap::new();
    let mut by_any: hashbrown::HashMap<&str, Vec<usize>> = hashbrown::HashMap::new();
    let mut seen: hashbrown::HashSet<&str> = hashbrown::HashSet::new();

    for (i, e) in entries.iter().enumerate() {
        if !seen.insert(e.word.as_str()) {
            continue;
        }
        by_primary.entry(e.encoding.primary.as_str()).or_default().push(i);
        for key in e.encoding.keys() {
            by_any.entry(key).or_default().push(i);
        }
    }

    Collisions {
        primary: shared_codes(by_primary),
        with_alt: shared_codes(by_any),
    }
}

fn shared_codes(map: hashbrown::HashMap<&str, Vec<usize>>) -> Vec<(String, Vec<usize>)> {
    let mut out: Vec<(String, Vec<usize>)> = map
        .into_iter()
        .filter(|(code, words)| !code.is_empty() && words.len() > 1)
        .map(|(code, words)| (code.to_string(), words))
        .collect();
    out.sort();
    out
}

pub fn format_collisions(entries: &[Entry], collisions: &Collisions) -> String {
    let mut out = String::new();
    format_section(&mut out, "Collisions primary", entries, &collisions.primary);
    format_section(&mut out, "Collisions with alt", entries, &collisions.with_alt);
    out
}

fn format_section(
    out: &mut String,
    heading: &str,
    entries: &[Entry],
    section: &[(String, Vec<usize>)],
) {
    let _ = write!(out, "{heading}\n\n");
    for (code, indices) in section {
        let _ = writeln!(out, "Metapron3: {code}");
        for &i in indices {
            let e = &entries[i];
            let _ = writeln!(
                out,
                "  {}, {}, {}",
                e.word, e.encoding.primary, e.encoding.secondary
            );
        }
    }
    let _ = write!(out, "\nNumber of collisions: {}\n\n", section.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[&str]) -> Vec<Entry> {
        let mut m = Metaphone3::new();
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        encode_entries(&mut m, &words)
    }

    // -- options --

    #[test]
    fn partial_config() {
        let opts = parse_options("encode_vowels = true\nkey_length = 12").unwrap();
        assert!(opts.encode_vowels);
        assert!(!opts.encode_exact);
        assert_eq!(opts.key_length, 12);
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(parse_options("encode_vowels = 3").is_err());
    }

    #[test]
    fn missing_config_file() {
        let err = load_options(Some(Path::new("/nonexistent/pron.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    // -- formatting --

    #[test]
    fn csv_lines() {
        let out = format_entries(&entries(&["smith", "knight"]), Format::Csv);
        assert_eq!(out, "smith;SM0;XMT\nknight;NT;\n");
    }

    #[test]
    fn txt_columns_align() {
        let out = format_entries(&entries(&["smith", "knight"]), Format::Txt);
        assert_eq!(out, "smith   SM0  XMT\nknight  NT\n");
    }

    #[test]
    fn phrase_lines() {
        let out = format_entries(&entries(&["Nicolas Gaydier"]), Format::Csv);
        assert_eq!(out, "Nicolas Gaydier;NKLS KTR;\n");
    }

    // -- collisions --

    #[test]
    fn collisions_by_code() {
        let list = entries(&["smith", "smyth", "schmidt", "knight", "night", "smith"]);
        let c = find_collisions(&list);
        assert_eq!(
            c.primary,
            vec![
                ("NT".to_string(), vec![3, 4]),
                ("SM0".to_string(), vec![0, 1]),
            ]
        );
        assert_eq!(
            c.with_alt,
            vec![
                ("NT".to_string(), vec![3, 4]),
                ("SM0".to_string(), vec![0, 1]),
                ("XMT".to_string(), vec![0, 1, 2]),
            ]
        );
    }

    #[test]
    fn collision_report_text() {
        let list = entries(&["knight", "night"]);
        let report = format_collisions(&list, &find_collisions(&list));
        assert!(report.starts_with("Collisions primary\n\nMetapron3: NT\n  knight, NT, \n"));
        assert!(report.contains("Number of collisions: 1"));
        assert!(report.contains("Collisions with alt"));
    }

    #[test]
    fn no_collisions() {
        let c = find_collisions(&entries(&["smith", "jones"]));
        assert_eq!(c, Collisions::default());
    }
}
