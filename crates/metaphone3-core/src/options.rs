// Encoder configuration shared by every front end.

use serde::{Deserialize, Serialize};

/// Default maximum length of an encoded key.
pub const DEFAULT_KEY_LENGTH: usize = 8;

/// Largest key length an encoder accepts; longer requests are clamped.
pub const MAX_KEY_LENGTH: usize = 32;

/// Configuration of one encoder instance.
///
/// Deserializes from partial documents: missing fields keep their defaults,
/// so a TOML file holding only `encode_vowels = true` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Encode vowels after the first letter (each run collapses to one `A`).
    pub encode_vowels: bool,

    /// Keep voiced/unvoiced consonant pairs apart (B/P, D/T, G/K, V/F).
    /// S/Z, CH/SH and TH voicing are never distinguished.
    pub encode_exact: bool,

    /// Maximum key length, 1..=[`MAX_KEY_LENGTH`].
    pub key_length: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            encode_vowels: false,
            encode_exact: false,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

impl EncodeOptions {
    /// Options with both flags set as given and the default key length.
    pub fn new(encode_vowels: bool, encode_exact: bool) -> Self {
        Self {
            encode_vowels,
            encode_exact,
            ..Self::default()
        }
    }

    /// The key length actually used: at least 1, at most [`MAX_KEY_LENGTH`].
    pub fn effective_key_length(&self) -> usize {
        self.key_length.clamp(1, MAX_KEY_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = EncodeOptions::default();
        assert!(!opts.encode_vowels);
        assert!(!opts.encode_exact);
        assert_eq!(opts.key_length, 8);
    }

    #[test]
    fn effective_key_length_clamps() {
        let mut opts = EncodeOptions::default();
        opts.key_length = 0;
        assert_eq!(opts.effective_key_length(), 1);
        opts.key_length = 100;
        assert_eq!(opts.effective_key_length(), MAX_KEY_LENGTH);
        opts.key_length = 12;
        assert_eq!(opts.effective_key_length(), 12);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts: EncodeOptions = toml::from_str("encode_vowels = true").unwrap();
        assert_eq!(opts, EncodeOptions { encode_vowels: true, ..EncodeOptions::default() });
    }

    #[test]
    fn full_toml() {
        let text = "encode_vowels = false\nencode_exact = true\nkey_length = 12\n";
        let opts: EncodeOptions = toml::from_str(text).unwrap();
        assert_eq!(opts, EncodeOptions { encode_vowels: false, encode_exact: true, key_length: 12 });
    }
}
