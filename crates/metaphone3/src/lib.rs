//! Metaphone 3 phonetic encoding for English words and names.
//!
//! [`Metaphone3`] turns a word into a primary key and an optional alternate
//! key; words that sound alike tend to share a key. Vowels after the first
//! letter and the voiced/unvoiced consonant distinction are both optional.
//!
//! ```
//! use metaphone3::{EncodeOptions, Metaphone3};
//!
//! let mut m = Metaphone3::new();
//! assert_eq!(m.encode_word("knight").primary, "NT");
//!
//! let mut m = Metaphone3::with_options(EncodeOptions::new(true, false));
//! assert_eq!(m.encode_word("iron").primary, "ARN");
//! ```
//!
//! - [`encoder`] -- configuration, per-pass state and the encode loop
//! - `rules` -- the letter rule chains
//! - [`phrase`] -- space-separated phrases and word lists

pub mod encoder;
mod gazetteer;
pub mod phrase;
mod rules;

pub use encoder::Metaphone3;
pub use metaphone3_core::{
    DEFAULT_KEY_LENGTH, EncodeOptions, Encoding, MAX_KEY_LENGTH, NormalizeError, normalize,
    normalize_strict,
};

/// Errors reported by the encoder's checked entry points.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A key length above the maximum was requested; the maximum is used.
    #[error("key length {requested} exceeds the maximum of {max}")]
    KeyLengthTooLarge { requested: usize, max: usize },

    /// The word holds a character the encoder cannot represent.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
