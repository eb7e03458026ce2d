//! Shared building blocks for the Metaphone 3 encoder workspace.
//!
//! - [`character`] -- vowel classification over the engine's working alphabet
//! - [`charset`] -- the lazily built [`charset::CharacterTable`] and word normalization
//! - [`encoding`] -- the primary/alternate code pair returned by every front end
//! - [`options`] -- encoder configuration shared by the CLI, FFI and WASM layers

pub mod character;
pub mod charset;
pub mod encoding;
pub mod options;

pub use charset::{CharacterTable, NormalizeError, normalize, normalize_strict};
pub use encoding::Encoding;
pub use options::{DEFAULT_KEY_LENGTH, EncodeOptions, MAX_KEY_LENGTH};
