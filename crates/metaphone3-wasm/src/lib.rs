// WASM bindings for the Metaphone 3 encoder.
//
// Provides a `WasmMetaphone3` class exported via wasm-bindgen that wraps
// `Metaphone3`. Keys come back as `{ primary, secondary }` objects
// serialized with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const m = new WasmMetaphone3({ encodeVowels: true });
//   m.encode("smith");                   // => { primary: "SMA0", secondary: "XMAT" }
//   m.encodePhrase("Nicolas Gaydier");   // => { primary: "NAKALAS KATAR", secondary: "" }
//   m.encodeList(["knight", "night"]);   // => [{ primary: "NAT", ... }, ...]
//   m.setKeyLength(4);

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use metaphone3::{EncodeOptions, Encoding, Metaphone3};

// ============================================================================
// Serde DTO types for JS interop
// ============================================================================

/// Constructor options. Missing fields keep the encoder defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsOptions {
    encode_vowels: Option<bool>,
    encode_exact: Option<bool>,
    key_length: Option<usize>,
}

impl JsOptions {
    fn into_options(self) -> EncodeOptions {
        let defaults = EncodeOptions::default();
        EncodeOptions {
            encode_vowels: self.encode_vowels.unwrap_or(defaults.encode_vowels),
            encode_exact: self.encode_exact.unwrap_or(defaults.encode_exact),
            key_length: self.key_length.unwrap_or(defaults.key_length),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsEncoding {
    primary: String,
    secondary: String,
}

impl From<Encoding> for JsEncoding {
    fn from(e: Encoding) -> Self {
        JsEncoding {
            primary: e.primary,
            secondary: e.secondary,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmMetaphone3
// ============================================================================

/// Metaphone 3 phonetic encoder for WebAssembly.
#[wasm_bindgen]
pub struct WasmMetaphone3 {
    encoder: Metaphone3,
}

#[wasm_bindgen]
impl WasmMetaphone3 {
    /// Create an encoder. `options` is an optional object with
    /// `encodeVowels`, `encodeExact` and `keyLength` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmMetaphone3, JsError> {
        let options: JsOptions = if options.is_undefined() || options.is_null() {
            JsOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
        };
        Ok(Self::with_options(options.into_options()))
    }

    /// Keys of one word.
    pub fn encode(&mut self, word: &str) -> Result<JsValue, JsError> {
        to_js(&self.encode_word(word))
    }

    /// Keys of a space-separated phrase, one key per word.
    #[wasm_bindgen(js_name = "encodePhrase")]
    pub fn encode_phrase(&mut self, phrase: &str) -> Result<JsValue, JsError> {
        to_js(&JsEncoding::from(self.encoder.encode_phrase(phrase)))
    }

    /// Keys of every word in an array.
    #[wasm_bindgen(js_name = "encodeList")]
    pub fn encode_list(&mut self, words: Vec<String>) -> Result<JsValue, JsError> {
        to_js(&self.encode_words(&words))
    }

    #[wasm_bindgen(js_name = "setEncodeVowels")]
    pub fn set_encode_vowels(&mut self, value: bool) {
        self.encoder.set_encode_vowels(value);
    }

    #[wasm_bindgen(js_name = "setEncodeExact")]
    pub fn set_encode_exact(&mut self, value: bool) {
        self.encoder.set_encode_exact(value);
    }

    /// Set the maximum key length. Throws when it exceeds the maximum;
    /// the maximum is used in that case.
    #[wasm_bindgen(js_name = "setKeyLength")]
    pub fn set_key_length(&mut self, length: usize) -> Result<(), JsError> {
        self.encoder
            .set_key_length(length)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(getter, js_name = "keyLength")]
    pub fn key_length(&self) -> usize {
        self.encoder.key_length()
    }
}

impl WasmMetaphone3 {
    fn with_options(options: EncodeOptions) -> Self {
        WasmMetaphone3 {
            encoder: Metaphone3::with_options(options),
        }
    }

    fn encode_word(&mut self, word: &str) -> JsEncoding {
        self.encoder.encode_word(word).into()
    }

    fn encode_words(&mut self, words: &[String]) -> Vec<JsEncoding> {
        self.encoder
            .encode_list(words)
            .into_iter()
            .map(JsEncoding::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_missing_fields() {
        let opts = JsOptions {
            encode_vowels: Some(true),
            ..JsOptions::default()
        }
        .into_options();
        assert!(opts.encode_vowels);
        assert!(!opts.encode_exact);
        assert_eq!(opts.key_length, 8);
    }

    #[test]
    fn encodes_through_wrapper() {
        let mut m = WasmMetaphone3::with_options(EncodeOptions::new(true, false));
        assert_eq!(
            m.encode_word("smith"),
            JsEncoding {
                primary: "SMA0".into(),
                secondary: "XMAT".into()
            }
        );
        let list = m.encode_words(&["knight".to_string(), "night".to_string()]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], list[1]);
    }
}
