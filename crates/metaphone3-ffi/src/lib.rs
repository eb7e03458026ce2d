// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// metaphone3-ffi: C-compatible FFI layer for the Metaphone 3 encoder.
//
// Memory management rules:
// - All output buffers are allocated by the caller; keys are copied in
//   NUL-terminated.
// - Word key buffers (`best`, `alt`) hold at least `MAX_KEY_ALLOCATION + 1`
//   bytes. Phrase buffers hold at least `PHRASE_ALLOCATION` bytes.
// - All input strings are UTF-8 encoded, NUL-terminated C strings.
//
// Every encoding function returns `RETURN_NO_FAULT` on success and
// `RETURN_UNKNOWN_FAULT` on a null pointer or non-UTF-8 input.

use std::ffi::{CStr, c_char, c_int, c_uint};
use std::ptr;

use metaphone3::{EncodeOptions, Encoding, MAX_KEY_LENGTH, Metaphone3};

/// Version 1.1.0, two digits per minor and patch.
pub const PRON_VERSION: c_int = 10100;

pub const RETURN_NO_FAULT: c_int = 1;
pub const RETURN_UNKNOWN_FAULT: c_int = -1;

const TEXT_NO_FAULT: &str = "Success";
const TEXT_UNKNOWN_FAULT: &str = "General error";
const TEXT_NOT_A_CODE: &str = "Not a Metapron3 error code";

/// Longest key a single-word call can write, excluding the NUL.
pub const MAX_KEY_ALLOCATION: usize = MAX_KEY_LENGTH;

/// Size of phrase output buffers and of the `ErrorMessage` line.
pub const PHRASE_ALLOCATION: usize = 80;

// ── Encoding ────────────────────────────────────────────────────

/// Encode one word.
///
/// `best` and `alt` must each point to at least `MAX_KEY_ALLOCATION + 1`
/// writable bytes. `alt` receives an empty string when the word has no
/// alternate key.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaword(
    word: *const c_char,
    encode_vowels: bool,
    encode_exact: bool,
    best: *mut c_char,
    alt: *mut c_char,
) -> c_int {
    let Some(word) = cstr_to_str(word) else {
        return RETURN_UNKNOWN_FAULT;
    };
    if best.is_null() || alt.is_null() {
        return RETURN_UNKNOWN_FAULT;
    }

    let encoding = encoder(encode_vowels, encode_exact).encode_word(word);
    unsafe { write_keys(&encoding, best, alt, MAX_KEY_ALLOCATION + 1) };
    RETURN_NO_FAULT
}

/// Encode a phrase of space-separated words.
///
/// `best` and `alt` must each point to at least `PHRASE_ALLOCATION`
/// writable bytes. Longer output is truncated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphrase(
    phrase: *const c_char,
    encode_vowels: bool,
    encode_exact: bool,
    best: *mut c_char,
    alt: *mut c_char,
) -> c_int {
    let Some(phrase) = cstr_to_str(phrase) else {
        return RETURN_UNKNOWN_FAULT;
    };
    if best.is_null() || alt.is_null() {
        return RETURN_UNKNOWN_FAULT;
    }

    let encoding = encoder(encode_vowels, encode_exact).encode_phrase(phrase);
    unsafe { write_keys(&encoding, best, alt, PHRASE_ALLOCATION) };
    RETURN_NO_FAULT
}

/// Encode `number` words.
///
/// `words`, `bests` and `alts` are arrays of `number` pointers; every
/// output pointer follows the `metaword` buffer contract. Nothing is
/// written unless every input is valid.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metalist(
    words: *const *const c_char,
    number: c_uint,
    encode_vowels: bool,
    encode_exact: bool,
    bests: *const *mut c_char,
    alts: *const *mut c_char,
) -> c_int {
    if words.is_null() || bests.is_null() || alts.is_null() {
        return RETURN_UNKNOWN_FAULT;
    }
    let n = number as usize;

    let mut inputs = Vec::with_capacity(n);
    for i in 0..n {
        let (word, best, alt) = unsafe { (*words.add(i), *bests.add(i), *alts.add(i)) };
        let Some(word) = cstr_to_str(word) else {
            return RETURN_UNKNOWN_FAULT;
        };
        if best.is_null() || alt.is_null() {
            return RETURN_UNKNOWN_FAULT;
        }
        inputs.push((word, best, alt));
    }

    let mut m = encoder(encode_vowels, encode_exact);
    for (word, best, alt) in inputs {
        let encoding = m.encode_word(word);
        unsafe { write_keys(&encoding, best, alt, MAX_KEY_ALLOCATION + 1) };
    }
    RETURN_NO_FAULT
}

// ── Error text ──────────────────────────────────────────────────

/// Write the text form of a return code into `line`, which must hold at
/// least `PHRASE_ALLOCATION` bytes.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "C" fn ErrorMessage(code: c_int, line: *mut c_char) {
    if line.is_null() {
        return;
    }
    let text = match code {
        RETURN_NO_FAULT => TEXT_NO_FAULT,
        RETURN_UNKNOWN_FAULT => TEXT_UNKNOWN_FAULT,
        _ => TEXT_NOT_A_CODE,
    };
    unsafe { copy_c(text, line, PHRASE_ALLOCATION) };
}

// ── Internal helpers ────────────────────────────────────────────

fn encoder(encode_vowels: bool, encode_exact: bool) -> Metaphone3 {
    Metaphone3::with_options(EncodeOptions::new(encode_vowels, encode_exact))
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

unsafe fn write_keys(encoding: &Encoding, best: *mut c_char, alt: *mut c_char, capacity: usize) {
    unsafe {
        copy_c(&encoding.primary, best, capacity);
        copy_c(&encoding.secondary, alt, capacity);
    }
}

/// Copy `s` into `out` NUL-terminated, keeping at most `capacity - 1` bytes.
/// Keys are ASCII, so a byte cut never splits a character.
unsafe fn copy_c(s: &str, out: *mut c_char, capacity: usize) {
    let n = s.len().min(capacity.saturating_sub(1));
    unsafe {
        ptr::copy_nonoverlapping(s.as_ptr().cast::<c_char>(), out, n);
        *out.add(n) = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn read(buf: &[c_char]) -> String {
        unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy().into_owned()
    }

    // -- metaword --

    #[test]
    fn word() {
        let input = CString::new("smith").unwrap();
        let mut best = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let mut alt = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let rc = unsafe {
            metaword(input.as_ptr(), false, false, best.as_mut_ptr(), alt.as_mut_ptr())
        };
        assert_eq!(rc, RETURN_NO_FAULT);
        assert_eq!(read(&best), "SM0");
        assert_eq!(read(&alt), "XMT");
    }

    #[test]
    fn word_without_alternate() {
        let input = CString::new("Guillermo").unwrap();
        let mut best = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let mut alt = [b'x' as c_char; MAX_KEY_ALLOCATION + 1];
        let rc =
            unsafe { metaword(input.as_ptr(), true, true, best.as_mut_ptr(), alt.as_mut_ptr()) };
        assert_eq!(rc, RETURN_NO_FAULT);
        assert_eq!(read(&best), "GARMA");
        assert_eq!(read(&alt), "");
    }

    #[test]
    fn null_input() {
        let mut best = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let mut alt = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let rc =
            unsafe { metaword(ptr::null(), false, false, best.as_mut_ptr(), alt.as_mut_ptr()) };
        assert_eq!(rc, RETURN_UNKNOWN_FAULT);

        let input = CString::new("smith").unwrap();
        let rc = unsafe {
            metaword(input.as_ptr(), false, false, ptr::null_mut(), alt.as_mut_ptr())
        };
        assert_eq!(rc, RETURN_UNKNOWN_FAULT);
    }

    #[test]
    fn non_utf8_input() {
        let input = [0xffu8 as c_char, 0];
        let mut best = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let mut alt = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let rc = unsafe {
            metaword(input.as_ptr(), false, false, best.as_mut_ptr(), alt.as_mut_ptr())
        };
        assert_eq!(rc, RETURN_UNKNOWN_FAULT);
    }

    // -- metaphrase --

    #[test]
    fn phrase() {
        let input = CString::new("Smith Jones").unwrap();
        let mut best = [0 as c_char; PHRASE_ALLOCATION];
        let mut alt = [0 as c_char; PHRASE_ALLOCATION];
        let rc = unsafe {
            metaphrase(input.as_ptr(), false, false, best.as_mut_ptr(), alt.as_mut_ptr())
        };
        assert_eq!(rc, RETURN_NO_FAULT);
        assert_eq!(read(&best), "SM0 JNS");
        assert_eq!(read(&alt), "XMT ANS");
    }

    #[test]
    fn long_phrase_truncates() {
        let input = CString::new(["smith"; 40].join(" ")).unwrap();
        let mut best = [0 as c_char; PHRASE_ALLOCATION];
        let mut alt = [0 as c_char; PHRASE_ALLOCATION];
        let rc = unsafe {
            metaphrase(input.as_ptr(), false, false, best.as_mut_ptr(), alt.as_mut_ptr())
        };
        assert_eq!(rc, RETURN_NO_FAULT);
        assert_eq!(read(&best).len(), PHRASE_ALLOCATION - 1);
        assert!(read(&best).starts_with("SM0 SM0 "));
    }

    // -- metalist --

    #[test]
    fn list() {
        let inputs: Vec<CString> = ["knight", "smith"]
            .iter()
            .map(|w| CString::new(*w).unwrap())
            .collect();
        let words: Vec<*const c_char> = inputs.iter().map(|s| s.as_ptr()).collect();
        let mut best_bufs = [[0 as c_char; MAX_KEY_ALLOCATION + 1]; 2];
        let mut alt_bufs = [[0 as c_char; MAX_KEY_ALLOCATION + 1]; 2];
        let bests: Vec<*mut c_char> = best_bufs.iter_mut().map(|b| b.as_mut_ptr()).collect();
        let alts: Vec<*mut c_char> = alt_bufs.iter_mut().map(|b| b.as_mut_ptr()).collect();

        let rc = unsafe {
            metalist(words.as_ptr(), 2, false, false, bests.as_ptr(), alts.as_ptr())
        };
        assert_eq!(rc, RETURN_NO_FAULT);
        assert_eq!(read(&best_bufs[0]), "NT");
        assert_eq!(read(&alt_bufs[0]), "");
        assert_eq!(read(&best_bufs[1]), "SM0");
        assert_eq!(read(&alt_bufs[1]), "XMT");
    }

    #[test]
    fn list_rejects_null_word() {
        let words: Vec<*const c_char> = vec![ptr::null()];
        let mut best = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let mut alt = [0 as c_char; MAX_KEY_ALLOCATION + 1];
        let bests = [best.as_mut_ptr()];
        let alts = [alt.as_mut_ptr()];
        let rc = unsafe {
            metalist(words.as_ptr(), 1, false, false, bests.as_ptr(), alts.as_ptr())
        };
        assert_eq!(rc, RETURN_UNKNOWN_FAULT);
    }

    // -- ErrorMessage --

    #[test]
    fn error_messages() {
        let mut line = [0 as c_char; PHRASE_ALLOCATION];
        unsafe { ErrorMessage(RETURN_NO_FAULT, line.as_mut_ptr()) };
        assert_eq!(read(&line), "Success");
        unsafe { ErrorMessage(RETURN_UNKNOWN_FAULT, line.as_mut_ptr()) };
        assert_eq!(read(&line), "General error");
        unsafe { ErrorMessage(42, line.as_mut_ptr()) };
        assert_eq!(read(&line), "Not a Metapron3 error code");
    }
}
