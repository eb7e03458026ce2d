// Metaphone3: encoder configuration, per-pass state and the encode-once driver.
//
// One instance is built once and reused: configuration persists across
// calls, while the word, cursor, output keys and the AL inversion flag are
// reset at the top of every pass. Letter rules live in `crate::rules` as
// further `impl Metaphone3` blocks and only ever see the state through
// `&mut self` for the duration of their own call.

use metaphone3_core::character::{OUT_OF_RANGE, is_front_vowel, is_vowel};
use metaphone3_core::{DEFAULT_KEY_LENGTH, EncodeOptions, Encoding, MAX_KEY_LENGTH};
use metaphone3_core::{normalize, normalize_strict};

use crate::EncodeError;

// ---------------------------------------------------------------------------
// Rule contract
// ---------------------------------------------------------------------------

/// New cursor position produced by a rule that handled the current letter.
///
/// Rules never assign the cursor themselves when they report a match; they
/// return where encoding continues, and the driver checks that this is
/// strictly past the position the letter was dispatched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub(crate) struct Advance(pub(crate) i32);

/// A sub-rule of a letter chain: `Some(advance)` when it handled the
/// letter, `None` to let the next rule in the chain try.
pub(crate) type Rule = fn(&mut Metaphone3) -> Option<Advance>;

// ---------------------------------------------------------------------------
// Metaphone3
// ---------------------------------------------------------------------------

/// Metaphone 3 encoder.
///
/// ```
/// use metaphone3::Metaphone3;
///
/// let mut m = Metaphone3::new();
/// m.set_word("Smith");
/// m.encode();
/// assert_eq!(m.metaph(), "SM0");
/// assert_eq!(m.alternate_metaph(), "XMT");
/// ```
#[derive(Debug, Clone)]
pub struct Metaphone3 {
    // -- configuration --
    key_length: usize,
    pub(crate) encode_vowels: bool,
    pub(crate) encode_exact: bool,

    // -- per-pass state --
    /// Working copy of the word in the engine alphabet.
    pub(crate) word: Vec<char>,
    pub(crate) length: i32,
    pub(crate) last: i32,
    /// Cursor. Only the driver moves it between letters.
    pub(crate) current: i32,
    primary: String,
    secondary: String,
    /// Set by the -LE transposition, read and cleared by the next E.
    pub(crate) al_inversion: bool,
}

impl Default for Metaphone3 {
    fn default() -> Self {
        Self::new()
    }
}

impl Metaphone3 {
    /// Encoder with the default configuration: key length 8, no
    /// non-initial vowels, approximate consonants.
    pub fn new() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            encode_vowels: false,
            encode_exact: false,
            word: Vec::new(),
            length: 0,
            last: -1,
            current: 0,
            primary: String::new(),
            secondary: String::new(),
            al_inversion: false,
        }
    }

    /// Encoder configured from `options`. An out-of-range key length is
    /// clamped to 1..=32.
    pub fn with_options(options: EncodeOptions) -> Self {
        let mut m = Self::new();
        m.apply_options(options);
        m
    }

    /// Replace the whole configuration at once.
    pub fn apply_options(&mut self, options: EncodeOptions) {
        self.key_length = options.effective_key_length();
        self.encode_vowels = options.encode_vowels;
        self.encode_exact = options.encode_exact;
    }

    /// Current configuration.
    pub fn options(&self) -> EncodeOptions {
        EncodeOptions {
            encode_vowels: self.encode_vowels,
            encode_exact: self.encode_exact,
            key_length: self.key_length,
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Set the word for the next pass, normalizing it first (accented
    /// letters folded, unknown characters replaced by a placeholder).
    pub fn set_word(&mut self, word: &str) {
        self.load(normalize(word).chars());
    }

    /// Like [`set_word`](Self::set_word) but rejects characters outside
    /// the supported alphabet. The previous word is kept on error.
    pub fn set_word_strict(&mut self, word: &str) -> Result<(), EncodeError> {
        let normalized = normalize_strict(word)?;
        self.load(normalized.chars());
        Ok(())
    }

    /// Set a word that is already in the engine alphabet (uppercase ASCII,
    /// accented vowels and ß Ç Ñ Ð Þ Š). No folding happens.
    pub fn set_normalized_word(&mut self, word: &str) {
        self.load(word.chars());
    }

    fn load(&mut self, chars: impl Iterator<Item = char>) {
        self.word.clear();
        self.word.extend(chars);
        self.length = self.word.len() as i32;
        self.last = self.length - 1;
    }

    /// The working copy of the current word.
    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the maximum key length.
    ///
    /// Values below 1 become 1. Values above [`MAX_KEY_LENGTH`] are clamped
    /// to it and reported as an error; the clamped length stays in effect.
    pub fn set_key_length(&mut self, length: usize) -> Result<(), EncodeError> {
        if length > MAX_KEY_LENGTH {
            log::warn!("key length {length} clamped to {MAX_KEY_LENGTH}");
            self.key_length = MAX_KEY_LENGTH;
            return Err(EncodeError::KeyLengthTooLarge {
                requested: length,
                max: MAX_KEY_LENGTH,
            });
        }
        self.key_length = length.max(1);
        Ok(())
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Largest key length any encoder accepts.
    pub fn max_key_length(&self) -> usize {
        MAX_KEY_LENGTH
    }

    /// Encode vowels after the first letter. Even then, a vowel run
    /// (diphthongs and the like) yields a single `A` before the next
    /// consonant or the end of the word.
    pub fn set_encode_vowels(&mut self, encode_vowels: bool) {
        self.encode_vowels = encode_vowels;
    }

    pub fn encode_vowels(&self) -> bool {
        self.encode_vowels
    }

    /// Distinguish B/P, D/T, G/K and V/F. S/Z is never distinguished
    /// (final S is often voiced in American English), nor is CH/SH.
    pub fn set_encode_exact(&mut self, encode_exact: bool) {
        self.encode_exact = encode_exact;
    }

    pub fn encode_exact(&self) -> bool {
        self.encode_exact
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Primary key of the last pass.
    pub fn metaph(&self) -> &str {
        &self.primary
    }

    /// Alternate key of the last pass; empty when there is none.
    pub fn alternate_metaph(&self) -> &str {
        &self.secondary
    }

    /// Both keys of the last pass.
    pub fn encoding(&self) -> Encoding {
        Encoding::new(self.primary.clone(), self.secondary.clone())
    }

    /// Set, encode and return the keys of one word.
    pub fn encode_word(&mut self, word: &str) -> Encoding {
        self.set_word(word);
        self.encode();
        self.encoding()
    }

    // =========================================================================
    // Driver
    // =========================================================================

    /// Encode the current word into a primary and an alternate key.
    pub fn encode(&mut self) {
        self.al_inversion = false;
        self.current = 0;
        self.primary.clear();
        self.secondary.clear();

        if self.length < 1 {
            return;
        }
        self.last = self.length - 1;

        let limit = self.key_length;
        while self.primary.len() <= limit
            && self.secondary.len() <= limit
            && self.current < self.length
        {
            let start = self.current;
            let Advance(next) = self.encode_current();
            debug_assert!(
                next > start,
                "no progress at {start} in {:?}",
                self.word()
            );
            self.current = next.max(start + 1);
        }

        self.primary.truncate(limit);
        self.secondary.truncate(limit);
        if self.primary == self.secondary {
            self.secondary.clear();
        }
        self.al_inversion = false;

        log::debug!(
            "{:?} -> {:?} / {:?}",
            self.word(),
            self.primary,
            self.secondary
        );
    }

    // =========================================================================
    // Output primitives
    // =========================================================================

    /// Append `symbol` to both keys. A vowel `A` is not repeated after
    /// another `A`.
    pub(crate) fn add(&mut self, symbol: &str) {
        self.add_pair(symbol, symbol);
    }

    /// Append different symbols to the primary and the alternate key.
    pub(crate) fn add_pair(&mut self, main: &str, alt: &str) {
        push_symbol(&mut self.primary, main);
        push_symbol(&mut self.secondary, alt);
    }

    /// Pick between exact and approximate symbol pairs.
    pub(crate) fn add_exact_approx(
        &mut self,
        main_exact: &str,
        alt_exact: &str,
        main: &str,
        alt: &str,
    ) {
        if self.encode_exact {
            self.add_pair(main_exact, alt_exact);
        } else {
            self.add_pair(main, alt);
        }
    }

    /// Single-symbol form of [`add_exact_approx`](Self::add_exact_approx).
    pub(crate) fn add_exact(&mut self, main_exact: &str, main: &str) {
        self.add(if self.encode_exact { main_exact } else { main });
    }

    /// Whether the primary key built so far ends with `symbol`.
    pub(crate) fn primary_ends_with(&self, symbol: char) -> bool {
        self.primary.ends_with(symbol)
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// Advance relative to the cursor.
    pub(crate) fn skip(&self, n: i32) -> Advance {
        Advance(self.current + n)
    }

    /// Advance by `if_vowels` when vowels are being encoded (the vowel is
    /// left for the vowel encoder), otherwise by `if_not`.
    pub(crate) fn advance_counter(&self, if_not: i32, if_vowels: i32) -> Advance {
        self.skip(if self.encode_vowels { if_vowels } else { if_not })
    }

    /// Position of the next consonant to encode at or after `at`.
    ///
    /// W and WH count as part of a vowel run, except in the Slavic endings
    /// -WICZ, -WITZ, -WIAK, -EWSKI/-OWSKI, final -WICKI/-WACKI and in words
    /// where the H after W starts a new English syllable.
    pub(crate) fn skip_vowels(&self, at: i32) -> i32 {
        if at < 0 {
            return 0;
        }
        if at >= self.length {
            return self.length;
        }

        let mut p = at;
        let mut it = self.char_at(p);
        while is_vowel(it) || it == 'W' {
            if self.string_at(p, &["WICZ", "WITZ", "WIAK"])
                || self.string_at(p - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                || (p + 4 == self.last && self.string_at(p, &["WICKI", "WACKI"]))
            {
                break;
            }

            p += 1;
            if self.char_at(p - 1) == 'W'
                && self.char_at(p) == 'H'
                && !(self.string_at(p, &["HOP"])
                    || self.string_at(
                        p,
                        &["HIDE", "HARD", "HEAD", "HAWK", "HERD", "HOOK", "HAND", "HOLE"],
                    )
                    || self.string_at(p, &["HEART", "HOUSE", "HOUND"])
                    || self.string_at(p, &["HAMMER"]))
            {
                p += 1;
            }

            if p >= self.length {
                return self.length;
            }
            it = self.char_at(p);
        }
        p
    }

    // =========================================================================
    // Classifier
    // =========================================================================

    /// Character at `pos`, or `'\0'` outside the word.
    pub(crate) fn char_at(&self, pos: i32) -> char {
        if pos < 0 || pos >= self.length {
            OUT_OF_RANGE
        } else {
            self.word[pos as usize]
        }
    }

    /// Whether the word holds one of `candidates` starting at `start`.
    ///
    /// Exact, case-sensitive comparison. A candidate that would start
    /// before the word or run past its end never matches.
    pub(crate) fn string_at(&self, start: i32, candidates: &[&str]) -> bool {
        if start < 0 {
            return false;
        }
        let start = start as usize;
        candidates.iter().any(|candidate| {
            let end = start + candidate.len();
            end <= self.word.len() && self.word[start..end].iter().copied().eq(candidate.chars())
        })
    }

    /// Bounded vowel test.
    pub(crate) fn is_vowel_at(&self, at: i32) -> bool {
        is_vowel(self.char_at(at))
    }

    /// E, I or Y at `at`.
    pub(crate) fn front_vowel(&self, at: i32) -> bool {
        is_front_vowel(self.char_at(at))
    }

    /// Words starting with spellings typical of German or Slavic names.
    pub(crate) fn slavo_germanic(&self) -> bool {
        self.string_at(0, &["SCH", "SW"]) || matches!(self.char_at(0), 'J' | 'W')
    }

    /// Whether `s` occurs anywhere in the word.
    pub(crate) fn word_contains(&self, s: &str) -> bool {
        let needle: Vec<char> = s.chars().collect();
        self.word.windows(needle.len()).any(|w| w == needle.as_slice())
    }

    /// Whether the whole word is `root` or a regular inflection of it
    /// ("ache", "aches", "ached", "aching", "achingly", "achy").
    pub(crate) fn root_or_inflections(&self, root: &str) -> bool {
        root_or_inflections(&self.word, root)
    }

    /// Run a chain of sub-rules in priority order, returning the first match.
    pub(crate) fn first_match(&mut self, chain: &[Rule]) -> Option<Advance> {
        chain.iter().find_map(|rule| rule(self))
    }
}

/// Append `symbol` unless it is a vowel `A` following another `A`.
fn push_symbol(key: &mut String, symbol: &str) {
    if symbol != "A" || !key.ends_with('A') {
        key.push_str(symbol);
    }
}

/// Whether `word` is `root`, `root`+S, or `root` (minus a final E) plus one
/// of ES, ED, ING, INGLY, Y.
pub(crate) fn root_or_inflections(word: &[char], root: &str) -> bool {
    let equals = |parts: &[&str]| word.iter().copied().eq(parts.iter().flat_map(|p| p.chars()));

    if equals(&[root]) || equals(&[root, "S"]) {
        return true;
    }

    let stem = root.strip_suffix('E').unwrap_or(root);
    ["ES", "ED", "ING", "INGLY", "Y"]
        .iter()
        .any(|suffix| equals(&[stem, suffix]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_word(word: &str) -> Metaphone3 {
        let mut m = Metaphone3::new();
        m.set_normalized_word(word);
        m
    }

    // -- configuration --

    #[test]
    fn defaults() {
        let m = Metaphone3::new();
        assert_eq!(m.key_length(), 8);
        assert_eq!(m.max_key_length(), 32);
        assert!(!m.encode_vowels());
        assert!(!m.encode_exact());
    }

    #[test]
    fn key_length_bounds() {
        let mut m = Metaphone3::new();
        assert!(m.set_key_length(0).is_ok());
        assert_eq!(m.key_length(), 1);
        assert!(m.set_key_length(32).is_ok());
        assert_eq!(m.key_length(), 32);

        let err = m.set_key_length(33).unwrap_err();
        assert!(matches!(err, EncodeError::KeyLengthTooLarge { requested: 33, max: 32 }));
        assert_eq!(m.key_length(), 32);
    }

    #[test]
    fn options_roundtrip() {
        let opts = EncodeOptions { encode_vowels: true, encode_exact: true, key_length: 12 };
        assert_eq!(Metaphone3::with_options(opts).options(), opts);

        let clamped = Metaphone3::with_options(EncodeOptions { key_length: 99, ..opts });
        assert_eq!(clamped.key_length(), MAX_KEY_LENGTH);
    }

    // -- classifier --

    #[test]
    fn char_at_out_of_range() {
        let m = with_word("AB");
        assert_eq!(m.char_at(-1), '\0');
        assert_eq!(m.char_at(0), 'A');
        assert_eq!(m.char_at(1), 'B');
        assert_eq!(m.char_at(2), '\0');
    }

    #[test]
    fn string_at_bounds() {
        let m = with_word("SCHMIDT");
        assert!(m.string_at(0, &["SCH"]));
        assert!(m.string_at(0, &["XX", "SC"]));
        assert!(m.string_at(4, &["IDT"]));
        assert!(!m.string_at(5, &["DTX"]));
        assert!(!m.string_at(-1, &["S"]));
        assert!(!m.string_at(7, &["T"]));
        assert!(!m.string_at(0, &["sch"]));
    }

    #[test]
    fn slavo_germanic_prefixes() {
        assert!(with_word("SCHMIDT").slavo_germanic());
        assert!(with_word("SWANSON").slavo_germanic());
        assert!(with_word("JONES").slavo_germanic());
        assert!(with_word("WOLF").slavo_germanic());
        assert!(!with_word("SMITH").slavo_germanic());
    }

    #[test]
    fn word_helpers() {
        let m = with_word("ARCHER");
        assert!(m.word_contains("CHE"));
        assert!(!m.word_contains("SCH"));
    }

    // -- input --

    #[test]
    fn strict_word_rejects_unmapped() {
        use crate::NormalizeError;

        let mut m = Metaphone3::new();
        m.set_word("smith");
        let err = m.set_word_strict("ab\u{00D7}").unwrap_err();
        assert!(matches!(
            err,
            EncodeError::Normalize(NormalizeError::UnmappedCharacter { position: 2, .. })
        ));
        assert_eq!(m.word(), "SMITH");

        m.set_word_strict("M\u{00FC}ller").unwrap();
        assert_eq!(m.word(), "MULLER");
    }

    #[test]
    fn thorn_keys_like_th() {
        let mut m = Metaphone3::new();
        m.set_word("\u{00DE}\u{00F3}r");
        assert_eq!(m.word(), "\u{00DE}OR");
        assert_eq!(m.encode_word("\u{00DE}\u{00F3}r").primary, "0R");
        assert_eq!(m.encode_word("\u{00FE}\u{00F3}r").primary, m.encode_word("thor").primary);
    }

    #[test]
    fn inflections() {
        let word = |s: &str| s.chars().collect::<Vec<_>>();
        assert!(root_or_inflections(&word("ACHE"), "ACHE"));
        assert!(root_or_inflections(&word("ACHES"), "ACHE"));
        assert!(root_or_inflections(&word("ACHED"), "ACHE"));
        assert!(root_or_inflections(&word("ACHING"), "ACHE"));
        assert!(root_or_inflections(&word("ACHINGLY"), "ACHE"));
        assert!(root_or_inflections(&word("ACHY"), "ACHE"));
        assert!(root_or_inflections(&word("ARCHES"), "ARCH"));
        assert!(root_or_inflections(&word("ARCHING"), "ARCH"));
        assert!(!root_or_inflections(&word("ACHER"), "ACHE"));
        assert!(!root_or_inflections(&word("ARCHER"), "ARCH"));
    }

    // -- output primitives --

    #[test]
    fn add_collapses_repeated_vowel() {
        let mut m = Metaphone3::new();
        m.add("A");
        m.add("A");
        m.add("K");
        m.add("A");
        assert_eq!(m.metaph(), "AKA");
        m.add_pair("A", "S");
        assert_eq!(m.metaph(), "AKA");
        assert_eq!(m.alternate_metaph(), "AKAS");
    }

    #[test]
    fn exact_approx_selection() {
        let mut m = Metaphone3::new();
        m.add_exact("B", "P");
        m.set_encode_exact(true);
        m.add_exact("B", "P");
        m.add_exact_approx("D", "AD", "T", "AT");
        assert_eq!(m.metaph(), "PBD");
        assert_eq!(m.alternate_metaph(), "PBAD");
    }

    // -- skip_vowels --

    #[test]
    fn skip_vowels_runs() {
        let m = with_word("BEAUTY");
        assert_eq!(m.skip_vowels(1), 4);
        assert_eq!(m.skip_vowels(-3), 0);
        assert_eq!(m.skip_vowels(9), 6);
    }

    #[test]
    fn skip_vowels_stops_at_slavic_w() {
        let m = with_word("MARKOWICZ");
        assert_eq!(m.skip_vowels(4), 5);
        let m = with_word("JABLONOWSKI");
        assert_eq!(m.skip_vowels(6), 7);
    }

    #[test]
    fn skip_vowels_eats_wh() {
        assert_eq!(with_word("NOWHERE").skip_vowels(1), 5);
        // "-WHOLE-": the H begins a new syllable
        assert_eq!(with_word("SOWHOLE").skip_vowels(1), 3);
    }

    // -- driver --

    #[test]
    fn empty_word() {
        let mut m = with_word("");
        m.encode();
        assert_eq!(m.metaph(), "");
        assert_eq!(m.alternate_metaph(), "");
    }

    #[test]
    fn non_letters_are_skipped() {
        let mut m = with_word("*-'");
        m.encode();
        assert_eq!(m.metaph(), "");
    }

    #[test]
    fn inversion_flag_cleared_after_pass() {
        let mut m = with_word("TABLE");
        m.encode();
        assert!(!m.al_inversion);
        m.set_encode_vowels(true);
        m.encode();
        assert!(!m.al_inversion);
    }
}
