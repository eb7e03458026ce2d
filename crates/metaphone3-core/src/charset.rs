// Normalization of arbitrary text into the encoder's working alphabet.
//
// ASCII is uppercased. Letters from Latin-1 Supplement and Latin Extended-A
// fold to the ASCII letter they are usually pronounced as, through a table
// built once per process. Anything else is unmapped.

use std::sync::LazyLock;

use crate::character::is_vowel;

/// Placeholder written by [`normalize`] for characters outside the table.
pub const PLACEHOLDER: char = '*';

/// First code point covered by the table (U+00C0, À).
const TABLE_START: u32 = 0x00C0;

/// One past the last covered code point (U+017F, long s, is the last).
const TABLE_END: u32 = 0x0180;

const TABLE_SIZE: usize = (TABLE_END - TABLE_START) as usize;

// ---------------------------------------------------------------------------
// Table data
// ---------------------------------------------------------------------------

/// Folding of U+00C0..U+00DF. The lowercase row U+00E0..U+00FF is identical.
/// `.` marks the two unmapped signs (× and ÷) and `^` marks thorn, which
/// is kept as `Þ` for the encoder's TH rule. ÿ folds to S as in the
/// reference tables.
const LATIN_1_ROW: &[u8; 32] = b"AAAAAAASEEEEIIIIDNOOOOO.OUUUUY^S";

/// Thorn in the working alphabet (both cases fold to the capital).
const THORN: char = '\u{00DE}';

/// Folding of Latin Extended-A (U+0100..U+017F) as runs of consecutive
/// code points sharing one base letter.
const EXTENDED_A_RUNS: &[(char, usize)] = &[
    ('A', 6),  // Ā ā Ă ă Ą ą
    ('C', 8),  // Ć ć Ĉ ĉ Ċ ċ Č č
    ('D', 4),  // Ď ď Đ đ
    ('E', 10), // Ē ē Ĕ ĕ Ė ė Ę ę Ě ě
    ('G', 8),  // Ĝ ĝ Ğ ğ Ġ ġ Ģ ģ
    ('H', 4),  // Ĥ ĥ Ħ ħ
    ('I', 10), // Ĩ ĩ Ī ī Ĭ ĭ Į į İ ı
    ('J', 4),  // Ĳ ĳ Ĵ ĵ
    ('K', 3),  // Ķ ķ ĸ
    ('L', 10), // Ĺ ĺ Ļ ļ Ľ ľ Ŀ ŀ Ł ł
    ('N', 9),  // Ń ń Ņ ņ Ň ň ŉ Ŋ ŋ
    ('O', 8),  // Ō ō Ŏ ŏ Ő ő Œ œ
    ('R', 6),  // Ŕ ŕ Ŗ ŗ Ř ř
    ('S', 8),  // Ś ś Ŝ ŝ Ş ş Š š
    ('T', 6),  // Ţ ţ Ť ť Ŧ ŧ
    ('U', 12), // Ũ ũ Ū ū Ŭ ŭ Ů ů Ű ű Ų ų
    ('W', 2),  // Ŵ ŵ
    ('Y', 3),  // Ŷ ŷ Ÿ
    ('Z', 6),  // Ź ź Ż ż Ž ž
    ('S', 1),  // ſ
];

// ---------------------------------------------------------------------------
// CharacterTable
// ---------------------------------------------------------------------------

/// One folded character: the working-alphabet letter it maps to (ASCII,
/// or `Þ` for thorn) and whether that letter is a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub ascii: char,
    pub vowel: bool,
}

/// Read-only fold table for U+00C0..U+017F.
///
/// Built on first use by [`CharacterTable::global`] and shared by every
/// thread afterwards.
#[derive(Debug)]
pub struct CharacterTable {
    entries: [Option<TableEntry>; TABLE_SIZE],
}

static TABLE: LazyLock<CharacterTable> = LazyLock::new(CharacterTable::build);

impl CharacterTable {
    /// The process-wide table.
    pub fn global() -> &'static CharacterTable {
        &TABLE
    }

    fn build() -> Self {
        let mut entries = [None; TABLE_SIZE];

        for (i, &b) in LATIN_1_ROW.iter().enumerate() {
            if b == b'.' {
                continue;
            }
            let folded = if b == b'^' { THORN } else { char::from(b) };
            let entry = Some(TableEntry::new(folded));
            entries[i] = entry;
            entries[i + LATIN_1_ROW.len()] = entry;
        }

        let mut index = 2 * LATIN_1_ROW.len();
        for &(ascii, count) in EXTENDED_A_RUNS {
            for slot in &mut entries[index..index + count] {
                *slot = Some(TableEntry::new(ascii));
            }
            index += count;
        }
        debug_assert_eq!(index, TABLE_SIZE);

        let table = Self { entries };
        log::debug!("built character table with {} mapped entries", table.len());
        table
    }

    /// Look up a non-ASCII character. `None` if it is outside the table
    /// or one of the unmapped signs.
    pub fn lookup(&self, ch: char) -> Option<TableEntry> {
        let cp = ch as u32;
        if !(TABLE_START..TABLE_END).contains(&cp) {
            return None;
        }
        self.entries[(cp - TABLE_START) as usize]
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TableEntry {
    fn new(ascii: char) -> Self {
        Self { ascii, vowel: is_vowel(ascii) }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Error type for strict normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The character has no counterpart in the working alphabet.
    #[error("unmapped character {ch:?} at position {position}")]
    UnmappedCharacter { ch: char, position: usize },
}

/// Fold one character into the working alphabet.
///
/// ASCII is uppercased and kept as is (digits and punctuation included);
/// table letters fold to their ASCII letter, thorn to `Þ`. Returns `None` for anything
/// else.
pub fn fold_char(ch: char) -> Option<char> {
    if ch.is_ascii() {
        return Some(ch.to_ascii_uppercase());
    }
    CharacterTable::global().lookup(ch).map(|e| e.ascii)
}

/// Whether a character folds to a vowel.
pub fn is_table_vowel(ch: char) -> bool {
    if ch.is_ascii() {
        return is_vowel(ch.to_ascii_uppercase());
    }
    CharacterTable::global().lookup(ch).is_some_and(|e| e.vowel)
}

/// Normalize a word, writing [`PLACEHOLDER`] for every unmapped character.
///
/// The placeholder is neither a vowel nor a letter, so the encoder steps
/// over it without emitting anything.
pub fn normalize(word: &str) -> String {
    word.chars().map(|ch| fold_char(ch).unwrap_or(PLACEHOLDER)).collect()
}

/// Normalize a word, failing on the first unmapped character.
pub fn normalize_strict(word: &str) -> Result<String, NormalizeError> {
    word.chars()
        .enumerate()
        .map(|(position, ch)| {
            fold_char(ch).ok_or_else(|| {
                log::warn!("cannot normalize {ch:?} at position {position} in {word:?}");
                NormalizeError::UnmappedCharacter { ch, position }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- table construction --

    #[test]
    fn table_covers_extended_a_exactly() {
        let runs: usize = EXTENDED_A_RUNS.iter().map(|&(_, n)| n).sum();
        assert_eq!(runs, 0x80);
    }

    #[test]
    fn table_mapped_count() {
        // 64 Latin-1 slots minus × and ÷, plus all 128 Extended-A letters
        assert_eq!(CharacterTable::global().len(), 62 + 128);
    }

    #[test]
    fn global_is_shared() {
        let a = CharacterTable::global() as *const CharacterTable;
        let b = std::thread::spawn(|| CharacterTable::global() as *const CharacterTable as usize)
            .join()
            .unwrap();
        assert_eq!(a as usize, b);
    }

    // -- lookup --

    #[test]
    fn latin_1_letters() {
        let t = CharacterTable::global();
        assert_eq!(t.lookup('\u{00E9}').map(|e| e.ascii), Some('E')); // é
        assert_eq!(t.lookup('\u{00C7}').map(|e| e.ascii), Some('S')); // Ç
        assert_eq!(t.lookup('\u{00F1}').map(|e| e.ascii), Some('N')); // ñ
        assert_eq!(t.lookup('\u{00DF}').map(|e| e.ascii), Some('S')); // ß
        assert_eq!(t.lookup('\u{00DE}').map(|e| e.ascii), Some('\u{00DE}')); // Þ
        assert_eq!(t.lookup('\u{00FE}').map(|e| e.ascii), Some('\u{00DE}')); // þ
        assert_eq!(t.lookup('\u{00FF}').map(|e| e.ascii), Some('S')); // ÿ
        assert_eq!(t.lookup('\u{00D7}'), None); // ×
        assert_eq!(t.lookup('\u{00F7}'), None); // ÷
    }

    #[test]
    fn extended_a_letters() {
        let t = CharacterTable::global();
        assert_eq!(t.lookup('\u{0100}').map(|e| e.ascii), Some('A')); // Ā
        assert_eq!(t.lookup('\u{010D}').map(|e| e.ascii), Some('C')); // č
        assert_eq!(t.lookup('\u{0132}').map(|e| e.ascii), Some('J')); // Ĳ
        assert_eq!(t.lookup('\u{0141}').map(|e| e.ascii), Some('L')); // Ł
        assert_eq!(t.lookup('\u{0152}').map(|e| e.ascii), Some('O')); // Œ
        assert_eq!(t.lookup('\u{0160}').map(|e| e.ascii), Some('S')); // Š
        assert_eq!(t.lookup('\u{0174}').map(|e| e.ascii), Some('W')); // Ŵ
        assert_eq!(t.lookup('\u{0178}').map(|e| e.ascii), Some('Y')); // Ÿ
        assert_eq!(t.lookup('\u{017E}').map(|e| e.ascii), Some('Z')); // ž
        assert_eq!(t.lookup('\u{017F}').map(|e| e.ascii), Some('S')); // ſ
    }

    #[test]
    fn outside_table() {
        let t = CharacterTable::global();
        assert_eq!(t.lookup('A'), None);
        assert_eq!(t.lookup('\u{00BF}'), None);
        assert_eq!(t.lookup('\u{0180}'), None);
        assert_eq!(t.lookup('\u{03B1}'), None); // Greek alpha
    }

    #[test]
    fn vowel_flags() {
        assert!(is_table_vowel('\u{00E9}'));
        assert!(is_table_vowel('\u{00C5}'));
        assert!(is_table_vowel('\u{0177}')); // ŷ
        assert!(!is_table_vowel('\u{00C7}'));
        assert!(!is_table_vowel('\u{00FF}'));
        assert!(is_table_vowel('e'));
        assert!(!is_table_vowel('b'));
    }

    // -- normalize --

    #[test]
    fn normalize_ascii() {
        assert_eq!(normalize("Smith"), "SMITH");
        assert_eq!(normalize("o'brien-2"), "O'BRIEN-2");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_accents() {
        assert_eq!(normalize("Jos\u{00E9}"), "JOSE");
        assert_eq!(normalize("Fran\u{00E7}ois"), "FRANSOIS");
        assert_eq!(normalize("Pe\u{00F1}a"), "PENA");
        assert_eq!(normalize("\u{0141}\u{00F3}d\u{017A}"), "LODZ");
        assert_eq!(normalize("Stra\u{00DF}e"), "STRASE");
    }

    #[test]
    fn normalize_unmapped_uses_placeholder() {
        assert_eq!(normalize("a\u{00D7}b"), "A*B");
        assert_eq!(normalize("\u{00A9}x"), "*X");
        assert_eq!(normalize("\u{65E5}"), "*");
    }

    #[test]
    fn strict_reports_position() {
        assert_eq!(normalize_strict("caf\u{00E9}"), Ok("CAFE".to_string()));
        assert_eq!(
            normalize_strict("ab\u{00F7}c"),
            Err(NormalizeError::UnmappedCharacter { ch: '\u{00F7}', position: 2 })
        );
    }

    #[test]
    fn error_message() {
        let err = NormalizeError::UnmappedCharacter { ch: '\u{00D7}', position: 1 };
        assert_eq!(err.to_string(), "unmapped character '\u{00D7}' at position 1");
    }
}
