// Character classification over the encoder's working alphabet.
//
// The working alphabet is plain uppercase ASCII plus the handful of Latin-1
// letters that may reach the engine without being folded (accented vowels,
// and the consonants the dispatcher maps directly: ß Ç Ñ Ð Þ Š).

// ---------------------------------------------------------------------------
// Vowel sets
// ---------------------------------------------------------------------------

/// Plain vowels. `Y` counts as a vowel everywhere in Metaphone 3.
const PLAIN_VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'Y'];

/// Accented uppercase vowels recognized without folding.
const ACCENTED_VOWELS: &[char] = &[
    '\u{00C0}', // À
    '\u{00C1}', // Á
    '\u{00C2}', // Â
    '\u{00C3}', // Ã
    '\u{00C4}', // Ä
    '\u{00C5}', // Å
    '\u{00C6}', // Æ
    '\u{00C8}', // È
    '\u{00C9}', // É
    '\u{00CA}', // Ê
    '\u{00CB}', // Ë
    '\u{00CC}', // Ì
    '\u{00CD}', // Í
    '\u{00CE}', // Î
    '\u{00CF}', // Ï
    '\u{00D2}', // Ò
    '\u{00D3}', // Ó
    '\u{00D4}', // Ô
    '\u{00D5}', // Õ
    '\u{00D6}', // Ö
    '\u{0152}', // Œ
    '\u{00D8}', // Ø
    '\u{00D9}', // Ù
    '\u{00DA}', // Ú
    '\u{00DB}', // Û
    '\u{00DC}', // Ü
    '\u{00DD}', // Ý
    '\u{0178}', // Ÿ
];

/// Sentinel returned for out-of-range reads. Never a vowel, never a letter.
pub const OUT_OF_RANGE: char = '\0';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a working-alphabet character is a vowel.
///
/// Case-sensitive: the engine only ever sees uppercase input, so lowercase
/// letters and the [`OUT_OF_RANGE`] sentinel are not vowels.
pub fn is_vowel(c: char) -> bool {
    PLAIN_VOWELS.contains(&c) || ACCENTED_VOWELS.contains(&c)
}

/// Close front vowels (E, I, Y), which soften a preceding C or G.
pub fn is_front_vowel(c: char) -> bool {
    matches!(c, 'E' | 'I' | 'Y')
}
