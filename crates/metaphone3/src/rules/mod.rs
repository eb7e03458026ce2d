//! Per-letter rule chains.
//!
//! Each letter has an `encode_<letter>` entry point that the dispatcher
//! calls with the cursor on that letter. Most entry points run an ordered
//! chain of sub-rules (`&[Rule]`); the first one that recognizes its
//! context appends symbols and returns where encoding continues. When no
//! sub-rule matches, the entry point applies the letter's default.

use crate::encoder::{Advance, Metaphone3};
use metaphone3_core::character::is_vowel;

mod b;
mod c;
mod d;
mod f;
mod g;
mod h;
mod j;
mod k;
mod l;
mod m;
mod n;
mod p;
mod q;
mod r;
mod s;
mod t;
mod v;
mod vowels;
mod w;
mod x;
mod z;

impl Metaphone3 {
    /// Encode the letter under the cursor.
    pub(crate) fn encode_current(&mut self) -> Advance {
        match self.char_at(self.current) {
            'B' => self.encode_b(),
            'C' => self.encode_c(),
            'D' => self.encode_d(),
            'F' => self.encode_f(),
            'G' => self.encode_g(),
            'H' => self.encode_h(),
            'J' => self.encode_j(),
            'K' => self.encode_k(),
            'L' => self.encode_l(),
            'M' => self.encode_m(),
            'N' => self.encode_n(),
            'P' => self.encode_p(),
            'Q' => self.encode_q(),
            'R' => self.encode_r(),
            'S' => self.encode_s(),
            'T' => self.encode_t(),
            'V' => self.encode_v(),
            'W' => self.encode_w(),
            'X' => self.encode_x(),
            'Z' => self.encode_z(),
            'ß' | 'Ç' => self.encode_single("S"),
            'Ñ' => self.encode_single("N"),
            'Ð' | 'Þ' => self.encode_single("0"),
            'Š' => self.encode_single("X"),
            c if is_vowel(c) => self.encode_vowel(),
            _ => self.skip(1),
        }
    }

    fn encode_single(&mut self, symbol: &str) -> Advance {
        self.add(symbol);
        self.skip(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    fn primary(word: &str) -> String {
        let mut m = Metaphone3::new();
        m.set_normalized_word(word);
        m.encode();
        m.metaph().to_string()
    }

    #[test]
    fn single_character_mappings() {
        assert_eq!(primary("AÇA"), "AS");
        assert_eq!(primary("AÑO"), "AN");
        assert_eq!(primary("ÞOR"), "0R");
        assert_eq!(primary("AŠA"), "AX");
    }

    #[test]
    fn unknown_characters_are_skipped() {
        assert_eq!(primary("B-B"), "PP");
        assert_eq!(primary("*"), "");
    }
}
