// W: silent in WR, a vowel glide almost everywhere else, V or F in
// Germanic and Slavic names.

use crate::encoder::{Advance, Metaphone3, Rule};
use crate::gazetteer;

const W_CHAIN: &[Rule] = &[
    Metaphone3::encode_silent_w_at_beginning,
    Metaphone3::encode_witz_wicz,
    Metaphone3::encode_wr,
    Metaphone3::encode_initial_w_vowel,
    Metaphone3::encode_wh,
    Metaphone3::encode_eastern_european_w,
];

impl Metaphone3 {
    pub(crate) fn encode_w(&mut self) -> Advance {
        if let Some(advance) = self.first_match(W_CHAIN) {
            return advance;
        }

        // "rowe"
        if self.encode_vowels && self.current + 1 == self.last && self.string_at(self.current, &["WE"]) {
            self.add("A");
        }
        self.skip(1)
    }

    fn encode_silent_w_at_beginning(&mut self) -> Option<Advance> {
        (self.current == 0 && self.string_at(0, &["WR"])).then(|| self.skip(1))
    }

    /// Final -WICZ, -WITZ: "abramowicz" also as -FX.
    fn encode_witz_wicz(&mut self) -> Option<Advance> {
        let c = self.current;
        if !(c + 3 == self.last && self.string_at(c, &["WICZ", "WITZ"])) {
            return None;
        }

        if !self.encode_vowels {
            self.add_pair("TS", "FX");
        } else if self.primary_ends_with('A') {
            self.add_pair("TS", "FAX");
        } else {
            self.add_pair("ATS", "FAX");
        }
        Some(self.skip(4))
    }

    fn encode_wr(&mut self) -> Option<Advance> {
        if self.string_at(self.current, &["WR"]) {
            self.add("R");
            return Some(self.skip(2));
        }
        None
    }

    /// Initial W before a vowel is a vowel, with a V alternate for
    /// German and Slavic names ("wagner", "wozniak").
    fn encode_initial_w_vowel(&mut self) -> Option<Advance> {
        if !(self.current == 0 && self.is_vowel_at(1)) {
            return None;
        }

        if !self.string_at(0, gazetteer::GERMANIC_SLAVIC_W) {
            self.add("A");
        } else if self.encode_vowels {
            self.add_exact_approx("A", "VA", "A", "FA");
        } else {
            self.add_exact_approx("A", "V", "A", "F");
        }
        Some(Advance(self.skip_vowels(1)))
    }

    /// WH as H ("who", "whole", "rawhide") or as a vowel ("white").
    fn encode_wh(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c, &["WH"]) {
            return None;
        }

        if self.char_at(c + 2) == 'O'
            && !self.string_at(c + 2, &["OOSH"])
            && !self.string_at(c + 2, &["OOP", "OMP", "ORL", "ORT"])
            && !self.string_at(c + 2, &["OA", "OP"])
        {
            self.add("H");
            return Some(self.advance_counter(3, 2));
        }

        // compounds: "rawhide", "arrowhead", "bowhunter"
        if self.string_at(c + 2, &["IDE", "ARD", "EAD", "AWK", "ERD", "OOK", "AND", "OLE", "OOD"])
            || self.string_at(c + 2, &["EART", "OUSE", "OUND"])
            || self.string_at(c + 2, &["AMMER"])
        {
            self.add("H");
            return Some(self.skip(2));
        }

        if c == 0 {
            self.add("A");
            return Some(Advance(self.skip_vowels(c + 2)));
        }
        Some(self.skip(2))
    }

    /// Final W after a vowel and the -OWSKI family: "markow", "jablonowski".
    fn encode_eastern_european_w(&mut self) -> Option<Advance> {
        let c = self.current;
        if (c == self.last && self.is_vowel_at(c - 1))
            || self.string_at(c - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || (c + 4 == self.last && self.string_at(c, &["WICKI", "WACKI"]))
            || (c + 3 == self.last && self.string_at(c, &["WIAK"]))
            || self.string_at(0, &["SCH"])
        {
            self.add_exact_approx("", "V", "", "F");
            return Some(self.skip(1));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    fn encode(word: &str) -> (String, String) {
        let e = Metaphone3::new().encode_word(word);
        (e.primary, e.secondary)
    }

    #[test]
    fn silent_and_glide() {
        assert_eq!(encode("WRITE").0, "RT");
        assert_eq!(encode("WHITE").0, "AT");
        assert_eq!(encode("WHOLE").0, "HL");
    }

    #[test]
    fn germanic_and_slavic() {
        assert_eq!(encode("WAGNER"), ("AKNR".into(), "FKNR".into()));
        assert_eq!(encode("ABRAMOWICZ"), ("APRMTS".into(), "APRMFX".into()));
        assert_eq!(encode("MARKOWSKI"), ("MRKSK".into(), "MRKFSK".into()));
    }
}
