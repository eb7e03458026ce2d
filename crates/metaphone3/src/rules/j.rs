// J: Spanish H, German Y, English J, and J standing in for a vowel.

use crate::encoder::{Advance, Metaphone3, Rule};
use crate::gazetteer;

const J_CHAIN: &[Rule] = &[Metaphone3::encode_spanish_j, Metaphone3::encode_spanish_oj_uj];

impl Metaphone3 {
    pub(crate) fn encode_j(&mut self) -> Advance {
        if let Some(advance) = self.first_match(J_CHAIN) {
            return advance;
        }
        self.encode_other_j()
    }

    /// Spanish J as H: "jose", "san jacinto", "trujillo", "mejia".
    fn encode_spanish_j(&mut self) -> Option<Advance> {
        let c = self.current;
        if (self.string_at(c + 1, &["UAN", "ACI", "ALI", "EFE", "ICA", "IME", "OAQ", "UAR"])
            && !self.string_at(c, &["JIMERSON", "JIMERSEN"]))
            || (c + 3 == self.last && self.string_at(c + 1, &["OSE"]))
            || self.string_at(c + 1, &["EREZ", "UNTA", "AIME", "AVIE", "AVIA"])
            || self.string_at(c + 1, &["IMINEZ", "ARAMIL"])
            || (c + 2 == self.last && self.string_at(c - 2, &["MEJIA"]))
            || self.string_at(
                c - 2,
                &[
                    "TEJED", "TEJAD", "LUJAN", "FAJAR", "BEJAR", "BOJOR", "CAJIG", "DEJAS",
                    "DUJAR", "DUJAN", "MIJAR", "MEJOR", "NAJAR", "NOJOS", "RAJED", "RIJAL",
                    "REJON", "TEJAN", "UIJAN",
                ],
            )
            || self.string_at(c - 3, &["ALEJANDR", "GUAJARDO", "TRUJILLO"])
            || (c > 2 && self.string_at(c - 2, &["RAJAS"]))
            || (self.string_at(c - 2, &["MEJIA"]) && !self.string_at(c - 2, &["MEJIAN"]))
            || self.string_at(c - 1, &["OJEDA"])
            || self.string_at(c - 3, &["LEIJA", "MINJA"])
            || self.string_at(c - 3, &["VIAJES", "GRAJAL"])
            || self.string_at(c, &["JAUREGUI"])
            || self.string_at(c - 4, &["HINOJOSA"])
            || self.string_at(0, &["SAN "])
            || (c + 1 == self.last
                && self.char_at(c + 1) == 'O'
                && !self.string_at(0, &["TOJO"])
                && !self.string_at(0, &["BANJO"])
                && !self.string_at(0, &["MARYJO"]))
        {
            // Americans say "juan", "marijuana", "tijuana" without the H
            if !self.string_at(c, &["JUAN"]) && !self.string_at(c, &["JOAQ"]) {
                self.add("H");
            } else if c == 0 {
                self.add("A");
            }
            return Some(self.advance_counter(2, 1));
        }

        // "jorge", "julio", "jesus" get an H alternate
        if self.string_at(c + 1, &["ORGE", "ULIO", "ESUS"]) && !self.string_at(0, &["JORGEN"]) {
            // both consonants of "jorge"
            if c + 4 == self.last && self.string_at(c + 1, &["ORGE"]) {
                if self.encode_vowels {
                    self.add_pair("JARJ", "HARHA");
                } else {
                    self.add_pair("JRJ", "HRH");
                }
                return Some(self.advance_counter(5, 5));
            }

            self.add_pair("J", "H");
            return Some(self.advance_counter(2, 1));
        }
        None
    }

    /// German J as a Y glide: "jahn", "johann", "jung".
    fn encode_german_j(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c + 1, &["AH"])
            || (c + 5 == self.last && self.string_at(c + 1, &["OHANN"]))
            || (self.string_at(c + 1, &["UNG"]) && !self.string_at(c + 1, &["UNGL"]))
            || self.string_at(c + 1, &["UGO"])
        {
            self.add("A");
            return Some(self.advance_counter(2, 1));
        }
        None
    }

    /// Spanish -JOJ-, -JUJ-: "jojoba", "jujuy".
    fn encode_spanish_oj_uj(&mut self) -> Option<Advance> {
        if !self.string_at(self.current + 1, &["OJOBA", "UJUY "]) {
            return None;
        }
        if self.encode_vowels {
            self.add("HAH");
            Some(self.skip(3))
        } else {
            self.add("HH");
            Some(self.skip(4))
        }
    }

    /// Initial J before a vowel, with a Y alternate for names like "John".
    /// The following vowels are consumed here.
    fn encode_initial_j(&mut self) -> Advance {
        let c = self.current;
        if !self.is_vowel_at(c + 1) {
            self.add("J");
            return self.skip(1);
        }

        let main = if self.encode_vowels { "JA" } else { "J" };
        if c == 0 && self.string_at(0, gazetteer::J_ALT_Y) {
            // Y is a vowel, so the alternate is A
            self.add_pair(main, "A");
        } else {
            self.add(main);
        }
        Advance(self.skip_vowels(c + 1))
    }

    /// Spanish J near the end: "brujo", "badajoz", "rioja".
    fn encode_spanish_j_2(&mut self) -> Option<Advance> {
        let c = self.current;
        if (c == 2 && self.string_at(0, &["BOJA", "BAJA", "BEJA", "BOJO", "MOJA", "MOJI", "MEJI"]))
            || (c == 3
                && self.string_at(
                    0,
                    &["FRIJO", "BRUJO", "BRUJA", "GRAJE", "GRIJA", "LEIJA", "QUIJA"],
                ))
            || (c + 3 == self.last && self.string_at(c - 1, &["AJARA"]))
            || (c + 2 == self.last
                && self.string_at(
                    c - 1,
                    &[
                        "AJOS", "EJOS", "OJAS", "OJOS", "UJON", "AJOZ", "AJAL", "UJAR", "EJON",
                        "EJAN",
                    ],
                ))
            || (c + 1 == self.last
                && self.string_at(c - 1, &["OJA", "EJA"])
                && !self.string_at(0, &["DEJA"]))
        {
            self.add("H");
            return Some(self.advance_counter(2, 1));
        }
        None
    }

    /// J standing for a vowel or glide, where nothing is encoded:
    /// "stijl", "fjord", "ljubljana". "-JEWSK-" still gets a J.
    fn encode_j_as_vowel(&mut self) -> bool {
        let c = self.current;
        if self.string_at(c, &["JEWSK"]) {
            self.add_pair("J", "");
            return true;
        }

        // Dutch, Scandinavian and Eastern European, not Hindi or Arabic
        (self.string_at(c + 1, &["L", "T", "K", "S", "N", "M"]) && !self.string_at(c + 2, &["A"]))
            || self.string_at(0, &["HALLELUJA", "LJUBLJANA"])
            || self.string_at(0, &["LJUB", "BJOR"])
            || self.string_at(0, &["HAJEK"])
            || self.string_at(0, &["WOJ"])
            || self.string_at(0, &["FJ"])
            // "rekjavik", "blagojevic"
            || self.string_at(c, &["JAVIK", "JEVIC"])
            || (c + 1 == self.last && self.string_at(0, &["SONJA", "TANJA", "TONJA"]))
    }

    fn encode_other_j(&mut self) -> Advance {
        if self.current == 0 {
            if let Some(advance) = self.encode_german_j() {
                return advance;
            }
            return self.encode_initial_j();
        }

        if let Some(advance) = self.encode_spanish_j_2() {
            return advance;
        }
        if !self.encode_j_as_vowel() {
            self.add("J");
        }

        // "hajj"
        if self.char_at(self.current + 1) == 'J' {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    fn keys(word: &str) -> (String, String) {
        let e = Metaphone3::new().encode_word(word);
        (e.primary, e.secondary)
    }

    #[test]
    fn spanish_j() {
        assert_eq!(keys("JOSE").0, "HS");
        assert_eq!(keys("JUAN").0, "AN");
        assert_eq!(keys("JORGE"), ("JRJ".into(), "HRH".into()));
    }

    #[test]
    fn names_with_y_alternate() {
        assert_eq!(keys("JOHN"), ("JN".into(), "AN".into()));
        assert_eq!(keys("JOSEPH"), ("JSF".into(), "ASF".into()));
    }

    #[test]
    fn german_and_vowel_j() {
        assert_eq!(keys("JUNG").0, "ANK");
        assert_eq!(keys("FJORD").0, "FRT");
        assert_eq!(keys("HAJJ").0, "HJ");
    }
}
