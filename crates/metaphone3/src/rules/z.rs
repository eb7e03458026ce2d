use crate::encoder::{Advance, Metaphone3, Rule};

const Z_CHAIN: &[Rule] = &[
    Metaphone3::encode_zz,
    Metaphone3::encode_zu_zier_zs,
    Metaphone3::encode_french_ez,
    Metaphone3::encode_german_z,
    Metaphone3::encode_zh,
];

impl Metaphone3 {
    pub(crate) fn encode_z(&mut self) -> Advance {
        if let Some(advance) = self.first_match(Z_CHAIN) {
            return advance;
        }

        self.add("S");
        if self.char_at(self.current + 1) == 'Z' {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }

    /// Italian ZZ: "pizza", "mozzarella".
    fn encode_zz(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.char_at(c + 1) == 'Z'
            && ((c + 2 == self.last && self.string_at(self.last, &["I", "O", "A"]))
                || self.string_at(c - 2, &["MOZZARELL", "PIZZICATO", "PUZZONLAN"]))
        {
            self.add_pair("TS", "S");
            return Some(self.skip(2));
        }
        None
    }

    /// "azure", "brazier", Hungarian "zsa zsa".
    fn encode_zu_zier_zs(&mut self) -> Option<Advance> {
        let c = self.current;
        if !((c == 1 && self.string_at(0, &["AZUR"]))
            || (self.string_at(c, &["ZIER"]) && !self.string_at(c - 2, &["VIZIER"]))
            || self.string_at(c, &["ZSA"]))
        {
            return None;
        }

        self.add_pair("J", "S");
        if self.string_at(c, &["ZSA"]) {
            Some(self.skip(2))
        } else {
            Some(self.skip(1))
        }
    }

    /// Silent final Z: "chez", "rendezvous".
    fn encode_french_ez(&mut self) -> Option<Advance> {
        ((self.current == 3 && self.string_at(0, &["CHEZ"]))
            || self.string_at(self.current - 5, &["RENDEZ"]))
        .then(|| self.skip(1))
    }

    /// German Z as TS: "mozart", "holz", "zeitgeist".
    fn encode_german_z(&mut self) -> Option<Advance> {
        let c = self.current;
        if !((c == 2 && c + 1 == self.last && self.string_at(c - 2, &["NAZI"]))
            || self.string_at(c - 2, &["NAZIFY", "MOZART"])
            || self.string_at(c - 3, &["HOLZ", "HERZ", "MERZ", "FITZ"])
            || (self.string_at(c - 3, &["GANZ"]) && !self.is_vowel_at(c + 1))
            || self.string_at(c - 4, &["STOLZ", "PRINZ"])
            || self.string_at(c - 4, &["VENEZIA"])
            || self.string_at(c - 3, &["HERZOG"])
            || (self.word_contains("SCH") && !self.string_at(self.last - 2, &["IZE", "OZE", "ZEL"]))
            || (c > 0 && self.string_at(c, &["ZEIT"]))
            || self.string_at(c - 3, &["WEIZ"]))
        {
            return None;
        }

        if c > 0 && self.char_at(c - 1) == 'T' {
            self.add("S");
        } else {
            self.add("TS");
        }
        Some(self.skip(1))
    }

    /// Transliterated ZH: "zhivago".
    fn encode_zh(&mut self) -> Option<Advance> {
        if self.char_at(self.current + 1) == 'H' {
            self.add("J");
            return Some(self.skip(2));
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
    fn z() {
        assert_eq!(encode("PIZZA"), ("PTS".into(), "PS".into()));
        assert_eq!(encode("AZURE"), ("AJR".into(), "ASR".into()));
        assert_eq!(encode("MOZART").0, "MTSRT");
        assert_eq!(encode("ZHIVAGO").0, "JFK");
        assert_eq!(encode("ZOO").0, "S");
    }
}
