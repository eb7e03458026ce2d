use crate::encoder::{Advance, Metaphone3, Rule};

const X_CHAIN: &[Rule] = &[
    Metaphone3::encode_initial_x,
    Metaphone3::encode_greek_x,
    Metaphone3::encode_x_special_cases,
    Metaphone3::encode_x_to_h,
    Metaphone3::encode_x_vowel,
];

impl Metaphone3 {
    pub(crate) fn encode_x(&mut self) -> Advance {
        if let Some(advance) = self.first_match(X_CHAIN) {
            return advance;
        }

        self.encode_french_x_final();

        if self.string_at(self.current + 1, &["X", "Z", "S"])
            || self.string_at(self.current + 1, &["CI", "CE"])
        {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }

    /// Chinese "xiao", "xu"; any other initial X is S ("xavier").
    fn encode_initial_x(&mut self) -> Option<Advance> {
        if self.string_at(0, &["XIA", "XIO", "XIE"]) || self.string_at(0, &["XU"]) {
            self.add("X");
            return Some(self.skip(1));
        }
        if self.current == 0 {
            self.add("S");
            return Some(self.skip(1));
        }
        None
    }

    /// "xylophone", "xenophobe", "xanthippe" after a prefix.
    fn encode_greek_x(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["YLO", "YLE", "ENO"])
            || self.string_at(self.current + 1, &["ANTH"])
        {
            self.add("S");
            return Some(self.skip(1));
        }
        None
    }

    fn encode_x_special_cases(&mut self) -> Option<Advance> {
        // "luxury"
        if self.string_at(self.current - 2, &["LUXUR"]) {
            self.add_exact("GJ", "KJ");
            return Some(self.skip(1));
        }
        // Portuguese "teixeira"
        if self.string_at(0, &["TEXEIRA"]) || self.string_at(0, &["TEIXEIRA"]) {
            self.add("X");
            return Some(self.skip(1));
        }
        None
    }

    /// Spanish X as H: "oaxaca", "quixote".
    fn encode_x_to_h(&mut self) -> Option<Advance> {
        if self.string_at(self.current - 2, &["OAXACA"])
            || self.string_at(self.current - 3, &["QUIXOTE"])
        {
            self.add("H");
            return Some(self.skip(1));
        }
        None
    }

    /// "sexual", "connexion", "noxious".
    fn encode_x_vowel(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["UAL", "ION", "IOU"]) {
            self.add_pair("KX", "KS");
            return Some(self.advance_counter(3, 1));
        }
        None
    }

    /// KS, unless the X ends a French word: "breaux", "perroux".
    fn encode_french_x_final(&mut self) {
        let c = self.current;
        if !(c == self.last
            && (self.string_at(c - 3, &["IAU", "EAU", "IEU"])
                || self.string_at(c - 2, &["AI", "AU", "OU", "OI", "EU"])))
        {
            self.add("KS");
        }
    }
}
