use crate::encoder::{Advance, Metaphone3, Rule};

const H_CHAIN: &[Rule] = &[
    Metaphone3::encode_initial_silent_h,
    Metaphone3::encode_initial_hs,
    Metaphone3::encode_initial_hu_hw,
    Metaphone3::encode_non_initial_silent_h,
    Metaphone3::encode_h_pronounced,
];

impl Metaphone3 {
    /// H is kept only when initial before a vowel or between vowels.
    /// Otherwise it is skipped, which also covers HH.
    pub(crate) fn encode_h(&mut self) -> Advance {
        self.first_match(H_CHAIN).unwrap_or_else(|| self.skip(1))
    }

    /// American silent initial H: "hour", "herb", "heir", "honor".
    fn encode_initial_silent_h(&mut self) -> Option<Advance> {
        let c = self.current;
        if !(self.string_at(c + 1, &["OUR", "ERB", "EIR"])
            || self.string_at(c + 1, &["ONOR"])
            || self.string_at(c + 1, &["ONOUR", "ONEST"]))
        {
            return None;
        }

        // the name Herb keeps its H, the plant does not
        if c == 0 && self.string_at(0, &["HERB"]) {
            self.add_pair(if self.encode_vowels { "HA" } else { "H" }, "A");
        } else if c == 0 || self.encode_vowels {
            self.add("A");
        }
        Some(Advance(self.skip_vowels(c + 1)))
    }

    /// Old pinyin "HS-": "hsiao".
    fn encode_initial_hs(&mut self) -> Option<Advance> {
        if self.current == 0 && self.string_at(0, &["HS"]) {
            self.add("X");
            return Some(self.skip(2));
        }
        None
    }

    /// HU- as part of a diphthong in Spanish and pinyin: "huang", "huerta".
    fn encode_initial_hu_hw(&mut self) -> Option<Advance> {
        if !self.string_at(0, &["HUA", "HUE", "HWA"]) || self.string_at(self.current, &["HUEY"]) {
            return None;
        }

        self.add("A");
        if !self.encode_vowels {
            return Some(self.skip(3));
        }

        let mut next = self.current + 1;
        while self.is_vowel_at(next) || self.char_at(next) == 'W' {
            next += 1;
        }
        Some(Advance(next))
    }

    /// H silent between vowels: "nihilism", "graham", "prohibition".
    fn encode_non_initial_silent_h(&mut self) -> Option<Advance> {
        let c = self.current;
        if !(self.string_at(
            c - 2,
            &["NIHIL", "VEHEM", "LOHEN", "NEHEM", "MAHON", "MAHAN", "COHEN", "GAHAN"],
        ) || self.string_at(c - 3, &["GRAHAM", "PROHIB", "FRAHER", "TOOHEY", "TOUHEY"])
            || self.string_at(c - 3, &["TOUHY"])
            || self.string_at(0, &["CHIHUAHUA"]))
        {
            return None;
        }

        if !self.encode_vowels {
            return Some(self.skip(2));
        }
        Some(Advance(self.skip_vowels(c + 1)))
    }

    fn encode_h_pronounced(&mut self) -> Option<Advance> {
        let c = self.current;
        if (self.is_vowel_at(c + 1)
            && (c == 0 || self.is_vowel_at(c - 1) || self.char_at(c - 1) == 'W'))
            // "alwahhab"
            || (self.char_at(c + 1) == 'H' && self.is_vowel_at(c + 2))
        {
            self.add("H");
            return Some(self.advance_counter(2, 1));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{EncodeOptions, Metaphone3};

    fn keys(word: &str, vowels: bool) -> (String, String) {
        let e = Metaphone3::with_options(EncodeOptions::new(vowels, false)).encode_word(word);
        (e.primary, e.secondary)
    }

    #[test]
    fn silent_initial_h() {
        assert_eq!(keys("HOUR", false).0, "AR");
        assert_eq!(keys("HONEST", false).0, "ANST");
        assert_eq!(keys("HERB", false), ("HRP".into(), "ARP".into()));
    }

    #[test]
    fn pronounced_h() {
        assert_eq!(keys("HAPPY", false).0, "HP");
        assert_eq!(keys("AHOY", false).0, "AH");
        assert_eq!(keys("JOHN", false).0, "JN");
    }

    #[test]
    fn pinyin() {
        assert_eq!(keys("HSIAO", false).0, "X");
        assert_eq!(keys("HUANG", false).0, "ANK");
    }
}
