use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_b(&mut self) -> Advance {
        if let Some(advance) = self.encode_silent_b() {
            return advance;
        }

        // -MB ("dumb") is consumed under M
        self.add_exact("B", "P");

        if self.char_at(self.current + 1) == 'B'
            || (self.char_at(self.current + 1) == 'P'
                && self.current + 1 < self.last
                && self.char_at(self.current + 2) != 'H')
        {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }

    /// "debt", "doubt", "subtle".
    fn encode_silent_b(&mut self) -> Option<Advance> {
        if self.string_at(self.current - 2, &["DEBT"])
            || self.string_at(self.current - 2, &["SUBTL"])
            || self.string_at(self.current - 2, &["SUBTIL"])
            || self.string_at(self.current - 3, &["DOUBT"])
        {
            self.add("T");
            return Some(self.skip(2));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    fn primary(word: &str) -> String {
        let mut m = Metaphone3::new();
        m.encode_word(word).primary
    }

    #[test]
    fn doubled_and_bp() {
        assert_eq!(primary("ABBOT"), "APT");
        assert_eq!(primary("SUBPOENA"), "SPN");
    }

    #[test]
    fn silent_b() {
        assert_eq!(primary("DEBT"), "TT");
        assert_eq!(primary("DOUBT"), "TT");
    }
}
