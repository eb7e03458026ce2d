use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_n(&mut self) -> Advance {
        if let Some(advance) = self.encode_nce() {
            return advance;
        }

        let Advance(next) = if self.char_at(self.current + 1) == 'N' {
            self.skip(2)
        } else {
            self.skip(1)
        };

        // "monsieur", "aloneness"
        if !self.string_at(next - 3, &["MONSIEUR"]) && !self.string_at(next - 3, &["NENESS"]) {
            self.add("N");
        }
        Advance(next)
    }

    /// -NCE, -NSE: "entrance" sounds like "entrants".
    fn encode_nce(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c + 1, &["C", "S"])
            && self.string_at(c + 2, &["E", "Y", "I"])
            && (c + 2 == self.last || (c + 3 == self.last && self.char_at(c + 3) == 'S'))
        {
            self.add("NTS");
            return Some(self.skip(2));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    fn primary(word: &str) -> String {
        Metaphone3::new().encode_word(word).primary
    }

    #[test]
    fn nce() {
        assert_eq!(primary("ENTRANCE"), primary("ENTRANTS"));
        assert_eq!(primary("DANCES"), "TNTSS");
    }

    #[test]
    fn doubled_and_silent_n() {
        assert_eq!(primary("ANNA"), "AN");
        assert_eq!(primary("MONSIEUR"), "MS");
    }
}
