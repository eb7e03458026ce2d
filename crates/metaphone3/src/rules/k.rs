use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_k(&mut self) -> Advance {
        if let Some(advance) = self.encode_silent_k() {
            return advance;
        }

        self.add("K");
        if matches!(self.char_at(self.current + 1), 'K' | 'Q') {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }

    fn encode_silent_k(&mut self) -> Option<Advance> {
        let c = self.current;
        if c == 0
            && self.string_at(0, &["KN"])
            && !self.string_at(c + 2, &["ESSET", "IEVEL"])
            && !self.string_at(c + 2, &["ISH"])
        {
            return Some(self.skip(1));
        }

        // "know", "knit", "knob"; "slipknot" is SLPNT but "banknote" PNKNT
        if (self.string_at(c + 1, &["NOW", "NIT", "NOT", "NOB"])
            && !self.string_at(0, &["BANKNOTE"]))
            || self.string_at(c + 1, &["NOCK", "NUCK", "NIFE", "NACK"])
            || self.string_at(c + 1, &["NIGHT"])
        {
            // N already encoded: "penknife"
            if c > 0 && self.char_at(c - 1) == 'N' {
                return Some(self.skip(2));
            }
            return Some(self.skip(1));
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
    fn silent_k() {
        assert_eq!(primary("KNIGHT"), "NT");
        assert_eq!(primary("KNESSET"), "KNST");
        assert_eq!(primary("PENKNIFE"), "PNF");
        assert_eq!(primary("SLIPKNOT"), "SLPNT");
        assert_eq!(primary("BANKNOTE"), "PNKNT");
    }

    #[test]
    fn redundant_k() {
        assert_eq!(primary("TREKKIE"), "TRK");
    }
}
