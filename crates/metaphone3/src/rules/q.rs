use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_q(&mut self) -> Advance {
        // Pinyin "qin"
        if self.string_at(self.current, &["QIN"]) {
            self.add("X");
            return self.skip(1);
        }

        let next = if self.char_at(self.current + 1) == 'Q' {
            self.skip(2)
        } else {
            self.skip(1)
        };
        self.add("K");
        next
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    #[test]
    fn q() {
        let mut m = Metaphone3::new();
        assert_eq!(m.encode_word("QUEEN").primary, "KN");
        assert_eq!(m.encode_word("QIN").primary, "XN");
    }
}
