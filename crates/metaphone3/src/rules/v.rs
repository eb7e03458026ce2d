use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_v(&mut self) -> Advance {
        let next = if self.char_at(self.current + 1) == 'V' {
            self.skip(2)
        } else {
            self.skip(1)
        };
        self.add_exact("V", "F");
        next
    }
}

#[cfg(test)]
mod tests {
    use crate::{EncodeOptions, Metaphone3};

    #[test]
    fn v_is_f_unless_exact() {
        assert_eq!(Metaphone3::new().encode_word("VIVA").primary, "FF");
        let mut exact = Metaphone3::with_options(EncodeOptions::new(false, true));
        assert_eq!(exact.encode_word("VIVA").primary, "VV");
    }
}
