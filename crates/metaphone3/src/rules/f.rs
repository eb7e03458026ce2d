use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_f(&mut self) -> Advance {
        // -FT- where the T is usually silent: "often", "soften"
        if self.string_at(self.current - 1, &["OFTEN"]) {
            self.add_pair("F", "FT");
            return self.skip(2);
        }

        self.add("F");
        if self.char_at(self.current + 1) == 'F' {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    #[test]
    fn often() {
        let e = Metaphone3::new().encode_word("OFTEN");
        assert_eq!((e.primary.as_str(), e.secondary.as_str()), ("AFN", "AFTN"));
    }

    #[test]
    fn doubled_f() {
        assert_eq!(Metaphone3::new().encode_word("JEFFERY").primary, "JFR");
    }
}
