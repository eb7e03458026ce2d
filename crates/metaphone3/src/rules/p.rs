use crate::encoder::{Advance, Metaphone3, Rule};

const P_CHAIN: &[Rule] = &[
    Metaphone3::encode_silent_p_at_beginning,
    Metaphone3::encode_pt,
    Metaphone3::encode_ph,
    Metaphone3::encode_pph,
    Metaphone3::encode_rps,
    Metaphone3::encode_coup,
    Metaphone3::encode_pneum,
    Metaphone3::encode_psych,
    Metaphone3::encode_psalm,
];

impl Metaphone3 {
    pub(crate) fn encode_p(&mut self) -> Advance {
        if let Some(advance) = self.first_match(P_CHAIN) {
            return advance;
        }

        self.add("P");
        // "campbell", "raspberry"
        if self.string_at(self.current + 1, &["P", "B"]) {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }

    fn encode_silent_p_at_beginning(&mut self) -> Option<Advance> {
        (self.current == 0 && self.string_at(0, &["PN", "PF", "PS", "PT"])).then(|| self.skip(1))
    }

    /// "pterodactyl", "receipt", "asymptote".
    fn encode_pt(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.char_at(c + 1) == 'T'
            && ((c == 0 && self.string_at(0, &["PTERO"]))
                || self.string_at(c - 5, &["RECEIPT"])
                || self.string_at(c - 4, &["ASYMPTOT"]))
        {
            self.add("T");
            return Some(self.skip(2));
        }
        None
    }

    /// PH as F, except where it is silent ("phthalein") or where P and H
    /// belong to different words of a compound ("upheaval", "shepherd").
    fn encode_ph(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.char_at(c + 1) != 'H' {
            return None;
        }

        if self.string_at(c, &["PHTHALEIN"])
            || (c == 0 && self.string_at(0, &["PHTH"]))
            || self.string_at(c - 3, &["APOPHTHEGM"])
        {
            self.add("0");
            return Some(self.skip(4));
        }

        if c > 0
            && (self.string_at(
                c + 2,
                &["EAD", "OLE", "ELD", "ILL", "OLD", "EAP", "ERD", "ARD", "ANG", "ORN", "EAV", "ART"],
            ) || self.string_at(c + 2, &["OUSE"])
                || (self.string_at(c + 2, &["AM"]) && !self.string_at(c - 1, &["LPHAM"]))
                || self.string_at(c + 2, &["AMMER", "AZARD", "UGGER"])
                || (self.string_at(c + 2, &["OLSTER"])
                    && !self.string_at(c - 3, &["LYMPH", "NYMPH"])))
        {
            self.add("P");
            return Some(self.advance_counter(3, 2));
        }

        self.add("F");
        Some(self.skip(2))
    }

    /// "sappho".
    fn encode_pph(&mut self) -> Option<Advance> {
        let c = self.current;
        if c + 2 < self.length && self.char_at(c + 1) == 'P' && self.char_at(c + 2) == 'H' {
            self.add("F");
            return Some(self.skip(3));
        }
        None
    }

    /// French "corps", "corpsman"; not "corpse".
    fn encode_rps(&mut self) -> Option<Advance> {
        (self.string_at(self.current - 3, &["CORPS"])
            && !self.string_at(self.current - 3, &["CORPSE"]))
        .then(|| self.skip(2))
    }

    /// French "coup"; not "recoup".
    fn encode_coup(&mut self) -> Option<Advance> {
        let c = self.current;
        (c == self.last
            && self.string_at(c - 3, &["COUP"])
            && !self.string_at(c - 5, &["RECOUP"]))
        .then(|| self.skip(1))
    }

    /// Non-initial -PNEUM-: "apneumatic".
    fn encode_pneum(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["NEUM"]) {
            self.add("N");
            return Some(self.skip(2));
        }
        None
    }

    /// -PSYCH- carries the PS and the CH in one step.
    fn encode_psych(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["SYCH"]) {
            self.add(if self.encode_vowels { "SAK" } else { "SK" });
            return Some(self.skip(5));
        }
        None
    }

    fn encode_psalm(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["SALM"]) {
            self.add(if self.encode_vowels { "SAM" } else { "SM" });
            return Some(self.skip(5));
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
    fn ph() {
        assert_eq!(primary("PHONE"), "FN");
        assert_eq!(primary("SHEPHERD"), "XPRT");
        assert_eq!(primary("SAPPHO"), "SF");
    }

    #[test]
    fn silent_p() {
        assert_eq!(primary("PNEUMONIA"), "NMN");
        assert_eq!(primary("RECEIPT"), "RST");
        assert_eq!(primary("CORPS"), "KR");
        assert_eq!(primary("COUP"), "K");
        assert_eq!(primary("PSYCHOLOGY"), "SKLJ");
        assert_eq!(primary("CAMPBELL"), "KMPL");
    }
}
