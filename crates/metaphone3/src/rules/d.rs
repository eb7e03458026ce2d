use crate::encoder::{Advance, Metaphone3, Rule};

const D_CHAIN: &[Rule] = &[
    Metaphone3::encode_dg,
    Metaphone3::encode_dj,
    Metaphone3::encode_dt_dd,
    Metaphone3::encode_d_to_j,
    Metaphone3::encode_dous,
    Metaphone3::encode_silent_d,
];

impl Metaphone3 {
    pub(crate) fn encode_d(&mut self) -> Advance {
        if let Some(advance) = self.first_match(D_CHAIN) {
            return advance;
        }

        if !self.encode_exact {
            self.add("T");
        } else if self.current == self.last && self.string_at(self.current - 3, &["SSED"]) {
            // final devoicing: "missed" == "mist"
            self.add("T");
        } else {
            self.add("D");
        }
        self.skip(1)
    }

    fn encode_dg(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c, &["DG"]) {
            return None;
        }

        // "edgar", and G starting a combining form: "handgun", "waldglas"
        if self.string_at(c + 2, &["A", "O"])
            || self.string_at(c + 1, &["GUN", "GUT"])
            || self.string_at(c + 1, &["GEAR", "GLAS", "GRIP", "GREN", "GILL", "GRAF"])
            || self.string_at(c + 1, &["GUARD", "GUILT", "GRAVE", "GRASS"])
            || self.string_at(c + 1, &["GROUSE"])
        {
            self.add_exact("DG", "TK");
        } else {
            // "edge", "abridgment"
            self.add("J");
        }
        Some(self.skip(2))
    }

    /// "adjacent".
    fn encode_dj(&mut self) -> Option<Advance> {
        if self.string_at(self.current, &["DJ"]) {
            self.add("J");
            return Some(self.skip(2));
        }
        None
    }

    fn encode_dt_dd(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c, &["DT", "DD"]) {
            return None;
        }

        if self.string_at(c, &["DTH"]) {
            self.add_exact("D0", "T0");
            return Some(self.skip(3));
        }
        if self.encode_exact && self.string_at(c, &["DD"]) {
            self.add("D");
        } else {
            self.add("T");
        }
        Some(self.skip(2))
    }

    /// -DU-, -DI-, -DEU- as J: "module", "soldier", "grandeur",
    /// "education", "individual".
    fn encode_d_to_j(&mut self) -> Option<Advance> {
        let c = self.current;
        if (self.string_at(c, &["DUL"]) && self.is_vowel_at(c - 1) && self.is_vowel_at(c + 3))
            || (c + 3 == self.last
                && self.string_at(c - 1, &["LDIER", "NDEUR", "EDURE", "RDURE"]))
            || self.string_at(c - 3, &["CORDIAL"])
            || self.string_at(c - 1, &["NDULA", "NDULU", "EDUCA"])
            || self.string_at(c - 1, &["ADUA", "IDUA", "IDUU"])
        {
            self.add_exact_approx("J", "D", "J", "T");
            return Some(self.advance_counter(2, 1));
        }
        None
    }

    /// Latinate -DUOUS: "assiduous", "arduous".
    fn encode_dous(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["UOUS"]) {
            self.add_exact_approx("J", "D", "J", "T");
            return Some(self.advance_counter(4, 1));
        }
        None
    }

    /// "wednesday", "handsome", and French final D ("pernod").
    fn encode_silent_d(&mut self) -> Option<Advance> {
        let c = self.current;
        (self.string_at(c - 2, &["WEDNESDAY"])
            || self.string_at(c - 3, &["HANDKER", "HANDSOM", "WINDSOR"])
            || self.string_at(c - 5, &["PERNOD", "ARTAUD", "RENAUD"])
            || self.string_at(c - 6, &["RIMBAUD", "MICHAUD", "BICHAUD"]))
            .then(|| self.skip(1))
    }
}
