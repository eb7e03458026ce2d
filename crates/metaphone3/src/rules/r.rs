// R: Polish -RZ-, R silent in French endings, and the -RE transposition
// of "centre" when vowels are encoded.

use crate::encoder::{Advance, Metaphone3};

impl Metaphone3 {
    pub(crate) fn encode_r(&mut self) -> Advance {
        if let Some(advance) = self.encode_rz() {
            return advance;
        }

        if !self.test_silent_r() && !self.encode_vowel_re_transposition() {
            self.add("R");
        }

        // "poitiers" also skips its S
        if self.char_at(self.current + 1) == 'R'
            || self.string_at(self.current - 6, &["POITIERS"])
        {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }

    /// -RZ- with American and Polish pronunciations.
    fn encode_rz(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c - 2, &["GARZ", "KURZ", "MARZ", "MERZ", "HERZ", "PERZ", "WARZ"])
            || self.string_at(c, &["RZANO", "RZOLA"])
            || self.string_at(c - 1, &["ARZA", "ARZN"])
        {
            return None;
        }

        // Z silent in the US, X in Poland
        if self.string_at(c - 4, &["YASTRZEMSKI"]) {
            self.add_pair("R", "X");
            return Some(self.skip(2));
        }

        if self.string_at(c - 1, &["BRZEZINSKI"]) {
            self.add_pair("RS", "RJ");
            return Some(self.skip(4));
        }

        // after a voiceless consonant, a vowel or at the start
        if self.string_at(c - 1, &["TRZ", "PRZ", "KRZ"])
            || (self.string_at(c, &["RZ"]) && (self.is_vowel_at(c - 1) || c == 0))
        {
            self.add_pair("RS", "X");
            return Some(self.skip(2));
        }

        // after a voiced consonant
        if self.string_at(c - 1, &["BRZ", "DRZ", "GRZ"]) {
            self.add_pair("RS", "J");
            return Some(self.skip(2));
        }

        None
    }

    /// R no longer pronounced: French "-IER" names ("rogier", "cartier"),
    /// "monsieur", "worcester".
    fn test_silent_r(&self) -> bool {
        let c = self.current;
        (c == self.last
            && self.string_at(c - 2, &["IER"])
            && (self.string_at(c - 5, &["MET", "VIV", "LUC"])
                || self.string_at(
                    c - 6,
                    &[
                        "CART", "DOSS", "FOUR", "OLIV", "BUST", "DAUM", "ATEL", "SONN", "CORM",
                        "MERC", "PELT", "POIR", "BERN", "FORT", "GREN", "SAUC", "GAGN", "GAUT",
                        "GRAN", "FORC", "MESS", "LUSS", "MEUN", "POTH", "HOLL", "CHEN",
                    ],
                )
                || self.string_at(
                    c - 7,
                    &["CROUP", "TORCH", "CLOUT", "FOURN", "GAUTH", "TROTT", "DEROS", "CHART"],
                )
                || self.string_at(
                    c - 8,
                    &["CHEVAL", "LAVOIS", "PELLET", "SOMMEL", "TREPAN", "LETELL", "COLOMB"],
                )
                || self.string_at(c - 9, &["CHARCUT"])
                || self.string_at(c - 10, &["CHARPENT"])))
            || self.string_at(c - 2, &["SURBURB", "WORSTED"])
            || self.string_at(c - 2, &["WORCESTER"])
            || self.string_at(c - 7, &["MONSIEUR"])
            || self.string_at(c - 6, &["POITIERS"])
    }

    /// Final -RE, -RED, -RES said as -ER when vowels are encoded:
    /// "fibre" => FABAR, "centre" => SANTAR.
    fn encode_vowel_re_transposition(&mut self) -> bool {
        let c = self.current;
        if self.encode_vowels
            && self.length > 3
            && self.char_at(c + 1) == 'E'
            && !self.string_at(0, &["OUTRE", "LIBRE", "ANDRE"])
            && !(self.length == 4 && self.string_at(0, &["FRED", "TRES"]))
            && !self.string_at(c - 2, &["LDRED", "LFRED", "NDRED", "NFRED", "NDRES", "IFRED"])
            && !self.is_vowel_at(c - 1)
            && (c + 1 == self.last
                || (c + 2 == self.last && self.string_at(self.last, &["D", "S"])))
        {
            self.add("AR");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{EncodeOptions, Metaphone3};

    #[test]
    fn polish_rz() {
        let e = Metaphone3::new().encode_word("BRZEZINSKI");
        assert_eq!(e.primary, "PRSNSK");
        assert_eq!(e.secondary, "PRJNSK");
    }

    #[test]
    fn silent_r() {
        let mut m = Metaphone3::new();
        assert_eq!(m.encode_word("CARTIER").primary, "KRT");
        assert_eq!(m.encode_word("MONSIEUR").primary, "MS");
    }

    #[test]
    fn re_transposition() {
        let mut m = Metaphone3::with_options(EncodeOptions::new(true, false));
        assert_eq!(m.encode_word("CENTRE").primary, "SANTAR");
        assert_eq!(m.encode_word("FIBRE").primary, "FAPAR");
    }
}
