// T: TH in its three values (0, T, separate T-H across a compound), the
// palatal -TION/-TURE/-TIAN family, and silent final T in French loans.

use crate::encoder::{Advance, Metaphone3, Rule};

const T_CHAIN: &[Rule] = &[
    Metaphone3::encode_t_initial,
    Metaphone3::encode_tch,
    Metaphone3::encode_silent_french_t,
    Metaphone3::encode_tun_tul_tua_tuo,
    Metaphone3::encode_tue_teu_teou_tul_tie,
    Metaphone3::encode_tur_tiu_suffixes,
    Metaphone3::encode_ti,
    Metaphone3::encode_tient,
    Metaphone3::encode_tsch,
    Metaphone3::encode_tzsch,
    Metaphone3::encode_th_pronounced_separately,
    Metaphone3::encode_tth,
    Metaphone3::encode_th,
];

impl Metaphone3 {
    pub(crate) fn encode_t(&mut self) -> Advance {
        if let Some(advance) = self.first_match(T_CHAIN) {
            return advance;
        }

        let next = if self.string_at(self.current + 1, &["T", "D"]) {
            self.skip(2)
        } else {
            self.skip(1)
        };
        self.add("T");
        next
    }

    /// Word-initial T: "tsar", Chinese "tso", "tsing", "tjia", Thai "thai".
    fn encode_t_initial(&mut self) -> Option<Advance> {
        if self.current != 0 {
            return None;
        }

        if self.string_at(1, &["SAR", "ZAR"]) {
            return Some(self.skip(1));
        }

        if (self.length == 3 && self.string_at(1, &["SO", "SA", "SU"]))
            || (self.length == 4 && self.string_at(1, &["SAO", "SAI"]))
            || (self.length == 5 && self.string_at(1, &["SING", "SANG"]))
        {
            self.add("X");
            return Some(self.advance_counter(3, 2));
        }

        if self.string_at(1, &["S"]) && self.is_vowel_at(2) {
            self.add_pair("TS", "S");
            return Some(self.advance_counter(3, 2));
        }

        if self.string_at(1, &["J"]) {
            self.add("X");
            return Some(self.advance_counter(3, 2));
        }

        if (self.length == 3 && self.string_at(1, &["HU"]))
            || self.string_at(1, &["HAI", "HUY", "HAO"])
            || self.string_at(1, &["HYME", "HYMY", "HANH"])
            || self.string_at(1, &["HERES"])
        {
            self.add("T");
            return Some(self.advance_counter(3, 2));
        }

        None
    }

    fn encode_tch(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["CH"]) {
            self.add("X");
            return Some(self.skip(3));
        }
        None
    }

    /// Final T silent in French loans: "ballet", "depot", "camembert".
    fn encode_silent_french_t(&mut self) -> Option<Advance> {
        let c = self.current;
        (((c == self.last && self.string_at(c - 4, &["MONET", "GENET", "CHAUT"]))
            || self.string_at(c - 2, &["POTPOURRI"])
            || self.string_at(c - 3, &["BOATSWAIN"])
            || self.string_at(c - 3, &["MORTGAGE"])
            || self.string_at(
                c - 4,
                &["BERET", "BIDET", "FILET", "DEBUT", "DEPOT", "PINOT", "TAROT"],
            )
            || self.string_at(
                c - 5,
                &[
                    "BALLET", "BUFFET", "CACHET", "CHALET", "ESPRIT", "RAGOUT", "GOULET",
                    "CHABOT", "BENOIT",
                ],
            )
            || self.string_at(
                c - 6,
                &[
                    "GOURMET", "BOUQUET", "CROCHET", "CROQUET", "PARFAIT", "PINCHOT", "CABARET",
                    "PARQUET", "RAPPORT", "TOUCHET", "COURBET", "DIDEROT",
                ],
            )
            || self.string_at(
                c - 7,
                &[
                    "ENTREPOT", "CABERNET", "DUBONNET", "MASSENET", "MUSCADET", "RICOCHET",
                    "ESCARGOT",
                ],
            )
            || self.string_at(
                c - 8,
                &["SOBRIQUET", "CABRIOLET", "CASSOULET", "OUBRIQUET", "CAMEMBERT"],
            ))
            && !self.string_at(c + 1, &["AN", "RY", "IC", "OM", "IN"]))
            .then(|| self.skip(1))
    }

    /// "fortune", "titular", "actual".
    fn encode_tun_tul_tua_tuo(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c - 3, &["FORTUN"])
            || (self.string_at(c, &["TUL"]) && self.is_vowel_at(c - 1) && self.is_vowel_at(c + 3))
            || self.string_at(c - 2, &["BITUA", "BITUE"])
            || (c > 1 && self.string_at(c, &["TUA", "TUO"]))
        {
            self.add_pair("X", "T");
            return Some(self.skip(1));
        }
        None
    }

    /// "constituent", "righteous", "statute", "amateur", "patience".
    fn encode_tue_teu_teou_tul_tie(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c + 1, &["UENT"])
            || self.string_at(c - 4, &["RIGHTEOUS"])
            || self.string_at(c - 3, &["STATUTE"])
            || self.string_at(c - 3, &["AMATEUR"])
            || self.string_at(c - 1, &["NTULE", "NTULA", "STULE", "STULA", "STEUR"])
            || (c + 2 == self.last && self.string_at(c, &["TUE"]))
            || self.string_at(c, &["TUENC"])
            || self.string_at(c - 3, &["STATUTOR"])
            || (c + 5 == self.last && self.string_at(c, &["TIENCE"]))
        {
            self.add_pair("X", "T");
            return Some(self.advance_counter(2, 1));
        }
        None
    }

    /// "nature", "century", "tertius"; "ventura" keeps its T.
    fn encode_tur_tiu_suffixes(&mut self) -> Option<Advance> {
        let c = self.current;
        if !(c > 0 && self.string_at(c + 1, &["URE", "URA", "URI", "URY", "URO", "IUS"])) {
            return None;
        }

        if (c + 3 == self.last
            && self.string_at(c + 1, &["URA", "URO"])
            && !self.string_at(c - 3, &["VENTURA"]))
            || self.string_at(c + 1, &["URIA"])
        {
            self.add("T");
        } else {
            self.add_pair("X", "T");
        }
        Some(self.advance_counter(2, 1))
    }

    /// -TIO-, -TIAL, -TIAN, -TIATE: "nation", "martial", "christian".
    fn encode_ti(&mut self) -> Option<Advance> {
        let c = self.current;
        if !((self.string_at(c + 1, &["IO"]) && !self.string_at(c - 1, &["ETIOL"]))
            || self.string_at(c + 1, &["IAL"])
            || self.string_at(c - 1, &["RTIUM", "ATIUM"])
            || (c > 0
                && self.string_at(c + 1, &["IAN"])
                && !self.string_at(c - 4, &["FAUSTIAN"])
                && !self.string_at(c - 5, &["PROUSTIAN"])
                && !self.string_at(c - 2, &["TATIANA"])
                && !self.string_at(c - 3, &["KANTIAN", "GENTIAN"])
                && !self.string_at(c - 8, &["ROOSEVELTIAN"]))
            || (c + 2 == self.last
                && self.string_at(c, &["TIA"])
                // "hestia", "ostia", "izvestia"
                && !self.string_at(c - 3, &["HESTIA", "MASTIA"])
                && !self.string_at(c - 2, &["OSTIA"])
                && !self.string_at(0, &["TIA"])
                && !self.string_at(c - 5, &["IZVESTIA"]))
            || self.string_at(c + 1, &["IATE", "IATI", "IABL", "IATO", "IARY"])
            || self.string_at(c - 5, &["CHRISTIAN"]))
        {
            return None;
        }

        if (c == 2 && self.string_at(0, &["ANTI"]))
            || self.string_at(0, &["PATIO", "PITIA", "DUTIA"])
        {
            self.add("T");
        } else if self.string_at(c - 4, &["EQUATION"]) {
            self.add("J");
        } else if self.string_at(c, &["TION"]) {
            self.add("X");
        } else if self.string_at(0, &["KATIA", "LATIA"]) {
            self.add_pair("T", "X");
        } else {
            self.add_pair("X", "T");
        }
        Some(self.advance_counter(3, 1))
    }

    /// "patient", "quotient".
    fn encode_tient(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["IENT"]) {
            self.add_pair("X", "T");
            return Some(self.advance_counter(3, 1));
        }
        None
    }

    /// German "deutsch"; not "weltschmerz", "klatsch", "festschrift".
    fn encode_tsch(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c, &["TSCH"]) && !self.string_at(c - 3, &["WELT", "KLAT", "FEST"]) {
            self.add("X");
            return Some(self.skip(4));
        }
        None
    }

    /// "nietzsche".
    fn encode_tzsch(&mut self) -> Option<Advance> {
        if self.string_at(self.current, &["TZSCH"]) {
            self.add("X");
            return Some(self.skip(5));
        }
        None
    }

    /// T and H in separate parts of a compound: "pothole", "sweetheart",
    /// "warthog"; also "esther" and "goethe".
    fn encode_th_pronounced_separately(&mut self) -> Option<Advance> {
        let c = self.current;
        if !((c > 0
            && self.string_at(
                c + 1,
                &[
                    "HOOD", "HEAD", "HEID", "HAND", "HILL", "HOLD", "HAWK", "HEAP", "HERD",
                    "HOLE", "HOOK", "HUNT", "HUMO", "HAUS", "HOFF", "HARD",
                ],
            )
            && !self.string_at(c - 3, &["SOUTH", "NORTH"]))
            || self.string_at(c + 1, &["HOUSE", "HEART", "HASTE", "HYPNO", "HEQUE"])
            || (c + 4 == self.last
                && self.string_at(c + 1, &["HALL"])
                && !self.string_at(c - 3, &["SOUTH", "NORTH"]))
            || (c + 3 == self.last
                && self.string_at(c + 1, &["HAM"])
                && !self.string_at(0, &["GOTHAM", "WITHAM", "LATHAM"])
                && !self.string_at(0, &["BENTHAM", "WALTHAM", "WORTHAM"])
                && !self.string_at(0, &["GRANTHAM"]))
            || (c != 0 && self.string_at(c + 1, &["HATCH"]) && !self.string_at(c - 2, &["UNTHATCH"]))
            || self.string_at(c - 3, &["WARTHOG"])
            || self.string_at(c - 2, &["ESTHER"])
            || self.string_at(c - 3, &["GOETHE"])
            || self.string_at(c - 2, &["NATHALIE"]))
        {
            return None;
        }

        if self.string_at(c - 3, &["POSTHUM"]) {
            self.add("X");
        } else {
            self.add("T");
        }
        Some(self.skip(2))
    }

    /// "matthew" => M0, otherwise T0.
    fn encode_tth(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c, &["TTH"]) {
            return None;
        }
        if self.string_at(c - 2, &["MATTH"]) {
            self.add("0");
        } else {
            self.add("T0");
        }
        Some(self.skip(3))
    }

    /// TH as 0, or T in "thomas", "thames" and Dutch and German names.
    fn encode_th(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c, &["TH"]) {
            return None;
        }

        if self.string_at(c - 3, &["CLOTHES"]) {
            return Some(self.skip(3));
        }

        if self.string_at(
            c + 2,
            &["OMAS", "OMPS", "OMPK", "OMSO", "OMSE", "AMES", "OVEN", "OFEN", "ILDA", "ILDE"],
        ) || (self.length == 4 && self.string_at(0, &["THOM"]))
            || (self.length == 5 && self.string_at(0, &["THOMS"]))
            || self.string_at(0, &["VAN ", "VON "])
            || self.string_at(0, &["SCH"])
        {
            self.add("T");
        } else if self.string_at(0, &["SM"]) {
            self.add_pair("0", "T");
        } else {
            self.add("0");
        }
        Some(self.skip(2))
    }
}
