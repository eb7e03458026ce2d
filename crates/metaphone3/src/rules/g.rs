// G: hard and soft G, GH, GN, and the German and Slavic exceptions.

use crate::encoder::{Advance, Metaphone3, Rule};

const G_CHAIN: &[Rule] = &[
    Metaphone3::encode_silent_g_at_beginning,
    Metaphone3::encode_gg,
    Metaphone3::encode_gk,
    Metaphone3::encode_gh,
    Metaphone3::encode_silent_g,
    Metaphone3::encode_gn,
    Metaphone3::encode_gl,
    Metaphone3::encode_initial_g_front_vowel,
    Metaphone3::encode_nger,
    Metaphone3::encode_ger,
    Metaphone3::encode_gel,
    Metaphone3::encode_non_initial_g_front_vowel,
    Metaphone3::encode_ga_to_j,
];

const GH_CHAIN: &[Rule] = &[
    Metaphone3::encode_gh_after_consonant,
    Metaphone3::encode_initial_gh,
    Metaphone3::encode_gh_to_j,
    Metaphone3::encode_gh_to_h,
    Metaphone3::encode_ught,
    Metaphone3::encode_gh_h_part_of_other_word,
    Metaphone3::encode_silent_gh,
    Metaphone3::encode_gh_to_f,
];

impl Metaphone3 {
    pub(crate) fn encode_g(&mut self) -> Advance {
        if let Some(advance) = self.first_match(G_CHAIN) {
            return advance;
        }

        if !self.string_at(self.current - 1, &["C", "K", "G", "Q"]) {
            self.add_exact("G", "K");
        }
        self.skip(1)
    }

    /// Hard G with a soft-G alternate, or plain hard G for Germanic words.
    fn add_hard_g(&mut self) {
        if self.slavo_germanic() {
            self.add_exact("G", "K");
        } else {
            self.add_exact_approx("G", "J", "K", "J");
        }
    }

    fn encode_silent_g_at_beginning(&mut self) -> Option<Advance> {
        (self.current == 0 && self.string_at(0, &["GN"])).then(|| self.skip(1))
    }

    fn encode_gg(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.char_at(c + 1) != 'G' {
            return None;
        }

        // Italian "loggia", "caravaggio"; also "suggest", "exaggerate",
        // "ruggiero" but not "snuggies"
        if self.string_at(c - 1, &["AGGIA", "OGGIA", "AGGIO", "EGGIO", "EGGIA", "IGGIO"])
            || (c + 3 != self.last && c + 4 != self.last && self.string_at(c - 1, &["UGGIE"]))
            || (c + 2 == self.last && self.string_at(c - 1, &["AGGI", "OGGI"]))
            || self.string_at(c - 2, &["SUGGES", "XAGGER", "REGGIE"])
        {
            // -GG- as KJ
            if self.string_at(c - 2, &["SUGGEST"]) {
                self.add_exact("G", "K");
            }
            self.add("J");
            return Some(self.advance_counter(3, 2));
        }

        self.add_exact("G", "K");
        Some(self.skip(2))
    }

    /// "gingko".
    fn encode_gk(&mut self) -> Option<Advance> {
        if self.char_at(self.current + 1) == 'K' {
            self.add("K");
            return Some(self.skip(2));
        }
        None
    }

    // -----------------------------------------------------------------------
    // GH
    // -----------------------------------------------------------------------

    fn encode_gh(&mut self) -> Option<Advance> {
        if self.char_at(self.current + 1) != 'H' {
            return None;
        }
        if let Some(advance) = self.first_match(GH_CHAIN) {
            return Some(advance);
        }
        self.add_exact("G", "K");
        Some(self.skip(2))
    }

    /// "burgher", "bingham"; not "greenhalgh".
    fn encode_gh_after_consonant(&mut self) -> Option<Advance> {
        let c = self.current;
        if c > 0
            && !self.is_vowel_at(c - 1)
            && !(self.string_at(c - 3, &["HALGH"]) && c + 1 == self.last)
        {
            self.add_exact("G", "K");
            return Some(self.skip(2));
        }
        None
    }

    fn encode_initial_gh(&mut self) -> Option<Advance> {
        if self.current > 0 {
            return None;
        }
        // "ghislane", "ghiradelli"
        if self.char_at(self.current + 2) == 'I' {
            self.add("J");
        } else {
            self.add_exact("G", "K");
        }
        Some(self.skip(2))
    }

    /// English names: "greenhalgh", "dunkenhalgh".
    fn encode_gh_to_j(&mut self) -> Option<Advance> {
        if self.current + 1 == self.last && self.string_at(self.current - 2, &["ALGH"]) {
            self.add_pair("J", "");
            return Some(self.skip(2));
        }
        None
    }

    /// "donoghue", "donaghy", "callaghan".
    fn encode_gh_to_h(&mut self) -> Option<Advance> {
        let c = self.current;
        if (self.string_at(c - 4, &["DONO", "DONA"]) && self.is_vowel_at(c + 2))
            || self.string_at(c - 5, &["CALLAGHAN"])
        {
            self.add("H");
            return Some(self.skip(2));
        }
        None
    }

    /// "ought", "daughter", "laughter", "draught".
    fn encode_ught(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c - 1, &["UGHT"]) {
            return None;
        }
        if (self.string_at(c - 3, &["LAUGH"])
            && !self.string_at(c - 4, &["SLAUGHT"])
            && !self.string_at(c - 3, &["LAUGHTO"]))
            || self.string_at(c - 4, &["DRAUGH"])
        {
            self.add("FT");
        } else {
            self.add("T");
        }
        Some(self.skip(3))
    }

    /// H starting another word or syllable: "doghouse", "bighead".
    fn encode_gh_h_part_of_other_word(&mut self) -> Option<Advance> {
        if self
            .string_at(self.current + 1, &["HOUS", "HEAD", "HOLE", "HORN", "HARN"])
        {
            self.add_exact("G", "K");
            return Some(self.skip(2));
        }
        None
    }

    /// Parker's rule, refined: "hugh", "bough", "plough", "sigh", "light".
    fn encode_silent_gh(&mut self) -> Option<Advance> {
        let c = self.current;
        let silent_context = self.string_at(c - 2, &["B", "H", "D", "G", "L"])
            // "bough"
            || (self.string_at(c - 3, &["B", "H", "D", "K", "W", "N", "P", "V"])
                && !self.string_at(0, &["ENOUGH"]))
            // "broughton"
            || self.string_at(c - 4, &["B", "H"])
            // "plough", "slaugh"
            || self.string_at(c - 4, &["PL", "SL"])
            || self.char_at(c - 1) == 'I'
            || self.string_at(0, &["PUGH"])
            // "mcdonagh", "murtagh", "creagh"
            || (c + 1 == self.last && self.string_at(c - 1, &["AGH"]))
            || self.string_at(c - 4, &["GERAGH", "DRAUGH"])
            || (self.string_at(c - 3, &["GAUGH", "GEOGH", "MAUGH"])
                && !self.string_at(0, &["MCGAUGHEY"]))
            // "tough", "rough", "lough"
            || (c > 3
                && self.string_at(c - 2, &["OUGH"])
                && !self.string_at(c - 4, &["CCOUGH", "ENOUGH", "TROUGH", "CLOUGH"]));

        // suffixes starting with a vowel where GH is usually silent
        let silent_suffix = c + 1 == self.last
            || !self.is_vowel_at(c + 2)
            || self.string_at(c - 4, &["BROUGHAM"])
            || self.string_at(c - 3, &["VAUGH", "FEIGH", "LEIGH", "GAUGH", "GEOGH", "MAUGH"])
            || self.string_at(c - 2, &["HIGH", "TIGH"])
            || (c + 2 == self.last && self.string_at(self.last, &["Y"]))
            || (c + 3 == self.last
                && self.string_at(c + 2, &["IE", "EY", "ES", "ER", "ED", "TY"])
                && !self.string_at(c - 5, &["GALLAGHER"]))
            || (c + 4 == self.last && self.string_at(c + 2, &["ING", "OUT"]))
            || (c + 5 == self.last && self.string_at(c + 2, &["ERTY"]));

        // G pronounced
        let exception = self.string_at(0, &["BALOGH", "SABAGH"])
            || self.string_at(c - 2, &["BAGHDAD"])
            || self.string_at(c - 3, &["WHIGH"])
            || self.string_at(c - 5, &["SABBAGH"]);

        (silent_context && silent_suffix && !exception).then(|| self.skip(2))
    }

    fn encode_gh_special_cases(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c - 6, &["HICCOUGH"]) {
            // "hiccough" == "hiccup"
            self.add("P");
        } else if self.string_at(0, &["LOUGH"]) {
            // Scots "loch"
            self.add("K");
        } else if self.string_at(0, &["BALOGH"]) {
            // Hungarian
            self.add_exact_approx("G", "", "K", "");
        } else if self.string_at(c - 3, &["LAUGHLIN", "COUGHLAN", "LOUGHLIN"]) {
            // "maclaughlin"
            self.add_pair("K", "F");
        } else if self.string_at(c - 3, &["GOUGH"]) || self.string_at(c - 7, &["COLCLOUGH"]) {
            self.add_pair("", "F");
        } else {
            return None;
        }
        Some(self.skip(2))
    }

    /// "laugh", "cough", "rough", "tough".
    fn encode_gh_to_f(&mut self) -> Option<Advance> {
        if let Some(advance) = self.encode_gh_special_cases() {
            return Some(advance);
        }

        let c = self.current;
        if self.char_at(c - 1) == 'U'
            && self.is_vowel_at(c - 2)
            && self.string_at(c - 3, &["C", "G", "L", "R", "T", "N", "S"])
            && !self.string_at(c - 4, &["BREUGHEL", "FLAUGHER"])
        {
            self.add("F");
            return Some(self.skip(2));
        }
        None
    }

    // -----------------------------------------------------------------------
    // Silent G, GN, GL
    // -----------------------------------------------------------------------

    /// "phlegm", "apothegm", "voigt"; Vietnamese "nguyen" but not "ng".
    fn encode_silent_g(&mut self) -> Option<Advance> {
        let c = self.current;
        if (c + 1 == self.last
            && (self.string_at(c - 1, &["EGM", "IGM", "AGM"]) || self.string_at(c, &["GT"])))
            || (self.length == 5 && self.string_at(0, &["HUGES"]))
        {
            return Some(self.skip(1));
        }

        (c != self.last && self.string_at(0, &["NG"])).then(|| self.skip(1))
    }

    fn encode_gn(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.char_at(c + 1) != 'N' {
            return None;
        }

        // "align", "sign", "resign" but not "resignation"; "impugn" but
        // not "repugnant"
        let silent = (c > 1
            && (self.string_at(c - 1, &["I", "U", "E"])
                || self.string_at(c - 3, &["LORGNETTE"])
                || self.string_at(c - 2, &["LAGNIAPPE"])
                || self.string_at(c - 2, &["COGNAC"])
                || self.string_at(c - 3, &["CHAGNON"])
                || self.string_at(c - 5, &["COMPAGNIE"])
                || self.string_at(c - 4, &["BOLOGN"]))
            // G pronounced: "assignation"
            && !self.string_at(c + 2, &["ATION"])
            && !self.string_at(c + 2, &["ATOR"])
            && !self.string_at(c + 2, &["ATE", "ITY"])
            && (!self.string_at(c + 2, &["AN", "AC", "IA", "UM"])
                || self.string_at(c - 3, &["POIGNANT"])
                || self.string_at(c - 2, &["COGNAC"]))
            && !self.string_at(0, &["SPIGNER", "STEGNER"])
            && (self.length != 5 || !self.string_at(0, &["SIGNE"]))
            && !self.string_at(
                c - 2,
                &["LIGNI", "LIGNO", "REGNA", "DIGNI", "WEGNE", "TIGNE", "RIGNE", "REGNE", "TIGNO"],
            )
            && !self.string_at(c - 2, &["SIGNAL", "SIGNIF", "SIGNAT", "SIGNET", "LIGNEO"])
            && !self.string_at(c - 1, &["IGNIT"]))
            // not "cagney", "magna"
            || (c + 2 == self.last
                && self.string_at(c, &["GNE", "GNA"])
                && !self.string_at(c - 2, &["SIGNA", "MAGNA", "SIGNE"]));

        if silent {
            self.add_exact_approx("N", "GN", "N", "KN");
        } else {
            self.add_exact("GN", "KN");
        }
        Some(self.skip(2))
    }

    /// "tagliaro", "puglia"; Americans sometimes say the G.
    fn encode_gl(&mut self) -> Option<Advance> {
        if self.string_at(self.current + 1, &["LIA", "LIO", "LIE"])
            && self.is_vowel_at(self.current - 1)
        {
            self.add_exact_approx("L", "GL", "L", "KL");
            return Some(self.skip(2));
        }
        None
    }

    // -----------------------------------------------------------------------
    // G before front vowels
    // -----------------------------------------------------------------------

    fn initial_g_soft(&self) -> bool {
        let c = self.current;
        ((self.string_at(
            c + 1,
            &[
                "EL", "EM", "EN", "EO", "ER", "ES", "IA", "IN", "IO", "IP", "IU", "YM", "YN", "YP",
                "YR", "EE",
            ],
        ) || self.string_at(c + 1, &["IRA", "IRO"]))
            // the smaller set of K cases: "gerber"
            && !self.string_at(
                c + 1,
                &[
                    "ELD", "ELT", "ERT", "INZ", "ERH", "ITE", "ERD", "ERL", "ERN", "INT", "EES",
                    "EEK", "ELB", "EER",
                ],
            )
            && !self.string_at(c + 1, &["ERSH", "ERST", "INSB", "INGR", "EROW", "ERKE", "EREN"])
            && !self.string_at(
                c + 1,
                &[
                    "ELLER", "ERDIE", "ERBER", "ESUND", "ESNER", "INGKO", "INKGO", "IPPER",
                    "ESELL", "IPSON", "EEZER", "ERSON", "ELMAN",
                ],
            )
            && !self.string_at(
                c + 1,
                &["ESTALT", "ESTAPO", "INGHAM", "ERRITY", "ERRISH", "ESSNER", "ENGLER"],
            )
            && !self.string_at(c + 1, &["YNAECOL", "YNECOLO", "ENTHNER", "ERAGHTY"])
            && !self.string_at(c + 1, &["INGERICH", "EOGHEGAN"]))
            || (self.is_vowel_at(c + 1)
                && (self.string_at(c + 1, &["EE ", "EEW"])
                    || (self.string_at(c + 1, &["IGI", "IRA", "IBE", "AOL", "IDE", "IGL"])
                        && !self.string_at(c + 1, &["IDEON"]))
                    || self.string_at(c + 1, &["ILES", "INGI", "ISEL"])
                    || (self.string_at(c + 1, &["INGER"])
                        && !self.string_at(c + 1, &["INGERICH"]))
                    || self.string_at(
                        c + 1,
                        &["IBBER", "IBBET", "IBLET", "IBRAN", "IGOLO", "IRARD", "IGANT"],
                    )
                    || self.string_at(c + 1, &["IRAFFE", "EEWHIZ"])
                    || self.string_at(c + 1, &["ILLETTE", "IBRALTA"])))
    }

    fn encode_initial_g_front_vowel(&mut self) -> Option<Advance> {
        if self.current != 0 || !self.front_vowel(1) {
            return None;
        }

        if self.length == 4 && self.string_at(1, &["ILA"]) {
            // "gila monster"
            self.add("H");
        } else if self.initial_g_soft() {
            self.add_exact_approx("J", "G", "J", "K");
        } else if matches!(self.char_at(1), 'E' | 'I') {
            // J alternate only before E and I
            self.add_exact_approx("G", "J", "K", "J");
        } else {
            self.add_exact("G", "K");
        }
        Some(self.advance_counter(2, 1))
    }

    /// -NGER-: J by default ("ranger", "messenger"), hard in the listed
    /// roots and names ("anger", "finger", "younger").
    fn encode_nger(&mut self) -> Option<Advance> {
        let c = self.current;
        if c <= 1 || !self.string_at(c - 1, &["NGER"]) {
            return None;
        }

        let hard = self.root_or_inflections("ANGER")
            || self.root_or_inflections("LINGER")
            || self.root_or_inflections("MALINGER")
            || self.root_or_inflections("FINGER")
            || (self.string_at(
                c - 3,
                &[
                    "HUNG", "FING", "BUNG", "WING", "RING", "DING", "ZENG", "ZING", "JUNG", "LONG",
                    "PING", "CONG", "MONG", "BANG", "GANG", "HANG", "LANG", "SANG", "SING", "WANG",
                    "ZANG",
                ],
            )
                // these get J
                && !self.string_at(c - 6, &["BOULANG", "SLESING", "KISSING", "DERRING"])
                && !self.string_at(c - 8, &["SCHLESING"])
                && !self.string_at(c - 5, &["SALING", "BELANG"])
                && !self.string_at(c - 6, &["BARRING"])
                && !self.string_at(c - 6, &["PHALANGER"])
                && !self.string_at(c - 4, &["CHANG"]))
            || self.string_at(c - 4, &["STING", "YOUNG"])
            || self.string_at(c - 5, &["STRONG"])
            || self.string_at(0, &["UNG", "ENG", "ING"])
            || self.string_at(c, &["GERICH"])
            || self.string_at(0, &["SENGER"])
            || self.string_at(c - 3, &["WENGER", "MUNGER", "SONGER", "KINGER"])
            || self.string_at(
                c - 4,
                &["FLINGER", "SLINGER", "STANGER", "STENGER", "KLINGER", "CLINGER"],
            )
            || self.string_at(c - 5, &["SPRINGER", "SPRENGER"])
            || self.string_at(c - 3, &["LINGERF"])
            || self.string_at(c - 2, &["ANGERLY", "ANGERBO", "INGERSO"]);

        if hard {
            self.add_exact_approx("G", "J", "K", "J");
        } else {
            self.add_exact_approx("J", "G", "J", "K");
        }
        Some(self.advance_counter(2, 1))
    }

    /// -GER-: hard in "jager", "tiger", "auger", "berger", soft otherwise.
    fn encode_ger(&mut self) -> Option<Advance> {
        let c = self.current;
        if c == 0 || !self.string_at(c + 1, &["ER"]) {
            return None;
        }

        let hard = ((c == 2
            && self.is_vowel_at(1)
            && !self.is_vowel_at(0)
            && !self.string_at(
                0,
                &[
                    "PAGER", "WAGER", "NIGER", "ROGER", "LEGER", "CAGER", "AUGER", "EAGER",
                    "INGER", "YAGER",
                ],
            ))
            || self.string_at(c - 2, &["AUGER", "EAGER", "INGER", "YAGER"])
            || self.string_at(
                c - 3,
                &[
                    "SEEGER", "JAEGER", "GEIGER", "KRUGER", "SAUGER", "BURGER", "MEAGER",
                    "MARGER", "RIEGER", "YAEGER", "STEGER", "PRAGER", "SWIGER", "YERGER",
                    "TORGER", "FERGER", "HILGER", "ZEIGER", "YARGER", "COWGER", "CREGER",
                    "KROGER", "KREGER", "GRAGER", "STIGER", "BERGER",
                ],
            )
            // "berger" but not "bergerac"
            || (c + 2 == self.last && self.string_at(c - 3, &["BERGER"]))
            || self.string_at(
                c - 4,
                &[
                    "KREIGER", "KRUEGER", "METZGER", "KRIEGER", "KROEGER", "STEIGER", "DRAEGER",
                    "BUERGER", "BOERGER", "FIBIGER",
                ],
            )
            // "harshbarger", "winebarger"
            || (c > 4 && self.string_at(c - 3, &["BARGER"]))
            // "weisgerber"
            || (c > 0 && self.string_at(c, &["GERBER"]))
            || self.string_at(
                c - 5,
                &["SCHWAGER", "LYBARGER", "SPRENGER", "GALLAGER", "WILLIGER"],
            )
            || (self.length == 4 && self.string_at(0, &["AGER", "EGER"]))
            || self.string_at(c - 1, &["YGERNE"])
            || self.string_at(c - 6, &["SCHWEIGER"]))
            && !self.string_at(c - 5, &["BELLIGEREN"])
            && !self.string_at(0, &["MARGERY"])
            && !self.string_at(c - 3, &["BERGERAC"]);

        if hard {
            self.add_hard_g();
        } else {
            self.add_exact_approx("J", "G", "J", "K");
        }
        Some(self.advance_counter(2, 1))
    }

    /// -GEL-: usually JL, hard in "bagel", "hegel", "vogel".
    fn encode_gel(&mut self) -> Option<Advance> {
        let c = self.current;
        if c == 0 || !self.string_at(c + 1, &["EL"]) {
            return None;
        }

        let hard = (self.length == 5
            && self.is_vowel_at(c - 1)
            && !self.is_vowel_at(c - 2)
            && !self.string_at(c - 2, &["NIGEL", "RIGEL"]))
            // combining forms
            || self.string_at(c - 2, &["ENGEL", "HEGEL", "NAGEL", "VOGEL"])
            || self.string_at(
                c - 3,
                &["MANGEL", "WEIGEL", "FLUGEL", "RANGEL", "HAUGEN", "RIEGEL", "VOEGEL"],
            )
            || self.string_at(c - 4, &["SPEIGEL", "STEIGEL", "WRANGEL", "SPIEGEL"])
            || self.string_at(c - 4, &["DANEGELD"]);

        if hard {
            self.add_hard_g();
        } else {
            self.add_exact_approx("J", "G", "J", "K");
        }
        Some(self.advance_counter(2, 1))
    }

    /// Non-initial G before E, I or Y: J by default, with the hard-G
    /// exceptions below.
    fn encode_non_initial_g_front_vowel(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c + 1, &["E", "I", "Y"]) {
            return None;
        }

        if c == self.last - 1 && self.string_at(c, &["GE"]) {
            // final -GE is almost always J
            if !self.hard_ge_at_end() {
                self.add("J");
            } else {
                self.add_hard_g();
            }
        } else if !self.internal_hard_g() {
            self.add_exact_approx("J", "G", "J", "K");
        } else if !(c == 2 && self.string_at(0, &["MC"])) || (c == 3 && self.string_at(0, &["MAC"]))
        {
            // no KG or KK in "mcgill"
            self.add_hard_g();
        }
        Some(self.advance_counter(2, 1))
    }

    /// German names and other words with a hard final -GE.
    fn hard_ge_at_end(&self) -> bool {
        self.string_at(0, &["RENEGE", "STONGE", "STANGE", "PRANGE", "KRESGE"])
            || self.string_at(
                0,
                &["BYRGE", "BIRGE", "BERGE", "HAUGE", "LANGE", "SYNGE", "BENGE", "RUNGE", "HELGE"],
            )
            || self.string_at(0, &["INGE", "LAGE", "HAGE"])
    }

    /// Hard G before a front vowel, away from a final -GE.
    fn internal_hard_g(&self) -> bool {
        !(self.current + 1 == self.last && self.char_at(self.last) == 'E')
            && (self.internal_hard_ng()
                || self.internal_hard_gen_gin_get_git()
                || self.internal_hard_g_open_syllable()
                || self.internal_hard_g_other())
    }

    fn internal_hard_g_other(&self) -> bool {
        let c = self.current;
        (self.string_at(
            c,
            &[
                "GETH", "GEAR", "GEIS", "GIRL", "GIVI", "GIVE", "GIFT", "GIRD", "GIRT", "GILV",
                "GILD", "GELD",
            ],
        ) && !self.string_at(c - 3, &["GINGIV"]))
            // "gish" but not "largish"
            || (c > 0 && self.string_at(c + 1, &["ISH"]) && !self.string_at(0, &["LARG"]))
            || (c + 2 != self.last && self.string_at(c - 2, &["MAGED", "MEGID"]))
            || self.string_at(c, &["GEZ"])
            || self.string_at(0, &["WEGE", "HAGE"])
            || (c + 3 == self.last
                && self.string_at(c - 2, &["ONGEST", "UNGEST"])
                && !self.string_at(c - 3, &["CONGEST"]))
            || self.string_at(0, &["VOEGE", "BERGE", "HELGE"])
            || (self.length == 4 && self.string_at(0, &["ENGE", "BOGY"]))
            || self.string_at(c, &["GIBBON"])
            || self.string_at(0, &["CORREGIDOR"])
            || self.string_at(0, &["INGEBORG"])
            || (self.string_at(c, &["GILL"])
                && (c + 3 == self.last || c + 4 == self.last)
                && !self.string_at(0, &["STURGILL"]))
    }

    /// -GY-, -GIE-, -GEE-, -GIO- with a hard G: "fogy", "magee", "carnegie".
    fn internal_hard_g_open_syllable(&self) -> bool {
        let c = self.current;
        self.string_at(c + 1, &["EYE"])
            || self.string_at(c - 2, &["FOGY", "POGY", "YOGI"])
            || self.string_at(c - 2, &["MAGEE", "MCGEE", "HAGIO"])
            || self.string_at(c - 1, &["RGEY", "OGEY"])
            || self.string_at(c - 3, &["HOAGY", "STOGY", "PORGY"])
            || self.string_at(c - 5, &["CARNEGIE"])
            || (c + 2 == self.last && self.string_at(c - 1, &["OGEY", "OGIE"]))
    }

    /// Mostly German names: "forget", "bergen", "jurgen", "begin".
    fn internal_hard_gen_gin_get_git(&self) -> bool {
        let c = self.current;
        (self.string_at(
            c - 3,
            &[
                "FORGET", "TARGET", "MARGIT", "MARGET", "TURGEN", "BERGEN", "MORGEN", "JORGEN",
                "HAUGEN", "JERGEN", "JURGEN", "LINGEN", "BORGEN", "LANGEN", "KLAGEN", "STIGER",
                "BERGER",
            ],
        ) && !self.string_at(c, &["GENETIC", "GENESIS"])
            && !self.string_at(c - 4, &["PLANGENT"]))
            || (c + 2 == self.last && self.string_at(c - 3, &["BERGIN", "FEAGIN", "DURGIN"]))
            || (self.string_at(c - 2, &["ENGEN"]) && !self.string_at(c + 3, &["DER", "ETI", "ESI"]))
            || self.string_at(c - 4, &["JUERGEN"])
            || self.string_at(0, &["NAGIN", "MAGIN", "HAGIN"])
            || (self.length == 5
                && self.string_at(0, &["ENGIN", "DEGEN", "LAGEN", "MAGEN", "NAGIN"]))
            || (self.string_at(
                c - 2,
                &[
                    "BEGET", "BEGIN", "HAGEN", "FAGIN", "BOGEN", "WIGIN", "NTGEN", "EIGEN",
                    "WEGEN", "WAGEN",
                ],
            ) && !self.string_at(c - 5, &["OSPHAGEN"]))
    }

    /// -NG- with a hard G before a front vowel: "danger" is not one of
    /// these, "singer" and "longest" are.
    fn internal_hard_ng(&self) -> bool {
        let c = self.current;
        (self.string_at(c - 3, &["DANG", "FANG", "SING"])
            && !self.string_at(c - 5, &["DISINGEN"]))
            || self.string_at(0, &["INGEB", "ENGEB"])
            || (self.string_at(c - 3, &["RING", "WING", "HANG", "LONG"])
                && !self.string_at(c - 4, &["CRING", "FRING", "ORANG", "TWING", "CHANG", "PHANG"])
                && !self.string_at(c - 5, &["SYRING"])
                && !self.string_at(c - 3, &["RINGENC", "RINGENT", "LONGITU", "LONGEVI"])
                // "longino", "mastrangelo"
                && (c + 3 != self.last || !self.string_at(c, &["GELO", "GINO"])))
            || (self.string_at(c - 1, &["NGY"])
                && !self.string_at(c - 3, &["RANGY", "MANGY", "MINGY"])
                && !self.string_at(c - 4, &["SPONGY", "STINGY"]))
    }

    /// "margarine", "gaol", "algae"; not Spanish "margarita".
    fn encode_ga_to_j(&mut self) -> Option<Advance> {
        let c = self.current;
        if (self.string_at(c - 3, &["MARGARY", "MARGARI"])
            && !self.string_at(c - 3, &["MARGARIT"]))
            || self.string_at(0, &["GAOL"])
            || self.string_at(c - 2, &["ALGAE"])
        {
            self.add_exact_approx("J", "G", "J", "K");
            return Some(self.advance_counter(2, 1));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    fn keys(word: &str) -> (String, String) {
        let e = Metaphone3::new().encode_word(word);
        (e.primary, e.secondary)
    }

    // -- GH --

    #[test]
    fn gh_silent_and_f() {
        assert_eq!(keys("KNIGHT").0, "NT");
        assert_eq!(keys("LAUGH").0, "LF");
        assert_eq!(keys("DAUGHTER").0, "TTR");
        assert_eq!(keys("HUGH").0, "H");
    }

    #[test]
    fn gh_initial() {
        assert_eq!(keys("GHOST").0, "KST");
    }

    // -- GN, soft G --

    #[test]
    fn gn() {
        assert_eq!(keys("GNOME").0, "NM");
        assert_eq!(keys("SIGN").0, "SN");
        assert_eq!(keys("SIGNAL").0, "SKNL");
    }

    #[test]
    fn soft_and_hard_g() {
        assert_eq!(keys("GEORGE").0, "JRJ");
        assert_eq!(keys("GIFT").0, "KFT");
        assert_eq!(keys("DANGER").0, "TNJR");
        assert_eq!(keys("FINGER").0, "FNKR");
        assert_eq!(keys("TIGER").0, "TKR");
    }
}
