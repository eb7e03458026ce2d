// L: silent L, LL as a Spanish or French Y, and the -LE- transposition
// that pronounces "bristle" as "bristel".

use crate::encoder::{Advance, Metaphone3, Rule};

const L_CHAIN: &[Rule] = &[
    Metaphone3::encode_lely_to_l,
    Metaphone3::encode_colonel,
    Metaphone3::encode_french_ault,
    Metaphone3::encode_french_euil,
    Metaphone3::encode_french_oulx,
    Metaphone3::encode_silent_l_in_lm,
    Metaphone3::encode_silent_l_in_lk_lv,
    Metaphone3::encode_silent_l_in_ould,
];

const LL_CHAIN: &[Rule] = &[
    Metaphone3::encode_ll_as_vowel_special_cases,
    Metaphone3::encode_ll_as_vowel,
];

impl Metaphone3 {
    pub(crate) fn encode_l(&mut self) -> Advance {
        self.interpolate_vowel_when_cons_l_at_end();

        if let Some(advance) = self.first_match(L_CHAIN) {
            return advance;
        }

        let next = if self.char_at(self.current + 1) == 'L' {
            if let Some(advance) = self.first_match(LL_CHAIN) {
                return advance;
            }
            self.skip(2)
        } else {
            self.skip(1)
        };

        self.encode_le_cases(next)
    }

    /// Schwa before a final L after D, G or T: "ertl", "vogl".
    fn interpolate_vowel_when_cons_l_at_end(&mut self) {
        if self.encode_vowels
            && self.current == self.last
            && self.string_at(self.current - 1, &["D", "G", "T"])
        {
            self.add("A");
        }
    }

    /// L spelled twice, pronounced once: "docilely", "agilely".
    fn encode_lely_to_l(&mut self) -> Option<Advance> {
        if self.current + 3 == self.last && self.string_at(self.current - 1, &["ILELY"]) {
            self.add("L");
            return Some(self.skip(3));
        }
        None
    }

    /// "colonel" => KRNL.
    fn encode_colonel(&mut self) -> Option<Advance> {
        if self.string_at(self.current - 2, &["COLONEL"]) {
            self.add("R");
            return Some(self.skip(2));
        }
        None
    }

    /// French -AULT: "renault", "foucault"; not "fault" or "assault".
    fn encode_french_ault(&mut self) -> Option<Advance> {
        let c = self.current;
        (c > 3
            && (self.string_at(c - 3, &["RAULT", "NAULT", "BAULT", "SAULT", "GAULT", "CAULT"])
                || self.string_at(c - 4, &["REAULT", "RIAULT", "NEAULT", "BEAULT"]))
            && !self.root_or_inflections("ASSAULT")
            && !self.string_at(c - 8, &["SOMERSAULT"])
            && !self.string_at(c - 9, &["SUMMERSAULT"]))
            .then(|| self.skip(2))
    }

    /// "auteuil".
    fn encode_french_euil(&mut self) -> Option<Advance> {
        (self.current == self.last && self.string_at(self.current - 3, &["EUIL"]))
            .then(|| self.skip(1))
    }

    /// "proulx".
    fn encode_french_oulx(&mut self) -> Option<Advance> {
        (self.current + 1 == self.last && self.string_at(self.current - 2, &["OULX"]))
            .then(|| self.skip(2))
    }

    /// -LM-, -LN-: silent in "lincoln", "holmes", "psalm", "salmon".
    fn encode_silent_l_in_lm(&mut self) -> Option<Advance> {
        let c = self.current;
        if !self.string_at(c, &["LM", "LN"]) {
            return None;
        }

        let silent = (self.string_at(c - 2, &["COLN", "CALM", "BALM", "MALM", "PALM"])
            || (c + 1 == self.last && self.string_at(c - 1, &["OLM"]))
            || self.string_at(c - 3, &["PSALM", "QUALM"])
            || self.string_at(c - 2, &["SALMON", "HOLMES"])
            || self.string_at(c - 1, &["ALMOND"])
            || (c == 1 && self.string_at(0, &["ALMS"])))
            && !self.string_at(c + 2, &["A"])
            && !self.string_at(c - 2, &["BALMO"])
            && !self.string_at(c - 2, &["PALMER", "PALMOR", "BALMER"])
            && !self.string_at(c - 3, &["THALM"]);

        if !silent {
            self.add("L");
        }
        Some(self.skip(1))
    }

    /// -LK-, -LV-: "walk", "yolk", "half", "salve", "solder".
    fn encode_silent_l_in_lk_lv(&mut self) -> Option<Advance> {
        let c = self.current;
        ((self.string_at(c - 2, &["WALK", "YOLK", "FOLK", "HALF", "TALK", "CALF", "BALK", "CALK"])
            || (self.string_at(c - 2, &["POLK"]) && !self.string_at(c - 2, &["POLKA", "WALKO"]))
            || (self.string_at(c - 2, &["HALV"]) && !self.string_at(c - 2, &["HALVA", "HALVO"]))
            || (self.string_at(c - 3, &["CAULK", "CHALK", "BAULK", "FAULK"])
                && !self.string_at(c - 4, &["SCHALK"]))
            || (self.string_at(c - 2, &["SALVE"]) && !self.string_at(c - 2, &["SALVER"]))
            || (self.string_at(c - 2, &["CALVE"]) && !self.string_at(c - 2, &["CALVER"]))
            || self.string_at(c - 2, &["SOLDER"]))
            // L pronounced
            && !self.string_at(c - 5, &["GONSALVES", "GONCALVES"])
            && !self.string_at(c - 2, &["BALKAN", "TALKAL"])
            && !self.string_at(c - 3, &["PAULK", "CHALF"]))
            .then(|| self.skip(1))
    }

    /// "would", "could", "should"; not "shoulder".
    fn encode_silent_l_in_ould(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.string_at(c - 3, &["WOULD", "COULD"])
            || (self.string_at(c - 4, &["SHOULD"]) && !self.string_at(c - 4, &["SHOULDER"]))
        {
            self.add_exact("D", "T");
            return Some(self.skip(2));
        }
        None
    }

    /// -ILLA-, -ILLE- that Americans know to say as Y: "tortilla",
    /// "guillermo", "mireille"; not "guillotine" or "reveille".
    fn encode_ll_as_vowel_special_cases(&mut self) -> Option<Advance> {
        let c = self.current;
        (self.string_at(c - 5, &["TORTILLA"])
            || self.string_at(c - 8, &["RATATOUILLE"])
            || (self.string_at(0, &["GUILL", "VEILL", "GAILL"])
                && !(self.string_at(c - 3, &["GUILLOT", "GUILLOR", "GUILLEN"])
                    || (self.length == 5 && self.string_at(0, &["GUILL"]))))
            || self.string_at(0, &["BROUILL", "GREMILL"])
            || (c + 2 == self.last
                && self.string_at(c - 2, &["EILLE"])
                && !self.string_at(c - 5, &["REVEILLE"])))
            .then(|| self.skip(2))
    }

    /// Spanish LL as Y, with an L alternate since Americans say both:
    /// "cabrillo", "gallegos", "villa".
    fn encode_ll_as_vowel(&mut self) -> Option<Advance> {
        let c = self.current;
        if (c + 3 == self.length && self.string_at(c - 1, &["ILLO", "ILLA", "ALLE"]))
            || ((self.string_at(self.last - 1, &["AS", "OS"]) || self.string_at(self.last, &["A", "O"]))
                && self.string_at(c - 1, &["AL", "IL"])
                && !self.string_at(c - 1, &["ALLA"]))
            || self.string_at(0, &["VILLE", "VILLA"])
            || self.string_at(0, &["GALLARDO", "VALLADAR", "MAGALLAN", "CAVALLAR", "BALLASTE"])
            || self.string_at(0, &["LLA"])
        {
            self.add_pair("L", "");
            return Some(self.skip(2));
        }
        None
    }

    fn encode_le_cases(&mut self, next: Advance) -> Advance {
        if let Some(advance) = self.encode_vowel_le_transposition() {
            return advance;
        }
        if let Some(advance) = self.encode_vowel_preserve_vowel_after_l() {
            return advance;
        }
        self.add("L");
        next
    }

    /// With vowel encoding, consonant + LE is said as -EL-: "dazzle",
    /// "goggle" => KAKAL. Sets the inversion flag so the E is
    /// not encoded again.
    fn encode_vowel_le_transposition(&mut self) -> Option<Advance> {
        let c = self.current;
        let before = self.char_at(c - 1);
        if !(self.encode_vowels
            && c > 1
            && !self.is_vowel_at(c - 1)
            && self.char_at(c + 1) == 'E'
            && !matches!(before, 'L' | 'R' | 'H' | 'W')
            && !self.is_vowel_at(c + 2)
            && !self.string_at(0, &["ECCLESI", "COMPLEC", "COMPLEJ", "ROBLEDO"])
            && !self.string_at(0, &["MCCLE", "MCLEL"])
            && !self.string_at(0, &["EMBLEM", "KADLEC"])
            && !(c + 2 == self.last && self.string_at(c, &["LET"]))
            && !self.string_at(c, &["LETTING"])
            && !self.string_at(c, &["LETELY", "LETTER", "LETION", "LETIAN", "LETING", "LETORY"])
            && !self.string_at(c, &["LETUS", "LETIV"])
            && !self.string_at(c, &["LESS", "LESQ", "LECT", "LEDG", "LETE", "LETH", "LETS", "LETT"])
            && !self.string_at(c, &["LEG", "LER", "LEX"])
            // "complement" is not KAMPALMENT
            && !(self.string_at(c, &["LEMENT"])
                && !self.string_at(c - 4, &["BATTLE", "TANGLE", "PUZZLE", "RABBLE", "BABBLE"])
                && !self.string_at(c - 3, &["TABLE"]))
            && !(c + 2 == self.last && self.string_at(c - 2, &["OCLES", "ACLES", "AKLES"]))
            && !self.string_at(c - 3, &["LISLE", "AISLE"])
            && !self.string_at(0, &["ISLE"])
            && !self.string_at(0, &["ROBLES"])
            && !self.string_at(c - 4, &["PROBLEM", "RESPLEN"])
            && !self.string_at(c - 3, &["REPLEN"])
            && !self.string_at(c - 2, &["SPLE"]))
        {
            return None;
        }

        self.add("AL");
        self.al_inversion = true;

        // redundant L
        if self.char_at(c + 2) == 'L' {
            return Some(self.skip(3));
        }
        Some(self.skip(1))
    }

    /// With vowel encoding, an E after L that is still pronounced, unlike
    /// "hustled".
    fn encode_vowel_preserve_vowel_after_l(&mut self) -> Option<Advance> {
        let c = self.current;
        if self.encode_vowels
            && c > 1
            && c + 1 != self.last
            && !self.is_vowel_at(c - 1)
            && self.char_at(c + 1) == 'E'
            && !(c + 2 == self.last && self.string_at(c + 1, &["ES", "ED"]))
            && !self.string_at(c - 1, &["RLEST"])
        {
            self.add("LA");
            return Some(Advance(self.skip_vowels(c + 1)));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{EncodeOptions, Metaphone3};

    fn keys(word: &str, vowels: bool) -> (String, String) {
        let e = Metaphone3::with_options(EncodeOptions::new(vowels, false)).encode_word(word);
        (e.primary, e.secondary)
    }

    #[test]
    fn silent_l() {
        assert_eq!(keys("WALK", false).0, "AK");
        assert_eq!(keys("PSALM", false).0, "SM");
        assert_eq!(keys("COULD", false).0, "KT");
        assert_eq!(keys("COLONEL", false).0, "KRNL");
    }

    #[test]
    fn spanish_ll() {
        assert_eq!(keys("VILLA", false), ("FL".into(), "F".into()));
        assert_eq!(keys("TORTILLA", false).0, "TRT");
    }

    #[test]
    fn le_transposition() {
        assert_eq!(keys("GOGGLE", true).0, "KAKAL");
        assert_eq!(keys("DAZZLE", true).0, "TASAL");
        assert_eq!(keys("TABLE", true).0, "TAPAL");
        assert_eq!(keys("TABLE", false).0, "TPL");
    }
}
