use crate::encoder::{Advance, Metaphone3, Rule};

const M_CHAIN: &[Rule] = &[
    Metaphone3::encode_silent_m_at_beginning,
    Metaphone3::encode_mr_and_mrs,
    Metaphone3::encode_mac,
    Metaphone3::encode_mpt,
];

impl Metaphone3 {
    pub(crate) fn encode_m(&mut self) -> Advance {
        if let Some(advance) = self.first_match(M_CHAIN) {
            return advance;
        }

        // a silent B after M is consumed here
        let next = self.encode_mb();
        self.add("M");
        next
    }

    fn encode_silent_m_at_beginning(&mut self) -> Option<Advance> {
        (self.current == 0 && self.string_at(0, &["MN"])).then(|| self.skip(1))
    }

    /// "Mr." and "Mrs." after punctuation has been dropped.
    fn encode_mr_and_mrs(&mut self) -> Option<Advance> {
        if self.current != 0 || !self.string_at(0, &["MR"]) {
            return None;
        }
        if self.length == 2 {
            self.add(if self.encode_vowels { "MASTAR" } else { "MSTR" });
            return Some(self.skip(2));
        }
        if self.length == 3 && self.string_at(0, &["MRS"]) {
            self.add(if self.encode_vowels { "MASAS" } else { "MSS" });
            return Some(self.skip(3));
        }
        None
    }

    /// Irish and Scottish "Mac-", "Mc-": "macintosh", "mcgregor".
    fn encode_mac(&mut self) -> Option<Advance> {
        if !(self.current == 0
            && (self.string_at(0, &["MACIVER", "MACEWEN"])
                || self.string_at(0, &["MACELROY", "MACILROY"])
                || self.string_at(0, &["MACINTOSH"])
                || self.string_at(0, &["MC"])))
        {
            return None;
        }

        self.add(if self.encode_vowels { "MAK" } else { "MK" });

        // "mcgeorge" keeps its G
        if self.string_at(0, &["MC"])
            && !(self.string_at(2, &["K", "G", "Q"]) && !self.string_at(2, &["GEOR"]))
        {
            return Some(self.skip(2));
        }
        Some(self.skip(3))
    }

    /// Silent P in -MPT-: "comptroller", "accompt".
    fn encode_mpt(&mut self) -> Option<Advance> {
        if self.string_at(self.current - 2, &["COMPTROL"])
            || self.string_at(self.current - 4, &["ACCOMPT"])
        {
            self.add("N");
            return Some(self.skip(2));
        }
        None
    }

    /// Silent B in short roots: "lamb", "comb", "dumb", "thumb".
    fn test_silent_mb_1(&self) -> bool {
        (self.current == 3 && self.string_at(0, &["THUMB"]))
            || (self.current == 2
                && self.string_at(0, &["DUMB", "BOMB", "DAMN", "LAMB", "NUMB", "TOMB"]))
    }

    fn test_pronounced_mb(&self) -> bool {
        let c = self.current;
        self.string_at(c - 2, &["NUMBER"])
            || (self.string_at(c + 2, &["A"]) && !self.string_at(c - 2, &["DUMBASS"]))
            || self.string_at(c + 2, &["O"])
            || self.string_at(c - 2, &["LAMBEN", "LAMBER", "LAMBET", "TOMBIG", "LAMBRE"])
    }

    /// -MB at the end of a root, possibly before a suffix: "climbing".
    fn test_silent_mb_2(&self) -> bool {
        let c = self.current;
        c > 1
            && self.char_at(c + 1) == 'B'
            && (c + 1 == self.last
                || self.string_at(c + 2, &["ING", "ABL"])
                || self.string_at(c + 2, &["LIKE"])
                || (c + 2 == self.last && self.char_at(self.last) == 'S')
                || self.string_at(c - 5, &["BUNCOMB"])
                // "bomber", "beachcomber"
                || (c + 3 == self.last
                    && self.string_at(c + 2, &["ED", "ER"])
                    && (self.string_at(0, &["CLIMB", "PLUMB"])
                        || !self.string_at(c - 1, &["IMBER", "AMBER", "EMBER", "UMBER"]))
                    && !self.string_at(c - 2, &["CUMBER", "SOMBER"])))
    }

    /// "bombastic", "umbrage", "flamboyant".
    fn test_pronounced_mb_2(&self) -> bool {
        self.string_at(self.current - 1, &["OMBAS", "OMBAD", "UMBRA"])
            || self.string_at(self.current - 3, &["FLAM"])
    }

    /// Silent N after M: "damn", "hymns", "condemned".
    fn test_mn(&self) -> bool {
        let c = self.current;
        self.char_at(c + 1) == 'N'
            && (c + 1 == self.last
                || (c + 4 == self.last && self.string_at(c + 2, &["ING", "EST"]))
                || (c + 2 == self.last && self.char_at(c + 2) == 'S')
                || (c + 3 == self.last && self.string_at(c + 2, &["LY", "ER", "ED"]))
                || self.string_at(c - 2, &["DAMNEDEST"])
                || self.string_at(c - 5, &["GODDAMNIT"]))
    }

    fn encode_mb(&self) -> Advance {
        if self.test_silent_mb_1() {
            if self.test_pronounced_mb() { self.skip(1) } else { self.skip(2) }
        } else if self.test_silent_mb_2() {
            if self.test_pronounced_mb_2() { self.skip(1) } else { self.skip(2) }
        } else if self.test_mn() || self.char_at(self.current + 1) == 'M' {
            self.skip(2)
        } else {
            self.skip(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Metaphone3;

    fn primary(word: &str) -> String {
        Metaphone3::new().encode_word(word).primary
    }

    #[test]
    fn silent_b_after_m() {
        assert_eq!(primary("LAMB"), "LM");
        assert_eq!(primary("CLIMBING"), "KLMNK");
        assert_eq!(primary("NUMBER"), "NMPR");
    }

    #[test]
    fn silent_n_after_m() {
        assert_eq!(primary("DAMN"), "TM");
        assert_eq!(primary("HYMNS"), "HMS");
    }

    #[test]
    fn mac_and_titles() {
        assert_eq!(primary("MCGREGOR"), "MKRKR");
        assert_eq!(primary("MACINTOSH"), "MKNTX");
        assert_eq!(primary("MR"), "MSTR");
        assert_eq!(primary("MRS"), "MSS");
    }
}
