//! Phrases and word lists.
//!
//! A phrase is split on single spaces and each token is encoded on its
//! own. The per-token keys are joined with one space, skipping empty keys,
//! so a token without an alternate adds nothing to the alternate phrase.

use metaphone3_core::Encoding;

use crate::Metaphone3;

impl Metaphone3 {
    /// Encode every space-separated token of `phrase`.
    ///
    /// ```
    /// use metaphone3::Metaphone3;
    ///
    /// let e = Metaphone3::new().encode_phrase("Nicolas Gaydier");
    /// assert_eq!(e.primary, "NKLS KTR");
    /// ```
    pub fn encode_phrase(&mut self, phrase: &str) -> Encoding {
        let mut primary: Vec<String> = Vec::new();
        let mut secondary: Vec<String> = Vec::new();

        for token in phrase.split(' ') {
            let Encoding { primary: p, secondary: s } = self.encode_word(token);
            if !p.is_empty() {
                primary.push(p);
            }
            if !s.is_empty() {
                secondary.push(s);
            }
        }

        Encoding::new(primary.join(" "), secondary.join(" "))
    }

    /// Encode each word with the current configuration.
    pub fn encode_list<I, S>(&mut self, words: I) -> Vec<Encoding>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| self.encode_word(w.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaphone3_core::EncodeOptions;

    // -- phrases --

    #[test]
    fn empty_phrase() {
        assert_eq!(Metaphone3::new().encode_phrase(""), Encoding::default());
    }

    #[test]
    fn alternates_only_from_tokens_that_have_one() {
        let e = Metaphone3::new().encode_phrase("Smith Jones");
        assert_eq!(e.primary, "SM0 JNS");
        assert_eq!(e.secondary, "XMT ANS");

        let e = Metaphone3::new().encode_phrase("knight Smith");
        assert_eq!(e.primary, "NT SM0");
        assert_eq!(e.secondary, "XMT");
    }

    #[test]
    fn repeated_spaces_yield_empty_tokens() {
        let mut m = Metaphone3::new();
        assert_eq!(m.encode_phrase("knight  knight"), m.encode_phrase("knight knight"));
    }

    // -- lists --

    #[test]
    fn list_uses_configuration() {
        let mut m = Metaphone3::with_options(EncodeOptions::new(true, false));
        let out = m.encode_list(["iron", "ironic"]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].primary, "ARN");
        assert_eq!(out[1].primary, "ARANAK");
    }
}
