// Result type: a primary key and an optional alternate key.

use std::fmt;

use serde::Serialize;

/// The two keys produced for a word or phrase.
///
/// `secondary` is empty when the word has no distinct alternate
/// pronunciation; it is never equal to a non-empty `primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Encoding {
    pub primary: String,
    pub secondary: String,
}

impl Encoding {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Whether an alternate key is present.
    pub fn has_alternate(&self) -> bool {
        !self.secondary.is_empty()
    }

    /// The alternate key, or the primary when there is none.
    pub fn alternate_or_primary(&self) -> &str {
        if self.has_alternate() {
            &self.secondary
        } else {
            &self.primary
        }
    }

    /// Iterate over the distinct non-empty keys (primary first).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str())
            .chain((!self.secondary.is_empty()).then_some(self.secondary.as_str()))
            .filter(|k| !k.is_empty())
    }

    /// Two encodings match when any of their keys coincide.
    pub fn matches(&self, other: &Encoding) -> bool {
        self.keys().any(|k| other.keys().any(|o| o == k))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secondary.is_empty() {
            write!(f, "{}", self.primary)
        } else {
            write!(f, "{} ({})", self.primary, self.secondary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_fallback() {
        assert_eq!(Encoding::new("SM0", "").alternate_or_primary(), "SM0");
        assert_eq!(Encoding::new("SM0", "XMT").alternate_or_primary(), "XMT");
    }

    #[test]
    fn alternate_presence() {
        assert!(Encoding::new("SM0", "XMT").has_alternate());
        assert!(!Encoding::new("NT", "").has_alternate());
        assert!(!Encoding::default().has_alternate());
    }

    #[test]
    fn keys_skip_empty() {
        let knight = Encoding::new("NT", "");
        let keys: Vec<&str> = knight.keys().collect();
        assert_eq!(keys, vec!["NT"]);
        let smith = Encoding::new("SM0", "XMT");
        let keys: Vec<&str> = smith.keys().collect();
        assert_eq!(keys, vec!["SM0", "XMT"]);
        assert_eq!(Encoding::default().keys().count(), 0);
    }

    #[test]
    fn matches_on_any_key() {
        let smith = Encoding::new("SM0", "XMT");
        let schmidt = Encoding::new("XMT", "SMT");
        let jones = Encoding::new("JNS", "ANS");
        assert!(smith.matches(&schmidt));
        assert!(!smith.matches(&jones));
        assert!(!Encoding::default().matches(&Encoding::default()));
    }

    #[test]
    fn display() {
        assert_eq!(Encoding::new("NT", "").to_string(), "NT");
        assert_eq!(Encoding::new("SM0", "XMT").to_string(), "SM0 (XMT)");
    }
}
