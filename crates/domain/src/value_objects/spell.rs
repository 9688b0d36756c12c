//! Magic words and the spells built from them.
//!
//! A [`Spell`] can only be obtained from a recognized [`MagicWord`], so every
//! spell in circulation is valid by construction. Raw text goes through
//! [`Spell::from_words`], which yields `None` for anything outside the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The catalog of recognized incantations.
///
/// Matching is exact and case-sensitive: `"Abracadabra"` and `" alakazam"` are
/// not magic words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MagicWord {
    /// `"abracadabra"`
    Abracadbra,
    /// `"alakazam"`
    Alakazam,
    /// `"hocus pocus"`
    HocusPocus,
    /// `"presto chango"`
    PrestoChango,
}

impl MagicWord {
    /// All recognized magic words, in catalog order.
    pub fn all() -> &'static [MagicWord] {
        &[
            MagicWord::Abracadbra,
            MagicWord::Alakazam,
            MagicWord::HocusPocus,
            MagicWord::PrestoChango,
        ]
    }

    /// The literal incantation for this word.
    pub fn incantation(&self) -> &'static str {
        match self {
            MagicWord::Abracadbra => "abracadabra",
            MagicWord::Alakazam => "alakazam",
            MagicWord::HocusPocus => "hocus pocus",
            MagicWord::PrestoChango => "presto chango",
        }
    }
}

impl fmt::Display for MagicWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.incantation())
    }
}

impl FromStr for MagicWord {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MagicWord::all()
            .iter()
            .copied()
            .find(|word| word.incantation() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown magic words: {:?}", s)))
    }
}

impl TryFrom<String> for MagicWord {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MagicWord> for String {
    fn from(word: MagicWord) -> String {
        word.incantation().to_string()
    }
}

/// A castable spell. Always holds a recognized [`MagicWord`].
///
/// # Example
///
/// ```
/// use coven_domain::value_objects::{MagicWord, Spell};
///
/// let first = Spell::from_words("abracadabra");
/// let second = Spell::from_words("ascendio");
///
/// assert_eq!(first.map(|s| s.magic_words()), Some(MagicWord::Abracadbra));
/// assert!(second.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    magic_words: MagicWord,
}

impl Spell {
    /// Build a spell from an already recognized word. Infallible.
    pub fn new(magic_words: MagicWord) -> Self {
        Self { magic_words }
    }

    /// Build a spell from raw text, or `None` if the text is not a magic word.
    pub fn from_words(words: &str) -> Option<Self> {
        let incantation = words.parse::<MagicWord>().ok()?;
        Some(Self::new(incantation))
    }

    /// The word this spell is cast with.
    #[inline]
    pub fn magic_words(&self) -> MagicWord {
        self.magic_words
    }
}

impl From<MagicWord> for Spell {
    fn from(word: MagicWord) -> Self {
        Self::new(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_recognizes_catalog() {
        let spell = Spell::from_words("abracadabra").expect("catalog word");
        assert_eq!(spell.magic_words(), MagicWord::Abracadbra);

        for word in MagicWord::all() {
            let spell = Spell::from_words(word.incantation());
            assert_eq!(spell.map(|s| s.magic_words()), Some(*word));
        }
    }

    #[test]
    fn test_from_words_rejects_unknown() {
        assert!(Spell::from_words("ascendio").is_none());
        assert!(Spell::from_words("").is_none());
    }

    #[test]
    fn test_from_words_is_exact_and_case_sensitive() {
        for raw in [
            "Abracadabra",
            "ABRACADABRA",
            " abracadabra",
            "abracadabra ",
            "hocus  pocus",
            "hocuspocus",
            "presto-chango",
            "Presto Chango",
            "alakazam\n",
            "abracadbra",
        ] {
            assert!(Spell::from_words(raw).is_none(), "{:?} should be rejected", raw);
        }
    }

    #[test]
    fn test_magic_word_parse_error() {
        let err = "ascendio".parse::<MagicWord>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("ascendio"));
    }

    #[test]
    fn test_magic_word_display_is_incantation() {
        assert_eq!(MagicWord::HocusPocus.to_string(), "hocus pocus");
        assert_eq!(MagicWord::PrestoChango.to_string(), "presto chango");
    }

    #[test]
    fn test_spell_serde_uses_incantation() {
        let spell = Spell::new(MagicWord::PrestoChango);
        let json = serde_json::to_string(&spell).unwrap();
        assert_eq!(json, r#"{"magicWords":"presto chango"}"#);

        let back: Spell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spell);
    }

    #[test]
    fn test_spell_deserialize_rejects_unknown_words() {
        let result = serde_json::from_str::<Spell>(r#"{"magicWords":"ascendio"}"#);
        assert!(result.is_err());
    }
}
