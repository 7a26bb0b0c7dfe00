//! Context predicates for rewrite rules.
//!
//! The `regex` crate has no lookaround, so "replace X only when preceded by a
//! vowel" is written as a plain pattern for X plus a [`Context`] that inspects
//! the symbols around the match. Contexts always look at the input of the
//! stage being applied, never at text produced earlier in the same stage.

use crate::phonology::inventory::{PhonemeClass, classify};

/// A set of symbols a context can test against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSet {
    /// Any vowel of the inventory.
    Vowels,
    /// Any consonant of the inventory.
    Consonants,
    /// One phoneme class.
    Class(PhonemeClass),
    /// An explicit list of symbols; may include symbols outside the inventory.
    Chars(String),
}

impl SymbolSet {
    pub fn chars<S: Into<String>>(chars: S) -> Self {
        SymbolSet::Chars(chars.into())
    }

    pub fn contains(&self, symbol: char) -> bool {
        match self {
            SymbolSet::Vowels => classify(symbol).is_some_and(PhonemeClass::is_vowel),
            SymbolSet::Consonants => classify(symbol).is_some_and(PhonemeClass::is_consonant),
            SymbolSet::Class(class) => classify(symbol) == Some(*class),
            SymbolSet::Chars(chars) => chars.contains(symbol),
        }
    }
}

/// A condition on the surroundings of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// The match starts at the beginning of the input.
    Initial,
    /// The match ends at the end of the input.
    Final,
    /// The symbol right before the match is in the set.
    PrecededBy(SymbolSet),
    /// The symbol right after the match is in the set.
    FollowedBy(SymbolSet),
    /// There is no symbol before the match, or it is outside the set.
    NotPrecededBy(SymbolSet),
    /// There is no symbol after the match, or it is outside the set.
    NotFollowedBy(SymbolSet),
}

impl Context {
    /// Check the context for the match `input[start..end]`.
    pub fn holds(&self, input: &str, start: usize, end: usize) -> bool {
        let before = input[..start].chars().next_back();
        let after = input[end..].chars().next();

        match self {
            Context::Initial => start == 0,
            Context::Final => end == input.len(),
            Context::PrecededBy(set) => before.is_some_and(|c| set.contains(c)),
            Context::FollowedBy(set) => after.is_some_and(|c| set.contains(c)),
            Context::NotPrecededBy(set) => !before.is_some_and(|c| set.contains(c)),
            Context::NotFollowedBy(set) => !after.is_some_and(|c| set.contains(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_contexts() {
        assert!(Context::Initial.holds("tata", 0, 1));
        assert!(!Context::Initial.holds("tata", 2, 3));
        assert!(Context::Final.holds("tata", 3, 4));
        assert!(!Context::Final.holds("tata", 2, 3));
    }

    #[test]
    fn test_neighbour_contexts() {
        // the second `t` of "atat" sits between two vowels
        let vowel_before = Context::PrecededBy(SymbolSet::Vowels);
        let vowel_after = Context::FollowedBy(SymbolSet::Vowels);
        assert!(vowel_before.holds("atat", 1, 2));
        assert!(!vowel_after.holds("atat", 3, 4));
        assert!(vowel_after.holds("tata", 0, 1));
        assert!(!vowel_before.holds("tata", 0, 1));

        let not_after_s = Context::NotPrecededBy(SymbolSet::chars("s"));
        assert!(not_after_s.holds("ta", 0, 1));
        assert!(!not_after_s.holds("sta", 1, 2));
    }

    #[test]
    fn test_symbol_sets() {
        assert!(SymbolSet::Class(PhonemeClass::Liquid).contains('r'));
        assert!(!SymbolSet::Consonants.contains('a'));
        assert!(!SymbolSet::Consonants.contains('w'));
        assert!(SymbolSet::chars("wy").contains('w'));
    }
}
