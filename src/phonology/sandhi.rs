//! Boundary joiner (sandhi).
//!
//! When two morphemes are concatenated the last symbol of the left part and
//! the first symbol of the right part may interact:
//!
//! | Boundary | Result |
//! |---|---|
//! | vowel + vowel | one epenthetic consonant breaks the hiatus (`ka` + `oro` → `kahoro`) |
//! | vowel + consonant, consonant + vowel | plain concatenation |
//! | consonant + consonant, legal cluster | plain concatenation (`dis` + `ceba` → `disceba`) |
//! | consonant + consonant, illegal cluster | strategy dependent, see [`JoinStrategy`] |
//!
//! Idiom entries use [`BoundaryJoiner::join_idiom`], which only inserts a
//! separator.
//!
//! # Examples
//!
//! ```
//! use lexis::phonology::sandhi::{BoundaryJoiner, JoinStrategy};
//!
//! let joiner = BoundaryJoiner::default();
//! assert_eq!(joiner.join("dis", "ceba"), "disceba");
//! assert_eq!(joiner.join("ka", "oro"), "kahoro");
//! assert_eq!(joiner.join("kat", "bo"), "katebo");
//!
//! let joiner = BoundaryJoiner::default().with_strategy(JoinStrategy::Assimilating);
//! assert_eq!(joiner.join("kat", "bo"), "kadbo");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};
use crate::phonology::cluster::is_valid_cluster;
use crate::phonology::inventory::{
    PhonemeClass, classify, homorganic_nasal, is_consonant, is_vowel, voicing_counterpart,
};

/// How an illegal consonant cluster at a boundary is repaired.
///
/// The strategy is chosen once per compile and applied to every boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// Insert the epenthetic vowel between the two consonants.
    #[default]
    Epenthetic,
    /// Look up the class pair in the assimilation table and substitute the
    /// left consonant; fall back to vowel epenthesis when the result is still
    /// illegal or the table has no entry.
    Assimilating,
}

/// A substitution applied to the left consonant of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assimilation {
    /// The nasal takes the place of the following plosive.
    NasalPlace,
    /// Regressive devoicing.
    Devoice,
    /// Regressive voicing.
    Voice,
}

/// Assimilation table keyed by (class of left, class of right).
const ASSIMILATIONS: &[((PhonemeClass, PhonemeClass), Assimilation)] = &[
    (
        (PhonemeClass::Nasal, PhonemeClass::VoicedPlosive),
        Assimilation::NasalPlace,
    ),
    (
        (PhonemeClass::Nasal, PhonemeClass::UnvoicedPlosive),
        Assimilation::NasalPlace,
    ),
    (
        (PhonemeClass::VoicedPlosive, PhonemeClass::UnvoicedPlosive),
        Assimilation::Devoice,
    ),
    (
        (PhonemeClass::VoicedPlosive, PhonemeClass::UnvoicedFricative),
        Assimilation::Devoice,
    ),
    (
        (PhonemeClass::VoicedFricative, PhonemeClass::UnvoicedPlosive),
        Assimilation::Devoice,
    ),
    (
        (PhonemeClass::VoicedFricative, PhonemeClass::UnvoicedFricative),
        Assimilation::Devoice,
    ),
    (
        (PhonemeClass::UnvoicedPlosive, PhonemeClass::VoicedPlosive),
        Assimilation::Voice,
    ),
    (
        (PhonemeClass::UnvoicedPlosive, PhonemeClass::VoicedFricative),
        Assimilation::Voice,
    ),
    (
        (PhonemeClass::UnvoicedFricative, PhonemeClass::VoicedPlosive),
        Assimilation::Voice,
    ),
    (
        (PhonemeClass::UnvoicedFricative, PhonemeClass::VoicedFricative),
        Assimilation::Voice,
    ),
];

fn lookup_assimilation(left: PhonemeClass, right: PhonemeClass) -> Option<Assimilation> {
    ASSIMILATIONS
        .iter()
        .find(|(pair, _)| *pair == (left, right))
        .map(|(_, assimilation)| *assimilation)
}

/// Joins phonological strings at morpheme boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryJoiner {
    strategy: JoinStrategy,
    epenthetic_consonant: char,
    epenthetic_vowel: char,
}

impl Default for BoundaryJoiner {
    fn default() -> Self {
        BoundaryJoiner {
            strategy: JoinStrategy::Epenthetic,
            epenthetic_consonant: 'h',
            epenthetic_vowel: 'e',
        }
    }
}

impl BoundaryJoiner {
    /// Create a joiner, checking that the epenthetic symbols belong to the
    /// right classes.
    pub fn new(
        strategy: JoinStrategy,
        epenthetic_consonant: char,
        epenthetic_vowel: char,
    ) -> Result<Self> {
        if !is_consonant(epenthetic_consonant) {
            return Err(LexisError::config(format!(
                "epenthetic consonant `{epenthetic_consonant}` is not a consonant of the inventory"
            )));
        }
        if !is_vowel(epenthetic_vowel) {
            return Err(LexisError::config(format!(
                "epenthetic vowel `{epenthetic_vowel}` is not a vowel of the inventory"
            )));
        }

        Ok(BoundaryJoiner {
            strategy,
            epenthetic_consonant,
            epenthetic_vowel,
        })
    }

    /// Set the cluster repair strategy.
    pub fn with_strategy(mut self, strategy: JoinStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> JoinStrategy {
        self.strategy
    }

    pub fn epenthetic_consonant(&self) -> char {
        self.epenthetic_consonant
    }

    pub fn epenthetic_vowel(&self) -> char {
        self.epenthetic_vowel
    }

    /// Join two morphemes.
    pub fn join(&self, left: &str, right: &str) -> String {
        let (Some(last), Some(first)) = (left.chars().last(), right.chars().next()) else {
            return format!("{left}{right}");
        };

        match (classify(last), classify(first)) {
            (Some(lc), Some(rc)) if lc.is_vowel() && rc.is_vowel() => {
                splice(left, Some(self.epenthetic_consonant), right)
            }
            (Some(lc), Some(rc)) if lc.is_consonant() && rc.is_consonant() => {
                self.join_consonants(left, last, lc, right, first, rc)
            }
            _ => format!("{left}{right}"),
        }
    }

    /// Join any number of morphemes left to right.
    pub fn join_all<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let mut parts = parts.iter();
        let Some(first) = parts.next() else {
            return String::new();
        };

        parts.fold(first.as_ref().to_string(), |acc, part| {
            self.join(&acc, part.as_ref())
        })
    }

    /// Join idiom parts with a separator; no phonological interaction.
    pub fn join_idiom<S: AsRef<str>>(&self, parts: &[S], separator: &str) -> String {
        parts
            .iter()
            .map(|part| part.as_ref())
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn join_consonants(
        &self,
        left: &str,
        last: char,
        last_class: PhonemeClass,
        right: &str,
        first: char,
        first_class: PhonemeClass,
    ) -> String {
        if is_valid_cluster(last, first) {
            return format!("{left}{right}");
        }

        if self.strategy == JoinStrategy::Assimilating {
            let substituted = lookup_assimilation(last_class, first_class)
                .and_then(|assimilation| assimilate(assimilation, last, first));
            if let Some(new_last) = substituted {
                let stem = &left[..left.len() - last.len_utf8()];
                // the substitute must also sit legally after the rest of the stem
                let fits_stem = match stem.chars().last() {
                    Some(prev) if classify(prev).is_some_and(|c| c.is_consonant()) => {
                        is_valid_cluster(prev, new_last)
                    }
                    _ => true,
                };
                if fits_stem && is_valid_cluster(new_last, first) {
                    return format!("{stem}{new_last}{right}");
                }
            }
        }

        splice(left, Some(self.epenthetic_vowel), right)
    }
}

fn assimilate(assimilation: Assimilation, left: char, right: char) -> Option<char> {
    match assimilation {
        Assimilation::NasalPlace => homorganic_nasal(right),
        Assimilation::Devoice | Assimilation::Voice => voicing_counterpart(left),
    }
}

fn splice(left: &str, insert: Option<char>, right: &str) -> String {
    let mut out = String::with_capacity(left.len() + right.len() + 4);
    out.push_str(left);
    if let Some(symbol) = insert {
        out.push(symbol);
    }
    out.push_str(right);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_adjacent_vowels(s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        chars.windows(2).any(|w| is_vowel(w[0]) && is_vowel(w[1]))
    }

    #[test]
    fn test_hiatus_inserts_one_consonant() {
        let joiner = BoundaryJoiner::default();
        for (left, right) in [("ka", "oro"), ("me", "i"), ("u", "a"), ("lo", "e")] {
            let joined = joiner.join(left, right);
            assert_eq!(joined.chars().count(), left.len() + right.len() + 1);
            assert!(joined.starts_with(left));
            assert!(joined.ends_with(right));
            assert!(!has_adjacent_vowels(&joined), "{joined}");
        }
    }

    #[test]
    fn test_plain_concatenation() {
        let joiner = BoundaryJoiner::default();
        assert_eq!(joiner.join("ta", "ro"), "taro");
        assert_eq!(joiner.join("tar", "o"), "taro");
        assert_eq!(joiner.join("dis", "ceba"), "disceba");
        assert_eq!(joiner.join("", "ceba"), "ceba");
        assert_eq!(joiner.join("dis", ""), "dis");
    }

    #[test]
    fn test_illegal_cluster_epenthesis() {
        let joiner = BoundaryJoiner::default();
        assert_eq!(joiner.join("kat", "ta"), "kateta");
        assert_eq!(joiner.join("sah", "ta"), "saheta");
        assert_eq!(joiner.join("lan", "po"), "lanepo");
    }

    #[test]
    fn test_assimilation() {
        let joiner = BoundaryJoiner::default().with_strategy(JoinStrategy::Assimilating);
        assert_eq!(joiner.join("lan", "po"), "lampo");
        assert_eq!(joiner.join("kat", "bo"), "kadbo");
        assert_eq!(joiner.join("kas", "da"), "kazda");
        assert_eq!(joiner.join("kab", "so"), "kapso");
        // devoicing would produce a geminate, so a vowel is inserted instead
        assert_eq!(joiner.join("kad", "to"), "kadeto");
        // no homorganic nasal before a dorsal
        assert_eq!(joiner.join("lam", "ko"), "lameko");
        // voicing `t` would leave `sd` inside the stem
        assert_eq!(joiner.join("kast", "bo"), "kastebo");
        assert_eq!(joiner.join("kalt", "bo"), "kaldbo");
        // legal clusters are untouched by either strategy
        assert_eq!(joiner.join("dis", "ceba"), "disceba");
    }

    #[test]
    fn test_join_all_and_idiom() {
        let joiner = BoundaryJoiner::default();
        assert_eq!(joiner.join_all(&["dis", "ceba", "a"]), "discebaha");
        assert_eq!(joiner.join_all::<&str>(&[]), "");
        assert_eq!(joiner.join_idiom(&["dis", "ceba"], " "), "dis ceba");
    }

    #[test]
    fn test_new_rejects_misclassified_symbols() {
        assert!(BoundaryJoiner::new(JoinStrategy::Epenthetic, 'a', 'e').is_err());
        assert!(BoundaryJoiner::new(JoinStrategy::Epenthetic, 'h', 't').is_err());
        assert!(BoundaryJoiner::new(JoinStrategy::Assimilating, 'n', 'i').is_ok());
    }
}
