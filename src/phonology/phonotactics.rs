//! Phonotactic well-formedness rules.
//!
//! A [`PhonotacticRule`] is a named forbidden pattern. The validator runs the
//! ordered list returned by [`default_rules`] against every root form and
//! reports the first rule that matches.
//!
//! | Rule | Forbids |
//! |---|---|
//! | `empty-form` | the empty string |
//! | `foreign-symbol` | any symbol outside the inventory |
//! | `geminate` | two identical adjacent symbols |
//! | `vowel-sequence` | adjacent vowels other than `ai au ei oi` |
//! | `consonant-cluster` | an adjacent consonant pair rejected by [`cluster`](crate::phonology::cluster) |
//! | `triple-consonant` | three consonants in a row |
//! | `illegal-final` | a voiced obstruent or `h` at the end |

use regex::Regex;

use crate::error::Result;
use crate::phonology::cluster::is_valid_cluster;
use crate::phonology::inventory::{is_known, is_vowel};

const DIPHTHONGS: [&str; 4] = ["ai", "au", "ei", "oi"];

/// How a rule recognises a forbidden form.
#[derive(Debug, Clone)]
pub enum ForbiddenPattern {
    Regex(Regex),
    /// Returns `true` when the form is forbidden.
    Predicate(fn(&[char]) -> bool),
}

/// A named forbidden pattern.
#[derive(Debug, Clone)]
pub struct PhonotacticRule {
    name: &'static str,
    pattern: ForbiddenPattern,
}

impl PhonotacticRule {
    pub fn regex(name: &'static str, pattern: &str) -> Result<Self> {
        Ok(PhonotacticRule {
            name,
            pattern: ForbiddenPattern::Regex(Regex::new(pattern)?),
        })
    }

    pub fn predicate(name: &'static str, check: fn(&[char]) -> bool) -> Self {
        PhonotacticRule {
            name,
            pattern: ForbiddenPattern::Predicate(check),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `form` violates this rule.
    pub fn matches(&self, form: &str) -> bool {
        match &self.pattern {
            ForbiddenPattern::Regex(regex) => regex.is_match(form),
            ForbiddenPattern::Predicate(check) => {
                let symbols: Vec<char> = form.chars().collect();
                check(&symbols)
            }
        }
    }
}

/// An ordered list of rules; the first match wins.
#[derive(Debug, Clone)]
pub struct Phonotactics {
    rules: Vec<PhonotacticRule>,
}

impl Phonotactics {
    pub fn new(rules: Vec<PhonotacticRule>) -> Self {
        Phonotactics { rules }
    }

    /// The language's standard rule set.
    pub fn standard() -> Result<Self> {
        Ok(Phonotactics::new(default_rules()?))
    }

    pub fn rules(&self) -> &[PhonotacticRule] {
        &self.rules
    }

    /// Name of the first rule `form` violates, if any.
    pub fn first_violation(&self, form: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(form))
            .map(PhonotacticRule::name)
    }
}

fn is_empty(symbols: &[char]) -> bool {
    symbols.is_empty()
}

fn has_foreign_symbol(symbols: &[char]) -> bool {
    symbols.iter().any(|&c| !is_known(c))
}

fn has_geminate(symbols: &[char]) -> bool {
    symbols.windows(2).any(|w| w[0] == w[1])
}

fn has_illegal_vowel_sequence(symbols: &[char]) -> bool {
    symbols.windows(2).any(|w| {
        if !(is_vowel(w[0]) && is_vowel(w[1])) {
            return false;
        }
        let pair: String = w.iter().collect();
        !DIPHTHONGS.contains(&pair.as_str())
    }) || symbols.windows(3).any(|w| w.iter().all(|&c| is_vowel(c)))
}

fn has_illegal_cluster(symbols: &[char]) -> bool {
    symbols.windows(2).any(|w| !is_valid_cluster(w[0], w[1]))
}

/// The standard forbidden patterns, in reporting order.
pub fn default_rules() -> Result<Vec<PhonotacticRule>> {
    Ok(vec![
        PhonotacticRule::predicate("empty-form", is_empty),
        PhonotacticRule::predicate("foreign-symbol", has_foreign_symbol),
        PhonotacticRule::predicate("geminate", has_geminate),
        PhonotacticRule::predicate("vowel-sequence", has_illegal_vowel_sequence),
        PhonotacticRule::predicate("consonant-cluster", has_illegal_cluster),
        PhonotacticRule::regex("triple-consonant", "[bcdfghjklmnprstvxz]{3}")?,
        PhonotacticRule::regex("illegal-final", "[bdgjvzh]$")?,
    ])
}
