//! The phoneme inventory.
//!
//! Every symbol of the language is a single `char`. The inventory is closed:
//! symbols outside it are "foreign" and [`classify`] returns `None` for them.
//!
//! | Class | Symbols |
//! |---|---|
//! | Vowel | `a e i o u` |
//! | Nasal | `m n` |
//! | VoicedPlosive | `b d g j` |
//! | UnvoicedPlosive | `p t k c` |
//! | VoicedFricative | `v z` |
//! | UnvoicedFricative | `f s h x` |
//! | Liquid | `l r` |
//!
//! # Examples
//!
//! ```
//! use lexis::phonology::inventory::{classify, PhonemeClass};
//!
//! assert_eq!(classify('a'), Some(PhonemeClass::Vowel));
//! assert_eq!(classify('s'), Some(PhonemeClass::UnvoicedFricative));
//! assert_eq!(classify('w'), None);
//! ```

use serde::{Deserialize, Serialize};

/// Disjoint classes of the symbol inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonemeClass {
    Vowel,
    Nasal,
    VoicedPlosive,
    UnvoicedPlosive,
    VoicedFricative,
    UnvoicedFricative,
    Liquid,
}

impl PhonemeClass {
    /// All classes, in declaration order.
    pub const ALL: [PhonemeClass; 7] = [
        PhonemeClass::Vowel,
        PhonemeClass::Nasal,
        PhonemeClass::VoicedPlosive,
        PhonemeClass::UnvoicedPlosive,
        PhonemeClass::VoicedFricative,
        PhonemeClass::UnvoicedFricative,
        PhonemeClass::Liquid,
    ];

    /// The symbols belonging to this class.
    pub fn symbols(self) -> &'static str {
        match self {
            PhonemeClass::Vowel => "aeiou",
            PhonemeClass::Nasal => "mn",
            PhonemeClass::VoicedPlosive => "bdgj",
            PhonemeClass::UnvoicedPlosive => "ptkc",
            PhonemeClass::VoicedFricative => "vz",
            PhonemeClass::UnvoicedFricative => "fshx",
            PhonemeClass::Liquid => "lr",
        }
    }

    pub fn is_vowel(self) -> bool {
        self == PhonemeClass::Vowel
    }

    pub fn is_consonant(self) -> bool {
        !self.is_vowel()
    }

    /// Plosives and fricatives.
    pub fn is_obstruent(self) -> bool {
        matches!(
            self,
            PhonemeClass::VoicedPlosive
                | PhonemeClass::UnvoicedPlosive
                | PhonemeClass::VoicedFricative
                | PhonemeClass::UnvoicedFricative
        )
    }

    pub fn is_plosive(self) -> bool {
        matches!(
            self,
            PhonemeClass::VoicedPlosive | PhonemeClass::UnvoicedPlosive
        )
    }

    /// Voicing of an obstruent; `None` for sonorants and vowels.
    pub fn voiced(self) -> Option<bool> {
        match self {
            PhonemeClass::VoicedPlosive | PhonemeClass::VoicedFricative => Some(true),
            PhonemeClass::UnvoicedPlosive | PhonemeClass::UnvoicedFricative => Some(false),
            _ => None,
        }
    }
}

/// Place of articulation of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Place {
    Labial,
    Coronal,
    Palatal,
    Dorsal,
    Glottal,
}

/// Classify a symbol. Returns `None` for symbols outside the inventory.
pub fn classify(symbol: char) -> Option<PhonemeClass> {
    PhonemeClass::ALL
        .into_iter()
        .find(|class| class.symbols().contains(symbol))
}

/// Whether the symbol belongs to the inventory.
pub fn is_known(symbol: char) -> bool {
    classify(symbol).is_some()
}

pub fn is_vowel(symbol: char) -> bool {
    classify(symbol) == Some(PhonemeClass::Vowel)
}

/// A known, non-vowel symbol.
pub fn is_consonant(symbol: char) -> bool {
    classify(symbol).is_some_and(PhonemeClass::is_consonant)
}

/// Place of articulation; `None` for vowels and foreign symbols.
pub fn place(symbol: char) -> Option<Place> {
    match symbol {
        'p' | 'b' | 'm' | 'f' | 'v' => Some(Place::Labial),
        't' | 'd' | 'n' | 's' | 'z' | 'l' | 'r' => Some(Place::Coronal),
        'c' | 'j' => Some(Place::Palatal),
        'k' | 'g' | 'x' => Some(Place::Dorsal),
        'h' => Some(Place::Glottal),
        _ => None,
    }
}

/// The obstruent with the same place and manner but opposite voicing.
///
/// `h` and `x` have no voiced partner in the inventory.
pub fn voicing_counterpart(symbol: char) -> Option<char> {
    const PAIRS: [(char, char); 6] = [
        ('b', 'p'),
        ('d', 't'),
        ('g', 'k'),
        ('j', 'c'),
        ('v', 'f'),
        ('z', 's'),
    ];

    PAIRS.iter().find_map(|&(voiced, unvoiced)| {
        if symbol == voiced {
            Some(unvoiced)
        } else if symbol == unvoiced {
            Some(voiced)
        } else {
            None
        }
    })
}

/// The nasal sharing the place of articulation of `symbol`, if the inventory has one.
pub fn homorganic_nasal(symbol: char) -> Option<char> {
    match place(symbol)? {
        Place::Labial => Some('m'),
        Place::Coronal => Some('n'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for class in PhonemeClass::ALL {
            for symbol in class.symbols().chars() {
                assert!(seen.insert(symbol), "{symbol} appears in two classes");
                assert_eq!(classify(symbol), Some(class));
            }
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn test_foreign_symbols() {
        for symbol in ['w', 'y', 'q', 'A', ' ', '-', 'þ'] {
            assert_eq!(classify(symbol), None);
            assert!(!is_consonant(symbol));
            assert!(!is_vowel(symbol));
        }
    }

    #[test]
    fn test_voicing() {
        assert_eq!(voicing_counterpart('d'), Some('t'));
        assert_eq!(voicing_counterpart('s'), Some('z'));
        assert_eq!(voicing_counterpart('h'), None);
        assert_eq!(PhonemeClass::VoicedFricative.voiced(), Some(true));
        assert_eq!(PhonemeClass::Liquid.voiced(), None);
    }

    #[test]
    fn test_every_consonant_has_a_place() {
        for class in PhonemeClass::ALL.into_iter().filter(|c| c.is_consonant()) {
            for symbol in class.symbols().chars() {
                assert!(place(symbol).is_some(), "{symbol} has no place");
            }
        }
        assert_eq!(homorganic_nasal('b'), Some('m'));
        assert_eq!(homorganic_nasal('t'), Some('n'));
        assert_eq!(homorganic_nasal('k'), None);
    }
}
