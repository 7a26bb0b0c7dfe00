//! Two-consonant cluster rules.
//!
//! Both the boundary joiner and the phonotactic validator ask the same
//! question: can consonant `l` be immediately followed by consonant `r`?
//! A cluster is rejected when
//!
//! 1. it is a geminate (`tt`),
//! 2. either member is the glottal `h`,
//! 3. both members are obstruents that disagree in voicing (`tb`, `sd`),
//! 4. a nasal precedes a plosive of another place (`mt`, `np`),
//! 5. both members are liquids (`lr`).
//!
//! Everything else (`sc`, `st`, `mp`, `nd`, `rk`, `lm` ...) is accepted.

use crate::phonology::inventory::{PhonemeClass, Place, classify, place};

/// Why a two-consonant cluster is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterViolation {
    Geminate,
    Glottal,
    VoicingMismatch,
    NasalPlace,
    DoubleLiquid,
}

/// Check a cluster, returning the first rule it breaks.
///
/// Vowels and foreign symbols are never part of a cluster, so any pair
/// containing one is accepted.
pub fn check_cluster(left: char, right: char) -> Option<ClusterViolation> {
    let (Some(lc), Some(rc)) = (classify(left), classify(right)) else {
        return None;
    };
    if lc.is_vowel() || rc.is_vowel() {
        return None;
    }

    if left == right {
        return Some(ClusterViolation::Geminate);
    }
    if left == 'h' || right == 'h' {
        return Some(ClusterViolation::Glottal);
    }
    if let (Some(lv), Some(rv)) = (lc.voiced(), rc.voiced()) {
        if lv != rv {
            return Some(ClusterViolation::VoicingMismatch);
        }
    }
    if lc == PhonemeClass::Nasal && rc.is_plosive() {
        let nasal_labial = place(left) == Some(Place::Labial);
        let plosive_labial = place(right) == Some(Place::Labial);
        if nasal_labial != plosive_labial {
            return Some(ClusterViolation::NasalPlace);
        }
    }
    if lc == PhonemeClass::Liquid && rc == PhonemeClass::Liquid {
        return Some(ClusterViolation::DoubleLiquid);
    }

    None
}

/// Whether `left` followed by `right` is a pronounceable cluster.
pub fn is_valid_cluster(left: char, right: char) -> bool {
    check_cluster(left, right).is_none()
}
