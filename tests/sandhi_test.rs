//! Boundary joiner properties over the whole inventory

use lexis::phonology::cluster::is_valid_cluster;
use lexis::phonology::inventory::{PhonemeClass, is_vowel};
use lexis::phonology::{BoundaryJoiner, JoinStrategy};

fn symbols(filter: fn(PhonemeClass) -> bool) -> Vec<char> {
    PhonemeClass::ALL
        .iter()
        .filter(|class| filter(**class))
        .flat_map(|class| class.symbols().chars())
        .collect()
}

fn joiners() -> Vec<BoundaryJoiner> {
    vec![
        BoundaryJoiner::default(),
        BoundaryJoiner::default().with_strategy(JoinStrategy::Assimilating),
    ]
}

#[test]
fn test_hiatus_gets_exactly_one_consonant() {
    let vowels = symbols(PhonemeClass::is_vowel);
    for joiner in joiners() {
        for &left in &vowels {
            for &right in &vowels {
                let l = format!("k{left}");
                let r = format!("{right}t");
                let joined = joiner.join(&l, &r);

                assert_eq!(joined.chars().count(), l.len() + r.len() + 1, "{joined}");
                assert_eq!(joined, format!("{l}{}{r}", joiner.epenthetic_consonant()));
                let chars: Vec<char> = joined.chars().collect();
                assert!(
                    !chars.windows(2).any(|w| is_vowel(w[0]) && is_vowel(w[1])),
                    "{joined}"
                );
            }
        }
    }
}

#[test]
fn test_legal_clusters_concatenate() {
    let consonants = symbols(PhonemeClass::is_consonant);
    for joiner in joiners() {
        for &left in &consonants {
            for &right in &consonants {
                let l = format!("a{left}");
                let r = format!("{right}a");
                let joined = joiner.join(&l, &r);

                if is_valid_cluster(left, right) {
                    assert_eq!(joined, format!("{l}{r}"));
                } else {
                    // never leaves an illegal cluster at the boundary
                    let chars: Vec<char> = joined.chars().collect();
                    assert!(
                        chars.windows(2).all(|w| is_vowel(w[0])
                            || is_vowel(w[1])
                            || is_valid_cluster(w[0], w[1])),
                        "{l} + {r} = {joined}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_clustered_stems_stay_legal() {
    let consonants = symbols(PhonemeClass::is_consonant);
    for joiner in joiners() {
        for &inner in &consonants {
            for &last in &consonants {
                if !is_valid_cluster(inner, last) {
                    continue;
                }
                for &first in &consonants {
                    let l = format!("a{inner}{last}");
                    let r = format!("{first}a");
                    let joined = joiner.join(&l, &r);

                    let chars: Vec<char> = joined.chars().collect();
                    assert!(
                        chars.windows(2).all(|w| is_vowel(w[0])
                            || is_vowel(w[1])
                            || is_valid_cluster(w[0], w[1])),
                        "{l} + {r} = {joined}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_mixed_boundaries_concatenate() {
    let joiner = BoundaryJoiner::default();
    assert_eq!(joiner.join("ka", "to"), "kato");
    assert_eq!(joiner.join("kat", "o"), "kato");
    assert_eq!(joiner.join("", "to"), "to");
    assert_eq!(joiner.join("ka", ""), "ka");
    // foreign symbols are not touched
    assert_eq!(joiner.join("kaw", "wo"), "kawwo");
}
