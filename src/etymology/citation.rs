//! Extraction of the cited word from a free-form etymology source.
//!
//! Etymologies are usually recorded as links to a dictionary page, e.g.
//! `https://en.wiktionary.org/wiki/caput#Latin`. Only the headword matters
//! for derivation.

use percent_encoding::percent_decode_str;

/// Extract the meaningful substring of an etymology citation.
///
/// The fragment (`#...`) and query (`?...`) are dropped, then everything up
/// to the last `/` is dropped, and the remainder is percent-decoded (invalid
/// UTF-8 is replaced lossily) and trimmed. Plain words pass through unchanged.
///
/// # Examples
///
/// ```
/// use lexis::etymology::citation::extract;
///
/// assert_eq!(extract("https://en.wiktionary.org/wiki/caput#Latin"), "caput");
/// assert_eq!(extract("https://en.wiktionary.org/wiki/ph%C5%8Dn%C4%93"), "phōnē");
/// assert_eq!(extract("giveth"), "giveth");
/// ```
pub fn extract(source: &str) -> String {
    let without_fragment = source.split(['#', '?']).next().unwrap_or_default();
    let trimmed = without_fragment.trim_end_matches('/');
    let tail = trimmed.rsplit('/').next().unwrap_or_default();

    percent_decode_str(tail)
        .decode_utf8_lossy()
        .trim()
        .to_string()
}
