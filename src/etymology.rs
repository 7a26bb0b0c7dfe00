//! Etymology derivation.
//!
//! A root entry records where its word came from as a free-form citation.
//! [`derive`] extracts the cited word and runs it through the donor family's
//! rewrite pipeline to obtain the root form.
//!
//! Derivation never fails. A source that collapses to the empty string is a
//! valid (degenerate) result; the validator reports it later.
//!
//! # Examples
//!
//! ```
//! use lexis::etymology::{derive, donor};
//!
//! let latin = donor::latin().unwrap();
//! assert_eq!(derive("https://en.wiktionary.org/wiki/caput#Latin", &latin), "kabut");
//! ```

pub mod citation;
pub mod donor;

pub use donor::PipelineRegistry;

use crate::rewrite::{RewritePipeline, TraceStep};

/// Derive a root form from an etymology citation.
pub fn derive(source: &str, pipeline: &RewritePipeline) -> String {
    pipeline.apply(&citation::extract(source))
}

/// Like [`derive`], also returning each intermediate stage.
pub fn derive_traced(source: &str, pipeline: &RewritePipeline) -> (String, Vec<TraceStep>) {
    pipeline.apply_traced(&citation::extract(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::rule::RewriteRule;

    #[test]
    fn test_derive_uses_extracted_word() {
        let pipeline = RewritePipeline::new("toy")
            .add_rule(RewriteRule::literal("giveth", "giveth", "ceba"));
        assert_eq!(derive("giveth", &pipeline), "ceba");
        assert_eq!(derive("https://example.org/wiki/giveth#English", &pipeline), "ceba");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let latin = donor::latin().unwrap();
        let first = derive("aquila", &latin);
        for _ in 0..10 {
            assert_eq!(derive("aquila", &latin), first);
        }
    }

    #[test]
    fn test_degenerate_derivation() {
        let latin = donor::latin().unwrap();
        assert_eq!(derive("https://example.org/wiki/us", &latin), "");
        assert_eq!(derive("", &latin), "");
    }

    #[test]
    fn test_traced_derivation() {
        let latin = donor::latin().unwrap();
        let (form, steps) = derive_traced("dominus", &latin);
        assert_eq!(form, "domin");
        assert_eq!(steps.len(), latin.len());
        let suffix = steps.iter().find(|s| s.rule == "strip-suffix").unwrap();
        assert_eq!(suffix.output, "domin");
    }
}
