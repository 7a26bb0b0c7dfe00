//! Rewrite pipelines.
//!
//! A [`RewritePipeline`] is an ordered cascade of [`RewriteRule`]s. Each rule
//! performs a global substitution over the output of the previous rule, and
//! only that output: there is no backtracking across stages.
//!
//! ```text
//! "dominus" → strip-suffix → "domin" → voicing → ... → coda → root form
//! ```
//!
//! # Examples
//!
//! ```
//! use lexis::rewrite::RewritePipeline;
//! use lexis::rewrite::rule::RewriteRule;
//!
//! let pipeline = RewritePipeline::new("toy")
//!     .add_rule(RewriteRule::literal("ph", "ph", "f"))
//!     .add_rule(RewriteRule::pattern("suffix", r"(os|on)$", "").unwrap());
//!
//! assert_eq!(pipeline.apply("phonos"), "fon");
//! ```

pub mod context;
pub mod rule;

pub use context::{Context, SymbolSet};
pub use rule::RewriteRule;

/// One intermediate result recorded by [`RewritePipeline::apply_traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    /// Name of the rule that produced `output`.
    pub rule: String,
    pub output: String,
}

/// A named, ordered sequence of rewrite rules.
#[derive(Debug, Clone, Default)]
pub struct RewritePipeline {
    name: String,
    rules: Vec<RewriteRule>,
}

impl RewritePipeline {
    /// Create an empty pipeline. An empty pipeline is the identity.
    pub fn new<S: Into<String>>(name: S) -> Self {
        RewritePipeline {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule to the end of the cascade.
    pub fn add_rule(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run `input` through every rule in order.
    pub fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |text, rule| rule.apply(&text))
    }

    /// Like [`apply`](Self::apply), but also return every intermediate
    /// output, one step per rule.
    pub fn apply_traced(&self, input: &str) -> (String, Vec<TraceStep>) {
        let mut text = input.to_string();
        let mut steps = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            text = rule.apply(&text);
            steps.push(TraceStep {
                rule: rule.name().to_string(),
                output: text.clone(),
            });
        }

        (text, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = RewritePipeline::new("identity");
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply("Whatever 123"), "Whatever 123");
    }

    #[test]
    fn test_stages_are_sequential() {
        // The second stage sees the first stage's output, so `a` becomes `c`.
        let pipeline = RewritePipeline::new("chain")
            .add_rule(RewriteRule::literal("a-b", "a", "b"))
            .add_rule(RewriteRule::literal("b-c", "b", "c"));
        assert_eq!(pipeline.apply("ab"), "cc");

        // Reversed order: the first stage never sees the `b` it will produce.
        let pipeline = RewritePipeline::new("chain")
            .add_rule(RewriteRule::literal("b-c", "b", "c"))
            .add_rule(RewriteRule::literal("a-b", "a", "b"));
        assert_eq!(pipeline.apply("ab"), "bc");
    }

    #[test]
    fn test_traced_matches_plain() {
        let pipeline = RewritePipeline::new("toy")
            .add_rule(RewriteRule::literal("th", "th", "t"))
            .add_rule(RewriteRule::pattern("suffix", r"eth$", "").unwrap());

        let (output, steps) = pipeline.apply_traced("giveth");
        assert_eq!(output, pipeline.apply("giveth"));
        // `eth$` no longer matches once `th` has been simplified
        assert_eq!(output, "givet");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].rule, "th");
        assert_eq!(steps[0].output, "givet");
        assert_eq!(steps[1].output, "givet");
    }
}
