//! A single rewrite rule: matcher, producer and context predicates.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::rewrite::context::Context;

/// What a rule looks for.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact text.
    Literal(String),
    /// A regular expression (no lookaround; use [`Context`] instead).
    Pattern(Regex),
}

/// What a match is replaced with.
#[derive(Debug, Clone)]
pub enum Producer {
    /// Fixed text.
    Literal(String),
    /// Text with `$1` / `${name}` capture references, expanded per match.
    Template(String),
    /// A pure function of the matched text.
    Function(fn(&str) -> String),
}

/// A match located by a [`Matcher`].
struct Found<'h> {
    start: usize,
    end: usize,
    captures: Option<Captures<'h>>,
}

impl Matcher {
    fn find_at<'h>(&self, input: &'h str, pos: usize) -> Option<Found<'h>> {
        match self {
            Matcher::Literal(literal) => input[pos..].find(literal.as_str()).map(|i| Found {
                start: pos + i,
                end: pos + i + literal.len(),
                captures: None,
            }),
            Matcher::Pattern(regex) => regex.captures_at(input, pos).map(|captures| {
                // group 0 always participates in a match
                let whole = captures.get(0).map_or(pos..pos, |m| m.range());
                Found {
                    start: whole.start,
                    end: whole.end,
                    captures: Some(captures),
                }
            }),
        }
    }

    fn source(&self) -> &str {
        match self {
            Matcher::Literal(literal) => literal,
            Matcher::Pattern(regex) => regex.as_str(),
        }
    }
}

impl Producer {
    fn produce(&self, matched: &str, captures: Option<&Captures<'_>>, output: &mut String) {
        match (self, captures) {
            (Producer::Literal(text), _) => output.push_str(text),
            (Producer::Template(template), Some(captures)) => captures.expand(template, output),
            (Producer::Template(template), None) => output.push_str(template),
            (Producer::Function(f), _) => output.push_str(&f(matched)),
        }
    }
}

/// One stage of a [`RewritePipeline`](crate::rewrite::RewritePipeline).
///
/// A rule replaces every non-overlapping match of its matcher, scanning left
/// to right, for which all of its contexts hold.
///
/// # Examples
///
/// ```
/// use lexis::rewrite::context::{Context, SymbolSet};
/// use lexis::rewrite::rule::RewriteRule;
///
/// // t -> d between vowels
/// let rule = RewriteRule::literal("intervocalic-voicing", "t", "d")
///     .when(Context::PrecededBy(SymbolSet::Vowels))
///     .when(Context::FollowedBy(SymbolSet::Vowels));
///
/// assert_eq!(rule.apply("tatat"), "tadat");
/// ```
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: String,
    matcher: Matcher,
    producer: Producer,
    contexts: Vec<Context>,
}

impl RewriteRule {
    /// Replace every occurrence of `from` with `to`.
    pub fn literal<N, F, T>(name: N, from: F, to: T) -> Self
    where
        N: Into<String>,
        F: Into<String>,
        T: Into<String>,
    {
        RewriteRule {
            name: name.into(),
            matcher: Matcher::Literal(from.into()),
            producer: Producer::Literal(to.into()),
            contexts: Vec::new(),
        }
    }

    /// Replace every match of `pattern` with `template`, expanding `$1`-style
    /// capture references. Use `$$` for a literal dollar sign.
    pub fn pattern<N, T>(name: N, pattern: &str, template: T) -> Result<Self>
    where
        N: Into<String>,
        T: Into<String>,
    {
        Ok(RewriteRule {
            name: name.into(),
            matcher: Matcher::Pattern(Regex::new(pattern)?),
            producer: Producer::Template(template.into()),
            contexts: Vec::new(),
        })
    }

    /// Replace every match of `pattern` with `f(matched_text)`.
    pub fn map<N: Into<String>>(name: N, pattern: &str, f: fn(&str) -> String) -> Result<Self> {
        Ok(RewriteRule {
            name: name.into(),
            matcher: Matcher::Pattern(Regex::new(pattern)?),
            producer: Producer::Function(f),
            contexts: Vec::new(),
        })
    }

    /// Only rewrite matches for which `context` holds.
    pub fn when(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn producer(&self) -> &Producer {
        &self.producer
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    /// Apply the rule to `input`. Total: always returns a string.
    pub fn apply(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;
        let mut pos = 0;

        while pos <= input.len() {
            let Some(found) = self.matcher.find_at(input, pos) else {
                break;
            };
            let (start, end) = (found.start, found.end);

            if !self.contexts.iter().all(|c| c.holds(input, start, end)) {
                pos = next_boundary(input, start);
                continue;
            }

            // Append unchanged part
            output.push_str(&input[last_match_end..start]);
            self.producer
                .produce(&input[start..end], found.captures.as_ref(), &mut output);
            last_match_end = end;

            pos = if end > start {
                end
            } else {
                next_boundary(input, end)
            };
        }

        output.push_str(&input[last_match_end..]);
        output
    }
}

impl std::fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} /{}/", self.name, self.matcher.source())
    }
}

/// Byte offset of the char after the one starting at `pos`, or one past the
/// end when `pos` is already at the end.
fn next_boundary(input: &str, pos: usize) -> usize {
    input[pos..]
        .chars()
        .next()
        .map_or(input.len() + 1, |c| pos + c.len_utf8())
}
