//! Donor-family rewrite pipelines.
//!
//! Every root entry names the language family it was borrowed from. Each
//! family has one hand-authored [`RewritePipeline`] implementing its sound
//! changes, in four broad stages:
//!
//! 1. normalisation (case, reconstruction marks, length marks)
//! 2. suffix stripping
//! 3. vowel merger and consonant mapping
//! 4. coda simplification
//!
//! The built-in families are `latin`, `greek`, `germanic` and `verbatim`.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::phonology::inventory::voicing_counterpart;
use crate::rewrite::context::{Context, SymbolSet};
use crate::rewrite::rule::RewriteRule;
use crate::rewrite::RewritePipeline;

/// Consonants of the inventory, as a regex character class body.
const CONSONANTS: &str = "bcdfghjklmnprstvxz";

/// Named pipelines, one per donor family.
#[derive(Debug, Clone, Default)]
pub struct PipelineRegistry {
    pipelines: BTreeMap<String, RewritePipeline>,
}

impl PipelineRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        PipelineRegistry {
            pipelines: BTreeMap::new(),
        }
    }

    /// A registry holding the built-in donor families.
    pub fn builtin() -> Result<Self> {
        let mut registry = PipelineRegistry::new();
        registry.register(verbatim()?);
        registry.register(latin()?);
        registry.register(greek()?);
        registry.register(germanic()?);
        Ok(registry)
    }

    /// Register a pipeline under its own name, replacing any pipeline
    /// previously registered under that name.
    pub fn register(&mut self, pipeline: RewritePipeline) -> Option<RewritePipeline> {
        self.pipelines
            .insert(pipeline.name().to_string(), pipeline)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_pipeline(mut self, pipeline: RewritePipeline) -> Self {
        self.register(pipeline);
        self
    }

    pub fn get(&self, family: &str) -> Option<&RewritePipeline> {
        self.pipelines.get(family)
    }

    pub fn contains(&self, family: &str) -> bool {
        self.pipelines.contains_key(family)
    }

    /// Registered family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.pipelines.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}

fn lowercase(m: &str) -> String {
    m.to_lowercase()
}

fn strip_length_marks(m: &str) -> String {
    m.chars()
        .map(|c| match c {
            'ā' | 'ă' => 'a',
            'ē' | 'ĕ' => 'e',
            'ī' | 'ĭ' => 'i',
            'ō' | 'ŏ' => 'o',
            'ū' | 'ŭ' => 'u',
            'ȳ' => 'y',
            other => other,
        })
        .collect()
}

fn collapse_geminates(m: &str) -> String {
    let mut out = String::with_capacity(m.len());
    let mut previous = None;
    for c in m.chars() {
        if previous != Some(c) {
            out.push(c);
        }
        previous = Some(c);
    }
    out
}

fn toggle_voicing(m: &str) -> String {
    m.chars()
        .map(|c| voicing_counterpart(c).unwrap_or(c))
        .collect()
}

/// Rules every family starts with.
fn normalisation(pipeline: RewritePipeline) -> Result<RewritePipeline> {
    Ok(pipeline
        .add_rule(RewriteRule::map("lowercase", r"\p{Lu}+", lowercase)?)
        .add_rule(RewriteRule::pattern("strip-marks", r"[*\-\s]", "")?))
}

/// Rules every family ends with.
fn coda_simplification(pipeline: RewritePipeline) -> Result<RewritePipeline> {
    Ok(pipeline
        .add_rule(RewriteRule::map("degeminate", r"\p{L}{2,}", collapse_geminates)?)
        .add_rule(RewriteRule::pattern(
            "final-cluster",
            &format!("([{CONSONANTS}])[{CONSONANTS}]+$"),
            "$1",
        )?))
}

/// Lowercasing only; for sources already written in the target inventory.
pub fn verbatim() -> Result<RewritePipeline> {
    normalisation(RewritePipeline::new("verbatim"))
}

/// Classical Latin.
///
/// `dominus` → `domin`, `aquila` → `agila`, `caput` → `kabut`, `mittere` → `mit`.
pub fn latin() -> Result<RewritePipeline> {
    let pipeline = normalisation(RewritePipeline::new("latin"))?
        .add_rule(RewriteRule::pattern(
            "strip-suffix",
            r"(us|um|is|ae|em|es|ere|are|ire)$",
            "",
        )?)
        .add_rule(RewriteRule::map(
            "vowel-length",
            "[āăēĕīĭōŏūŭȳ]",
            strip_length_marks,
        )?)
        .add_rule(RewriteRule::literal("ae", "ae", "e"))
        .add_rule(RewriteRule::literal("oe", "oe", "e"))
        .add_rule(RewriteRule::literal("au", "au", "o"))
        .add_rule(RewriteRule::literal("qu", "qu", "k"))
        .add_rule(RewriteRule::literal("ph", "ph", "f"))
        .add_rule(RewriteRule::literal("th", "th", "t"))
        .add_rule(RewriteRule::literal("ch", "ch", "k"))
        .add_rule(
            RewriteRule::literal("hard-c", "c", "k")
                .when(Context::NotFollowedBy(SymbolSet::chars("ei"))),
        )
        .add_rule(RewriteRule::literal("y", "y", "i"))
        .add_rule(RewriteRule::literal("w", "w", "v"))
        .add_rule(
            RewriteRule::map("intervocalic-voicing", "[ptk]", toggle_voicing)?
                .when(Context::PrecededBy(SymbolSet::Vowels))
                .when(Context::FollowedBy(SymbolSet::Vowels)),
        );

    coda_simplification(pipeline)
}

/// Romanised Ancient Greek.
///
/// `phōnē` → `fon`, `aggelos` → `angel`, `psychē` → `six`.
pub fn greek() -> Result<RewritePipeline> {
    let pipeline = normalisation(RewritePipeline::new("greek"))?
        .add_rule(RewriteRule::pattern(
            "strip-suffix",
            r"(os|on|ēs|es|is|ē|ia)$",
            "",
        )?)
        .add_rule(RewriteRule::map(
            "vowel-length",
            "[āăēĕīĭōŏūŭȳ]",
            strip_length_marks,
        )?)
        .add_rule(RewriteRule::literal("ou", "ou", "u"))
        .add_rule(RewriteRule::literal("ei", "ei", "i"))
        .add_rule(RewriteRule::literal("oi", "oi", "i"))
        .add_rule(RewriteRule::literal("ai", "ai", "e"))
        .add_rule(RewriteRule::literal("y", "y", "i"))
        .add_rule(RewriteRule::literal("ph", "ph", "f"))
        .add_rule(RewriteRule::literal("th", "th", "t"))
        .add_rule(RewriteRule::literal("kh", "kh", "x"))
        .add_rule(RewriteRule::literal("ch", "ch", "x"))
        .add_rule(RewriteRule::literal("rh", "rh", "r"))
        .add_rule(RewriteRule::literal("initial-ps", "ps", "s").when(Context::Initial))
        .add_rule(
            RewriteRule::literal("nasal-gamma", "g", "n")
                .when(Context::FollowedBy(SymbolSet::chars("kgx"))),
        )
        .add_rule(
            RewriteRule::map("final-devoicing", "[bdgjvz]", toggle_voicing)?
                .when(Context::Final),
        );

    coda_simplification(pipeline)
}

/// Older Germanic and archaic English spellings.
///
/// `giveth` → `gif`, `knight` → `nit`, `wheel` → `vil`.
pub fn germanic() -> Result<RewritePipeline> {
    let pipeline = normalisation(RewritePipeline::new("germanic"))?
        .add_rule(RewriteRule::pattern(
            "strip-suffix",
            r"(eth|est|ing|ed|en|an|s)$",
            "",
        )?)
        .add_rule(RewriteRule::literal("ee", "ee", "i"))
        .add_rule(RewriteRule::literal("oo", "oo", "u"))
        .add_rule(RewriteRule::literal("ea", "ea", "e"))
        .add_rule(RewriteRule::literal("y", "y", "i"))
        .add_rule(RewriteRule::literal("initial-kn", "kn", "n").when(Context::Initial))
        .add_rule(RewriteRule::literal("wh", "wh", "v"))
        .add_rule(RewriteRule::literal("w", "w", "v"))
        .add_rule(RewriteRule::literal("th", "th", "t"))
        .add_rule(RewriteRule::literal("sh", "sh", "s"))
        .add_rule(RewriteRule::literal("ch", "ch", "c"))
        .add_rule(RewriteRule::literal("gh", "gh", ""))
        .add_rule(RewriteRule::literal("ck", "ck", "k"))
        .add_rule(RewriteRule::literal("q", "q", "k"))
        .add_rule(
            RewriteRule::literal("final-e", "e", "")
                .when(Context::Final)
                .when(Context::PrecededBy(SymbolSet::Consonants)),
        )
        .add_rule(
            RewriteRule::map("final-devoicing", "[bdgjvz]", toggle_voicing)?
                .when(Context::Final),
        );

    coda_simplification(pipeline)
}
