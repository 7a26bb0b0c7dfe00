//! Lexicon entries.
//!
//! Every entry has exactly one [`Formation`]:
//!
//! - `Root`: derived from an etymology with a donor family's pipeline
//! - `Complex`: the sandhi-joined forms of its components
//! - `Idiom`: the separator-joined forms of its components
//!
//! In JSON an entry names its formation with one of the keys `root`,
//! `complex` or `idiom`:
//!
//! ```json
//! {
//!   "give": { "root": { "etymology": "giveth", "family": "germanic" }, "gloss": "give" },
//!   "take": { "complex": ["back", "give"], "gloss": "{1} {0}" },
//!   "farewell": { "idiom": ["go", { "literal": "na" }] }
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lexicon::gloss::GlossTemplate;

/// A reference from a complex or idiom entry to one of its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawComponent", into = "RawComponent")]
pub enum ComponentRef {
    /// Another key of the same lexicon.
    Key(String),
    /// Text injected verbatim, without lookup.
    Literal(String),
}

impl ComponentRef {
    pub fn key<S: Into<String>>(key: S) -> Self {
        ComponentRef::Key(key.into())
    }

    pub fn literal<S: Into<String>>(text: S) -> Self {
        ComponentRef::Literal(text.into())
    }
}

impl From<&str> for ComponentRef {
    fn from(key: &str) -> Self {
        ComponentRef::Key(key.to_string())
    }
}

impl std::fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentRef::Key(key) => write!(f, "{key}"),
            ComponentRef::Literal(text) => write!(f, "\"{text}\""),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawComponent {
    Key(String),
    Literal { literal: String },
}

impl From<RawComponent> for ComponentRef {
    fn from(raw: RawComponent) -> Self {
        match raw {
            RawComponent::Key(key) => ComponentRef::Key(key),
            RawComponent::Literal { literal } => ComponentRef::Literal(literal),
        }
    }
}

impl From<ComponentRef> for RawComponent {
    fn from(component: ComponentRef) -> Self {
        match component {
            ComponentRef::Key(key) => RawComponent::Key(key),
            ComponentRef::Literal(literal) => RawComponent::Literal { literal },
        }
    }
}

/// How an entry's form is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formation {
    Root { etymology: String, family: String },
    Complex(Vec<ComponentRef>),
    Idiom(Vec<ComponentRef>),
}

impl Formation {
    pub fn kind(&self) -> FormationKind {
        match self {
            Formation::Root { .. } => FormationKind::Root,
            Formation::Complex(_) => FormationKind::Complex,
            Formation::Idiom(_) => FormationKind::Idiom,
        }
    }

    /// Components of a complex or idiom entry; empty for roots.
    pub fn components(&self) -> &[ComponentRef] {
        match self {
            Formation::Root { .. } => &[],
            Formation::Complex(components) | Formation::Idiom(components) => components,
        }
    }
}

/// The formation tag without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationKind {
    Root,
    Complex,
    Idiom,
}

impl std::fmt::Display for FormationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormationKind::Root => "root",
            FormationKind::Complex => "complex",
            FormationKind::Idiom => "idiom",
        };
        f.write_str(name)
    }
}

/// One entry of the lexicon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct LexiconEntry {
    pub formation: Formation,
    pub gloss: GlossTemplate,
    pub tags: Vec<String>,
    pub provenance: Option<String>,
    /// When the entry was authored. Only used for ordering.
    pub date: Option<NaiveDate>,
}

impl LexiconEntry {
    fn with_formation(formation: Formation) -> Self {
        LexiconEntry {
            formation,
            gloss: GlossTemplate::default(),
            tags: Vec::new(),
            provenance: None,
            date: None,
        }
    }

    /// A root entry derived from `etymology` with the `family` pipeline.
    pub fn root<E: Into<String>, F: Into<String>>(etymology: E, family: F) -> Self {
        Self::with_formation(Formation::Root {
            etymology: etymology.into(),
            family: family.into(),
        })
    }

    pub fn complex<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ComponentRef>,
    {
        Self::with_formation(Formation::Complex(
            components.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn idiom<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ComponentRef>,
    {
        Self::with_formation(Formation::Idiom(
            components.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn with_gloss<G: Into<GlossTemplate>>(mut self, gloss: G) -> Self {
        self.gloss = gloss.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_provenance<S: Into<String>>(mut self, provenance: S) -> Self {
        self.provenance = Some(provenance.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn kind(&self) -> FormationKind {
        self.formation.kind()
    }
}

/// The loosely-typed shape entries have on disk.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    root: Option<RawRoot>,
    complex: Option<Vec<ComponentRef>>,
    idiom: Option<Vec<ComponentRef>>,
    #[serde(default)]
    gloss: GlossTemplate,
    #[serde(default)]
    tags: Vec<String>,
    provenance: Option<String>,
    date: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRoot {
    etymology: String,
    family: String,
}

impl TryFrom<RawEntry> for LexiconEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let formation = match (raw.root, raw.complex, raw.idiom) {
            (Some(root), None, None) => Formation::Root {
                etymology: root.etymology,
                family: root.family,
            },
            (None, Some(components), None) => Formation::Complex(components),
            (None, None, Some(components)) => Formation::Idiom(components),
            (None, None, None) => {
                return Err("entry needs one of `root`, `complex` or `idiom`".to_string());
            }
            _ => {
                return Err(
                    "entry must have exactly one of `root`, `complex` or `idiom`".to_string(),
                );
            }
        };

        Ok(LexiconEntry {
            formation,
            gloss: raw.gloss,
            tags: raw.tags,
            provenance: raw.provenance,
            date: raw.date,
        })
    }
}
