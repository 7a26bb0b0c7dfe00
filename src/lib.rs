//! # Lexis
//!
//! A lexicon compiler for a constructed language.
//!
//! ## Features
//!
//! - Sound-change derivation of roots from etymology citations
//! - Ordered rewrite cascades with context predicates
//! - Sandhi at morpheme boundaries (epenthesis or assimilation)
//! - Bounded fixed-point resolution of compounds and idioms
//! - Phonotactic, homophone and root length checks
//! - Longest-match translation from keys to forms

pub mod cli;
pub mod error;
pub mod etymology;
pub mod lexicon;
pub mod phonology;
pub mod rewrite;

pub mod prelude {
    pub use crate::error::{LexisError, Result};
    pub use crate::etymology::PipelineRegistry;
    pub use crate::lexicon::{
        CompiledLexicon, CompilerConfig, ComponentRef, Diagnostic, LexiconConfig, LexiconEntry,
        Severity,
    };
    pub use crate::phonology::{BoundaryJoiner, JoinStrategy};
    pub use crate::rewrite::{RewritePipeline, RewriteRule};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
