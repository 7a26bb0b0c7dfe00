//! Lexicon data model and compilation.
//!
//! This module provides:
//! - Entry definitions and their JSON configuration format
//! - The compound/idiom resolver and the validator
//! - The compiler producing an immutable [`CompiledLexicon`]
//! - Key-to-form translation
//!
//! # Examples
//!
//! ```
//! use lexis::lexicon::{CompiledLexicon, LexiconConfig};
//!
//! let config = LexiconConfig::from_json_str(r#"{
//!     "entries": {
//!         "head": { "root": { "etymology": "caput", "family": "latin" } },
//!         "chief": { "complex": ["head", { "literal": "o" }] }
//!     }
//! }"#).unwrap();
//!
//! let lexicon = CompiledLexicon::compile_default(&config).unwrap();
//! assert_eq!(lexicon.form("chief"), Some("kabuto"));
//! ```

pub mod compiler;
pub mod config;
pub mod diagnostic;
pub mod entry;
pub mod gloss;
pub mod resolver;
pub mod table;
pub mod translate;
pub mod validator;

pub use compiler::{CompiledLexicon, compile};
pub use config::{CompilerConfig, LexiconConfig};
pub use diagnostic::{Diagnostic, DiagnosticKind, MissingReason, Severity};
pub use entry::{ComponentRef, Formation, FormationKind, LexiconEntry};
pub use gloss::GlossTemplate;
pub use table::{CompiledEntry, CompiledTable, LexiconTable};
pub use translate::Translator;
