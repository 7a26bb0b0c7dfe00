//! The lexicon compiler.
//!
//! [`compile`] turns a [`LexiconConfig`] into an immutable [`CompiledLexicon`]:
//!
//! ```text
//! config ─► derive roots ─► resolve complexes/idioms ─► validate ─► CompiledLexicon
//! ```
//!
//! Problems with individual entries never stop the compile; they are returned
//! as diagnostics, ordered by stage and then by key. Only unusable settings
//! (for example an epenthetic vowel that is not a vowel) make `compile` fail.

use log::{debug, info, log_enabled, warn, Level};

use crate::error::Result;
use crate::etymology::{self, PipelineRegistry};
use crate::lexicon::config::LexiconConfig;
use crate::lexicon::diagnostic::{Diagnostic, Severity};
use crate::lexicon::entry::Formation;
use crate::lexicon::resolver;
use crate::lexicon::table::{CompiledEntry, CompiledTable, LexiconTable};
use crate::lexicon::translate::Translator;
use crate::lexicon::validator::Validator;

/// The result of a compile.
#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    table: CompiledTable,
    diagnostics: Vec<Diagnostic>,
}

impl CompiledLexicon {
    /// Compile with the given donor pipelines.
    pub fn compile(config: &LexiconConfig, registry: &PipelineRegistry) -> Result<Self> {
        compile(config, registry)
    }

    /// Compile with the built-in donor pipelines.
    pub fn compile_default(config: &LexiconConfig) -> Result<Self> {
        compile(config, &PipelineRegistry::builtin()?)
    }

    pub fn table(&self) -> &CompiledTable {
        &self.table
    }

    pub fn get(&self, key: &str) -> Option<&CompiledEntry> {
        self.table.get(key)
    }

    /// The form of `key`, if it survived compilation.
    pub fn form(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(|entry| entry.form.as_str())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Whether any entry was dropped.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// A translator from keys to compiled forms.
    pub fn translator(&self) -> Result<Translator> {
        Translator::new(
            self.table
                .iter()
                .map(|entry| (entry.key.as_str(), entry.form.as_str())),
        )
    }

    /// Replace every key occurring in `text` with its form, longest key first.
    pub fn translate(&self, text: &str) -> Result<String> {
        Ok(self.translator()?.translate(text))
    }

    pub fn into_parts(self) -> (CompiledTable, Vec<Diagnostic>) {
        (self.table, self.diagnostics)
    }
}

/// Compile `config`, deriving roots with the pipelines in `registry`.
pub fn compile(config: &LexiconConfig, registry: &PipelineRegistry) -> Result<CompiledLexicon> {
    let settings = config.settings();
    settings.validate()?;
    let joiner = settings.joiner()?;
    let validator = Validator::from_config(settings)?;

    let mut table = LexiconTable::from_config(config);
    let mut diagnostics = derive_roots(&mut table, registry);

    let (table, unresolved) = resolver::resolve(table, &joiner, &settings.idiom_separator);
    diagnostics.extend(unresolved);
    diagnostics.extend(validator.validate(&table));

    let compiled = CompiledLexicon {
        table: CompiledTable::from_resolved(&table),
        diagnostics,
    };
    info!(
        "compiled {} of {} entries: {} errors, {} warnings",
        compiled.table.len(),
        config.len(),
        compiled.errors().count(),
        compiled.warnings().count()
    );
    Ok(compiled)
}

/// Set the form of every root entry. Roots of unknown donor families are
/// removed and reported.
fn derive_roots(table: &mut LexiconTable, registry: &PipelineRegistry) -> Vec<Diagnostic> {
    let roots: Vec<(String, String, String)> = table
        .iter()
        .filter_map(|(key, item)| match &item.entry.formation {
            Formation::Root { etymology, family } => {
                Some((key.to_string(), etymology.clone(), family.clone()))
            }
            _ => None,
        })
        .collect();

    let mut diagnostics = Vec::new();
    for (key, etymology, family) in roots {
        let Some(pipeline) = registry.get(&family) else {
            let diagnostic = Diagnostic::unknown_donor_family(&key, &family);
            warn!("dropping `{}`: {}", key, diagnostic.message);
            table.remove(&key);
            diagnostics.push(diagnostic);
            continue;
        };

        let form = if log_enabled!(Level::Debug) {
            let (form, steps) = etymology::derive_traced(&etymology, pipeline);
            for step in &steps {
                debug!("{key} [{}] {}: {}", family, step.rule, step.output);
            }
            form
        } else {
            etymology::derive(&etymology, pipeline)
        };

        debug!("{key}: `{etymology}` -> `{form}`");
        table.set_form(&key, form);
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::config::CompilerConfig;
    use crate::lexicon::diagnostic::DiagnosticKind;
    use crate::lexicon::entry::LexiconEntry;
    use crate::rewrite::{RewritePipeline, RewriteRule};

    fn registry() -> PipelineRegistry {
        PipelineRegistry::new()
            .with_pipeline(
                RewritePipeline::new("p").add_rule(RewriteRule::literal("give", "giveth", "ceba")),
            )
            .with_pipeline(
                RewritePipeline::new("p2")
                    .add_rule(RewriteRule::literal("back", "reverseth", "dis")),
            )
    }

    fn take_config() -> LexiconConfig {
        LexiconConfig::from_entries([
            ("give", LexiconEntry::root("giveth", "p").with_gloss("give")),
            ("back", LexiconEntry::root("reverseth", "p2").with_gloss("back")),
            ("take", LexiconEntry::complex(["back", "give"])),
        ])
        .unwrap()
    }

    #[test]
    fn test_take_is_back_plus_give() {
        let lexicon = compile(&take_config(), &registry()).unwrap();
        assert_eq!(lexicon.form("give"), Some("ceba"));
        assert_eq!(lexicon.form("back"), Some("dis"));
        assert_eq!(lexicon.form("take"), Some("disceba"));
        assert_eq!(lexicon.get("take").unwrap().gloss, "back-give");
        assert!(lexicon.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_family_drops_entry_and_dependents() {
        let mut config = take_config();
        config
            .insert("ghost", LexiconEntry::root("boo", "klingon"))
            .unwrap();
        config
            .insert("haunt", LexiconEntry::complex(["ghost", "give"]))
            .unwrap();

        let lexicon = compile(&config, &registry()).unwrap();
        assert!(lexicon.has_errors());
        assert!(lexicon.get("ghost").is_none());
        assert!(lexicon.get("haunt").is_none());
        assert_eq!(lexicon.form("take"), Some("disceba"));

        let kinds: Vec<_> = lexicon.diagnostics().iter().map(|d| &d.kind).collect();
        assert_eq!(kinds.len(), 2);
        assert!(matches!(kinds[0], DiagnosticKind::UnknownDonorFamily { family } if family == "klingon"));
        assert!(matches!(kinds[1], DiagnosticKind::UnresolvedReference { component, .. } if component == "ghost"));
    }

    #[test]
    fn test_diagnostics_ordered_by_stage() {
        let mut config = take_config();
        // `a` sorts before everything else but its problems come later
        config
            .insert("a", LexiconEntry::root("kab", "verbatim"))
            .unwrap();
        config
            .insert("b", LexiconEntry::complex(["zzz"]))
            .unwrap();
        config
            .insert("z", LexiconEntry::root("x", "nowhere"))
            .unwrap();

        let mut registry = registry();
        registry.register(crate::etymology::donor::verbatim().unwrap());

        let lexicon = compile(&config, &registry).unwrap();
        let order: Vec<_> = lexicon
            .diagnostics()
            .iter()
            .map(|d| (d.kind.name(), d.key.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("unknown-donor-family", "z"),
                ("unresolved-reference", "b"),
                ("phonotactics", "a"),
            ]
        );
    }

    #[test]
    fn test_invalid_settings_fail() {
        let config = take_config()
            .with_settings(CompilerConfig::default().with_epenthetic_vowel('k'));
        assert!(compile(&config, &registry()).is_err());
    }

    #[test]
    fn test_settings_set_after_loading_are_checked() {
        let config =
            take_config().with_settings(CompilerConfig::default().with_idiom_separator(""));
        assert!(compile(&config, &registry()).is_err());

        let config =
            take_config().with_settings(CompilerConfig::default().with_max_root_symbols(0));
        assert!(compile(&config, &registry()).is_err());

        let mut config = take_config();
        config.settings_mut().idiom_separator.clear();
        assert!(compile(&config, &registry()).is_err());
    }

    #[test]
    fn test_translate() {
        let lexicon = compile(&take_config(), &registry()).unwrap();
        assert_eq!(lexicon.translate("take and give").unwrap(), "disceba and ceba");
    }

    #[test]
    fn test_compile_default() {
        let config = LexiconConfig::from_entries([
            ("head", LexiconEntry::root("caput", "latin")),
            ("voice", LexiconEntry::root("phōnē", "greek")),
        ])
        .unwrap();
        let lexicon = CompiledLexicon::compile_default(&config).unwrap();
        assert_eq!(lexicon.form("head"), Some("kabut"));
        assert_eq!(lexicon.form("voice"), Some("fon"));
    }
}
