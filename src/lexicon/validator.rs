//! Post-compilation checks.
//!
//! Three independent checks run over a resolved table. None of them removes
//! anything; every finding is a warning.
//!
//! - phonotactics: the first forbidden pattern a root form matches
//! - homophones: one report per unordered pair of keys sharing a form
//! - length: root forms longer than the configured maximum

use std::collections::BTreeMap;

use crate::error::Result;
use crate::lexicon::config::CompilerConfig;
use crate::lexicon::diagnostic::Diagnostic;
use crate::lexicon::entry::FormationKind;
use crate::lexicon::table::LexiconTable;
use crate::phonology::phonotactics::Phonotactics;

/// Runs the validation checks.
#[derive(Debug, Clone)]
pub struct Validator {
    phonotactics: Phonotactics,
    max_root_symbols: usize,
}

impl Validator {
    pub fn new(phonotactics: Phonotactics, max_root_symbols: usize) -> Self {
        Validator {
            phonotactics,
            max_root_symbols,
        }
    }

    /// A validator with the standard phonotactic rules.
    pub fn from_config(config: &CompilerConfig) -> Result<Self> {
        Ok(Validator::new(
            Phonotactics::standard()?,
            config.max_root_symbols,
        ))
    }

    /// Run every check. Diagnostics are ordered by key.
    pub fn validate(&self, table: &LexiconTable) -> Vec<Diagnostic> {
        let mut diagnostics = self.check_phonotactics(table);
        diagnostics.extend(self.check_length(table));
        diagnostics.extend(check_homophones(table));
        diagnostics.sort_by(|a, b| a.key.cmp(&b.key));
        diagnostics
    }

    pub fn check_phonotactics(&self, table: &LexiconTable) -> Vec<Diagnostic> {
        root_forms(table)
            .filter_map(|(key, form)| {
                self.phonotactics
                    .first_violation(form)
                    .map(|rule| Diagnostic::phonotactic_violation(key, form, rule))
            })
            .collect()
    }

    pub fn check_length(&self, table: &LexiconTable) -> Vec<Diagnostic> {
        root_forms(table)
            .filter(|(_, form)| form.chars().count() > self.max_root_symbols)
            .map(|(key, form)| Diagnostic::root_too_long(key, form, self.max_root_symbols))
            .collect()
    }
}

/// Validate `table` with the standard rules and the limits in `config`.
pub fn validate(table: &LexiconTable, config: &CompilerConfig) -> Result<Vec<Diagnostic>> {
    Ok(Validator::from_config(config)?.validate(table))
}

/// Report every unordered pair of distinct keys with identical forms,
/// attached to the smaller key.
pub fn check_homophones(table: &LexiconTable) -> Vec<Diagnostic> {
    let mut by_form: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (key, item) in table.iter() {
        if let Some(form) = item.form.as_deref() {
            by_form.entry(form).or_default().push(key);
        }
    }

    let mut diagnostics = Vec::new();
    for (form, keys) in by_form {
        // keys arrive in table order, so `keys[i] < keys[j]` for i < j
        for (i, key) in keys.iter().enumerate() {
            for other in &keys[i + 1..] {
                diagnostics.push(Diagnostic::homophone(key, other, form));
            }
        }
    }
    diagnostics.sort_by(|a, b| a.key.cmp(&b.key));
    diagnostics
}

fn root_forms(table: &LexiconTable) -> impl Iterator<Item = (&str, &str)> {
    table.iter().filter_map(|(key, item)| match item.entry.kind() {
        FormationKind::Root => item.form.as_deref().map(|form| (key, form)),
        _ => None,
    })
}
