//! Lexicon tables.
//!
//! [`LexiconTable`] is the working table the compiler passes between stages:
//! every entry together with its form once one is known. [`CompiledTable`] is
//! the read-only result handed to callers, with glosses rendered.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::lexicon::config::LexiconConfig;
use crate::lexicon::entry::{ComponentRef, FormationKind, LexiconEntry};

/// An entry and its form, if resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub entry: LexiconEntry,
    pub form: Option<String>,
}

impl TableEntry {
    pub fn is_resolved(&self) -> bool {
        self.form.is_some()
    }
}

/// Key-ordered map of entries and their cached forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconTable {
    entries: BTreeMap<String, TableEntry>,
}

impl LexiconTable {
    pub fn new() -> Self {
        LexiconTable::default()
    }

    /// An unresolved table holding every entry of `config`.
    pub fn from_config(config: &LexiconConfig) -> Self {
        let mut table = LexiconTable::new();
        for (key, entry) in config.entries() {
            table.insert(key, entry.clone());
        }
        table
    }

    /// Add an unresolved entry, replacing any entry with the same key.
    pub fn insert<K: Into<String>>(&mut self, key: K, entry: LexiconEntry) {
        self.entries
            .insert(key.into(), TableEntry { entry, form: None });
    }

    /// Add an entry whose form is already known.
    pub fn insert_resolved<K, F>(&mut self, key: K, entry: LexiconEntry, form: F)
    where
        K: Into<String>,
        F: Into<String>,
    {
        self.entries.insert(
            key.into(),
            TableEntry {
                entry,
                form: Some(form.into()),
            },
        );
    }

    /// Record the form of `key`.
    ///
    /// Forms are set once: returns `false` and leaves the table unchanged if
    /// the key is unknown or already resolved.
    pub fn set_form<F: Into<String>>(&mut self, key: &str, form: F) -> bool {
        match self.entries.get_mut(key) {
            Some(item) if item.form.is_none() => {
                item.form = Some(form.into());
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<TableEntry> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&TableEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The resolved form of `key`.
    pub fn form(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|item| item.form.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableEntry)> {
        self.entries.iter().map(|(k, item)| (k.as_str(), item))
    }

    /// Keys without a form, in key order.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, item)| !item.is_resolved())
            .map(|(k, _)| k)
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.entries.values().all(TableEntry::is_resolved)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A finished lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledEntry {
    pub key: String,
    pub form: String,
    /// The gloss with positional placeholders filled in.
    pub gloss: String,
    pub tags: Vec<String>,
    pub formation: FormationKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// The read-only table of a compiled lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompiledTable {
    entries: BTreeMap<String, CompiledEntry>,
}

impl CompiledTable {
    /// Build from a resolved working table. Entries without a form are left
    /// out.
    pub fn from_resolved(table: &LexiconTable) -> Self {
        let mut glosses = BTreeMap::new();
        let mut entries = BTreeMap::new();

        for (key, item) in table.iter() {
            let Some(form) = &item.form else {
                continue;
            };
            let entry = &item.entry;
            let gloss = render_gloss(key, table, &mut glosses, table.len());
            entries.insert(
                key.to_string(),
                CompiledEntry {
                    key: key.to_string(),
                    form: form.clone(),
                    gloss,
                    tags: entry.tags.clone(),
                    formation: entry.kind(),
                    components: entry.formation.components().to_vec(),
                    provenance: entry.provenance.clone(),
                    date: entry.date,
                },
            );
        }

        CompiledTable { entries }
    }

    pub fn get(&self, key: &str) -> Option<&CompiledEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledEntry> {
        self.entries.values()
    }

    /// Entries ordered by authoring date, undated entries last. Ties are
    /// broken by key.
    pub fn by_date(&self) -> Vec<&CompiledEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| {
            (a.date.is_none(), a.date, &a.key).cmp(&(b.date.is_none(), b.date, &b.key))
        });
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render the gloss of `key`.
///
/// Positional placeholders take the rendered glosses of the components. An
/// empty template falls back to the components' glosses joined with `-`, or to
/// the key itself for roots.
fn render_gloss(
    key: &str,
    table: &LexiconTable,
    cache: &mut BTreeMap<String, String>,
    depth: usize,
) -> String {
    if let Some(gloss) = cache.get(key) {
        return gloss.clone();
    }
    let Some(item) = table.get(key) else {
        return key.to_string();
    };
    if depth == 0 {
        return key.to_string();
    }

    let parts: Vec<String> = item
        .entry
        .formation
        .components()
        .iter()
        .map(|component| match component {
            ComponentRef::Key(k) => render_gloss(k, table, cache, depth - 1),
            ComponentRef::Literal(text) => text.clone(),
        })
        .collect();

    let gloss = if !item.entry.gloss.is_empty() {
        item.entry.gloss.render(&parts)
    } else if parts.is_empty() {
        key.to_string()
    } else {
        parts.join("-")
    };

    cache.insert(key.to_string(), gloss.clone());
    gloss
}
