//! Complex and idiom resolution.
//!
//! Complex and idiom entries get their forms from other entries, which may
//! themselves be complex. [`resolve`] repeats passes over the unresolved
//! entries until nothing changes:
//!
//! 1. each pass visits the pending entries in key order;
//! 2. an entry whose components are all literals or resolved gets its form
//!    (sandhi-joined for complexes, separator-joined for idioms);
//! 3. forms set earlier in a pass are visible later in the same pass.
//!
//! A dependency chain can never be longer than the number of pending entries,
//! so the loop is bounded by that count plus one. Entries still pending at the
//! end (dangling references and cycles) are dropped and reported.

use log::{debug, warn};

use crate::lexicon::diagnostic::{Diagnostic, MissingReason};
use crate::lexicon::entry::{ComponentRef, Formation};
use crate::lexicon::table::LexiconTable;
use crate::phonology::sandhi::BoundaryJoiner;

/// Resolve every complex and idiom entry of `table`.
///
/// Returns the table without unresolvable entries, and one
/// `UnresolvedReference` diagnostic per dropped entry in key order.
pub fn resolve(
    mut table: LexiconTable,
    joiner: &BoundaryJoiner,
    separator: &str,
) -> (LexiconTable, Vec<Diagnostic>) {
    let mut pending: Vec<String> = table
        .iter()
        .filter(|(_, item)| !item.is_resolved())
        .filter(|(_, item)| !matches!(item.entry.formation, Formation::Root { .. }))
        .map(|(key, _)| key.to_string())
        .collect();

    let bound = pending.len() + 1;
    for pass in 1..=bound {
        if pending.is_empty() {
            break;
        }
        let before = pending.len();
        pending.retain(|key| !resolve_entry(&mut table, key, joiner, separator));
        debug!(
            "resolver pass {}: {} resolved, {} pending",
            pass,
            before - pending.len(),
            pending.len()
        );
        if pending.len() == before {
            break;
        }
    }

    // Describe every leftover before dropping any, so a component that is
    // itself pending is reported as unresolved rather than unknown.
    let diagnostics: Vec<Diagnostic> = pending
        .iter()
        .map(|key| {
            let (component, reason) = first_missing(&table, key);
            Diagnostic::unresolved_reference(key, &component, reason)
        })
        .collect();

    for diagnostic in &diagnostics {
        warn!("dropping `{}`: {}", diagnostic.key, diagnostic.message);
        table.remove(&diagnostic.key);
    }

    (table, diagnostics)
}

/// Try to compute the form of `key`. Returns `true` if it was set.
fn resolve_entry(
    table: &mut LexiconTable,
    key: &str,
    joiner: &BoundaryJoiner,
    separator: &str,
) -> bool {
    let Some(item) = table.get(key) else {
        return false;
    };

    let mut parts = Vec::with_capacity(item.entry.formation.components().len());
    for component in item.entry.formation.components() {
        match component {
            ComponentRef::Literal(text) => parts.push(text.as_str()),
            ComponentRef::Key(k) => match table.form(k) {
                Some(form) => parts.push(form),
                None => return false,
            },
        }
    }

    let form = match &item.entry.formation {
        Formation::Complex(_) => joiner.join_all(&parts),
        Formation::Idiom(_) => joiner.join_idiom(&parts, separator),
        Formation::Root { .. } => return false,
    };
    table.set_form(key, form)
}

/// The first component of `key` without a form, and why it has none.
fn first_missing(table: &LexiconTable, key: &str) -> (String, MissingReason) {
    let components = table
        .get(key)
        .map(|item| item.entry.formation.components())
        .unwrap_or_default();

    components
        .iter()
        .find_map(|component| match component {
            ComponentRef::Key(k) if table.form(k).is_none() => {
                let reason = if table.contains_key(k) {
                    MissingReason::Unresolved
                } else {
                    MissingReason::UnknownKey
                };
                Some((k.clone(), reason))
            }
            _ => None,
        })
        .unwrap_or_else(|| (key.to_string(), MissingReason::Unresolved))
}
