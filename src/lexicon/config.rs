//! Lexicon configuration.
//!
//! A [`LexiconConfig`] is the whole input of a compile: the entries plus the
//! [`CompilerConfig`] settings that control joining and validation. It is
//! usually loaded from a JSON file:
//!
//! ```json
//! {
//!   "settings": { "join_strategy": "assimilating", "max_root_symbols": 6 },
//!   "entries": {
//!     "give": { "root": { "etymology": "giveth", "family": "germanic" } },
//!     "back": { "root": { "etymology": "https://en.wiktionary.org/wiki/dis-#Latin", "family": "latin" } },
//!     "take": { "complex": ["back", "give"] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};
use crate::lexicon::entry::LexiconEntry;
use crate::phonology::sandhi::{BoundaryJoiner, JoinStrategy};

/// Settings that control a compile.
///
/// All fields have defaults, so a configuration file only needs to name the
/// ones it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// How illegal consonant clusters at morpheme boundaries are repaired.
    pub join_strategy: JoinStrategy,

    /// Consonant inserted between two vowels at a boundary.
    pub epenthetic_consonant: char,

    /// Vowel inserted into an illegal consonant cluster at a boundary.
    pub epenthetic_vowel: char,

    /// Text placed between the parts of an idiom.
    pub idiom_separator: String,

    /// Longest acceptable root form, in symbols.
    ///
    /// Roots are expected to be short; a longer one usually means the
    /// derivation pipeline missed a suffix.
    pub max_root_symbols: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            join_strategy: JoinStrategy::Epenthetic,
            epenthetic_consonant: 'h',
            epenthetic_vowel: 'e',
            idiom_separator: " ".to_string(),
            max_root_symbols: 8,
        }
    }
}

impl CompilerConfig {
    pub fn with_join_strategy(mut self, strategy: JoinStrategy) -> Self {
        self.join_strategy = strategy;
        self
    }

    pub fn with_epenthetic_consonant(mut self, consonant: char) -> Self {
        self.epenthetic_consonant = consonant;
        self
    }

    pub fn with_epenthetic_vowel(mut self, vowel: char) -> Self {
        self.epenthetic_vowel = vowel;
        self
    }

    pub fn with_idiom_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.idiom_separator = separator.into();
        self
    }

    pub fn with_max_root_symbols(mut self, max: usize) -> Self {
        self.max_root_symbols = max;
        self
    }

    /// Build the boundary joiner described by these settings.
    pub fn joiner(&self) -> Result<BoundaryJoiner> {
        BoundaryJoiner::new(
            self.join_strategy,
            self.epenthetic_consonant,
            self.epenthetic_vowel,
        )
    }

    /// Check the settings without compiling anything.
    pub fn validate(&self) -> Result<()> {
        self.joiner()?;
        if self.idiom_separator.is_empty() {
            return Err(LexisError::config("idiom separator must not be empty"));
        }
        if self.max_root_symbols == 0 {
            return Err(LexisError::config("max_root_symbols must be at least 1"));
        }
        Ok(())
    }
}

/// The complete input of a compile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    #[serde(default)]
    settings: CompilerConfig,

    #[serde(default, deserialize_with = "unique_entries")]
    entries: BTreeMap<String, LexiconEntry>,
}

impl LexiconConfig {
    /// An empty configuration with default settings.
    pub fn new() -> Self {
        LexiconConfig::default()
    }

    /// Parse a configuration from JSON text.
    ///
    /// Well-formed JSON that does not describe a valid lexicon (duplicate
    /// keys, entries without exactly one formation, bad settings) is reported
    /// as [`LexisError::Config`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LexiconConfig = serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                LexisError::config(e.to_string())
            } else {
                LexisError::Json(e)
            }
        })?;
        config.settings.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build a configuration from `(key, entry)` pairs, rejecting duplicates.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, LexiconEntry)>,
        K: Into<String>,
    {
        let mut config = LexiconConfig::new();
        for (key, entry) in entries {
            config.insert(key, entry)?;
        }
        Ok(config)
    }

    pub fn with_settings(mut self, settings: CompilerConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Add an entry. Keys must be non-empty and unique.
    pub fn insert<K: Into<String>>(&mut self, key: K, entry: LexiconEntry) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(LexisError::config("entry keys must not be empty"));
        }
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
            Entry::Occupied(slot) => Err(LexisError::config(format!(
                "duplicate entry key `{}`",
                slot.key()
            ))),
        }
    }

    pub fn settings(&self) -> &CompilerConfig {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut CompilerConfig {
        &mut self.settings
    }

    pub fn get(&self, key: &str) -> Option<&LexiconEntry> {
        self.entries.get(key)
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LexiconEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deserialize the entry map, rejecting empty and duplicate keys.
fn unique_entries<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, LexiconEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = BTreeMap<String, LexiconEntry>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from entry keys to entries")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = BTreeMap::new();
            while let Some(key) = map.next_key::<String>()? {
                if key.is_empty() {
                    return Err(de::Error::custom("entry keys must not be empty"));
                }
                let entry = map.next_value::<LexiconEntry>().map_err(|e| {
                    de::Error::custom(format!("entry `{key}`: {e}"))
                })?;
                match entries.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(entry);
                    }
                    Entry::Occupied(slot) => {
                        return Err(de::Error::custom(format!(
                            "duplicate entry key `{}`",
                            slot.key()
                        )));
                    }
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::entry::FormationKind;

    const SAMPLE: &str = r#"{
        "settings": { "join_strategy": "assimilating", "max_root_symbols": 6 },
        "entries": {
            "give": { "root": { "etymology": "giveth", "family": "germanic" }, "gloss": "give" },
            "back": { "root": { "etymology": "dis", "family": "verbatim" } },
            "take": { "complex": ["back", "give"] }
        }
    }"#;

    #[test]
    fn test_from_json_str() {
        let config = LexiconConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config.settings().join_strategy, JoinStrategy::Assimilating);
        assert_eq!(config.settings().max_root_symbols, 6);
        // unspecified settings keep their defaults
        assert_eq!(config.settings().epenthetic_vowel, 'e');

        let keys: Vec<_> = config.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["back", "give", "take"]);
        assert_eq!(config.get("take").unwrap().kind(), FormationKind::Complex);
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let json = r#"{ "entries": {
            "give": { "root": { "etymology": "a", "family": "verbatim" } },
            "give": { "root": { "etymology": "b", "family": "verbatim" } }
        } }"#;
        let err = LexiconConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, LexisError::Config(_)));
        assert!(err.to_string().contains("duplicate entry key `give`"), "{err}");

        let syntax = LexiconConfig::from_json_str(r#"{ "entries": "#);
        assert!(matches!(syntax, Err(LexisError::Json(_))));

        let mut config = LexiconConfig::new();
        config
            .insert("give", LexiconEntry::root("a", "verbatim"))
            .unwrap();
        assert!(config.insert("give", LexiconEntry::root("b", "verbatim")).is_err());
        assert!(config.insert("", LexiconEntry::root("b", "verbatim")).is_err());
    }

    #[test]
    fn test_bad_entry_names_its_key() {
        let json = r#"{ "entries": { "odd": { "complex": ["a"], "idiom": ["b"] } } }"#;
        let err = LexiconConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("entry `odd`"), "{err}");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let json = r#"{ "settings": { "epenthetic_consonant": "a" } }"#;
        assert!(matches!(
            LexiconConfig::from_json_str(json),
            Err(LexisError::Config(_))
        ));

        let settings = CompilerConfig::default().with_idiom_separator("");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        fs::write(&path, SAMPLE).unwrap();

        let config = LexiconConfig::from_path(&path).unwrap();
        assert_eq!(config.len(), 3);

        let missing = LexiconConfig::from_path(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(LexisError::Io(_))));
    }
}
