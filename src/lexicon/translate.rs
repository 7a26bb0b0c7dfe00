//! Key-to-form translation.
//!
//! [`Translator`] rewrites running text by replacing every occurrence of a
//! lexicon key with the key's compiled form. Matching is leftmost-longest, so
//! `category` is never split into `cat` + `egory` when both keys exist.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::Result;

/// One replacement made by [`Translator::translate_spans`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub key: String,
    /// Byte range of the key in the input.
    pub start: usize,
    pub end: usize,
}

pub struct Translator {
    ac: AhoCorasick,
    keys: Vec<String>,
    forms: Vec<String>,
}

impl Translator {
    /// Build a translator from `(key, form)` pairs. Empty keys are skipped.
    pub fn new<I, K, F>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, F)>,
        K: Into<String>,
        F: Into<String>,
    {
        let mut keys = Vec::new();
        let mut forms = Vec::new();
        for (key, form) in pairs {
            let key = key.into();
            if key.is_empty() {
                continue;
            }
            keys.push(key);
            forms.push(form.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)?;

        Ok(Translator { ac, keys, forms })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Replace every key in `text` with its form. Unmatched text is kept.
    pub fn translate(&self, text: &str) -> String {
        self.translate_spans(text).0
    }

    /// Like [`translate`](Self::translate), also returning what was replaced.
    pub fn translate_spans(&self, text: &str) -> (String, Vec<Replacement>) {
        let mut output = String::with_capacity(text.len());
        let mut replacements = Vec::new();
        let mut last_end = 0;

        for m in self.ac.find_iter(text) {
            let index = m.pattern().as_usize();
            output.push_str(&text[last_end..m.start()]);
            output.push_str(&self.forms[index]);
            replacements.push(Replacement {
                key: self.keys[index].clone(),
                start: m.start(),
                end: m.end(),
            });
            last_end = m.end();
        }

        output.push_str(&text[last_end..]);
        (output, replacements)
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("keys", &self.keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_key_wins() {
        let translator = Translator::new([("cat", "kat"), ("category", "katlo")]).unwrap();
        assert_eq!(translator.translate("category"), "katlo");
        assert_eq!(translator.translate("cat"), "kat");
        assert_eq!(translator.translate("a category of cat"), "a katlo of kat");
    }

    #[test]
    fn test_unmatched_text_passes_through() {
        let translator = Translator::new([("give", "ceba")]).unwrap();
        assert_eq!(translator.translate("we give thanks"), "we ceba thanks");
        assert_eq!(translator.translate("nothing here"), "nothing here");
        assert_eq!(translator.translate(""), "");
    }

    #[test]
    fn test_spans() {
        let translator = Translator::new([("give", "ceba"), ("back", "dis")]).unwrap();
        let (output, spans) = translator.translate_spans("give back");
        assert_eq!(output, "ceba dis");
        assert_eq!(
            spans,
            vec![
                Replacement { key: "give".to_string(), start: 0, end: 4 },
                Replacement { key: "back".to_string(), start: 5, end: 9 },
            ]
        );
    }

    #[test]
    fn test_empty_keys_are_skipped() {
        let translator = Translator::new([("", "x"), ("a", "b")]).unwrap();
        assert_eq!(translator.len(), 1);
        assert_eq!(translator.translate("aa"), "bb");

        let empty = Translator::new(Vec::<(String, String)>::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.translate("text"), "text");
    }
}
