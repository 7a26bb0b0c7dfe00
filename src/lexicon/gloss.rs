//! Gloss templates.
//!
//! A gloss explains what an entry means. It may contain placeholders:
//!
//! - `{0}`, `{1}`, ... positional: replaced by the gloss of the n-th component
//!   of a complex or idiom entry;
//! - `{agent}`, `{thing}`, ... roles: kept verbatim, they name the arguments a
//!   reader has to supply (`{agent} gives {thing} to {recipient}`).

use serde::{Deserialize, Serialize};

/// A placeholder found in a gloss template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Position(usize),
    Role(String),
}

/// A gloss string with `{..}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlossTemplate(String);

impl GlossTemplate {
    pub fn new<S: Into<String>>(template: S) -> Self {
        GlossTemplate(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Placeholders in order of appearance.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        let mut found = Vec::new();
        self.scan(|name| {
            found.push(parse_placeholder(name));
            None
        });
        found
    }

    /// Replace positional placeholders with component glosses.
    ///
    /// Positions without a matching component and role placeholders are left
    /// as written.
    pub fn render<S: AsRef<str>>(&self, components: &[S]) -> String {
        self.scan(|name| match parse_placeholder(name) {
            Placeholder::Position(i) => components.get(i).map(|c| c.as_ref().to_string()),
            Placeholder::Role(_) => None,
        })
    }

    /// Walk the template, calling `substitute` with the name inside every
    /// `{..}` pair. Returns the template with each placeholder replaced by the
    /// callback's result, or kept when it returns `None`.
    fn scan<F>(&self, mut substitute: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut output = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            let name = &rest[open + 1..close];
            output.push_str(&rest[..open]);
            match substitute(name) {
                Some(text) => output.push_str(&text),
                None => output.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }

        output.push_str(rest);
        output
    }
}

fn parse_placeholder(name: &str) -> Placeholder {
    match name.trim().parse::<usize>() {
        Ok(position) => Placeholder::Position(position),
        Err(_) => Placeholder::Role(name.trim().to_string()),
    }
}

impl From<&str> for GlossTemplate {
    fn from(template: &str) -> Self {
        GlossTemplate::new(template)
    }
}

impl std::fmt::Display for GlossTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let gloss = GlossTemplate::new("{agent} takes {0} back from {1}");
        assert_eq!(
            gloss.placeholders(),
            vec![
                Placeholder::Role("agent".to_string()),
                Placeholder::Position(0),
                Placeholder::Position(1),
            ]
        );
    }

    #[test]
    fn test_render() {
        let gloss = GlossTemplate::new("{agent} {1}s {0}");
        assert_eq!(gloss.render(&["back", "give"]), "{agent} gives back");
        // missing component keeps the placeholder
        assert_eq!(gloss.render(&["back"]), "{agent} {1}s back");
    }

    #[test]
    fn test_unbalanced_braces() {
        let gloss = GlossTemplate::new("half {open");
        assert_eq!(gloss.render(&["x"]), "half {open");
        assert!(gloss.placeholders().is_empty());
    }
}
