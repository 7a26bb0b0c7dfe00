//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{LexisArgs, OutputFormat};
use crate::lexicon::diagnostic::Diagnostic;
use crate::lexicon::table::CompiledEntry;

/// Result of `lexis compile`.
#[derive(Debug, Serialize)]
pub struct CompileResult<'a> {
    pub entries: Vec<&'a CompiledEntry>,
    pub diagnostics: &'a [Diagnostic],
}

/// Result of `lexis check`.
#[derive(Debug, Serialize)]
pub struct CheckResult<'a> {
    pub entries: usize,
    pub errors: usize,
    pub warnings: usize,
    pub diagnostics: &'a [Diagnostic],
}

/// Result of `lexis translate`.
#[derive(Debug, Serialize)]
pub struct TranslateResult {
    pub input: String,
    pub output: String,
    pub replaced: Vec<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write, args: &LexisArgs) -> io::Result<()>;
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &LexisArgs) -> anyhow::Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => result.write_human(&mut out, args)?,
        OutputFormat::Json => output_json(result, &mut out, args)?,
    }
    out.flush()?;
    Ok(())
}

fn output_json<T: Serialize>(result: &T, out: &mut dyn Write, args: &LexisArgs) -> anyhow::Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

fn write_diagnostics(
    diagnostics: &[Diagnostic],
    out: &mut dyn Write,
    args: &LexisArgs,
) -> io::Result<()> {
    for diagnostic in diagnostics {
        if diagnostic.is_error() || args.verbosity() > 0 {
            writeln!(out, "{diagnostic}")?;
        }
    }
    Ok(())
}

impl HumanOutput for CompileResult<'_> {
    fn write_human(&self, out: &mut dyn Write, args: &LexisArgs) -> io::Result<()> {
        let key_width = self.entries.iter().map(|e| e.key.chars().count()).max().unwrap_or(0);
        let form_width = self.entries.iter().map(|e| e.form.chars().count()).max().unwrap_or(0);

        for entry in &self.entries {
            write!(
                out,
                "{:key_width$}  {:form_width$}  {}",
                entry.key, entry.form, entry.gloss
            )?;
            if args.verbosity() > 1 && !entry.tags.is_empty() {
                write!(out, "  [{}]", entry.tags.join(", "))?;
            }
            writeln!(out)?;
        }

        if !self.diagnostics.is_empty() {
            writeln!(out)?;
            write_diagnostics(self.diagnostics, out, args)?;
        }
        Ok(())
    }
}

impl HumanOutput for CheckResult<'_> {
    fn write_human(&self, out: &mut dyn Write, args: &LexisArgs) -> io::Result<()> {
        write_diagnostics(self.diagnostics, out, args)?;
        if args.verbosity() > 0 {
            writeln!(
                out,
                "{} entries compiled, {} errors, {} warnings",
                self.entries, self.errors, self.warnings
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for TranslateResult {
    fn write_human(&self, out: &mut dyn Write, _args: &LexisArgs) -> io::Result<()> {
        writeln!(out, "{}", self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::entry::FormationKind;
    use clap::Parser;

    fn entry(key: &str, form: &str, gloss: &str) -> CompiledEntry {
        CompiledEntry {
            key: key.to_string(),
            form: form.to_string(),
            gloss: gloss.to_string(),
            tags: vec!["verb".to_string()],
            formation: FormationKind::Root,
            components: Vec::new(),
            provenance: None,
            date: None,
        }
    }

    fn render<T: HumanOutput>(result: &T, argv: &[&str]) -> String {
        let args = LexisArgs::parse_from(argv);
        let mut out = Vec::new();
        result.write_human(&mut out, &args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_compile_table_is_aligned() {
        let give = entry("give", "ceba", "give");
        let take = entry("take", "disceba", "back-give");
        let diagnostics = vec![Diagnostic::homophone("a", "b", "ta")];
        let result = CompileResult {
            entries: vec![&give, &take],
            diagnostics: &diagnostics,
        };

        let text = render(&result, &["lexis", "compile", "x.json"]);
        assert_eq!(
            text,
            "give  ceba     give\n\
             take  disceba  back-give\n\
             \n\
             warning[homophone] a: `a` and `b` share the form `ta`\n"
        );

        // warnings are hidden in quiet mode
        let text = render(&result, &["lexis", "-q", "compile", "x.json"]);
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_compile_json() {
        let give = entry("give", "ceba", "give");
        let result = CompileResult {
            entries: vec![&give],
            diagnostics: &[],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["entries"][0]["form"], "ceba");
        assert_eq!(value["entries"][0]["formation"], "root");
        assert!(value["diagnostics"].as_array().unwrap().is_empty());
    }
}
