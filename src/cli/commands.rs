//! Command implementations for the lexis CLI.

use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::lexicon::compiler::CompiledLexicon;
use crate::lexicon::config::LexiconConfig;

/// Exit status for a lexicon that compiled but did not pass `check`.
pub const EXIT_CHECK_FAILED: i32 = 2;

/// Exit status for anything that stopped a command from running to the end.
pub const EXIT_FAILURE: i32 = 1;

/// A lexicon that `check` rejects.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error("{0} entries were dropped")]
    Dropped(usize),

    #[error("{0} warnings (strict mode)")]
    Strict(usize),
}

/// Map a command error to the process exit status.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<CheckFailure>().is_some() {
        EXIT_CHECK_FAILED
    } else {
        EXIT_FAILURE
    }
}

/// Execute a CLI command.
pub fn execute_command(args: LexisArgs) -> anyhow::Result<()> {
    match &args.command {
        Command::Compile(compile_args) => compile_lexicon(compile_args, &args),
        Command::Check(check_args) => check_lexicon(check_args, &args),
        Command::Translate(translate_args) => translate_text(translate_args, &args),
    }
}

/// Load a lexicon file, apply setting overrides and compile it.
fn load_and_compile(path: &Path, settings: &SettingsArgs) -> anyhow::Result<CompiledLexicon> {
    info!("loading lexicon from {}", path.display());
    let mut config = LexiconConfig::from_path(path)
        .with_context(|| format!("failed to load lexicon {}", path.display()))?;

    let overridden = settings.apply(config.settings().clone());
    overridden
        .validate()
        .context("invalid settings on the command line")?;
    *config.settings_mut() = overridden;

    CompiledLexicon::compile_default(&config)
        .with_context(|| format!("failed to compile {}", path.display()))
}

/// Compile a lexicon and print its table.
fn compile_lexicon(args: &CompileArgs, cli_args: &LexisArgs) -> anyhow::Result<()> {
    let lexicon = load_and_compile(&args.lexicon, &args.settings)?;

    let mut entries = if args.by_date {
        lexicon.table().by_date()
    } else {
        lexicon.table().iter().collect()
    };
    if let Some(tag) = &args.tag {
        entries.retain(|entry| entry.tags.iter().any(|t| t == tag));
    }

    output_result(
        &CompileResult {
            entries,
            diagnostics: lexicon.diagnostics(),
        },
        cli_args,
    )
}

/// Compile a lexicon and report its diagnostics.
fn check_lexicon(args: &CheckArgs, cli_args: &LexisArgs) -> anyhow::Result<()> {
    let lexicon = load_and_compile(&args.lexicon, &args.settings)?;
    let errors = lexicon.errors().count();
    let warnings = lexicon.warnings().count();

    output_result(
        &CheckResult {
            entries: lexicon.table().len(),
            errors,
            warnings,
            diagnostics: lexicon.diagnostics(),
        },
        cli_args,
    )?;

    if errors > 0 {
        return Err(CheckFailure::Dropped(errors).into());
    }
    if args.strict && warnings > 0 {
        return Err(CheckFailure::Strict(warnings).into());
    }
    Ok(())
}

/// Translate text given on the command line or on stdin.
fn translate_text(args: &TranslateArgs, cli_args: &LexisArgs) -> anyhow::Result<()> {
    let lexicon = load_and_compile(&args.lexicon, &args.settings)?;

    let input = if args.text.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read text from stdin")?;
        buffer.trim_end_matches('\n').to_string()
    } else {
        args.text.join(" ")
    };

    let translator = lexicon.translator()?;
    let (output, replacements) = translator.translate_spans(&input);

    output_result(
        &TranslateResult {
            input,
            output,
            replaced: replacements.into_iter().map(|r| r.key).collect(),
        },
        cli_args,
    )
}
