//! Command line argument parsing for the lexis CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::lexicon::config::CompilerConfig;
use crate::phonology::sandhi::JoinStrategy;

/// Lexis - compile a constructed-language lexicon
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Derive, resolve and check the entries of a constructed-language lexicon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compile a lexicon and print the table
    Compile(CompileArgs),

    /// Compile a lexicon and print only the diagnostics
    Check(CheckArgs),

    /// Replace lexicon keys in text with their forms
    Translate(TranslateArgs),
}

/// Settings that override the lexicon file's `settings` block
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Cluster repair strategy at morpheme boundaries
    #[arg(long, value_name = "STRATEGY")]
    pub join_strategy: Option<StrategyArg>,

    /// Consonant inserted between two vowels at a boundary
    #[arg(long, value_name = "SYMBOL")]
    pub epenthetic_consonant: Option<char>,

    /// Vowel inserted into an illegal consonant cluster
    #[arg(long, value_name = "SYMBOL")]
    pub epenthetic_vowel: Option<char>,

    /// Separator between the parts of an idiom
    #[arg(long, value_name = "TEXT")]
    pub idiom_separator: Option<String>,

    /// Longest acceptable root form, in symbols
    #[arg(long, value_name = "N")]
    pub max_root_symbols: Option<usize>,
}

impl SettingsArgs {
    /// Apply the given overrides to `config`.
    pub fn apply(&self, mut config: CompilerConfig) -> CompilerConfig {
        if let Some(strategy) = self.join_strategy {
            config = config.with_join_strategy(strategy.into());
        }
        if let Some(consonant) = self.epenthetic_consonant {
            config = config.with_epenthetic_consonant(consonant);
        }
        if let Some(vowel) = self.epenthetic_vowel {
            config = config.with_epenthetic_vowel(vowel);
        }
        if let Some(separator) = &self.idiom_separator {
            config = config.with_idiom_separator(separator.clone());
        }
        if let Some(max) = self.max_root_symbols {
            config = config.with_max_root_symbols(max);
        }
        config
    }
}

/// Arguments for compiling a lexicon
#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    /// Lexicon file (JSON)
    #[arg(value_name = "LEXICON")]
    pub lexicon: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// List entries by authoring date instead of by key
    #[arg(long)]
    pub by_date: bool,

    /// Only list entries carrying this tag
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,
}

/// Arguments for checking a lexicon
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Lexicon file (JSON)
    #[arg(value_name = "LEXICON")]
    pub lexicon: PathBuf,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for translating text
#[derive(Parser, Debug, Clone)]
pub struct TranslateArgs {
    /// Lexicon file (JSON)
    #[arg(value_name = "LEXICON")]
    pub lexicon: PathBuf,

    /// Text to translate; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Command line spelling of [`JoinStrategy`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    Epenthetic,
    Assimilating,
}

impl From<StrategyArg> for JoinStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Epenthetic => JoinStrategy::Epenthetic,
            StrategyArg::Assimilating => JoinStrategy::Assimilating,
        }
    }
}
