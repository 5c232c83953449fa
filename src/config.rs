use std::path::PathBuf;

use clap::Parser;
use derive_builder::Builder;
use genanki_rs::Model;
use getset::Getters;

use crate::{error::DeckResult, template::CardSchema};

/// Id every generated deck is written under. Anki merges re-imports into
/// the same deck because of it.
pub const DEFAULT_DECK_ID: i64 = 2059400110;

/// Command line of the `generate_deck` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "generate_deck")]
#[command(about = "Build an Anki .apkg spelling deck from a JSON card list", long_about = None)]
pub struct Cli {
    /// Read the request from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Log level for the diagnostic trace on stderr
    #[arg(long, default_value = "info", env = "ANKI_PACKAGE_LOG")]
    pub log_level: String,

    /// Shortcut for `--log-level debug`
    #[arg(short, long)]
    pub verbose: bool,

    /// Description stored on the generated deck
    #[arg(long)]
    pub deck_description: Option<String>,
}

impl Cli {
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

#[derive(Clone, Debug, Builder, Getters)]
#[getset(get = "pub")]
pub struct ExportConfig {
    #[builder(default = "DEFAULT_DECK_ID")]
    deck_id: i64,
    #[builder(setter(into), default)]
    deck_description: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            deck_id: DEFAULT_DECK_ID,
            deck_description: String::new(),
        }
    }
}

/// Everything a run needs besides its input, built once at startup and
/// handed to each stage by reference.
#[derive(Getters)]
#[getset(get = "pub")]
pub struct ExportContext {
    config: ExportConfig,
    schema: &'static CardSchema,
    model: Model,
}

impl ExportContext {
    pub fn new(config: ExportConfig, schema: &'static CardSchema) -> Self {
        Self {
            model: schema.to_model(),
            config,
            schema,
        }
    }

    /// Context with the default deck id and the spelling bee schema.
    pub fn spelling_bee() -> Self {
        Self::new(ExportConfig::default(), &crate::template::SPELLING_BEE)
    }

    pub fn from_builder(builder: &ExportConfigBuilder) -> DeckResult<Self> {
        let config = builder.build()?;
        Ok(Self::new(config, &crate::template::SPELLING_BEE))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, ExportConfigBuilder, ExportContext, DEFAULT_DECK_ID};

    #[test]
    fn builder_defaults_to_fixed_deck_id() {
        let config = ExportConfigBuilder::default().build().unwrap();
        assert_eq!(*config.deck_id(), DEFAULT_DECK_ID);
        assert!(config.deck_description().is_empty());
    }

    #[test]
    fn builder_overrides() {
        let ctx = ExportContext::from_builder(
            ExportConfigBuilder::default()
                .deck_id(42)
                .deck_description("spelling words"),
        )
        .unwrap();
        assert_eq!(*ctx.config().deck_id(), 42);
        assert_eq!(ctx.config().deck_description(), "spelling words");
        assert_eq!(ctx.schema().name, "Spelling Bee Model");
    }

    #[test]
    fn verbose_wins_over_log_level() {
        let cli = Cli::parse_from(["generate_deck", "--log-level", "warn", "-v"]);
        assert_eq!(cli.effective_log_level(), "debug");
        let cli = Cli::parse_from(["generate_deck", "--log-level", "warn"]);
        assert_eq!(cli.effective_log_level(), "warn");
        assert!(cli.input.is_none());
        assert!(cli.deck_description.is_none());
    }
}
