//! Builds Anki `.apkg` spelling decks from a JSON card list.
//!
//! A run reads one [ExportRequest], drops cards that fail validation,
//! turns the rest into notes of the [template::SPELLING_BEE] note type and
//! writes them, with their media, into a single package.
//!
//! ```no_run
//! use anki_package::{config::ExportContext, run};
//!
//! let input = r#"{
//!     "deckName": "Test",
//!     "cards": [{"word": "cat", "definition": "a feline", "audioFileName": "cat.mp3"}],
//!     "mediaFiles": ["cat.mp3"],
//!     "outputPath": "/tmp/out.apkg"
//! }"#;
//! let path = run(input.as_bytes(), &ExportContext::spelling_bee()).unwrap();
//! assert_eq!(path, "/tmp/out.apkg");
//! ```
pub mod cards;
pub mod config;
pub mod deck;
pub mod error;
pub mod input;
pub mod logging;
pub mod package;
pub mod report;
pub mod template;

use std::{io::Read, path::Path};

use tracing::info;

pub use crate::{
    config::ExportContext,
    error::{DeckError, DeckResult},
    input::ExportRequest,
    report::RunReport,
};

/// Validate, build and write. Returns the output path on success.
pub fn run(reader: impl Read, ctx: &ExportContext) -> DeckResult<String> {
    let request = ExportRequest::from_reader(reader)?;
    export(request, ctx)
}

/// Same as [run] for an already parsed request.
pub fn export(request: ExportRequest, ctx: &ExportContext) -> DeckResult<String> {
    let ExportRequest {
        deck_name,
        cards,
        media_files,
        output_path,
    } = request;
    info!("Creating deck: {deck_name}");
    info!("Number of cards: {}", cards.len());
    info!("Number of media files: {}", media_files.len());
    info!(
        schema = ctx.schema().name,
        version = ctx.schema().version,
        "using note type"
    );

    let validation = cards::validate_cards(&cards);
    if validation.valid.is_empty() {
        return Err(DeckError::NoValidCards);
    }

    let deck = deck::build_deck(&deck_name, &validation.valid, ctx)?;
    package::write_package(deck, &media_files, Path::new(&output_path))?;

    info!("Successfully completed deck generation");
    Ok(output_path)
}
