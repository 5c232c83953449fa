use genanki_rs::{Deck, Note};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, error, info, info_span};

use crate::{
    cards::Card,
    config::ExportContext,
    error::{DeckError, DeckResult},
};

/// Wraps a filename in Anki's audio reference syntax.
///
/// ```
/// assert_eq!(anki_package::deck::sound_tag("cat.mp3"), "[sound:cat.mp3]");
/// ```
pub fn sound_tag(file_name: &str) -> String {
    format!("[sound:{file_name}]")
}

/// The field values of one note keyed by schema field name, in schema order.
pub type NoteFields = IndexMap<&'static str, String>;

/// A deck ready for packaging, plus how many notes went into it.
pub struct StudyDeck {
    pub deck: Deck,
    pub name: String,
    pub note_count: usize,
}

fn notes_text(card: &Card) -> Result<String, String> {
    match card.notes() {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        other => Err(format!("field 'notes' must be a string, got {other}")),
    }
}

/// Lays a card out as `[Audio, Word, Definition, Notes]`.
pub fn note_fields(card: &Card, ctx: &ExportContext) -> Result<NoteFields, String> {
    let values = [
        sound_tag(card.audio_file_name()),
        card.word().clone(),
        card.definition().clone(),
        notes_text(card)?,
    ];
    let schema = ctx.schema();
    if schema.field_count() != values.len() {
        return Err(format!(
            "schema {} expects {} fields, card provides {}",
            schema.name,
            schema.field_count(),
            values.len()
        ));
    }
    Ok(schema.fields.iter().copied().zip(values).collect())
}

fn build_note(card: &Card, ctx: &ExportContext) -> DeckResult<Note> {
    let fail = |reason: String| DeckError::NoteConstruction {
        index: *card.index(),
        word: card.word().clone(),
        reason,
    };
    let fields = note_fields(card, ctx).map_err(fail)?;
    debug!(?fields, "creating note");
    let values: Vec<&str> = fields.values().map(String::as_str).collect();
    Note::new(ctx.model().clone(), values).map_err(|e| fail(e.to_string()))
}

/// Builds the single deck of a run.
///
/// Unlike validation this is all-or-nothing: the first card that cannot be
/// turned into a note aborts the run.
pub fn build_deck(name: &str, cards: &[Card], ctx: &ExportContext) -> DeckResult<StudyDeck> {
    let _span = info_span!("build_deck", deck = name).entered();
    let config = ctx.config();
    let mut deck = Deck::new(*config.deck_id(), name, config.deck_description());
    let mut note_count = 0;
    for card in cards {
        let note = build_note(card, ctx).inspect_err(|e| {
            error!("{e}");
            error!("Card data: {card:#?}");
        })?;
        deck.add_note(note);
        note_count += 1;
        debug!(card = card.index(), word = %card.word(), "added card");
    }
    if note_count == 0 {
        return Err(DeckError::EmptyDeck);
    }
    info!(notes = note_count, "deck built");
    Ok(StudyDeck {
        deck,
        name: name.to_string(),
        note_count,
    })
}
