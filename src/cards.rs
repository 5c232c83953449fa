use getset::Getters;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Why a single card was left out of the deck. Never fatal on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardRejection {
    #[error("Card {index}: expected an object")]
    NotAnObject { index: usize },
    #[error("Card {index}: Missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("Card {index}: Field '{field}' must be a string")]
    NotAString { index: usize, field: &'static str },
    #[error("Card {index}: Field '{field}' is empty")]
    EmptyField { index: usize, field: &'static str },
}

impl CardRejection {
    pub fn index(&self) -> usize {
        match self {
            Self::NotAnObject { index }
            | Self::MissingField { index, .. }
            | Self::NotAString { index, .. }
            | Self::EmptyField { index, .. } => *index,
        }
    }
}

/// A card that passed validation. Values are kept exactly as given.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Card {
    /// 1-based position in the input `cards` array.
    index: usize,
    word: String,
    definition: String,
    audio_file_name: String,
    /// Raw `notes` value; [Value::Null] when absent. Turning it into text is
    /// left to note construction.
    notes: Value,
}

fn required_str(
    obj: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<String, CardRejection> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(CardRejection::MissingField { index, field }),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(CardRejection::EmptyField { index, field })
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CardRejection::NotAString { index, field }),
    }
}

/// Checks `word`, `definition` and `audioFileName` in that order and stops
/// at the first problem.
pub fn validate_card(value: &Value, index: usize) -> Result<Card, CardRejection> {
    let Some(obj) = value.as_object() else {
        return Err(CardRejection::NotAnObject { index });
    };
    Ok(Card {
        index,
        word: required_str(obj, "word", index)?,
        definition: required_str(obj, "definition", index)?,
        audio_file_name: required_str(obj, "audioFileName", index)?,
        notes: obj.get("notes").cloned().unwrap_or(Value::Null),
    })
}

/// Outcome of checking every card of a request.
#[derive(Debug, Default, Clone)]
pub struct Validation {
    pub valid: Vec<Card>,
    pub rejected: Vec<CardRejection>,
}

impl Validation {
    pub fn total(&self) -> usize {
        self.valid.len() + self.rejected.len()
    }
}

/// Checks each card in input order. Bad cards are logged and skipped.
pub fn validate_cards(cards: &[Value]) -> Validation {
    let mut validation = Validation::default();
    for (i, value) in cards.iter().enumerate() {
        let index = i + 1;
        debug!(card = index, data = %value, "validating card");
        match validate_card(value, index) {
            Ok(card) => validation.valid.push(card),
            Err(rejection) => {
                error!("{rejection}");
                warn!("Skipping invalid card {index}");
                validation.rejected.push(rejection);
            }
        }
    }
    info!(
        "Valid cards: {} out of {}",
        validation.valid.len(),
        validation.total()
    );
    validation
}
