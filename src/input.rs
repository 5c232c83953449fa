use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::DeckResult;

/// The JSON document a run is driven by.
///
/// # Example Input
/// ```json
/// {
///     "deckName": "Test",
///     "cards": [{"word": "cat", "definition": "a feline", "audioFileName": "cat.mp3"}],
///     "mediaFiles": ["cat.mp3"],
///     "outputPath": "/tmp/out.apkg"
/// }
/// ```
///
/// Cards stay raw [Value]s here; a malformed card is the validator's
/// business and must not fail the whole document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub deck_name: String,
    pub cards: Vec<Value>,
    #[serde(default)]
    pub media_files: Vec<String>,
    pub output_path: String,
}

impl ExportRequest {
    /// Reads the whole stream and parses it.
    pub fn from_reader(mut reader: impl Read) -> DeckResult<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        debug!(bytes = raw.len(), "received input data");
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> DeckResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::ExportRequest;
    use crate::error::DeckError;

    #[test]
    fn media_files_default_to_empty() {
        let req = ExportRequest::parse(
            r#"{"deckName":"d","cards":[],"outputPath":"/tmp/x.apkg"}"#,
        )
        .unwrap();
        assert!(req.media_files.is_empty());
        assert_eq!(req.deck_name, "d");
        assert_eq!(req.output_path, "/tmp/x.apkg");
    }

    #[test]
    fn missing_output_path_is_input_error() {
        let err = ExportRequest::parse(r#"{"deckName":"d","cards":[]}"#).unwrap_err();
        assert!(matches!(err, DeckError::Input(_)));
        assert!(err.to_string().contains("outputPath"));
    }

    #[test]
    fn malformed_json_is_input_error() {
        let err = ExportRequest::from_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, DeckError::Input(_)));
    }

    #[test]
    fn unknown_keys_and_odd_cards_are_kept() {
        let req = ExportRequest::parse(
            r#"{"deckName":"d","cards":[1,{"word":"a"}],"outputPath":"o","extra":true}"#,
        )
        .unwrap();
        assert_eq!(req.cards.len(), 2);
    }
}
