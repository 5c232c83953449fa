use thiserror::Error;

use crate::config::ExportConfigBuilderError;

pub type DeckResult<T> = Result<T, DeckError>;

/// Everything that ends a run.
///
/// Per-card validation problems are not in here, see [crate::cards::CardRejection].
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("{0}")]
    Environment(String),
    #[error("{0}")]
    Input(#[from] serde_json::Error),
    #[error("No valid cards found in input data")]
    NoValidCards,
    #[error("failed to add card {index} ({word}): {reason}")]
    NoteConstruction {
        index: usize,
        word: String,
        reason: String,
    },
    #[error("No notes were added to the deck")]
    EmptyDeck,
    #[error("media path has no file name: {0:?}")]
    MediaPath(String),
    #[error("{0}")]
    Package(#[from] genanki_rs::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("[error/config]: {0}")]
    Config(#[from] ExportConfigBuilderError),
}

impl DeckError {
    /// Formats the error together with every `source()` below it,
    /// one cause per line.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str("\n  [caused by]: ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }

    #[inline(always)]
    #[track_caller]
    pub fn pretty_panic(&self) -> ! {
        panic!("<PANIC>\n {}", self.chain())
    }
}
