use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{DeckError, DeckResult};

/// Installs the stderr subscriber for the whole process.
///
/// `RUST_LOG` wins over `level` when it is set. stdout stays reserved for
/// the result document.
pub fn init(level: &str) -> DeckResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| DeckError::Environment(format!("invalid log level {level:?}: {e}")))?,
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| DeckError::Environment(format!("failed to set up logging: {e}")))
}

