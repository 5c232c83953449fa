use serde::Serialize;
use serde_with::skip_serializing_none;
use tracing::error;

use crate::error::DeckResult;

/// The one JSON document written to stdout.
///
/// # Example Result
/// ```json
/// {"success": true, "outputPath": "/tmp/out.apkg"}
/// {"success": false, "error": "No valid cards found in input data"}
/// ```
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub success: bool,
    pub output_path: Option<String>,
    pub error: Option<String>,
}

impl RunReport {
    pub fn success(output_path: impl Into<String>) -> Self {
        Self {
            success: true,
            output_path: Some(output_path.into()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output_path: None,
            error: Some(message.into()),
        }
    }

    /// Turns the outcome of a run into its report. Failures are logged with
    /// their full cause chain; the report only carries the short message.
    pub fn from_result(result: DeckResult<String>) -> Self {
        match result {
            Ok(path) => Self::success(path),
            Err(e) => {
                error!("Failed to generate deck: {}", e.chain());
                Self::failure(e.to_string())
            }
        }
    }

    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            1
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            // only reachable if serde_json cannot write a two-field struct
            format!(r#"{{"success":false,"error":"{e}"}}"#)
        })
    }
}
