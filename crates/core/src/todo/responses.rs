use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status envelope used for everything that is not a plain record.
///
/// - `Success` → `{"status":"success"}`
/// - `Fail` → `{"status":"fail","data":...}` for client-side problems
/// - `Error` → `{"status":"error","message":"..."}` for backend failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusResponse {
    Success,
    Fail { data: Value },
    Error { message: String },
}

impl StatusResponse {
    pub fn fail(data: impl Into<Value>) -> Self {
        Self::Fail { data: data.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
