//! Uniform success/error wrapper returned by every tool.

use serde::{Deserialize, Serialize};

use super::error::VocusError;

/// `{success, data?, error?}`; exactly one of `data`/`error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn fail(err: &VocusError) -> Self {
        Self { success: false, data: None, error: Some(err.to_string()) }
    }
}

impl<T> From<Result<T, VocusError>> for Envelope<T> {
    fn from(res: Result<T, VocusError>) -> Self {
        match res {
            Ok(data) => Envelope::ok(data),
            Err(e) => Envelope::fail(&e),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Structured JSON for the MCP `structuredContent` slot.
    pub fn to_json(&self) -> serde_json::Value {
        // An envelope holds only strings, bools and lists of plain records.
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "success": false, "error": format!("encode failure: {e}") })
        })
    }
}
