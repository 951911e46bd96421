use thiserror::Error;

/// Every failure a tool invocation can report. All of them end up in an
/// [`Envelope`](super::envelope::Envelope), none of them abort the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VocusError {
    #[error("missing or invalid parameter: {0}")]
    InvalidParam(&'static str),
    #[error("connection failure: {0}")]
    Connection(String),
    #[error("upstream error, status={status}, body={body}")]
    Upstream { status: u16, body: String },
    #[error("invalid upstream payload: {0}")]
    Decode(String),
    #[error("request cancelled")]
    Cancelled,
}

impl VocusError {
    /// Short label used for log fields and metric names.
    pub fn kind(&self) -> &'static str {
        match self {
            VocusError::InvalidParam(_) => "invalid_param",
            VocusError::Connection(_) => "connection",
            VocusError::Upstream { .. } => "upstream_status",
            VocusError::Decode(_) => "decode",
            VocusError::Cancelled => "cancelled",
        }
    }
}
