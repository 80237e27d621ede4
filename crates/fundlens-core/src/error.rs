use thiserror::Error;

use crate::http_client::HttpError;

/// Row/column contract violations raised while reshaping a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("row {row} has {actual} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("required field '{field}' is missing")]
    MissingField { field: String },
    #[error("field '{field}' is invalid: {message}")]
    InvalidField { field: String, message: String },
}

/// Coarse classification of [`SourceError`] for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Fetch,
    Parse,
    Decode,
    Transport,
}

/// Error surfaced by every provider operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Upstream answered with a non-2xx status. `body` is kept verbatim.
    #[error("{status} {status_text}: {body}")]
    Fetch {
        url: String,
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),
}

impl SourceError {
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        match self {
            Self::Fetch { .. } => SourceErrorKind::Fetch,
            Self::Parse { .. } => SourceErrorKind::Parse,
            Self::Decode(_) => SourceErrorKind::Decode,
            Self::Transport(_) => SourceErrorKind::Transport,
        }
    }

    /// HTTP status for `Fetch` errors.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}
