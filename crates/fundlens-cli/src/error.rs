use fundlens_core::{SourceError, SourceErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::Source(error) => match error.kind() {
                SourceErrorKind::Fetch | SourceErrorKind::Transport => 3,
                SourceErrorKind::Parse | SourceErrorKind::Decode => 4,
            },
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }

    /// Short machine-readable code used in stream error events.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Source(error) => match error.kind() {
                SourceErrorKind::Fetch => "upstream_status",
                SourceErrorKind::Transport => "transport",
                SourceErrorKind::Parse => "parse",
                SourceErrorKind::Decode => "decode",
            },
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }
}
