use std::io;
use std::path::PathBuf;

use security::DecodeError;
use thiserror::Error;

use crate::{EXIT_DECODE, EXIT_IO};

/// Failures after argument parsing succeeded.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Write(_) | Self::Json(_) => EXIT_IO,
            Self::Base64(_) | Self::Decode(_) => EXIT_DECODE,
        }
    }
}
