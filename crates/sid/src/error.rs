use std::fmt;

use thiserror::Error;

/// Failures encountered while decoding a binary SID.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SidError {
    /// The buffer ended before the header or the declared sub-authorities.
    #[error("SID truncated: expected {needed} bytes, got {available}")]
    Truncated {
        /// Bytes required by the header and declared sub-authority count.
        needed: usize,
        /// Bytes that were available.
        available: usize,
    },
}

impl SidError {
    /// Returns the number of bytes the decoder required.
    #[must_use]
    pub const fn needed(self) -> usize {
        match self {
            Self::Truncated { needed, .. } => needed,
        }
    }

    /// Returns the number of bytes that were available to the decoder.
    #[must_use]
    pub const fn available(self) -> usize {
        match self {
            Self::Truncated { available, .. } => available,
        }
    }
}

/// Classification of textual SID parse failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseSidErrorKind {
    /// The string did not start with `S-`.
    MissingPrefix,
    /// The revision or identifier authority component was absent.
    MissingComponent,
    /// A component was not a valid unsigned number for its position.
    InvalidNumber,
    /// More than [`MAX_SUB_AUTHORITIES`](crate::MAX_SUB_AUTHORITIES) sub-authorities were given.
    TooManySubAuthorities,
}

/// Error returned when parsing a [`Sid`](crate::Sid) from its `S-1-...` form fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub struct ParseSidError {
    kind: ParseSidErrorKind,
    input: String,
}

impl ParseSidError {
    pub(crate) fn new(kind: ParseSidErrorKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }

    /// Returns the classification describing why parsing failed.
    #[must_use]
    pub const fn kind(&self) -> ParseSidErrorKind {
        self.kind
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseSidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = &self.input;
        match self.kind {
            ParseSidErrorKind::MissingPrefix => {
                write!(f, "string {input:?} is not a valid SID: missing \"S-\" prefix")
            }
            ParseSidErrorKind::MissingComponent => write!(
                f,
                "string {input:?} is not a valid SID: revision and identifier authority are required"
            ),
            ParseSidErrorKind::InvalidNumber => {
                write!(f, "string {input:?} is not a valid SID: invalid numeric component")
            }
            ParseSidErrorKind::TooManySubAuthorities => write!(
                f,
                "string {input:?} is not a valid SID: more than {} sub-authorities",
                crate::MAX_SUB_AUTHORITIES
            ),
        }
    }
}
