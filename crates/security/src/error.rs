use std::fmt;
use std::io;

use sid::SidError;
use thiserror::Error;

/// Broad classification of a [`DecodeError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DecodeErrorKind {
    /// The buffer is too short for a required field, or a declared length runs
    /// past the available bytes.
    MalformedStructure,
    /// An ACE type code or ACL revision is not in the known set.
    UnrecognizedDiscriminant,
}

/// Security descriptor component in which a nested failure occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DescriptorComponent {
    /// The owner SID.
    Owner,
    /// The primary group SID.
    Group,
    /// The system ACL.
    Sacl,
    /// The discretionary ACL.
    Dacl,
}

impl fmt::Display for DescriptorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Owner => "owner SID",
            Self::Group => "group SID",
            Self::Sacl => "SACL",
            Self::Dacl => "DACL",
        })
    }
}

/// Failures encountered while decoding ACEs, ACLs and security descriptors.
///
/// Decoding is all-or-nothing: no partially decoded value accompanies an error.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    /// A fixed-size field extended past the end of the available bytes.
    #[error("{field} truncated at offset {offset}: expected {needed} bytes, got {available}")]
    Truncated {
        /// Name of the field being read.
        field: &'static str,
        /// Offset of the field relative to the structure being decoded.
        offset: usize,
        /// Bytes required by the field.
        needed: usize,
        /// Bytes that remained.
        available: usize,
    },
    /// A structure declared a total length larger than the remaining buffer.
    #[error("declared length {declared} at offset {offset} exceeds the {available} bytes available")]
    SizeOverrun {
        /// Offset of the structure relative to the buffer it was decoded from.
        offset: usize,
        /// Length declared by the structure header.
        declared: usize,
        /// Bytes available from `offset` onwards.
        available: usize,
    },
    /// Under [`SizePolicy::Strict`](crate::SizePolicy::Strict), the declared ACE
    /// size disagreed with the bytes its fields occupy.
    #[error("declared ACE size {declared} does not match the {consumed} bytes decoded")]
    SizeMismatch {
        /// Length declared by the ACE header.
        declared: usize,
        /// Bytes occupied by the decoded fields.
        consumed: usize,
    },
    /// With the ACL size check enabled, the entries ran past the ACL's declared size.
    #[error("ACL declares {declared} bytes but its header and entries occupy {consumed}")]
    AclSizeExceeded {
        /// Length declared by the ACL header.
        declared: usize,
        /// Header plus the declared sizes of all entries.
        consumed: usize,
    },
    /// A descriptor offset pointed outside the buffer.
    #[error("offset {offset} lies outside the {available}-byte buffer")]
    OffsetOutOfBounds {
        /// The offending offset.
        offset: usize,
        /// Length of the buffer.
        available: usize,
    },
    /// The trustee SID could not be decoded.
    #[error("invalid trustee SID at offset {offset}: {source}")]
    Sid {
        /// Offset of the SID relative to the start of the ACE.
        offset: usize,
        /// Failure reported by the SID decoder.
        #[source]
        source: SidError,
    },
    /// The ACE type code is not one of the known entry types.
    #[error("unknown ACE type {0}")]
    UnknownAceType(u8),
    /// The ACL revision is neither `ACL_REVISION` nor `ACL_REVISION_DS`.
    #[error("unknown ACL revision {0}")]
    UnknownAclRevision(u8),
    /// An entry of an ACL failed to decode.
    #[error("invalid ACE {index} at offset {offset}: {source}")]
    InAce {
        /// Zero-based position of the entry in the ACL.
        index: u16,
        /// Offset of the entry relative to the start of the ACL.
        offset: usize,
        /// The entry's own failure.
        #[source]
        source: Box<DecodeError>,
    },
    /// A component of a security descriptor failed to decode.
    #[error("invalid {component} in security descriptor: {source}")]
    InDescriptor {
        /// The component being decoded.
        component: DescriptorComponent,
        /// The component's own failure.
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Returns the classification of the underlying failure, looking through
    /// ACL and descriptor context.
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self.root_cause() {
            Self::UnknownAceType(_) | Self::UnknownAclRevision(_) => {
                DecodeErrorKind::UnrecognizedDiscriminant
            }
            _ => DecodeErrorKind::MalformedStructure,
        }
    }

    /// Returns the innermost error, stripping [`DecodeError::InAce`] and
    /// [`DecodeError::InDescriptor`] context.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::InAce { source, .. } | Self::InDescriptor { source, .. } = current {
            current = &**source;
        }
        current
    }

    /// Returns the unrecognized type code or revision, if that is the root cause.
    #[must_use]
    pub fn unrecognized_value(&self) -> Option<u8> {
        match self.root_cause() {
            Self::UnknownAceType(value) | Self::UnknownAclRevision(value) => Some(*value),
            _ => None,
        }
    }

    pub(crate) fn in_ace(self, index: u16, offset: usize) -> Self {
        Self::InAce {
            index,
            offset,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_descriptor(self, component: DescriptorComponent) -> Self {
        Self::InDescriptor {
            component,
            source: Box::new(self),
        }
    }
}

impl From<DecodeError> for io::Error {
    fn from(err: DecodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
