//! Access Control List decoding.
//!
//! An ACL is an eight-byte header followed by `ace_count` entries laid out
//! back to back. The scan advances by each entry's declared size, never by
//! the length of the fields it decoded, so padding between entries is skipped.


use std::fmt;
use std::slice;

use crate::ace::Ace;
use crate::debug_trace::{trace_acl_entry, trace_acl_header};
use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::reader::ByteReader;

/// Length of the ACL header.
pub const ACL_HEADER_LEN: usize = 8;

/// ACL format revision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum AclRevision {
    /// `ACL_REVISION`: the ACL holds no object ACEs.
    #[cfg_attr(feature = "serde", serde(rename = "ACL_REVISION"))]
    Standard = 2,
    /// `ACL_REVISION_DS`: the ACL may hold object ACEs.
    #[cfg_attr(feature = "serde", serde(rename = "ACL_REVISION_DS"))]
    DirectoryService = 4,
}

impl AclRevision {
    /// Returns the revision byte used on the wire.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the canonical upper-case name of the revision.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "ACL_REVISION",
            Self::DirectoryService => "ACL_REVISION_DS",
        }
    }
}

impl TryFrom<u8> for AclRevision {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Standard),
            4 => Ok(Self::DirectoryService),
            other => Err(DecodeError::UnknownAclRevision(other)),
        }
    }
}

impl From<AclRevision> for u8 {
    #[inline]
    fn from(revision: AclRevision) -> Self {
        revision.as_u8()
    }
}

impl fmt::Display for AclRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded Access Control List.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Acl {
    revision: AclRevision,
    sbz1: u8,
    size: u16,
    sbz2: u16,
    aces: Vec<Ace>,
}

impl Acl {
    /// Decodes an ACL from the start of `bytes` with [`DecodeOptions::default`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] for a short header,
    /// [`DecodeError::UnknownAclRevision`] for a revision other than 2 or 4,
    /// and [`DecodeError::InAce`] wrapping the failure of any entry.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_options(bytes, DecodeOptions::default())
    }

    /// Decodes an ACL from the start of `bytes`.
    ///
    /// # Errors
    ///
    /// As [`Acl::decode`]; additionally, when
    /// [`DecodeOptions::checks_acl_size`] is set, entries that run past the
    /// ACL's declared size fail with [`DecodeError::AclSizeExceeded`].
    pub fn decode_with_options(bytes: &[u8], options: DecodeOptions) -> Result<Self, DecodeError> {
        let mut header = ByteReader::new(bytes);
        let revision = AclRevision::try_from(header.read_u8("ACL revision")?)?;
        let sbz1 = header.read_u8("ACL sbz1")?;
        let size = header.read_u16_le("ACL size")?;
        let ace_count = header.read_u16_le("ACE count")?;
        let sbz2 = header.read_u16_le("ACL sbz2")?;
        trace_acl_header(revision.as_u8(), size, ace_count);

        // Reserve no more entries than the buffer can hold.
        let plausible = bytes.len().saturating_sub(ACL_HEADER_LEN) / crate::ace::MIN_ACE_LEN;
        let mut aces = Vec::with_capacity(usize::from(ace_count).min(plausible));

        let mut offset = ACL_HEADER_LEN;
        for index in 0..ace_count {
            let ace = Ace::decode_with_options(&bytes[offset..], options)
                .map_err(|err| err.in_ace(index, offset))?;
            trace_acl_entry(index, offset, &ace);
            offset += usize::from(ace.size());
            aces.push(ace);
        }

        if options.checks_acl_size() && offset > usize::from(size) {
            return Err(DecodeError::AclSizeExceeded {
                declared: usize::from(size),
                consumed: offset,
            });
        }

        Ok(Self {
            revision,
            sbz1,
            size,
            sbz2,
            aces,
        })
    }

    /// Returns the format revision.
    #[must_use]
    #[inline]
    pub const fn revision(&self) -> AclRevision {
        self.revision
    }

    /// Returns the first reserved byte as read.
    #[must_use]
    #[inline]
    pub const fn sbz1(&self) -> u8 {
        self.sbz1
    }

    /// Returns the declared size, header included.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Returns the trailing reserved field as read.
    #[must_use]
    #[inline]
    pub const fn sbz2(&self) -> u16 {
        self.sbz2
    }

    /// Returns the entries in wire order.
    #[must_use]
    pub fn aces(&self) -> &[Ace] {
        &self.aces
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aces.len()
    }

    /// Returns `true` when the ACL holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aces.is_empty()
    }

    /// Iterates over the entries in wire order.
    pub fn iter(&self) -> slice::Iter<'_, Ace> {
        self.aces.iter()
    }

    /// Bytes covered by the header and the declared sizes of all entries.
    ///
    /// This can differ from [`Acl::size`], which is taken from the header
    /// without validation unless the ACL size check is enabled.
    #[must_use]
    pub fn consumed_len(&self) -> usize {
        ACL_HEADER_LEN
            + self
                .aces
                .iter()
                .map(|ace| usize::from(ace.size()))
                .sum::<usize>()
    }
}

impl<'a> IntoIterator for &'a Acl {
    type Item = &'a Ace;
    type IntoIter = slice::Iter<'a, Ace>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
