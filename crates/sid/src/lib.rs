#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Windows security identifiers (SIDs) as they appear inside Active Directory
//! security descriptors.
//!
//! A SID names the principal (user, group, computer, well-known alias) that an
//! access control entry applies to. On the wire it is a self-describing,
//! variable-length record:
//!
//! ```text
//! revision             : u8
//! sub_authority_count  : u8
//! identifier_authority : [u8; 6]   // big-endian 48-bit value
//! sub_authority        : [u32-le; sub_authority_count]
//! ```
//!
//! [`Sid::encoded_len`] reports exactly how many bytes a decoded SID occupied so
//! that container decoders can advance their cursor without re-parsing.
//!
//! # Examples
//!
//! ```
//! use sid::Sid;
//!
//! let bytes = [1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0];
//! let everyone = Sid::from_bytes_le(&bytes).unwrap();
//!
//! assert_eq!(everyone.encoded_len(), 12);
//! assert_eq!(everyone.to_string(), "S-1-1-0");
//! assert_eq!(everyone, "S-1-1-0".parse::<Sid>().unwrap());
//! ```

mod error;
mod parse;

use std::fmt;

pub use error::{ParseSidError, ParseSidErrorKind, SidError};

/// Size of the fixed portion of an encoded SID.
pub const HEADER_LEN: usize = 8;

/// Size of each encoded sub-authority.
pub const SUB_AUTHORITY_LEN: usize = 4;

/// Largest number of sub-authorities accepted by the textual parser.
pub const MAX_SUB_AUTHORITIES: usize = 15;

/// Identifier authorities at or above this value are rendered in hexadecimal.
const HEX_AUTHORITY_THRESHOLD: u64 = 1 << 32;

/// A decoded security identifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Sid {
    revision: u8,
    identifier_authority: u64,
    sub_authorities: Vec<u32>,
}

impl Sid {
    /// Creates a SID from its components.
    ///
    /// Only the low 48 bits of `identifier_authority` are representable on the wire.
    #[must_use]
    pub fn new(revision: u8, identifier_authority: u64, sub_authorities: Vec<u32>) -> Self {
        Self {
            revision,
            identifier_authority: identifier_authority & 0xFFFF_FFFF_FFFF,
            sub_authorities,
        }
    }

    /// Decodes a SID from the start of `bytes` using the little-endian layout.
    ///
    /// Bytes following the last sub-authority are ignored.
    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self, SidError> {
        if bytes.len() < HEADER_LEN {
            return Err(SidError::Truncated {
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }

        let revision = bytes[0];
        let count = usize::from(bytes[1]);
        let needed = HEADER_LEN + count * SUB_AUTHORITY_LEN;
        if bytes.len() < needed {
            return Err(SidError::Truncated {
                needed,
                available: bytes.len(),
            });
        }

        let identifier_authority = bytes[2..HEADER_LEN]
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

        let sub_authorities = bytes[HEADER_LEN..needed]
            .chunks_exact(SUB_AUTHORITY_LEN)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self {
            revision,
            identifier_authority,
            sub_authorities,
        })
    }

    /// Encodes the SID using the little-endian layout accepted by [`Sid::from_bytes_le`].
    ///
    /// Sub-authorities beyond `u8::MAX` cannot be described by the count byte and are dropped.
    #[must_use]
    pub fn to_bytes_le(&self) -> Vec<u8> {
        let count = self.sub_authorities.len().min(usize::from(u8::MAX));
        let mut out = Vec::with_capacity(HEADER_LEN + count * SUB_AUTHORITY_LEN);
        out.push(self.revision);
        out.push(count as u8);
        out.extend_from_slice(&self.identifier_authority.to_be_bytes()[2..]);
        for sub in &self.sub_authorities[..count] {
            out.extend_from_slice(&sub.to_le_bytes());
        }
        out
    }

    /// Number of bytes the SID occupies in its encoded form.
    #[must_use]
    #[inline]
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.sub_authorities.len() * SUB_AUTHORITY_LEN
    }

    /// Returns the SID revision byte.
    #[must_use]
    #[inline]
    pub const fn revision(&self) -> u8 {
        self.revision
    }

    /// Returns the 48-bit identifier authority.
    #[must_use]
    #[inline]
    pub const fn identifier_authority(&self) -> u64 {
        self.identifier_authority
    }

    /// Returns the sub-authority values in wire order.
    #[must_use]
    #[inline]
    pub fn sub_authorities(&self) -> &[u32] {
        &self.sub_authorities
    }

    /// Returns the relative identifier (the last sub-authority), if any.
    #[must_use]
    pub fn rid(&self) -> Option<u32> {
        self.sub_authorities.last().copied()
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}-", self.revision)?;
        if self.identifier_authority >= HEX_AUTHORITY_THRESHOLD {
            write!(f, "{:#x}", self.identifier_authority)?;
        } else {
            write!(f, "{}", self.identifier_authority)?;
        }
        for sub in &self.sub_authorities {
            write!(f, "-{sub}")?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Sid {
    fn eq(&self, other: &str) -> bool {
        other.parse::<Self>().is_ok_and(|parsed| parsed == *self)
    }
}

impl PartialEq<&str> for Sid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl TryFrom<&[u8]> for Sid {
    type Error = SidError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes_le(bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
