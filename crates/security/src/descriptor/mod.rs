//! Self-relative security descriptor decoding.
//!
//! The descriptor is a 20-byte header (revision, reserved byte, control word
//! and four little-endian offsets) followed by the components those offsets
//! point at. A zero offset means the component is absent; the SACL and DACL
//! are additionally gated by the `SACL_PRESENT`/`DACL_PRESENT` control bits.

mod control;

#[cfg(test)]
mod tests;

pub use control::{ControlFlag, DescriptorControl};

use sid::Sid;

use crate::acl::Acl;
use crate::debug_trace::{trace_descriptor_component, trace_descriptor_header};
use crate::error::{DecodeError, DescriptorComponent};
use crate::options::DecodeOptions;
use crate::reader::ByteReader;

/// Length of the self-relative descriptor header.
pub const DESCRIPTOR_HEADER_LEN: usize = 20;

/// A decoded self-relative security descriptor, as stored in the
/// `nTSecurityDescriptor` attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecurityDescriptor {
    revision: u8,
    sbz1: u8,
    control: DescriptorControl,
    owner: Option<Sid>,
    group: Option<Sid>,
    sacl: Option<Acl>,
    dacl: Option<Acl>,
}

impl SecurityDescriptor {
    /// Decodes a descriptor with [`DecodeOptions::default`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] for a short header and
    /// [`DecodeError::InDescriptor`] when a component offset is out of bounds
    /// or the component itself fails to decode.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_options(bytes, DecodeOptions::default())
    }

    /// Decodes a descriptor, applying `options` to both ACLs.
    ///
    /// # Errors
    ///
    /// See [`SecurityDescriptor::decode`].
    pub fn decode_with_options(bytes: &[u8], options: DecodeOptions) -> Result<Self, DecodeError> {
        let mut header = ByteReader::new(bytes);
        let revision = header.read_u8("descriptor revision")?;
        let sbz1 = header.read_u8("descriptor sbz1")?;
        let control = DescriptorControl::from_raw(header.read_u16_le("descriptor control")?);
        let owner_offset = header.read_u32_le("owner offset")?;
        let group_offset = header.read_u32_le("group offset")?;
        let sacl_offset = header.read_u32_le("SACL offset")?;
        let dacl_offset = header.read_u32_le("DACL offset")?;
        trace_descriptor_header(revision, control);

        let owner = decode_sid(bytes, owner_offset, DescriptorComponent::Owner)?;
        let group = decode_sid(bytes, group_offset, DescriptorComponent::Group)?;

        let sacl = if control.sacl_present() {
            decode_acl(bytes, sacl_offset, DescriptorComponent::Sacl, options)?
        } else {
            None
        };
        let dacl = if control.dacl_present() {
            decode_acl(bytes, dacl_offset, DescriptorComponent::Dacl, options)?
        } else {
            None
        };

        Ok(Self {
            revision,
            sbz1,
            control,
            owner,
            group,
            sacl,
            dacl,
        })
    }

    /// Returns the revision byte, unvalidated.
    #[must_use]
    pub const fn revision(&self) -> u8 {
        self.revision
    }

    /// Returns the reserved byte following the revision.
    #[must_use]
    pub const fn sbz1(&self) -> u8 {
        self.sbz1
    }

    /// Returns the control word.
    #[must_use]
    pub const fn control(&self) -> DescriptorControl {
        self.control
    }

    /// Returns the owner SID, if the descriptor has one.
    #[must_use]
    pub const fn owner(&self) -> Option<&Sid> {
        self.owner.as_ref()
    }

    /// Returns the primary group SID, if the descriptor has one.
    #[must_use]
    pub const fn group(&self) -> Option<&Sid> {
        self.group.as_ref()
    }

    /// Returns the system ACL, if present.
    #[must_use]
    pub const fn sacl(&self) -> Option<&Acl> {
        self.sacl.as_ref()
    }

    /// Returns the discretionary ACL, if present.
    ///
    /// `None` grants everyone full access; an empty DACL grants nothing.
    #[must_use]
    pub const fn dacl(&self) -> Option<&Acl> {
        self.dacl.as_ref()
    }
}

/// Returns the tail of `bytes` starting at a non-zero component offset.
fn component(
    bytes: &[u8],
    offset: u32,
    which: DescriptorComponent,
) -> Result<Option<(usize, &[u8])>, DecodeError> {
    if offset == 0 {
        return Ok(None);
    }

    let start = usize::try_from(offset).unwrap_or(usize::MAX);
    if start >= bytes.len() {
        return Err(DecodeError::OffsetOutOfBounds {
            offset: start,
            available: bytes.len(),
        }
        .in_descriptor(which));
    }
    trace_descriptor_component(which, start);
    Ok(Some((start, &bytes[start..])))
}

fn decode_sid(
    bytes: &[u8],
    offset: u32,
    which: DescriptorComponent,
) -> Result<Option<Sid>, DecodeError> {
    let Some((start, tail)) = component(bytes, offset, which)? else {
        return Ok(None);
    };
    Sid::from_bytes_le(tail)
        .map(Some)
        .map_err(|source| DecodeError::Sid { offset: start, source }.in_descriptor(which))
}

fn decode_acl(
    bytes: &[u8],
    offset: u32,
    which: DescriptorComponent,
    options: DecodeOptions,
) -> Result<Option<Acl>, DecodeError> {
    let Some((_, tail)) = component(bytes, offset, which)? else {
        return Ok(None);
    };
    Acl::decode_with_options(tail, options)
        .map(Some)
        .map_err(|err| err.in_descriptor(which))
}
