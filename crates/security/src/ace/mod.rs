//! Access Control Entry decoding.
//!
//! An ACE starts with a four-byte header (type, flags, little-endian size)
//! followed by a big-endian access mask. Object types then carry a
//! little-endian object-flags word and up to two GUIDs, and every type carries
//! a trustee SID. Callback types, along with `SYSTEM_AUDIT_OBJECT`, keep the
//! bytes between the trustee and the declared size as application data.
//!
//! The declared size drives everything: the decoder never reads past it, and
//! [`Ace::size`] reports it verbatim so that an ACL scan can advance over
//! padding the structural fields do not account for.

mod flags;
mod kind;
mod object;
mod rights;


pub use flags::{AceFlag, AceFlags};
pub use kind::AceType;
pub use object::{ObjectAceFlag, ObjectAceFlags};
pub use rights::{AccessRight, AccessRights};

use sid::Sid;

use crate::debug_trace::{trace_ace_tail, trace_object_flags};
use crate::error::DecodeError;
use crate::guid::{GUID_LEN, Guid};
use crate::options::{DecodeOptions, SizePolicy};
use crate::reader::ByteReader;

/// Length of the type, flags and size fields that open every ACE.
pub const ACE_HEADER_LEN: usize = 4;

/// Smallest well-formed ACE: header, mask and a SID without sub-authorities.
pub const MIN_ACE_LEN: usize = ACE_HEADER_LEN + 4 + sid::HEADER_LEN;

/// One decoded Access Control Entry.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ace {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ace_type: AceType,
    flags: AceFlags,
    mask: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    object_flags: Option<ObjectAceFlags>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    object_type: Option<Guid>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    inherited_object_type: Option<Guid>,
    trustee: Sid,
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_application_data"
        )
    )]
    application_data: Option<Vec<u8>>,
    size: u16,
}

impl Ace {
    /// Decodes one ACE from the start of `bytes` with [`DecodeOptions::default`].
    ///
    /// `bytes` may extend past the entry; only the first [`Ace::size`] bytes
    /// are examined.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownAceType`] for a type code outside the
    /// known set, [`DecodeError::SizeOverrun`] when the declared size exceeds
    /// `bytes`, and [`DecodeError::Truncated`] or [`DecodeError::Sid`] when a
    /// field does not fit inside the declared size.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_options(bytes, DecodeOptions::default())
    }

    /// Decodes one ACE from the start of `bytes`.
    ///
    /// # Errors
    ///
    /// As [`Ace::decode`]; additionally, under [`SizePolicy::Strict`] an entry
    /// without application data whose fields do not fill its declared size
    /// fails with [`DecodeError::SizeMismatch`].
    pub fn decode_with_options(bytes: &[u8], options: DecodeOptions) -> Result<Self, DecodeError> {
        let mut header = ByteReader::new(bytes);
        let ace_type = AceType::try_from(header.read_u8("ACE type")?)?;
        let flags = AceFlags::from_raw(header.read_u8("ACE flags")?);
        let size = header.read_u16_le("ACE size")?;

        let declared = usize::from(size);
        if declared > bytes.len() {
            return Err(DecodeError::SizeOverrun {
                offset: 0,
                declared,
                available: bytes.len(),
            });
        }

        // Every later read is confined to the declared extent.
        let mut reader = ByteReader::new(&bytes[..declared]);
        reader.skip(ACE_HEADER_LEN, "ACE header")?;
        let mask = reader.read_u32_be("access mask")?;

        let mut object_flags = None;
        let mut object_type = None;
        let mut inherited_object_type = None;
        if ace_type.is_object() {
            let presence = ObjectAceFlags::from_raw(reader.read_u32_le("object flags")?);
            trace_object_flags(presence);
            if presence.object_type_present() {
                object_type = Some(read_guid(&mut reader, "object type GUID")?);
            }
            if presence.inherited_object_type_present() {
                inherited_object_type = Some(read_guid(&mut reader, "inherited object type GUID")?);
            }
            object_flags = Some(presence);
        }

        let sid_offset = reader.position();
        let trustee = Sid::from_bytes_le(reader.remaining()).map_err(|source| DecodeError::Sid {
            offset: sid_offset,
            source,
        })?;
        reader.skip(trustee.encoded_len(), "trustee SID")?;

        let consumed = reader.position();
        let carries_data = ace_type.carries_application_data();
        trace_ace_tail(declared, consumed, carries_data);

        let application_data = if carries_data {
            Some(reader.take_rest().to_vec())
        } else {
            if options.size_policy() == SizePolicy::Strict && consumed != declared {
                return Err(DecodeError::SizeMismatch { declared, consumed });
            }
            None
        };

        Ok(Self {
            ace_type,
            flags,
            mask,
            object_flags,
            object_type,
            inherited_object_type,
            trustee,
            application_data,
            size,
        })
    }

    /// Returns the entry type.
    #[must_use]
    #[inline]
    pub const fn ace_type(&self) -> AceType {
        self.ace_type
    }

    /// Returns the header flags.
    #[must_use]
    #[inline]
    pub const fn flags(&self) -> AceFlags {
        self.flags
    }

    /// Returns the raw access mask.
    #[must_use]
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Returns the named rights set in the access mask.
    #[must_use]
    #[inline]
    pub const fn rights(&self) -> AccessRights {
        AccessRights::from_raw(self.mask)
    }

    /// Returns the declared size of the entry in bytes.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Returns the object-flags word; `None` for non-object types.
    #[must_use]
    pub const fn object_flags(&self) -> Option<ObjectAceFlags> {
        self.object_flags
    }

    /// Returns the object type GUID when the entry is scoped to one.
    #[must_use]
    pub const fn object_type(&self) -> Option<Guid> {
        self.object_type
    }

    /// Returns the GUID of the child class that inherits the entry, if any.
    #[must_use]
    pub const fn inherited_object_type(&self) -> Option<Guid> {
        self.inherited_object_type
    }

    /// Returns the trustee SID.
    #[must_use]
    pub const fn trustee(&self) -> &Sid {
        &self.trustee
    }

    /// Returns the application data payload.
    ///
    /// `None` for types that never carry one; `Some` (possibly empty) for the
    /// callback types and `SYSTEM_AUDIT_OBJECT`.
    #[must_use]
    pub fn application_data(&self) -> Option<&[u8]> {
        self.application_data.as_deref()
    }

    /// Returns `true` if the entry was inherited from a parent object.
    #[must_use]
    pub const fn is_inherited(&self) -> bool {
        self.flags.contains(AceFlag::Inherited)
    }
}

fn read_guid(reader: &mut ByteReader<'_>, field: &'static str) -> Result<Guid, DecodeError> {
    reader.read_array::<GUID_LEN>(field).map(Guid::from_bytes_le)
}

#[cfg(feature = "serde")]
#[allow(clippy::ref_option)]
fn serialize_application_data<S: serde::Serializer>(
    data: &Option<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use std::fmt::Write as _;

    match data {
        Some(bytes) => {
            let mut hex = String::with_capacity(bytes.len() * 2);
            for byte in bytes {
                let _ = write!(hex, "{byte:02x}");
            }
            serializer.serialize_str(&hex)
        }
        None => serializer.serialize_none(),
    }
}
