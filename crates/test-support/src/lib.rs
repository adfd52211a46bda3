#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Builders for the binary structures the decoders consume.
//!
//! The decoder crates are read-only; tests use these builders to lay out ACEs,
//! ACLs and self-relative security descriptors byte by byte. Sizes, counts and
//! offsets are computed automatically and can be overridden to produce
//! malformed input.
//!
//! ```
//! use test_support::{AceBuilder, AclBuilder};
//!
//! let acl = AclBuilder::new()
//!     .ace(AceBuilder::new(0, "S-1-5-18").mask(0x001F_01FF).build())
//!     .build();
//!
//! assert_eq!(acl.len(), 28);
//! assert_eq!(&acl[2..4], &28u16.to_le_bytes());
//! ```

use sid::Sid;

/// Type codes of the object ACE variants.
pub const OBJECT_ACE_TYPES: [u8; 8] = [5, 6, 7, 8, 11, 12, 15, 16];

/// `ACL_REVISION`.
pub const ACL_REVISION: u8 = 2;

/// `ACL_REVISION_DS`.
pub const ACL_REVISION_DS: u8 = 4;

/// Control bits used by [`SecurityDescriptorBuilder`].
pub mod control {
    /// `DACL_PRESENT`.
    pub const DACL_PRESENT: u16 = 0x0004;
    /// `SACL_PRESENT`.
    pub const SACL_PRESENT: u16 = 0x0010;
    /// `SELF_RELATIVE`.
    pub const SELF_RELATIVE: u16 = 0x8000;
}

/// Encodes a textual SID such as `S-1-5-32-544` in its wire layout.
///
/// # Panics
///
/// Panics when `text` is not a valid SID.
#[must_use]
pub fn sid_bytes(text: &str) -> Vec<u8> {
    text.parse::<Sid>()
        .unwrap_or_else(|err| panic!("invalid test SID {text:?}: {err}"))
        .to_bytes_le()
}

/// Builds a single ACE.
#[derive(Clone, Debug)]
pub struct AceBuilder {
    ace_type: u8,
    flags: u8,
    mask: u32,
    object_flags: Option<u32>,
    object_type: Option<[u8; 16]>,
    inherited_object_type: Option<[u8; 16]>,
    trustee: Vec<u8>,
    trailing: Vec<u8>,
    declared_size: Option<u16>,
}

impl AceBuilder {
    /// Starts an entry of type `ace_type` for the trustee `sid`.
    ///
    /// # Panics
    ///
    /// Panics when `sid` is not a valid SID.
    #[must_use]
    pub fn new(ace_type: u8, sid: &str) -> Self {
        Self {
            ace_type,
            flags: 0,
            mask: 0,
            object_flags: None,
            object_type: None,
            inherited_object_type: None,
            trustee: sid_bytes(sid),
            trailing: Vec::new(),
            declared_size: None,
        }
    }

    /// Sets the header flags byte.
    #[must_use]
    pub const fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the access mask (written big-endian).
    #[must_use]
    pub const fn mask(mut self, mask: u32) -> Self {
        self.mask = mask;
        self
    }

    /// Adds an object type GUID, given in wire (bytes_le) layout.
    #[must_use]
    pub const fn object_type(mut self, guid_le: [u8; 16]) -> Self {
        self.object_type = Some(guid_le);
        self
    }

    /// Adds an inherited object type GUID, given in wire (bytes_le) layout.
    #[must_use]
    pub const fn inherited_object_type(mut self, guid_le: [u8; 16]) -> Self {
        self.inherited_object_type = Some(guid_le);
        self
    }

    /// Overrides the object-flags word derived from the GUIDs present.
    #[must_use]
    pub const fn object_flags(mut self, raw: u32) -> Self {
        self.object_flags = Some(raw);
        self
    }

    /// Replaces the trustee with raw bytes, which need not be a valid SID.
    #[must_use]
    pub fn trustee_bytes(mut self, bytes: &[u8]) -> Self {
        self.trustee = bytes.to_vec();
        self
    }

    /// Appends bytes after the trustee (application data or slack).
    #[must_use]
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    /// Overrides the size written in the header.
    #[must_use]
    pub const fn declared_size(mut self, size: u16) -> Self {
        self.declared_size = Some(size);
        self
    }

    /// Lays out the entry.
    ///
    /// # Panics
    ///
    /// Panics when the entry does not fit a 16-bit size.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut body = self.mask.to_be_bytes().to_vec();
        if OBJECT_ACE_TYPES.contains(&self.ace_type) {
            let derived = u32::from(self.object_type.is_some())
                | (u32::from(self.inherited_object_type.is_some()) << 1);
            body.extend_from_slice(&self.object_flags.unwrap_or(derived).to_le_bytes());
            if let Some(guid) = self.object_type {
                body.extend_from_slice(&guid);
            }
            if let Some(guid) = self.inherited_object_type {
                body.extend_from_slice(&guid);
            }
        }
        body.extend_from_slice(&self.trustee);
        body.extend_from_slice(&self.trailing);

        let actual = u16::try_from(4 + body.len()).expect("ACE exceeds 65535 bytes");
        let size = self.declared_size.unwrap_or(actual);

        let mut bytes = vec![self.ace_type, self.flags];
        bytes.extend_from_slice(&size.to_le_bytes());
        bytes.extend_from_slice(&body);
        bytes
    }
}

/// Builds an ACL from already encoded entries.
#[derive(Clone, Debug)]
pub struct AclBuilder {
    revision: u8,
    sbz1: u8,
    sbz2: u16,
    entries: Vec<Vec<u8>>,
    declared_size: Option<u16>,
    declared_count: Option<u16>,
}

impl Default for AclBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AclBuilder {
    /// Starts an empty `ACL_REVISION_DS` list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            revision: ACL_REVISION_DS,
            sbz1: 0,
            sbz2: 0,
            entries: Vec::new(),
            declared_size: None,
            declared_count: None,
        }
    }

    /// Sets the revision byte.
    #[must_use]
    pub const fn revision(mut self, revision: u8) -> Self {
        self.revision = revision;
        self
    }

    /// Sets both reserved fields.
    #[must_use]
    pub const fn reserved(mut self, sbz1: u8, sbz2: u16) -> Self {
        self.sbz1 = sbz1;
        self.sbz2 = sbz2;
        self
    }

    /// Appends an encoded entry.
    #[must_use]
    pub fn ace(mut self, entry: Vec<u8>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Overrides the size written in the header.
    #[must_use]
    pub const fn declared_size(mut self, size: u16) -> Self {
        self.declared_size = Some(size);
        self
    }

    /// Overrides the entry count written in the header.
    #[must_use]
    pub const fn declared_count(mut self, count: u16) -> Self {
        self.declared_count = Some(count);
        self
    }

    /// Lays out the list.
    ///
    /// # Panics
    ///
    /// Panics when the list does not fit 16-bit size and count fields.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let body: Vec<u8> = self.entries.concat();
        let actual = u16::try_from(8 + body.len()).expect("ACL exceeds 65535 bytes");
        let count = u16::try_from(self.entries.len()).expect("too many ACEs");

        let mut bytes = vec![self.revision, self.sbz1];
        bytes.extend_from_slice(&self.declared_size.unwrap_or(actual).to_le_bytes());
        bytes.extend_from_slice(&self.declared_count.unwrap_or(count).to_le_bytes());
        bytes.extend_from_slice(&self.sbz2.to_le_bytes());
        bytes.extend_from_slice(&body);
        bytes
    }
}

/// Builds a self-relative security descriptor.
///
/// Components are laid out after the 20-byte header in the order owner,
/// group, SACL, DACL. Unless [`control`](Self::control) is given, the control
/// word is `SELF_RELATIVE` plus the present bit of each ACL supplied.
#[derive(Clone, Debug, Default)]
pub struct SecurityDescriptorBuilder {
    revision: u8,
    control: Option<u16>,
    owner: Option<Vec<u8>>,
    group: Option<Vec<u8>>,
    sacl: Option<Vec<u8>>,
    dacl: Option<Vec<u8>>,
}

impl SecurityDescriptorBuilder {
    /// Starts a revision 1 descriptor without components.
    #[must_use]
    pub fn new() -> Self {
        Self {
            revision: 1,
            ..Self::default()
        }
    }

    /// Sets the revision byte.
    #[must_use]
    pub const fn revision(mut self, revision: u8) -> Self {
        self.revision = revision;
        self
    }

    /// Sets the raw control word.
    #[must_use]
    pub const fn control(mut self, control: u16) -> Self {
        self.control = Some(control);
        self
    }

    /// Sets the owner SID.
    #[must_use]
    pub fn owner(mut self, sid: &str) -> Self {
        self.owner = Some(sid_bytes(sid));
        self
    }

    /// Sets the primary group SID.
    #[must_use]
    pub fn group(mut self, sid: &str) -> Self {
        self.group = Some(sid_bytes(sid));
        self
    }

    /// Sets the encoded system ACL.
    #[must_use]
    pub fn sacl(mut self, acl: Vec<u8>) -> Self {
        self.sacl = Some(acl);
        self
    }

    /// Sets the encoded discretionary ACL.
    #[must_use]
    pub fn dacl(mut self, acl: Vec<u8>) -> Self {
        self.dacl = Some(acl);
        self
    }

    /// Lays out the descriptor.
    ///
    /// # Panics
    ///
    /// Panics when an offset does not fit 32 bits.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut derived = control::SELF_RELATIVE;
        if self.sacl.is_some() {
            derived |= control::SACL_PRESENT;
        }
        if self.dacl.is_some() {
            derived |= control::DACL_PRESENT;
        }
        let control = self.control.unwrap_or(derived);

        let mut body = Vec::new();
        let mut offsets = [0u32; 4];
        let components = [&self.owner, &self.group, &self.sacl, &self.dacl];
        for (slot, component) in offsets.iter_mut().zip(components) {
            if let Some(bytes) = component {
                *slot = u32::try_from(20 + body.len()).expect("descriptor exceeds 4 GiB");
                body.extend_from_slice(bytes);
            }
        }

        let mut bytes = vec![self.revision, 0];
        bytes.extend_from_slice(&control.to_le_bytes());
        for offset in offsets {
            bytes.extend_from_slice(&offset.to_le_bytes());
        }
        bytes.extend_from_slice(&body);
        bytes
    }
}
