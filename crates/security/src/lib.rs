#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Decoders for the binary access-control structures stored in Active
//! Directory's `nTSecurityDescriptor` attribute.
//!
//! Three layers are provided, each usable on its own:
//!
//! - [`Ace::decode`] parses one Access Control Entry: header, big-endian access
//!   mask, optional object-type GUIDs, the trustee [`Sid`] and, for callback
//!   types, trailing application data.
//! - [`Acl::decode`] parses the eight-byte list header and then the declared
//!   number of entries, advancing by each entry's declared size.
//! - [`SecurityDescriptor::decode`] parses the self-relative descriptor header
//!   and the owner, group, SACL and DACL it points at.
//!
//! Decoding is read-only and all-or-nothing: a call either returns a complete
//! immutable value or a [`DecodeError`] whose [`kind`](DecodeError::kind) is
//! [`DecodeErrorKind::MalformedStructure`] or
//! [`DecodeErrorKind::UnrecognizedDiscriminant`]. [`DecodeOptions`] tightens the
//! default tolerance for size fields that disagree with their content.
//!
//! # Examples
//!
//! ```
//! use security::{AccessRight, AceType, Acl};
//!
//! let bytes = [
//!     2, 0, 28, 0, 1, 0, 0, 0, // ACL header: revision 2, size 28, one entry
//!     0, 0, 20, 0, // ACCESS_ALLOWED, no flags, 20 bytes
//!     0x00, 0x1F, 0x01, 0xFF, // access mask (big-endian)
//!     1, 1, 0, 0, 0, 0, 0, 5, 18, 0, 0, 0, // S-1-5-18
//! ];
//!
//! let acl = Acl::decode(&bytes).unwrap();
//! let ace = &acl.aces()[0];
//!
//! assert_eq!(ace.ace_type(), AceType::AccessAllowed);
//! assert!(ace.rights().contains(AccessRight::DsControlAccess));
//! assert_eq!(ace.trustee().to_string(), "S-1-5-18");
//! assert_eq!(acl.consumed_len(), bytes.len());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` for every decoded value.
//! - `tracing`: structured decode events under the `adsec::acl`, `adsec::ace`
//!   and `adsec::sd` targets.

mod ace;
mod acl;
mod debug_trace;
mod descriptor;
mod error;
mod flag_set;
mod guid;
mod options;
mod reader;

pub use ace::{
    ACE_HEADER_LEN, AccessRight, AccessRights, Ace, AceFlag, AceFlags, AceType, MIN_ACE_LEN,
    ObjectAceFlag, ObjectAceFlags,
};
pub use acl::{ACL_HEADER_LEN, Acl, AclRevision};
pub use descriptor::{ControlFlag, DESCRIPTOR_HEADER_LEN, DescriptorControl, SecurityDescriptor};
pub use error::{DecodeError, DecodeErrorKind, DescriptorComponent};
pub use guid::{GUID_LEN, Guid, ParseGuidError};
pub use options::{DecodeOptions, SizePolicy};
pub use sid::{ParseSidError, Sid, SidError};
