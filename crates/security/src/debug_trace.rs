//! Structured tracing for decode operations.
//!
//! All events are compiled only with the `tracing` feature; without it every
//! helper is an inline no-op so the decoders stay free of logging overhead.

#[cfg(feature = "tracing")]
use logging::{ACE_TARGET, ACL_TARGET, SD_TARGET};

use crate::ace::{Ace, ObjectAceFlags};
use crate::descriptor::DescriptorControl;
use crate::error::DescriptorComponent;

/// Traces a decoded ACL header.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_acl_header(revision: u8, declared_size: u16, ace_count: u16) {
    logging::trace_acl!(
        revision = revision,
        declared_size = declared_size,
        ace_count = ace_count,
        "acl: header decoded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_acl_header(_revision: u8, _declared_size: u16, _ace_count: u16) {}

/// Traces one entry of an ACL after it decoded successfully.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_acl_entry(index: u16, offset: usize, ace: &Ace) {
    tracing::trace!(
        target: ACL_TARGET,
        index = index,
        offset = offset,
        ace_type = %ace.ace_type(),
        size = ace.size(),
        trustee = %ace.trustee(),
        "acl: entry decoded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_acl_entry(_index: u16, _offset: usize, _ace: &Ace) {}

/// Traces the presence bits of an object ACE.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_object_flags(flags: ObjectAceFlags) {
    tracing::trace!(
        target: ACE_TARGET,
        object_flags = flags.as_raw(),
        "ace: object flags"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_object_flags(_flags: ObjectAceFlags) {}

/// Traces the bytes an entry leaves unaccounted for after its trustee.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_ace_tail(declared: usize, consumed: usize, application_data: bool) {
    if application_data {
        tracing::trace!(
            target: ACE_TARGET,
            length = declared - consumed,
            "ace: application data captured"
        );
    } else if declared != consumed {
        logging::trace_ace!(
            declared = declared,
            consumed = consumed,
            "ace: skipping slack after trustee"
        );
    }
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_ace_tail(_declared: usize, _consumed: usize, _application_data: bool) {}

/// Traces a decoded security descriptor header.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_descriptor_header(revision: u8, control: DescriptorControl) {
    logging::trace_sd!(revision = revision, control = %control, "sd: header decoded");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_descriptor_header(_revision: u8, _control: DescriptorControl) {}

/// Traces the location of a descriptor component about to be decoded.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_descriptor_component(component: DescriptorComponent, offset: usize) {
    tracing::trace!(
        target: SD_TARGET,
        component = %component,
        offset = offset,
        "sd: decoding component"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_descriptor_component(_component: DescriptorComponent, _offset: usize) {}
