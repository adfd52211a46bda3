//! crates/logging/src/tracing_macros.rs
//! Convenience macros for decoder tracing.
//!
//! Each macro forwards to `tracing::debug!` with the target of one decoder
//! layer. The calling crate must depend on `tracing`.

/// Emit an ACL-level debug event under `adsec::acl`.
///
/// # Example
/// ```ignore
/// trace_acl!(revision = 4, ace_count = 12, "acl: header decoded");
/// ```
#[macro_export]
macro_rules! trace_acl {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "adsec::acl", $($arg)*);
    };
}

/// Emit an ACE-level debug event under `adsec::ace`.
///
/// # Example
/// ```ignore
/// trace_ace!(declared = 24, consumed = 20, "ace: skipping slack");
/// ```
#[macro_export]
macro_rules! trace_ace {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "adsec::ace", $($arg)*);
    };
}

/// Emit a security-descriptor debug event under `adsec::sd`.
///
/// # Example
/// ```ignore
/// trace_sd!(revision = 1, "sd: header decoded");
/// ```
#[macro_export]
macro_rules! trace_sd {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "adsec::sd", $($arg)*);
    };
}

#[cfg(test)]
mod tests {
    use crate::{ACE_TARGET, ACL_TARGET, SD_TARGET, TARGET_PREFIX};

    #[test]
    fn targets_share_prefix() {
        for target in [ACL_TARGET, ACE_TARGET, SD_TARGET] {
            assert!(target.starts_with(TARGET_PREFIX));
            assert_eq!(&target[TARGET_PREFIX.len()..TARGET_PREFIX.len() + 2], "::");
        }
    }

    #[test]
    fn macros_expand_without_subscriber() {
        trace_acl!(ace_count = 1u16, "acl: header decoded");
        trace_ace!(declared = 24usize, consumed = 20usize, "ace: skipping slack");
        trace_sd!("sd: header decoded");
    }
}
