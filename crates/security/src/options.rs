//! Decoder configuration.

/// How the declared size of an ACE relates to the fields decoded from it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SizePolicy {
    /// The declared size is authoritative. Bytes between the trustee and the
    /// declared end of a non-callback entry are treated as slack and skipped.
    #[default]
    Trust,
    /// The declared size must equal the bytes occupied by the decoded fields;
    /// any slack is reported as [`DecodeError::SizeMismatch`](crate::DecodeError::SizeMismatch).
    Strict,
}

/// Options accepted by the `*_with_options` decode entry points.
///
/// The defaults reproduce the behaviour of the plain `decode` functions.
///
/// ```
/// use security::{DecodeOptions, SizePolicy};
///
/// let options = DecodeOptions::new()
///     .with_size_policy(SizePolicy::Strict)
///     .with_acl_size_check(true);
///
/// assert_eq!(options.size_policy(), SizePolicy::Strict);
/// assert!(options.checks_acl_size());
/// assert_eq!(DecodeOptions::strict(), options);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DecodeOptions {
    size_policy: SizePolicy,
    check_acl_size: bool,
}

impl DecodeOptions {
    /// Returns the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size_policy: SizePolicy::Trust,
            check_acl_size: false,
        }
    }

    /// Returns options with every consistency check enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new()
            .with_size_policy(SizePolicy::Strict)
            .with_acl_size_check(true)
    }

    /// Selects how declared ACE sizes are validated.
    #[must_use]
    pub const fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self
    }

    /// Requires the ACL header plus its entries to fit in the ACL's declared size.
    #[must_use]
    pub const fn with_acl_size_check(mut self, enabled: bool) -> Self {
        self.check_acl_size = enabled;
        self
    }

    /// Returns the configured [`SizePolicy`].
    #[must_use]
    pub const fn size_policy(self) -> SizePolicy {
        self.size_policy
    }

    /// Returns `true` when the ACL size check is enabled.
    #[must_use]
    pub const fn checks_acl_size(self) -> bool {
        self.check_acl_size
    }
}
