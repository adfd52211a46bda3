use crate::flag_set::named_flags;

named_flags! {
    /// Inheritance and audit flag from the ACE header.
    pub enum AceFlag;
    /// Set of [`AceFlag`]s decoded from the one-byte header field.
    pub struct AceFlags(u8);
    {
        /// Non-container child objects inherit the entry.
        ObjectInherit = 0x01, "OBJECT_INHERIT";
        /// Container child objects inherit the entry.
        ContainerInherit = 0x02, "CONTAINER_INHERIT";
        /// Inheritance stops after one level.
        NoPropagateInherit = 0x04, "NO_PROPAGATE_INHERIT";
        /// The entry only affects children, not the object itself.
        InheritOnly = 0x08, "INHERIT_ONLY";
        /// The entry was inherited from a parent.
        Inherited = 0x10, "INHERITED";
        /// Audit successful access attempts.
        SuccessfulAccess = 0x40, "SUCCESSFUL_ACCESS";
        /// Audit failed access attempts.
        FailedAccess = 0x80, "FAILED_ACCESS";
    }
}

impl AceFlags {
    /// Returns `true` when the entry propagates to any kind of child.
    #[must_use]
    pub const fn is_inheritable(self) -> bool {
        self.contains(AceFlag::ObjectInherit) || self.contains(AceFlag::ContainerInherit)
    }
}
