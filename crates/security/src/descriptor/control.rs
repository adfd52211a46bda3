use crate::flag_set::named_flags;

named_flags! {
    /// Bit of the security descriptor control word.
    pub enum ControlFlag;
    /// The 16-bit control word of a security descriptor.
    pub struct DescriptorControl(u16);
    {
        /// The owner SID was provided by a defaulting mechanism.
        OwnerDefaulted = 0x0001, "OWNER_DEFAULTED";
        /// The group SID was provided by a defaulting mechanism.
        GroupDefaulted = 0x0002, "GROUP_DEFAULTED";
        /// A DACL is present.
        DaclPresent = 0x0004, "DACL_PRESENT";
        /// The DACL was provided by a defaulting mechanism.
        DaclDefaulted = 0x0008, "DACL_DEFAULTED";
        /// A SACL is present.
        SaclPresent = 0x0010, "SACL_PRESENT";
        /// The SACL was provided by a defaulting mechanism.
        SaclDefaulted = 0x0020, "SACL_DEFAULTED";
        /// The DACL was supplied by a trusted source.
        DaclTrusted = 0x0040, "DACL_TRUSTED";
        /// Server security is in effect.
        ServerSecurity = 0x0080, "SERVER_SECURITY";
        /// DACL inheritance must be recomputed.
        DaclComputedInheritanceRequired = 0x0100, "DACL_COMPUTED_INHERITANCE_REQUIRED";
        /// SACL inheritance must be recomputed.
        SaclComputedInheritanceRequired = 0x0200, "SACL_COMPUTED_INHERITANCE_REQUIRED";
        /// The DACL was built with automatic inheritance.
        DaclAutoInherited = 0x0400, "DACL_AUTO_INHERITED";
        /// The SACL was built with automatic inheritance.
        SaclAutoInherited = 0x0800, "SACL_AUTO_INHERITED";
        /// The DACL does not inherit from the parent.
        DaclProtected = 0x1000, "DACL_PROTECTED";
        /// The SACL does not inherit from the parent.
        SaclProtected = 0x2000, "SACL_PROTECTED";
        /// The resource manager control bits are valid.
        RmControlValid = 0x4000, "RM_CONTROL_VALID";
        /// The descriptor is stored in self-relative form.
        SelfRelative = 0x8000, "SELF_RELATIVE";
    }
}

impl DescriptorControl {
    /// Returns `true` when the owner SID came from a defaulting mechanism.
    #[must_use]
    pub const fn owner_defaulted(self) -> bool {
        self.contains(ControlFlag::OwnerDefaulted)
    }

    /// Returns `true` when the group SID came from a defaulting mechanism.
    #[must_use]
    pub const fn group_defaulted(self) -> bool {
        self.contains(ControlFlag::GroupDefaulted)
    }

    /// Returns `true` when the descriptor carries a DACL.
    #[must_use]
    pub const fn dacl_present(self) -> bool {
        self.contains(ControlFlag::DaclPresent)
    }

    /// Returns `true` if `DACL_DEFAULTED` is set.
    #[must_use]
    pub const fn dacl_defaulted(self) -> bool {
        self.contains(ControlFlag::DaclDefaulted)
    }

    /// Returns `true` when the descriptor carries a SACL.
    #[must_use]
    pub const fn sacl_present(self) -> bool {
        self.contains(ControlFlag::SaclPresent)
    }

    /// Returns `true` if `SACL_DEFAULTED` is set.
    #[must_use]
    pub const fn sacl_defaulted(self) -> bool {
        self.contains(ControlFlag::SaclDefaulted)
    }

    /// Returns `true` if `DACL_TRUSTED` is set.
    #[must_use]
    pub const fn dacl_trusted(self) -> bool {
        self.contains(ControlFlag::DaclTrusted)
    }

    /// Returns `true` if `SERVER_SECURITY` is set.
    #[must_use]
    pub const fn server_security(self) -> bool {
        self.contains(ControlFlag::ServerSecurity)
    }

    /// Returns `true` if `DACL_COMPUTED_INHERITANCE_REQUIRED` is set.
    #[must_use]
    pub const fn dacl_computed_inheritance_required(self) -> bool {
        self.contains(ControlFlag::DaclComputedInheritanceRequired)
    }

    /// Returns `true` if `SACL_COMPUTED_INHERITANCE_REQUIRED` is set.
    #[must_use]
    pub const fn sacl_computed_inheritance_required(self) -> bool {
        self.contains(ControlFlag::SaclComputedInheritanceRequired)
    }

    /// Returns `true` if `DACL_AUTO_INHERITED` is set.
    #[must_use]
    pub const fn dacl_auto_inherited(self) -> bool {
        self.contains(ControlFlag::DaclAutoInherited)
    }

    /// Returns `true` if `SACL_AUTO_INHERITED` is set.
    #[must_use]
    pub const fn sacl_auto_inherited(self) -> bool {
        self.contains(ControlFlag::SaclAutoInherited)
    }

    /// Returns `true` when the DACL is protected from inheritance.
    #[must_use]
    pub const fn dacl_protected(self) -> bool {
        self.contains(ControlFlag::DaclProtected)
    }

    /// Returns `true` when the SACL is protected from inheritance.
    #[must_use]
    pub const fn sacl_protected(self) -> bool {
        self.contains(ControlFlag::SaclProtected)
    }

    /// Returns `true` if `RM_CONTROL_VALID` is set.
    #[must_use]
    pub const fn rm_control_valid(self) -> bool {
        self.contains(ControlFlag::RmControlValid)
    }

    /// Returns `true` for a self-relative descriptor, the only form stored in
    /// the directory.
    #[must_use]
    pub const fn self_relative(self) -> bool {
        self.contains(ControlFlag::SelfRelative)
    }
}
