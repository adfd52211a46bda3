use crate::flag_set::named_flags;

named_flags! {
    /// Named access right of the 32-bit access mask.
    ///
    /// The directory-service specific rights (`DS_*`, `ACTRL_DS_LIST`) occupy
    /// the low 16 bits; standard and generic rights occupy the high bits.
    pub enum AccessRight;
    /// Set of [`AccessRight`]s derived from an access mask.
    pub struct AccessRights(u32);
    {
        /// Read access (mapped to object-specific read rights).
        GenericRead = 0x8000_0000, "GENERIC_READ";
        /// Write access (mapped to object-specific write rights).
        GenericWrite = 0x4000_0000, "GENERIC_WRITE";
        /// Execute access (mapped to object-specific execute rights).
        GenericExecute = 0x2000_0000, "GENERIC_EXECUTE";
        /// All possible access rights.
        GenericAll = 0x1000_0000, "GENERIC_ALL";
        /// Request the maximum rights the caller holds.
        MaximumAllowed = 0x0200_0000, "MAXIMUM_ALLOWED";
        /// Access to the system ACL.
        AccessSystemSecurity = 0x0100_0000, "ACCESS_SYSTEM_SECURITY";
        /// Use the object for synchronization.
        Synchronize = 0x0010_0000, "SYNCHRONIZE";
        /// Change the owner.
        WriteOwner = 0x0008_0000, "WRITE_OWNER";
        /// Modify the discretionary ACL.
        WriteDacl = 0x0004_0000, "WRITE_DACL";
        /// Read the security descriptor, excluding the system ACL.
        ReadControl = 0x0002_0000, "READ_CONTROL";
        /// Delete the object.
        Delete = 0x0001_0000, "DELETE";
        /// Perform an extended (control access) operation.
        DsControlAccess = 0x0000_0100, "DS_CONTROL_ACCESS";
        /// Create child objects.
        DsCreateChild = 0x0000_0001, "DS_CREATE_CHILD";
        /// Delete child objects.
        DsDeleteChild = 0x0000_0002, "DS_DELETE_CHILD";
        /// List child objects.
        ActrlDsList = 0x0000_0004, "ACTRL_DS_LIST";
        /// Validated write.
        DsSelf = 0x0000_0008, "DS_SELF";
        /// Read properties.
        DsReadProp = 0x0000_0010, "DS_READ_PROP";
        /// Write properties.
        DsWriteProp = 0x0000_0020, "DS_WRITE_PROP";
        /// Delete the subtree.
        DsDeleteTree = 0x0000_0040, "DS_DELETE_TREE";
        /// List the object.
        DsListObject = 0x0000_0080, "DS_LIST_OBJECT";
    }
}
