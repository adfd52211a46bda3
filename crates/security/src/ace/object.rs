use crate::flag_set::named_flags;

named_flags! {
    /// Presence bit of the object-flags word carried by object ACEs.
    pub enum ObjectAceFlag;
    /// Set of [`ObjectAceFlag`]s decoded from the four-byte object-flags field.
    pub struct ObjectAceFlags(u32);
    {
        /// The object type GUID follows.
        ObjectTypePresent = 0x1, "OBJECT_TYPE_PRESENT";
        /// The inherited object type GUID follows.
        InheritedObjectTypePresent = 0x2, "INHERITED_OBJECT_TYPE_PRESENT";
    }
}

impl ObjectAceFlags {
    /// Returns `true` when the object type GUID is present.
    #[must_use]
    #[inline]
    pub const fn object_type_present(self) -> bool {
        self.contains(ObjectAceFlag::ObjectTypePresent)
    }

    /// Returns `true` when the inherited object type GUID is present.
    #[must_use]
    #[inline]
    pub const fn inherited_object_type_present(self) -> bool {
        self.contains(ObjectAceFlag::InheritedObjectTypePresent)
    }
}
