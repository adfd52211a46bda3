use std::fmt;

use crate::error::DecodeError;

/// Entry type code from the ACE header.
///
/// The type determines which optional fields follow the access mask: object
/// types carry an object-flags word and up to two GUIDs, and the callback types
/// (together with [`AceType::SystemAuditObject`]) carry trailing application data.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum AceType {
    /// Grants access.
    AccessAllowed = 0,
    /// Denies access.
    AccessDenied = 1,
    /// Generates an audit record.
    SystemAudit = 2,
    /// Generates an alarm (reserved).
    SystemAlarm = 3,
    /// Grants access to a compound (server impersonation) trustee.
    AccessAllowedCompound = 4,
    /// Grants access scoped to an object type.
    AccessAllowedObject = 5,
    /// Denies access scoped to an object type.
    AccessDeniedObject = 6,
    /// Audits access scoped to an object type.
    SystemAuditObject = 7,
    /// Alarm scoped to an object type (reserved).
    SystemAlarmObject = 8,
    /// Grants access, with application data.
    AccessAllowedCallback = 9,
    /// Denies access, with application data.
    AccessDeniedCallback = 10,
    /// Grants object-scoped access, with application data.
    AccessAllowedCallbackObject = 11,
    /// Denies object-scoped access, with application data.
    AccessDeniedCallbackObject = 12,
    /// Audits access, with application data.
    SystemAuditCallback = 13,
    /// Alarm with application data (reserved).
    SystemAlarmCallback = 14,
    /// Audits object-scoped access, with application data.
    SystemAuditCallbackObject = 15,
    /// Object-scoped alarm with application data (reserved).
    SystemAlarmCallbackObject = 16,
    /// Mandatory integrity label.
    SystemMandatoryLabel = 17,
    /// Resource attribute claim.
    SystemResourceAttribute = 18,
    /// Central access policy identifier.
    SystemScopedPolicyId = 19,
}

impl AceType {
    /// Every known entry type, ordered by type code.
    pub const ALL: [Self; 20] = [
        Self::AccessAllowed,
        Self::AccessDenied,
        Self::SystemAudit,
        Self::SystemAlarm,
        Self::AccessAllowedCompound,
        Self::AccessAllowedObject,
        Self::AccessDeniedObject,
        Self::SystemAuditObject,
        Self::SystemAlarmObject,
        Self::AccessAllowedCallback,
        Self::AccessDeniedCallback,
        Self::AccessAllowedCallbackObject,
        Self::AccessDeniedCallbackObject,
        Self::SystemAuditCallback,
        Self::SystemAlarmCallback,
        Self::SystemAuditCallbackObject,
        Self::SystemAlarmCallbackObject,
        Self::SystemMandatoryLabel,
        Self::SystemResourceAttribute,
        Self::SystemScopedPolicyId,
    ];

    /// Maps a type code to its entry type.
    #[must_use]
    pub const fn from_u8(code: u8) -> Option<Self> {
        if (code as usize) < Self::ALL.len() {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Returns the type code used on the wire.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the eight object types, which carry an object-flags
    /// word and optional object-type GUIDs.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(
            self,
            Self::AccessAllowedObject
                | Self::AccessDeniedObject
                | Self::SystemAuditObject
                | Self::SystemAlarmObject
                | Self::AccessAllowedCallbackObject
                | Self::AccessDeniedCallbackObject
                | Self::SystemAuditCallbackObject
                | Self::SystemAlarmCallbackObject
        )
    }

    /// Returns `true` for the types whose bytes after the trustee, up to the
    /// declared size, are captured as application data.
    #[must_use]
    pub const fn carries_application_data(self) -> bool {
        matches!(
            self,
            Self::AccessAllowedCallback
                | Self::AccessDeniedCallback
                | Self::AccessAllowedCallbackObject
                | Self::AccessDeniedCallbackObject
                | Self::SystemAuditObject
                | Self::SystemAuditCallback
        )
    }

    /// Returns `true` for types that grant access.
    #[must_use]
    pub const fn is_allow(self) -> bool {
        matches!(
            self,
            Self::AccessAllowed
                | Self::AccessAllowedCompound
                | Self::AccessAllowedObject
                | Self::AccessAllowedCallback
                | Self::AccessAllowedCallbackObject
        )
    }

    /// Returns `true` for types that deny access.
    #[must_use]
    pub const fn is_deny(self) -> bool {
        matches!(
            self,
            Self::AccessDenied
                | Self::AccessDeniedObject
                | Self::AccessDeniedCallback
                | Self::AccessDeniedCallbackObject
        )
    }

    /// Returns the canonical upper-case name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccessAllowed => "ACCESS_ALLOWED",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::SystemAudit => "SYSTEM_AUDIT",
            Self::SystemAlarm => "SYSTEM_ALARM",
            Self::AccessAllowedCompound => "ACCESS_ALLOWED_COMPOUND",
            Self::AccessAllowedObject => "ACCESS_ALLOWED_OBJECT",
            Self::AccessDeniedObject => "ACCESS_DENIED_OBJECT",
            Self::SystemAuditObject => "SYSTEM_AUDIT_OBJECT",
            Self::SystemAlarmObject => "SYSTEM_ALARM_OBJECT",
            Self::AccessAllowedCallback => "ACCESS_ALLOWED_CALLBACK",
            Self::AccessDeniedCallback => "ACCESS_DENIED_CALLBACK",
            Self::AccessAllowedCallbackObject => "ACCESS_ALLOWED_CALLBACK_OBJECT",
            Self::AccessDeniedCallbackObject => "ACCESS_DENIED_CALLBACK_OBJECT",
            Self::SystemAuditCallback => "SYSTEM_AUDIT_CALLBACK",
            Self::SystemAlarmCallback => "SYSTEM_ALARM_CALLBACK",
            Self::SystemAuditCallbackObject => "SYSTEM_AUDIT_CALLBACK_OBJECT",
            Self::SystemAlarmCallbackObject => "SYSTEM_ALARM_CALLBACK_OBJECT",
            Self::SystemMandatoryLabel => "SYSTEM_MANDATORY_LABEL",
            Self::SystemResourceAttribute => "SYSTEM_RESOURCE_ATTRIBUTE",
            Self::SystemScopedPolicyId => "SYSTEM_SCOPED_POLICY_ID",
        }
    }
}

impl TryFrom<u8> for AceType {
    type Error = DecodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u8(code).ok_or(DecodeError::UnknownAceType(code))
    }
}

impl From<AceType> for u8 {
    #[inline]
    fn from(ace_type: AceType) -> Self {
        ace_type.as_u8()
    }
}

impl fmt::Display for AceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for (code, ace_type) in AceType::ALL.iter().enumerate() {
            assert_eq!(usize::from(ace_type.as_u8()), code);
            assert_eq!(AceType::try_from(code as u8).unwrap(), *ace_type);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            AceType::try_from(20).unwrap_err(),
            DecodeError::UnknownAceType(20)
        );
        assert_eq!(
            AceType::try_from(99).unwrap_err(),
            DecodeError::UnknownAceType(99)
        );
        assert_eq!(AceType::from_u8(u8::MAX), None);
    }

    #[test]
    fn exactly_eight_object_types() {
        let object: Vec<_> = AceType::ALL.iter().filter(|t| t.is_object()).collect();
        assert_eq!(object.len(), 8);
        assert!(object.iter().all(|t| t.name().ends_with("OBJECT")));
    }

    #[test]
    fn application_data_types() {
        let carrying: Vec<u8> = AceType::ALL
            .iter()
            .filter(|t| t.carries_application_data())
            .map(|t| t.as_u8())
            .collect();
        assert_eq!(carrying, vec![7, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn allow_and_deny_are_disjoint() {
        for ace_type in AceType::ALL {
            assert!(!(ace_type.is_allow() && ace_type.is_deny()), "{ace_type}");
        }
        assert!(AceType::AccessAllowedCallbackObject.is_allow());
        assert!(AceType::AccessDeniedObject.is_deny());
        assert!(!AceType::SystemAudit.is_allow());
    }

    #[test]
    fn displays_canonical_name() {
        assert_eq!(AceType::AccessAllowedObject.to_string(), "ACCESS_ALLOWED_OBJECT");
        assert_eq!(AceType::SystemScopedPolicyId.to_string(), "SYSTEM_SCOPED_POLICY_ID");
    }
}
