use super::*;
use crate::ace::AceType;
use crate::error::DecodeErrorKind;

const LOCAL_SYSTEM: [u8; 12] = [1, 1, 0, 0, 0, 0, 0, 5, 18, 0, 0, 0];
/// S-1-5-32-544 (BUILTIN\Administrators).
const ADMINISTRATORS: [u8; 16] = [1, 2, 0, 0, 0, 0, 0, 5, 32, 0, 0, 0, 0x20, 0x02, 0, 0];

fn acl_with_one_allow() -> Vec<u8> {
    let mut bytes = vec![2, 0, 28, 0, 1, 0, 0, 0];
    bytes.extend_from_slice(&[0, 0, 20, 0]);
    bytes.extend_from_slice(&0x000F_01FFu32.to_be_bytes());
    bytes.extend_from_slice(&LOCAL_SYSTEM);
    bytes
}

fn header(control: u16, offsets: [u32; 4]) -> Vec<u8> {
    let mut bytes = vec![1, 0];
    bytes.extend_from_slice(&control.to_le_bytes());
    for offset in offsets {
        bytes.extend_from_slice(&offset.to_le_bytes());
    }
    bytes
}

/// Owner at 20, group at 32, DACL at 48.
fn owner_group_dacl(control: u16) -> Vec<u8> {
    let mut bytes = header(control, [20, 32, 0, 48]);
    bytes.extend_from_slice(&LOCAL_SYSTEM);
    bytes.extend_from_slice(&ADMINISTRATORS);
    bytes.extend_from_slice(&acl_with_one_allow());
    bytes
}

#[test]
fn decodes_owner_group_and_dacl() {
    let bytes = owner_group_dacl(0x8004);
    let sd = SecurityDescriptor::decode(&bytes).unwrap();

    assert_eq!(sd.revision(), 1);
    assert_eq!(sd.sbz1(), 0);
    assert!(sd.control().self_relative());
    assert_eq!(sd.owner().unwrap(), "S-1-5-18");
    assert_eq!(sd.group().unwrap(), "S-1-5-32-544");
    assert!(sd.sacl().is_none());

    let dacl = sd.dacl().unwrap();
    assert_eq!(dacl.len(), 1);
    assert_eq!(dacl.aces()[0].ace_type(), AceType::AccessAllowed);
    assert_eq!(dacl.aces()[0].mask(), 0x000F_01FF);
}

#[test]
fn dacl_requires_present_bit() {
    let bytes = owner_group_dacl(0x8000);
    let sd = SecurityDescriptor::decode(&bytes).unwrap();

    assert!(sd.dacl().is_none());
    assert!(sd.owner().is_some());
}

#[test]
fn zero_offsets_mean_absent() {
    let bytes = header(0x8014, [0, 0, 0, 0]);
    let sd = SecurityDescriptor::decode(&bytes).unwrap();

    assert!(sd.owner().is_none());
    assert!(sd.group().is_none());
    assert!(sd.sacl().is_none());
    assert!(sd.dacl().is_none());
}

#[test]
fn decodes_sacl_when_present() {
    let mut audit = acl_with_one_allow();
    audit[8] = 2;
    audit[9] = 0xC0;
    let mut bytes = header(0x8010, [0, 0, 20, 0]);
    bytes.extend_from_slice(&audit);

    let sd = SecurityDescriptor::decode(&bytes).unwrap();
    let sacl = sd.sacl().unwrap();
    assert_eq!(sacl.aces()[0].ace_type(), AceType::SystemAudit);
    assert!(sd.dacl().is_none());
}

#[test]
fn revision_is_not_validated() {
    let mut bytes = header(0, [0, 0, 0, 0]);
    bytes[0] = 9;
    assert_eq!(SecurityDescriptor::decode(&bytes).unwrap().revision(), 9);
}

#[test]
fn short_header_is_truncated() {
    let bytes = header(0x8004, [20, 0, 0, 0]);
    let err = SecurityDescriptor::decode(&bytes[..14]).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Truncated {
            field: "SACL offset",
            offset: 12,
            ..
        }
    ));
}

#[test]
fn owner_offset_out_of_bounds() {
    let bytes = header(0x8000, [400, 0, 0, 0]);
    let err = SecurityDescriptor::decode(&bytes).unwrap_err();

    match &err {
        DecodeError::InDescriptor { component, source } => {
            assert_eq!(*component, DescriptorComponent::Owner);
            assert_eq!(
                **source,
                DecodeError::OffsetOutOfBounds {
                    offset: 400,
                    available: 20,
                }
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.kind(), DecodeErrorKind::MalformedStructure);
}

#[test]
fn truncated_group_sid_names_component() {
    let mut bytes = header(0x8000, [0, 20, 0, 0]);
    bytes.extend_from_slice(&ADMINISTRATORS[..10]);

    let err = SecurityDescriptor::decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InDescriptor {
            component: DescriptorComponent::Group,
            ..
        }
    ));
    assert!(matches!(err.root_cause(), DecodeError::Sid { offset: 20, .. }));
}

#[test]
fn dacl_failure_is_wrapped() {
    let mut bytes = owner_group_dacl(0x8004);
    bytes[48 + 8] = 99;

    let err = SecurityDescriptor::decode(&bytes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid DACL in security descriptor: invalid ACE 0 at offset 8: unknown ACE type 99"
    );
    assert_eq!(err.kind(), DecodeErrorKind::UnrecognizedDiscriminant);
}

#[test]
fn options_apply_to_acls() {
    let mut bytes = owner_group_dacl(0x8004);
    // Declare the DACL as header-only.
    bytes[48 + 2] = 8;

    assert!(SecurityDescriptor::decode(&bytes).is_ok());

    let options = DecodeOptions::new().with_acl_size_check(true);
    let err = SecurityDescriptor::decode_with_options(&bytes, options).unwrap_err();
    assert!(matches!(
        err.root_cause(),
        DecodeError::AclSizeExceeded {
            declared: 8,
            consumed: 28,
        }
    ));
}
