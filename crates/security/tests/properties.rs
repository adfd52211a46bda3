use proptest::prelude::*;
use security::{AccessRights, Ace, AceType, Acl, SecurityDescriptor, Sid};
use test_support::{AceBuilder, AclBuilder};

#[derive(Clone, Debug)]
struct EntryShape {
    ace_type: u8,
    flags: u8,
    mask: u32,
    object_flags: u32,
    object_type: [u8; 16],
    inherited_object_type: [u8; 16],
    sid: Sid,
    trailing: Vec<u8>,
}

impl EntryShape {
    fn build(&self) -> Vec<u8> {
        let mut builder = AceBuilder::new(self.ace_type, "S-1-0-0")
            .flags(self.flags)
            .mask(self.mask)
            .object_flags(self.object_flags)
            .trustee_bytes(&self.sid.to_bytes_le())
            .trailing(&self.trailing);
        if self.object_flags & 0x1 != 0 {
            builder = builder.object_type(self.object_type);
        }
        if self.object_flags & 0x2 != 0 {
            builder = builder.inherited_object_type(self.inherited_object_type);
        }
        builder.build()
    }
}

fn sid_strategy() -> impl Strategy<Value = Sid> {
    (
        0u64..=0xFFFF_FFFF_FFFF,
        proptest::collection::vec(any::<u32>(), 0..=15),
    )
        .prop_map(|(authority, subs)| Sid::new(1, authority, subs))
}

fn entry_strategy() -> impl Strategy<Value = EntryShape> {
    (
        0u8..20,
        any::<u8>(),
        any::<u32>(),
        any::<u32>(),
        any::<[u8; 16]>(),
        any::<[u8; 16]>(),
        sid_strategy(),
        proptest::collection::vec(any::<u8>(), 0..32),
    )
        .prop_map(
            |(ace_type, flags, mask, object_flags, object_type, inherited, sid, trailing)| {
                EntryShape {
                    ace_type,
                    flags,
                    mask,
                    object_flags,
                    object_type,
                    inherited_object_type: inherited,
                    sid,
                    trailing,
                }
            },
        )
}

proptest! {
    #[test]
    fn declared_size_is_reported_exactly(shape in entry_strategy()) {
        let bytes = shape.build();
        let ace = Ace::decode(&bytes).unwrap();
        prop_assert_eq!(usize::from(ace.size()), bytes.len());
        prop_assert_eq!(ace.trustee(), &shape.sid);
    }

    #[test]
    fn guids_present_iff_bits_set(shape in entry_strategy()) {
        let bytes = shape.build();
        let ace = Ace::decode(&bytes).unwrap();

        if ace.ace_type().is_object() {
            prop_assert_eq!(ace.object_type().is_some(), shape.object_flags & 0x1 != 0);
            prop_assert_eq!(ace.inherited_object_type().is_some(), shape.object_flags & 0x2 != 0);
            prop_assert_eq!(ace.object_flags().map(|f| f.as_raw()), Some(shape.object_flags));
        } else {
            prop_assert!(ace.object_type().is_none());
            prop_assert!(ace.inherited_object_type().is_none());
            prop_assert!(ace.object_flags().is_none());
        }
    }

    #[test]
    fn application_data_only_for_carrying_types(shape in entry_strategy()) {
        let bytes = shape.build();
        let ace = Ace::decode(&bytes).unwrap();

        if ace.ace_type().carries_application_data() {
            prop_assert_eq!(ace.application_data(), Some(shape.trailing.as_slice()));
        } else {
            prop_assert_eq!(ace.application_data(), None);
        }
    }

    #[test]
    fn rights_are_exactly_the_named_mask_bits(mask in any::<u32>()) {
        let rights = AccessRights::from_raw(mask);
        let rebuilt = rights.iter().fold(0u32, |acc, right| acc | right.bits());

        prop_assert_eq!(rebuilt, mask & AccessRights::KNOWN_BITS);
        prop_assert_eq!(rights.len(), rebuilt.count_ones() as usize);
        prop_assert_eq!(rebuilt | rights.unknown_bits(), mask);
    }

    #[test]
    fn acl_consumes_header_plus_entry_sizes(shapes in proptest::collection::vec(entry_strategy(), 0..8)) {
        let mut builder = AclBuilder::new();
        for shape in &shapes {
            builder = builder.ace(shape.build());
        }
        let bytes = builder.build();

        let acl = Acl::decode(&bytes).unwrap();
        prop_assert_eq!(acl.len(), shapes.len());
        prop_assert_eq!(acl.consumed_len(), bytes.len());
        for (ace, shape) in acl.iter().zip(&shapes) {
            prop_assert_eq!(ace.ace_type().as_u8(), shape.ace_type);
            prop_assert_eq!(ace.mask(), shape.mask);
        }
    }

    #[test]
    fn unknown_type_codes_are_always_rejected(code in 20u8..=255, shape in entry_strategy()) {
        let mut bytes = shape.build();
        bytes[0] = code;
        prop_assert_eq!(AceType::from_u8(code), None);
        prop_assert_eq!(Ace::decode(&bytes).unwrap_err().unrecognized_value(), Some(code));
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = Ace::decode(&bytes);
        let _ = Acl::decode(&bytes);
        let _ = SecurityDescriptor::decode(&bytes);
    }

    #[test]
    fn truncating_a_valid_entry_always_fails(shape in entry_strategy(), cut in any::<prop::sample::Index>()) {
        let bytes = shape.build();
        let len = cut.index(bytes.len());
        prop_assert!(Ace::decode(&bytes[..len]).is_err());
    }
}
