//! 128-bit object type identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Encoded size of a GUID.
pub const GUID_LEN: usize = 16;

/// A GUID identifying a schema class, attribute, property set or extended right.
///
/// The value is held in canonical (RFC 4122, big-endian) byte order. Security
/// descriptors store GUIDs in the mixed-endian "bytes_le" layout where the
/// first three fields are little-endian; [`Guid::from_bytes_le`] converts.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Guid([u8; GUID_LEN]);

impl Guid {
    /// The all-zero GUID.
    pub const NIL: Self = Self([0; GUID_LEN]);

    /// Wraps bytes that are already in canonical order.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; GUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Converts from the mixed-endian layout used on the wire.
    #[must_use]
    pub const fn from_bytes_le(b: [u8; GUID_LEN]) -> Self {
        Self([
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15],
        ])
    }

    /// Returns the canonical byte order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; GUID_LEN] {
        &self.0
    }

    /// Returns the mixed-endian wire layout.
    #[must_use]
    pub const fn to_bytes_le(self) -> [u8; GUID_LEN] {
        // The field swap is its own inverse.
        Self::from_bytes_le(self.0).0
    }

    /// Returns `true` for the all-zero GUID.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if matches!(index, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

/// Error returned when a GUID string is not in `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("string {input:?} is not a valid GUID")]
pub struct ParseGuidError {
    input: String,
}

impl FromStr for Guid {
    type Err = ParseGuidError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = || ParseGuidError {
            input: input.to_owned(),
        };

        let trimmed = input
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(input);

        let groups: Vec<&str> = trimmed.split('-').collect();
        if groups.iter().map(|group| group.len()).ne([8, 4, 4, 4, 12]) {
            return Err(error());
        }

        let digits: String = groups.concat();
        if !digits.bytes().all(|digit| digit.is_ascii_hexdigit()) {
            return Err(error());
        }

        let mut bytes = [0u8; GUID_LEN];
        for (byte, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
            *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }

        Ok(Self(bytes))
    }
}

const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Guid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bf967aba-0de6-11d0-a285-00aa003049e2 (the "user" schema class)
    const USER_CLASS_LE: [u8; GUID_LEN] = [
        0xba, 0x7a, 0x96, 0xbf, 0xe6, 0x0d, 0xd0, 0x11, 0xa2, 0x85, 0x00, 0xaa, 0x00, 0x30, 0x49,
        0xe2,
    ];

    #[test]
    fn decodes_mixed_endian_layout() {
        let guid = Guid::from_bytes_le(USER_CLASS_LE);
        assert_eq!(guid.to_string(), "bf967aba-0de6-11d0-a285-00aa003049e2");
        assert_eq!(guid.to_bytes_le(), USER_CLASS_LE);
    }

    #[test]
    fn parses_canonical_and_braced_forms() {
        let expected = Guid::from_bytes_le(USER_CLASS_LE);
        assert_eq!(
            "bf967aba-0de6-11d0-a285-00aa003049e2".parse::<Guid>().unwrap(),
            expected
        );
        assert_eq!(
            "{BF967ABA-0DE6-11D0-A285-00AA003049E2}".parse::<Guid>().unwrap(),
            expected
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        for input in [
            "",
            "bf967aba0de611d0a28500aa003049e2",
            "bf967aba-0de6-11d0-a285-00aa003049e",
            "zf967aba-0de6-11d0-a285-00aa003049e2",
            "bf967aba-0de6-11d0-a285-00aa003049e2-00",
            "+f967aba-0de6-11d0-a285-00aa003049e2",
        ] {
            assert!(input.parse::<Guid>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn nil_guid() {
        assert!(Guid::NIL.is_nil());
        assert!(Guid::default().is_nil());
        assert_eq!(
            Guid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
