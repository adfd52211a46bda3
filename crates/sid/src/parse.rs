//! Parsing of the textual `S-R-I-S-S...` representation.

use std::str::FromStr;

use crate::error::{ParseSidError, ParseSidErrorKind};
use crate::{MAX_SUB_AUTHORITIES, Sid};

/// Upper bound of the 48-bit identifier authority.
const MAX_IDENTIFIER_AUTHORITY: u64 = 0xFFFF_FFFF_FFFF;

impl FromStr for Sid {
    type Err = ParseSidError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = |kind| ParseSidError::new(kind, input);

        let mut parts = input.trim().split('-');
        if !matches!(parts.next(), Some("S" | "s")) {
            return Err(error(ParseSidErrorKind::MissingPrefix));
        }

        let revision = match parts.next() {
            Some(part) if !part.is_empty() => part
                .parse::<u8>()
                .map_err(|_| error(ParseSidErrorKind::InvalidNumber))?,
            _ => return Err(error(ParseSidErrorKind::MissingComponent)),
        };

        let identifier_authority = match parts.next() {
            Some(part) if !part.is_empty() => parse_authority(part)
                .filter(|value| *value <= MAX_IDENTIFIER_AUTHORITY)
                .ok_or_else(|| error(ParseSidErrorKind::InvalidNumber))?,
            _ => return Err(error(ParseSidErrorKind::MissingComponent)),
        };

        let mut sub_authorities = Vec::new();
        for part in parts {
            if sub_authorities.len() == MAX_SUB_AUTHORITIES {
                return Err(error(ParseSidErrorKind::TooManySubAuthorities));
            }
            let value = part
                .parse::<u32>()
                .map_err(|_| error(ParseSidErrorKind::InvalidNumber))?;
            sub_authorities.push(value);
        }

        Ok(Self::new(revision, identifier_authority, sub_authorities))
    }
}

fn parse_authority(part: &str) -> Option<u64> {
    match part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => part.parse::<u64>().ok(),
    }
}
