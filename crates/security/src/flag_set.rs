//! Declarative helper for closed sets of named bit flags.
//!
//! Several fields of a security descriptor are bitmasks whose individual bits
//! carry names (ACE flags, access rights, object-ACE presence bits, descriptor
//! control bits). [`named_flags!`] generates, for each of them:
//!
//! - a flag enum with one variant per named bit, exposing `bits()`, `name()`
//!   and an `ALL` table in declaration order;
//! - a `Copy` set type wrapping the raw wire value. Membership is answered
//!   against the raw value, so bits without a name survive decoding and remain
//!   visible through `as_raw()`/`unknown_bits()` while never appearing in
//!   `iter()`.

macro_rules! named_flags {
    (
        $(#[$flag_meta:meta])*
        $flag_vis:vis enum $flag:ident;
        $(#[$set_meta:meta])*
        $set_vis:vis struct $set:ident($raw:ty);
        {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $bits:expr, $name:literal;
            )+
        }
    ) => {
        $(#[$flag_meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        $flag_vis enum $flag {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "serde", serde(rename = $name))]
                $variant,
            )+
        }

        impl $flag {
            /// Every named flag, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the bit occupied by this flag.
            #[must_use]
            #[inline]
            pub const fn bits(self) -> $raw {
                match self {
                    $(Self::$variant => $bits,)+
                }
            }

            /// Returns the canonical upper-case name of this flag.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl ::core::fmt::Display for $flag {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        $(#[$set_meta])*
        #[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
        $set_vis struct $set($raw);

        impl $set {
            /// A set without members.
            pub const EMPTY: Self = Self(0);

            /// Union of every named bit.
            pub const KNOWN_BITS: $raw = $($bits)|+;

            /// Wraps a raw value as read from the wire.
            #[must_use]
            #[inline]
            pub const fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            /// Returns the raw value, including bits that carry no name.
            #[must_use]
            #[inline]
            pub const fn as_raw(self) -> $raw {
                self.0
            }

            /// Returns `true` if `flag` is set.
            #[must_use]
            #[inline]
            pub const fn contains(self, flag: $flag) -> bool {
                self.0 & flag.bits() != 0
            }

            /// Returns the set bits that do not correspond to a named flag.
            #[must_use]
            pub const fn unknown_bits(self) -> $raw {
                self.0 & !Self::KNOWN_BITS
            }

            /// Number of named flags that are set.
            #[must_use]
            pub const fn len(self) -> usize {
                (self.0 & Self::KNOWN_BITS).count_ones() as usize
            }

            /// Returns `true` when no named flag is set.
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 & Self::KNOWN_BITS == 0
            }

            /// Iterates over the named flags that are set, in declaration order.
            pub fn iter(self) -> impl Iterator<Item = $flag> {
                $flag::ALL
                    .iter()
                    .copied()
                    .filter(move |flag| self.contains(*flag))
            }
        }

        impl From<$flag> for $set {
            #[inline]
            fn from(flag: $flag) -> Self {
                Self(flag.bits())
            }
        }

        impl FromIterator<$flag> for $set {
            fn from_iter<I: IntoIterator<Item = $flag>>(iter: I) -> Self {
                Self(iter.into_iter().fold(0, |acc, flag| acc | flag.bits()))
            }
        }

        impl ::core::ops::BitOr<$flag> for $set {
            type Output = Self;

            #[inline]
            fn bitor(self, flag: $flag) -> Self {
                Self(self.0 | flag.bits())
            }
        }

        impl ::core::fmt::Debug for $set {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl ::core::fmt::Display for $set {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let mut first = true;
                for flag in self.iter() {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    f.write_str(flag.name())?;
                    first = false;
                }
                let unknown = self.unknown_bits();
                if unknown != 0 {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{unknown:#x}")?;
                    first = false;
                }
                if first {
                    f.write_str("-")?;
                }
                Ok(())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $set {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.iter())
            }
        }
    };
}

pub(crate) use named_flags;
