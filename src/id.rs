use std::{fmt, str};

use fstr::FStr;

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID from arbitrary bytes, overwriting the version nibble with `version` and
    /// the variant bits with `10`.
    ///
    /// # Panics
    ///
    /// Panics if `version` is greater than 15.
    pub const fn with_version(mut bytes: [u8; 16], version: u8) -> Self {
        if version > 0x0f {
            panic!("invalid version number");
        }

        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates a UUID byte array from UUIDv1 field values.
    ///
    /// `timestamp` is the 60-bit count of 100-nanosecond intervals since 1582-10-15 and
    /// `clock_seq` the 14-bit clock sequence.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a UUID byte array from UUIDv6 field values.
    ///
    /// Takes the same arguments as [`Uuid::from_fields_v1()`] but stores the timestamp from the
    /// most significant bits down so that the byte order follows the creation time.
    pub const fn from_fields_v6(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 52) as u8,
            (timestamp >> 44) as u8,
            (timestamp >> 36) as u8,
            (timestamp >> 28) as u8,
            (timestamp >> 20) as u8,
            (timestamp >> 12) as u8,
            0x60 | ((timestamp >> 8) & 0x0f) as u8,
            timestamp as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => {
                if u128::from_be_bytes(self.0) == 0 {
                    Variant::VarNil
                } else {
                    Variant::Var0
                }
            }
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => {
                if u128::from_be_bytes(self.0) == u128::MAX {
                    Variant::VarMax
                } else {
                    Variant::VarReserved
                }
            }
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idkit::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(format!("{}", y), "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), idkit::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        self.encode_with(b"0123456789abcdef")
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation in upper case.
    pub fn encode_upper(&self) -> FStr<36> {
        self.encode_with(b"0123456789ABCDEF")
    }

    fn encode_with(&self, digits: &[u8; 16]) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut i = 0;
        for (j, e) in self.0.iter().enumerate() {
            buffer[i] = digits[(e >> 4) as usize];
            buffer[i + 1] = digits[(e & 15) as usize];
            i += 2;
            if j == 3 || j == 5 || j == 7 || j == 9 {
                buffer[i] = b'-';
                i += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte written above is an ASCII hex digit or hyphen.
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Renders the UUID with the presentation options of `format`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idkit::{Format, Uuid};
    ///
    /// let f = Format { uppercase: true, braces: true };
    /// assert_eq!(Uuid::MAX.format(f), "{FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF}");
    /// ```
    pub fn format(&self, format: Format) -> String {
        let encoded = if format.uppercase {
            self.encode_upper()
        } else {
            self.encode()
        };

        let encoded: &str = &encoded;
        if format.braces {
            format!("{{{}}}", encoded)
        } else {
            encoded.to_owned()
        }
    }

    /// Creates an object from a loosely formatted string: curly braces and hyphens are dropped
    /// wherever they appear and the rest must be exactly 32 hexadecimal digits in either case.
    ///
    /// This accepts the forms users typically paste as a namespace, e.g.
    /// `{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}` or `6ba7b8109dad11d180b400c04fd430c8`.
    pub fn parse_loose(src: &str) -> Result<Self, ParseError> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut digits = src
            .chars()
            .filter(|c| !matches!(c, '{' | '}' | '-'))
            .map(|c| c.to_digit(16).map(|d| d as u8));
        for e in dst.iter_mut() {
            let hi = digits.next().flatten().ok_or(ERR)?;
            let lo = digits.next().flatten().ok_or(ERR)?;
            *e = (hi << 4) | lo;
        }
        if digits.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// The reserved bits of a UUID that determine how the rest of it is laid out.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Variant {
    /// Nil UUID.
    VarNil,
    /// The variant field value of `0`.
    Var0,
    /// The variant field value of `10`, shared by every generated version of this crate.
    Var10,
    /// The variant field value of `110`.
    Var110,
    /// The reserved variant field value of `111`.
    VarReserved,
    /// Max UUID.
    VarMax,
}

/// Presentation options shared by all UUID-shaped identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Format {
    /// Renders hexadecimal letters as `A`-`F` instead of `a`-`f`.
    pub uppercase: bool,

    /// Wraps the identifier in curly braces: `{...}`.
    pub braces: bool,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation")
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "886313e1-3b8a-5372-9b90-0c9aee199e5d",
                    &[
                        136, 99, 19, 225, 59, 138, 83, 114, 155, 144, 12, 154, 238, 25, 158, 93,
                    ],
                ),
                (
                    "0180ae59-078c-7b80-b113-2fe14a615fb3",
                    &[
                        1, 128, 174, 89, 7, 140, 123, 128, 177, 19, 47, 225, 74, 97, 95, 179,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
