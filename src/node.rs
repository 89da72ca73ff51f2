//! 48-bit node identifiers of time-based UUIDs.

use std::{fmt, str};

use crate::Error;

/// Represents the 48-bit node field of a UUIDv1 or UUIDv6, conventionally a MAC address.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Node([u8; 6]);

impl Node {
    /// Creates a node from six random bytes, setting the multicast bit (the least significant
    /// bit of the first octet) so that it cannot collide with an IEEE 802 hardware address.
    pub const fn from_random_bytes(mut bytes: [u8; 6]) -> Self {
        bytes[0] |= 0x01;
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Returns true if the multicast bit is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl From<[u8; 6]> for Node {
    fn from(src: [u8; 6]) -> Self {
        Self(src)
    }
}

impl From<Node> for [u8; 6] {
    fn from(src: Node) -> Self {
        src.0
    }
}

impl fmt::Display for Node {
    /// Returns the colon-separated lowercase representation, e.g. `00:11:22:33:44:55`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl str::FromStr for Node {
    type Err = Error;

    /// Parses six two-digit hex octets separated by `:` or `-` (the separators may be mixed),
    /// e.g. `00:11:22:33:44:55` or `00-11-22-33-44-55`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidNodeIdentifier(src.to_owned());
        let bytes = src.as_bytes();
        if bytes.len() != 17 {
            return Err(err());
        }

        let mut dst = [0u8; 6];
        for (i, e) in dst.iter_mut().enumerate() {
            let pos = i * 3;
            let hi = (bytes[pos] as char).to_digit(16).ok_or_else(err)? as u8;
            let lo = (bytes[pos + 1] as char).to_digit(16).ok_or_else(err)? as u8;
            *e = (hi << 4) | lo;
            if i < 5 && !matches!(bytes[pos + 2], b':' | b'-') {
                return Err(err());
            }
        }
        Ok(Self(dst))
    }
}
