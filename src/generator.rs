//! Identifier generator and related types.

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::nanoid::{Alphabet, Mapping};
use crate::request::{
    self, IdKind, Identifier, IdentifierRequest, RequestKind, SuffixKind, V6Layout,
    DEFAULT_PREFIX,
};
use crate::{Error, Node, Uuid};

pub mod with_rand08;

#[cfg(test)]
pub(crate) mod tests;

/// The offset between the Gregorian epoch (1582-10-15) and the Unix epoch in 100-nanosecond
/// intervals.
const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// The number of identifiers generated by [`IdGenerator::generate_many()`] callers that do not
/// have a preference.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// A trait that defines the random number generator interface for [`IdGenerator`].
///
/// Implementations must be backed by a cryptographically secure random number generator and
/// must report failure rather than fall back to a weaker source.
pub trait RandSource {
    /// Fills `dest` with random data or returns [`Error::EntropyUnavailable`].
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// A trait that defines the system clock interface for [`IdGenerator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

/// Represents an identifier generator that owns a random number generator and a clock.
///
/// The generator keeps no state between calls other than its sources: every identifier is
/// computed from the clock reading and fresh random bytes of that call only.
///
/// # Examples
///
/// ```rust
/// use idkit::{IdGenerator, IdentifierRequest, RequestKind};
///
/// let mut g = IdGenerator::with_rand08(rand::rngs::OsRng);
/// let request = IdentifierRequest::new(RequestKind::V4).uppercase(true);
/// println!("{}", g.generate(&request)?); // e.g., "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"
/// # Ok::<(), idkit::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct IdGenerator<R, T = StdSystemTime> {
    rand_source: R,
    time_source: T,
}

impl<R: RandSource> IdGenerator<R> {
    /// Creates a generator object with a random number generator and the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> IdGenerator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }

    fn random_bytes<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut bytes = [0u8; N];
        self.rand_source.try_fill_bytes(&mut bytes)?;
        Ok(bytes)
    }

    /// Generates one identifier as described by `request`.
    ///
    /// The request is validated first. Malformed node identifiers and custom data do not fail
    /// the call; they are replaced as documented on [`RequestKind`] and reported through
    /// [`Identifier::recovered()`].
    pub fn generate(&mut self, request: &IdentifierRequest) -> Result<Identifier, Error> {
        let identifier = self.generate_unlogged(request).map_err(|err| {
            tracing::debug!(%err, kind = %request.kind.id_kind(), "identifier generation failed");
            err
        })?;
        for err in identifier.recovered() {
            tracing::warn!(%err, kind = %identifier.kind(), "substituted invalid input");
        }
        tracing::debug!(kind = %identifier.kind(), id = %identifier, "generated identifier");
        Ok(identifier)
    }

    fn generate_unlogged(&mut self, request: &IdentifierRequest) -> Result<Identifier, Error> {
        request.validate()?;
        let mut recovered = Vec::new();
        let uuid = match &request.kind {
            RequestKind::V1 { node } => {
                let node = request::parse_node(node.as_deref(), &mut recovered);
                self.generate_v1(node)?
            }
            RequestKind::V3 { namespace, name } => {
                uuid3(&request::parse_namespace(namespace)?, name.as_bytes())
            }
            RequestKind::V4 => self.generate_v4()?,
            RequestKind::V5 { namespace, name } => {
                uuid5(&request::parse_namespace(namespace)?, name.as_bytes())
            }
            RequestKind::V6 { node, layout } => {
                let node = request::parse_node(node.as_deref(), &mut recovered);
                self.generate_v6(node, *layout)?
            }
            RequestKind::V7 => self.generate_v7()?,
            RequestKind::V8 { custom_data } => {
                let custom_data = request::parse_custom_data(custom_data, &mut recovered);
                self.generate_v8(&custom_data)?
            }
            RequestKind::Nil => Uuid::NIL,
            RequestKind::Max => Uuid::MAX,
            RequestKind::TimestampId {
                prefix,
                suffix_length,
                suffix,
                mapping,
            } => {
                let text =
                    self.generate_timestamp_id(prefix, *suffix_length, *suffix, *mapping)?;
                return Ok(Identifier::from_text(IdKind::TimestampId, text));
            }
            RequestKind::NanoId {
                length,
                alphabet,
                mapping,
            } => {
                let alphabet = match alphabet.as_deref() {
                    Some(symbols) if !symbols.is_empty() => Alphabet::new(symbols)?,
                    _ => Alphabet::url_safe(),
                };
                let text = self.generate_nanoid(*length, &alphabet, *mapping)?;
                return Ok(Identifier::from_text(IdKind::NanoId, text));
            }
        };
        Ok(Identifier::from_uuid(
            request.kind.id_kind(),
            uuid,
            request.format,
            recovered,
        ))
    }

    /// Generates `count` identifiers as described by `request`, stopping at the first error.
    pub fn generate_many(
        &mut self,
        request: &IdentifierRequest,
        count: usize,
    ) -> Result<Vec<Identifier>, Error> {
        (0..count).map(|_| self.generate(request)).collect()
    }

    /// Returns the current time as the 60-bit count of 100-nanosecond intervals since
    /// 1582-10-15, at millisecond resolution.
    fn gregorian_timestamp(&mut self) -> u64 {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        unix_ts_ms
            .wrapping_mul(10_000)
            .wrapping_add(GREGORIAN_OFFSET)
            & ((1 << 60) - 1)
    }

    /// Returns `node` or a random node with the multicast bit set, followed by a random 14-bit
    /// clock sequence.
    fn node_and_clock_seq(&mut self, node: Option<Node>) -> Result<(Node, u16), Error> {
        let node = match node {
            Some(node) => node,
            None => Node::from_random_bytes(self.random_bytes()?),
        };
        let clock_seq = u16::from_be_bytes(self.random_bytes()?) & 0x3fff;
        Ok((node, clock_seq))
    }

    /// Generates a UUIDv1 object from the current time.
    pub fn generate_v1(&mut self, node: Option<Node>) -> Result<Uuid, Error> {
        let timestamp = self.gregorian_timestamp();
        let (node, clock_seq) = self.node_and_clock_seq(node)?;
        Ok(Uuid::from_fields_v1(timestamp, clock_seq, node.into()))
    }

    /// Generates a UUIDv4 object.
    pub fn generate_v4(&mut self) -> Result<Uuid, Error> {
        Ok(Uuid::with_version(self.random_bytes()?, 4))
    }

    /// Generates a UUIDv6 object from the current time.
    ///
    /// [`V6Layout::SameAsV1`] produces the layout of [`IdGenerator::generate_v1()`] with the
    /// version nibble set to 6 instead.
    pub fn generate_v6(&mut self, node: Option<Node>, layout: V6Layout) -> Result<Uuid, Error> {
        let timestamp = self.gregorian_timestamp();
        let (node, clock_seq) = self.node_and_clock_seq(node)?;
        Ok(match layout {
            V6Layout::Reordered => Uuid::from_fields_v6(timestamp, clock_seq, node.into()),
            V6Layout::SameAsV1 => Uuid::with_version(
                Uuid::from_fields_v1(timestamp, clock_seq, node.into()).into(),
                6,
            ),
        })
    }

    /// Generates a UUIDv7 object from the current time.
    ///
    /// Identifiers created in different milliseconds sort in creation order; those created
    /// within the same millisecond are ordered randomly.
    pub fn generate_v7(&mut self) -> Result<Uuid, Error> {
        let unix_ts_ms = self.time_source.unix_ts_ms() & ((1 << 48) - 1);
        let [a0, a1, b @ ..] = self.random_bytes::<10>()?;
        let rand_a = u16::from_be_bytes([a0, a1]) & 0x0fff;
        let rand_b = u64::from_be_bytes(b) & ((1 << 62) - 1);
        Ok(Uuid::from_fields_v7(unix_ts_ms, rand_a, rand_b))
    }

    /// Generates a UUIDv8 object whose bytes 4 to 15 are taken from `custom_data`, where
    /// available, and are random otherwise.
    ///
    /// At most 12 bytes of `custom_data` are used. The version and variant bits are set after
    /// the data is placed, so bytes 6 and 8 keep only their low bits.
    pub fn generate_v8(&mut self, custom_data: &[u8]) -> Result<Uuid, Error> {
        let mut bytes: [u8; 16] = self.random_bytes()?;
        for (dst, src) in bytes[4..].iter_mut().zip(custom_data) {
            *dst = *src;
        }
        Ok(Uuid::with_version(bytes, 8))
    }

    /// Generates a NanoID string of `length` symbols drawn from `alphabet`.
    pub fn generate_nanoid(
        &mut self,
        length: usize,
        alphabet: &Alphabet,
        mapping: Mapping,
    ) -> Result<String, Error> {
        let mut dst = String::with_capacity(length);
        alphabet.fill(&mut self.rand_source, length, mapping, &mut dst)?;
        Ok(dst)
    }

    /// Generates a timestamp ID string: `{prefix}-{unix_ts_ms}-{suffix}`.
    ///
    /// An empty `prefix` is replaced by [`DEFAULT_PREFIX`].
    ///
    /// The suffix has `suffix_length` characters: lowercase hex digits, or NanoID symbols of the
    /// default alphabet mapped by `mapping`.
    pub fn generate_timestamp_id(
        &mut self,
        prefix: &str,
        suffix_length: usize,
        suffix: SuffixKind,
        mapping: Mapping,
    ) -> Result<String, Error> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let prefix = if prefix.is_empty() { DEFAULT_PREFIX } else { prefix };
        let unix_ts_ms = self.time_source.unix_ts_ms();
        let mut dst = format!("{}-{}-", prefix, unix_ts_ms);
        match suffix {
            SuffixKind::Hex => {
                let mut bytes = vec![0u8; suffix_length.div_ceil(2)];
                self.rand_source.try_fill_bytes(&mut bytes)?;
                let hex = bytes
                    .iter()
                    .flat_map(|e| [DIGITS[(e >> 4) as usize], DIGITS[(e & 15) as usize]]);
                dst.extend(hex.take(suffix_length).map(char::from));
            }
            SuffixKind::NanoId => {
                let alphabet = Alphabet::url_safe();
                alphabet.fill(&mut self.rand_source, suffix_length, mapping, &mut dst)?;
            }
        }
        Ok(dst)
    }
}

fn hash_name<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
    let digest = D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}

/// Generates a name-based UUIDv3 object from the MD5 hash of `namespace` and `name`.
///
/// The same arguments always produce the same UUID, matching other RFC 9562 implementations.
///
/// # Examples
///
/// ```rust
/// use idkit::Uuid;
///
/// let uuid = idkit::uuid3(&Uuid::NAMESPACE_DNS, b"python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn uuid3(namespace: &Uuid, name: &[u8]) -> Uuid {
    Uuid::with_version(hash_name::<Md5>(namespace, name), 3)
}

/// Generates a name-based UUIDv5 object from the SHA-1 hash of `namespace` and `name`.
///
/// # Examples
///
/// ```rust
/// use idkit::Uuid;
///
/// let uuid = idkit::uuid5(&Uuid::NAMESPACE_DNS, b"python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn uuid5(namespace: &Uuid, name: &[u8]) -> Uuid {
    Uuid::with_version(hash_name::<Sha1>(namespace, name), 5)
}
