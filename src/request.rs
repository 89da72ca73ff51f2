//! Identifier requests and generated identifiers.
//!
//! An [`IdentifierRequest`] is what a front end (form, command line, RPC payload) assembles
//! from its inputs. Every parameter has an explicit default, and ranges are checked by
//! [`IdentifierRequest::validate()`] before any randomness is drawn.

use std::{fmt, ops::RangeInclusive};

use crate::nanoid::{Alphabet, Mapping};
use crate::{Error, Format, Node, Uuid};

/// Accepted lengths of the random suffix of a timestamp ID.
pub const SUFFIX_LENGTH_RANGE: RangeInclusive<usize> = 3..=12;

/// Accepted lengths of a NanoID.
pub const NANOID_LENGTH_RANGE: RangeInclusive<usize> = 4..=64;

/// The timestamp ID prefix used when none is given.
pub const DEFAULT_PREFIX: &str = "id";

/// The maximum number of UUIDv8 custom data bytes.
pub const MAX_CUSTOM_DATA_LEN: usize = 12;

/// The kind of a generated identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdKind {
    V1,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    Nil,
    Max,
    TimestampId,
    NanoId,
}

impl IdKind {
    /// Every kind, in presentation order.
    pub const ALL: [Self; 11] = [
        Self::V4,
        Self::V1,
        Self::V3,
        Self::V5,
        Self::V6,
        Self::V7,
        Self::V8,
        Self::Nil,
        Self::Max,
        Self::TimestampId,
        Self::NanoId,
    ];

    /// Returns the human-readable name, e.g. `UUID v4 (Random)`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::V1 => "UUID v1 (Timestamp)",
            Self::V3 => "UUID v3 (MD5-based)",
            Self::V4 => "UUID v4 (Random)",
            Self::V5 => "UUID v5 (SHA-1-based)",
            Self::V6 => "UUID v6 (Reordered Timestamp)",
            Self::V7 => "UUID v7 (Unix Timestamp)",
            Self::V8 => "UUID v8 (Custom)",
            Self::Nil => "Nil UUID (All Zeros)",
            Self::Max => "Max UUID (All Ones)",
            Self::TimestampId => "Timestamp-based ID",
            Self::NanoId => "Nano ID",
        }
    }

    /// Returns a short description of the textual format.
    pub const fn format_description(self) -> &'static str {
        match self {
            Self::TimestampId => "Custom timestamp format",
            Self::NanoId => "URL-safe unique ID",
            _ => "Standard UUID format",
        }
    }

    /// Returns the version number written into UUIDs of this kind.
    pub const fn version(self) -> Option<u8> {
        match self {
            Self::V1 => Some(1),
            Self::V3 => Some(3),
            Self::V4 => Some(4),
            Self::V5 => Some(5),
            Self::V6 => Some(6),
            Self::V7 => Some(7),
            Self::V8 => Some(8),
            _ => None,
        }
    }

    /// Returns true if identifiers of this kind are 128-bit UUIDs.
    pub const fn is_uuid(self) -> bool {
        !matches!(self, Self::TimestampId | Self::NanoId)
    }

    /// Returns the short name accepted by [`str::parse()`], e.g. `v4` or `nanoid`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::V5 => "v5",
            Self::V6 => "v6",
            Self::V7 => "v7",
            Self::V8 => "v8",
            Self::Nil => "nil",
            Self::Max => "max",
            Self::TimestampId => "timestamp",
            Self::NanoId => "nanoid",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for IdKind {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.short_name().eq_ignore_ascii_case(src))
            .ok_or_else(|| Error::InvalidOption {
                option: "kind",
                reason: format!("unknown identifier kind '{}'", src),
            })
    }
}

/// Field order of generated UUIDv6 values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum V6Layout {
    /// Timestamp stored most significant bits first, so byte order follows creation time.
    #[default]
    Reordered,

    /// UUIDv1 field order with only the version nibble changed, for compatibility with tools
    /// that produced v6 values that way.
    SameAsV1,
}

/// Source of the random suffix of a timestamp ID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SuffixKind {
    /// Lowercase hexadecimal digits.
    #[default]
    Hex,

    /// Symbols of the default NanoID alphabet.
    NanoId,
}

/// Kind-specific parameters of an [`IdentifierRequest`].
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RequestKind {
    /// Time-based UUID. A missing, empty or malformed `node` is replaced by a random node with
    /// the multicast bit set; a malformed one is also reported as
    /// [`Error::InvalidNodeIdentifier`].
    V1 {
        #[cfg_attr(feature = "serde", serde(default))]
        node: Option<String>,
    },

    /// Name-based UUID using MD5. A malformed `namespace` fails with
    /// [`Error::InvalidNamespace`].
    V3 {
        #[cfg_attr(feature = "serde", serde(default = "default_namespace"))]
        namespace: String,
        #[cfg_attr(feature = "serde", serde(default = "default_name"))]
        name: String,
    },

    /// Random UUID.
    #[default]
    V4,

    /// Name-based UUID using SHA-1. A malformed `namespace` fails with
    /// [`Error::InvalidNamespace`].
    V5 {
        #[cfg_attr(feature = "serde", serde(default = "default_namespace"))]
        namespace: String,
        #[cfg_attr(feature = "serde", serde(default = "default_name"))]
        name: String,
    },

    /// Time-based UUID with the node handling of [`RequestKind::V1`].
    V6 {
        #[cfg_attr(feature = "serde", serde(default))]
        node: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        layout: V6Layout,
    },

    /// Unix-time-based UUID.
    V7,

    /// Custom UUID. `custom_data` is read as hex digits up to the first character that is not
    /// one, an odd trailing digit is dropped, and at most 12 bytes are used. Any of these
    /// truncations is reported as [`Error::InvalidCustomData`].
    V8 {
        #[cfg_attr(feature = "serde", serde(default))]
        custom_data: String,
    },

    /// The all-zero UUID.
    Nil,

    /// The all-one UUID.
    Max,

    /// `{prefix}-{unix_ts_ms}-{suffix}`. An empty `prefix` means [`DEFAULT_PREFIX`].
    TimestampId {
        #[cfg_attr(feature = "serde", serde(default = "default_prefix"))]
        prefix: String,
        #[cfg_attr(feature = "serde", serde(default = "default_suffix_length"))]
        suffix_length: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        suffix: SuffixKind,
        #[cfg_attr(feature = "serde", serde(default))]
        mapping: Mapping,
    },

    /// Random string over `alphabet`, or the URL-safe alphabet if it is `None` or empty.
    NanoId {
        #[cfg_attr(feature = "serde", serde(default = "default_nanoid_length"))]
        length: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        alphabet: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        mapping: Mapping,
    },
}

fn default_namespace() -> String {
    Uuid::NAMESPACE_DNS.to_string()
}

fn default_name() -> String {
    "example.com".to_owned()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_owned()
}

const fn default_suffix_length() -> usize {
    6
}

const fn default_nanoid_length() -> usize {
    21
}

impl RequestKind {
    /// Returns the parameters of `kind` with every field at its default value.
    ///
    /// The defaults are the DNS namespace and `example.com` for name-based UUIDs, prefix `id`
    /// with a 6-digit hex suffix for timestamp IDs, and 21 URL-safe symbols for NanoIDs.
    pub fn default_for(kind: IdKind) -> Self {
        match kind {
            IdKind::V1 => Self::V1 { node: None },
            IdKind::V3 => Self::V3 {
                namespace: default_namespace(),
                name: default_name(),
            },
            IdKind::V4 => Self::V4,
            IdKind::V5 => Self::V5 {
                namespace: default_namespace(),
                name: default_name(),
            },
            IdKind::V6 => Self::V6 {
                node: None,
                layout: V6Layout::default(),
            },
            IdKind::V7 => Self::V7,
            IdKind::V8 => Self::V8 {
                custom_data: String::new(),
            },
            IdKind::Nil => Self::Nil,
            IdKind::Max => Self::Max,
            IdKind::TimestampId => Self::TimestampId {
                prefix: default_prefix(),
                suffix_length: default_suffix_length(),
                suffix: SuffixKind::default(),
                mapping: Mapping::default(),
            },
            IdKind::NanoId => Self::NanoId {
                length: default_nanoid_length(),
                alphabet: None,
                mapping: Mapping::default(),
            },
        }
    }

    /// Returns the kind of identifier these parameters produce.
    pub const fn id_kind(&self) -> IdKind {
        match self {
            Self::V1 { .. } => IdKind::V1,
            Self::V3 { .. } => IdKind::V3,
            Self::V4 => IdKind::V4,
            Self::V5 { .. } => IdKind::V5,
            Self::V6 { .. } => IdKind::V6,
            Self::V7 => IdKind::V7,
            Self::V8 { .. } => IdKind::V8,
            Self::Nil => IdKind::Nil,
            Self::Max => IdKind::Max,
            Self::TimestampId { .. } => IdKind::TimestampId,
            Self::NanoId { .. } => IdKind::NanoId,
        }
    }
}

/// A request for one identifier: which kind with which parameters, and how UUIDs are rendered.
///
/// # Examples
///
/// ```rust
/// use idkit::{IdentifierRequest, RequestKind};
///
/// let request = IdentifierRequest::new(RequestKind::V5 {
///     namespace: "6ba7b810-9dad-11d1-80b4-00c04fd430c8".to_owned(),
///     name: "python.org".to_owned(),
/// })
/// .braces(true);
/// assert_eq!(
///     idkit::generate(&request)?.as_str(),
///     "{886313e1-3b8a-5372-9b90-0c9aee199e5d}"
/// );
/// # Ok::<(), idkit::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierRequest {
    /// Kind-specific parameters.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: RequestKind,

    /// Presentation options; ignored by timestamp IDs and NanoIDs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: Format,
}

impl IdentifierRequest {
    /// Creates a request with the default [`Format`].
    pub const fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            format: Format {
                uppercase: false,
                braces: false,
            },
        }
    }

    /// Creates a request for `kind` with default parameters and format.
    pub fn default_for(kind: IdKind) -> Self {
        Self::new(RequestKind::default_for(kind))
    }

    /// Sets whether UUID letters are rendered in upper case.
    pub const fn uppercase(mut self, uppercase: bool) -> Self {
        self.format.uppercase = uppercase;
        self
    }

    /// Sets whether UUIDs are wrapped in curly braces.
    pub const fn braces(mut self, braces: bool) -> Self {
        self.format.braces = braces;
        self
    }

    /// Checks the ranges of length parameters and the shape of prefixes and alphabets.
    ///
    /// Namespaces, nodes and custom data are not checked here; see [`RequestKind`] for how
    /// each of them is handled during generation.
    pub fn validate(&self) -> Result<(), Error> {
        match &self.kind {
            RequestKind::TimestampId {
                prefix,
                suffix_length,
                ..
            } => {
                if !prefix.chars().all(is_prefix_char) {
                    return Err(Error::InvalidOption {
                        option: "prefix",
                        reason: format!(
                            "must consist of A-Z, a-z, 0-9, _, - and ., got '{}'",
                            prefix
                        ),
                    });
                }
                check_range("suffix_length", *suffix_length, SUFFIX_LENGTH_RANGE)
            }
            RequestKind::NanoId {
                length, alphabet, ..
            } => {
                check_range("length", *length, NANOID_LENGTH_RANGE)?;
                match alphabet.as_deref() {
                    Some(symbols) if !symbols.is_empty() => Alphabet::new(symbols).map(|_| ()),
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

/// Returns true if `c` may appear in a timestamp ID prefix.
fn is_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn check_range(
    option: &'static str,
    value: usize,
    range: RangeInclusive<usize>,
) -> Result<(), Error> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidOption {
            option,
            reason: format!(
                "must be between {} and {}, got {}",
                range.start(),
                range.end(),
                value
            ),
        })
    }
}

/// Parses a namespace in loose form, see [`Uuid::parse_loose()`].
pub(crate) fn parse_namespace(src: &str) -> Result<Uuid, Error> {
    Uuid::parse_loose(src).map_err(|_| Error::InvalidNamespace(src.to_owned()))
}

/// Parses an optional node, recording a malformed one in `recovered` and returning `None` so
/// that a random node is used.
pub(crate) fn parse_node(src: Option<&str>, recovered: &mut Vec<Error>) -> Option<Node> {
    let src = src.map(str::trim).filter(|s| !s.is_empty())?;
    match src.parse() {
        Ok(node) => Some(node),
        Err(err) => {
            recovered.push(err);
            None
        }
    }
}

/// Reads the longest even-length hex prefix of `src`, at most [`MAX_CUSTOM_DATA_LEN`] bytes,
/// recording [`Error::InvalidCustomData`] in `recovered` if anything is left over.
pub(crate) fn parse_custom_data(src: &str, recovered: &mut Vec<Error>) -> Vec<u8> {
    let digits: Vec<u8> = src
        .chars()
        .map_while(|c| c.to_digit(16))
        .take(MAX_CUSTOM_DATA_LEN * 2)
        .map(|d| d as u8)
        .collect();
    let bytes: Vec<u8> = digits.chunks_exact(2).map(|e| (e[0] << 4) | e[1]).collect();
    if bytes.len() * 2 != src.chars().count() {
        recovered.push(Error::InvalidCustomData(src.to_owned()));
    }
    bytes
}

/// A generated identifier.
///
/// Holds the rendered text and, for UUID kinds, the 128-bit value it was rendered from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    kind: IdKind,
    uuid: Option<Uuid>,
    text: String,
    recovered: Vec<Error>,
}

impl Identifier {
    pub(crate) fn from_uuid(
        kind: IdKind,
        uuid: Uuid,
        format: Format,
        recovered: Vec<Error>,
    ) -> Self {
        Self {
            kind,
            uuid: Some(uuid),
            text: uuid.format(format),
            recovered,
        }
    }

    pub(crate) fn from_text(kind: IdKind, text: String) -> Self {
        Self {
            kind,
            uuid: None,
            text,
            recovered: Vec::new(),
        }
    }

    /// Returns the kind of the identifier.
    pub const fn kind(&self) -> IdKind {
        self.kind
    }

    /// Returns the UUID value, or `None` for timestamp IDs and NanoIDs.
    pub const fn as_uuid(&self) -> Option<&Uuid> {
        self.uuid.as_ref()
    }

    /// Returns the rendered identifier.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the input errors that were worked around while generating the identifier.
    pub fn recovered(&self) -> &[Error] {
        &self.recovered
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Identifier> for String {
    fn from(src: Identifier) -> Self {
        src.text
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_custom_data, parse_node, IdKind, IdentifierRequest, RequestKind};
    use crate::generator::{tests::SteppingClock, with_rand08::Adapter, IdGenerator};
    use crate::nanoid::Mapping;
    use crate::{Error, SuffixKind, Uuid, V6Layout};

    /// Reads custom data up to the first non-hex character
    #[test]
    fn reads_custom_data_up_to_the_first_non_hex_character() {
        let cases: [(&str, &[u8], bool); 7] = [
            ("", &[], false),
            ("123456789abcdef0", &[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0], false),
            ("123456789abcdef", &[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde], true),
            ("12zz34", &[0x12], true),
            ("ABcd-ef", &[0xab, 0xcd], true),
            ("xyz", &[], true),
            (
                "00112233445566778899aabbccdd",
                &[0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb],
                true,
            ),
        ];
        for (src, bytes, truncated) in cases {
            let mut recovered = Vec::new();
            assert_eq!(parse_custom_data(src, &mut recovered), bytes);
            if truncated {
                assert_eq!(recovered, [Error::InvalidCustomData(src.to_owned())]);
            } else {
                assert!(recovered.is_empty());
            }
        }
    }

    /// Treats blank node as absent and reports malformed node
    #[test]
    fn treats_blank_node_as_absent_and_reports_malformed_node() {
        let mut recovered = Vec::new();
        assert_eq!(parse_node(None, &mut recovered), None);
        assert_eq!(parse_node(Some(""), &mut recovered), None);
        assert_eq!(parse_node(Some("  "), &mut recovered), None);
        assert!(recovered.is_empty());

        assert!(parse_node(Some(" 00:11:22:33:44:55 "), &mut recovered).is_some());
        assert!(recovered.is_empty());

        assert_eq!(parse_node(Some("00:11:22"), &mut recovered), None);
        assert_eq!(
            recovered,
            [Error::InvalidNodeIdentifier("00:11:22".to_owned())]
        );
    }

    /// Validates lengths prefixes and alphabets
    #[test]
    fn validates_lengths_prefixes_and_alphabets() {
        let timestamp = |prefix: &str, suffix_length| {
            IdentifierRequest::new(RequestKind::TimestampId {
                prefix: prefix.to_owned(),
                suffix_length,
                suffix: SuffixKind::Hex,
                mapping: Mapping::Modulo,
            })
        };
        assert!(timestamp("id", 3).validate().is_ok());
        assert!(timestamp("order_2024", 12).validate().is_ok());
        assert!(timestamp("id", 2).validate().is_err());
        assert!(timestamp("id", 13).validate().is_err());
        assert!(timestamp("", 6).validate().is_ok());
        assert!(timestamp("user-id", 6).validate().is_ok());
        assert!(timestamp("order.v2", 6).validate().is_ok());
        assert!(timestamp("a b", 6).validate().is_err());
        assert!(timestamp("a/b", 6).validate().is_err());
        assert!(timestamp("ид", 6).validate().is_err());

        let nanoid = |length, alphabet: Option<&str>| {
            IdentifierRequest::new(RequestKind::NanoId {
                length,
                alphabet: alphabet.map(str::to_owned),
                mapping: Mapping::Modulo,
            })
        };
        assert!(nanoid(4, None).validate().is_ok());
        assert!(nanoid(64, Some("")).validate().is_ok());
        assert!(nanoid(21, Some("AB")).validate().is_ok());
        assert!(nanoid(3, None).validate().is_err());
        assert!(nanoid(65, None).validate().is_err());
        let big: String = (0..300u32).filter_map(|i| char::from_u32(0x4e00 + i)).collect();
        assert!(nanoid(21, Some(&big)).validate().is_err());

        for kind in IdKind::ALL {
            assert!(IdentifierRequest::default_for(kind).validate().is_ok());
        }
    }

    /// Parses kind short names
    #[test]
    fn parses_kind_short_names() {
        for kind in IdKind::ALL {
            assert_eq!(kind.short_name().parse::<IdKind>(), Ok(kind));
            assert_eq!(kind.short_name().to_uppercase().parse::<IdKind>(), Ok(kind));
            let versioned_or_fixed =
                kind.version().is_some() || matches!(kind, IdKind::Nil | IdKind::Max);
            assert_eq!(kind.is_uuid(), versioned_or_fixed);
        }
        assert!("v2".parse::<IdKind>().is_err());
    }

    /// Aborts on invalid namespace and recovers from invalid node
    #[test]
    fn aborts_on_invalid_namespace_and_recovers_from_invalid_node() {
        let mut g = IdGenerator::for_testing();

        let request = IdentifierRequest::new(RequestKind::V3 {
            namespace: "not-a-uuid".to_owned(),
            name: "example.com".to_owned(),
        });
        assert_eq!(
            g.generate(&request),
            Err(Error::InvalidNamespace("not-a-uuid".to_owned()))
        );

        let request = IdentifierRequest::new(RequestKind::V6 {
            node: Some("zz:11:22:33:44:55".to_owned()),
            layout: V6Layout::Reordered,
        });
        let id = g.generate(&request).unwrap();
        assert_eq!(id.kind(), IdKind::V6);
        assert_eq!(
            id.recovered(),
            [Error::InvalidNodeIdentifier("zz:11:22:33:44:55".to_owned())]
        );
        assert_eq!(id.as_uuid().unwrap().as_bytes()[10] & 0x01, 0x01);
    }

    /// Keeps caller node in time-based UUIDs
    #[test]
    fn keeps_caller_node_in_time_based_uuids() {
        let mut g = IdGenerator::for_testing();
        let request = IdentifierRequest::new(RequestKind::V1 {
            node: Some("02-00-5E-10-00-01".to_owned()),
        })
        .uppercase(true);
        let id = g.generate(&request).unwrap();
        assert!(id.recovered().is_empty());
        assert!(id.as_str().ends_with("-02005E100001"));
    }

    /// Renders Nil and Max regardless of call count
    #[test]
    fn renders_nil_and_max_regardless_of_call_count() {
        let mut g = IdGenerator::for_testing();
        for _ in 0..100 {
            let id = g.generate(&IdentifierRequest::default_for(IdKind::Nil)).unwrap();
            assert_eq!(id.as_str(), "00000000-0000-0000-0000-000000000000");
            assert_eq!(id.as_uuid(), Some(&Uuid::NIL));

            let request = IdentifierRequest::default_for(IdKind::Max)
                .uppercase(true)
                .braces(true);
            let id = g.generate(&request).unwrap();
            assert_eq!(id.as_str(), "{FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF}");
        }
    }

    /// Ignores format for string identifiers
    #[test]
    fn ignores_format_for_string_identifiers() {
        let mut g = IdGenerator::with_rand_and_time_sources(
            Adapter(rand::thread_rng()),
            SteppingClock::new(1_700_000_000_000, 0),
        );
        let request = IdentifierRequest::default_for(IdKind::TimestampId)
            .uppercase(true)
            .braces(true);
        let id = g.generate(&request).unwrap();
        assert!(id.as_str().starts_with("id-1700000000000-"));
        assert_eq!(id.as_str().len(), "id-1700000000000-".len() + 6);
        assert!(id.as_uuid().is_none());

        let id = g.generate(&IdentifierRequest::default_for(IdKind::NanoId)).unwrap();
        assert_eq!(id.as_str().len(), 21);
        assert_eq!(String::from(id.clone()), id.to_string());
    }

    /// Falls back to default prefix when prefix is empty
    #[test]
    fn falls_back_to_default_prefix_when_prefix_is_empty() {
        let mut g = IdGenerator::with_rand_and_time_sources(
            Adapter(rand::thread_rng()),
            SteppingClock::new(1_700_000_000_000, 0),
        );
        let re = regex::Regex::new(crate::pattern_for(
            IdKind::TimestampId,
            crate::CaseSensitivity::Sensitive,
        ))
        .unwrap();
        for (prefix, expected) in [("", "id-"), ("user-id", "user-id-"), ("order.v2", "order.v2-")]
        {
            let request = IdentifierRequest::new(RequestKind::TimestampId {
                prefix: prefix.to_owned(),
                suffix_length: 6,
                suffix: SuffixKind::Hex,
                mapping: Mapping::Modulo,
            });
            let id = g.generate(&request).unwrap();
            let expected = format!("{}1700000000000-", expected);
            assert!(id.as_str().starts_with(&expected), "{}", id);
            assert_eq!(id.as_str().len(), expected.len() + 6);
            assert!(re.is_match(id.as_str()), "{}", id);
        }
    }

    /// Generates batches and stops at first error
    #[test]
    fn generates_batches_and_stops_at_first_error() {
        use std::collections::HashSet;
        let mut g = IdGenerator::for_testing();
        let ids = g
            .generate_many(&IdentifierRequest::default_for(IdKind::V7), 10)
            .unwrap();
        assert_eq!(ids.len(), 10);
        let s: HashSet<&str> = ids.iter().map(|e| e.as_str()).collect();
        assert_eq!(s.len(), 10);

        let request = IdentifierRequest::new(RequestKind::V5 {
            namespace: String::new(),
            name: String::new(),
        });
        assert!(g.generate_many(&request, 10).is_err());
        assert!(g.generate_many(&request, 0).unwrap().is_empty());
    }

    /// Describes kinds for display
    #[test]
    fn describes_kinds_for_display() {
        assert_eq!(IdKind::V4.to_string(), "UUID v4 (Random)");
        assert_eq!(IdKind::V4.format_description(), "Standard UUID format");
        assert_eq!(IdKind::TimestampId.format_description(), "Custom timestamp format");
        assert_eq!(IdKind::NanoId.format_description(), "URL-safe unique ID");
    }

    #[cfg(feature = "serde")]
    /// Decodes requests with defaults from JSON
    #[test]
    fn decodes_requests_with_defaults_from_json() {
        let decode = |s: &str| serde_json::from_str::<IdentifierRequest>(s).unwrap();

        assert_eq!(
            decode(r#"{"kind":"v4","format":{"uppercase":true}}"#),
            IdentifierRequest::default_for(IdKind::V4).uppercase(true)
        );
        assert_eq!(
            decode(r#"{"kind":"v5"}"#),
            IdentifierRequest::default_for(IdKind::V5)
        );
        assert_eq!(
            decode(r#"{"kind":"nano_id","length":10,"alphabet":"AB","mapping":"uniform"}"#),
            IdentifierRequest::new(RequestKind::NanoId {
                length: 10,
                alphabet: Some("AB".to_owned()),
                mapping: Mapping::Uniform,
            })
        );
        assert_eq!(
            decode(r#"{"kind":"timestamp_id","suffix":"nano_id"}"#),
            IdentifierRequest::new(RequestKind::TimestampId {
                prefix: "id".to_owned(),
                suffix_length: 6,
                suffix: SuffixKind::NanoId,
                mapping: Mapping::Modulo,
            })
        );
        assert!(serde_json::from_str::<IdentifierRequest>(r#"{"kind":"v2"}"#).is_err());
    }
}
