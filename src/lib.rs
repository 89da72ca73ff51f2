//! Generators of UUIDs (versions 1, 3, 4, 5, 6, 7 and 8, Nil and Max), timestamp-prefixed IDs
//! and NanoID-style random strings
//!
//! ```rust
//! use idkit::{IdKind, IdentifierRequest, RequestKind};
//!
//! let uuid = idkit::uuid7()?;
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let request = IdentifierRequest::new(RequestKind::V4).uppercase(true).braces(true);
//! println!("{}", idkit::generate(&request)?); // e.g. "{2CA4B2CE-6C13-40D4-BCCF-37D222820F6F}"
//!
//! let nanoid = idkit::generate(&IdentifierRequest::default_for(IdKind::NanoId))?;
//! println!("{}", nanoid); // e.g. "V1StGXR8_Z5jdHi6B-myT"
//! # Ok::<(), idkit::Error>(())
//! ```
//!
//! Every identifier is produced from an [`IdentifierRequest`]: a [`RequestKind`] carrying the
//! parameters of one kind, and a [`Format`] that controls letter case and braces of UUIDs. The
//! request is checked at the boundary, so out-of-range lengths and malformed prefixes or
//! alphabets are rejected with [`Error::InvalidOption`] before any randomness is consumed.
//!
//! # Field and bit layout
//!
//! UUIDv1 and UUIDv6 carry a 60-bit count of 100-nanosecond intervals since 1582-10-15, taken
//! at millisecond resolution. UUIDv6 stores it most significant bits first:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! UUIDv1 uses the same fields with `time_low` (32 bits) first and `time_high` (12 bits) next
//! to the version. The 14-bit `clock_seq` is random for every identifier. Without a caller
//! supplied node, the node is random with the multicast bit set.
//!
//! UUIDv7 generated by this library look like this:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! All 74 `rand_a` and `rand_b` bits are drawn fresh for each identifier. No counter is kept,
//! so identifiers created within the same millisecond are not ordered.
//!
//! UUIDv8 places up to 12 bytes of caller data from byte 4 onward, over random bytes, and then
//! overwrites the version and variant bits.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generator behind [`generate()`],
//!   [`uuid4()`] and [`uuid7()`].
//!
//! Optional features:
//!
//! - `serde`: enables serialization of [`Uuid`], [`IdentifierRequest`] and [`History`].
//! - `uuid`: enables conversion from/to `uuid::Uuid`.
//! - `cli`: builds the `idkit` command-line tool.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{Format, ParseError, Uuid, Variant};

mod node;
pub use node::Node;

pub mod nanoid;
pub use nanoid::{Alphabet, Mapping};

pub mod generator;
pub use generator::{
    uuid3, uuid5, IdGenerator, RandSource, StdSystemTime, TimeSource, DEFAULT_BATCH_SIZE,
};

pub mod request;
pub use request::{IdKind, Identifier, IdentifierRequest, RequestKind, SuffixKind, V6Layout};

mod patterns;
pub use patterns::{pattern_for, CaseSensitivity};

mod history;
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_CAPACITY};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{generate, generate_many, uuid4, uuid7};
