/// Error produced while generating an identifier.
///
/// `EntropyUnavailable`, `InvalidNamespace` and `InvalidOption` abort the generation. The
/// remaining kinds are recovered from (random node, truncated custom data) and reported through
/// [`Identifier::recovered()`](crate::Identifier::recovered) instead of failing the call.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
    /// The cryptographically secure random number generator could not supply bytes.
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    /// The namespace of a name-based UUID is not a 32-hex-digit identifier.
    #[error("invalid namespace UUID: '{0}'")]
    InvalidNamespace(String),

    /// The node of a time-based UUID is not six hex octets separated by `:` or `-`.
    #[error("invalid node identifier: '{0}'")]
    InvalidNodeIdentifier(String),

    /// The custom data of a UUIDv8 contains non-hex characters or an odd digit count.
    #[error("invalid custom data: '{0}'")]
    InvalidCustomData(String),

    /// A request parameter is outside its accepted range.
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
}
