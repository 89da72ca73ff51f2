//! Regular expressions that describe the textual form of each identifier kind.
//!
//! The patterns are plain strings for use with any regex engine; this crate does not evaluate
//! them itself. UUID patterns describe the canonical hyphenated form without braces.

use crate::IdKind;

/// Whether a UUID pattern accepts upper-case hex digits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum CaseSensitivity {
    /// Lower-case digits only, as produced with the default [`Format`](crate::Format).
    Sensitive,

    /// Lower- and upper-case digits.
    #[default]
    Insensitive,
}

macro_rules! versioned_sensitive {
    ($version:literal) => {
        concat!(
            "^[0-9a-f]{8}-[0-9a-f]{4}-",
            $version,
            "[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
        )
    };
}

macro_rules! versioned_insensitive {
    ($version:literal) => {
        concat!(
            "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-",
            $version,
            "[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$"
        )
    };
}

/// Returns the validation pattern of `kind`.
///
/// Timestamp IDs and NanoIDs have one pattern regardless of `case`. The timestamp ID pattern
/// accepts both hex and NanoID suffixes.
///
/// # Examples
///
/// ```rust
/// use idkit::{pattern_for, CaseSensitivity, IdKind};
///
/// assert_eq!(
///     pattern_for(IdKind::V4, CaseSensitivity::Sensitive),
///     "^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
/// );
/// ```
pub const fn pattern_for(kind: IdKind, case: CaseSensitivity) -> &'static str {
    use CaseSensitivity::{Insensitive, Sensitive};
    match (kind, case) {
        (IdKind::V1, Sensitive) => versioned_sensitive!("1"),
        (IdKind::V1, Insensitive) => versioned_insensitive!("1"),
        (IdKind::V3, Sensitive) => versioned_sensitive!("3"),
        (IdKind::V3, Insensitive) => versioned_insensitive!("3"),
        (IdKind::V4, Sensitive) => versioned_sensitive!("4"),
        (IdKind::V4, Insensitive) => versioned_insensitive!("4"),
        (IdKind::V5, Sensitive) => versioned_sensitive!("5"),
        (IdKind::V5, Insensitive) => versioned_insensitive!("5"),
        (IdKind::V6, Sensitive) => versioned_sensitive!("6"),
        (IdKind::V6, Insensitive) => versioned_insensitive!("6"),
        (IdKind::V7, Sensitive) => versioned_sensitive!("7"),
        (IdKind::V7, Insensitive) => versioned_insensitive!("7"),
        (IdKind::V8, Sensitive) => versioned_sensitive!("8"),
        (IdKind::V8, Insensitive) => versioned_insensitive!("8"),
        (IdKind::Nil, _) => "^00000000-0000-0000-0000-000000000000$",
        (IdKind::Max, Sensitive) => "^ffffffff-ffff-ffff-ffff-ffffffffffff$",
        (IdKind::Max, Insensitive) => "^[fF]{8}-[fF]{4}-[fF]{4}-[fF]{4}-[fF]{12}$",
        (IdKind::TimestampId, _) => "^[A-Za-z0-9_.-]+-[0-9]+-[A-Za-z0-9_-]+$",
        (IdKind::NanoId, _) => "^[A-Za-z0-9_-]+$",
    }
}

#[cfg(test)]
mod tests {
    use super::{pattern_for, CaseSensitivity};
    use crate::generator::IdGenerator;
    use crate::{IdKind, IdentifierRequest};
    use regex::Regex;

    /// Matches every generated identifier of its own kind
    #[test]
    fn matches_every_generated_identifier_of_its_own_kind() {
        let mut g = IdGenerator::for_testing();
        for kind in IdKind::ALL {
            let sensitive = Regex::new(pattern_for(kind, CaseSensitivity::Sensitive)).unwrap();
            let insensitive = Regex::new(pattern_for(kind, CaseSensitivity::Insensitive)).unwrap();
            for _ in 0..100 {
                let lower = g.generate(&IdentifierRequest::default_for(kind)).unwrap();
                assert!(sensitive.is_match(lower.as_str()), "{}", lower);
                assert!(insensitive.is_match(lower.as_str()), "{}", lower);

                let upper = IdentifierRequest::default_for(kind).uppercase(true);
                let upper = g.generate(&upper).unwrap();
                assert!(insensitive.is_match(upper.as_str()), "{}", upper);
            }
        }
    }

    /// Rejects identifiers of other versions and braced forms
    #[test]
    fn rejects_identifiers_of_other_versions_and_braced_forms() {
        let mut g = IdGenerator::for_testing();
        for kind in IdKind::ALL.into_iter().filter(|e| e.version().is_some()) {
            let re = Regex::new(pattern_for(kind, CaseSensitivity::Insensitive)).unwrap();
            for other in IdKind::ALL.into_iter().filter(|e| e.is_uuid() && *e != kind) {
                let id = g.generate(&IdentifierRequest::default_for(other)).unwrap();
                assert!(!re.is_match(id.as_str()), "{} matched {}", id, kind);
            }

            let braced = IdentifierRequest::default_for(kind).braces(true);
            let id = g.generate(&braced).unwrap();
            assert!(!re.is_match(id.as_str()));
        }
    }

    /// Distinguishes lower and upper case when case sensitive
    #[test]
    fn distinguishes_lower_and_upper_case_when_case_sensitive() {
        let re = Regex::new(pattern_for(IdKind::V4, CaseSensitivity::Sensitive)).unwrap();
        assert!(re.is_match("2ca4b2ce-6c13-40d4-bccf-37d222820f6f"));
        assert!(!re.is_match("2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"));

        let re = Regex::new(pattern_for(IdKind::Max, CaseSensitivity::Sensitive)).unwrap();
        assert!(!re.is_match("FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF"));
        let re = Regex::new(pattern_for(IdKind::Max, CaseSensitivity::Insensitive)).unwrap();
        assert!(re.is_match("FFFFFFFF-ffff-FFFF-ffff-FFFFFFFFFFFF"));
    }

    /// Accepts timestamp IDs with either suffix kind
    #[test]
    fn accepts_timestamp_ids_with_either_suffix_kind() {
        let re = Regex::new(pattern_for(IdKind::TimestampId, CaseSensitivity::Sensitive)).unwrap();
        assert!(re.is_match("id-1700000000000-ab01cd"));
        assert!(re.is_match("order_2-1700000000000-B-_x"));
        assert!(re.is_match("user-id-1700000000000-ab01cd"));
        assert!(re.is_match("order.v2-1700000000000-ab01cd"));
        assert!(!re.is_match("id-17000x0000000-ab01cd"));
        assert!(!re.is_match("id-1700000000000-"));
        assert!(!re.is_match("-1700000000000-ab01cd"));
    }
}
