use serde::Serialize;
use std::fmt;

/// Value of [`HstsHeader::max_age`] when no valid `max-age` directive was seen.
pub const MAX_AGE_NOT_PRESENT: i64 = -1;

/// Smallest `max-age` accepted for preloading: 18 weeks, in seconds.
pub const MIN_PRELOAD_MAX_AGE: i64 = 10_886_400;

/// One year in seconds. Chrome clamps larger `max-age` values to this.
pub const MAX_AGE_CLAMP: i64 = 31_536_000;

// ---------------------------------------------------------------------------
// HstsHeader
// ---------------------------------------------------------------------------

/// The directives recognized in a `Strict-Transport-Security` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HstsHeader {
    /// `preload` was present.
    pub preload: bool,
    /// `includeSubDomains` was present (any casing).
    pub include_sub_domains: bool,
    /// Seconds from the last valid `max-age` directive, or
    /// [`MAX_AGE_NOT_PRESENT`].
    pub max_age: i64,
}

impl HstsHeader {
    /// A record with no directives seen.
    pub const fn new() -> Self {
        Self {
            preload: false,
            include_sub_domains: false,
            max_age: MAX_AGE_NOT_PRESENT,
        }
    }

    /// The `max-age` value, if a valid one was present.
    ///
    /// Returns `None` both for the sentinel and for any other negative
    /// value, which the parser never produces.
    pub fn max_age(&self) -> Option<u64> {
        u64::try_from(self.max_age).ok()
    }

    pub fn has_max_age(&self) -> bool {
        self.max_age != MAX_AGE_NOT_PRESENT
    }
}

impl Default for HstsHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the record back into canonical directive syntax, e.g.
/// `max-age=31536000; includeSubDomains; preload`.
impl fmt::Display for HstsHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if let Some(max_age) = self.max_age() {
            parts.push(format!("max-age={max_age}"));
        }
        if self.include_sub_domains {
            parts.push("includeSubDomains".to_string());
        }
        if self.preload {
            parts.push("preload".to_string());
        }
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing_set() {
        let header = HstsHeader::default();
        assert!(!header.preload);
        assert!(!header.include_sub_domains);
        assert_eq!(header.max_age, MAX_AGE_NOT_PRESENT);
        assert_eq!(header.max_age(), None);
        assert!(!header.has_max_age());
    }

    #[test]
    fn max_age_accessor_rejects_negatives() {
        let header = HstsHeader {
            max_age: -2,
            ..HstsHeader::new()
        };
        assert_eq!(header.max_age(), None);
        assert!(header.has_max_age());
    }

    #[test]
    fn display_is_canonical() {
        let header = HstsHeader {
            preload: true,
            include_sub_domains: true,
            max_age: 31_536_000,
        };
        assert_eq!(
            header.to_string(),
            "max-age=31536000; includeSubDomains; preload"
        );
        assert_eq!(HstsHeader::new().to_string(), "");
    }

    #[test]
    fn serializes_with_directive_names() {
        let json = serde_json::to_string(&HstsHeader::new()).unwrap();
        assert_eq!(
            json,
            r#"{"preload":false,"includeSubDomains":false,"maxAge":-1}"#
        );
    }
}
