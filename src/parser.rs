use tracing::{debug, trace};

use crate::error::HeaderError;
use crate::issues::{Issue, Issues};
use crate::types::HstsHeader;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Limits applied to raw input by the byte-oriented entry points.
///
/// The `&str` entry points ([`parse_header_string`] and friends) take the
/// caller's string as-is and are not limited.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum length of a raw header value in bytes (default: 8 192).
    pub max_header_len: usize,
    /// Maximum length of a raw response head in bytes (default: 64 KiB).
    pub max_response_head_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_header_len: 8_192,
            max_response_head_len: 64 * 1024,
        }
    }
}

/// Apply the `max_header_len` limit to raw bytes and view them as UTF-8.
pub(crate) fn decode_input<'a>(
    data: &'a [u8],
    config: &ParserConfig,
) -> Result<&'a str, HeaderError> {
    if data.len() > config.max_header_len {
        return Err(HeaderError::TooLarge {
            len: data.len(),
            max: config.max_header_len,
        });
    }
    std::str::from_utf8(data).map_err(|e| HeaderError::NotUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Directive grammar
// ---------------------------------------------------------------------------

const PRELOAD: &str = "preload";
const INCLUDE_SUB_DOMAINS: &str = "includeSubDomains";
const MAX_AGE: &str = "max-age";
const MAX_AGE_ASSIGN: &str = "max-age=";

/// What a single trimmed directive token turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    Empty,
    Preload,
    IncludeSubDomains,
    /// `max-age=<value>`; `value` is everything after the `=`.
    MaxAge { value: &'a str },
    /// Starts with `max-age` but has no `=`.
    MaxAgeWithoutValue,
    Unknown,
}

impl<'a> Directive<'a> {
    fn classify(token: &'a str) -> Self {
        if token.is_empty() {
            Self::Empty
        } else if token.eq_ignore_ascii_case(PRELOAD) {
            Self::Preload
        } else if token.eq_ignore_ascii_case(INCLUDE_SUB_DOMAINS) {
            Self::IncludeSubDomains
        } else if let Some(value) = strip_prefix_ignore_case(token, MAX_AGE_ASSIGN) {
            Self::MaxAge { value }
        } else if strip_prefix_ignore_case(token, MAX_AGE).is_some() {
            Self::MaxAgeWithoutValue
        } else {
            Self::Unknown
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a `Strict-Transport-Security` header value.
///
/// This never fails: every problem found is reported in the returned
/// [`Issues`], in directive order, and the record holds whatever could be
/// recognized. All diagnostics are in the syntax category.
///
/// ```rust
/// use hstspreload::{parse_header_string, MAX_AGE_NOT_PRESENT};
///
/// let (header, issues) = parse_header_string("preload; max-age");
/// assert!(header.preload);
/// assert_eq!(header.max_age, MAX_AGE_NOT_PRESENT);
/// assert_eq!(issues.errors.len(), 1);
/// ```
pub fn parse_header_string(header_string: &str) -> (HstsHeader, Issues) {
    let mut header = HstsHeader::new();
    let mut issues = Issues::new();

    if trim_ows(header_string).is_empty() {
        issues.add_warning(Issue::syntax("Header is empty."));
        debug!("empty Strict-Transport-Security value");
        return (header, issues);
    }

    for token in header_string.split(';').map(trim_ows) {
        let directive = Directive::classify(token);
        trace!(token, ?directive, "classified directive");

        match directive {
            Directive::Empty => {
                issues.add_warning(Issue::syntax(
                    "Header includes an empty directive or extra semicolon.",
                ));
            }
            Directive::Preload => {
                // Only `preload` warns on repetition.
                if header.preload {
                    issues.add_warning(Issue::syntax(
                        "Header contains a repeated directive: `preload`",
                    ));
                }
                header.preload = true;
            }
            Directive::IncludeSubDomains => {
                if token != INCLUDE_SUB_DOMAINS {
                    issues.add_warning(Issue::syntax(format!(
                        "Header contains the token `{token}`. \
                         The recommended capitalization is `{INCLUDE_SUB_DOMAINS}`."
                    )));
                }
                header.include_sub_domains = true;
            }
            Directive::MaxAge { value } => {
                if let Some(max_age) = parse_max_age(token, value, &mut issues) {
                    header.max_age = max_age;
                }
            }
            Directive::MaxAgeWithoutValue => {
                issues.add_error(Issue::syntax(
                    "A max-age directive name is present without an associated value.",
                ));
            }
            Directive::Unknown => {
                issues.add_warning(Issue::syntax(format!(
                    "Header contains an unknown directive: `{token}`"
                )));
            }
        }
    }

    debug!(
        errors = issues.errors.len(),
        warnings = issues.warnings.len(),
        "parsed Strict-Transport-Security value"
    );
    (header, issues)
}

/// Validate the digits of a `max-age=` directive.
///
/// Returns the value to store, or `None` (with an error recorded) when the
/// record must keep its previous `max_age`.
fn parse_max_age(token: &str, value: &str, issues: &mut Issues) -> Option<i64> {
    if value.is_empty() {
        issues.add_error(Issue::syntax(
            "A max-age directive name is present without an associated value.",
        ));
        return None;
    }

    if value.len() > 1 && value.starts_with('0') {
        issues.add_warning(Issue::syntax(format!(
            "max-age value contains a leading 0: `{token}`"
        )));
    }

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        issues.add_error(Issue::syntax(format!(
            "max-age value contains characters that are not digits: `{token}`"
        )));
        return None;
    }

    // Digits only, so the sole possible failure is overflow.
    match value.parse::<i64>() {
        Ok(max_age) => Some(max_age),
        Err(_) => {
            issues.add_error(Issue::syntax(format!(
                "max-age value does not fit in 63 bits: `{token}`"
            )));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Strip surrounding optional whitespace (SP / HTAB, RFC 9110 `OWS`).
#[inline]
pub(crate) fn trim_ows(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

/// `s` without `prefix`, if `s` starts with `prefix` ignoring ASCII case.
#[inline]
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests (unit)
// ---------------------------------------------------------------------------
