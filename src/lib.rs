//! # hstspreload
//!
//! Parses the value of an HTTP **`Strict-Transport-Security`** header and
//! checks it against the requirements for inclusion in browsers' HSTS
//! **preload list**, which are stricter than RFC 6797 itself.
//!
//! Nothing here fails on bad input. Each stage returns [`Issues`]: every
//! problem found, in order, split into errors and warnings.
//!
//! - [`parse_header_string`] reports syntax problems and yields an
//!   [`HstsHeader`] record.
//! - [`check_header`] reports preload-requirement problems on a record.
//! - [`check_header_string`] does both, parse issues first.
//!
//! ## Quick start
//!
//! ```rust
//! use hstspreload::check_header_string;
//!
//! let issues = check_header_string("max-age=31536000; includeSubDomains; preload");
//! assert!(issues.is_empty());
//!
//! let issues = check_header_string("max-age=100; includeSubDomains");
//! assert_eq!(issues.errors.len(), 2);
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use hstspreload::{check_header_string, format_text};
//!
//! let text = format_text(&check_header_string("preload; preload"));
//! assert!(text.contains("Syntax warning: Header contains a repeated directive: `preload`"));
//! ```

mod checker;
mod error;
mod issues;
mod output;
mod parser;
mod response;
mod types;

// Re-export public API.
pub use checker::check_header;
pub use error::HeaderError;
pub use issues::{Category, Issue, Issues, Severity};
pub use output::{format_header, format_json, format_parse_json, format_text};
pub use parser::{parse_header_string, ParserConfig};
pub use response::{check_response_headers, hsts_header_values, HSTS_HEADER_NAME};
pub use types::{HstsHeader, MAX_AGE_CLAMP, MAX_AGE_NOT_PRESENT, MIN_PRELOAD_MAX_AGE};

/// Parse a header value and check the result against the preload
/// requirements.
///
/// The returned errors are the parse errors followed by the check errors;
/// likewise for warnings.
pub fn check_header_string(header_string: &str) -> Issues {
    let (header, parse_issues) = parse_header_string(header_string);
    parse_issues.append(check_header(&header))
}

/// Parse a header value given as raw bytes, with default [`ParserConfig`]
/// limits.
///
/// # Errors
///
/// Returns [`HeaderError`] if the input is too large or not UTF-8.
pub fn parse_header_bytes(data: &[u8]) -> Result<(HstsHeader, Issues), HeaderError> {
    parse_header_bytes_with_config(data, &ParserConfig::default())
}

/// Parse a header value given as raw bytes using custom limits.
///
/// # Errors
///
/// Returns [`HeaderError`] if the input is too large or not UTF-8.
pub fn parse_header_bytes_with_config(
    data: &[u8],
    config: &ParserConfig,
) -> Result<(HstsHeader, Issues), HeaderError> {
    let header_string = parser::decode_input(data, config)?;
    Ok(parse_header_string(header_string))
}

/// Byte-input form of [`check_header_string`], with default limits.
///
/// # Errors
///
/// Returns [`HeaderError`] if the input is too large or not UTF-8.
pub fn check_header_bytes(data: &[u8]) -> Result<Issues, HeaderError> {
    check_header_bytes_with_config(data, &ParserConfig::default())
}

/// Byte-input form of [`check_header_string`] using custom limits.
///
/// # Errors
///
/// Returns [`HeaderError`] if the input is too large or not UTF-8.
pub fn check_header_bytes_with_config(
    data: &[u8],
    config: &ParserConfig,
) -> Result<Issues, HeaderError> {
    let header_string = parser::decode_input(data, config)?;
    Ok(check_header_string(header_string))
}

/// Check a raw HTTP response head: it must carry exactly one
/// `Strict-Transport-Security` field, whose value must pass
/// [`check_header_string`].
///
/// # Errors
///
/// Returns [`HeaderError`] if the head is too large, not UTF-8, or cannot be
/// split into a status line and field lines.
pub fn check_response_head(data: &[u8]) -> Result<Issues, HeaderError> {
    check_response_head_with_config(data, &ParserConfig::default())
}

/// [`check_response_head`] using custom limits
/// ([`ParserConfig::max_response_head_len`] applies).
///
/// # Errors
///
/// See [`check_response_head`].
pub fn check_response_head_with_config(
    data: &[u8],
    config: &ParserConfig,
) -> Result<Issues, HeaderError> {
    response::check_response_head_with(data, config)
}
