use tracing::debug;

use crate::error::HeaderError;
use crate::issues::{Issue, Issues};
use crate::parser::{decode_input, trim_ows, ParserConfig};

/// Field name of the HSTS header (matched case-insensitively).
pub const HSTS_HEADER_NAME: &str = "Strict-Transport-Security";

/// Collect every `Strict-Transport-Security` value from a raw response head.
///
/// The head is a status line starting with `HTTP/` followed by
/// `name: value` field lines. Lines may end in CRLF or a bare LF; the first
/// empty line ends the head and anything after it is ignored. Values are
/// returned OWS-trimmed, in the order they appear.
///
/// # Errors
///
/// Returns [`HeaderError::MalformedResponse`] if the status line or a field
/// line cannot be parsed.
pub fn hsts_header_values(head: &str) -> Result<Vec<&str>, HeaderError> {
    let mut lines = head
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let status_line = lines.next().unwrap_or_default();
    if !status_line.starts_with("HTTP/") {
        return Err(HeaderError::MalformedResponse {
            line: 1,
            reason: "status line does not start with `HTTP/`",
        });
    }

    let mut values = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        if line.is_empty() {
            break;
        }
        if line.starts_with([' ', '\t']) {
            return Err(HeaderError::MalformedResponse {
                line: line_no,
                reason: "obsolete line folding is not supported",
            });
        }

        let Some((name, value)) = line.split_once(':') else {
            return Err(HeaderError::MalformedResponse {
                line: line_no,
                reason: "field line has no ':' separator",
            });
        };
        if name.is_empty() || !name.bytes().all(is_tchar) {
            return Err(HeaderError::MalformedResponse {
                line: line_no,
                reason: "field name contains a non-token character",
            });
        }

        if name.eq_ignore_ascii_case(HSTS_HEADER_NAME) {
            values.push(trim_ows(value));
        }
    }

    debug!(count = values.len(), "extracted HSTS header values");
    Ok(values)
}

/// Check the HSTS values found on one response.
///
/// Exactly one value must be present (RFC 6797 §8.1: a browser only honors
/// the first). With one value this is
/// [`check_header_string`](crate::check_header_string); otherwise a single
/// response error is returned.
pub fn check_response_headers(values: &[&str]) -> Issues {
    match values {
        [] => Issues::new().with_error(Issue::response(
            "No HSTS header is present on the response.",
        )),
        [value] => crate::check_header_string(value),
        _ => Issues::new().with_error(Issue::response(format!(
            "Multiple HSTS headers (number of HSTS headers: {}).",
            values.len()
        ))),
    }
}

/// Decode, extract and check a raw response head in one call.
pub(crate) fn check_response_head_with(
    data: &[u8],
    config: &ParserConfig,
) -> Result<Issues, HeaderError> {
    let limits = ParserConfig {
        max_header_len: config.max_response_head_len,
        ..config.clone()
    };
    let head = decode_input(data, &limits)?;
    let values = hsts_header_values(head)?;
    Ok(check_response_headers(&values))
}

// ---------------------------------------------------------------------------
// Character classification (RFC 9110)
// ---------------------------------------------------------------------------

/// `tchar` – characters allowed in field names.
///
/// ```text
/// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
///         "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
/// ```
#[inline]
fn is_tchar(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'\''
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~'
            | b'0'..=b'9'
            | b'a'..=b'z'
            | b'A'..=b'Z'
    )
}
