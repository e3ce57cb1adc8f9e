use serde::Serialize;

use crate::issues::{Issues, Severity};
use crate::types::HstsHeader;

#[derive(Serialize)]
struct ParseReport<'a> {
    header: &'a HstsHeader,
    issues: &'a Issues,
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

/// Serialize [`Issues`] to a JSON string.
///
/// When `pretty` is `true` the output is indented for readability.
pub fn format_json(issues: &Issues, pretty: bool) -> String {
    to_json(issues, pretty)
}

/// Serialize a parse result as `{"header": ..., "issues": ...}`.
pub fn format_parse_json(header: &HstsHeader, issues: &Issues, pretty: bool) -> String {
    to_json(&ParseReport { header, issues }, pretty)
}

/// Render diagnostics one per line, errors first, each prefixed with its
/// label (e.g. `Syntax warning: Header is empty.`).
pub fn format_text(issues: &Issues) -> String {
    if issues.is_empty() {
        return "No issues found.\n".to_string();
    }

    let mut out = String::with_capacity(128 * (issues.errors.len() + issues.warnings.len()));
    for issue in &issues.errors {
        out.push_str(&issue.render(Severity::Error));
        out.push('\n');
    }
    for issue in &issues.warnings {
        out.push_str(&issue.render(Severity::Warning));
        out.push('\n');
    }
    out
}

/// Render a parsed record in a human-readable summary.
pub fn format_header(header: &HstsHeader) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let max_age = match header.max_age() {
        Some(seconds) => seconds.to_string(),
        None => "(not present)".to_string(),
    };

    let mut out = String::with_capacity(128);
    out.push_str("=== Strict-Transport-Security ===\n");
    out.push_str(&format!("preload:           {}\n", yes_no(header.preload)));
    out.push_str(&format!(
        "includeSubDomains: {}\n",
        yes_no(header.include_sub_domains)
    ));
    out.push_str(&format!("max-age:           {max_age}\n"));
    out.push_str("=================================\n");
    out
}
