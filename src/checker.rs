use tracing::{debug, error};

use crate::issues::{Issue, Issues};
use crate::types::{HstsHeader, MAX_AGE_CLAMP, MAX_AGE_NOT_PRESENT, MIN_PRELOAD_MAX_AGE};

/// Check a parsed header against the preload-list requirements.
///
/// Problems accumulate in a fixed order: `includeSubDomains`, then
/// `preload`, then `max-age`. A negative `max_age` other than
/// [`MAX_AGE_NOT_PRESENT`] cannot come out of the parser; it yields a single
/// internal error and nothing else.
pub fn check_header(header: &HstsHeader) -> Issues {
    let mut issues = Issues::new();

    if header.max_age < 0 && header.max_age != MAX_AGE_NOT_PRESENT {
        error!(max_age = header.max_age, "impossible max-age in header record");
        issues.add_error(Issue::internal(format!(
            "encountered a header with a negative max-age that does not equal \
             the not-present sentinel: {}",
            header.max_age
        )));
        return issues;
    }

    if !header.include_sub_domains {
        issues.add_error(Issue::requirement(
            "Header must contain the `includeSubDomains` directive.",
        ));
    }

    if !header.preload {
        issues.add_error(Issue::requirement(
            "Header must contain the `preload` directive.",
        ));
    }

    match header.max_age {
        MAX_AGE_NOT_PRESENT => {
            issues.add_error(Issue::requirement(
                "Header must contain a valid `max-age` directive.",
            ));
        }
        max_age if max_age < MIN_PRELOAD_MAX_AGE => {
            issues.add_error(Issue::requirement(format!(
                "The max-age must be at least {MIN_PRELOAD_MAX_AGE} seconds (== 18 weeks), \
                 but the header only had max-age={max_age}."
            )));
        }
        max_age if max_age > MAX_AGE_CLAMP => {
            issues.add_warning(Issue::requirement(format!(
                "The max-age ({max_age} seconds) is longer than a year. Note that Chrome \
                 will round HSTS header max-age values down to 1 year ({MAX_AGE_CLAMP} seconds)."
            )));
        }
        _ => {}
    }

    debug!(
        errors = issues.errors.len(),
        warnings = issues.warnings.len(),
        "checked preload requirements"
    );
    issues
}
