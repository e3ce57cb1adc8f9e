use hstspreload::{
    check_header, check_header_string, parse_header_string, MAX_AGE_CLAMP, MAX_AGE_NOT_PRESENT,
    MIN_PRELOAD_MAX_AGE,
};
use proptest::prelude::*;

/// Optional whitespace around a directive.
fn ows() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// The three required directives with a compliant max-age, shuffled.
fn compliant_directives() -> impl Strategy<Value = Vec<String>> {
    (MIN_PRELOAD_MAX_AGE..=MAX_AGE_CLAMP).prop_flat_map(|max_age| {
        Just(vec![
            "preload".to_string(),
            "includeSubDomains".to_string(),
            format!("max-age={max_age}"),
        ])
        .prop_shuffle()
    })
}

/// Directive-ish tokens, valid and invalid, in random casing.
fn directive_soup() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("preload".to_string()),
        Just("PRELOAD".to_string()),
        Just("includeSubDomains".to_string()),
        Just("includesubdomains".to_string()),
        Just("max-age".to_string()),
        Just(String::new()),
        "max-age=[0-9+-]{0,22}",
        "[a-zA-Z=\"-]{1,12}",
    ];
    (prop::collection::vec((ows(), token, ows()), 0..8)).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(l, t, r)| format!("{l}{t}{r}"))
            .collect::<Vec<_>>()
            .join(";")
    })
}

proptest! {
    #[test]
    fn compliant_headers_have_no_issues(
        directives in compliant_directives(),
        pads in prop::collection::vec((ows(), ows()), 3),
    ) {
        let header = directives
            .iter()
            .zip(&pads)
            .map(|(d, (l, r))| format!("{l}{d}{r}"))
            .collect::<Vec<_>>()
            .join(";");
        let issues = check_header_string(&header);
        prop_assert!(issues.is_empty(), "{header:?} gave {issues:?}");
    }

    #[test]
    fn merge_law_holds(input in directive_soup()) {
        let (header, parse_issues) = parse_header_string(&input);
        let check_issues = check_header(&header);
        let combined = check_header_string(&input);

        let mut errors = parse_issues.errors.clone();
        errors.extend(check_issues.errors.clone());
        let mut warnings = parse_issues.warnings.clone();
        warnings.extend(check_issues.warnings.clone());

        prop_assert_eq!(combined.errors, errors);
        prop_assert_eq!(combined.warnings, warnings);
    }

    #[test]
    fn parsing_is_deterministic(input in directive_soup()) {
        prop_assert_eq!(parse_header_string(&input), parse_header_string(&input));
    }

    #[test]
    fn parsed_max_age_respects_invariant(input in directive_soup()) {
        let (header, _) = parse_header_string(&input);
        prop_assert!(header.max_age == MAX_AGE_NOT_PRESENT || header.max_age >= 0);
    }

    #[test]
    fn parsed_records_never_hit_internal_error(input in directive_soup()) {
        let (header, _) = parse_header_string(&input);
        let issues = check_header(&header);
        prop_assert!(issues
            .errors
            .iter()
            .all(|i| i.category != hstspreload::Category::Internal));
    }

    #[test]
    fn arbitrary_strings_never_panic(input in ".{0,64}") {
        let _ = check_header_string(&input);
    }

    #[test]
    fn casing_does_not_change_the_record(
        max_age in 0i64..=i64::MAX,
        upper in any::<bool>(),
    ) {
        let canonical = format!("preload; includeSubDomains; max-age={max_age}");
        let variant = if upper {
            canonical.to_ascii_uppercase()
        } else {
            canonical.to_ascii_lowercase()
        };
        prop_assert_eq!(parse_header_string(&variant).0, parse_header_string(&canonical).0);
    }
}
