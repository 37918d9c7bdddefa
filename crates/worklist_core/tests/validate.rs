use std::sync::Once;

use worklist_core::{validate_url, ValidationError};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(batch_logging::initialize_for_tests);
}

#[test]
fn accepts_http_and_https_schemes() {
    init_logging();
    assert_eq!(validate_url("https://example.com"), Ok("https://example.com"));
    assert_eq!(validate_url("http://example.com/a?b=c"), Ok("http://example.com/a?b=c"));
}

#[test]
fn trims_surrounding_whitespace() {
    init_logging();
    assert_eq!(validate_url("  https://example.com  \n"), Ok("https://example.com"));
}

#[test]
fn rejects_empty_and_whitespace_only_input() {
    init_logging();
    assert_eq!(validate_url(""), Err(ValidationError::Empty));
    assert_eq!(validate_url("   \t "), Err(ValidationError::Empty));
}

#[test]
fn rejects_input_without_a_scheme() {
    init_logging();
    assert_eq!(
        validate_url("not a url"),
        Err(ValidationError::MissingScheme("not a url".to_string()))
    );
    // No auto-prefixing: a bare host is rejected, not coerced to https.
    assert_eq!(
        validate_url("example.com"),
        Err(ValidationError::MissingScheme("example.com".to_string()))
    );
}

#[test]
fn rejects_scheme_without_a_host() {
    init_logging();
    assert!(matches!(
        validate_url("https://"),
        Err(ValidationError::Malformed(_))
    ));
}
