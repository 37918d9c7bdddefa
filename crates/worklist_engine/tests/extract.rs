use pretty_assertions::assert_eq;
use worklist_engine::{decode_body, extract_page_metadata};

#[test]
fn title_is_extracted_exactly_and_trimmed() {
    let body = "<html><head><title>  Hello </title></head><body></body></html>";
    let page = extract_page_metadata(body);
    assert_eq!(page.title.as_deref(), Some("Hello"));
}

#[test]
fn first_title_occurrence_wins() {
    let body = "<title>First</title><title>Second</title>";
    let page = extract_page_metadata(body);
    assert_eq!(page.title.as_deref(), Some("First"));
}

#[test]
fn missing_title_tags_yield_none() {
    assert_eq!(extract_page_metadata("<html></html>").title, None);
    assert_eq!(extract_page_metadata("<title>never closed").title, None);
}

#[test]
fn description_is_found_via_content_attribute() {
    let body = r#"<meta name="description" content="A fine page.">"#;
    let page = extract_page_metadata(body);
    assert_eq!(page.description.as_deref(), Some("A fine page."));
}

#[test]
fn keywords_are_found_independently_of_description() {
    let body = r#"
        <meta name="keywords" content="alpha, beta">
        <meta name="description" content="Desc here">
    "#;
    let page = extract_page_metadata(body);
    assert_eq!(page.keywords.as_deref(), Some("alpha, beta"));
    assert_eq!(page.description.as_deref(), Some("Desc here"));
}

#[test]
fn content_outside_the_500_char_window_is_ignored() {
    let filler = "x".repeat(600);
    let body = format!(r#"<meta name="description" {filler} content="too far">"#);
    let page = extract_page_metadata(&body);
    assert_eq!(page.description, None);
}

#[test]
fn content_just_inside_the_window_is_found() {
    // Marker (18 chars) + filler keeps `content="` within the 500-char
    // lookahead that starts at the marker itself.
    let filler = "x".repeat(400);
    let body = format!(r#"<meta name="description" {filler} content="near enough">"#);
    let page = extract_page_metadata(&body);
    assert_eq!(page.description.as_deref(), Some("near enough"));
}

#[test]
fn unterminated_content_attribute_yields_none() {
    let body = r#"<meta name="description" content="never closed"#;
    let page = extract_page_metadata(body);
    assert_eq!(page.description, None);
}

#[test]
fn multibyte_text_near_the_window_edge_does_not_panic() {
    let filler = "あ".repeat(520);
    let body = format!(r#"<meta name="description" {filler} content="far away">"#);
    let page = extract_page_metadata(&body);
    assert_eq!(page.description, None);
}

#[test]
fn charset_header_is_honored() {
    let bytes = b"caf\xe9"; // iso-8859-1
    let decoded = decode_body(bytes, Some("text/html; charset=ISO-8859-1"));
    assert_eq!(decoded.text, "caf\u{e9}");
}

#[test]
fn utf8_bom_is_detected_and_stripped() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_body(bytes, Some("text/html"));
    assert_eq!(decoded.text, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_is_lossy_rather_than_failing() {
    // Invalid UTF-8 under an explicit utf-8 label becomes a replacement
    // character instead of an error.
    let bytes = b"ok \xff\xfe ok";
    let decoded = decode_body(bytes, Some("text/html; charset=utf-8"));
    assert!(decoded.text.starts_with("ok "));
    assert!(decoded.text.contains('\u{FFFD}'));
}
