/// Metadata scraped from a fetched page body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

const META_WINDOW_CHARS: usize = 500;

/// Scan a raw page body for title, description and keywords.
///
/// This is deliberately a literal substring scan, not a markup parse.
/// Downstream consumers depend on the exact first-occurrence semantics and
/// the bounded 500-character lookahead after each meta marker, so the
/// heuristic must not be "fixed" into a real HTML parser.
pub fn extract_page_metadata(body: &str) -> PageMetadata {
    PageMetadata {
        title: extract_title(body),
        description: extract_meta_content(body, "name=\"description\""),
        keywords: extract_meta_content(body, "name=\"keywords\""),
    }
}

fn extract_title(body: &str) -> Option<String> {
    let open = "<title>";
    let start = body.find(open)? + open.len();
    let end = body.find("</title>")?;
    let text = if end > start { &body[start..end] } else { "" };
    Some(text.trim().to_string())
}

/// First `content="..."` within 500 characters of the first `marker`.
fn extract_meta_content(body: &str, marker: &str) -> Option<String> {
    let start = body.find(marker)?;
    let window = bounded_window(&body[start..], META_WINDOW_CHARS);
    let content_marker = "content=\"";
    let value_start = window.find(content_marker)? + content_marker.len();
    let rest = &window[value_start..];
    let value_end = rest.find('"')?;
    Some(rest[..value_end].trim().to_string())
}

/// At most `chars` characters from the start of `text`, clamped to a char
/// boundary.
fn bounded_window(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
