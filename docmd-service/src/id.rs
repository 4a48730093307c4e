//! Document identifier extraction.

const URL_MARKER: &str = "/document/d/";

/// Whether `id` is a bare document identifier.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extract a document identifier from a bare identifier or a document URL
/// such as `https://docs.google.com/document/d/<id>/edit`.
#[must_use]
pub fn document_id(input: &str) -> Option<String> {
    let input = input.trim();
    if is_valid_id(input) {
        return Some(input.to_string());
    }
    let (_, rest) = input.split_once(URL_MARKER)?;
    let id = rest.split(['/', '?', '#']).next()?;
    is_valid_id(id).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1aBc-_9", Some("1aBc-_9"))]
    #[case("  padded  ", Some("padded"))]
    #[case("https://docs.google.com/document/d/abc123/edit", Some("abc123"))]
    #[case("https://docs.google.com/document/d/abc123", Some("abc123"))]
    #[case("https://docs.google.com/document/d/abc123?usp=sharing", Some("abc123"))]
    #[case("https://docs.google.com/document/d/abc123#heading=h.1", Some("abc123"))]
    #[case("https://docs.google.com/document/d//edit", None)]
    #[case("https://example.com/other/abc123", None)]
    #[case("../etc/passwd", None)]
    #[case("", None)]
    fn extracts_document_id(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(document_id(input).as_deref(), expected);
    }
}
