/// How a piece of address-bar input should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Navigable address, possibly missing its scheme
    UrlLike,
    /// Free text to hand to the search engine
    SearchLike,
}

/// Classify trimmed, non-empty address-bar input as a URL or a search query.
///
/// Rules are checked in order and the first match wins:
/// 1. any whitespace means search terms
/// 2. an explicit `http://` or `https://` prefix means URL
/// 3. a dot anywhere means URL (so dotted phrases like "e.g." are treated as hosts)
/// 4. `localhost`, with or without a port, means URL
/// 5. everything else is a search
pub fn classify(input: &str) -> InputKind {
    if input.chars().any(char::is_whitespace) {
        return InputKind::SearchLike;
    }

    if has_web_scheme(input) {
        return InputKind::UrlLike;
    }

    if input.contains('.') {
        return InputKind::UrlLike;
    }

    if is_localhost(input) {
        return InputKind::UrlLike;
    }

    InputKind::SearchLike
}

/// True when the input carries an explicit `http://` or `https://` scheme (case-sensitive)
pub fn has_web_scheme(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn is_localhost(input: &str) -> bool {
    const LOCALHOST: &str = "localhost";

    if input.eq_ignore_ascii_case(LOCALHOST) {
        return true;
    }

    // `get` keeps us on a char boundary for non-ASCII input
    match input.get(..LOCALHOST.len() + 1) {
        Some(prefix) => prefix.eq_ignore_ascii_case("localhost:"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_means_search() {
        assert_eq!(classify("open source project"), InputKind::SearchLike);
        assert_eq!(classify("e.g. test"), InputKind::SearchLike);
        assert_eq!(classify("https://example.com with words"), InputKind::SearchLike);
        assert_eq!(classify("tab\tseparated"), InputKind::SearchLike);
    }

    #[test]
    fn test_explicit_scheme() {
        assert_eq!(classify("https://example.com"), InputKind::UrlLike);
        assert_eq!(classify("http://intranet"), InputKind::UrlLike);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        // No dot and an uppercase scheme falls through to search
        assert_eq!(classify("HTTP://intranet"), InputKind::SearchLike);
        assert_eq!(classify("HTTPS://example.com"), InputKind::UrlLike);
    }

    #[test]
    fn test_dotted_input_is_url() {
        assert_eq!(classify("example.com"), InputKind::UrlLike);
        assert_eq!(classify("sub.example.com/path?x=1"), InputKind::UrlLike);
        assert_eq!(classify("127.0.0.1:8080"), InputKind::UrlLike);
        assert_eq!(classify("e.g."), InputKind::UrlLike);
    }

    #[test]
    fn test_localhost() {
        assert_eq!(classify("localhost"), InputKind::UrlLike);
        assert_eq!(classify("LocalHost"), InputKind::UrlLike);
        assert_eq!(classify("localhost:8080"), InputKind::UrlLike);
        assert_eq!(classify("LOCALHOST:3000/api"), InputKind::UrlLike);
        assert_eq!(classify("localhosts"), InputKind::SearchLike);
    }

    #[test]
    fn test_single_word_is_search() {
        assert_eq!(classify("search"), InputKind::SearchLike);
        assert_eq!(classify("rust"), InputKind::SearchLike);
        assert_eq!(classify("日本語"), InputKind::SearchLike);
        assert_eq!(classify("ローカルホスト:1"), InputKind::SearchLike);
    }

    #[test]
    fn test_has_web_scheme() {
        assert!(has_web_scheme("http://a"));
        assert!(has_web_scheme("https://a"));
        assert!(!has_web_scheme("ftp://a"));
        assert!(!has_web_scheme("mailto:someone@example.com"));
    }
}
