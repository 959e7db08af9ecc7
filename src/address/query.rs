/// Search endpoint the encoded terms are appended to
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";

/// Build a search URL for free-text input.
///
/// Terms are UTF-8 percent-encoded and spaces are written as `+`, matching
/// `application/x-www-form-urlencoded`. A literal `+` is already escaped to
/// `%2B` by the encoder, so the substitution stays reversible.
pub fn encode_query(terms: &str) -> String {
    let encoded = urlencoding::encode(terms).replace("%20", "+");
    format!("{}{}", SEARCH_ENDPOINT, encoded)
}
