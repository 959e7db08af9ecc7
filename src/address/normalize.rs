use super::classify::has_web_scheme;

/// Turn URL-like input into a fully-qualified URL by adding `https://` when no web scheme is present
pub fn normalize(input: &str) -> String {
    if has_web_scheme(input) {
        return input.to_string();
    }

    format!("https://{}", input)
}
