//! Resource URI shortening.

/// Turn `<prefix><type>/<id>` into `<type>:<id>`.
///
/// Values that do not start with `prefix` (literals, foreign URIs, empty
/// cells) are returned unchanged.
pub fn shorten_uri(prefix: &str, value: &str) -> String {
    match value.strip_prefix(prefix) {
        Some(rest) if !prefix.is_empty() => rest.replace('/', ":"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://example.org/data/resource/";

    #[test]
    fn test_shortens_resource() {
        assert_eq!(
            shorten_uri(PREFIX, "https://example.org/data/resource/school/S1"),
            "school:S1"
        );
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            shorten_uri(PREFIX, "https://example.org/data/resource/score/2021/S1/BEL"),
            "score:2021:S1:BEL"
        );
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(shorten_uri(PREFIX, "София"), "София");
        assert_eq!(
            shorten_uri(PREFIX, "https://other.org/school/S1"),
            "https://other.org/school/S1"
        );
        assert_eq!(shorten_uri(PREFIX, ""), "");
    }

    #[test]
    fn test_empty_prefix_is_noop() {
        assert_eq!(shorten_uri("", "a/b"), "a/b");
    }
}
