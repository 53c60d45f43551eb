//! URL fragment handling for deep links.

/// Extract a section id from a location hash.
///
/// Accepts the raw `location.hash` value, with or without the leading `#`.
/// Returns `None` for an empty fragment.
pub fn parse_fragment(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash).trim();
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        assert_eq!(parse_fragment("#math"), Some("math"));
        assert_eq!(parse_fragment("math"), Some("math"));
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("#  "), None);
    }
}
