//! Query preparation for the text search endpoint

/// Append the proximity qualifier to the raw query text
///
/// An empty qualifier leaves the query unchanged.
pub fn qualify_query(query: &str, qualifier: &str) -> String {
    if qualifier.is_empty() {
        query.to_string()
    } else {
        format!("{query} {qualifier}")
    }
}

/// Percent-encode a string for use in URL query parameters
///
/// Encodes all characters except unreserved characters (`A-Z`, `a-z`, `0-9`,
/// `-`, `_`, `.`, `~`). Spaces are encoded as `+`. Every `&str` is valid
/// UTF-8, so encoding cannot fail and there is no unencoded fallback path.
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            },
            b' ' => result.push('+'),
            _ => result.push_str(&format!("%{byte:02X}")),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_is_appended() {
        assert_eq!(qualify_query("pizza", "near me"), "pizza near me");
    }

    #[test]
    fn empty_qualifier_keeps_query() {
        assert_eq!(qualify_query("pizza", ""), "pizza");
    }

    #[test]
    fn encode_qualified_query() {
        assert_eq!(encode("pizza near me"), "pizza+near+me");
    }

    #[test]
    fn encode_reserved_chars() {
        assert_eq!(encode("fish & chips=good"), "fish+%26+chips%3Dgood");
    }

    #[test]
    fn encode_unreserved_chars() {
        assert_eq!(encode("abc-123_test.file~v2"), "abc-123_test.file~v2");
    }

    #[test]
    fn encode_unicode() {
        assert_eq!(encode("café"), "caf%C3%A9");
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode(""), "");
    }
}
