/// What: Strip a trailing `# comment` or `// comment` from a config value.
///
/// Inputs:
/// - `s`: Raw value text after `=`.
///
/// Output:
/// - Value without the inline comment, trimmed.
///
/// Details:
/// - `#` only starts a comment when preceded by whitespace, so `#` inside URLs survives.
/// - `//` only starts a comment when preceded by whitespace, so `https://` survives.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut cut = s.len();
    for i in 0..bytes.len() {
        let preceded_by_space = i > 0 && bytes[i - 1].is_ascii_whitespace();
        if !preceded_by_space {
            continue;
        }
        if bytes[i] == b'#' || (bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'/')) {
            cut = i;
            break;
        }
    }
    s[..cut].trim()
}

/// What: Interpret common boolean spellings.
///
/// Output:
/// - `Some(true)` for true/1/yes/on, `Some(false)` for false/0/no/off, `None` otherwise.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Normalise a config key: lowercase, with `.`, `-`, and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are removed without breaking URLs.
    fn strip_inline_comment_keeps_urls() {
        assert_eq!(strip_inline_comment("true # comment"), "true");
        assert_eq!(strip_inline_comment("false // trailing"), "false");
        assert_eq!(
            strip_inline_comment("https://hn.algolia.com/api/v1 # api"),
            "https://hn.algolia.com/api/v1"
        );
        assert_eq!(strip_inline_comment("C#"), "C#");
    }

    #[test]
    /// What: Boolean spellings and key normalisation.
    fn parse_bool_and_keys() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(normalize_key(" Discard-Stale.Responses "), "discard_stale_responses");
    }
}
