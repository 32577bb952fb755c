use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Longest section name accepted by the name prompt, in characters.
pub const MAX_NAME_LEN: usize = 25;

pub const NAME_TOO_LONG: &str = "File name must not exceed 25 characters";

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_&$%@#]").expect("separator pattern is valid"));

/// Map a section name to the slug used for file names and CSS classes.
///
/// Whitespace and `_ & $ % @ #` become `-`, everything is lowercased.
/// Repeated, leading and trailing dashes are kept as-is.
pub fn normalize(input: &str) -> String {
    SLUG_SEPARATORS.replace_all(input, "-").to_lowercase()
}

/// Human-readable name for the schema preset: `my-cool-section` -> `My Cool Section`.
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Validator used by the name prompt. Returns the message to show, or `None` when valid.
pub fn validate_name_length(input: &str) -> Option<String> {
    if input.chars().count() > MAX_NAME_LEN {
        Some(NAME_TOO_LONG.to_string())
    } else {
        None
    }
}

/// Reject slugs that would escape `sections/` or `assets/` when joined as a file name.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::validation_invalid_name(
            slug,
            "Section name cannot be empty",
        ));
    }

    if slug == "." || slug == ".." {
        return Err(Error::validation_invalid_name(
            slug,
            "Section name resolves to an unsafe path",
        ));
    }

    if slug.chars().any(|c| c == '/' || c == '\\' || c == '\0') {
        return Err(Error::validation_invalid_name(
            slug,
            "Section name contains path separators",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic_name() {
        assert_eq!(normalize("My Cool Section"), "my-cool-section");
    }

    #[test]
    fn normalize_replaces_special_chars() {
        assert_eq!(normalize("a_b&c$d%e@f#g"), "a-b-c-d-e-f-g");
    }

    #[test]
    fn normalize_keeps_repeated_and_edge_dashes() {
        assert_eq!(normalize(" Hero  Banner "), "-hero--banner-");
    }

    #[test]
    fn normalize_replaces_tabs_and_newlines() {
        assert_eq!(normalize("a\tb\nc"), "a-b-c");
    }

    #[test]
    fn normalize_leaves_other_punctuation() {
        assert_eq!(normalize("FAQ!"), "faq!");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["My Cool Section", "  __x__  ", "A&B$C", "Ünïcödé Nämé", "already-a-slug"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn normalize_output_has_no_separators_or_uppercase() {
        for input in ["Hello World", "A_B_C", "x@y#z", "MiXeD $ % Case", "Tab\tHere"] {
            let slug = normalize(input);
            assert!(!slug.chars().any(char::is_whitespace), "{}", slug);
            assert!(!slug.chars().any(|c| "_&$%@#".contains(c)), "{}", slug);
            assert!(!slug.chars().any(char::is_uppercase), "{}", slug);
        }
    }

    #[test]
    fn display_name_capitalizes_each_token() {
        assert_eq!(display_name("my-cool-section"), "My Cool Section");
    }

    #[test]
    fn display_name_keeps_empty_tokens() {
        assert_eq!(display_name("a--b"), "A  B");
    }

    #[test]
    fn length_validator_accepts_limit() {
        assert_eq!(validate_name_length(&"a".repeat(25)), None);
    }

    #[test]
    fn length_validator_rejects_over_limit() {
        assert_eq!(
            validate_name_length(&"a".repeat(26)).as_deref(),
            Some(NAME_TOO_LONG)
        );
    }

    #[test]
    fn length_validator_counts_chars_not_bytes() {
        assert_eq!(validate_name_length(&"é".repeat(25)), None);
    }

    #[test]
    fn validate_slug_rejects_traversal() {
        assert!(validate_slug("..").is_err());
        assert!(validate_slug(".").is_err());
        assert!(validate_slug("../etc").is_err());
        assert!(validate_slug("a\\b").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn validate_slug_accepts_normal_and_dotted() {
        assert!(validate_slug("my-cool-section").is_ok());
        assert!(validate_slug(".hidden").is_ok());
        assert!(validate_slug("-").is_ok());
    }
}
