//! Input validation primitives.
//!
//! Turns raw flag values into typed values, producing
//! `Error::validation_invalid_argument` with the accepted values on failure.

use crate::error::{Error, Result};

/// Parse an optional flag value, listing the accepted values when it does not match.
///
/// ```ignore
/// let css = validation::parse_optional(args.css.as_deref(), "css", StylesheetStrategy::parse, &allowed)?;
/// ```
pub fn parse_optional<T>(
    value: Option<&str>,
    field: &str,
    parse: impl Fn(&str) -> Option<T>,
    accepted: &[&str],
) -> Result<Option<T>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    let parsed = parse(raw);
    if parsed.is_none() {
        return Err(Error::validation_invalid_argument(
            field,
            format!("Expected one of: {}", accepted.join(", ")),
            Some(raw.to_string()),
            Some(accepted.iter().map(|s| s.to_string()).collect()),
        ));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_color(s: &str) -> Option<u8> {
        match s {
            "red" => Some(1),
            "blue" => Some(2),
            _ => None,
        }
    }

    #[test]
    fn parse_optional_passes_through_none() {
        let result = parse_optional(None, "color", parse_color, &["red", "blue"]);
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn parse_optional_parses_known_value() {
        let result = parse_optional(Some("blue"), "color", parse_color, &["red", "blue"]);
        assert_eq!(result.unwrap(), Some(2));
    }

    #[test]
    fn parse_optional_lists_accepted_values() {
        let err = parse_optional(Some("green"), "color", parse_color, &["red", "blue"]).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["field"], "color");
        assert_eq!(err.details["value"], "green");
        assert_eq!(err.details["tried"], serde_json::json!(["red", "blue"]));
    }
}
