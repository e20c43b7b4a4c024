//! CLI argument validators.

use crate::constants::confidence;

/// Parse and validate a confidence threshold (0.0-1.0).
///
/// Rejects percentage-scale values such as `65`.
pub fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(confidence::MIN..=confidence::MAX).contains(&value) {
        return Err(format!(
            "threshold must be between {} and {}, got {value}",
            confidence::MIN,
            confidence::MAX
        ));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_valid() {
        assert_eq!(parse_threshold("0.65").ok(), Some(0.65));
        assert_eq!(parse_threshold("0").ok(), Some(0.0));
        assert_eq!(parse_threshold("1.0").ok(), Some(1.0));
    }

    #[test]
    fn test_parse_threshold_invalid() {
        assert!(parse_threshold("65").is_err());
        assert!(parse_threshold("-0.1").is_err());
        assert!(parse_threshold("NaN").is_err());
        let err = parse_threshold("abc").unwrap_err();
        assert!(err.contains("not a valid number"));
    }
}
