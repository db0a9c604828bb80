/// Lenient numeric parsing for form inputs. Blank or unparseable text keeps
/// the previous value instead of zeroing it.
pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f64>().unwrap_or(fallback)
}

/// `#rgb` or `#rrggbb`, case-insensitive.
pub fn is_valid_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalizes a color edit: valid hex passes through lowercased, anything
/// else keeps the fallback.
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if is_valid_hex_color(trimmed) {
        trimmed.to_ascii_lowercase()
    } else {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_input_falls_back() {
        assert_eq!(parse_f64_input("42.5", 0.0), 42.5);
        assert_eq!(parse_f64_input("  ", 7.0), 7.0);
        assert_eq!(parse_f64_input("nope", 7.0), 7.0);
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#FFC107"));
        assert!(!is_valid_hex_color("ffc107"));
        assert!(!is_valid_hex_color("#ffc1"));
        assert!(!is_valid_hex_color("#ggg"));
    }

    #[test]
    fn test_normalize_hex_color() {
        assert_eq!(normalize_hex_color(" #FFC107 ", "#000000"), "#ffc107");
        assert_eq!(normalize_hex_color("red", "#007bff"), "#007bff");
    }
}
