//! Indian mobile numbers: ten digits starting with 6-9, optionally behind
//! the `+91` country code.

const COUNTRY_CODE: &str = "+91";
const LOCAL_DIGITS: usize = 10;

fn is_leading_digit(c: char) -> bool {
    matches!(c, '6'..='9')
}

/// Cleans raw keyboard input into something that can only grow into a
/// valid number. Runs on every keystroke.
pub fn normalize_mobile(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if let Some(rest) = cleaned.strip_prefix(COUNTRY_CODE) {
        let digits: String = rest
            .chars()
            .filter(char::is_ascii_digit)
            .take(LOCAL_DIGITS)
            .collect();
        return format!("{}{}", COUNTRY_CODE, digits);
    }

    let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 1 && !digits.starts_with(is_leading_digit) {
        return String::new();
    }
    digits.chars().take(LOCAL_DIGITS).collect()
}

pub fn is_valid_mobile(value: &str) -> bool {
    let local = value.strip_prefix(COUNTRY_CODE).unwrap_or(value);
    local.len() == LOCAL_DIGITS
        && local.chars().all(|c| c.is_ascii_digit())
        && local.starts_with(is_leading_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators() {
        assert_eq!(normalize_mobile("98-76-543-210"), "9876543210");
        assert_eq!(normalize_mobile("(987) 654 3210"), "9876543210");
    }

    #[test]
    fn keeps_country_code_and_caps_length() {
        assert_eq!(normalize_mobile("+91 98765 43210 999"), "+919876543210");
        assert_eq!(normalize_mobile("+91+98"), "+9198");
        assert_eq!(normalize_mobile("+91"), "+91");
    }

    #[test]
    fn drops_bad_first_digit() {
        assert_eq!(normalize_mobile("5"), "");
        assert_eq!(normalize_mobile("0"), "");
        assert_eq!(normalize_mobile("7"), "7");
        // Only a lone leading digit is rejected, pasted numbers are kept.
        assert_eq!(normalize_mobile("55"), "55");
    }

    #[test]
    fn plus_outside_country_code_is_dropped() {
        assert_eq!(normalize_mobile("+4498"), "4498");
        assert_eq!(normalize_mobile("98765432109876"), "9876543210");
    }

    #[test]
    fn pattern_check() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("+916123456789"));
        assert!(!is_valid_mobile("12345"));
        assert!(!is_valid_mobile("5876543210"));
        assert!(!is_valid_mobile("+915876543210"));
        assert!(!is_valid_mobile("+91987654321"));
        assert!(!is_valid_mobile("98765x3210"));
    }
}
