//! Small string helpers shared by the analyzer.

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove ASCII decimal digits.
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// True for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("main street"), "Main street");
        assert_eq!(capitalize("улица"), "Улица");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_strip_digits() {
        assert_eq!(strip_digits("12a"), "a");
        assert_eq!(strip_digits("١٢"), "١٢");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank(" a "));
    }
}
