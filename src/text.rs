//! String helpers for console labels.
//!
//! State words and field names coming back from the host are lowercase
//! ("completed", "pending", "google"); the console shows them as display
//! labels. The only transform needed is first-letter capitalization.

/// Uppercase the first character of `s`, leaving the rest unchanged.
///
/// The empty string is returned unchanged. Uppercasing goes through
/// [`char::to_uppercase`], which can expand one character into several
/// (`ß` becomes `SS`), so the result may be longer than the input.
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_basic() {
        assert_eq!(capitalize_first_letter("abc"), "Abc");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn test_capitalize_already_capitalized() {
        assert_eq!(capitalize_first_letter("Google"), "Google");
    }

    #[test]
    fn test_capitalize_single_char() {
        assert_eq!(capitalize_first_letter("x"), "X");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize_first_letter("éclair"), "Éclair");
    }

    #[test]
    fn test_capitalize_expanding_char() {
        // 'ß' uppercases to "SS"
        assert_eq!(capitalize_first_letter("ßeta"), "SSeta");
    }

    #[test]
    fn test_capitalize_leaves_rest_untouched() {
        assert_eq!(capitalize_first_letter("gOOGLE"), "GOOGLE");
    }
}
