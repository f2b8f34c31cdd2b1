//! Character filtering for name fields.
//!
//! Name fields accept letters and whitespace only. Everything else is
//! stripped as the user types, and the caller shows a transient warning when
//! at least one character was removed.

/// Returns true if `c` may appear in a name field.
///
/// Latin `a-z`/`A-Z`, Cyrillic `а-я`/`А-Я` (the ranges exclude `ё`/`Ё`),
/// and whitespace.
pub fn is_allowed_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('а'..='я').contains(&c)
        || ('А'..='Я').contains(&c)
        || c.is_whitespace()
}

/// Strips disallowed characters from a raw name value.
///
/// Returns the cleaned value and whether anything was removed.
pub fn clean_name(raw: &str) -> (String, bool) {
    let cleaned: String = raw.chars().filter(|c| is_allowed_name_char(*c)).collect();
    let removed = cleaned.len() != raw.len();
    (cleaned, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_passes_through() {
        let (cleaned, removed) = clean_name("Anna Maria");
        assert_eq!(cleaned, "Anna Maria");
        assert!(!removed);
    }

    #[test]
    fn cyrillic_letters_are_allowed() {
        let (cleaned, removed) = clean_name("Иван Петров");
        assert_eq!(cleaned, "Иван Петров");
        assert!(!removed);
    }

    #[test]
    fn digits_and_punctuation_are_stripped() {
        let (cleaned, removed) = clean_name("A1nn-a_2");
        assert_eq!(cleaned, "Anna");
        assert!(removed);
    }

    #[test]
    fn single_trailing_digit_is_stripped() {
        let (cleaned, removed) = clean_name("A1");
        assert_eq!(cleaned, "A");
        assert!(removed);
    }

    #[test]
    fn output_contains_only_letters_and_whitespace() {
        let (cleaned, _) = clean_name("a7б!В\t г@9");
        assert!(cleaned.chars().all(is_allowed_name_char));
        assert_eq!(cleaned, "aбВ\t г");
    }

    #[test]
    fn yo_is_outside_the_cyrillic_range() {
        // The а-я/А-Я ranges do not include ё.
        let (cleaned, removed) = clean_name("Алёна");
        assert_eq!(cleaned, "Ална");
        assert!(removed);
    }

    #[test]
    fn empty_input_is_untouched() {
        let (cleaned, removed) = clean_name("");
        assert_eq!(cleaned, "");
        assert!(!removed);
    }
}
