//! Validation rule table.
//!
//! Per-field errors and the whole-form validity check both derive from the
//! same table, so the two can never drift apart. Rules are evaluated in
//! order; the first failing rule's message wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::state::{FormState, Mode};

/// `local@domain.tld` shape: no whitespace, a single `@` region, at least
/// one `.` after it. Checked against the raw value, so leading or trailing
/// whitespace fails the shape.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex"));

/// Letters (Latin + Cyrillic `а-я`/`А-Я`) and whitespace only.
static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-Яa-zA-Z\s]+$").expect("letters-only regex"));

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Fields that participate in validation for the given mode.
    pub fn relevant(mode: Mode) -> &'static [Field] {
        match mode {
            Mode::Login => &[Field::Email, Field::Password],
            Mode::Register => &Self::ALL,
        }
    }
}

/// Validation failure taxonomy. Advisory only - never escalated beyond the
/// form UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    TooShort,
    InvalidCharacters,
    InvalidEmailShape,
    Mismatch,
}

/// A failed rule with its fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Required,
    MinChars(usize),
    LettersOnly,
    EmailShape,
    MatchesPassword,
}

impl Rule {
    fn kind(self) -> ErrorKind {
        match self {
            Rule::Required => ErrorKind::Required,
            Rule::MinChars(_) => ErrorKind::TooShort,
            Rule::LettersOnly => ErrorKind::InvalidCharacters,
            Rule::EmailShape => ErrorKind::InvalidEmailShape,
            Rule::MatchesPassword => ErrorKind::Mismatch,
        }
    }

    fn passes(self, state: &FormState, field: Field) -> bool {
        let value = field_value(state, field);
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::MinChars(min) => value.chars().count() >= min,
            Rule::LettersOnly => LETTERS_ONLY.is_match(value),
            Rule::EmailShape => EMAIL_SHAPE.is_match(value),
            Rule::MatchesPassword => state.confirm_password == state.password,
        }
    }
}

const FIRST_NAME_RULES: &[(Rule, &str)] = &[
    (Rule::Required, "Имя обязательно"),
    (Rule::MinChars(2), "Имя должно содержать минимум 2 символа"),
    (Rule::LettersOnly, "Имя может содержать только буквы"),
];

const LAST_NAME_RULES: &[(Rule, &str)] = &[
    (Rule::Required, "Фамилия обязательна"),
    (Rule::MinChars(2), "Фамилия должна содержать минимум 2 символа"),
    (Rule::LettersOnly, "Фамилия может содержать только буквы"),
];

const EMAIL_RULES: &[(Rule, &str)] = &[
    (Rule::Required, "Email обязателен"),
    (Rule::EmailShape, "Введите корректный email"),
];

const PASSWORD_RULES: &[(Rule, &str)] = &[
    (Rule::Required, "Пароль обязателен"),
    (Rule::MinChars(6), "Пароль должен содержать минимум 6 символов"),
];

const CONFIRM_PASSWORD_RULES: &[(Rule, &str)] = &[
    (Rule::Required, "Подтверждение пароля обязательно"),
    (Rule::MatchesPassword, "Пароли не совпадают"),
];

fn rules_for(field: Field) -> &'static [(Rule, &'static str)] {
    match field {
        Field::FirstName => FIRST_NAME_RULES,
        Field::LastName => LAST_NAME_RULES,
        Field::Email => EMAIL_RULES,
        Field::Password => PASSWORD_RULES,
        Field::ConfirmPassword => CONFIRM_PASSWORD_RULES,
    }
}

fn field_value<'a>(state: &'a FormState, field: Field) -> &'a str {
    match field {
        Field::FirstName => &state.first_name,
        Field::LastName => &state.last_name,
        Field::Email => &state.email,
        Field::Password => &state.password,
        Field::ConfirmPassword => &state.confirm_password,
    }
}

/// Whether the field is validated at all in the given mode.
///
/// The password confirmation only exists in Register mode; in Login mode it
/// never produces an error.
fn applies(field: Field, mode: Mode) -> bool {
    field != Field::ConfirmPassword || mode == Mode::Register
}

/// Returns the first failing rule for the field, if any.
///
/// Pure function of the state; the `submitted` gate lives in
/// [`FormState::field_error`](crate::state::FormState::field_error).
pub fn first_failure(state: &FormState, field: Field) -> Option<FieldError> {
    if !applies(field, state.mode) {
        return None;
    }
    rules_for(field)
        .iter()
        .find(|(rule, _)| !rule.passes(state, field))
        .map(|(rule, message)| FieldError {
            kind: rule.kind(),
            message,
        })
}

/// Whether every field relevant to the current mode passes all of its rules.
pub fn is_form_valid(state: &FormState) -> bool {
    Field::relevant(state.mode)
        .iter()
        .all(|field| first_failure(state, *field).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_state(email: &str, password: &str) -> FormState {
        FormState {
            email: email.to_string(),
            password: password.to_string(),
            ..FormState::default()
        }
    }

    fn register_state() -> FormState {
        FormState {
            mode: Mode::Register,
            first_name: "Анна".to_string(),
            last_name: "Петрова".to_string(),
            email: "user@test.com".to_string(),
            password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn empty_first_name_is_required() {
        let mut state = register_state();
        state.first_name.clear();
        let error = first_failure(&state, Field::FirstName).unwrap();
        assert_eq!(error.kind, ErrorKind::Required);
        assert_eq!(error.message, "Имя обязательно");
    }

    #[test]
    fn whitespace_only_name_counts_as_missing() {
        let mut state = register_state();
        state.first_name = "   ".to_string();
        let error = first_failure(&state, Field::FirstName).unwrap();
        assert_eq!(error.kind, ErrorKind::Required);
    }

    #[test]
    fn one_letter_name_is_too_short() {
        let mut state = register_state();
        state.first_name = "A".to_string();
        let error = first_failure(&state, Field::FirstName).unwrap();
        assert_eq!(error.kind, ErrorKind::TooShort);
        assert_eq!(error.message, "Имя должно содержать минимум 2 символа");
    }

    #[test]
    fn last_name_messages_differ_from_first_name() {
        let mut state = register_state();
        state.last_name = "П".to_string();
        let error = first_failure(&state, Field::LastName).unwrap();
        assert_eq!(error.message, "Фамилия должна содержать минимум 2 символа");
    }

    #[test]
    fn name_with_digits_reports_invalid_characters() {
        let mut state = register_state();
        state.first_name = "Ann4".to_string();
        let error = first_failure(&state, Field::FirstName).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidCharacters);
    }

    #[test]
    fn two_letter_name_passes() {
        let mut state = register_state();
        state.first_name = "Ли".to_string();
        assert_eq!(first_failure(&state, Field::FirstName), None);
    }

    #[test]
    fn email_shape_accepts_simple_address() {
        let state = login_state("user@test.com", "abcdef");
        assert_eq!(first_failure(&state, Field::Email), None);
    }

    #[test]
    fn email_without_dot_after_at_is_invalid() {
        let state = login_state("bad-email", "abcdef");
        let error = first_failure(&state, Field::Email).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidEmailShape);
        assert_eq!(error.message, "Введите корректный email");
    }

    #[test]
    fn email_with_two_ats_is_invalid() {
        let state = login_state("a@b@c.com", "abcdef");
        let error = first_failure(&state, Field::Email).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidEmailShape);
    }

    #[test]
    fn email_with_trailing_space_fails_the_shape() {
        // Required uses the trimmed value, the shape check uses the raw one.
        let state = login_state("user@test.com ", "abcdef");
        let error = first_failure(&state, Field::Email).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidEmailShape);
    }

    #[test]
    fn short_password_reports_too_short() {
        let state = login_state("user@test.com", "abc");
        let error = first_failure(&state, Field::Password).unwrap();
        assert_eq!(error.kind, ErrorKind::TooShort);
        assert_eq!(error.message, "Пароль должен содержать минимум 6 символов");
    }

    #[test]
    fn confirm_password_is_ignored_in_login_mode() {
        let state = login_state("user@test.com", "abcdef");
        assert_eq!(first_failure(&state, Field::ConfirmPassword), None);
    }

    #[test]
    fn confirm_password_mismatch_in_register_mode() {
        let mut state = register_state();
        state.confirm_password = "different".to_string();
        let error = first_failure(&state, Field::ConfirmPassword).unwrap();
        assert_eq!(error.kind, ErrorKind::Mismatch);
        assert_eq!(error.message, "Пароли не совпадают");
        assert!(!is_form_valid(&state));
    }

    #[test]
    fn required_wins_over_mismatch_for_empty_confirmation() {
        let mut state = register_state();
        state.confirm_password.clear();
        let error = first_failure(&state, Field::ConfirmPassword).unwrap();
        assert_eq!(error.kind, ErrorKind::Required);
    }

    #[test]
    fn login_form_is_valid_with_email_and_password() {
        let state = login_state("user@test.com", "abcdef");
        assert!(is_form_valid(&state));
    }

    #[test]
    fn login_form_enforces_password_length() {
        // Single rule table: the login aggregate applies the same
        // password-length rule as the per-field error.
        let state = login_state("user@test.com", "abc");
        assert!(!is_form_valid(&state));
    }

    #[test]
    fn register_form_is_valid_when_all_rules_pass() {
        assert!(is_form_valid(&register_state()));
    }

    #[test]
    fn register_form_requires_names() {
        let mut state = register_state();
        state.first_name.clear();
        assert!(!is_form_valid(&state));
    }
}
