//! Form state and submission.
//!
//! `FormState` is a plain owned value: the TUI holds exactly one instance,
//! created empty when the screen opens and fully reset on every mode toggle.
//! Nothing here is persisted.

use serde::Serialize;

use crate::filter;
use crate::rules::{self, Field, FieldError};

/// The two exclusive display/validation states of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }
}

/// The two filtered name fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    pub fn field(self) -> Field {
        match self {
            NameField::First => Field::FirstName,
            NameField::Last => Field::LastName,
        }
    }
}

/// All form state, mutated directly by the UI reducer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: Mode,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub confirm_password: String,
    /// Set on submit attempt; gates whether field errors are visible.
    pub submitted: bool,
    /// Transient "letters only" warning flags, cleared by a 2 s timer.
    pub first_name_warning: bool,
    pub last_name_warning: bool,
}

/// Payload emitted on a successful submission.
///
/// This is the whole contract with the (out-of-scope) auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Submission {
    Login {
        email: String,
        password: String,
    },
    Register {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        confirm_password: String,
    },
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips between Login and Register and resets everything else.
    pub fn toggle_mode(&mut self) {
        let mode = self.mode.toggled();
        *self = Self {
            mode,
            ..Self::default()
        };
    }

    /// Applies a raw value to a name field, stripping disallowed characters.
    ///
    /// The warning flag is assigned (not OR-ed) on every input, so a clean
    /// edit clears it immediately. Returns true if anything was stripped -
    /// the caller is expected to arm a fresh 2 s clear timer in that case,
    /// without canceling any earlier one.
    pub fn apply_name_input(&mut self, field: NameField, raw: &str) -> bool {
        let (cleaned, removed) = filter::clean_name(raw);
        match field {
            NameField::First => {
                self.first_name = cleaned;
                self.first_name_warning = removed;
            }
            NameField::Last => {
                self.last_name = cleaned;
                self.last_name_warning = removed;
            }
        }
        removed
    }

    pub fn name(&self, field: NameField) -> &str {
        match field {
            NameField::First => &self.first_name,
            NameField::Last => &self.last_name,
        }
    }

    pub fn name_warning(&self, field: NameField) -> bool {
        match field {
            NameField::First => self.first_name_warning,
            NameField::Last => self.last_name_warning,
        }
    }

    /// Clears a warning flag. Invoked when a clear timer fires; timers are
    /// independent, so the last one to fire wins.
    pub fn clear_name_warning(&mut self, field: NameField) {
        match field {
            NameField::First => self.first_name_warning = false,
            NameField::Last => self.last_name_warning = false,
        }
    }

    /// Returns the visible error for a field: always `None` until a submit
    /// attempt, then the first failing rule from the table.
    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        if !self.submitted {
            return None;
        }
        rules::first_failure(self, field)
    }

    /// Whether every field relevant to the current mode passes validation.
    pub fn is_valid(&self) -> bool {
        rules::is_form_valid(self)
    }

    /// Attempts a submission.
    ///
    /// Marks the form submitted (making errors visible) and returns the
    /// payload only if the form is valid. No other state changes.
    pub fn submit(&mut self) -> Option<Submission> {
        self.submitted = true;
        if !self.is_valid() {
            return None;
        }
        Some(match self.mode {
            Mode::Login => Submission::Login {
                email: self.email.clone(),
                password: self.password.clone(),
            },
            Mode::Register => Submission::Register {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                confirm_password: self.confirm_password.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ErrorKind;

    #[test]
    fn toggle_resets_every_field_and_flag() {
        let mut state = FormState {
            email: "user@test.com".to_string(),
            password: "abcdef".to_string(),
            first_name: "Анна".to_string(),
            last_name: "Петрова".to_string(),
            confirm_password: "abcdef".to_string(),
            submitted: true,
            first_name_warning: true,
            last_name_warning: true,
            ..FormState::default()
        };
        state.toggle_mode();
        assert_eq!(
            state,
            FormState {
                mode: Mode::Register,
                ..FormState::default()
            }
        );
        state.toggle_mode();
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn errors_are_hidden_until_submit() {
        let state = FormState {
            mode: Mode::Register,
            email: "not-an-email".to_string(),
            ..FormState::default()
        };
        for field in Field::ALL {
            assert_eq!(state.field_error(field), None);
        }
    }

    #[test]
    fn name_input_strips_and_flags() {
        let mut state = FormState::default();
        let removed = state.apply_name_input(NameField::First, "A1");
        assert!(removed);
        assert_eq!(state.first_name, "A");
        assert!(state.first_name_warning);
    }

    #[test]
    fn filtered_name_fails_length_after_submit() {
        // "A1" filters to "A", which then fails the 2-character minimum.
        let mut state = FormState {
            mode: Mode::Register,
            ..FormState::default()
        };
        state.apply_name_input(NameField::First, "A1");
        assert!(state.submit().is_none());
        let error = state.field_error(Field::FirstName).unwrap();
        assert_eq!(error.kind, ErrorKind::TooShort);
    }

    #[test]
    fn clean_input_clears_the_warning_immediately() {
        let mut state = FormState::default();
        state.apply_name_input(NameField::Last, "П@");
        assert!(state.last_name_warning);
        state.apply_name_input(NameField::Last, "Пе");
        assert!(!state.last_name_warning);
    }

    #[test]
    fn warning_clear_is_per_field() {
        let mut state = FormState::default();
        state.apply_name_input(NameField::First, "A1");
        state.apply_name_input(NameField::Last, "B2");
        state.clear_name_warning(NameField::First);
        assert!(!state.first_name_warning);
        assert!(state.last_name_warning);
    }

    #[test]
    fn valid_login_submit_yields_payload() {
        let mut state = FormState {
            email: "user@test.com".to_string(),
            password: "abcdef".to_string(),
            ..FormState::default()
        };
        let submission = state.submit().unwrap();
        assert!(state.submitted);
        assert_eq!(
            submission,
            Submission::Login {
                email: "user@test.com".to_string(),
                password: "abcdef".to_string(),
            }
        );
    }

    #[test]
    fn invalid_submit_only_reveals_errors() {
        let mut state = FormState {
            email: "bad-email".to_string(),
            password: "abcdef".to_string(),
            ..FormState::default()
        };
        assert!(state.submit().is_none());
        assert!(state.submitted);
        let error = state.field_error(Field::Email).unwrap();
        assert_eq!(error.message, "Введите корректный email");
    }

    #[test]
    fn register_submit_carries_all_fields() {
        let mut state = FormState {
            mode: Mode::Register,
            first_name: "Анна".to_string(),
            last_name: "Петрова".to_string(),
            email: "user@test.com".to_string(),
            password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
            ..FormState::default()
        };
        let submission = state.submit().unwrap();
        match submission {
            Submission::Register { first_name, confirm_password, .. } => {
                assert_eq!(first_name, "Анна");
                assert_eq!(confirm_password, "abcdef");
            }
            Submission::Login { .. } => panic!("expected register payload"),
        }
    }

    #[test]
    fn submission_serializes_with_mode_tag() {
        let payload = Submission::Login {
            email: "user@test.com".to_string(),
            password: "abcdef".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["mode"], "login");
        assert_eq!(json["email"], "user@test.com");
    }
}
