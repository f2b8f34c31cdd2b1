//! Application state composition.
//!
//! State is split between `ScreenState` (the form screen) and
//! `Option<Overlay>` (the modal acknowledgment). `AppState` combines both so
//! overlay handling can borrow each side independently.

use anketa_form::{Field, FormState};

use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub screen: ScreenState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: ScreenState::new(),
            overlay: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The form screen: the one `FormState` instance plus UI-only concerns
/// (focus, quit flag).
pub struct ScreenState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The form. Created empty, fully reset on mode toggle, never persisted.
    pub form: FormState,
    /// Currently focused field.
    pub focus: Field,
}

impl ScreenState {
    pub fn new() -> Self {
        let form = FormState::new();
        let focus = first_field(&form);
        Self {
            should_quit: false,
            form,
            focus,
        }
    }

    /// Fields of the current mode, in display and focus order.
    pub fn focus_order(&self) -> &'static [Field] {
        Field::relevant(self.form.mode)
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    /// Toggles Login/Register. The form resets wholesale; focus moves to the
    /// first field of the new mode.
    pub fn toggle_mode(&mut self) {
        self.form.toggle_mode();
        self.focus = first_field(&self.form);
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

fn first_field(form: &FormState) -> Field {
    Field::relevant(form.mode)[0]
}
