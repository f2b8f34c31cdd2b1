//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use anketa_form::{Field, NameField};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{AcknowledgmentState, Overlay, OverlayTransition};
use crate::state::{AppState, ScreenState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::WarningElapsed { field } => {
            // Fire-and-forget timer expiry. A newer input may have re-set the
            // flag inside the window; the last timer to fire still clears it.
            app.screen.form.clear_name_warning(field);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => handle_paste(app, &text),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // An active overlay captures every key.
    if let Some(overlay) = &mut app.overlay {
        if overlay.handle_key(key) == OverlayTransition::Close {
            app.overlay = None;
        }
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('t') if ctrl => {
            app.screen.toggle_mode();
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            app.screen.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.screen.focus_prev();
            vec![]
        }
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => delete_char(&mut app.screen),
        KeyCode::Char(c) if !ctrl => insert_text(&mut app.screen, &c.to_string()),
        _ => vec![],
    }
}

fn handle_paste(app: &mut AppState, text: &str) -> Vec<UiEffect> {
    if app.overlay.is_some() {
        return vec![];
    }
    insert_text(&mut app.screen, text)
}

/// Inserts typed or pasted text into the focused field.
///
/// Name fields route through the filter: the whole raw value is cleaned and
/// a warning-clear timer is armed when anything was stripped.
fn insert_text(screen: &mut ScreenState, text: &str) -> Vec<UiEffect> {
    if let Some(field) = name_field(screen.focus) {
        let mut raw = screen.form.name(field).to_string();
        raw.push_str(text);
        return apply_name_value(screen, field, &raw);
    }

    let value = free_field_mut(screen);
    value.extend(text.chars().filter(|c| !c.is_control()));
    vec![]
}

fn delete_char(screen: &mut ScreenState) -> Vec<UiEffect> {
    if let Some(field) = name_field(screen.focus) {
        let mut raw = screen.form.name(field).to_string();
        raw.pop();
        // Backspace never strips anything, so this also clears the warning,
        // matching the per-input flag assignment.
        return apply_name_value(screen, field, &raw);
    }

    free_field_mut(screen).pop();
    vec![]
}

fn apply_name_value(screen: &mut ScreenState, field: NameField, raw: &str) -> Vec<UiEffect> {
    if screen.form.apply_name_input(field, raw) {
        vec![UiEffect::ScheduleWarningClear { field }]
    } else {
        vec![]
    }
}

fn submit(app: &mut AppState) -> Vec<UiEffect> {
    match app.screen.form.submit() {
        Some(submission) => {
            app.overlay = Some(Overlay::Acknowledgment(AcknowledgmentState::open(
                app.screen.form.mode,
            )));
            vec![UiEffect::LogSubmission { submission }]
        }
        None => {
            // Errors are now visible via the submitted flag; nothing else
            // happens on an invalid submit.
            tracing::debug!(mode = ?app.screen.form.mode, "form invalid, submission blocked");
            vec![]
        }
    }
}

fn name_field(field: Field) -> Option<NameField> {
    match field {
        Field::FirstName => Some(NameField::First),
        Field::LastName => Some(NameField::Last),
        Field::Email | Field::Password | Field::ConfirmPassword => None,
    }
}

fn free_field_mut(screen: &mut ScreenState) -> &mut String {
    match screen.focus {
        Field::Email => &mut screen.form.email,
        Field::Password => &mut screen.form.password,
        Field::ConfirmPassword => &mut screen.form.confirm_password,
        // Name fields are handled by the filtering path.
        Field::FirstName => &mut screen.form.first_name,
        Field::LastName => &mut screen.form.last_name,
    }
}
