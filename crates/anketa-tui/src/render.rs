//! Pure view/render functions for the TUI.
//!
//! Functions here take state by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects.

use anketa_form::{Field, FormState, Mode, NameField};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::{AppState, ScreenState};

/// Height of the status line below the form.
const STATUS_HEIGHT: u16 = 1;

/// Width of the form box.
const FORM_WIDTH: u16 = 56;

const NAME_WARNING: &str = "Можно вводить только буквы и пробелы";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    render_form(&app.screen, frame, chunks[0]);
    render_status_line(frame, chunks[1]);

    // Overlay renders last, so it appears on top.
    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
}

fn render_form(screen: &ScreenState, frame: &mut Frame, area: Rect) {
    let order = screen.focus_order();
    // Two lines per field (value + message) plus the toggle hint row.
    let content_height = order.len() as u16 * 2 + 2;
    let height = (content_height + 2).min(area.height);
    let width = FORM_WIDTH.min(area.width);
    let form_area = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let title = match screen.form.mode {
        Mode::Login => " Вход ",
        Mode::Register => " Регистрация ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(&block, form_area);

    let inner = block.inner(form_area);
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(content_height as usize);
    for field in order {
        lines.push(input_line(screen, *field));
        lines.push(message_line(&screen.form, *field));
    }
    lines.push(Line::from(""));
    lines.push(toggle_hint(screen.form.mode));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn input_line(screen: &ScreenState, field: Field) -> Line<'static> {
    let focused = screen.focus == field;
    let pointer = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(
            pointer,
            Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }),
        ),
        Span::styled(
            format!("{:<14}", field_label(field)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(display_value(&screen.form, field), value_style),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

/// The line under a field: validation error (post-submit) or the transient
/// filter warning for name fields.
fn message_line(form: &FormState, field: Field) -> Line<'static> {
    if let Some(error) = form.field_error(field) {
        return Line::from(Span::styled(
            format!("  {}", error.message),
            Style::default().fg(Color::Red),
        ));
    }
    let warning = match field {
        Field::FirstName => form.name_warning(NameField::First),
        Field::LastName => form.name_warning(NameField::Last),
        _ => false,
    };
    if warning {
        return Line::from(Span::styled(
            format!("  {NAME_WARNING}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from("")
}

fn toggle_hint(mode: Mode) -> Line<'static> {
    let text = match mode {
        Mode::Login => "Нет аккаунта? Ctrl+T — регистрация",
        Mode::Register => "Уже есть аккаунт? Ctrl+T — вход",
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))).centered()
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::FirstName => "Имя",
        Field::LastName => "Фамилия",
        Field::Email => "Email",
        Field::Password => "Пароль",
        Field::ConfirmPassword => "Подтверждение",
    }
}

fn display_value(form: &FormState, field: Field) -> String {
    match field {
        Field::FirstName => form.first_name.clone(),
        Field::LastName => form.last_name.clone(),
        Field::Email => form.email.clone(),
        Field::Password => "•".repeat(form.password.chars().count()),
        Field::ConfirmPassword => "•".repeat(form.confirm_password.chars().count()),
    }
}

fn render_status_line(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::DarkGray);
    let spans = vec![
        Span::styled(" Tab", key_style),
        Span::raw(" поле  "),
        Span::styled("Ctrl+T", key_style),
        Span::raw(" режим  "),
        Span::styled("Enter", key_style),
        Span::raw(" отправить  "),
        Span::styled("Esc", key_style),
        Span::raw(" выход"),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
