//! Modal overlays.
//!
//! Overlays temporarily take over keyboard input. The only one here is the
//! submission acknowledgment: a blocking modal that swallows every key until
//! dismissed, the terminal equivalent of the browser alert the form replaces.

use anketa_form::Mode;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

#[derive(Debug)]
pub enum Overlay {
    Acknowledgment(AcknowledgmentState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Acknowledgment(ack) => ack.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        match self {
            Overlay::Acknowledgment(ack) => ack.handle_key(key),
        }
    }
}

/// State for the submission acknowledgment overlay.
#[derive(Debug, PartialEq, Eq)]
pub struct AcknowledgmentState {
    pub message: &'static str,
}

impl AcknowledgmentState {
    pub fn open(mode: Mode) -> Self {
        let message = match mode {
            Mode::Login => "Вход выполнен!",
            Mode::Register => "Регистрация завершена!",
        };
        Self { message }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => OverlayTransition::Close,
            _ => OverlayTransition::Stay,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = (self.message.chars().count() as u16 + 8).max(30).min(area.width);
        let height = 5u16.min(area.height);
        let popup = Rect::new(
            (area.width.saturating_sub(width)) / 2,
            (area.height.saturating_sub(height)) / 2,
            width,
            height,
        );

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Готово ")
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(block, popup);

        let inner = Rect::new(
            popup.x + 1,
            popup.y + 1,
            popup.width.saturating_sub(2),
            popup.height.saturating_sub(2),
        );
        let lines = vec![
            Line::from(Span::styled(
                self.message,
                Style::default().fg(Color::White),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(
                "Enter — закрыть",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
