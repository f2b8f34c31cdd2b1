//! UI event types.
//!
//! All inputs to the TUI (terminal, timers) are converted to `UiEvent`
//! before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async work sends events directly to the runtime's inbox channel. The
//! warning-clear timers spawned for name fields deliver their expiry this
//! way as `WarningElapsed`.

use anketa_form::NameField;
use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (render cadence).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// A 2-second warning-clear timer fired for a name field.
    ///
    /// Timers are fire-and-forget and never canceled; several may be in
    /// flight for the same field, and the last one to fire wins.
    WarningElapsed { field: NameField },
}

/// Sender for the runtime's event inbox.
pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;

/// Receiver for the runtime's event inbox.
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
