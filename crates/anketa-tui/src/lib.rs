//! Full-screen TUI for the anketa auth form.
//!
//! Elm-style architecture:
//! - `state` - application state (`AppState` = screen state + overlay)
//! - `events` - unified `UiEvent` enum all inputs are converted to
//! - `update` - the reducer, the only place state mutates
//! - `effects` - commands the reducer returns for the runtime to execute
//! - `render` - pure view functions
//! - `runtime` - event loop, inbox, effect execution
//! - `terminal` - raw mode / alternate screen lifecycle

pub mod effects;
pub mod events;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;

/// Runs the interactive auth form until the user quits.
pub async fn run() -> Result<()> {
    // The form requires a terminal to render.
    if !stderr().is_terminal() {
        anyhow::bail!("anketa requires a terminal");
    }

    let mut runtime = TuiRuntime::new()?;
    runtime.run()
}
