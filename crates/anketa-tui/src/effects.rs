//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only, which keeps the reducer pure:
//! it mutates state and returns effects, never spawns or logs payloads
//! itself.

use anketa_form::{NameField, Submission};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Arm a fresh 2-second clear timer for a name-field warning.
    ///
    /// Deliberately does not cancel earlier timers for the same field.
    ScheduleWarningClear { field: NameField },

    /// Emit the structured log of a successful submission payload.
    LogSubmission { submission: Submission },
}
