//! Form domain for the anketa login/registration screen.
//!
//! Pure state and validation, no I/O and no terminal types:
//! - `state` - `FormState`, mode toggling, name input, submission
//! - `rules` - the validation rule table shared by per-field errors and the
//!   whole-form validity check
//! - `filter` - real-time character filtering for name fields

pub mod filter;
pub mod rules;
pub mod state;

pub use rules::{ErrorKind, Field, FieldError};
pub use state::{FormState, Mode, NameField, Submission};
