//! Selector state machine: state, events and outcomes.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → handle_event → AppState mutation → (render?, Outcome?)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Terminal outcomes of a session
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Browsing vs. confirming-delete
//! - [`state`]: Session state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Outcome;
pub use handler::{handle_event, Event};
pub use modes::{DeletePrompt, Mode};
pub use state::AppState;
