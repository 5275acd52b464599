//! # Presentation Layer
//!
//! Submission outcomes never reach the screen directly: a presenter turns
//! them into view models, and a renderer draws those.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] --> stdout (text / JSON)
//!                                        |
//!                                        +----------> [ TUI components ] --> terminal
//! ```
//!
//! ## Rules
//!
//! ### 1. Outcome kind decides tone
//! Positivity comes from the `SubmissionResult` variant. Nothing downstream
//! may look at message text or glyphs to decide whether an attempt worked.
//!
//! ### 2. Quota is independent of success
//! A view model carries quota text whenever the outcome carried a quota.

pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use view_models::{DisplayState, FieldViewModel, FormScreenViewModel};
