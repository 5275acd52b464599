mod form;
mod submission;

pub use form::{FormScreenInput, present_form_screen};
pub use submission::{PENDING_TEXT, present_submission};
