mod display;
mod form;

pub use display::DisplayState;
pub use form::{FieldViewModel, FormScreenViewModel};
