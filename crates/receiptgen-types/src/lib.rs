pub mod form;
pub mod identity;
pub mod submission;
pub mod wire;

pub use form::*;
pub use identity::*;
pub use submission::*;
pub use wire::*;
