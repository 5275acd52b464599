//! Submission workflow of the receipt generator mini app.
//!
//! Startup resolves a [`HostIdentity`](receiptgen_types::HostIdentity) through
//! [`HostContextAdapter`]; the [`FormStateStore`] is seeded and edited through
//! a pure reducer; on submit the [`SubmissionController`] validates the
//! snapshot, performs a single POST and turns the response into a
//! [`SubmissionResult`](receiptgen_types::SubmissionResult).

pub mod close;
pub mod config;
pub mod error;
pub mod form;
pub mod host;
pub mod service;
pub mod submission;

pub use close::{AUTO_CLOSE_DELAY, CloseScheduler};
pub use config::Config;
pub use error::{Error, Result};
pub use form::FormStateStore;
pub use host::{HostContextAdapter, HostPlatform, InitDataHost};
pub use service::{GenerationService, HttpGenerationService, TransportError};
pub use submission::SubmissionController;
