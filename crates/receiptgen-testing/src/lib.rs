//! Testing infrastructure for receiptgen tests.
//!
//! - `MockGenerationService`: scripted in-process generation service
//! - `RecordingHost`: host platform double that counts lifecycle calls
//! - `StubServer`: real HTTP endpoint for exercising the reqwest client
//! - `TestWorld`: isolated config directory for CLI integration tests

pub mod host;
pub mod server;
pub mod service;
pub mod world;

pub use host::RecordingHost;
pub use server::{StubReply, StubServer};
pub use service::MockGenerationService;
pub use world::{CliResult, TestWorld};
