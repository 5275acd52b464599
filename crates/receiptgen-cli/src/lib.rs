// NOTE: Receipt generator mini app, terminal edition
//
// Why a host abstraction instead of reading flags directly?
// - The same workflow runs embedded (chat host supplies user and theme) or
//   standalone (launch URL only); the runtime only sees `HostPlatform`
// - Tests drive the workflow with a recording host
//
// Why outcomes as values?
// - Validation, service refusal and transport faults all end in a message on
//   screen; only `submit` exits non-zero, after rendering the outcome
//
// Why one request at a time?
// - A double press must not spend quota twice; the controller drops
//   duplicates and the form disables its submit action meanwhile

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, SubmitArgs};
pub use commands::run;
