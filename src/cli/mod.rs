//! Command line front end. Each invocation is one page view of the configured session.

pub mod args;
pub mod commands;

pub use args::{Args, Commands};
pub use commands::CliApp;
