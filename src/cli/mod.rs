//! Command-line interface components
//!
//! Argument parsing and the fetch command handler.

pub mod args;
pub mod commands;

pub use args::{Cli, FetchArgs, GlobalArgs};
pub use commands::{build_request_with, handle_fetch, handle_fetch_with};
