//! cli
//!
//! Command-line interface layer for burrow-client.
//!
//! # Responsibilities
//!
//! - Build the command tree and its persistent flags
//! - Resolve flag defaults from the environment
//! - Parse arguments, freeze the client configuration, dispatch
//!
//! # Architecture
//!
//! Start-up is a fixed sequence enforced by [`Bootstrap`]. The frozen
//! [`ClientConfig`](crate::core::config::ClientConfig) is passed explicitly
//! to every handler; there is no global mutable state.

pub mod args;
pub mod bootstrap;
pub mod commands;
pub mod registry;

pub use args::ClientCommand;
pub use bootstrap::{Bootstrap, Invocation};
pub use registry::CommandRegistry;

use std::process::ExitCode;

use crate::client::{Connector, DetachedConnector};
use crate::ui::output;

/// Run the CLI application against the process arguments.
///
/// This is the main entry point called from `main.rs`.
pub fn execute() -> ExitCode {
    execute_with(std::env::args_os(), &DetachedConnector)
}

/// Run the CLI application with explicit arguments and node connector.
///
/// Argument errors exit through clap (status 2, or 0 for `--help`);
/// handler errors are printed and return status 1.
pub fn execute_with<I, T>(args: I, connector: &dyn Connector) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let invocation = match Bootstrap::new()
        .register_flags()
        .register_commands()
        .parse_from(args)
    {
        Ok(invocation) => invocation,
        Err(err) => err.exit(),
    };

    output::init_logging(invocation.config().verbosity());

    match invocation.run(connector) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
