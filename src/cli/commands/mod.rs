//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler receives the frozen [`ClientConfig`] by shared reference and
//! never constructs its own. Handlers that need a node obtain one from the
//! injected [`Connector`].
//!
//! # Async Commands
//!
//! `tx` and `status` talk to a node through the async `NodeClient` trait.
//! They run on a current-thread tokio runtime created per invocation, since
//! exactly one command runs per process.

mod completion;
mod status;
mod tx;
mod version;

pub use completion::{completion, write_completion};
pub use status::{fetch_status, status};
pub use tx::{parameter_warnings, payload, submit, tx, TxOutcome};
pub use version::version;

use std::future::Future;
use std::io::{self, Write};

use anyhow::{anyhow, Context as _, Result};
use clap::Command;

use crate::cli::args::ClientCommand;
use crate::client::Connector;
use crate::core::config::ClientConfig;

/// Dispatch a command to its handler.
pub fn dispatch(
    command: ClientCommand,
    config: &ClientConfig,
    connector: &dyn Connector,
    root: &Command,
) -> Result<()> {
    tracing::debug!(?config, "dispatching");

    match command {
        ClientCommand::Tx(cmd) => match cmd.kind {
            Some(kind) => tx::tx(config, connector, kind),
            None => print_help(root, Some("tx")),
        },
        ClientCommand::Status(args) => status::status(config, connector, args.field.as_deref()),
        ClientCommand::Version => version::version(),
        ClientCommand::Completion { shell } => completion::completion(root, shell),
    }
}

/// Print help for the root, or for one of its direct children.
pub fn print_help(root: &Command, child: Option<&str>) -> Result<()> {
    write_help(root, child, &mut io::stdout().lock())
}

/// Write help to `out`. A reader that closed the pipe early is not an error.
pub fn write_help(root: &Command, child: Option<&str>, out: &mut impl Write) -> Result<()> {
    let mut command = match child {
        Some(name) => root
            .find_subcommand(name)
            .cloned()
            .ok_or_else(|| anyhow!("unknown command '{}'", name))?,
        None => root.clone(),
    };
    ignore_broken_pipe(command.write_help(out)).context("failed to write help")
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Run a node future to completion.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(future))
}
