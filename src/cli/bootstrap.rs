//! cli::bootstrap
//!
//! Ordered start-up of the client.
//!
//! # Phases
//!
//! 1. **Init**: create the zero-valued [`ClientConfig`]
//! 2. **Flag registration**: attach persistent flags to the root
//! 3. **Command registration**: attach every child command
//! 4. **Dispatch**: parse arguments, bind them into the config, run
//!
//! Each phase is a method on the previous phase's type, so phases cannot be
//! skipped, repeated or reordered:
//!
//! ```compile_fail
//! use burrow_client::cli::Bootstrap;
//!
//! // Children cannot be registered before the persistent flags.
//! let bootstrap = Bootstrap::new().register_commands();
//! ```
//!
//! # Example
//!
//! ```
//! use burrow_client::cli::Bootstrap;
//!
//! let invocation = Bootstrap::new()
//!     .register_flags()
//!     .register_commands()
//!     .parse_from(["burrow-client", "--debug", "version"])
//!     .unwrap();
//! assert!(invocation.config().debug);
//! ```

use std::ffi::OsString;
use std::marker::PhantomData;

use anyhow::Result;
use clap::{ArgMatches, Command, FromArgMatches};

use super::args::{ids, ClientCommand};
use super::commands;
use super::registry::CommandRegistry;
use crate::client::Connector;
use crate::core::config::ClientConfig;

/// Phase 1 complete: config exists, tree is bare.
#[derive(Debug)]
pub struct Init;

/// Phase 2 complete: persistent flags attached.
#[derive(Debug)]
pub struct FlagsRegistered;

/// Phase 3 complete: children attached, ready to dispatch.
#[derive(Debug)]
pub struct CommandsRegistered;

/// Client start-up, parameterised by the last completed phase.
#[derive(Debug)]
pub struct Bootstrap<Phase> {
    config: ClientConfig,
    registry: CommandRegistry,
    _phase: PhantomData<Phase>,
}

impl Default for Bootstrap<Init> {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap<Init> {
    /// Phase 1: create the one configuration instance for this run.
    pub fn new() -> Self {
        Bootstrap {
            config: ClientConfig::default(),
            registry: CommandRegistry::new(),
            _phase: PhantomData,
        }
    }

    /// Phase 2: attach `--verbose` and `--debug`.
    pub fn register_flags(self) -> Bootstrap<FlagsRegistered> {
        Bootstrap {
            config: self.config,
            registry: self.registry.register_persistent_flags(),
            _phase: PhantomData,
        }
    }
}

impl Bootstrap<FlagsRegistered> {
    /// Phase 3: attach the child commands.
    pub fn register_commands(self) -> Bootstrap<CommandsRegistered> {
        Bootstrap {
            config: self.config,
            registry: self.registry.register_child_commands(),
            _phase: PhantomData,
        }
    }
}

impl Bootstrap<CommandsRegistered> {
    /// The fully assembled command tree.
    pub fn command(&self) -> &Command {
        self.registry.command()
    }

    /// Phase 4, first half: parse `args` and bind them into the config.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown commands, unknown flags and bad
    /// values, as well as for `--help` and `--version` requests. Callers
    /// normally finish with [`clap::Error::exit`].
    pub fn parse_from<I, T>(self, args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut root = self.registry.into_command();
        let matches = root.try_get_matches_from_mut(args)?;

        let mut config = self.config;
        bind_globals(&mut config, &matches);

        let command = match matches.subcommand_name() {
            Some(_) => Some(ClientCommand::from_arg_matches(&matches)?),
            None => None,
        };
        if let Some(command) = &command {
            bind_session(&mut config, command);
        }

        Ok(Invocation {
            config,
            root,
            command,
        })
    }
}

/// A parsed command line with its frozen configuration.
#[derive(Debug)]
pub struct Invocation {
    config: ClientConfig,
    root: Command,
    command: Option<ClientCommand>,
}

impl Invocation {
    /// The configuration every handler observes.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The matched child, or `None` when only the root was invoked.
    pub fn command(&self) -> Option<&ClientCommand> {
        self.command.as_ref()
    }

    /// Phase 4, second half: run the matched command exactly once.
    ///
    /// With no child selected the root help is printed.
    pub fn run(self, connector: &dyn Connector) -> Result<()> {
        let Invocation {
            config,
            root,
            command,
        } = self;

        match command {
            Some(command) => commands::dispatch(command, &config, connector, &root),
            None => commands::print_help(&root, None),
        }
    }
}

fn bind_globals(config: &mut ClientConfig, matches: &ArgMatches) {
    config.verbose = flag(matches, ids::VERBOSE);
    config.debug = flag(matches, ids::DEBUG);
}

fn bind_session(config: &mut ClientConfig, command: &ClientCommand) {
    match command {
        ClientCommand::Tx(tx) => config.session = tx.session.to_session(),
        ClientCommand::Status(status) => config.session.node_addr = status.node_addr.clone(),
        ClientCommand::Version | ClientCommand::Completion { .. } => {}
    }
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockNode;
    use crate::core::config::env::{env_lock, DEBUG_VAR, NODE_ADDRESS_VAR, VERBOSE_VAR};
    use crate::core::config::env::DEFAULT_NODE_ADDRESS;
    use clap::error::ErrorKind;

    fn ready() -> Bootstrap<CommandsRegistered> {
        Bootstrap::new().register_flags().register_commands()
    }

    #[test]
    fn init_config_is_zero_valued() {
        let bootstrap = Bootstrap::new();
        assert_eq!(bootstrap.config, ClientConfig::default());
    }

    #[test]
    fn globals_bound_from_flags() {
        let _guard = env_lock();
        std::env::remove_var(VERBOSE_VAR);
        std::env::remove_var(DEBUG_VAR);

        let invocation = ready().parse_from(["burrow-client", "-v", "version"]).unwrap();
        assert!(invocation.config().verbose);
        assert!(!invocation.config().debug);
    }

    #[test]
    fn globals_default_from_environment() {
        let _guard = env_lock();
        std::env::set_var(DEBUG_VAR, "1");
        let bootstrap = ready();
        std::env::remove_var(DEBUG_VAR);

        let invocation = bootstrap.parse_from(["burrow-client", "version"]).unwrap();
        assert!(invocation.config().debug);
    }

    #[test]
    fn unparsable_environment_falls_back() {
        let _guard = env_lock();
        std::env::set_var(VERBOSE_VAR, "very");
        let bootstrap = ready();
        std::env::remove_var(VERBOSE_VAR);

        let invocation = bootstrap.parse_from(["burrow-client"]).unwrap();
        assert!(!invocation.config().verbose);
    }

    #[test]
    fn tx_session_bound_into_config() {
        let _guard = env_lock();
        std::env::remove_var(NODE_ADDRESS_VAR);

        let invocation = ready()
            .parse_from([
                "burrow-client",
                "tx",
                "--broadcast=false",
                "--nonce",
                "4",
                "unbond",
                "--height",
                "9",
            ])
            .unwrap();
        let session = &invocation.config().session;
        assert_eq!(session.node_addr, DEFAULT_NODE_ADDRESS);
        assert_eq!(session.nonce, Some(4));
        assert!(!session.broadcast);
    }

    #[test]
    fn status_binds_only_node_address() {
        let _guard = env_lock();
        let invocation = ready()
            .parse_from(["burrow-client", "status", "--node-addr", "unix:///tmp/n.sock"])
            .unwrap();
        let session = &invocation.config().session;
        assert_eq!(session.node_addr, "unix:///tmp/n.sock");
        assert!(session.sign_addr.is_empty());
    }

    #[test]
    fn root_alone_selects_no_command() {
        let _guard = env_lock();
        let invocation = ready().parse_from(["burrow-client"]).unwrap();
        assert!(invocation.command().is_none());
        assert!(invocation.run(&MockNode::new()).is_ok());
    }

    #[test]
    fn version_runs_without_touching_node() {
        let _guard = env_lock();
        let node = MockNode::new();
        let invocation = ready()
            .parse_from(["burrow-client", "--verbose", "--debug", "version"])
            .unwrap();
        assert!(invocation.run(&node).is_ok());
        assert!(node.operations().is_empty());
    }

    #[test]
    fn status_runs_through_connector() {
        let _guard = env_lock();
        let node = MockNode::new();
        let invocation = ready()
            .parse_from(["burrow-client", "status", "--field", "chain-id"])
            .unwrap();
        assert!(invocation.run(&node).is_ok());
        assert_eq!(node.operations().len(), 2);
    }

    #[test]
    fn bad_arguments_are_clap_errors() {
        let _guard = env_lock();
        let err = ready()
            .parse_from(["burrow-client", "tx", "send", "--amt", "lots"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
