//! cli::registry
//!
//! The command tree.
//!
//! # Structure
//!
//! ```text
//! burrow-client [--verbose] [--debug]
//! ├── tx [--node-addr --sign-addr --pubkey --addr --chain-id --nonce -s -b -w]
//! │   ├── send
//! │   ├── name
//! │   ├── call
//! │   ├── bond
//! │   ├── unbond
//! │   └── rebond
//! ├── status [--node-addr --field]
//! ├── version
//! └── completion <shell>
//! ```
//!
//! # Defaults
//!
//! Flag defaults are resolved from the environment when a flag is
//! registered, not when a command runs. The registry itself does not enforce
//! registration order; [`crate::cli::bootstrap`] does.

use clap::{Arg, ArgAction, Command, Subcommand};

use super::args::{ids, parse_flag_bool, ClientCommand};
use crate::core::config::env::{default_debug, default_verbose};
use crate::core::config::SessionDefaults;
use crate::version::full_version;

pub const ROOT_NAME: &str = "burrow-client";

/// Children in registration order.
pub const CHILD_ORDER: [&str; 4] = ["tx", "status", "version", "completion"];

const ABOUT: &str = "burrow-client interacts with a running burrow chain.";

/// Root command plus its children.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    root: Command,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// A root command with no flags and no children.
    ///
    /// With no subcommand selected the root prints its help.
    pub fn new() -> Self {
        let version = full_version();
        let root = Command::new(ROOT_NAME)
            .about(ABOUT)
            .long_about(format!(
                "{}\n\n\
                 Complete documentation is available at https://hyperledger.github.io/burrow\n\n\
                 VERSION: {}",
                ABOUT, version
            ))
            .version(version)
            .subcommand_required(false);
        Self { root }
    }

    /// Attach `--verbose/-v` and `--debug/-d` to the root, inherited by every
    /// descendant. Defaults are read from the environment now.
    pub fn register_persistent_flags(mut self) -> Self {
        let verbose_default = default_verbose();
        let debug_default = default_debug();
        tracing::trace!(
            verbose = verbose_default,
            debug = debug_default,
            "resolved persistent flag defaults"
        );

        self.root = self
            .root
            .arg(persistent_bool(
                ids::VERBOSE,
                'v',
                verbose_default,
                "Verbose output; more output than no output flags; less output than debug level; \
                 default respects $BURROW_CLIENT_VERBOSE",
            ))
            .arg(persistent_bool(
                ids::DEBUG,
                'd',
                debug_default,
                "Debug level output; the most output available for burrow-client; \
                 if it is too chatty use verbose flag; default respects $BURROW_CLIENT_DEBUG",
            ));
        self
    }

    /// Attach `tx`, `status`, `version` and `completion` to the root.
    ///
    /// Session flag defaults are snapshotted from the environment now.
    pub fn register_child_commands(mut self) -> Self {
        let defaults = SessionDefaults::from_env();

        // Derived children are built on a scratch command so the root keeps
        // its own about text and the children keep a fixed order.
        let derived = ClientCommand::augment_subcommands(Command::new(ROOT_NAME));
        let children = CHILD_ORDER
            .iter()
            .filter_map(|name| derived.find_subcommand(name).cloned());

        self.root = self
            .root
            .subcommands(children)
            .mut_subcommand("tx", |tx| {
                tx.mut_arg(ids::NODE_ADDR, |a| with_default(a, &defaults.node_addr))
                    .mut_arg(ids::SIGN_ADDR, |a| with_default(a, &defaults.sign_addr))
                    .mut_arg(ids::PUBKEY, |a| with_default(a, &defaults.pubkey))
                    .mut_arg(ids::ADDR, |a| with_default(a, &defaults.addr))
                    .mut_arg(ids::CHAIN_ID, |a| with_default(a, &defaults.chain_id))
            })
            .mut_subcommand("status", |status| {
                status.mut_arg(ids::NODE_ADDR, |a| with_default(a, &defaults.node_addr))
            });
        self
    }

    /// Names of the registered children, in registration order.
    pub fn child_names(&self) -> Vec<&str> {
        self.root.get_subcommands().map(|c| c.get_name()).collect()
    }

    /// The assembled root command.
    pub fn command(&self) -> &Command {
        &self.root
    }

    pub fn into_command(self) -> Command {
        self.root
    }
}

/// A boolean flag inherited by all descendants.
///
/// A bare `--flag` means true and `--flag=false` overrides a true default.
fn persistent_bool(id: &'static str, short: char, default: bool, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .help(help)
        .global(true)
        .action(ArgAction::Set)
        .num_args(0..=1)
        .require_equals(true)
        .value_name("BOOL")
        .default_value(if default { "true" } else { "false" })
        .default_missing_value("true")
        .value_parser(parse_flag_bool)
}

fn with_default(arg: Arg, value: &str) -> Arg {
    arg.default_value(value.to_string())
        .hide_default_value(value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::env::{env_lock, NODE_ADDRESS_VAR, VERBOSE_VAR};
    use clap::error::ErrorKind;

    fn full() -> Command {
        CommandRegistry::new()
            .register_persistent_flags()
            .register_child_commands()
            .into_command()
    }

    #[test]
    fn children_registered_in_order() {
        let _guard = env_lock();
        let registry = CommandRegistry::new()
            .register_persistent_flags()
            .register_child_commands();
        assert_eq!(
            registry.child_names(),
            vec!["tx", "status", "version", "completion"]
        );
    }

    #[test]
    fn root_keeps_client_description() {
        let _guard = env_lock();
        let command = full();
        let about = command.get_about().map(|s| s.to_string());
        assert_eq!(about.as_deref(), Some(ABOUT));

        let long_about = command
            .get_long_about()
            .map(|s| s.to_string())
            .unwrap_or_default();
        assert!(long_about.starts_with(ABOUT));
        assert!(long_about.contains(&format!("VERSION: {}", full_version())));
    }

    #[test]
    fn every_derived_child_is_registered() {
        let _guard = env_lock();
        let derived = ClientCommand::augment_subcommands(Command::new(ROOT_NAME));
        let mut names: Vec<_> = derived.get_subcommands().map(|c| c.get_name()).collect();
        names.sort_unstable();
        let mut expected = CHILD_ORDER.to_vec();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn tree_is_well_formed() {
        let _guard = env_lock();
        full().debug_assert();
    }

    #[test]
    fn persistent_flags_reach_nested_commands() {
        let _guard = env_lock();
        std::env::remove_var(VERBOSE_VAR);
        let matches = full()
            .try_get_matches_from([
                "burrow-client",
                "tx",
                "send",
                "--amt",
                "1",
                "--to",
                "00112233445566778899AABBCCDDEEFF00112233",
                "-v",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<bool>(ids::VERBOSE), Some(&true));
        assert_eq!(matches.get_one::<bool>(ids::DEBUG), Some(&false));
    }

    #[test]
    fn explicit_false_overrides_environment_default() {
        let _guard = env_lock();
        std::env::set_var(VERBOSE_VAR, "true");
        let command = full();
        std::env::remove_var(VERBOSE_VAR);

        let defaulted = command.clone().try_get_matches_from(["burrow-client"]).unwrap();
        assert_eq!(defaulted.get_one::<bool>(ids::VERBOSE), Some(&true));

        let overridden = command
            .try_get_matches_from(["burrow-client", "--verbose=false"])
            .unwrap();
        assert_eq!(overridden.get_one::<bool>(ids::VERBOSE), Some(&false));
    }

    #[test]
    fn environment_snapshotted_at_registration() {
        let _guard = env_lock();
        std::env::set_var(NODE_ADDRESS_VAR, "tcp://10.1.1.1:46657");
        let command = full();
        std::env::set_var(NODE_ADDRESS_VAR, "tcp://10.2.2.2:46657");

        let matches = command.try_get_matches_from(["burrow-client", "status"]).unwrap();
        std::env::remove_var(NODE_ADDRESS_VAR);

        let (_, status) = matches.subcommand().unwrap();
        assert_eq!(
            status.get_one::<String>(ids::NODE_ADDR).map(String::as_str),
            Some("tcp://10.1.1.1:46657")
        );
    }

    #[test]
    fn children_without_persistent_flags_reject_them() {
        let _guard = env_lock();
        let command = CommandRegistry::new().register_child_commands().into_command();
        let err = command
            .try_get_matches_from(["burrow-client", "version", "--verbose"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn invalid_boolean_flag_value_is_usage_error() {
        let _guard = env_lock();
        let err = full()
            .try_get_matches_from(["burrow-client", "--debug=sometimes", "version"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_subcommand_is_usage_error() {
        let _guard = env_lock();
        let err = full()
            .try_get_matches_from(["burrow-client", "teleport"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }
}
