//! core::config
//!
//! Client configuration shared by every command.
//!
//! # Overview
//!
//! There is no configuration file. Settings come from command-line flags
//! whose defaults are resolved from the environment (see [`env`]).
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Hard-coded defaults
//! 2. Environment variables, snapshotted when the command tree is built
//! 3. Explicit CLI flags
//!
//! # Lifecycle
//!
//! Exactly one [`ClientConfig`] exists per run. The bootstrap creates it
//! zero-valued, binds parsed flags into it once, and then hands out shared
//! references only. Command handlers never construct or mutate it.

pub mod env;

use crate::ui::output::Verbosity;

/// Global settings and session settings for one client run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// More output than normal, less than debug.
    pub verbose: bool,
    /// The most output available.
    pub debug: bool,
    /// Node and signing settings used by `tx` and `status`.
    pub session: SessionConfig,
}

impl ClientConfig {
    /// Output verbosity implied by the global flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.debug)
    }
}

/// Settings for talking to a node and its key daemon.
///
/// Fields a command does not define keep their zero value; for example
/// `status` only binds `node_addr`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Node RPC address, e.g. `tcp://127.0.0.1:46657`.
    pub node_addr: String,
    /// Key daemon address, e.g. `http://127.0.0.1:4767`.
    pub sign_addr: String,
    /// Hex public key to sign with.
    pub pubkey: String,
    /// Hex account address of the sender.
    pub addr: String,
    pub chain_id: String,
    /// Explicit sequence number; looked up by the node when absent.
    pub nonce: Option<u64>,
    pub sign: bool,
    pub broadcast: bool,
    pub wait: bool,
}

/// Environment snapshot for the session flags.
///
/// Taken once, when the child commands are registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub node_addr: String,
    pub sign_addr: String,
    pub pubkey: String,
    pub addr: String,
    pub chain_id: String,
}

impl SessionDefaults {
    /// Resolve every session default from the current environment.
    pub fn from_env() -> Self {
        Self {
            node_addr: env::default_node_address(),
            sign_addr: env::default_sign_address(),
            pubkey: env::default_public_key(),
            addr: env::default_address(),
            chain_id: env::default_chain_id(),
        }
    }
}
