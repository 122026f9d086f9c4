//! burrow-client - A command-line client for a running Burrow chain
//!
//! burrow-client formulates transactions, optionally signs them through a key
//! daemon, broadcasts them to a node, and queries the node's status.
//!
//! # Architecture
//!
//! - [`cli`] - Command tree, ordered bootstrap, dispatch
//! - [`core`] - Shared configuration, environment defaults, domain types
//! - [`client`] - Node session abstraction
//! - [`ui`] - Output and logging
//! - [`version`] - Version string
//!
//! # Start-up Invariants
//!
//! 1. The client configuration is created exactly once per run
//! 2. Flag defaults are read from the environment once, at registration
//! 3. Persistent flags are registered before child commands
//! 4. Handlers only ever see the configuration after parsing has frozen it

pub mod cli;
pub mod client;
pub mod core;
pub mod ui;
pub mod version;
