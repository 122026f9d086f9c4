//! core
//!
//! Domain types, configuration and transaction formulation.
//!
//! # Modules
//!
//! - [`config`] - Shared client configuration and environment defaults
//! - [`types`] - Validated addresses, keys and hex data
//! - [`tx`] - Transaction formulation
//!
//! Nothing in this module performs I/O beyond reading the environment.

pub mod config;
pub mod tx;
pub mod types;
