//! client
//!
//! Sessions with a running Burrow node.
//!
//! # Architecture
//!
//! The `NodeClient` trait is the only way commands reach a node. Commands
//! obtain a session from a [`Connector`] after the client configuration is
//! frozen, so every session sees the same settings.
//!
//! # Modules
//!
//! - `traits`: `NodeClient` trait and request/response types
//! - `factory`: `Connector`, address parsing, the detached connector
//! - [`mock`]: Mock implementation for deterministic testing

mod factory;
pub mod mock;
mod traits;

pub use factory::{Connector, DetachedConnector, NodeAddress};
pub use traits::*;
