//! client::factory
//!
//! Session creation.
//!
//! # Design
//!
//! Commands never build a node session themselves. They receive a
//! [`Connector`] and ask it for a [`NodeClient`] for the frozen session
//! settings. The binary uses [`DetachedConnector`]; tests use
//! [`MockNode`](super::mock::MockNode).
//!
//! # Address Forms
//!
//! - `tcp://host:port`
//! - `unix:///path/to/socket`

use std::fmt;

use super::traits::{ClientError, NodeClient};
use crate::core::config::SessionConfig;

/// Creates node sessions.
pub trait Connector {
    /// Open a session for the given settings.
    ///
    /// # Errors
    ///
    /// - `InvalidAddress` if `node_addr` is malformed
    /// - `TransportUnavailable` if no transport can reach it
    fn connect(&self, session: &SessionConfig) -> Result<Box<dyn NodeClient>, ClientError>;
}

/// A parsed node listen address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAddress {
    Tcp { host: String, port: u16 },
    Unix { path: String },
}

impl NodeAddress {
    /// Parse a fully formed node address.
    ///
    /// # Example
    ///
    /// ```
    /// use burrow_client::client::NodeAddress;
    ///
    /// let addr = NodeAddress::parse("tcp://127.0.0.1:46657").unwrap();
    /// assert_eq!(addr, NodeAddress::Tcp { host: "127.0.0.1".into(), port: 46657 });
    /// assert!(NodeAddress::parse("127.0.0.1:46657").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let invalid = || ClientError::InvalidAddress(input.to_string());

        if let Some(rest) = input.strip_prefix("tcp://") {
            let (host, port) = rest.rsplit_once(':').ok_or_else(invalid)?;
            if host.is_empty() {
                return Err(invalid());
            }
            let port = port.parse::<u16>().map_err(|_| invalid())?;
            Ok(NodeAddress::Tcp {
                host: host.to_string(),
                port,
            })
        } else if let Some(path) = input.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(invalid());
            }
            Ok(NodeAddress::Unix {
                path: path.to_string(),
            })
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeAddress::Tcp { host, port } => write!(f, "tcp://{}:{}", host, port),
            NodeAddress::Unix { path } => write!(f, "unix://{}", path),
        }
    }
}

/// Connector for builds without a node transport.
///
/// Validates the address, then reports that the node cannot be reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedConnector;

impl Connector for DetachedConnector {
    fn connect(&self, session: &SessionConfig) -> Result<Box<dyn NodeClient>, ClientError> {
        let addr = NodeAddress::parse(&session.node_addr)?;
        tracing::debug!(%addr, "no transport registered for node address");
        Err(ClientError::TransportUnavailable(addr.to_string()))
    }
}
