//! client::traits
//!
//! Node session trait and its request/response types.
//!
//! # Design
//!
//! The `NodeClient` trait is async because node operations involve network
//! I/O. All methods return `Result` so that a node failure surfaces as a
//! command failure, never as a panic.
//!
//! # Example
//!
//! ```ignore
//! use burrow_client::client::{BroadcastOptions, NodeClient};
//!
//! async fn submit(node: &dyn NodeClient, tx: &TxRequest) -> Result<(), ClientError> {
//!     let receipt = node.broadcast(tx, &BroadcastOptions::default()).await?;
//!     println!("tx {}", receipt.tx_hash);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::core::tx::TxRequest;

/// Errors from node session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The address is not a `tcp://` or `unix://` listen address.
    #[error("invalid node address '{0}': expected tcp://host:port or unix:///path")]
    InvalidAddress(String),

    /// This build has no transport for the node's RPC protocol.
    #[error("no transport available to reach node at '{0}'")]
    TransportUnavailable(String),

    /// The key daemon refused or failed to sign.
    #[error("signing failed: {0}")]
    SignFailed(String),

    /// The node rejected the transaction.
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// Timed out waiting for the transaction to be committed.
    #[error("timed out waiting for transaction to be committed")]
    WaitTimeout,
}

/// Chain status as reported by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStatus {
    pub chain_id: String,
    pub genesis_hash: String,
    pub validator_public_key: String,
    pub latest_block_hash: String,
    pub latest_block_height: u64,
    /// Unix nanoseconds.
    pub latest_block_time: i64,
    pub node_info: String,
}

impl NodeStatus {
    /// Field names accepted by `status --field`.
    pub const FIELDS: &'static [&'static str] = &[
        "chain-id",
        "genesis-hash",
        "validator-public-key",
        "latest-block-hash",
        "latest-block-height",
        "latest-block-time",
        "node-info",
    ];

    /// Render a single field, or `None` for an unknown name.
    pub fn field(&self, name: &str) -> Option<String> {
        let value = match name {
            "chain-id" => self.chain_id.clone(),
            "genesis-hash" => self.genesis_hash.clone(),
            "validator-public-key" => self.validator_public_key.clone(),
            "latest-block-hash" => self.latest_block_hash.clone(),
            "latest-block-height" => self.latest_block_height.to_string(),
            "latest-block-time" => self.latest_block_time.to_string(),
            "node-info" => self.node_info.clone(),
            _ => return None,
        };
        Some(value)
    }
}

/// How a formulated transaction should be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastOptions {
    /// Sign through the key daemon before broadcasting.
    pub sign: bool,
    /// Key daemon address used when `sign` is set.
    pub sign_addr: String,
    /// Block until the transaction is committed.
    pub wait: bool,
}

/// Result of broadcasting a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxReceipt {
    pub tx_hash: String,
    /// Address of the contract created by a call with no target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    /// Height of the committing block, when waited for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
}

/// A session with a running node.
///
/// Implementations must be `Send + Sync` so they can be shared across tasks.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Address this session talks to.
    fn node_addr(&self) -> &str;

    /// Query the node's view of the chain.
    ///
    /// # Errors
    ///
    /// - `TransportUnavailable` / `NetworkError` if the node cannot be reached
    async fn status(&self) -> Result<NodeStatus, ClientError>;

    /// Sign (optionally) and broadcast a transaction.
    ///
    /// # Errors
    ///
    /// - `SignFailed` if signing was requested and failed
    /// - `Rejected` if the node refused the transaction
    /// - `WaitTimeout` if `wait` was set and the commit never arrived
    async fn broadcast(
        &self,
        tx: &TxRequest,
        options: &BroadcastOptions,
    ) -> Result<TxReceipt, ClientError>;
}
