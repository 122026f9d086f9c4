//! client::mock
//!
//! Mock node implementation for deterministic testing.
//!
//! # Design
//!
//! `MockNode` answers `status` from a configured [`NodeStatus`], records
//! every broadcast, and can be told to fail a specific operation. It also
//! implements [`Connector`] so command handlers can be driven end to end
//! without a running chain.
//!
//! # Example
//!
//! ```
//! use burrow_client::client::mock::MockNode;
//! use burrow_client::client::NodeClient;
//!
//! # tokio_test::block_on(async {
//! let node = MockNode::new();
//! let status = node.status().await.unwrap();
//! assert_eq!(status.chain_id, "mock-chain");
//! # });
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::factory::Connector;
use super::traits::{BroadcastOptions, ClientError, NodeClient, NodeStatus, TxReceipt};
use crate::core::config::SessionConfig;
use crate::core::tx::{TxPayload, TxRequest};

/// Mock node for testing.
///
/// Clones share state.
#[derive(Debug, Clone)]
pub struct MockNode {
    inner: Arc<Mutex<MockNodeInner>>,
}

#[derive(Debug)]
struct MockNodeInner {
    status: NodeStatus,
    next_tx: u64,
    fail_on: Option<FailOn>,
    operations: Vec<MockOperation>,
}

/// Which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    Connect(ClientError),
    Status(ClientError),
    Broadcast(ClientError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    Connect { node_addr: String },
    Status,
    Broadcast { tx: TxRequest, options: BroadcastOptions },
}

impl Default for MockNode {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNode {
    /// Create a mock node with a fixed, plausible status.
    pub fn new() -> Self {
        Self::with_status(NodeStatus {
            chain_id: "mock-chain".into(),
            genesis_hash: "7B0F3A8E4C1D2B5A6F7E8D9C0B1A2F3E4D5C6B7A".into(),
            validator_public_key: "E1C1D5E0F7F1B7C6B4D9A2E8F3C0A1B2C3D4E5F60718293A4B5C6D7E8F901234"
                .into(),
            latest_block_hash: "0A1B2C3D4E5F60718293A4B5C6D7E8F901234567".into(),
            latest_block_height: 1,
            latest_block_time: 0,
            node_info: "mock".into(),
        })
    }

    pub fn with_status(status: NodeStatus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockNodeInner {
                status,
                next_tx: 1,
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Configure the mock to fail on a specific operation.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        self.state().fail_on = Some(fail_on);
        self
    }

    /// All recorded operations, oldest first.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.state().operations.clone()
    }

    /// Transactions broadcast so far.
    pub fn broadcasts(&self) -> Vec<TxRequest> {
        self.state()
            .operations
            .iter()
            .filter_map(|op| match op {
                MockOperation::Broadcast { tx, .. } => Some(tx.clone()),
                _ => None,
            })
            .collect()
    }

    fn state(&self) -> MutexGuard<'_, MockNodeInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl NodeClient for MockNode {
    fn node_addr(&self) -> &str {
        "mock://node"
    }

    async fn status(&self) -> Result<NodeStatus, ClientError> {
        let mut inner = self.state();
        inner.operations.push(MockOperation::Status);
        if let Some(FailOn::Status(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        Ok(inner.status.clone())
    }

    async fn broadcast(
        &self,
        tx: &TxRequest,
        options: &BroadcastOptions,
    ) -> Result<TxReceipt, ClientError> {
        let mut inner = self.state();
        inner.operations.push(MockOperation::Broadcast {
            tx: tx.clone(),
            options: options.clone(),
        });
        if let Some(FailOn::Broadcast(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let seq = inner.next_tx;
        inner.next_tx += 1;

        let contract_address = match &tx.payload {
            TxPayload::Call { to: None, .. } => Some(format!("{:040X}", seq)),
            _ => None,
        };
        let block_height = options
            .wait
            .then_some(inner.status.latest_block_height + seq);

        Ok(TxReceipt {
            tx_hash: format!("{:064X}", seq),
            contract_address,
            block_height,
        })
    }
}

impl Connector for MockNode {
    fn connect(&self, session: &SessionConfig) -> Result<Box<dyn NodeClient>, ClientError> {
        let mut inner = self.state();
        inner.operations.push(MockOperation::Connect {
            node_addr: session.node_addr.clone(),
        });
        if let Some(FailOn::Connect(err)) = &inner.fail_on {
            return Err(err.clone());
        }
        drop(inner);
        Ok(Box::new(self.clone()))
    }
}
