//! status command - Return the current status from a chain

use anyhow::{anyhow, Context as _, Result};

use super::block_on;
use crate::client::{Connector, NodeStatus};
use crate::core::config::ClientConfig;
use crate::ui::output;

/// Print the node's status, or a single field of it.
pub fn status(config: &ClientConfig, connector: &dyn Connector, field: Option<&str>) -> Result<()> {
    let status = fetch_status(config, connector)?;

    match field {
        Some(name) => {
            let value = status.field(name).ok_or_else(|| {
                anyhow!(
                    "unknown status field '{}', expected one of: {}",
                    name,
                    NodeStatus::FIELDS.join(", ")
                )
            })?;
            output::print(value);
        }
        None => output::print(output::format_fields(&[
            ("Chain ID:", status.chain_id.clone()),
            ("Genesis hash:", status.genesis_hash.clone()),
            ("Validator public key:", status.validator_public_key.clone()),
            ("Latest block hash:", status.latest_block_hash.clone()),
            ("Latest block height:", status.latest_block_height.to_string()),
            ("Latest block time:", status.latest_block_time.to_string()),
            ("Node info:", status.node_info.clone()),
        ])),
    }
    Ok(())
}

/// Query the node configured by `--node-addr`.
pub fn fetch_status(config: &ClientConfig, connector: &dyn Connector) -> Result<NodeStatus> {
    let node_addr = &config.session.node_addr;
    tracing::info!(%node_addr, "querying node status");

    let node = connector
        .connect(&config.session)
        .context("failed to connect to node")?;
    let status = block_on(node.status())?
        .with_context(|| format!("failed to get status from {}", node_addr))?;

    tracing::debug!(height = status.latest_block_height, "received status");
    Ok(status)
}
