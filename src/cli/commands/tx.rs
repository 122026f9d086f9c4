//! tx command - Formulate, sign and broadcast a transaction

use std::fs;

use anyhow::{Context as _, Result};

use super::block_on;
use crate::cli::args::TxKind;
use crate::client::{BroadcastOptions, Connector, TxReceipt};
use crate::core::config::{ClientConfig, SessionConfig};
use crate::core::tx::{formulate, TxPayload, TxRequest};
use crate::ui::output;

/// What a `tx` invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    /// `--broadcast=false`: the unsigned transaction.
    Formulated(TxRequest),
    /// The node accepted the transaction.
    Broadcast(TxReceipt),
}

/// Formulate a transaction and, unless `--broadcast=false`, submit it.
pub fn tx(config: &ClientConfig, connector: &dyn Connector, kind: TxKind) -> Result<()> {
    for warning in parameter_warnings(&config.session) {
        output::warn(warning);
    }

    match submit(config, connector, kind)? {
        TxOutcome::Formulated(request) => {
            output::print(serde_json::to_string_pretty(&request)?);
        }
        TxOutcome::Broadcast(receipt) => {
            let mut fields = vec![("Transaction hash:", receipt.tx_hash.clone())];
            if let Some(address) = &receipt.contract_address {
                fields.push(("Contract address:", address.clone()));
            }
            if let Some(height) = receipt.block_height {
                fields.push(("Block height:", height.to_string()));
            }
            output::print(output::format_fields(&fields));
        }
    }
    Ok(())
}

/// Formulate and optionally broadcast, without printing.
pub fn submit(config: &ClientConfig, connector: &dyn Connector, kind: TxKind) -> Result<TxOutcome> {
    let session = &config.session;
    let request = formulate(session, payload(kind)?).context("failed to formulate transaction")?;
    tracing::info!(kind = request.kind(), chain_id = %request.chain_id, "formulated transaction");

    if !session.broadcast {
        return Ok(TxOutcome::Formulated(request));
    }

    output::detail(
        format!("broadcasting {} transaction to {}", request.kind(), session.node_addr),
        config.verbosity(),
    );

    let node = connector
        .connect(session)
        .context("failed to connect to node")?;
    let options = BroadcastOptions {
        sign: session.sign,
        sign_addr: session.sign_addr.clone(),
        wait: session.wait,
    };
    let receipt = block_on(node.broadcast(&request, &options))?
        .with_context(|| format!("failed to broadcast to {}", node.node_addr()))?;
    tracing::debug!(tx_hash = %receipt.tx_hash, "transaction accepted");

    Ok(TxOutcome::Broadcast(receipt))
}

/// Build the kind-specific payload. Reads `--data-file` if given.
pub fn payload(kind: TxKind) -> Result<TxPayload> {
    let payload = match kind {
        TxKind::Send(args) => TxPayload::Send {
            to: args.to,
            amount: args.amt,
        },
        TxKind::Name(args) => {
            let data = match (args.data, args.data_file) {
                (Some(data), _) => data,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read data file '{}'", path.display()))?,
                (None, None) => String::new(),
            };
            TxPayload::Name {
                name: args.name,
                data,
                amount: args.amt,
                fee: args.fee,
            }
        }
        TxKind::Call(args) => TxPayload::Call {
            to: args.to,
            amount: args.amt,
            fee: args.fee,
            gas_limit: args.gas,
            data: args.data,
        },
        TxKind::Bond(args) => TxPayload::Bond {
            amount: args.amt,
            unbond_to: args.unbond_to,
        },
        TxKind::Unbond(args) => TxPayload::Unbond {
            height: args.height,
        },
        TxKind::Rebond(args) => TxPayload::Rebond {
            height: args.height,
        },
    };
    Ok(payload)
}

/// Warnings for addresses missing their scheme. These never fail the command.
pub fn parameter_warnings(session: &SessionConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if !session.node_addr.starts_with("tcp://") && !session.node_addr.starts_with("unix://") {
        warnings.push(
            "please use a fully formed listening address for the node, \
             including the tcp:// or unix:// prefix"
                .to_string(),
        );
    }
    if !session.sign_addr.starts_with("http://") {
        warnings.push(
            "please use a fully formed listening address for the key server, \
             including the http:// prefix"
                .to_string(),
        );
    }
    warnings
}
