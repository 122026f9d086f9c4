//! core::tx
//!
//! Transaction formulation.
//!
//! # Design
//!
//! A [`TxRequest`] is the unsigned description of a transaction, assembled
//! from session settings and the per-kind [`TxPayload`]. Formulation is local
//! and never touches the network; signing and broadcasting belong to the node
//! session (see [`crate::client`]).
//!
//! # Example
//!
//! ```
//! use burrow_client::core::config::SessionConfig;
//! use burrow_client::core::tx::{formulate, TxPayload};
//! use burrow_client::core::types::Address;
//!
//! let session = SessionConfig {
//!     addr: "00112233445566778899AABBCCDDEEFF00112233".into(),
//!     chain_id: "test-chain".into(),
//!     ..Default::default()
//! };
//! let to = Address::new("FFEEDDCCBBAA99887766554433221100FFEEDDCC").unwrap();
//! let tx = formulate(&session, TxPayload::Send { to, amount: 10 }).unwrap();
//! assert_eq!(tx.kind(), "send");
//! ```

use serde::Serialize;
use thiserror::Error;

use super::config::SessionConfig;
use super::types::{Address, HexData, PublicKey, TypeError};

/// Errors from transaction formulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TxError {
    #[error("either --addr or --pubkey must be given to identify the sender")]
    MissingSender,

    #[error("--{0} is required for {1} transactions")]
    MissingField(&'static str, &'static str),

    #[error("--chain-id is required to sign a transaction")]
    ChainIdRequired,

    #[error(transparent)]
    InvalidValue(#[from] TypeError),
}

/// The account a transaction originates from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<PublicKey>,
}

/// Kind-specific transaction fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TxPayload {
    Send {
        to: Address,
        amount: u64,
    },
    Name {
        name: String,
        data: String,
        amount: u64,
        fee: u64,
    },
    /// `to == None` creates a contract from `data`.
    Call {
        to: Option<Address>,
        amount: u64,
        fee: u64,
        gas_limit: u64,
        data: HexData,
    },
    Bond {
        amount: u64,
        unbond_to: Address,
    },
    Unbond {
        height: u64,
    },
    Rebond {
        height: u64,
    },
}

impl TxPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            TxPayload::Send { .. } => "send",
            TxPayload::Name { .. } => "name",
            TxPayload::Call { .. } => "call",
            TxPayload::Bond { .. } => "bond",
            TxPayload::Unbond { .. } => "unbond",
            TxPayload::Rebond { .. } => "rebond",
        }
    }

    fn requires_address(&self) -> bool {
        matches!(self, TxPayload::Unbond { .. } | TxPayload::Rebond { .. })
    }
}

/// An unsigned, formulated transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxRequest {
    pub chain_id: String,
    pub sender: Sender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(flatten)]
    pub payload: TxPayload,
}

impl TxRequest {
    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }
}

/// Formulate a transaction from the session settings and a payload.
///
/// # Errors
///
/// - [`TxError::InvalidValue`] if `--addr` or `--pubkey` is not valid hex
/// - [`TxError::MissingSender`] if neither is given
/// - [`TxError::MissingField`] if an unbond/rebond lacks `--addr`
/// - [`TxError::ChainIdRequired`] if signing without a chain id
pub fn formulate(session: &SessionConfig, payload: TxPayload) -> Result<TxRequest, TxError> {
    let address = non_empty(&session.addr).map(Address::new).transpose()?;
    let public_key = non_empty(&session.pubkey).map(PublicKey::new).transpose()?;

    if address.is_none() && public_key.is_none() {
        return Err(TxError::MissingSender);
    }
    if payload.requires_address() && address.is_none() {
        return Err(TxError::MissingField("addr", payload.kind()));
    }
    if session.sign && session.chain_id.is_empty() {
        return Err(TxError::ChainIdRequired);
    }

    Ok(TxRequest {
        chain_id: session.chain_id.clone(),
        sender: Sender {
            address,
            public_key,
        },
        nonce: session.nonce,
        payload,
    })
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
