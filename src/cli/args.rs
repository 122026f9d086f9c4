//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Persistent Flags
//!
//! Registered on the root by [`crate::cli::registry`] and available on all
//! commands:
//! - `--verbose` / `-v`: More output; default respects `$BURROW_CLIENT_VERBOSE`
//! - `--debug` / `-d`: Debug output; default respects `$BURROW_CLIENT_DEBUG`
//!
//! # Environment Defaults
//!
//! Session flags declared here carry no default of their own. The registry
//! injects environment-derived defaults when it attaches these commands, so
//! the arguments are declared `required = false`.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Args, Subcommand};

use crate::client::NodeStatus;
use crate::core::config::env::parse_bool;
use crate::core::config::SessionConfig;
use crate::core::types::{Address, HexData};

/// Argument ids, as referenced when the registry injects defaults.
pub mod ids {
    pub const VERBOSE: &str = "verbose";
    pub const DEBUG: &str = "debug";
    pub const NODE_ADDR: &str = "node_addr";
    pub const SIGN_ADDR: &str = "sign_addr";
    pub const PUBKEY: &str = "pubkey";
    pub const ADDR: &str = "addr";
    pub const CHAIN_ID: &str = "chain_id";
}

/// Value parser for boolean flags that accept `--flag=false`.
pub fn parse_flag_bool(value: &str) -> Result<bool, String> {
    parse_bool(value).ok_or_else(|| format!("'{}' is not a boolean (use true or false)", value))
}

/// Child commands, registered on the root by the registry.
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Formulate, sign and broadcast a transaction to a chain
    #[command(
        name = "tx",
        long_about = "Formulate, sign and broadcast a transaction to a chain.\n\n\
            The transaction is formulated from the flags given, optionally signed \
            through the key daemon, and broadcast to the node. With \
            --broadcast=false the unsigned transaction is printed as JSON instead.",
        after_help = "\
EXAMPLES:
    # Send 10 units to an account
    burrow-client tx send --amt 10 --to <ADDRESS> --addr <ADDRESS>

    # Formulate only, print the transaction
    burrow-client tx --broadcast=false send --amt 10 --to <ADDRESS> --addr <ADDRESS>

    # Sign, broadcast and wait for the block
    burrow-client tx -s -w --chain-id my-chain call --amt 0 --fee 1 --gas 1000 --data 6060"
    )]
    Tx(TxCommand),

    /// Return the current status from a chain
    #[command(name = "status")]
    Status(StatusArgs),

    /// Print full version
    #[command(name = "version")]
    Version,

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// `tx` and its persistent session flags.
#[derive(Args, Debug)]
pub struct TxCommand {
    #[command(flatten)]
    pub session: TxSessionArgs,

    #[command(subcommand)]
    pub kind: Option<TxKind>,
}

/// Flags shared by every transaction kind.
#[derive(Args, Debug, Clone)]
pub struct TxSessionArgs {
    /// Node RPC address; default respects $BURROW_CLIENT_NODE_ADDRESS
    #[arg(long, global = true, required = false, value_name = "ADDR")]
    pub node_addr: String,

    /// Key daemon address; default respects $BURROW_CLIENT_SIGN_ADDRESS
    #[arg(long, global = true, required = false, value_name = "ADDR")]
    pub sign_addr: String,

    /// Public key to sign with; default respects $BURROW_CLIENT_PUBLIC_KEY
    #[arg(long, global = true, required = false, value_name = "HEX")]
    pub pubkey: String,

    /// Account address of the sender; default respects $BURROW_CLIENT_ADDRESS
    #[arg(long, global = true, required = false, value_name = "HEX")]
    pub addr: String,

    /// Chain id; default respects $CHAIN_ID
    #[arg(long, global = true, required = false, value_name = "ID")]
    pub chain_id: String,

    /// Nonce to use (the sender account's sequence + 1)
    #[arg(long, global = true)]
    pub nonce: Option<u64>,

    /// Sign the transaction using the key daemon
    #[arg(short, long, global = true)]
    pub sign: bool,

    /// Broadcast the transaction to the chain
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        value_name = "BOOL",
        default_value = "true",
        default_missing_value = "true",
        value_parser = parse_flag_bool
    )]
    pub broadcast: bool,

    /// Wait for the transaction to be committed in a block
    #[arg(short, long, global = true)]
    pub wait: bool,
}

impl TxSessionArgs {
    /// Session settings for the shared client configuration.
    pub fn to_session(&self) -> SessionConfig {
        SessionConfig {
            node_addr: self.node_addr.clone(),
            sign_addr: self.sign_addr.clone(),
            pubkey: self.pubkey.clone(),
            addr: self.addr.clone(),
            chain_id: self.chain_id.clone(),
            nonce: self.nonce,
            sign: self.sign,
            broadcast: self.broadcast,
            wait: self.wait,
        }
    }
}

/// Transaction kinds.
#[derive(Subcommand, Debug)]
pub enum TxKind {
    /// Send an amount to an account: tx send --amt <amt> --to <addr>
    Send(SendArgs),

    /// Register a name: tx name --amt <amt> --name <name> --data <data> --fee <fee>
    Name(NameArgs),

    /// Call or create a contract: tx call --amt <amt> --fee <fee> --gas <gas> --to <contract> --data <data>
    Call(CallArgs),

    /// Bond an amount as a validator: tx bond --amt <amt> --unbond-to <addr>
    Bond(BondArgs),

    /// Unbond the --addr validator: tx unbond --height <block>
    Unbond(HeightArgs),

    /// Rebond the --addr validator: tx rebond --height <block>
    Rebond(HeightArgs),
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Amount to send
    #[arg(short, long)]
    pub amt: u64,

    /// Recipient address
    #[arg(short, long, value_name = "HEX", value_parser = Address::new)]
    pub to: Address,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Amount to pay for the registration
    #[arg(short, long)]
    pub amt: u64,

    /// Name to register
    #[arg(short, long)]
    pub name: String,

    /// Data to store under the name
    #[arg(long, required_unless_present = "data_file", conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the data to store from a file
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Fee to pay
    #[arg(long)]
    pub fee: u64,
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Amount to transfer with the call
    #[arg(short, long)]
    pub amt: u64,

    /// Contract to call; omit to create a contract from --data
    #[arg(short, long, value_name = "HEX", value_parser = Address::new)]
    pub to: Option<Address>,

    /// Fee to pay
    #[arg(long)]
    pub fee: u64,

    /// Gas limit
    #[arg(long)]
    pub gas: u64,

    /// Hex call data or contract code
    #[arg(long, value_name = "HEX", value_parser = HexData::new, default_value = "")]
    pub data: HexData,
}

#[derive(Args, Debug)]
pub struct BondArgs {
    /// Amount to bond
    #[arg(short, long)]
    pub amt: u64,

    /// Address that receives the bond on unbonding
    #[arg(long, value_name = "HEX", value_parser = Address::new)]
    pub unbond_to: Address,
}

#[derive(Args, Debug)]
pub struct HeightArgs {
    /// Block height
    #[arg(long)]
    pub height: u64,
}

/// `status` flags.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Node RPC address; default respects $BURROW_CLIENT_NODE_ADDRESS
    #[arg(long, required = false, value_name = "ADDR")]
    pub node_addr: String,

    /// Print only this field
    #[arg(long, value_parser = PossibleValuesParser::new(NodeStatus::FIELDS.iter().copied()))]
    pub field: Option<String>,
}
