//! Dogecoin chain parameters
//!
//! This crate is the single source of network-specific constants for a node:
//! wire identity, genesis block, proof-of-work and fork schedule, address
//! prefixes and peer discovery seeds for the main network, the public test
//! network and the local regression-test network.
//!
//! Exactly one parameter set is active per process. Startup code selects it
//! once, either directly with [`select_params`] or from the `-testnet` /
//! `-regtest` flags with [`select_params_from_command_line`], and every
//! consumer afterwards reads it through [`params`]. Components that prefer an
//! explicit handle can own a [`Registry`] instead, or take the
//! `&'static ChainParams` it returns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod args;
pub mod base58;
pub mod block;
pub mod chainparams;
pub mod consensus;
pub mod hash;
pub mod network;
pub mod registry;
pub mod seeds;

pub use args::NetworkFlags;
pub use base58::{Base58Prefixes, Base58Type};
pub use block::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};
pub use chainparams::{ChainParams, ParamsSummary};
pub use consensus::ConsensusParams;
pub use hash::{sha256d, BlockHash, Uint256};
pub use network::{MessageStart, Network};
pub use registry::{
    params, select_params, select_params_from_command_line, select_params_from_flags,
    try_params, Registry,
};
pub use seeds::DnsSeed;

/// Error types for parameter operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unknown network name
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Both `-testnet` and `-regtest` were requested
    #[error("Invalid combination of -regtest and -testnet")]
    InvalidNetworkCombination,

    /// Parameters were read before any network was selected
    #[error("Chain parameters have not been selected")]
    ParamsNotSelected,

    /// Malformed hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
