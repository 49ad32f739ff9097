//! Network identifiers and wire identity

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Main,
    /// Public test network
    #[serde(rename = "test", alias = "testnet")]
    Testnet,
    /// Local regression-test network
    Regtest,
}

impl Network {
    /// All networks, in selection-priority order
    pub const ALL: [Network; 3] = [Network::Main, Network::Testnet, Network::Regtest];

    /// Canonical short name, as reported over RPC
    pub const fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}

/// Size of the message-start marker in bytes
pub const MESSAGE_START_SIZE: usize = 4;

/// Marker prefixed to every peer-to-peer message
///
/// Peers on different networks use different markers, so a node never
/// accepts a connection from the wrong chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageStart([u8; MESSAGE_START_SIZE]);

impl MessageStart {
    /// Wrap raw marker bytes
    pub const fn new(bytes: [u8; MESSAGE_START_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw marker bytes in wire order
    pub const fn as_bytes(&self) -> &[u8; MESSAGE_START_SIZE] {
        &self.0
    }
}

impl fmt::LowerHex for MessageStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Display for MessageStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl Serialize for MessageStart {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_names_round_trip() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_serde_name_matches_display() {
        for network in Network::ALL {
            let json = serde_json::to_value(network).unwrap();
            assert_eq!(json, network.to_string());
            assert_eq!(serde_json::from_value::<Network>(json).unwrap(), network);
        }
    }

    #[test]
    fn test_network_aliases() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet);
    }

    #[test]
    fn test_unknown_network() {
        let err = "signet".parse::<Network>().unwrap_err();
        assert_eq!(err, Error::InvalidNetwork("signet".to_string()));
    }

    #[test]
    fn test_message_start_hex() {
        let magic = MessageStart::new([0xfc, 0xc1, 0xb7, 0xdc]);
        assert_eq!(format!("{:x}", magic), "fcc1b7dc");
        assert_eq!(magic.as_bytes(), &[0xfc, 0xc1, 0xb7, 0xdc]);
    }
}
