//! Peer discovery seeds

use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// DNS seed queried for peer addresses at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    /// Operator name
    pub name: &'static str,
    /// Hostname to resolve
    pub host: &'static str,
}

impl DnsSeed {
    /// Create a seed entry
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// Main network DNS seeds
pub const MAIN_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("dogecoin.com", "seed.dogecoin.com"),
    DnsSeed::new("mophides.com", "seed.mophides.com"),
    DnsSeed::new("dglibrary.org", "seed.dglibrary.org"),
    DnsSeed::new("dogechain.info", "seed.dogechain.info"),
];

/// Test network DNS seeds
pub const TESTNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("testdoge.lionservers.de", "testdoge-seed.lionservers.de"),
    DnsSeed::new("lionservers.de", "testdoge-seed-static.lionservers.de"),
];

/// Main network fallback peers, IPv4 in little-endian `u32` form
///
/// Documentation-range addresses (RFC 5737) standing in for the real table,
/// so nothing here dials a live host.
// TODO: import the node's pnSeed table for main once it is vendored here.
pub const MAIN_FIXED_SEEDS_IPV4: &[u32] = &[
    0x0a02_00c0, // 192.0.2.10
    0x0b02_00c0, // 192.0.2.11
    0x1464_33c6, // 198.51.100.20
    0x1e71_00cb, // 203.0.113.30
];

/// Convert compiled-in IPv4 seeds to socket addresses on `port`
pub fn fixed_seeds_from_ipv4(seeds: &[u32], port: u16) -> Vec<SocketAddr> {
    seeds
        .iter()
        .map(|ip| {
            let ip = Ipv4Addr::from(ip.to_le_bytes());
            SocketAddr::V4(SocketAddrV4::new(ip, port))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_byte_order() {
        let addrs = fixed_seeds_from_ipv4(&[0x0100_007f], 22556);
        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].to_string(), "127.0.0.1:22556");
    }

    #[test]
    fn test_main_fixed_seeds_use_port() {
        let addrs = fixed_seeds_from_ipv4(MAIN_FIXED_SEEDS_IPV4, 22556);
        assert_eq!(addrs.len(), MAIN_FIXED_SEEDS_IPV4.len());
        assert!(addrs.iter().all(|a| a.port() == 22556));
    }

    #[test]
    fn test_main_fixed_seeds_are_documentation_addresses() {
        let addrs = fixed_seeds_from_ipv4(MAIN_FIXED_SEEDS_IPV4, 22556);
        assert_eq!(addrs[0].to_string(), "192.0.2.10:22556");
        for addr in addrs {
            let SocketAddr::V4(v4) = addr else {
                panic!("expected IPv4, got {addr}");
            };
            let [a, b, c, _] = v4.ip().octets();
            assert!(
                matches!((a, b, c), (192, 0, 2) | (198, 51, 100) | (203, 0, 113)),
                "{addr} is outside the documentation ranges"
            );
        }
    }

    #[test]
    fn test_dns_seed_hosts_distinct() {
        let mut hosts: Vec<_> = MAIN_DNS_SEEDS
            .iter()
            .chain(TESTNET_DNS_SEEDS)
            .map(|s| s.host)
            .collect();
        hosts.sort_unstable();
        hosts.dedup();
        assert_eq!(hosts.len(), MAIN_DNS_SEEDS.len() + TESTNET_DNS_SEEDS.len());
    }
}
