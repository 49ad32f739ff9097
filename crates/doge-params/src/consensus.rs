//! Consensus parameters: proof-of-work limits and the fork schedule

use crate::hash::Uint256;
use crate::network::Network;

/// Consensus parameters
///
/// Heights at which forks activate are exact: a rule that activates at `h`
/// applies to block `h` itself and everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusParams {
    /// Maximum target (minimum difficulty)
    pub pow_limit: Uint256,
    /// Retarget timespan in seconds before DigiShield
    pub target_timespan: i64,
    /// Target block spacing in seconds
    pub target_spacing: i64,
    /// First block retargeted with DigiShield
    pub digishield_fork_height: u32,
    /// Retarget timespan in seconds under DigiShield
    pub digishield_target_timespan: i64,
    /// First block that may carry auxiliary proof-of-work
    pub auxpow_start_height: u32,
    /// Whether this chain may be its own merge-mining parent
    pub allow_self_aux_parent: bool,
    /// Whether minimum-difficulty blocks are ever permitted
    pub allow_min_difficulty_blocks: bool,
    /// Height from which minimum-difficulty blocks are allowed again after DigiShield
    pub min_difficulty_allowed_start_height: u32,
    /// Upgraded blocks among the last `majority_window` needed to enforce new rules
    pub majority_enforce_block_upgrade: u32,
    /// Upgraded blocks among the last `majority_window` needed to reject old versions
    pub majority_reject_block_outdated: u32,
    /// Window of recent blocks checked for version majorities
    pub majority_window: u32,
    /// Block subsidy reduction interval
    pub subsidy_halving_interval: u32,
    /// Flat subsidy schedule instead of the main network's reward table
    pub simplified_rewards: bool,
}

impl ConsensusParams {
    /// Create consensus params for mainnet
    pub fn mainnet() -> Self {
        Self {
            pow_limit: Uint256::max_shr(20),
            target_timespan: 4 * 60 * 60, // 4 hours
            target_spacing: 60,           // 1 minute
            digishield_fork_height: 145_000,
            digishield_target_timespan: 60,
            auxpow_start_height: 371_337,
            allow_self_aux_parent: false,
            allow_min_difficulty_blocks: false,
            min_difficulty_allowed_start_height: 0,
            majority_enforce_block_upgrade: 1500,
            majority_reject_block_outdated: 1900,
            majority_window: 2000,
            subsidy_halving_interval: 100_000,
            simplified_rewards: false,
        }
    }

    /// Create consensus params for testnet
    pub fn testnet() -> Self {
        Self {
            pow_limit: Uint256::max_shr(20),
            target_timespan: 4 * 60 * 60,
            target_spacing: 60,
            digishield_fork_height: 145_000,
            digishield_target_timespan: 60,
            auxpow_start_height: 158_100,
            allow_self_aux_parent: false,
            allow_min_difficulty_blocks: true,
            min_difficulty_allowed_start_height: 157_500,
            majority_enforce_block_upgrade: 501,
            majority_reject_block_outdated: 750,
            majority_window: 1000,
            subsidy_halving_interval: 100_000,
            simplified_rewards: false,
        }
    }

    /// Create consensus params for regtest
    pub fn regtest() -> Self {
        Self {
            pow_limit: Uint256::max_shr(1),
            target_timespan: 4 * 60 * 60,
            target_spacing: 60,
            digishield_fork_height: 10,
            digishield_target_timespan: 60,
            auxpow_start_height: 20,
            allow_self_aux_parent: true,
            allow_min_difficulty_blocks: true,
            min_difficulty_allowed_start_height: 0,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            subsidy_halving_interval: 150, // Fast halvings for testing
            simplified_rewards: true,
        }
    }

    /// Get consensus params by network
    pub fn from_network(network: Network) -> Self {
        match network {
            Network::Main => Self::mainnet(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
        }
    }

    /// Blocks between retargets before DigiShield
    pub const fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Blocks between retargets under DigiShield
    pub const fn digishield_interval(&self) -> i64 {
        self.digishield_target_timespan / self.target_spacing
    }

    /// Check if DigiShield retargeting applies at given height
    pub const fn is_digishield_active(&self, height: u32) -> bool {
        height >= self.digishield_fork_height
    }

    /// Retarget timespan in force at given height
    pub const fn target_timespan_at(&self, height: u32) -> i64 {
        if self.is_digishield_active(height) {
            self.digishield_target_timespan
        } else {
            self.target_timespan
        }
    }

    /// Retarget interval in force at given height
    pub const fn interval_at(&self, height: u32) -> i64 {
        if self.is_digishield_active(height) {
            self.digishield_interval()
        } else {
            self.interval()
        }
    }

    /// Check if AuxPow is accepted at given height
    pub const fn is_auxpow_active(&self, height: u32) -> bool {
        height >= self.auxpow_start_height
    }

    /// Check if a minimum-difficulty block may be mined at given height
    pub const fn allows_min_difficulty_at(&self, height: u32) -> bool {
        self.allow_min_difficulty_blocks
            && (!self.is_digishield_active(height)
                || height >= self.min_difficulty_allowed_start_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_consensus() {
        let params = ConsensusParams::mainnet();
        assert_eq!(params.target_spacing, 60);
        assert_eq!(params.interval(), 240);
        assert_eq!(params.digishield_interval(), 1);
        assert_eq!(params.pow_limit.leading_zero_bits(), 20);
    }

    #[test]
    fn test_digishield_switch_is_exact() {
        let params = ConsensusParams::mainnet();
        let fork = params.digishield_fork_height;

        assert!(!params.is_digishield_active(fork - 1));
        assert_eq!(params.target_timespan_at(fork - 1), 4 * 60 * 60);
        assert_eq!(params.interval_at(fork - 1), 240);

        assert!(params.is_digishield_active(fork));
        assert_eq!(params.target_timespan_at(fork), 60);
        assert_eq!(params.interval_at(fork), 1);
    }

    #[test]
    fn test_auxpow_activation() {
        let params = ConsensusParams::testnet();
        assert!(!params.is_auxpow_active(158_099));
        assert!(params.is_auxpow_active(158_100));
    }

    #[test]
    fn test_testnet_min_difficulty_window() {
        let params = ConsensusParams::testnet();
        // allowed before DigiShield
        assert!(params.allows_min_difficulty_at(144_999));
        // suspended from the fork until the exception window opens
        assert!(!params.allows_min_difficulty_at(145_000));
        assert!(!params.allows_min_difficulty_at(157_499));
        assert!(params.allows_min_difficulty_at(157_500));
    }

    #[test]
    fn test_mainnet_never_allows_min_difficulty() {
        let params = ConsensusParams::mainnet();
        assert!(!params.allows_min_difficulty_at(0));
        assert!(!params.allows_min_difficulty_at(1_000_000));
    }

    #[test]
    fn test_from_network() {
        for network in Network::ALL {
            assert!(ConsensusParams::from_network(network).target_spacing > 0);
        }
        assert_eq!(ConsensusParams::from_network(Network::Regtest), ConsensusParams::regtest());
    }
}
