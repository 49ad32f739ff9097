//! Per-network parameter sets
//!
//! Each network has exactly one [`ChainParams`] value, built on first use and
//! shared for the rest of the process. Every field is populated for every
//! network; there are no partial configurations.

use crate::base58::{Base58Prefixes, Base58Type};
use crate::block::{genesis_block, Block};
use crate::consensus::ConsensusParams;
use crate::hash::{BlockHash, Uint256};
use crate::network::{MessageStart, Network};
use crate::seeds::{self, DnsSeed};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::net::SocketAddr;

const MAIN_GENESIS_HASH: &str = "1a91e3dace36e2be3bf030a65679fe821aa1d6ef92e7c9902eb318182c355691";
const TESTNET_GENESIS_HASH: &str = "bb0a78264637406b6360aad926284d544d7049f45189db5664f3c4d07350559e";
const REGTEST_GENESIS_HASH: &str = "3d2160a3b5dc4a9d62e7e66a295f70313ac808440ef7400d6c0772171ce973a5";

const MAIN_ALERT_KEY: &str = "04d4da7a5dae4db797d9b0644d57a5cd50e05a70f36091cd62e2fc41c98ded06340be5a43a35e185690cd9cde5d72da8f6d065b499b06f51dcfba14aad859f443a";
const TESTNET_ALERT_KEY: &str = "042756726da3c7ef515d89212ee1705023d14be389e25fe15611585661b9a20021908b2b80a3c7200a0139dd2b26946606aab0eef9aa7689a6dc2c7eee237fa834";

static MAIN: Lazy<ChainParams> = Lazy::new(ChainParams::main);
static TESTNET: Lazy<ChainParams> = Lazy::new(ChainParams::testnet);
static REGTEST: Lazy<ChainParams> = Lazy::new(ChainParams::regtest);

/// Behavioral switches that differ between networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct Flags {
    require_rpc_password: bool,
    mining_requires_peers: bool,
    default_check_mempool: bool,
    require_standard: bool,
    rpc_is_testnet: bool,
    mine_blocks_on_demand: bool,
}

/// All constants defining one network
#[derive(Debug, Clone)]
pub struct ChainParams {
    network: Network,
    data_dir: &'static str,
    message_start: MessageStart,
    default_port: u16,
    rpc_port: u16,
    genesis: Block,
    hash_genesis_block: BlockHash,
    consensus: ConsensusParams,
    flags: Flags,
    dns_seeds: &'static [DnsSeed],
    fixed_seeds: Vec<SocketAddr>,
    base58_prefixes: Base58Prefixes,
    alert_key: Vec<u8>,
    miner_threads: u32,
}

impl ChainParams {
    fn main() -> Self {
        let default_port = 22556;
        Self {
            network: Network::Main,
            data_dir: "",
            message_start: MessageStart::new([0xc0, 0xc0, 0xc0, 0xc0]),
            default_port,
            rpc_port: 22555,
            genesis: genesis_block(Network::Main),
            hash_genesis_block: compiled_hash(MAIN_GENESIS_HASH),
            consensus: ConsensusParams::mainnet(),
            flags: Flags {
                require_rpc_password: true,
                mining_requires_peers: true,
                default_check_mempool: false,
                require_standard: true,
                rpc_is_testnet: false,
                mine_blocks_on_demand: false,
            },
            dns_seeds: seeds::MAIN_DNS_SEEDS,
            fixed_seeds: seeds::fixed_seeds_from_ipv4(seeds::MAIN_FIXED_SEEDS_IPV4, default_port),
            base58_prefixes: Base58Prefixes::from_fn(|kind| match kind {
                Base58Type::PubkeyAddress => vec![30],
                Base58Type::ScriptAddress => vec![22],
                Base58Type::SecretKey => vec![158],
                Base58Type::ExtPublicKey => vec![0x02, 0xfa, 0xca, 0xfd],
                Base58Type::ExtSecretKey => vec![0x02, 0xfa, 0xc3, 0x98],
            }),
            alert_key: compiled_bytes(MAIN_ALERT_KEY),
            miner_threads: 0,
        }
    }

    fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            data_dir: "testnet3",
            message_start: MessageStart::new([0xfc, 0xc1, 0xb7, 0xdc]),
            default_port: 44556,
            rpc_port: 44555,
            genesis: genesis_block(Network::Testnet),
            hash_genesis_block: compiled_hash(TESTNET_GENESIS_HASH),
            consensus: ConsensusParams::testnet(),
            flags: Flags {
                require_rpc_password: true,
                mining_requires_peers: true,
                default_check_mempool: false,
                require_standard: false,
                rpc_is_testnet: true,
                mine_blocks_on_demand: false,
            },
            dns_seeds: seeds::TESTNET_DNS_SEEDS,
            fixed_seeds: Vec::new(),
            base58_prefixes: Base58Prefixes::from_fn(|kind| match kind {
                Base58Type::PubkeyAddress => vec![113],
                Base58Type::ScriptAddress => vec![196],
                Base58Type::SecretKey => vec![241],
                Base58Type::ExtPublicKey => vec![0x04, 0x35, 0x87, 0xcf],
                Base58Type::ExtSecretKey => vec![0x04, 0x35, 0x83, 0x94],
            }),
            alert_key: compiled_bytes(TESTNET_ALERT_KEY),
            miner_threads: 0,
        }
    }

    fn regtest() -> Self {
        Self {
            network: Network::Regtest,
            data_dir: "regtest",
            message_start: MessageStart::new([0xfa, 0xbf, 0xb5, 0xda]),
            default_port: 18444,
            rpc_port: 18332,
            genesis: genesis_block(Network::Regtest),
            hash_genesis_block: compiled_hash(REGTEST_GENESIS_HASH),
            consensus: ConsensusParams::regtest(),
            flags: Flags {
                require_rpc_password: false,
                mining_requires_peers: false,
                default_check_mempool: true,
                require_standard: false,
                rpc_is_testnet: true,
                mine_blocks_on_demand: true,
            },
            dns_seeds: &[],
            fixed_seeds: Vec::new(),
            base58_prefixes: Base58Prefixes::from_fn(|kind| match kind {
                Base58Type::PubkeyAddress => vec![111],
                Base58Type::ScriptAddress => vec![196],
                Base58Type::SecretKey => vec![239],
                Base58Type::ExtPublicKey => vec![0x04, 0x35, 0x87, 0xcf],
                Base58Type::ExtSecretKey => vec![0x04, 0x35, 0x83, 0x94],
            }),
            alert_key: compiled_bytes(TESTNET_ALERT_KEY),
            miner_threads: 1,
        }
    }

    /// Get the shared parameter set for a network
    pub fn for_network(network: Network) -> &'static ChainParams {
        match network {
            Network::Main => &*MAIN,
            Network::Testnet => &*TESTNET,
            Network::Regtest => &*REGTEST,
        }
    }

    /// Network this set belongs to
    pub fn network_id(&self) -> Network {
        self.network
    }

    /// Subdirectory of the data directory used by this network
    pub fn data_dir(&self) -> &'static str {
        self.data_dir
    }

    /// Peer-to-peer message-start marker
    pub fn message_start(&self) -> &MessageStart {
        &self.message_start
    }

    /// Default P2P port
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Default RPC port
    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Genesis block
    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    /// Expected hash of the genesis block
    pub fn hash_genesis_block(&self) -> &BlockHash {
        &self.hash_genesis_block
    }

    /// Consensus subset of the parameters
    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    /// Maximum proof-of-work target
    pub fn proof_of_work_limit(&self) -> &Uint256 {
        &self.consensus.pow_limit
    }

    /// Block subsidy reduction interval
    pub fn subsidy_halving_interval(&self) -> u32 {
        self.consensus.subsidy_halving_interval
    }

    /// Used to check majorities for block version upgrade
    pub fn enforce_block_upgrade_majority(&self) -> u32 {
        self.consensus.majority_enforce_block_upgrade
    }

    /// Outdated-version rejection threshold
    pub fn reject_block_outdated_majority(&self) -> u32 {
        self.consensus.majority_reject_block_outdated
    }

    /// Window the majority thresholds count over
    pub fn to_check_block_upgrade_majority(&self) -> u32 {
        self.consensus.majority_window
    }

    /// Retarget timespan in seconds
    pub fn target_timespan(&self) -> i64 {
        self.consensus.target_timespan
    }

    /// Block spacing in seconds
    pub fn target_spacing(&self) -> i64 {
        self.consensus.target_spacing
    }

    /// Retarget interval in blocks
    pub fn interval(&self) -> i64 {
        self.consensus.interval()
    }

    /// First DigiShield block
    pub fn digishield_fork_block(&self) -> u32 {
        self.consensus.digishield_fork_height
    }

    /// Retarget timespan with DigiShield
    pub fn digishield_target_timespan(&self) -> i64 {
        self.consensus.digishield_target_timespan
    }

    /// Retarget interval with DigiShield
    pub fn digishield_interval(&self) -> i64 {
        self.consensus.digishield_interval()
    }

    /// First block that may be merge-mined
    pub fn auxpow_start_block(&self) -> u32 {
        self.consensus.auxpow_start_height
    }

    /// Whether we allow ourself to be the auxpow parent chain
    pub fn allow_self_aux_parent(&self) -> bool {
        self.consensus.allow_self_aux_parent
    }

    /// Height from which post-DigiShield minimum-difficulty blocks are allowed
    pub fn min_difficulty_allowed_start_block(&self) -> u32 {
        self.consensus.min_difficulty_allowed_start_height
    }

    /// Allow mining of a min-difficulty block
    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.consensus.allow_min_difficulty_blocks
    }

    /// Flat subsidy schedule
    pub fn simplified_rewards(&self) -> bool {
        self.consensus.simplified_rewards
    }

    /// Make miner wait to have peers to avoid wasting work
    pub fn mining_requires_peers(&self) -> bool {
        self.flags.mining_requires_peers
    }

    /// Default value for `-checkmempool`
    pub fn default_check_mempool(&self) -> bool {
        self.flags.default_check_mempool
    }

    /// Make standard checks
    pub fn require_standard(&self) -> bool {
        self.flags.require_standard
    }

    /// RPC refuses to start without a password
    pub fn require_rpc_password(&self) -> bool {
        self.flags.require_rpc_password
    }

    /// Legacy RPC network identity
    pub fn rpc_is_testnet(&self) -> bool {
        self.flags.rpc_is_testnet
    }

    /// Make miner stop after a block is found
    pub fn mine_blocks_on_demand(&self) -> bool {
        self.flags.mine_blocks_on_demand
    }

    /// DNS seeds, in query order
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        self.dns_seeds
    }

    /// Hard-coded fallback peers
    pub fn fixed_seeds(&self) -> &[SocketAddr] {
        &self.fixed_seeds
    }

    /// Base58 version prefix for `kind`
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Full base58 prefix table
    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Raw public key for verifying broadcast alerts
    pub fn alert_key(&self) -> &[u8] {
        &self.alert_key
    }

    /// Used if mining is started with a negative thread count
    pub fn default_miner_threads(&self) -> u32 {
        self.miner_threads
    }

    /// Serializable view for display
    pub fn summary(&self) -> ParamsSummary<'_> {
        ParamsSummary {
            network: self.network,
            data_dir: self.data_dir,
            message_start: self.message_start,
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            genesis_hash: self.hash_genesis_block,
            pow_limit: self.consensus.pow_limit,
            target_timespan: self.target_timespan(),
            target_spacing: self.target_spacing(),
            interval: self.interval(),
            digishield_fork_block: self.digishield_fork_block(),
            digishield_target_timespan: self.digishield_target_timespan(),
            digishield_interval: self.digishield_interval(),
            auxpow_start_block: self.auxpow_start_block(),
            allow_self_aux_parent: self.allow_self_aux_parent(),
            min_difficulty_allowed_start_block: self.min_difficulty_allowed_start_block(),
            allow_min_difficulty_blocks: self.allow_min_difficulty_blocks(),
            simplified_rewards: self.simplified_rewards(),
            flags: self.flags,
            dns_seeds: self.dns_seeds,
            base58_prefixes: &self.base58_prefixes,
            alert_key: hex::encode(&self.alert_key),
            default_miner_threads: self.miner_threads,
        }
    }
}

/// JSON-friendly view of a [`ChainParams`]
#[derive(Debug, Serialize)]
pub struct ParamsSummary<'a> {
    network: Network,
    data_dir: &'a str,
    message_start: MessageStart,
    default_port: u16,
    rpc_port: u16,
    genesis_hash: BlockHash,
    pow_limit: Uint256,
    target_timespan: i64,
    target_spacing: i64,
    interval: i64,
    digishield_fork_block: u32,
    digishield_target_timespan: i64,
    digishield_interval: i64,
    auxpow_start_block: u32,
    allow_self_aux_parent: bool,
    min_difficulty_allowed_start_block: u32,
    allow_min_difficulty_blocks: bool,
    simplified_rewards: bool,
    #[serde(flatten)]
    flags: Flags,
    dns_seeds: &'a [DnsSeed],
    base58_prefixes: &'a Base58Prefixes,
    alert_key: String,
    default_miner_threads: u32,
}

fn compiled_hash(s: &str) -> BlockHash {
    Uint256::from_hex(s).expect("Valid compiled-in hash")
}

fn compiled_bytes(s: &str) -> Vec<u8> {
    hex::decode(s).expect("Valid compiled-in hex")
}
