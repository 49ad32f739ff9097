//! Genesis block data
//!
//! Just enough of the block and transaction model to describe, serialize and
//! hash a genesis block. Consumers use [`BlockHeader::block_hash`] to check a
//! genesis block against [`ChainParams::hash_genesis_block`]; nothing in this
//! crate performs that check.
//!
//! [`ChainParams::hash_genesis_block`]: crate::ChainParams::hash_genesis_block

use crate::hash::{sha256d, Uint256};
use crate::network::Network;
use chrono::{DateTime, TimeZone, Utc};

/// One coin in base units
pub const COIN: i64 = 100_000_000;

/// Sequence number of a final input
pub const MAX_SEQUENCE: u32 = 0xFFFF_FFFF;

const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_CHECKSIG: u8 = 0xac;

const GENESIS_MESSAGE: &[u8] = b"Nintondo";
const GENESIS_OUTPUT_PUBKEY: &str = "040184710fa689ad5023690c80f3a49c8f13f8d45b8c857fbcbc8bc4a8e4d3eb4b10f4d4604fa08dce601aaf0f470216fe1b51850b4acf21b179c45070ac7b03a9";
const GENESIS_REWARD: i64 = 88 * COIN;

/// Reference to a transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    /// Referenced transaction
    pub txid: Uint256,
    /// Output index
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs
    pub const fn null() -> Self {
        Self {
            txid: Uint256::ZERO,
            vout: u32::MAX,
        }
    }

    /// True for the coinbase outpoint
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    /// Spent output
    pub previous_output: OutPoint,
    /// Unlocking script
    pub script_sig: Vec<u8>,
    /// Sequence number
    pub sequence: u32,
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    /// Value in base units
    pub value: i64,
    /// Locking script
    pub script_pubkey: Vec<u8>,
}

/// Transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Format version
    pub version: i32,
    /// Inputs
    pub input: Vec<TxIn>,
    /// Outputs
    pub output: Vec<TxOut>,
    /// Lock time
    pub lock_time: u32,
}

impl Transaction {
    /// Consensus serialization
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        write_compact_size(&mut out, self.input.len() as u64);
        for txin in &self.input {
            out.extend_from_slice(&txin.previous_output.txid.to_le_bytes());
            out.extend_from_slice(&txin.previous_output.vout.to_le_bytes());
            write_bytes(&mut out, &txin.script_sig);
            out.extend_from_slice(&txin.sequence.to_le_bytes());
        }
        write_compact_size(&mut out, self.output.len() as u64);
        for txout in &self.output {
            out.extend_from_slice(&txout.value.to_le_bytes());
            write_bytes(&mut out, &txout.script_pubkey);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    /// Transaction id
    pub fn txid(&self) -> Uint256 {
        sha256d(&self.serialize())
    }

    /// True if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }
}

/// Block header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version
    pub version: i32,
    /// Hash of the previous block
    pub prev_blockhash: Uint256,
    /// Merkle root of the transactions
    pub merkle_root: Uint256,
    /// Timestamp (Unix epoch seconds)
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Nonce
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialized header size in bytes
    pub const SIZE: usize = 80;

    /// Consensus serialization
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.prev_blockhash.to_le_bytes());
        out.extend_from_slice(&self.merkle_root.to_le_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Block hash (double SHA-256 of the header)
    pub fn block_hash(&self) -> Uint256 {
        sha256d(&self.serialize())
    }

    /// Header timestamp
    pub fn time(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(i64::from(self.time), 0)
            .single()
            .unwrap_or_default()
    }
}

/// Block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Header
    pub header: BlockHeader,
    /// Transactions
    pub txdata: Vec<Transaction>,
}

impl Block {
    /// Block hash
    pub fn block_hash(&self) -> Uint256 {
        self.header.block_hash()
    }

    /// Merkle root computed from the transactions
    pub fn merkle_root(&self) -> Uint256 {
        let mut layer: Vec<Uint256> = self.txdata.iter().map(Transaction::txid).collect();
        if layer.is_empty() {
            return Uint256::ZERO;
        }
        while layer.len() > 1 {
            layer = layer
                .chunks(2)
                .map(|pair| {
                    let left = pair[0];
                    let right = pair.get(1).copied().unwrap_or(left);
                    let mut buf = Vec::with_capacity(64);
                    buf.extend_from_slice(&left.to_le_bytes());
                    buf.extend_from_slice(&right.to_le_bytes());
                    sha256d(&buf)
                })
                .collect();
        }
        layer[0]
    }

    /// True if the header commits to these transactions
    pub fn check_merkle_root(&self) -> bool {
        self.header.merkle_root == self.merkle_root()
    }
}

/// Minimal script builder for the genesis coinbase
#[derive(Debug, Default)]
struct ScriptBuilder(Vec<u8>);

impl ScriptBuilder {
    /// Push a number as a minimally encoded script integer
    fn push_num(self, n: i64) -> Self {
        let mut bytes = Vec::new();
        let negative = n < 0;
        let mut abs = n.unsigned_abs();
        while abs > 0 {
            bytes.push((abs & 0xff) as u8);
            abs >>= 8;
        }
        // the top bit of the last byte carries the sign
        if bytes.last().is_some_and(|b| b & 0x80 != 0) {
            bytes.push(if negative { 0x80 } else { 0 });
        } else if negative {
            if let Some(last) = bytes.last_mut() {
                *last |= 0x80;
            }
        }
        self.push_slice(&bytes)
    }

    fn push_slice(mut self, data: &[u8]) -> Self {
        match data.len() {
            n if n < OP_PUSHDATA1 as usize => self.0.push(n as u8),
            n if n <= 0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(n as u8);
            }
            n => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
        self
    }

    fn push_opcode(mut self, op: u8) -> Self {
        self.0.push(op);
        self
    }

    fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_bytes(out: &mut Vec<u8>, data: &[u8]) {
    write_compact_size(out, data.len() as u64);
    out.extend_from_slice(data);
}

/// The coinbase transaction shared by every network's genesis block
pub fn genesis_coinbase() -> Transaction {
    let script_sig = ScriptBuilder::default()
        .push_num(486_604_799)
        .push_num(4)
        .push_slice(GENESIS_MESSAGE)
        .into_bytes();

    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY).expect("Valid genesis output public key");
    let script_pubkey = ScriptBuilder::default()
        .push_slice(&pubkey)
        .push_opcode(OP_CHECKSIG)
        .into_bytes();

    Transaction {
        version: 1,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: MAX_SEQUENCE,
        }],
        output: vec![TxOut {
            value: GENESIS_REWARD,
            script_pubkey,
        }],
        lock_time: 0,
    }
}

/// Constructs the genesis block for a network
pub fn genesis_block(network: Network) -> Block {
    let txdata = vec![genesis_coinbase()];
    let merkle_root = txdata[0].txid();

    let (time, bits, nonce) = match network {
        Network::Main => (1_386_325_540, 0x1e0f_fff0, 99_943),
        Network::Testnet => (1_391_503_289, 0x1e0f_fff0, 997_879),
        Network::Regtest => (1_296_688_602, 0x207f_ffff, 2),
    };

    Block {
        header: BlockHeader {
            version: 1,
            prev_blockhash: Uint256::ZERO,
            merkle_root,
            time,
            bits,
            nonce,
        },
        txdata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_coinbase() {
        let tx = genesis_coinbase();

        assert!(tx.is_coinbase());
        assert_eq!(tx.version, 1);
        assert_eq!(hex::encode(&tx.input[0].script_sig), "04ffff001d0104084e696e746f6e646f");
        assert_eq!(tx.input[0].sequence, MAX_SEQUENCE);
        assert_eq!(tx.output.len(), 1);
        assert_eq!(tx.output[0].value, 88 * COIN);
        assert_eq!(tx.output[0].script_pubkey.len(), 67);
        assert_eq!(tx.output[0].script_pubkey[0], 0x41);
        assert_eq!(tx.output[0].script_pubkey[66], OP_CHECKSIG);
        assert_eq!(
            tx.txid().to_string(),
            "5b2a3f53f605d62c53e62932dac6925e3d74afa5a4b459745c36d42d0ed26a69"
        );
    }

    #[test]
    fn test_genesis_hashes() {
        let expected = [
            (Network::Main, "1a91e3dace36e2be3bf030a65679fe821aa1d6ef92e7c9902eb318182c355691"),
            (Network::Testnet, "bb0a78264637406b6360aad926284d544d7049f45189db5664f3c4d07350559e"),
            (Network::Regtest, "3d2160a3b5dc4a9d62e7e66a295f70313ac808440ef7400d6c0772171ce973a5"),
        ];
        for (network, hash) in expected {
            let block = genesis_block(network);
            assert_eq!(block.block_hash().to_string(), hash, "{network}");
            assert!(block.check_merkle_root());
        }
    }

    #[test]
    fn test_header_size_and_time() {
        let block = genesis_block(Network::Main);
        assert_eq!(block.header.serialize().len(), BlockHeader::SIZE);
        assert_eq!(block.header.time().timestamp(), 1_386_325_540);
    }

    #[test]
    fn test_push_num_encoding() {
        let script = ScriptBuilder::default().push_num(0x80).into_bytes();
        assert_eq!(script, vec![0x02, 0x80, 0x00]);
        let script = ScriptBuilder::default().push_num(-1).into_bytes();
        assert_eq!(script, vec![0x01, 0x81]);
    }

    #[test]
    fn test_merkle_root_odd_count() {
        let mut block = genesis_block(Network::Regtest);
        let tx = block.txdata[0].clone();
        block.txdata.push(tx.clone());
        block.txdata.push(tx);
        // three leaves: the last one is paired with itself
        let leaf = block.txdata[0].txid();
        let mut pair = Vec::new();
        pair.extend_from_slice(&leaf.to_le_bytes());
        pair.extend_from_slice(&leaf.to_le_bytes());
        let node = sha256d(&pair);
        let mut root = Vec::new();
        root.extend_from_slice(&node.to_le_bytes());
        root.extend_from_slice(&node.to_le_bytes());
        assert_eq!(block.merkle_root(), sha256d(&root));
    }
}
