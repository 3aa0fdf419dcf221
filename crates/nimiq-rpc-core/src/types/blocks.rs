use serde::{Deserialize, Serialize};

use super::TransactionList;

/// A block as returned by `getBlockByHash` / `getBlockByNumber`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub number: u32,
    pub hash: String,
    pub pow: String,
    pub parent_hash: String,
    pub nonce: u64,
    pub body_hash: String,
    pub accounts_hash: String,
    /// Decimal string; may exceed every native float precision.
    pub difficulty: String,
    pub timestamp: u64,
    pub confirmations: u32,
    pub miner: String,
    pub miner_address: String,
    pub extra_data: String,
    pub size: u32,
    pub transactions: TransactionList,
}

// ==============================================================================
// Mining
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTemplateHeader {
    pub version: u16,
    pub prev_hash: String,
    pub interlink_hash: String,
    pub accounts_hash: String,
    /// Compact difficulty target.
    pub n_bits: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTemplateBody {
    pub hash: String,
    pub miner_addr: String,
    pub extra_data: String,
    /// Serialized transactions, hex-encoded.
    pub transactions: Vec<String>,
    pub pruned_accounts: Vec<String>,
    pub merkle_hashes: Vec<String>,
}

/// Unsealed block returned by `getBlockTemplate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTemplate {
    pub header: BlockTemplateHeader,
    /// Hex-encoded interlink.
    pub interlink: String,
    pub body: BlockTemplateBody,
    pub target: u64,
}

/// Work package returned by `getWork`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInstructions {
    /// Hex-encoded block header to hash.
    pub data: String,
    /// Hex-encoded block suffix (interlink and body).
    pub suffix: String,
    pub target: u64,
    /// Proof-of-work algorithm, e.g. `nimiq-argon2`.
    pub algorithm: String,
}
