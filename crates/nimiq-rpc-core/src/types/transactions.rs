use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::AccountType;

/// A transaction as reported by the node.
///
/// Block-related members are absent for transactions still in the mempool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_index: Option<u32>,
    /// Hex-encoded sender id.
    pub from: String,
    pub from_address: String,
    /// Hex-encoded recipient id.
    pub to: String,
    pub to_address: String,
    /// Value in luna.
    pub value: u64,
    /// Fee in luna.
    pub fee: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub flags: u8,
}

/// Returned by `getTransactionReceipt` once a transaction is mined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub transaction_index: u32,
    pub block_hash: String,
    pub block_number: u32,
    pub confirmations: u32,
    pub timestamp: u64,
}

// ==============================================================================
// Transaction List
// ==============================================================================

/// Transactions of a block or of the mempool.
///
/// Whether the node sends hashes or full objects depends on the caller's
/// `fullTransactions` argument, not on anything inside the JSON, so both
/// shapes are always homogeneous. Decoding tries full objects first and, if
/// any element is not a complete transaction, re-reads the whole array as
/// hash strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TransactionList {
    Objects(Vec<Transaction>),
    Hashes(Vec<String>),
}

impl TransactionList {
    pub fn len(&self) -> usize {
        match self {
            Self::Objects(txs) => txs.len(),
            Self::Hashes(hashes) => hashes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transaction hashes in order, whichever shape was received.
    pub fn hashes(&self) -> Vec<&str> {
        match self {
            Self::Objects(txs) => txs.iter().map(|tx| tx.hash.as_str()).collect(),
            Self::Hashes(hashes) => hashes.iter().map(String::as_str).collect(),
        }
    }

    /// Full transactions, if the node sent them.
    pub fn objects(&self) -> Option<&[Transaction]> {
        match self {
            Self::Objects(txs) => Some(txs),
            Self::Hashes(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for TransactionList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<serde_json::Value>::deserialize(deserializer)?;

        let objects: Result<Vec<Transaction>, _> =
            items.iter().map(Transaction::deserialize).collect();
        if let Ok(txs) = objects {
            return Ok(Self::Objects(txs));
        }

        items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(hash) => Ok(hash),
                other => Err(D::Error::custom(format!(
                    "expected transaction object or hash string, got {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Hashes)
    }
}

// ==============================================================================
// Outgoing Transaction
// ==============================================================================

/// Transaction assembled by the caller for `sendTransaction` and
/// `createRawTransaction`. Sent as a single JSON object parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingTransaction {
    pub from: String,
    pub from_type: AccountType,
    pub to: String,
    pub to_type: AccountType,
    /// Value in luna.
    pub value: u64,
    /// Fee in luna.
    pub fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl OutgoingTransaction {
    /// A plain transfer between two basic accounts.
    pub fn basic(from: impl Into<String>, to: impl Into<String>, value: u64, fee: u64) -> Self {
        Self {
            from: from.into(),
            from_type: AccountType::Basic,
            to: to.into(),
            to_type: AccountType::Basic,
            value,
            fee,
            data: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}
