//! One typed method per JSON-RPC method the node exposes.
//!
//! Each wrapper only names the method, lays out its positional parameters
//! and fixes the result type; decoding is driven by the result type's
//! `Deserialize` impl.

use crate::error::ClientError;
use crate::types::{
    Account, Block, BlockTemplate, ConsensusState, LogLevel, MempoolInfo, OutgoingTransaction,
    Peer, PeerStateCommand, PoolConnectionState, PoolTarget, SyncState, Transaction,
    TransactionList, TransactionReceipt, Wallet, WorkInstructions,
};

use super::{NimiqClient, Params};

impl NimiqClient {
    // ==========================================================================
    // Accounts
    // ==========================================================================

    /// Accounts held in the node's wallet.
    pub async fn accounts(&self) -> Result<Vec<Account>, ClientError> {
        self.call("accounts", Vec::new()).await
    }

    /// Generate a new key pair and add it to the node's wallet.
    pub async fn create_account(&self) -> Result<Wallet, ClientError> {
        self.call("createAccount", Vec::new()).await
    }

    pub async fn get_account(&self, address: &str) -> Result<Account, ClientError> {
        self.call("getAccount", Params::new().arg(address).build()?)
            .await
    }

    /// Balance in luna.
    pub async fn get_balance(&self, address: &str) -> Result<u64, ClientError> {
        self.call("getBalance", Params::new().arg(address).build()?)
            .await
    }

    // ==========================================================================
    // Blocks
    // ==========================================================================

    /// Height of the head of the main chain.
    pub async fn block_number(&self) -> Result<u32, ClientError> {
        self.call("blockNumber", Vec::new()).await
    }

    /// `full_transactions` selects full objects instead of hashes in
    /// [`Block::transactions`]; `None` leaves the choice to the node.
    pub async fn get_block_by_hash(
        &self,
        hash: &str,
        full_transactions: Option<bool>,
    ) -> Result<Block, ClientError> {
        self.call(
            "getBlockByHash",
            Params::new().arg(hash).opt(full_transactions).build()?,
        )
        .await
    }

    pub async fn get_block_by_number(
        &self,
        height: u32,
        full_transactions: Option<bool>,
    ) -> Result<Block, ClientError> {
        self.call(
            "getBlockByNumber",
            Params::new().arg(height).opt(full_transactions).build()?,
        )
        .await
    }

    /// `None` when no block has that hash.
    pub async fn get_block_transaction_count_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<u32>, ClientError> {
        self.call(
            "getBlockTransactionCountByHash",
            Params::new().arg(hash).build()?,
        )
        .await
    }

    /// `None` when no block has that height.
    pub async fn get_block_transaction_count_by_number(
        &self,
        height: u32,
    ) -> Result<Option<u32>, ClientError> {
        self.call(
            "getBlockTransactionCountByNumber",
            Params::new().arg(height).build()?,
        )
        .await
    }

    // ==========================================================================
    // Transactions
    // ==========================================================================

    /// Serialize a transaction without sending it. Returns the hex encoding.
    pub async fn create_raw_transaction(
        &self,
        transaction: &OutgoingTransaction,
    ) -> Result<String, ClientError> {
        self.call(
            "createRawTransaction",
            Params::new().arg(transaction).build()?,
        )
        .await
    }

    /// Sign and broadcast. Returns the transaction hash.
    pub async fn send_transaction(
        &self,
        transaction: &OutgoingTransaction,
    ) -> Result<String, ClientError> {
        self.call("sendTransaction", Params::new().arg(transaction).build()?)
            .await
    }

    /// Broadcast a hex-encoded signed transaction. Returns its hash.
    pub async fn send_raw_transaction(&self, transaction: &str) -> Result<String, ClientError> {
        self.call(
            "sendRawTransaction",
            Params::new().arg(transaction).build()?,
        )
        .await
    }

    /// Decode a hex-encoded transaction without broadcasting it.
    pub async fn get_raw_transaction_info(
        &self,
        transaction: &str,
    ) -> Result<Transaction, ClientError> {
        self.call(
            "getRawTransactionInfo",
            Params::new().arg(transaction).build()?,
        )
        .await
    }

    pub async fn get_transaction_by_block_hash_and_index(
        &self,
        hash: &str,
        index: u32,
    ) -> Result<Option<Transaction>, ClientError> {
        self.call(
            "getTransactionByBlockHashAndIndex",
            Params::new().arg(hash).arg(index).build()?,
        )
        .await
    }

    pub async fn get_transaction_by_block_number_and_index(
        &self,
        height: u32,
        index: u32,
    ) -> Result<Option<Transaction>, ClientError> {
        self.call(
            "getTransactionByBlockNumberAndIndex",
            Params::new().arg(height).arg(index).build()?,
        )
        .await
    }

    pub async fn get_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<Transaction>, ClientError> {
        self.call("getTransactionByHash", Params::new().arg(hash).build()?)
            .await
    }

    /// `None` until the transaction is included in a block.
    pub async fn get_transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>, ClientError> {
        self.call("getTransactionReceipt", Params::new().arg(hash).build()?)
            .await
    }

    /// Most recent transactions touching `address`; the node caps the count
    /// at 1000 and defaults it when `number_of_transactions` is `None`.
    pub async fn get_transactions_by_address(
        &self,
        address: &str,
        number_of_transactions: Option<u16>,
    ) -> Result<Vec<Transaction>, ClientError> {
        self.call(
            "getTransactionsByAddress",
            Params::new()
                .arg(address)
                .opt(number_of_transactions)
                .build()?,
        )
        .await
    }

    // ==========================================================================
    // Mempool
    // ==========================================================================

    pub async fn mempool(&self) -> Result<MempoolInfo, ClientError> {
        self.call("mempool", Vec::new()).await
    }

    /// Pending transactions, as hashes or full objects.
    pub async fn mempool_content(
        &self,
        full_transactions: Option<bool>,
    ) -> Result<TransactionList, ClientError> {
        self.call(
            "mempoolContent",
            Params::new().opt(full_transactions).build()?,
        )
        .await
    }

    /// Read, or set and return, the minimum fee per byte the node accepts.
    pub async fn min_fee_per_byte(&self, fee: Option<u64>) -> Result<u64, ClientError> {
        self.call("minFeePerByte", Params::new().opt(fee).build()?)
            .await
    }

    // ==========================================================================
    // Mining
    // ==========================================================================

    /// Build a block template. `extra_data` only travels together with an
    /// address and defaults to the empty string.
    pub async fn get_block_template(
        &self,
        address: Option<&str>,
        extra_data: Option<&str>,
    ) -> Result<BlockTemplate, ClientError> {
        self.call("getBlockTemplate", miner_params(address, extra_data)?)
            .await
    }

    /// Fetch a work package for an external miner. Same parameter rules as
    /// [`Self::get_block_template`].
    pub async fn get_work(
        &self,
        address: Option<&str>,
        extra_data: Option<&str>,
    ) -> Result<WorkInstructions, ClientError> {
        self.call("getWork", miner_params(address, extra_data)?).await
    }

    /// Hashes per second of the local miner.
    pub async fn hashrate(&self) -> Result<f64, ClientError> {
        self.call("hashrate", Vec::new()).await
    }

    pub async fn miner_address(&self) -> Result<String, ClientError> {
        self.call("minerAddress", Vec::new()).await
    }

    /// Read, or set and return, the number of miner threads.
    pub async fn miner_threads(&self, threads: Option<u32>) -> Result<u32, ClientError> {
        self.call("minerThreads", Params::new().opt(threads).build()?)
            .await
    }

    /// Read, or switch and return, whether the node is mining.
    pub async fn mining(&self, enabled: Option<bool>) -> Result<bool, ClientError> {
        self.call("mining", Params::new().opt(enabled).build()?).await
    }

    /// Submit a hex-encoded mined block.
    pub async fn submit_block(&self, block: &str) -> Result<(), ClientError> {
        self.call("submitBlock", Params::new().arg(block).build()?)
            .await
    }

    /// Read or change the mining pool. Returns the pool address, or `None`
    /// when not in a pool.
    pub async fn pool(&self, target: Option<PoolTarget>) -> Result<Option<String>, ClientError> {
        self.call("pool", Params::new().opt(target).build()?).await
    }

    /// Confirmed pool balance in luna.
    pub async fn pool_confirmed_balance(&self) -> Result<u64, ClientError> {
        self.call("poolConfirmedBalance", Vec::new()).await
    }

    pub async fn pool_connection_state(&self) -> Result<PoolConnectionState, ClientError> {
        self.call("poolConnectionState", Vec::new()).await
    }

    // ==========================================================================
    // Network
    // ==========================================================================

    pub async fn consensus(&self) -> Result<ConsensusState, ClientError> {
        self.call("consensus", Vec::new()).await
    }

    pub async fn peer_count(&self) -> Result<u32, ClientError> {
        self.call("peerCount", Vec::new()).await
    }

    pub async fn peer_list(&self) -> Result<Vec<Peer>, ClientError> {
        self.call("peerList", Vec::new()).await
    }

    /// Inspect a peer, optionally applying `command` to it first.
    pub async fn peer_state(
        &self,
        address: &str,
        command: Option<PeerStateCommand>,
    ) -> Result<Peer, ClientError> {
        self.call("peerState", Params::new().arg(address).opt(command).build()?)
            .await
    }

    pub async fn syncing(&self) -> Result<SyncState, ClientError> {
        self.call("syncing", Vec::new()).await
    }

    // ==========================================================================
    // Node
    // ==========================================================================

    /// Read, or override and return, a protocol constant.
    pub async fn constant(&self, name: &str, value: Option<i64>) -> Result<i64, ClientError> {
        self.call("constant", Params::new().arg(name).opt(value).build()?)
            .await
    }

    /// Restore a protocol constant to its default and return it.
    pub async fn reset_constant(&self, name: &str) -> Result<i64, ClientError> {
        self.call("constant", Params::new().arg(name).arg("reset").build()?)
            .await
    }

    /// Set the verbosity for log `tag` (`*` for all tags).
    pub async fn log(&self, tag: &str, level: &LogLevel) -> Result<bool, ClientError> {
        self.call("log", Params::new().arg(tag).arg(level).build()?)
            .await
    }
}

fn miner_params(
    address: Option<&str>,
    extra_data: Option<&str>,
) -> Result<Vec<serde_json::Value>, ClientError> {
    match address {
        Some(address) => Params::new()
            .arg(address)
            .arg(extra_data.unwrap_or(""))
            .build(),
        None => Ok(Vec::new()),
    }
}
