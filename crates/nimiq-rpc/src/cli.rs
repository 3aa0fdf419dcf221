use clap::{Parser, Subcommand};

use nimiq_rpc_core::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME};
use nimiq_rpc_core::ClientConfig;

/// nimiq-rpc: query a Nimiq node over JSON-RPC and print the result as JSON.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Connection scheme (`http` or `https`).
    #[arg(long, default_value = DEFAULT_SCHEME, env = "NIMIQ_RPC_SCHEME")]
    pub scheme: String,

    /// Node host name or IP address.
    #[arg(long, default_value = DEFAULT_HOST, env = "NIMIQ_RPC_HOST")]
    pub host: String,

    /// Node RPC port.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "NIMIQ_RPC_PORT")]
    pub port: u16,

    /// RPC username (empty when the node has no auth configured).
    #[arg(long, default_value = "", env = "NIMIQ_RPC_USER")]
    pub user: String,

    /// RPC password.
    #[arg(long, default_value = "", env = "NIMIQ_RPC_PASS", hide_env_values = true)]
    pub password: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Consensus, head height, peer count and sync progress (default).
    Status,
    Consensus,
    BlockNumber,
    PeerCount,
    PeerList,
    Syncing,
    Hashrate,
    Mempool,
    /// Pending transactions in the mempool.
    MempoolContent {
        /// Print full transaction objects instead of hashes.
        #[arg(long)]
        full: bool,
    },
    /// Accounts held in the node's wallet.
    Accounts,
    Account {
        address: String,
    },
    /// Balance in luna.
    Balance {
        address: String,
    },
    /// Fetch a block by height or by hash.
    Block {
        /// Block height, or a 64-character hex block hash.
        id: String,
        /// Include full transaction objects.
        #[arg(long)]
        full: bool,
    },
    Transaction {
        hash: String,
    },
    Receipt {
        hash: String,
    },
    /// Recent transactions touching an address.
    History {
        address: String,
        /// Maximum number of transactions (node caps at 1000).
        #[arg(long)]
        count: Option<u16>,
    },
    /// Broadcast a hex-encoded signed transaction.
    SendRaw {
        transaction: String,
    },
    /// Call any method with JSON-encoded positional parameters.
    Call {
        method: String,
        /// Each parameter as a JSON literal, e.g. `'"NQ.."'`, `42` or `true`.
        params: Vec<String>,
    },
}
