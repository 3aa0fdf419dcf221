use serde::{Deserialize, Serialize};

coded_enum! {
    /// How the node rates a known peer address.
    pub enum PeerAddressState {
        New = 1,
        Established = 2,
        Tried = 3,
        Failed = 4,
        Banned = 5,
    }
}

coded_enum! {
    pub enum PeerConnectionState {
        New = 1,
        Connecting = 2,
        Connected = 3,
        Negotiating = 4,
        Established = 5,
        Closed = 6,
    }
}

coded_enum! {
    /// Connection to the mining pool, as reported by `poolConnectionState`.
    pub enum PoolConnectionState {
        Connected = 0,
        Connecting = 1,
        Closed = 2,
    }
}

/// Action requested through `peerState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerStateCommand {
    Connect,
    Disconnect,
    Ban,
    Unban,
}

/// A peer as listed by `peerList` / `peerState`.
///
/// Only `id`, `address` and `addressState` are guaranteed; the rest are
/// present while a connection exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub id: String,
    pub address: String,
    pub address_state: PeerAddressState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<PeerConnectionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Clock offset in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<u32>,
    /// Bytes received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx: Option<u64>,
    /// Bytes sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<u64>,
}

// ==============================================================================
// Sync
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub starting_block: u32,
    pub current_block: u32,
    pub highest_block: u32,
}

/// Result of `syncing`: `false` when idle, a progress object otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncState {
    Syncing(SyncStatus),
    Idle(bool),
}

impl SyncState {
    pub fn is_syncing(&self) -> bool {
        match self {
            Self::Syncing(_) => true,
            Self::Idle(flag) => *flag,
        }
    }

    pub fn status(&self) -> Option<&SyncStatus> {
        match self {
            Self::Syncing(status) => Some(status),
            Self::Idle(_) => None,
        }
    }
}

// ==============================================================================
// Pool
// ==============================================================================

/// Argument of `pool`: a pool address to join, or `false` to leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PoolTarget {
    Address(String),
    Enabled(bool),
}
