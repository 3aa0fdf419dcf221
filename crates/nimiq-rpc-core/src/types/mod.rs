//! Typed results and inputs of the node's JSON-RPC methods.
//!
//! Most records decode field-for-field through `serde` derives. The
//! polymorphic shapes carry hand-written `Deserialize` impls:
//! [`Account`] switches on its `type` tag, [`TransactionList`] falls back
//! from full objects to hash strings, and [`MempoolInfo`] splits fixed keys
//! from numeric fee-bucket keys.

/// Declare a closed enumeration that travels as a bare JSON integer.
///
/// Unknown codes fail to decode; there is no fallback variant. Declared
/// ahead of the submodules so they pick it up by textual scope.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok(Self::$variant), )+
                    other => Err(format!(
                        concat!("unknown ", stringify!($name), " code {}"),
                        other
                    )),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }
    };
}

mod accounts;
mod blocks;
mod mempool;
mod network;
mod tokens;
mod transactions;

pub use accounts::{Account, AccountType, BasicAccount, Htlc, VestingContract, Wallet};
pub use blocks::{
    Block, BlockTemplate, BlockTemplateBody, BlockTemplateHeader, WorkInstructions,
};
pub use mempool::MempoolInfo;
pub use network::{
    Peer, PeerAddressState, PeerConnectionState, PeerStateCommand, PoolConnectionState,
    PoolTarget, SyncState, SyncStatus,
};
pub use tokens::{ConsensusState, LogLevel};
pub use transactions::{OutgoingTransaction, Transaction, TransactionList, TransactionReceipt};

