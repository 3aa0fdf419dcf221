//! Shared fixtures for `nimiq-rpc-core` unit tests.
//!
//! JSON payloads mirror what a testnet node returns, so type tests and
//! client tests decode the same shapes.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::NimiqClient;
use crate::config::ClientConfig;
use crate::rpc::mock::StubTransport;

// ==============================================================================
// Hashes
// ==============================================================================

pub const BLOCK_HASH: &str = "bc3945d22c9f6441409a6e539728534a4fc97859bda87333071fad9dad942786";
pub const TX_HASH_A: &str = "78957b87ab5546e11e9540ce5a37ebbf93a0ebd73c0ce05f137288f30ee9f430";
pub const TX_HASH_B: &str = "fd8e46ae55c5b8cd7cb086cf8d6c81f941a516d6148021d55f912fb2ca75cc8e";

// ==============================================================================
// Accounts
// ==============================================================================

pub fn basic_account_json() -> Value {
    json!({
        "id": "f925107376081be421f52d64bec775cc1fc20829",
        "address": "NQ33 Y4JH 0UTN 10DX 88FM 5MJB VHTM RGFU 4219",
        "balance": 0,
        "type": 0
    })
}

pub fn vesting_contract_json() -> Value {
    json!({
        "id": "ebcbf0de7dae6a42d1c12967db9b2287bf2f7f0f",
        "address": "NQ09 VF5Y 1PKV MRM4 5LE1 55KV P6R2 GXYJ XYQF",
        "balance": 52500000000000u64,
        "type": 1,
        "owner": "fd34ab7265a0e48c454ccbf4c9c61dfdf68f9a22",
        "ownerAddress": "NQ62 YLSA NUK5 L3J8 QHAC RFSC KHGV YPT8 Y6H2",
        "vestingStart": 1,
        "vestingStepBlocks": 259200,
        "vestingStepAmount": 2625000000000u64,
        "vestingTotalAmount": 52500000000000u64
    })
}

pub fn htlc_json() -> Value {
    json!({
        "id": "4974636bd6d34d52b7d4a2ee4425dc2be72a2b4e",
        "address": "NQ46 NTNU QX94 MVD0 BBT0 GXAR QUHK VGNF 39ET",
        "balance": 1000000000,
        "type": 2,
        "sender": "d62d519b3478c63bdd729cf2ccb863178060c64a",
        "senderAddress": "NQ53 SQNM 36RL F333 PPBJ KKRC RE33 2X06 1HJA",
        "recipient": "f5ad55071730d3b9f05989481eefbda7324a44f8",
        "recipientAddress": "NQ41 XNNM A1QP 639T KU2R H541 VTVV LUR4 LH7Q",
        "hashRoot": "df331b3c8f8a889703092ea05503779058b7f44e71bc57176378adde424ce922",
        "hashAlgorithm": 1,
        "hashCount": 1,
        "timeout": 1105605,
        "totalAmount": 1000000000
    })
}

// ==============================================================================
// Transactions and blocks
// ==============================================================================

/// A mined basic transaction with the given hash.
pub fn transaction_json(hash: &str) -> Value {
    json!({
        "hash": hash,
        "blockHash": BLOCK_HASH,
        "blockNumber": 11608,
        "timestamp": 1523412456,
        "confirmations": 715,
        "transactionIndex": 0,
        "from": "305dbaac7514a06dae935e40d599caf1bd8a243c",
        "fromAddress": "NQ16 61ET MB3M 2JG6 TBLK BR0D B6EA X6XQ L91U",
        "to": "ed6ef75fd3b3df1d0a3a8c1b3f4d3b8fe1eac2d5",
        "toAddress": "NQ49 VNQF EY6K NFFH S2HS HGDK XK9T HY8X RGNM",
        "value": 2636710000u64,
        "fee": 0,
        "flags": 0
    })
}

/// Block 11608 carrying `transactions` (hashes or full objects).
pub fn block_json(transactions: Value) -> Value {
    json!({
        "number": 11608,
        "hash": BLOCK_HASH,
        "pow": "00000000f51e4f4b5ecc5e9c1ff8b5ce2e7d1c9c4a4ad7e34e5fe66e5beae2d3",
        "parentHash": "e2d4b5fc2c07b1b48a0d4d9ed3f0e4c0e5f29a08df1e3ca2b7c17b2b3e8fa5a6",
        "nonce": 80215,
        "bodyHash": "4c6bba0aa8ab1eb1b3e76b5a0b6c0ad7df9d7e7c05b0e3d0c7a1f5c6e9e1c2b4",
        "accountsHash": "c3d7e0c1a8fb5a3c2e6a1c48bb24f9fce0b8d7a7b56a2e4f8c9c1d2e3f4a5b6c",
        "difficulty": "2.3736842105263158",
        "timestamp": 1523412456,
        "confirmations": 715,
        "miner": "f2f74b54b6b3a2a6cd8a3e5acab7c1b8b6d7d2e3",
        "minerAddress": "NQ68 YBTL MM5N NEHA MKCA 7QMC NDWR P2VD FLQ3",
        "extraData": "",
        "size": 344,
        "transactions": transactions
    })
}

pub fn block_template_json() -> Value {
    json!({
        "header": {
            "version": 1,
            "prevHash": "b6d0644d171957dfc5e85ec36fbb4b0f9d6a2db0a2d7f2e9a8e6d5d8e8e4b0f2",
            "interlinkHash": "3ab2bba4bbe6c2fb26f6e0b1aa4c18c7e3b8bb8b6b9b8b2e8d6a2c3b4a5d6e7f",
            "accountsHash": "4ee5f2a1d0bba6a2c7d5e1b8c3a9f6b2d7e4a1c8f5b2e9d6a3c0f7b4e1d8a5c2",
            "nBits": 503371296,
            "height": 901883
        },
        "interlink": "11ead9805a7d47ddf5152a7d06a14ea291831c3fc7af20b88240c5ae839683021bcee3e279877b3de0da8ce8878bf225f6782a2663eff9a03478c15ba839fde9f1dc3dd9e5f0cd4dbc96a30130de130eb52d8160e9197e2ccf435d8d24a09b518a5e05da87a8658ed8c02531f66a7d31757b08c88d283654ed477e5e2fec21a7ca8449241e00d620000",
        "body": {
            "hash": "17e250f1977ae85bdbe09468efef83587885419ee1074ddae54d3fb5a96e1f54",
            "minerAddr": "0000000000000000000000000000000000000000",
            "extraData": "",
            "transactions": [],
            "prunedAccounts": [],
            "merkleHashes": [
                "17e250f1977ae85bdbe09468efef83587885419ee1074ddae54d3fb5a96e1f54"
            ]
        },
        "target": 503371296
    })
}

// ==============================================================================
// Client
// ==============================================================================

/// A client wired to a stub that answers every call with `result`.
pub fn stub_client(result: Value) -> (NimiqClient, Arc<StubTransport>) {
    let config = ClientConfig {
        user: "user".into(),
        password: "password".into(),
        ..ClientConfig::default()
    };
    let stub = Arc::new(StubTransport::replying(result));
    let client = NimiqClient::with_transport(&config, stub.clone())
        .expect("default config is valid");
    (client, stub)
}
