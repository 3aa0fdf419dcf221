pub mod client;
pub mod config;
pub mod error;
pub mod rpc;
pub mod types;

#[cfg(test)]
mod test_util;

pub use client::NimiqClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use rpc::{HttpTransport, Transport};
